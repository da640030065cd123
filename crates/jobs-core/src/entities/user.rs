//! User entity - an account that can engage with job postings

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::UserId;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// "First Last", falling back to the username when both are blank
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }

    /// Ensure the account may sign in
    pub fn ensure_active(&self) -> Result<(), DomainError> {
        if self.is_active {
            Ok(())
        } else {
            Err(DomainError::AccountInactive)
        }
    }
}

/// Registration input. The username is the email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        let email = email.into().trim().to_lowercase();
        Self {
            username: email.clone(),
            email,
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_staff: false,
        }
    }

    pub fn staff(mut self) -> Self {
        self.is_staff = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> User {
        User {
            id: UserId::new(1),
            username: "a@example.com".to_string(),
            email: "a@example.com".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            is_active: true,
            is_staff: false,
            date_joined: Utc::now(),
        }
    }

    #[test]
    fn test_username_is_email() {
        let new_user = NewUser::new(" Asha@Example.com ", "Asha", "Rao");
        assert_eq!(new_user.email, "asha@example.com");
        assert_eq!(new_user.username, new_user.email);
        assert!(!new_user.is_staff);
        assert!(new_user.staff().is_staff);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(user("Asha", "Rao").full_name(), "Asha Rao");
        assert_eq!(user("", "").full_name(), "a@example.com");
    }

    #[test]
    fn test_inactive_rejected() {
        let mut u = user("A", "B");
        assert!(u.ensure_active().is_ok());
        u.is_active = false;
        assert!(matches!(u.ensure_active(), Err(DomainError::AccountInactive)));
    }
}
