//! Store-assigned identifiers
//!
//! Every persisted record is keyed by a 64-bit integer handed out by the store
//! (a `BIGSERIAL` column in PostgreSQL). Each record kind gets its own newtype so
//! a job id can never be passed where a user id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an id from its string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw i64 value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().parse::<i64>() {
                    Ok(id) if id > 0 => Ok(Self(id)),
                    _ => Err(IdParseError::InvalidFormat),
                }
            }
        }
    };
}

define_id!(
    /// Identifier of a job posting
    JobId
);
define_id!(
    /// Identifier of a user account
    UserId
);
define_id!(
    /// Identifier of a like record
    LikeId
);
define_id!(
    /// Identifier of a comment
    CommentId
);
define_id!(
    /// Identifier of a share record
    ShareId
);
define_id!(
    /// Identifier of a bookmark
    BookmarkId
);
