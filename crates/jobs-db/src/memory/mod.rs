//! In-process entity store
//!
//! Implements every repository trait over plain collections behind one
//! `RwLock`, enforcing the same (user, job) uniqueness, cascades and
//! missing-parent errors as the PostgreSQL schema. Each operation takes the
//! lock once, so a toggle is a single atomic check-then-act.

mod repositories;
mod state;

use std::sync::Arc;

use parking_lot::RwLock;

use state::State;

/// Shared in-memory store. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like repository view over this store
    pub fn likes(&self) -> MemoryLikes {
        MemoryLikes(self.clone())
    }

    /// Bookmark repository view over this store
    pub fn bookmarks(&self) -> MemoryBookmarks {
        MemoryBookmarks(self.clone())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("MemoryStore")
            .field("users", &state.users.len())
            .field("jobs", &state.jobs.len())
            .finish_non_exhaustive()
    }
}

/// Likes stored in a [`MemoryStore`]
#[derive(Clone, Debug)]
pub struct MemoryLikes(MemoryStore);

/// Bookmarks stored in a [`MemoryStore`]
#[derive(Clone, Debug)]
pub struct MemoryBookmarks(MemoryStore);
