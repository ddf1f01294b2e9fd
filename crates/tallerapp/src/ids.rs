//! Auto-increment identifier allocation over in-memory collections.

use crate::model::{Tool, User};

/// Implemented by every record family that carries an integer id.
pub trait Identified {
    fn id(&self) -> u64;
}

impl Identified for User {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for Tool {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Next free identifier for a collection: `1` when empty, otherwise one
/// past the current maximum. Ids below the maximum are never reclaimed,
/// so a fresh id always exceeds every id currently in the collection.
pub fn next_id<T: Identified>(records: &[T]) -> u64 {
    records.iter().map(Identified::id).max().map_or(1, |max| max + 1)
}
