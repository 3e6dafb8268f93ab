use std::collections::VecDeque;

use crate::canvas::surface::Surface;

/// Maximum number of snapshots the undo stack retains.
pub const MAX_UNDO: usize = 20;

/// Bounded undo/redo history of full-surface snapshots.
///
/// Invariant: the back of the undo stack always equals the current committed
/// surface state, and the stack is never empty — the oldest remaining entry
/// acts as a sentinel that `undo` will not pop. When the stack outgrows its
/// capacity the oldest snapshots (sentinel included) are evicted and the
/// then-oldest survivor becomes the new floor.
pub struct History {
    undo_stack: VecDeque<Surface>,
    redo_stack: Vec<Surface>,
    capacity: usize,
}

impl History {
    /// Create a history seeded with the initial (blank) surface snapshot.
    pub fn new(capacity: usize, initial: Surface) -> Self {
        let mut undo_stack = VecDeque::with_capacity(capacity.max(1));
        undo_stack.push_back(initial);
        Self {
            undo_stack,
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a completed action: push the post-action surface and drop any
    /// redo states, evicting the oldest snapshot when over capacity.
    pub fn commit(&mut self, snapshot: Surface) {
        self.undo_stack.push_back(snapshot);
        self.redo_stack.clear();
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
    }

    /// Step back one action, restoring `surface` to the previous snapshot.
    /// A no-op (returning `false`) when only the floor state remains.
    pub fn undo(&mut self, surface: &mut Surface) -> bool {
        if self.undo_stack.len() < 2 {
            return false;
        }
        let Some(current) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(current);
        if let Some(previous) = self.undo_stack.back() {
            *surface = previous.clone();
        }
        true
    }

    /// Re-apply the most recently undone action. No-op when nothing was
    /// undone since the last commit.
    pub fn redo(&mut self, surface: &mut Surface) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        *surface = next.clone();
        self.undo_stack.push_back(next);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of retained undo snapshots, floor state included.
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }
}
