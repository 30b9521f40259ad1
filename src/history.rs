//! Undo/redo stacks of reversible operations.
//!
//! Recording an edit pushes it onto the undo stack and drops every redo
//! entry. Undo moves the newest entry to the redo stack after reverting it;
//! redo moves it back after re-applying it. Nothing else touches the stacks.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

/// An edit that can be applied to, and reverted from, a target.
///
/// `apply` is the forward effect and `revert` its inverse. For any target
/// state `s` the entry was recorded against, `revert` after `apply` must
/// leave `s` unchanged.
pub trait Reversible<T: ?Sized> {
    /// Re-do this edit on `target`.
    fn apply(&self, target: &mut T);
    /// Undo this edit on `target`.
    fn revert(&self, target: &mut T);
}

/// Which of the two history stacks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stack {
    /// Applied edits.
    Undo,
    /// Undone edits.
    Redo,
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
        })
    }
}

/// History error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// Undo or redo was requested with nothing on that stack.
    #[error("nothing to {stack}")]
    EmptyStack {
        /// The stack that was empty.
        stack: Stack,
    },
}

/// Two LIFO stacks of reversible operations for one edit session.
///
/// Not synchronized: one owner drives it from one thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<Op> {
    undo: Vec<Op>,
    redo: Vec<Op>,
}

impl<Op> Default for History<Op> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Op> History<Op> {
    /// Empty history.
    pub const fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Push an edit that has already been applied, and forget every undone
    /// edit.
    pub fn record(&mut self, op: Op) {
        self.undo.push(op);
        let dropped = self.redo.len();
        self.redo.clear();
        tracing::debug!(
            undo = self.undo.len(),
            dropped_redo = dropped,
            "recorded edit"
        );
    }

    /// Revert the newest edit and move it onto the redo stack.
    pub fn undo<T: ?Sized>(&mut self, target: &mut T) -> Result<(), HistoryError>
    where
        Op: Reversible<T>,
    {
        let Some(op) = self.undo.pop() else {
            return Err(empty(Stack::Undo));
        };
        op.revert(target);
        self.redo.push(op);
        tracing::debug!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        Ok(())
    }

    /// Re-apply the most recently undone edit and move it onto the undo stack.
    pub fn redo<T: ?Sized>(&mut self, target: &mut T) -> Result<(), HistoryError>
    where
        Op: Reversible<T>,
    {
        let Some(op) = self.redo.pop() else {
            return Err(empty(Stack::Redo));
        };
        op.apply(target);
        self.undo.push(op);
        tracing::debug!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        Ok(())
    }

    /// Whether [`undo`](Self::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether [`redo`](Self::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of edits that can be undone.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of edits that can be redone.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// The edit the next undo would revert.
    pub fn peek_undo(&self) -> Option<&Op> {
        self.undo.last()
    }

    /// The edit the next redo would apply.
    pub fn peek_redo(&self) -> Option<&Op> {
        self.redo.last()
    }

    /// Undo entries, oldest first.
    pub fn undo_entries(&self) -> &[Op] {
        &self.undo
    }

    /// Redo entries, oldest first (the last one is redone next).
    pub fn redo_entries(&self) -> &[Op] {
        &self.redo
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

fn empty(stack: Stack) -> HistoryError {
    tracing::warn!(%stack, "history stack is empty");
    HistoryError::EmptyStack { stack }
}
