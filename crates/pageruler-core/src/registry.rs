//! Which page contexts already have the ruler loaded.
//!
//! Kept by the activation side. An entry is created the first time a context
//! is activated and dropped when a probe finds no ruler there (for example
//! after the page navigated away).

use std::collections::HashSet;
use std::hash::Hash;

/// What to do for an activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    /// Load the ruler into the context before toggling it.
    pub inject: bool,
}

/// Set of page contexts known to host a live ruler.
#[derive(Debug, Clone)]
pub struct ActivationRegistry<C> {
    present: HashSet<C>,
}

impl<C> Default for ActivationRegistry<C> {
    fn default() -> Self {
        Self {
            present: HashSet::new(),
        }
    }
}

impl<C: Eq + Hash> ActivationRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a liveness probe.
    pub fn record_probe(&mut self, context: C, present: bool) {
        if present {
            self.present.insert(context);
        } else {
            self.present.remove(&context);
        }
    }

    /// Handle an activation trigger for `context`.
    ///
    /// The context is marked present afterwards; a toggle is always sent.
    pub fn activate(&mut self, context: C) -> Activation {
        Activation {
            inject: self.present.insert(context),
        }
    }

    /// Drop a context, e.g. when its tab closes.
    pub fn forget(&mut self, context: &C) {
        self.present.remove(context);
    }

    pub fn is_present(&self, context: &C) -> bool {
        self.present.contains(context)
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}
