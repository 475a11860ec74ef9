//! Side effects that page behaviors ask the host to perform.
//!
//! Behaviors run inside event listeners and have no access to the window,
//! so they queue an [`Effect`] and the embedder drains the outbox after each
//! dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use dom::NodeId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Smoothly scroll `node` to the top of the viewport.
    ScrollIntoView(NodeId),
    /// Open `url` in a new browsing context.
    OpenUrl(String),
    /// Show a blocking alert with the given message.
    Alert(String),
}

/// Shared, append-only queue of effects.
#[derive(Clone, Debug, Default)]
pub struct Outbox(Rc<RefCell<Vec<Effect>>>);

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, effect: Effect) {
        self.0.borrow_mut().push(effect);
    }

    /// Remove and return everything queued so far.
    pub fn take(&self) -> Vec<Effect> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_queue() {
        let outbox = Outbox::new();
        let writer = outbox.clone();
        writer.push(Effect::Alert("oi".into()));
        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox.take(), vec![Effect::Alert("oi".into())]);
        assert!(writer.is_empty());
    }
}
