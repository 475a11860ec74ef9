//! DOM Event system.
//!
//! Implements the W3C DOM event dispatch algorithm:
//!   1. Build the propagation path from target to root.
//!   2. **Capture phase** — walk root → target.parent, invoke capture listeners.
//!   3. **At-target phase** — invoke both capture and bubble listeners on target.
//!   4. **Bubble phase** — walk target.parent → root, invoke bubble listeners.
//!
//! Listeners receive `&mut Dom`, so a handler can mutate the page it is
//! reacting to. There is no separate window object: window-level events such
//! as `resize` are dispatched at the document node.

use std::collections::HashMap;
use std::rc::Rc;

use crate::node::NodeId;
use crate::tree::Dom;

// ---------------------------------------------------------------------------
// Event phase
// ---------------------------------------------------------------------------

/// Which phase of the dispatch algorithm is currently executing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPhase {
    None,
    Capturing,
    AtTarget,
    Bubbling,
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// Extra payload carried by some event types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventDetail {
    None,
    /// New inner size of the viewport, in CSS pixels.
    Resize { width: u32, height: u32 },
}

/// A DOM event that can be dispatched through the tree.
#[derive(Clone, Debug)]
pub struct Event {
    /// Event type name (e.g. `"click"`, `"resize"`).
    pub type_: String,

    /// The node the event was originally dispatched on.
    pub target: Option<NodeId>,

    /// The node whose listeners are currently being invoked.
    pub current_target: Option<NodeId>,

    pub phase: EventPhase,
    pub bubbles: bool,
    pub cancelable: bool,
    pub detail: EventDetail,

    /// Set to `true` when `prevent_default()` is called.
    pub default_prevented: bool,
    pub propagation_stopped: bool,
    pub immediate_propagation_stopped: bool,
}

impl Event {
    /// Create a new event with the given type and behaviour flags.
    pub fn new(type_: &str, bubbles: bool, cancelable: bool) -> Self {
        Self {
            type_: type_.to_string(),
            target: None,
            current_target: None,
            phase: EventPhase::None,
            bubbles,
            cancelable,
            detail: EventDetail::None,
            default_prevented: false,
            propagation_stopped: false,
            immediate_propagation_stopped: false,
        }
    }

    /// A pointer activation: bubbles and is cancelable.
    pub fn click() -> Self {
        Self::new("click", true, true)
    }

    /// A viewport resize notification. Does not bubble.
    pub fn resize(width: u32, height: u32) -> Self {
        let mut event = Self::new("resize", false, false);
        event.detail = EventDetail::Resize { width, height };
        event
    }

    /// Viewport width carried by a resize event.
    pub fn viewport_width(&self) -> Option<u32> {
        match self.detail {
            EventDetail::Resize { width, .. } => Some(width),
            EventDetail::None => None,
        }
    }

    /// Prevent the default action for this event.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop the event from propagating to subsequent nodes, but allow all
    /// listeners on the *current* node to finish.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stop *all* further processing — no more listeners, no more nodes.
    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_propagation_stopped = true;
    }
}

// ---------------------------------------------------------------------------
// Listener
// ---------------------------------------------------------------------------

/// Type-erased callback. `Rc` so the dispatch loop can snapshot listeners
/// while handing `&mut Dom` to each one.
type ListenerCallback = Rc<dyn Fn(&mut Dom, &mut Event)>;

/// A single event listener attached to a node.
#[derive(Clone)]
pub struct EventListener {
    pub type_: String,
    /// If `true` this listener fires during the capture phase; otherwise during
    /// the bubble phase.
    pub capture: bool,
    callback: ListenerCallback,
}

impl EventListener {
    pub fn new<F>(type_: &str, capture: bool, callback: F) -> Self
    where
        F: Fn(&mut Dom, &mut Event) + 'static,
    {
        Self {
            type_: type_.to_string(),
            capture,
            callback: Rc::new(callback),
        }
    }

    /// Shorthand for a bubble-phase listener.
    pub fn bubble<F>(type_: &str, callback: F) -> Self
    where
        F: Fn(&mut Dom, &mut Event) + 'static,
    {
        Self::new(type_, false, callback)
    }

    pub fn invoke(&self, dom: &mut Dom, event: &mut Event) {
        (self.callback)(dom, event);
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener")
            .field("type_", &self.type_)
            .field("capture", &self.capture)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// EventTarget map (lives alongside the Dom)
// ---------------------------------------------------------------------------

/// Stores event listeners for every node that has at least one.
#[derive(Debug, Default)]
pub struct EventTargetMap {
    listeners: HashMap<NodeId, Vec<EventListener>>,
}

impl EventTargetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener on `node`.
    pub fn add_listener(&mut self, node: NodeId, listener: EventListener) {
        self.listeners.entry(node).or_default().push(listener);
    }

    /// Total number of listeners across all nodes.
    pub fn total(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Snapshot of the listeners on `node` that match `type_`.
    fn matching_listeners(&self, node: NodeId, type_: &str) -> Vec<EventListener> {
        self.listeners
            .get(&node)
            .map(|list| list.iter().filter(|l| l.type_ == type_).cloned().collect())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Dispatch algorithm
// ---------------------------------------------------------------------------

/// Dispatch `event` at `target` (capture → at-target → bubble).
///
/// The propagation path is fixed before the first listener runs; tree
/// mutations made by listeners do not change it.
///
/// Returns `true` if the default action was *not* prevented.
pub fn dispatch_event(
    dom: &mut Dom,
    targets: &EventTargetMap,
    target: NodeId,
    event: &mut Event,
) -> bool {
    event.target = Some(target);

    // [root, …, parent]; ancestors() is parent-first.
    let mut path: Vec<NodeId> = dom.ancestors(target);
    path.reverse();

    event.phase = EventPhase::Capturing;
    for &node in &path {
        if event.propagation_stopped {
            break;
        }
        invoke_listeners(dom, targets, node, event, true);
    }

    if !event.propagation_stopped {
        event.phase = EventPhase::AtTarget;
        event.current_target = Some(target);
        for listener in &targets.matching_listeners(target, &event.type_) {
            if event.immediate_propagation_stopped {
                break;
            }
            listener.invoke(dom, event);
        }
    }

    if event.bubbles && !event.propagation_stopped {
        event.phase = EventPhase::Bubbling;
        for &node in path.iter().rev() {
            if event.propagation_stopped {
                break;
            }
            invoke_listeners(dom, targets, node, event, false);
        }
    }

    event.phase = EventPhase::None;
    event.current_target = None;

    !event.default_prevented
}

/// Invoke the listeners on `node` that match the event type and phase.
fn invoke_listeners(
    dom: &mut Dom,
    targets: &EventTargetMap,
    node: NodeId,
    event: &mut Event,
    capture_phase: bool,
) {
    event.current_target = Some(node);
    for listener in &targets.matching_listeners(node, &event.type_) {
        if event.immediate_propagation_stopped {
            break;
        }
        if listener.capture != capture_phase {
            continue;
        }
        listener.invoke(dom, event);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
