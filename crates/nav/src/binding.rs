//! Wiring the controller into page event dispatch.
//!
//! One controller, four listeners:
//!
//! | listener                  | node          | trigger                 |
//! |---------------------------|---------------|-------------------------|
//! | `click` (bubble)          | toggle        | toggle                  |
//! | `click` (bubble)          | panel         | link inside panel       |
//! | `click` (bubble)          | document      | outside interaction     |
//! | `resize`                  | document      | viewport widening       |
//!
//! The document listener runs last for any click inside the tree, so a click
//! that just opened the panel is seen as "in toggle" and left alone.

use std::cell::RefCell;
use std::rc::Rc;

use dom::{Dom, EventListener, EventTargetMap, NodeId};
use tracing::debug;

use crate::config::NavConfig;
use crate::controller::NavPanelController;
use crate::state::PanelState;

/// Shared handle to an installed controller.
#[derive(Clone, Debug)]
pub struct NavHandle(Rc<RefCell<NavPanelController>>);

impl NavHandle {
    pub fn state(&self) -> PanelState {
        self.0.borrow().state()
    }

    pub fn is_open(&self) -> bool {
        self.0.borrow().is_open()
    }

    pub fn is_mirrored(&self, dom: &Dom) -> bool {
        self.0.borrow().is_mirrored(dom)
    }
}

/// Mount a controller for `config` and attach its listeners.
///
/// Returns `None` (and attaches nothing) when the page has no toggle or no
/// panel.
pub fn install(
    dom: &mut Dom,
    targets: &mut EventTargetMap,
    config: &NavConfig,
) -> Option<NavHandle> {
    let controller = NavPanelController::mount(dom, config)?;
    let toggle = controller.elements().toggle;
    let panel = controller.elements().panel;
    let shared = Rc::new(RefCell::new(controller));

    let nav = shared.clone();
    targets.add_listener(
        toggle,
        EventListener::bubble("click", move |dom, _| {
            nav.borrow_mut().toggle(dom);
        }),
    );

    let nav = shared.clone();
    targets.add_listener(
        panel,
        EventListener::bubble("click", move |dom, event| {
            let Some(target) = event.target else { return };
            if link_within(dom, panel, toggle, target).is_some() {
                nav.borrow_mut().link_activated(dom);
            }
        }),
    );

    let document = dom.document();
    let nav = shared.clone();
    targets.add_listener(
        document,
        EventListener::bubble("click", move |dom, event| {
            if let Some(target) = event.target {
                nav.borrow_mut().pointer_interaction(dom, target);
            }
        }),
    );

    let nav = shared.clone();
    targets.add_listener(
        document,
        EventListener::bubble("resize", move |dom, event| {
            if let Some(width) = event.viewport_width() {
                nav.borrow_mut().viewport_resized(dom, width);
            }
        }),
    );

    debug!("navigation panel listeners attached");
    Some(NavHandle(shared))
}

/// The `<a>` element at or above `target`, provided it sits inside `panel`
/// and is not the toggle itself.
fn link_within(dom: &Dom, panel: NodeId, toggle: NodeId, target: NodeId) -> Option<NodeId> {
    dom.closest(target, |e| e.tag_name == "a")
        .filter(|&link| dom.contains(panel, link) && !dom.contains(toggle, link))
}
