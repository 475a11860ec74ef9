//! The navigation panel controller.
//!
//! Owns the panel's [`PanelState`] and is the only writer of its two
//! mirrors on the page: the visible class on the Panel Element and
//! `aria-expanded` on the Toggle Control.

use dom::{Dom, NodeId};
use tracing::debug;

use crate::config::NavConfig;
use crate::state::{PanelState, PointerHit, Trigger, transition};

const ARIA_EXPANDED: &str = "aria-expanded";

/// Handles to the two collaborators, resolved once at mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavElements {
    pub toggle: NodeId,
    pub panel: NodeId,
    pub visible_class: String,
}

#[derive(Debug)]
pub struct NavPanelController {
    state: PanelState,
    breakpoint: u32,
    elements: NavElements,
}

impl NavPanelController {
    /// Resolve the collaborators named by `config` and synchronize the page
    /// to the initial `Closed` state.
    ///
    /// Returns `None` when either element is missing from the document; the
    /// page simply has no navigation panel then.
    pub fn mount(dom: &mut Dom, config: &NavConfig) -> Option<Self> {
        let toggle = dom.get_element_by_id(&config.toggle_id);
        let panel = dom.get_element_by_id(&config.panel_id);
        let (Some(toggle), Some(panel)) = (toggle, panel) else {
            debug!(
                toggle = %config.toggle_id,
                panel = %config.panel_id,
                found_toggle = toggle.is_some(),
                found_panel = panel.is_some(),
                "navigation panel not mounted"
            );
            return None;
        };

        let controller = Self::with_elements(
            dom,
            NavElements {
                toggle,
                panel,
                visible_class: config.visible_class.clone(),
            },
            config.breakpoint,
        );
        debug!(?toggle, ?panel, breakpoint = config.breakpoint, "navigation panel mounted");
        Some(controller)
    }

    /// Build a controller over already-resolved elements.
    pub fn with_elements(dom: &mut Dom, elements: NavElements, breakpoint: u32) -> Self {
        let controller = Self {
            state: PanelState::Closed,
            breakpoint,
            elements,
        };
        controller.sync(dom);
        controller
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn elements(&self) -> &NavElements {
        &self.elements
    }

    // ── triggers ────────────────────────────────────────────────────────────

    /// The Toggle Control was activated.
    pub fn toggle(&mut self, dom: &mut Dom) -> bool {
        self.apply(dom, Trigger::Toggle)
    }

    /// A link inside the panel was activated.
    pub fn link_activated(&mut self, dom: &mut Dom) -> bool {
        self.apply(dom, Trigger::PanelLink)
    }

    /// A pointer interaction landed on `target`. Targets inside the panel or
    /// the Toggle Control never count as outside.
    pub fn pointer_interaction(&mut self, dom: &mut Dom, target: NodeId) -> bool {
        let hit = self.hit(dom, target);
        self.apply(dom, Trigger::Pointer(hit))
    }

    /// The viewport was resized to `width`.
    pub fn viewport_resized(&mut self, dom: &mut Dom, width: u32) -> bool {
        self.apply(dom, Trigger::Resize { width })
    }

    // ── internals ───────────────────────────────────────────────────────────

    fn hit(&self, dom: &Dom, target: NodeId) -> PointerHit {
        PointerHit {
            in_panel: dom.contains(self.elements.panel, target),
            in_toggle: dom.contains(self.elements.toggle, target),
        }
    }

    /// Run one transition. Returns `true` if the state changed.
    fn apply(&mut self, dom: &mut Dom, trigger: Trigger) -> bool {
        let next = transition(self.state, trigger, self.breakpoint);
        if next == self.state {
            return false;
        }
        debug!(from = ?self.state, to = ?next, ?trigger, "navigation panel transition");
        self.state = next;
        self.sync(dom);
        true
    }

    /// Write the state into both mirrors.
    fn sync(&self, dom: &mut Dom) {
        let NavElements {
            toggle,
            panel,
            visible_class,
        } = &self.elements;
        dom.set_class(*panel, visible_class, self.state.is_open());
        dom.set_attribute(*toggle, ARIA_EXPANDED, self.state.aria_expanded());
    }

    /// `true` if the page currently agrees with the controller's state.
    pub fn is_mirrored(&self, dom: &Dom) -> bool {
        let visible = dom.has_class(self.elements.panel, &self.elements.visible_class);
        let expanded = dom.attribute(self.elements.toggle, ARIA_EXPANDED);
        visible == self.is_open() && expanded == Some(self.state.aria_expanded())
    }
}
