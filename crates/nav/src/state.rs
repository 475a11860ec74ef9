//! Navigation panel state machine.
//!
//! Two states, four triggers, no terminal state. [`transition`] is total and
//! pure; synchronizing the page happens in the controller.

// ─────────────────────────────────────────────────────────────────────────────
// PanelState
// ─────────────────────────────────────────────────────────────────────────────

/// Whether the navigation panel is currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    /// The `aria-expanded` value mirroring this state.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trigger
// ─────────────────────────────────────────────────────────────────────────────

/// Where a pointer interaction landed relative to the two collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerHit {
    pub in_panel: bool,
    pub in_toggle: bool,
}

impl PointerHit {
    /// Outside both the Panel Element and the Toggle Control.
    pub const OUTSIDE: PointerHit = PointerHit {
        in_panel: false,
        in_toggle: false,
    };

    pub fn is_outside(self) -> bool {
        !self.in_panel && !self.in_toggle
    }
}

/// An external event the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// The Toggle Control was activated.
    Toggle,
    /// A link inside the Panel Element was activated.
    PanelLink,
    /// A pointer interaction happened somewhere in the document.
    Pointer(PointerHit),
    /// The viewport was resized to `width` CSS pixels.
    Resize { width: u32 },
}

// ─────────────────────────────────────────────────────────────────────────────
// Transition function
// ─────────────────────────────────────────────────────────────────────────────

/// Next state for `state` after `trigger`, with `breakpoint` as the widest
/// viewport on which the panel may stay open.
pub fn transition(state: PanelState, trigger: Trigger, breakpoint: u32) -> PanelState {
    use PanelState::*;

    match (state, trigger) {
        (Closed, Trigger::Toggle) => Open,
        (Open, Trigger::Toggle) => Closed,
        (Open, Trigger::PanelLink) => Closed,
        (Open, Trigger::Pointer(hit)) if hit.is_outside() => Closed,
        (Open, Trigger::Resize { width }) if width > breakpoint => Closed,
        (state, _) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BP: u32 = 780;

    const ALL_TRIGGERS: [Trigger; 8] = [
        Trigger::Toggle,
        Trigger::PanelLink,
        Trigger::Pointer(PointerHit::OUTSIDE),
        Trigger::Pointer(PointerHit { in_panel: true, in_toggle: false }),
        Trigger::Pointer(PointerHit { in_panel: false, in_toggle: true }),
        Trigger::Resize { width: 600 },
        Trigger::Resize { width: 780 },
        Trigger::Resize { width: 900 },
    ];

    #[test]
    fn initial_state_is_closed() {
        assert_eq!(PanelState::default(), PanelState::Closed);
        assert_eq!(PanelState::default().aria_expanded(), "false");
    }

    #[test]
    fn toggle_twice_is_identity() {
        for start in [PanelState::Closed, PanelState::Open] {
            let once = transition(start, Trigger::Toggle, BP);
            assert_ne!(once, start);
            assert_eq!(transition(once, Trigger::Toggle, BP), start);
        }
    }

    #[test]
    fn only_toggle_opens() {
        for trigger in ALL_TRIGGERS {
            let next = transition(PanelState::Closed, trigger, BP);
            assert_eq!(next.is_open(), trigger == Trigger::Toggle, "{trigger:?}");
        }
    }

    #[test]
    fn panel_link_closes_open_panel() {
        assert_eq!(
            transition(PanelState::Open, Trigger::PanelLink, BP),
            PanelState::Closed
        );
    }

    #[test]
    fn pointer_closes_only_when_outside() {
        let open = PanelState::Open;
        assert_eq!(
            transition(open, Trigger::Pointer(PointerHit::OUTSIDE), BP),
            PanelState::Closed
        );
        for hit in [
            PointerHit { in_panel: true, in_toggle: false },
            PointerHit { in_panel: false, in_toggle: true },
            PointerHit { in_panel: true, in_toggle: true },
        ] {
            assert_eq!(transition(open, Trigger::Pointer(hit), BP), open);
        }
    }

    #[test]
    fn resize_closes_only_above_breakpoint() {
        let open = PanelState::Open;
        assert_eq!(transition(open, Trigger::Resize { width: 780 }, BP), open);
        assert_eq!(transition(open, Trigger::Resize { width: 600 }, BP), open);
        assert_eq!(
            transition(open, Trigger::Resize { width: 781 }, BP),
            PanelState::Closed
        );
    }

    #[test]
    fn custom_breakpoint_is_honored() {
        let open = PanelState::Open;
        assert_eq!(transition(open, Trigger::Resize { width: 900 }, 1024), open);
        assert_eq!(
            transition(open, Trigger::Resize { width: 1025 }, 1024),
            PanelState::Closed
        );
    }

    #[test]
    fn close_triggers_are_idempotent_when_closed() {
        for width in [0, 600, 780, 900, 1000] {
            assert_eq!(
                transition(PanelState::Closed, Trigger::Resize { width }, BP),
                PanelState::Closed
            );
        }
        assert_eq!(
            transition(PanelState::Closed, Trigger::Pointer(PointerHit::OUTSIDE), BP),
            PanelState::Closed
        );
    }
}
