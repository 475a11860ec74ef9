//! # Page Crate
//!
//! Lifecycle of one loaded page and the behaviors installed on it once its
//! content is available: year stamp, anchor smooth-scroll, navigation panel,
//! WhatsApp contact link, and the hero width repair.

#![forbid(unsafe_code)]

pub mod anchors;
pub mod config;
pub mod contact;
pub mod effects;
pub mod layout_repair;
pub mod year;

use dom::{Dom, Event, EventTargetMap, NodeId, dispatch_event};
use nav::NavHandle;
use tracing::info;

pub use config::{ContactConfig, SiteConfig, SiteConfigError};
pub use effects::{Effect, Outbox};

// ─────────────────────────────────────────────────────────────────────────────
// PageState
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    /// DOM built, no behaviors attached yet.
    Loading,
    /// Behaviors installed; events are handled.
    Interactive,
}

// ─────────────────────────────────────────────────────────────────────────────
// Page
// ─────────────────────────────────────────────────────────────────────────────

/// A page, its listeners, and the effects its behaviors have requested.
pub struct Page {
    state: PageState,
    dom: Dom,
    targets: EventTargetMap,
    config: SiteConfig,
    outbox: Outbox,
    nav: Option<NavHandle>,
}

impl Page {
    pub fn new(dom: Dom, config: SiteConfig) -> Self {
        Self {
            state: PageState::Loading,
            dom,
            targets: EventTargetMap::new(),
            config,
            outbox: Outbox::new(),
            nav: None,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The navigation panel, if this page has one.
    pub fn nav(&self) -> Option<&NavHandle> {
        self.nav.as_ref()
    }

    /// Install every behavior. Runs once; later calls return `false`.
    pub fn content_loaded(&mut self, year: i32) -> bool {
        if self.state == PageState::Interactive {
            return false;
        }

        let year_stamped = year::stamp_year(&mut self.dom, &self.config.year_element_id, year);
        let anchors = anchors::install(&self.dom, &mut self.targets, &self.outbox);
        self.nav = nav::install(&mut self.dom, &mut self.targets, &self.config.nav);
        let contact_link =
            contact::install(&self.dom, &mut self.targets, &self.config.contact, &self.outbox);
        layout_repair::install(&self.dom, &mut self.targets);

        self.state = PageState::Interactive;
        info!(
            year_stamped,
            anchors,
            nav = self.nav.is_some(),
            contact_link,
            listeners = self.targets.total(),
            "page behaviors installed"
        );
        true
    }

    /// Set the `value` of a form field, as typing into it would.
    pub fn set_field_value(&mut self, field: NodeId, value: &str) {
        self.dom.set_attribute(field, "value", value);
    }

    /// Dispatch a click at `target`. Returns `true` unless a behavior
    /// prevented the default action.
    pub fn click(&mut self, target: NodeId) -> bool {
        dispatch_event(&mut self.dom, &self.targets, target, &mut Event::click())
    }

    /// Notify the page that the viewport now measures `width` × `height`.
    pub fn resize(&mut self, width: u32, height: u32) {
        let document = self.dom.document();
        dispatch_event(
            &mut self.dom,
            &self.targets,
            document,
            &mut Event::resize(width, height),
        );
    }

    /// Drain the effects queued since the last call.
    pub fn take_effects(&self) -> Vec<Effect> {
        self.outbox.take()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
