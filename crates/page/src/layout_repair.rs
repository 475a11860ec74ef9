//! Strips fixed pixel widths from the hero column on resize.
//!
//! Unrelated to navigation state; it only shares the `resize` event.

use dom::{Dom, EventListener, EventTargetMap};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const REPAIRED_CLASS: &str = "hero-right";

static FIXED_WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"width:\s*\d+px").expect("valid fixed-width pattern"));

/// Inline `style` with its `width` declaration removed. Other declarations
/// (including `max-width`) keep their order and text.
pub fn strip_width(style: &str) -> String {
    style
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| {
            let property = decl.split(':').next().unwrap_or_default();
            !property.trim().eq_ignore_ascii_case("width")
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Remove fixed widths from every `.hero-right` element whose inline style
/// pins one. Returns how many elements changed.
pub fn repair(dom: &mut Dom) -> usize {
    let candidates = dom.select(dom.document(), |e| {
        e.has_class(REPAIRED_CLASS) && e.attr("style").is_some_and(|s| FIXED_WIDTH.is_match(s))
    });

    let mut repaired = 0;
    for node in candidates {
        let Some(style) = dom.attribute(node, "style") else {
            continue;
        };
        let stripped = strip_width(style);
        if stripped == style {
            continue;
        }
        if stripped.is_empty() {
            dom.remove_attribute(node, "style");
        } else {
            dom.set_attribute(node, "style", &stripped);
        }
        repaired += 1;
    }
    if repaired > 0 {
        debug!(repaired, "stripped fixed inline widths");
    }
    repaired
}

/// Run [`repair`] on every resize.
pub fn install(dom: &Dom, targets: &mut EventTargetMap) {
    targets.add_listener(
        dom.document(),
        EventListener::bubble("resize", |dom, _| {
            repair(dom);
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::{Attr, Event, NodeId, dispatch_event};

    fn column(dom: &mut Dom, class: &str, style: &str) -> NodeId {
        let node = dom.create_element(
            "div",
            vec![Attr::new("class", class), Attr::new("style", style)],
        );
        let doc = dom.document();
        dom.append_child(doc, node);
        node
    }

    #[test]
    fn strip_width_keeps_other_declarations() {
        assert_eq!(strip_width("width: 640px; margin: 0 auto;"), "margin: 0 auto");
        assert_eq!(strip_width("max-width:300px;width:500px"), "max-width:300px");
        assert_eq!(strip_width("width: 640px"), "");
        assert_eq!(strip_width("color: red"), "color: red");
    }

    #[test]
    fn repairs_only_hero_right_with_pixel_width() {
        let mut dom = Dom::new();
        let hero = column(&mut dom, "hero-right", "width: 640px; padding: 8px");
        let bare = column(&mut dom, "hero-right", "width: 640px");
        let other = column(&mut dom, "hero-left", "width: 640px");
        let percent = column(&mut dom, "hero-right", "width: 50%");

        assert_eq!(repair(&mut dom), 2);
        assert_eq!(dom.attribute(hero, "style"), Some("padding: 8px"));
        assert_eq!(dom.attribute(bare, "style"), None);
        assert_eq!(dom.attribute(other, "style"), Some("width: 640px"));
        assert_eq!(dom.attribute(percent, "style"), Some("width: 50%"));
    }

    #[test]
    fn max_width_only_is_left_alone() {
        let mut dom = Dom::new();
        let node = column(&mut dom, "hero-right", "max-width: 300px");
        assert_eq!(repair(&mut dom), 0);
        assert_eq!(dom.attribute(node, "style"), Some("max-width: 300px"));
    }

    #[test]
    fn resize_triggers_repair() {
        let mut dom = Dom::new();
        let hero = column(&mut dom, "hero-right", "width: 700px");
        let mut targets = EventTargetMap::new();
        install(&dom, &mut targets);

        let doc = dom.document();
        dispatch_event(&mut dom, &targets, doc, &mut Event::resize(500, 800));

        assert_eq!(dom.attribute(hero, "style"), None);
    }
}
