//! Smooth scrolling for in-page anchors.

use dom::{Dom, EventListener, EventTargetMap, NodeId};

use crate::effects::{Effect, Outbox};

/// Element an in-page `href` points at, if it should be smooth-scrolled.
///
/// Empty hrefs, a bare `#` and absolute `http` links are left to the default
/// navigation.
pub fn anchor_target(dom: &Dom, href: &str) -> Option<NodeId> {
    if href.is_empty() || href == "#" || href.starts_with("http") {
        return None;
    }
    let id = href.strip_prefix('#')?;
    dom.get_element_by_id(id)
}

/// Attach a click listener to every `<a href="#…">` in the document.
/// Returns the number of anchors wired.
pub fn install(dom: &Dom, targets: &mut EventTargetMap, outbox: &Outbox) -> usize {
    let anchors = dom.select(dom.document(), |e| {
        e.tag_name == "a" && e.attr("href").is_some_and(|h| h.starts_with('#'))
    });

    for &anchor in &anchors {
        let outbox = outbox.clone();
        targets.add_listener(
            anchor,
            EventListener::bubble("click", move |dom, event| {
                let Some(href) = dom.attribute(anchor, "href") else {
                    return;
                };
                if let Some(section) = anchor_target(dom, href) {
                    event.prevent_default();
                    outbox.push(Effect::ScrollIntoView(section));
                }
            }),
        );
    }
    anchors.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::{Attr, Event, dispatch_event};

    fn page() -> (Dom, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let body = dom.create_html_element("body");
        let to_contact = dom.create_element("a", vec![Attr::new("href", "#contact")]);
        let to_nowhere = dom.create_element("a", vec![Attr::new("href", "#missing")]);
        let bare = dom.create_element("a", vec![Attr::new("href", "#")]);
        let external = dom.create_element("a", vec![Attr::new("href", "https://wa.me/55")]);
        let contact = dom.create_element("section", vec![Attr::new("id", "contact")]);

        let doc = dom.document();
        dom.append_child(doc, body);
        for node in [to_contact, to_nowhere, bare, external, contact] {
            dom.append_child(body, node);
        }
        (dom, to_contact, to_nowhere, contact)
    }

    #[test]
    fn anchor_target_rules() {
        let (dom, _, _, contact) = page();
        assert_eq!(anchor_target(&dom, "#contact"), Some(contact));
        assert_eq!(anchor_target(&dom, "#missing"), None);
        assert_eq!(anchor_target(&dom, "#"), None);
        assert_eq!(anchor_target(&dom, ""), None);
        assert_eq!(anchor_target(&dom, "https://example.com#contact"), None);
        assert_eq!(anchor_target(&dom, "contact"), None);
    }

    #[test]
    fn only_fragment_links_are_wired() {
        let (dom, ..) = page();
        let mut targets = EventTargetMap::new();
        assert_eq!(install(&dom, &mut targets, &Outbox::new()), 3);
    }

    #[test]
    fn click_on_resolvable_anchor_scrolls() {
        let (mut dom, to_contact, _, contact) = page();
        let mut targets = EventTargetMap::new();
        let outbox = Outbox::new();
        install(&dom, &mut targets, &outbox);

        let allowed = dispatch_event(&mut dom, &targets, to_contact, &mut Event::click());

        assert!(!allowed);
        assert_eq!(outbox.take(), vec![Effect::ScrollIntoView(contact)]);
    }

    #[test]
    fn click_on_unresolvable_anchor_keeps_default() {
        let (mut dom, _, to_nowhere, _) = page();
        let mut targets = EventTargetMap::new();
        let outbox = Outbox::new();
        install(&dom, &mut targets, &outbox);

        let allowed = dispatch_event(&mut dom, &targets, to_nowhere, &mut Event::click());

        assert!(allowed);
        assert!(outbox.is_empty());
    }
}
