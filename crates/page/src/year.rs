//! Footer copyright year.

use dom::Dom;

/// Write `year` as the text of the element with id `element_id`.
/// Returns `false` if the page has no such element.
pub fn stamp_year(dom: &mut Dom, element_id: &str, year: i32) -> bool {
    let Some(node) = dom.get_element_by_id(element_id) else {
        return false;
    };
    dom.set_text_content(node, &year.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::Attr;

    #[test]
    fn replaces_placeholder_text() {
        let mut dom = Dom::new();
        let footer = dom.create_html_element("footer");
        let span = dom.create_element("span", vec![Attr::new("id", "year")]);
        let placeholder = dom.create_text("2023");
        let doc = dom.document();
        dom.append_child(doc, footer);
        dom.append_child(footer, span);
        dom.append_child(span, placeholder);

        assert!(stamp_year(&mut dom, "year", 2026));
        assert_eq!(dom.text_content(span), "2026");
    }

    #[test]
    fn missing_element_is_noop() {
        let mut dom = Dom::new();
        assert!(!stamp_year(&mut dom, "year", 2026));
        assert_eq!(dom.len(), 1);
    }
}
