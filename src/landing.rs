//! The demo landing page: header navigation, hero, case studies, contact
//! form, footer.

use dom::{Attr, Dom, NodeId};

fn el(dom: &mut Dom, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let node = dom.create_element(
        tag,
        attrs.iter().map(|(k, v)| Attr::new(k, v)).collect(),
    );
    dom.append_child(parent, node);
    node
}

fn text(dom: &mut Dom, parent: NodeId, data: &str) {
    let node = dom.create_text(data);
    dom.append_child(parent, node);
}

pub fn build() -> Dom {
    let mut dom = Dom::new();
    let doc = dom.document();
    let html = el(&mut dom, doc, "html", &[("lang", "pt-BR")]);
    let body = el(&mut dom, html, "body", &[]);

    let header = el(&mut dom, body, "header", &[("id", "top")]);
    let toggle = el(
        &mut dom,
        header,
        "button",
        &[
            ("id", "nav-toggle"),
            ("aria-controls", "nav-list"),
            ("aria-expanded", "false"),
        ],
    );
    el(&mut dom, toggle, "span", &[("class", "bar")]);
    let list = el(&mut dom, header, "ul", &[("id", "nav-list"), ("class", "nav")]);
    for (id, href, label) in [
        ("link-services", "#services", "Serviços"),
        ("link-cases", "#cases", "Estudos de caso"),
        ("link-contact", "#contact", "Contato"),
    ] {
        let li = el(&mut dom, list, "li", &[]);
        let a = el(&mut dom, li, "a", &[("id", id), ("href", href)]);
        text(&mut dom, a, label);
    }

    let hero = el(&mut dom, body, "section", &[("id", "hero")]);
    el(
        &mut dom,
        hero,
        "div",
        &[("id", "hero-media"), ("class", "hero-right"), ("style", "width: 640px; margin: 0 auto")],
    );

    let services = el(&mut dom, body, "section", &[("id", "services")]);
    text(&mut dom, services, "Serviços");
    let cases = el(&mut dom, body, "section", &[("id", "cases")]);
    el(&mut dom, cases, "figure", &[("class", "case-figure")]);

    let contact = el(&mut dom, body, "section", &[("id", "contact")]);
    let form = el(&mut dom, contact, "form", &[("id", "contact-form")]);
    el(&mut dom, form, "input", &[("id", "field-name"), ("name", "name"), ("value", "")]);
    el(&mut dom, form, "input", &[("id", "field-phone"), ("name", "phone"), ("value", "")]);
    el(
        &mut dom,
        form,
        "textarea",
        &[("id", "field-message"), ("name", "message"), ("value", "")],
    );
    el(&mut dom, form, "button", &[("id", "btn-whatsapp"), ("type", "button")]);

    let footer = el(&mut dom, body, "footer", &[("id", "footer")]);
    let year = el(&mut dom, footer, "span", &[("id", "year")]);
    text(&mut dom, year, "2024");

    dom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_every_element_the_behaviors_look_for() {
        let dom = build();
        for id in [
            "nav-toggle",
            "nav-list",
            "year",
            "contact-form",
            "btn-whatsapp",
            "services",
            "hero-media",
        ] {
            assert!(dom.get_element_by_id(id).is_some(), "missing #{id}");
        }
    }
}
