//! Scripted interactions replayed against the demo page.
//!
//! Each step is `click:<element-id>`, `set:<element-id>=<value>` or
//! `resize:<width>`.

use std::fmt;
use std::str::FromStr;

use page::Page;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("expected `click:<id>`, `set:<id>=<value>` or `resize:<width>`, got {0:?}")]
    Malformed(String),
    #[error("invalid width {0:?}")]
    Width(String),
    #[error("no element with id {0:?}")]
    UnknownElement(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Click(String),
    SetValue { id: String, value: String },
    Resize(u32),
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || ScriptError::Malformed(raw.to_string());
        let (kind, arg) = raw.split_once(':').ok_or_else(malformed)?;
        match kind {
            "click" if !arg.is_empty() => Ok(Step::Click(arg.to_string())),
            "set" => {
                let (id, value) = arg.split_once('=').ok_or_else(malformed)?;
                if id.is_empty() {
                    return Err(malformed());
                }
                Ok(Step::SetValue {
                    id: id.to_string(),
                    value: value.to_string(),
                })
            }
            "resize" => arg
                .parse()
                .map(Step::Resize)
                .map_err(|_| ScriptError::Width(arg.to_string())),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Click(id) => write!(f, "click #{id}"),
            Step::SetValue { id, value } => write!(f, "set #{id} = {value:?}"),
            Step::Resize(width) => write!(f, "resize to {width}px"),
        }
    }
}

/// Apply one step to `page`.
pub fn apply(page: &mut Page, step: &Step, height: u32) -> Result<(), ScriptError> {
    match step {
        Step::Click(id) => {
            let node = lookup(page, id)?;
            page.click(node);
        }
        Step::SetValue { id, value } => {
            let node = lookup(page, id)?;
            page.set_field_value(node, value);
        }
        Step::Resize(width) => page.resize(*width, height),
    }
    Ok(())
}

fn lookup(page: &Page, id: &str) -> Result<dom::NodeId, ScriptError> {
    page.dom()
        .get_element_by_id(id)
        .ok_or_else(|| ScriptError::UnknownElement(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        assert_eq!("click:nav-toggle".parse::<Step>(), Ok(Step::Click("nav-toggle".into())));
        assert_eq!("resize:900".parse::<Step>(), Ok(Step::Resize(900)));
        assert_eq!(
            "set:field-name=Ana Souza".parse::<Step>(),
            Ok(Step::SetValue {
                id: "field-name".into(),
                value: "Ana Souza".into()
            })
        );
    }

    #[test]
    fn rejects_bad_steps() {
        assert!(matches!("hover:x".parse::<Step>(), Err(ScriptError::Malformed(_))));
        assert!(matches!("click:".parse::<Step>(), Err(ScriptError::Malformed(_))));
        assert!(matches!("resize".parse::<Step>(), Err(ScriptError::Malformed(_))));
        assert!(matches!("set:=x".parse::<Step>(), Err(ScriptError::Malformed(_))));
        assert_eq!("resize:wide".parse::<Step>(), Err(ScriptError::Width("wide".into())));
    }

    fn landing_page() -> Page {
        let mut page = Page::new(crate::landing::build(), page::SiteConfig::default());
        page.content_loaded(2026);
        page.resize(600, 800);
        page
    }

    fn run(page: &mut Page, steps: &[&str]) {
        for raw in steps {
            apply(page, &raw.parse().unwrap(), 800).unwrap();
        }
    }

    #[test]
    fn replays_nav_scenarios() {
        let mut page = landing_page();

        run(&mut page, &["click:nav-toggle"]);
        assert!(page.nav().unwrap().is_open());

        run(&mut page, &["click:link-cases"]);
        assert!(!page.nav().unwrap().is_open());
        assert_eq!(page.take_effects().len(), 1);

        run(&mut page, &["click:nav-toggle", "click:services"]);
        assert!(!page.nav().unwrap().is_open());

        run(&mut page, &["click:nav-toggle", "resize:900", "resize:1000"]);
        assert_eq!(page.nav().unwrap().state(), nav::PanelState::Closed);
        assert!(page.nav().unwrap().is_mirrored(page.dom()));
    }

    #[test]
    fn filled_form_opens_whatsapp() {
        let mut page = landing_page();
        run(
            &mut page,
            &["set:field-name=Ana", "set:field-phone=11 98888-7777", "click:btn-whatsapp"],
        );
        assert!(matches!(
            page.take_effects().as_slice(),
            [page::Effect::OpenUrl(url)] if url.contains("Ana")
        ));
    }

    #[test]
    fn unknown_element_is_an_error() {
        let mut page = landing_page();
        assert_eq!(
            apply(&mut page, &Step::Click("nope".into()), 800),
            Err(ScriptError::UnknownElement("nope".into()))
        );
    }
}
