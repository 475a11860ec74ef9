//! Navigation panel configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Viewport width (CSS pixels) above which the panel belongs to the desktop
/// layout and must not stay open.
pub const DEFAULT_BREAKPOINT: u32 = 780;

/// Element handles and thresholds for one navigation panel.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub breakpoint: u32,
    /// `id` of the Toggle Control.
    pub toggle_id: String,
    /// `id` of the Panel Element.
    pub panel_id: String,
    /// Class whose presence on the panel means "visible".
    pub visible_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            toggle_id: "nav-toggle".into(),
            panel_id: "nav-list".into(),
            visible_class: "show".into(),
        }
    }
}

impl NavConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint == 0 {
            return Err(ConfigError::ZeroBreakpoint);
        }
        for (field, value) in [
            ("toggle_id", &self.toggle_id),
            ("panel_id", &self.panel_id),
            ("visible_class", &self.visible_class),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Empty(field));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::Whitespace {
                    field,
                    value: value.clone(),
                });
            }
        }
        if self.toggle_id == self.panel_id {
            return Err(ConfigError::SameElement(self.toggle_id.clone()));
        }
        Ok(())
    }
}
