//! Site configuration, loaded from TOML.
//!
//! ```toml
//! year_element_id = "year"
//!
//! [nav]
//! breakpoint = 780
//! toggle_id = "nav-toggle"
//! panel_id = "nav-list"
//! visible_class = "show"
//!
//! [contact]
//! whatsapp_number = "5511999999999"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above.

use std::fs;
use std::path::{Path, PathBuf};

use nav::NavConfig;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum SiteConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid [nav] section: {0}")]
    Nav(#[from] nav::ConfigError),
    #[error("whatsapp_number must be digits only, got {0:?}")]
    WhatsappNumber(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub button_id: String,
    /// International number without `+`, as wa.me expects.
    pub whatsapp_number: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".into(),
            button_id: "btn-whatsapp".into(),
            whatsapp_number: "5511999999999".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub year_element_id: String,
    pub nav: NavConfig,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            year_element_id: "year".into(),
            nav: NavConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, SiteConfigError> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SiteConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| SiteConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), SiteConfigError> {
        self.nav.validate()?;
        let number = &self.contact.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(SiteConfigError::WhatsappNumber(number.clone()));
        }
        Ok(())
    }
}
