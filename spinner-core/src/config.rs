//! Spinner configuration.
//!
//! Every field has a default matching the stylesheet shipped with the admin
//! pages, so an empty JSON object (or no config at all) yields a working
//! setup. Pages override fields through a `<meta>` tag whose `content` is a
//! JSON object, see [`CONFIG_META_NAME`].

use crate::error::{Result, SpinnerError};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// `name` attribute of the `<meta>` tag carrying a JSON config.
pub const CONFIG_META_NAME: &str = "admin-spinner-config";

/// Reserved DOM id of the overlay root.
pub const DEFAULT_ELEMENT_ID: &str = "admin-spinner";
/// Class of the full-page overlay layer.
pub const DEFAULT_OVERLAY_CLASS: &str = "spinner-overlay";
/// Class of the rotating indicator.
pub const DEFAULT_SPINNER_CLASS: &str = "spinner";
/// Tag name a submit target must carry to trigger the overlay.
pub const DEFAULT_FORM_TAG: &str = "FORM";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinnerConfig {
    /// Id used both to create and to locate the overlay
    pub element_id: String,
    pub overlay_class: String,
    pub spinner_class: String,
    /// Compared exactly against `Element.tagName` of submit targets
    pub form_tag: String,
    /// Also hide on `pagehide`, not just when the tab becomes hidden
    pub hide_on_page_hide: bool,
    pub log_level: LevelFilter,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            overlay_class: DEFAULT_OVERLAY_CLASS.to_string(),
            spinner_class: DEFAULT_SPINNER_CLASS.to_string(),
            form_tag: DEFAULT_FORM_TAG.to_string(),
            hide_on_page_hide: false,
            log_level: LevelFilter::Info,
        }
    }
}

impl SpinnerConfig {
    /// Parse a JSON object and validate the result.
    ///
    /// Missing fields fall back to their defaults; unknown fields are
    /// rejected so a typo in a page template does not pass silently.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SpinnerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that ids and class names are usable as single DOM tokens.
    pub fn validate(&self) -> Result<()> {
        check_token("element_id", &self.element_id)?;
        check_token("overlay_class", &self.overlay_class)?;
        check_token("spinner_class", &self.spinner_class)?;
        check_token("form_tag", &self.form_tag)?;
        Ok(())
    }
}

fn check_token(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SpinnerError::InvalidConfig(format!("`{field}` must not be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(SpinnerError::InvalidConfig(format!(
            "`{field}` must not contain whitespace: {value:?}"
        )));
    }
    Ok(())
}
