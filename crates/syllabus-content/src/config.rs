//! Parse and render settings.
//!
//! Settings can be built in code or loaded from TOML:
//!
//! ```toml
//! placeholder = "???"
//! section_separators = true
//! bullet_override = "-"
//! ```

use serde::{Deserialize, Serialize};
use syllabus_core::{Error, Result};

/// Settings shared by the decoders and the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Sentinel marking a blank in question text.
    pub placeholder: String,
    /// Emit a `---` line between rendered sections.
    pub section_separators: bool,
    /// Render every answer list with this bullet instead of the one found in
    /// the source. Must be `*` or `-`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_override: Option<char>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            placeholder: "???".to_string(),
            section_separators: true,
            bullet_override: None,
        }
    }
}

impl ContentConfig {
    /// Load settings from a TOML string. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the settings back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.trim().is_empty() {
            return Err(Error::config("placeholder must not be empty"));
        }
        if let Some(bullet) = self.bullet_override
            && !matches!(bullet, '*' | '-')
        {
            return Err(Error::config(format!(
                "bullet_override must be '*' or '-', got '{bullet}'"
            )));
        }
        Ok(())
    }
}
