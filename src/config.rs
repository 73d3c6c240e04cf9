//! Options shared by every generator.
//!
//! Loaded from a JSON file where every key is optional:
//!
//! ```json
//! {
//!     "fonts": { "regular": "fonts/Inter-Regular.ttf", "bold": "fonts/Inter-Bold.ttf" },
//!     "invoiceCurrency": "€",
//!     "contractCurrency": "£",
//!     "author": "Studio Nine"
//! }
//! ```

use crate::canvas::FontPair;
use crate::PDFError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// TrueType / OpenType files to embed in place of standard Helvetica
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
}

impl FontConfig {
    /// The configured faces when both are set, otherwise standard Helvetica.
    /// Fails if a configured file can't be read or parsed.
    pub fn load(&self) -> Result<FontPair, PDFError> {
        match (&self.regular, &self.bold) {
            (Some(regular), Some(bold)) => {
                log::debug!("embedding {} and {}", regular.display(), bold.display());
                FontPair::load(regular, bold)
            }
            (None, None) => Ok(FontPair::helvetica()),
            _ => {
                log::warn!("both a regular and a bold font are needed to embed fonts; using Helvetica");
                Ok(FontPair::helvetica())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub fonts: FontConfig,
    /// Written before invoice amounts
    pub invoice_currency: String,
    /// Written before contract amounts
    pub contract_currency: String,
    /// Written to the document information dictionary
    pub author: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            fonts: FontConfig::default(),
            invoice_currency: "$".to_string(),
            contract_currency: "£".to_string(),
            author: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<GeneratorConfig, PDFError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig, PDFError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded configuration from {}", path.as_ref().display());
        GeneratorConfig::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GeneratorConfig::from_json("{}").expect("valid config");
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.invoice_currency, "$");
        assert_eq!(config.contract_currency, "£");
        assert_eq!(config.author, None);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = GeneratorConfig::from_json(
            r#"{ "invoiceCurrency": "€", "fonts": { "regular": "a.ttf" } }"#,
        )
        .expect("valid config");
        assert_eq!(config.invoice_currency, "€");
        assert_eq!(config.contract_currency, "£");
        assert_eq!(config.fonts.regular, Some(PathBuf::from("a.ttf")));
        assert_eq!(config.fonts.bold, None);
    }

    #[test]
    fn malformed_config_is_a_json_error() {
        let result = GeneratorConfig::from_json(r#"{ "author": 7 }"#);
        assert!(matches!(result, Err(PDFError::Json(_))));
    }

    #[test]
    fn half_configured_fonts_fall_back_to_helvetica() {
        let fonts = FontConfig {
            regular: Some(PathBuf::from("/nonexistent/regular.ttf")),
            bold: None,
        };
        assert!(fonts.load().is_ok());
    }

    #[test]
    fn missing_font_files_are_reported() {
        let fonts = FontConfig {
            regular: Some(PathBuf::from("/nonexistent/regular.ttf")),
            bold: Some(PathBuf::from("/nonexistent/bold.ttf")),
        };
        assert!(matches!(fonts.load(), Err(PDFError::Io(_))));
    }
}
