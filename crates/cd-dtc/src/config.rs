//! Decoder configuration, loadable from TOML.

use serde::Deserialize;

/// How the 4-bit third digit of a code (bits 3–0 of the high byte) is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Digit3Style {
    /// Plain decimal: values 10–15 render as two characters ("10".."15"),
    /// producing six-character codes. Matches the behaviour of the mobile
    /// app this decoder was first written for.
    #[default]
    Decimal,
    /// Single hex digit (0–9, A–F), as SAE J2012 renders it.
    Hex,
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DecoderConfig {
    #[serde(default)]
    pub digit3: Digit3Style,
}

impl DecoderConfig {
    /// Parse config from TOML text.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
