use serde::Deserialize;

use crate::error::SliResult;

/// Integration options, immutable for the duration of a request.
///
/// Every field defaults to its empty value: an unset option is interpolated
/// into the generated snippets as an empty string rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SliSettings {
    pub client_id: String,
    pub client_name: String,
    pub rac_version: String,
    pub rac_revision: String,
    pub rac: bool,
    pub conversion_tracker: bool,
    pub identifier: Identifier,
    pub debug: bool,
    pub cookie_domain: String,
    pub clear_capture_on_missing_order: bool,
}

/// Which line-item field feeds `spark.addItem`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Identifier {
    #[default]
    ProductId,
    Model,
}

impl SliSettings {
    pub fn from_file(path: &str) -> SliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        Ok(settings)
    }
}
