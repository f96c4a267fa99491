use serde::{Deserialize, Serialize};
use strum::EnumString;

///
/// Locales supported by the product. `En` is the primary locale
/// every notification is required to carry.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
}

impl Locale {
    ///
    /// Parses a locale tag stored in the user directory.
    /// Unsupported tags fall back to the primary locale.
    ///
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}
