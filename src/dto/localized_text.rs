use super::Locale;
use serde::{Deserialize, Serialize};

///
/// Parallel translations of a single title/message field.
/// Only the `en` variant is mandatory; empty variants fall
/// back to `en` when the text is resolved at read time.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default)]
    pub es: String,
    #[serde(default)]
    pub fr: String,
}

impl LocalizedText {
    pub fn resolve(&self, locale: Locale) -> &str {
        let variant = match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
            Locale::Fr => &self.fr,
        };

        match variant.is_empty() {
            true => &self.en,
            false => variant,
        }
    }
}
