use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

///
/// Coarse grouping of notification types, stored alongside every
/// notification so the UI can filter without knowing each type.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Account,
    Reservation,
    Payment,
    System,
    Email,
    Club,
}

impl NotificationCategory {
    ///
    /// Parses a category stored in the database. Values written by
    /// older versions of the product that no longer map to a known
    /// category are treated as [NotificationCategory::System].
    ///
    pub fn parse_or_system(value: &str) -> Self {
        value.parse().unwrap_or(NotificationCategory::System)
    }
}
