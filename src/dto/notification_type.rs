use super::NotificationCategory;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumString};

///
/// Specific event tag behind a notification. The set is closed over
/// the events the product emits today; tags produced by newer (or
/// misbehaving) event sources survive as [NotificationType::Other]
/// and are categorized as [NotificationCategory::System].
///
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationType {
    ReservationRequested,
    ReservationApproved,
    ReservationRejected,
    ReservationCancelled,
    ReservationReminder,
    PaymentReceived,
    PaymentOverdue,
    PaymentRefunded,
    AccountCreated,
    PasswordChanged,
    ProfileUpdated,
    EmailVerificationSent,
    EmailChanged,
    ClubAnnouncement,
    ClubMembershipApproved,
    ClubEventScheduled,
    SystemMaintenance,
    #[strum(default)]
    Other(String),
}

impl NotificationType {
    pub fn category(&self) -> NotificationCategory {
        match self {
            Self::ReservationRequested
            | Self::ReservationApproved
            | Self::ReservationRejected
            | Self::ReservationCancelled
            | Self::ReservationReminder => NotificationCategory::Reservation,

            Self::PaymentReceived | Self::PaymentOverdue | Self::PaymentRefunded => {
                NotificationCategory::Payment
            }

            Self::AccountCreated | Self::PasswordChanged | Self::ProfileUpdated => {
                NotificationCategory::Account
            }

            Self::EmailVerificationSent | Self::EmailChanged => NotificationCategory::Email,

            Self::ClubAnnouncement | Self::ClubMembershipApproved | Self::ClubEventScheduled => {
                NotificationCategory::Club
            }

            Self::SystemMaintenance | Self::Other(_) => NotificationCategory::System,
        }
    }
}

impl Serialize for NotificationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NotificationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_tag_parses_to_closed_variant() {
        let notification_type = "reservation_approved"
            .parse::<NotificationType>()
            .unwrap();

        assert_eq!(notification_type, NotificationType::ReservationApproved);
        assert_eq!(
            notification_type.category(),
            NotificationCategory::Reservation
        );
    }

    #[test]
    fn unknown_tag_parses_to_other() {
        let notification_type = "loyalty_points_awarded".parse::<NotificationType>().unwrap();

        assert_eq!(
            notification_type,
            NotificationType::Other("loyalty_points_awarded".to_string())
        );
    }

    #[test]
    fn unknown_tag_categorized_as_system() {
        let notification_type = NotificationType::Other("whatever".to_string());

        assert_eq!(notification_type.category(), NotificationCategory::System);
    }

    #[test]
    fn every_payment_tag_categorized_as_payment() {
        let tags = [
            NotificationType::PaymentReceived,
            NotificationType::PaymentOverdue,
            NotificationType::PaymentRefunded,
        ];

        for tag in tags {
            assert_eq!(tag.category(), NotificationCategory::Payment);
        }
    }

    #[test]
    fn serialize_uses_snake_case_tag() {
        let json = serde_json::to_string(&NotificationType::PaymentOverdue).unwrap();

        assert_eq!(json, r#""payment_overdue""#);
    }

    #[test]
    fn serialize_other_preserves_original_tag() {
        let notification_type = NotificationType::Other("loyalty_points_awarded".to_string());

        let json = serde_json::to_string(&notification_type).unwrap();

        assert_eq!(json, r#""loyalty_points_awarded""#);
    }

    #[test]
    fn deserialize_round_trip() {
        let notification_type =
            serde_json::from_str::<NotificationType>(r#""club_announcement""#).unwrap();

        assert_eq!(notification_type, NotificationType::ClubAnnouncement);
    }
}
