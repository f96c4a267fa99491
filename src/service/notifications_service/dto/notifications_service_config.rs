use strum::EnumString;

pub struct NotificationsServiceConfig {
    pub success_policy: SuccessPolicy,
}

///
/// How a batch send aggregates per-recipient outcomes into the
/// report's `success` flag. [SuccessPolicy::AnySuccess] matches the
/// product's historical behavior; stricter callers can opt into
/// [SuccessPolicy::AllSuccess].
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SuccessPolicy {
    #[default]
    AnySuccess,
    AllSuccess,
}
