///
/// Frame queued on a user's live channel, already encoded so every
/// connection of the same user shares one payload.
///
#[derive(Debug)]
pub struct Message {
    pub payload: String,
}
