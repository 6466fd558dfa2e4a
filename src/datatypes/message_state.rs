use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

/// State of a previously submitted message, as reported by query_sm_resp
#[derive(FromPrimitive, IntoPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum MessageState {
    Scheduled = 0,
    Enroute = 1,
    Delivered = 2,
    Expired = 3,
    Deleted = 4,
    Undeliverable = 5,
    Accepted = 6,
    Unknown = 7,
    Rejected = 8,
    Skipped = 9,
    #[num_enum(catch_all)]
    Other(u8),
}

impl MessageState {
    /// Returns true once the message can no longer change state
    pub fn is_final(&self) -> bool {
        !matches!(
            self,
            MessageState::Scheduled | MessageState::Enroute | MessageState::Accepted
        )
    }
}

impl Default for MessageState {
    fn default() -> Self {
        MessageState::Scheduled
    }
}

crate::macros::octet_field!(MessageState);
