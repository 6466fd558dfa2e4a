// ABOUTME: Defines the priority_flag octet of submit_sm, deliver_sm, submit_multi and broadcast_sm
// ABOUTME: Levels above 3 are reserved but kept verbatim so decoded PDUs re-encode unchanged

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

/// Priority level assigned to a message by the originating SME.
///
/// Networks interpret the levels differently; for GSM anything above
/// Level0 marks a priority message.
#[derive(FromPrimitive, IntoPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum PriorityFlag {
    /// Lowest priority (default)
    Level0 = 0,
    Level1 = 1,
    Level2 = 2,
    /// Highest priority
    Level3 = 3,
    #[num_enum(catch_all)]
    Reserved(u8),
}

impl Default for PriorityFlag {
    fn default() -> Self {
        PriorityFlag::Level0
    }
}

crate::macros::octet_field!(PriorityFlag);
