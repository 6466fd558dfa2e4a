use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

/// The command_id field identifies the SMPP PDU. Request ids have the high bit
/// clear, the matching response id is the same value with the high bit set.
#[derive(FromPrimitive, IntoPrimitive)]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum CommandId {
    GenericNack = 0x8000_0000,
    BindReceiver = 0x0000_0001,
    BindReceiverResp = 0x8000_0001,
    BindTransmitter = 0x0000_0002,
    BindTransmitterResp = 0x8000_0002,
    QuerySm = 0x0000_0003,
    QuerySmResp = 0x8000_0003,
    SubmitSm = 0x0000_0004,
    SubmitSmResp = 0x8000_0004,
    DeliverSm = 0x0000_0005,
    DeliverSmResp = 0x8000_0005,
    Unbind = 0x0000_0006,
    UnbindResp = 0x8000_0006,
    ReplaceSm = 0x0000_0007,
    ReplaceSmResp = 0x8000_0007,
    CancelSm = 0x0000_0008,
    CancelSmResp = 0x8000_0008,
    BindTransceiver = 0x0000_0009,
    BindTransceiverResp = 0x8000_0009,
    // Reserved 0x0000000A - 0x8000000A
    Outbind = 0x0000_000B,
    // Reserved 0x0000000C - 0x00000014
    //          0x8000000B - 0x80000014
    EnquireLink = 0x0000_0015,
    EnquireLinkResp = 0x8000_0015,
    // Reserved 0x00000016 - 0x00000020
    //          0x80000016 - 0x80000020
    SubmitMulti = 0x0000_0021,
    SubmitMultiResp = 0x8000_0021,
    // Reserved 0x00000022 - 0x000000FF
    //          0x80000022 - 0x800000FF
    AlertNotification = 0x0000_0102,
    DataSm = 0x0000_0103,
    DataSmResp = 0x8000_0103,
    // Reserved 0x00000104 - 0x00000110
    QueryBroadcastSm = 0x0000_0111,
    QueryBroadcastSmResp = 0x8000_0111,
    BroadcastSm = 0x0000_0112,
    BroadcastSmResp = 0x8000_0112,
    CancelBroadcastSm = 0x0000_0113,
    CancelBroadcastSmResp = 0x8000_0113,
    // Everything else is reserved, or for SMPP extensions and SMSC vendors.
    #[num_enum(catch_all)]
    Unknown(u32),
}

impl CommandId {
    /// Check if this command_id represents a response PDU
    pub fn is_response(&self) -> bool {
        u32::from(*self) & 0x8000_0000 != 0
    }

    /// Returns true for ids outside the PDU catalogue
    pub fn is_unknown(&self) -> bool {
        matches!(self, CommandId::Unknown(_))
    }
}
