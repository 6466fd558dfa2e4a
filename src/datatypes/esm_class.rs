// ABOUTME: SMPP esm_class bitfield carrying messaging mode, message type and GSM feature flags
// ABOUTME: Its UDHI bit tells the short message codec that a user data header precedes the text

use crate::codec::{CodecError, Field, FieldContext, decode_u8, encode_u8};
use bytes::BytesMut;
use serde::Serialize;
use std::fmt;
use std::io::Cursor;

/// Messaging mode, bits 1-0
pub const MODE_DEFAULT: u8 = 0b00;
pub const MODE_DATAGRAM: u8 = 0b01;
pub const MODE_FORWARD: u8 = 0b10;
pub const MODE_STORE_AND_FORWARD: u8 = 0b11;

/// Message type, bits 5-2
pub const TYPE_DEFAULT: u8 = 0b0000;
pub const TYPE_DELIVERY_RECEIPT: u8 = 0b0001;
pub const TYPE_DELIVERY_ACK: u8 = 0b0010;
pub const TYPE_USER_ACK: u8 = 0b0100;
pub const TYPE_CONVERSATION_ABORT: u8 = 0b0110;
pub const TYPE_INTERMEDIATE_NOTIFICATION: u8 = 0b1000;

/// ESM (External Short Message) class octet
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub struct EsmClass {
    /// Bits 1-0
    pub message_mode: u8,
    /// Bits 5-2
    pub message_type: u8,
    /// Bit 6: short message begins with a user data header
    pub udh_indicator: bool,
    /// Bit 7
    pub reply_path: bool,
}

impl EsmClass {
    pub fn new(message_mode: u8, message_type: u8) -> Self {
        Self {
            message_mode: message_mode & 0b11,
            message_type: message_type & 0b1111,
            ..Self::default()
        }
    }

    /// Adds UDHI (User Data Header Indicator) feature
    pub fn with_udhi(mut self) -> Self {
        self.udh_indicator = true;
        self
    }

    /// Adds reply path feature
    pub fn with_reply_path(mut self) -> Self {
        self.reply_path = true;
        self
    }

    /// Returns true for a delivery receipt carried in deliver_sm
    pub fn is_delivery_receipt(&self) -> bool {
        self.message_type == TYPE_DELIVERY_RECEIPT
    }

    pub fn to_byte(&self) -> u8 {
        (self.message_mode & 0b11)
            | (self.message_type & 0b1111) << 2
            | u8::from(self.udh_indicator) << 6
            | u8::from(self.reply_path) << 7
    }

    pub fn from_byte(value: u8) -> Self {
        Self {
            message_mode: value & 0b11,
            message_type: value >> 2 & 0b1111,
            udh_indicator: value >> 6 & 0b1 == 1,
            reply_path: value >> 7 & 0b1 == 1,
        }
    }
}

/// One octet on the wire. Decoding and encoding both publish the UDHI bit to
/// the fields that follow.
impl Field for EsmClass {
    fn encode_field(&self, buf: &mut BytesMut, ctx: &mut FieldContext) -> Result<(), CodecError> {
        ctx.udh_indicator = self.udh_indicator;
        encode_u8(buf, self.to_byte());
        Ok(())
    }

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        ctx: &mut FieldContext,
    ) -> Result<(), CodecError> {
        *self = Self::from_byte(decode_u8(buf)?);
        ctx.udh_indicator = self.udh_indicator;
        Ok(())
    }
}

impl fmt::Display for EsmClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.message_mode {
            MODE_DEFAULT => "Default",
            MODE_DATAGRAM => "Datagram",
            MODE_FORWARD => "Forward",
            _ => "Store and Forward",
        };
        write!(f, "{mode}, type {:04b}", self.message_type)?;
        if self.udh_indicator {
            write!(f, ", UDHI")?;
        }
        if self.reply_path {
            write!(f, ", Reply Path")?;
        }
        Ok(())
    }
}

impl fmt::Debug for EsmClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EsmClass({:08b})", self.to_byte())
    }
}

impl From<u8> for EsmClass {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<EsmClass> for u8 {
    fn from(esm_class: EsmClass) -> Self {
        esm_class.to_byte()
    }
}
