// ABOUTME: SMPP registered_delivery octet selecting receipts, SME acknowledgements and notifications
// ABOUTME: Every bit is kept, including the reserved high bits, so decoded PDUs re-encode unchanged

use serde::Serialize;
use std::fmt;

/// MC delivery receipt requests, bits 1-0
pub const RECEIPT_NONE: u8 = 0b00;
pub const RECEIPT_ON_SUCCESS_OR_FAILURE: u8 = 0b01;
pub const RECEIPT_ON_FAILURE: u8 = 0b10;
pub const RECEIPT_ON_SUCCESS: u8 = 0b11;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub struct RegisteredDelivery {
    /// Bits 1-0
    pub mc_delivery_receipt: u8,
    /// Bits 3-2
    pub sme_originated_ack: u8,
    /// Bit 4
    pub intermediate_notification: bool,
    /// Bits 7-5
    pub reserved: u8,
}

impl RegisteredDelivery {
    /// Requests a delivery receipt on success or failure
    pub fn receipt() -> Self {
        Self {
            mc_delivery_receipt: RECEIPT_ON_SUCCESS_OR_FAILURE,
            ..Self::default()
        }
    }

    pub fn to_byte(&self) -> u8 {
        (self.mc_delivery_receipt & 0b11)
            | (self.sme_originated_ack & 0b11) << 2
            | u8::from(self.intermediate_notification) << 4
            | (self.reserved & 0b111) << 5
    }

    pub fn from_byte(value: u8) -> Self {
        Self {
            mc_delivery_receipt: value & 0b11,
            sme_originated_ack: value >> 2 & 0b11,
            intermediate_notification: value >> 4 & 0b1 == 1,
            reserved: value >> 5 & 0b111,
        }
    }
}

impl fmt::Debug for RegisteredDelivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegisteredDelivery({:08b})", self.to_byte())
    }
}

impl From<u8> for RegisteredDelivery {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<RegisteredDelivery> for u8 {
    fn from(registered_delivery: RegisteredDelivery) -> Self {
        registered_delivery.to_byte()
    }
}

crate::macros::octet_field!(RegisteredDelivery);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_layout() {
        let rd = RegisteredDelivery {
            mc_delivery_receipt: RECEIPT_ON_FAILURE,
            sme_originated_ack: 0b11,
            intermediate_notification: true,
            reserved: 0b101,
        };
        assert_eq!(rd.to_byte(), 0b1011_1110);
        assert_eq!(RegisteredDelivery::from_byte(0b1011_1110), rd);
        assert_eq!(RegisteredDelivery::receipt().to_byte(), 0x01);
    }

    #[test]
    fn every_octet_roundtrips() {
        for value in 0..=u8::MAX {
            assert_eq!(RegisteredDelivery::from(value).to_byte(), value);
        }
    }
}
