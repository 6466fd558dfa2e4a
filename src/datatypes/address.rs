// ABOUTME: SMPP address triples (TON, NPI, address) and the submit_multi address lists
// ABOUTME: Covers destination lists with SME and distribution list entries and unsuccessful delivery records

use crate::codec::{
    CodecError, Field, FieldContext, decode_cstring, decode_u8, decode_u32, encode_cstring,
    encode_u8, encode_u32,
};
use crate::datatypes::{CommandStatus, NumericPlanIndicator, TypeOfNumber};
use bytes::BytesMut;
use serde::Serialize;
use std::fmt;
use std::io::Cursor;

/// Destination flag of an SME address entry
pub const DEST_FLAG_SME_ADDRESS: u8 = 1;
/// Destination flag of a distribution list entry
pub const DEST_FLAG_DISTRIBUTION_LIST: u8 = 2;

/// Lists are prefixed with a one octet count
const MAX_LIST_ITEMS: usize = 0xFF;

/// An address with its Type of Number and Numbering Plan Indicator
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug, Serialize)]
pub struct Address {
    pub ton: TypeOfNumber,
    pub npi: NumericPlanIndicator,
    pub address: String,
}

/// source_addr_ton, source_addr_npi, source_addr
pub type SourceAddress = Address;

/// dest_addr_ton, dest_addr_npi, destination_addr
pub type DestinationAddress = Address;

impl Address {
    pub fn new(ton: TypeOfNumber, npi: NumericPlanIndicator, address: impl Into<String>) -> Self {
        Self {
            ton,
            npi,
            address: address.into(),
        }
    }

    /// International E.164 number
    pub fn international(address: impl Into<String>) -> Self {
        Self::new(
            TypeOfNumber::International,
            NumericPlanIndicator::Isdn,
            address,
        )
    }

    /// Alphanumeric sender id
    pub fn alphanumeric(address: impl Into<String>) -> Self {
        Self::new(
            TypeOfNumber::Alphanumeric,
            NumericPlanIndicator::Unknown,
            address,
        )
    }

    /// Encoded size: TON, NPI, address and its terminator
    pub fn encoded_len(&self) -> usize {
        2 + self.address.len() + 1
    }
}

impl Field for Address {
    fn encode_field(&self, buf: &mut BytesMut, ctx: &mut FieldContext) -> Result<(), CodecError> {
        self.ton.encode_field(buf, ctx)?;
        self.npi.encode_field(buf, ctx)?;
        encode_cstring(buf, &self.address);
        Ok(())
    }

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        ctx: &mut FieldContext,
    ) -> Result<(), CodecError> {
        self.ton.decode_field(buf, ctx)?;
        self.npi.decode_field(buf, ctx)?;
        self.address = decode_cstring(buf)?;
        Ok(())
    }
}

/// International E.164 numbers display with a leading `+`
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ton == TypeOfNumber::International
            && self.npi == NumericPlanIndicator::Isdn
            && !self.address.is_empty()
            && !self.address.starts_with('+')
        {
            write!(f, "+")?;
        }
        write!(f, "{}", self.address)
    }
}

/// submit_multi destinations. SME addresses are written before distribution
/// list names.
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize)]
pub struct DestinationAddresses {
    pub addresses: Vec<Address>,
    pub distribution_lists: Vec<String>,
}

impl DestinationAddresses {
    pub fn len(&self) -> usize {
        self.addresses.len() + self.distribution_lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Field for DestinationAddresses {
    fn encode_field(&self, buf: &mut BytesMut, ctx: &mut FieldContext) -> Result<(), CodecError> {
        let count = self.len();
        if count > MAX_LIST_ITEMS {
            return Err(CodecError::TooManyItems {
                field: "dest_address",
                count,
            });
        }

        encode_u8(buf, count as u8);
        for address in &self.addresses {
            encode_u8(buf, DEST_FLAG_SME_ADDRESS);
            address.encode_field(buf, ctx)?;
        }
        for name in &self.distribution_lists {
            encode_u8(buf, DEST_FLAG_DISTRIBUTION_LIST);
            encode_cstring(buf, name);
        }
        Ok(())
    }

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        ctx: &mut FieldContext,
    ) -> Result<(), CodecError> {
        let count = decode_u8(buf)?;
        *self = Self::default();

        for _ in 0..count {
            match decode_u8(buf)? {
                DEST_FLAG_SME_ADDRESS => {
                    let mut address = Address::default();
                    address.decode_field(buf, ctx)?;
                    self.addresses.push(address);
                }
                DEST_FLAG_DISTRIBUTION_LIST => {
                    self.distribution_lists.push(decode_cstring(buf)?);
                }
                flag => return Err(CodecError::InvalidDestinationFlag(flag)),
            }
        }
        Ok(())
    }
}

/// A destination submit_multi could not deliver to
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize)]
pub struct UnsuccessfulRecord {
    pub address: Address,
    pub status: CommandStatus,
}

impl fmt::Display for UnsuccessfulRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.address, self.status)
    }
}

/// unsuccess_sme list of submit_multi_resp
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize)]
pub struct UnsuccessfulRecords(pub Vec<UnsuccessfulRecord>);

impl Field for UnsuccessfulRecords {
    fn encode_field(&self, buf: &mut BytesMut, ctx: &mut FieldContext) -> Result<(), CodecError> {
        let count = self.0.len();
        if count > MAX_LIST_ITEMS {
            return Err(CodecError::TooManyItems {
                field: "unsuccess_sme",
                count,
            });
        }

        encode_u8(buf, count as u8);
        for record in &self.0 {
            record.address.encode_field(buf, ctx)?;
            encode_u32(buf, record.status.into());
        }
        Ok(())
    }

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        ctx: &mut FieldContext,
    ) -> Result<(), CodecError> {
        let count = decode_u8(buf)?;
        let mut records = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let mut address = Address::default();
            address.decode_field(buf, ctx)?;
            let status = CommandStatus::from(decode_u32(buf)?);
            records.push(UnsuccessfulRecord { address, status });
        }
        self.0 = records;
        Ok(())
    }
}
