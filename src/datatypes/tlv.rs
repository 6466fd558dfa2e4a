// ABOUTME: Optional parameters (tag, length, value) and the open-ended tag list ending a PDU body
// ABOUTME: The tag list consumes every remaining body octet in wire order

use crate::codec::{
    CodecError, Field, FieldContext, decode_bytes, decode_u16, encode_u16,
};
use bytes::{Buf, Bytes, BytesMut};
use serde::Serialize;
use std::io::Cursor;

/// Common optional parameter tags
pub mod tags {
    pub const DEST_ADDR_SUBUNIT: u16 = 0x0005;
    pub const SOURCE_PORT: u16 = 0x020A;
    pub const DESTINATION_PORT: u16 = 0x020B;
    pub const SAR_MSG_REF_NUM: u16 = 0x020C;
    pub const SAR_TOTAL_SEGMENTS: u16 = 0x020E;
    pub const SAR_SEGMENT_SEQNUM: u16 = 0x020F;
    pub const SC_INTERFACE_VERSION: u16 = 0x0210;
    pub const MESSAGE_PAYLOAD: u16 = 0x0424;
    pub const RECEIPTED_MESSAGE_ID: u16 = 0x001E;
    pub const MESSAGE_STATE: u16 = 0x0427;
    pub const NETWORK_ERROR_CODE: u16 = 0x0423;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tlv {
    /// The Tag field is used to uniquely identify the particular optional parameter in question.
    pub tag: u16,

    /// The Value field contains the actual data for the optional parameter in question.
    /// Its length is written as a 16-bit prefix.
    pub value: Bytes,
}

impl Tlv {
    pub fn new(tag: u16, value: impl Into<Bytes>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    pub fn encoded_len(&self) -> usize {
        4 + self.value.len()
    }

    fn encode(&self, buf: &mut BytesMut) -> Result<(), CodecError> {
        let length = u16::try_from(self.value.len()).map_err(|_| CodecError::FieldValidation {
            field: "tlv",
            reason: format!(
                "value of tag {:#06x} is {} octets, max 65535",
                self.tag,
                self.value.len()
            ),
        })?;
        encode_u16(buf, self.tag);
        encode_u16(buf, length);
        buf.extend_from_slice(&self.value);
        Ok(())
    }

    fn decode(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        let tag = decode_u16(buf)?;
        let length = decode_u16(buf)?;
        let value = decode_bytes(buf, length as usize)?;
        Ok(Self { tag, value })
    }
}

/// Optional parameters at the end of a PDU body
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct Tags(pub Vec<Tlv>);

impl Tags {
    pub fn get(&self, tag: u16) -> Option<&Tlv> {
        self.0.iter().find(|tlv| tlv.tag == tag)
    }

    pub fn push(&mut self, tlv: Tlv) {
        self.0.push(tlv);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Field for Tags {
    fn encode_field(&self, buf: &mut BytesMut, _ctx: &mut FieldContext) -> Result<(), CodecError> {
        for tlv in &self.0 {
            tlv.encode(buf)?;
        }
        Ok(())
    }

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        _ctx: &mut FieldContext,
    ) -> Result<(), CodecError> {
        self.0.clear();
        while buf.has_remaining() {
            self.0.push(Tlv::decode(buf)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_read_to_end() {
        let data = [
            0x02, 0x0C, 0x00, 0x02, 0x12, 0x34, // sar_msg_ref_num
            0x04, 0x24, 0x00, 0x00, // empty message_payload
        ];
        let mut tags = Tags::default();
        tags.decode_field(&mut Cursor::new(&data[..]), &mut FieldContext::default())
            .unwrap();

        assert_eq!(tags.0.len(), 2);
        assert_eq!(
            tags.get(tags::SAR_MSG_REF_NUM).unwrap().value.as_ref(),
            &[0x12, 0x34]
        );
        assert!(tags.get(tags::MESSAGE_PAYLOAD).unwrap().value.is_empty());

        let mut buf = BytesMut::new();
        tags.encode_field(&mut buf, &mut FieldContext::default()).unwrap();
        assert_eq!(buf.as_ref(), &data[..]);
    }

    #[test]
    fn truncated_value_is_an_error() {
        let data = [0x02, 0x0C, 0x00, 0x04, 0x12];
        let mut tags = Tags::default();
        assert!(matches!(
            tags.decode_field(&mut Cursor::new(&data[..]), &mut FieldContext::default()),
            Err(CodecError::Incomplete)
        ));
    }

    #[test]
    fn oversized_value_is_rejected() {
        let tags = Tags(vec![Tlv::new(tags::MESSAGE_PAYLOAD, vec![0u8; 0x10000])]);
        let mut buf = BytesMut::new();
        assert!(matches!(
            tags.encode_field(&mut buf, &mut FieldContext::default()),
            Err(CodecError::FieldValidation { field: "tlv", .. })
        ));
    }
}
