// ABOUTME: The short_message field group: data_coding, default message id, length, UDH and payload
// ABOUTME: Bridges message text and wire octets, downgrading to raw octets when a codec fails

use crate::codec::{CodecError, Field, FieldContext, decode_bytes, decode_u8, encode_u8};
use crate::coding::{TextCodecError, gsm7};
use crate::datatypes::{ConcatenatedHeader, DataCoding, UdhError, UserDataHeader};
use bytes::{Bytes, BytesMut};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::io::Cursor;
use tracing::warn;

/// Largest sm_length: UDH plus message octets
pub const MAX_BODY_LENGTH: usize = 254;

/// data_coding, sm_default_msg_id, sm_length and short_message
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortMessage {
    pub data_coding: DataCoding,
    pub default_msg_id: u8,
    /// `Some` when the body starts with a user data header, even an empty one
    pub udh: Option<UserDataHeader>,
    pub message: Bytes,
}

impl ShortMessage {
    pub fn new(data_coding: DataCoding, message: impl Into<Bytes>) -> Self {
        Self {
            data_coding,
            message: message.into(),
            ..Self::default()
        }
    }

    /// Encodes `text` in `coding`. If the codec cannot represent the text the
    /// message carries the UTF-8 octets and is reclassified as octet data.
    pub fn from_text(text: &str, coding: DataCoding) -> Self {
        match try_encode_message(text, coding) {
            Ok(bytes) => Self::new(coding, bytes),
            Err(err) => {
                warn!(%coding, error = %err, "cannot encode short message, sending raw octets");
                Self::new(DataCoding::Octet, text.as_bytes().to_vec())
            }
        }
    }

    pub fn with_udh(mut self, udh: UserDataHeader) -> Self {
        self.udh = Some(udh);
        self
    }

    /// Decodes the payload to text. When the coding has no codec or its codec
    /// rejects the payload, the octets are returned as text and the coding is
    /// reclassified as octet data.
    pub fn decode_text(&mut self) -> String {
        if self.data_coding.is_gsm7() {
            return gsm7::decode(&self.message);
        }

        if let Some(codec) = self.data_coding.text_codec() {
            match codec.decode(&self.message) {
                Ok(text) => return text,
                Err(err) => warn!(
                    coding = %self.data_coding,
                    error = %err,
                    "cannot decode short message, passing raw octets through"
                ),
            }
        }

        self.data_coding = DataCoding::Octet;
        String::from_utf8_lossy(&self.message).into_owned()
    }

    /// Concatenation element of the user data header, if any
    pub fn concatenated_header(&self) -> Option<ConcatenatedHeader> {
        self.udh.as_ref().and_then(UserDataHeader::concatenated_header)
    }

    /// sm_length for this message outside any PDU context
    pub fn body_len(&self) -> usize {
        let udh_len = match &self.udh {
            Some(udh) if udh.is_empty() => 1,
            Some(udh) => udh.encoded_len(),
            None => 0,
        };
        udh_len + self.message.len()
    }
}

/// Encodes text in the given coding, failing if its codec rejects the text.
/// GSM-7 replaces unknown characters and codings without a codec pass the
/// UTF-8 octets through.
pub fn try_encode_message(text: &str, coding: DataCoding) -> Result<Vec<u8>, TextCodecError> {
    if coding.is_gsm7() {
        return Ok(gsm7::encode(text));
    }
    match coding.text_codec() {
        Some(codec) => codec.encode(text),
        None => Ok(text.as_bytes().to_vec()),
    }
}

/// Encodes text in the given coding, falling back to the UTF-8 octets
pub fn encode_message(text: &str, coding: DataCoding) -> Vec<u8> {
    try_encode_message(text, coding).unwrap_or_else(|err| {
        warn!(%coding, error = %err, "cannot encode message, using raw octets");
        text.as_bytes().to_vec()
    })
}

impl Field for ShortMessage {
    fn encode_field(&self, buf: &mut BytesMut, ctx: &mut FieldContext) -> Result<(), CodecError> {
        let coding = if ctx.no_coding {
            DataCoding::NoCoding
        } else {
            self.data_coding
        };
        if coding != DataCoding::NoCoding {
            encode_u8(buf, coding.to_byte());
        }
        encode_u8(buf, self.default_msg_id);

        // sm_length is patched once the body is written
        let start = buf.len();
        encode_u8(buf, 0);

        match &self.udh {
            Some(udh) if !udh.is_empty() => udh.encode(buf)?,
            Some(_) => encode_u8(buf, 0),
            None if ctx.udh_indicator => encode_u8(buf, 0),
            None => {}
        }
        buf.extend_from_slice(&self.message);

        let body_len = buf.len() - start - 1;
        if body_len > MAX_BODY_LENGTH {
            return Err(CodecError::ShortMessageTooLong(body_len));
        }
        buf[start] = body_len as u8;
        Ok(())
    }

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        ctx: &mut FieldContext,
    ) -> Result<(), CodecError> {
        if ctx.no_coding {
            self.data_coding = DataCoding::NoCoding;
        }
        if self.data_coding != DataCoding::NoCoding {
            self.data_coding = DataCoding::from_byte(decode_u8(buf)?);
        }
        self.default_msg_id = decode_u8(buf)?;

        // the header never reaches past sm_length; a zero length body has
        // none even with UDHI set (the text travels in message_payload)
        let length = decode_u8(buf)? as usize;
        let body = decode_bytes(buf, length)?;
        if length == 0 || !(self.udh.is_some() || ctx.udh_indicator) {
            self.udh = None;
            self.message = body;
            return Ok(());
        }

        let header_len = 1 + body[0] as usize;
        if header_len > length {
            return Err(UdhError::LengthMismatch {
                declared: length,
                actual: header_len,
            }
            .into());
        }
        let mut window = Cursor::new(body.as_ref());
        self.udh = UserDataHeader::decode(&mut window)?;
        self.message = body.slice(window.position() as usize..);
        Ok(())
    }
}

/// JSON view of the field group: the header elements and the payload as text
impl Serialize for ShortMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.clone().decode_text();
        let mut state = serializer.serialize_struct("ShortMessage", 4)?;
        state.serialize_field("data_coding", &self.data_coding)?;
        state.serialize_field("sm_default_msg_id", &self.default_msg_id)?;
        match &self.udh {
            Some(udh) => state.serialize_field("UDH", udh)?,
            None => state.skip_field("UDH")?,
        }
        state.serialize_field("short_message", &text)?;
        state.end()
    }
}
