// SMPP PDU Codec - schema-driven marshal/unmarshal engine
//
// Every PDU is a header followed by an ordered list of fields. Each field type
// implements `Field` for its wire kind (C-string, octet, flag or a nested
// sub-structure) and the `pdu!` macro generates the per-PDU walk over the
// declared field list. `marshal` and `unmarshal` wrap that walk with the
// header rules shared by all PDUs.

use crate::datatypes::{CommandId, CommandStatus, UdhError};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::Serialize;
use std::fmt::Write;
use std::io::Cursor;
use thiserror::Error;

/// Smallest legal command_length: a header with no body
pub const MIN_PDU_SIZE: u32 = PduHeader::SIZE as u32;

/// Largest accepted command_length
pub const MAX_PDU_SIZE: u32 = 0x10000; // 64KB

/// Sequence numbers are positive 31-bit values
pub const MAX_SEQUENCE_NUMBER: u32 = 0x7FFF_FFFF;

/// SMPP PDU Header (16 bytes, common to all PDUs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PduHeader {
    pub command_length: u32,
    pub command_id: CommandId,
    pub command_status: CommandStatus,
    pub sequence_number: u32,
}

impl PduHeader {
    pub const SIZE: usize = 16;

    /// Header for a new PDU of the given type; length is patched on encode
    pub fn new(command_id: CommandId) -> Self {
        Self {
            command_length: Self::SIZE as u32,
            command_id,
            command_status: CommandStatus::Ok,
            sequence_number: 0,
        }
    }

    /// Decode PDU header from buffer. Bounds are checked separately by
    /// [`PduHeader::validate_length`] so callers can keep the raw header.
    pub fn decode(buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        if buf.remaining() < Self::SIZE {
            return Err(CodecError::Incomplete);
        }

        Ok(PduHeader {
            command_length: buf.get_u32(),
            command_id: CommandId::from(buf.get_u32()),
            command_status: CommandStatus::from(buf.get_u32()),
            sequence_number: buf.get_u32(),
        })
    }

    /// Rejects a command_length outside [16, 0x10000]
    pub fn validate_length(&self) -> Result<(), CodecError> {
        if self.command_length < MIN_PDU_SIZE || self.command_length > MAX_PDU_SIZE {
            return Err(CodecError::InvalidPduLength {
                length: self.command_length,
                min: MIN_PDU_SIZE,
                max: MAX_PDU_SIZE,
            });
        }
        Ok(())
    }

    /// Number of body octets that follow the header
    pub fn body_length(&self) -> usize {
        (self.command_length as usize).saturating_sub(Self::SIZE)
    }

    /// Encode PDU header to buffer
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u32(self.command_length);
        buf.put_u32(self.command_id.into());
        buf.put_u32(self.command_status.into());
        buf.put_u32(self.sequence_number);
    }
}

/// State shared by the fields of one PDU while it is walked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldContext {
    /// Set by the esm_class field when its UDHI bit is on
    pub udh_indicator: bool,
    /// The short message carries no data_coding octet (replace_sm)
    pub no_coding: bool,
}

impl FieldContext {
    pub fn for_command(command_id: CommandId) -> Self {
        Self {
            udh_indicator: false,
            no_coding: command_id == CommandId::ReplaceSm,
        }
    }
}

/// A PDU body field with a fixed wire kind.
///
/// Decoding writes into an existing value so a field can look at its
/// pre-populated state (the short message uses this to know whether a
/// data_coding octet and a user data header are expected).
pub trait Field {
    fn encode_field(&self, buf: &mut BytesMut, ctx: &mut FieldContext) -> Result<(), CodecError>;

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        ctx: &mut FieldContext,
    ) -> Result<(), CodecError>;
}

/// Text fields are null terminated
impl Field for String {
    fn encode_field(&self, buf: &mut BytesMut, _ctx: &mut FieldContext) -> Result<(), CodecError> {
        encode_cstring(buf, self);
        Ok(())
    }

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        _ctx: &mut FieldContext,
    ) -> Result<(), CodecError> {
        *self = decode_cstring(buf)?;
        Ok(())
    }
}

impl Field for u8 {
    fn encode_field(&self, buf: &mut BytesMut, _ctx: &mut FieldContext) -> Result<(), CodecError> {
        encode_u8(buf, *self);
        Ok(())
    }

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        _ctx: &mut FieldContext,
    ) -> Result<(), CodecError> {
        *self = decode_u8(buf)?;
        Ok(())
    }
}

/// Flags travel as one octet, 1 for true
impl Field for bool {
    fn encode_field(&self, buf: &mut BytesMut, _ctx: &mut FieldContext) -> Result<(), CodecError> {
        encode_u8(buf, u8::from(*self));
        Ok(())
    }

    fn decode_field(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        _ctx: &mut FieldContext,
    ) -> Result<(), CodecError> {
        *self = decode_u8(buf)? == 1;
        Ok(())
    }
}

/// A PDU type: a header plus a declared field list
pub trait Pdu: Default {
    const COMMAND_ID: CommandId;

    fn header(&self) -> &PduHeader;

    fn header_mut(&mut self) -> &mut PduHeader;

    fn encode_body(&self, buf: &mut BytesMut, ctx: &mut FieldContext) -> Result<(), CodecError>;

    fn decode_body(
        &mut self,
        buf: &mut Cursor<&[u8]>,
        ctx: &mut FieldContext,
    ) -> Result<(), CodecError>;

    fn sequence_number(&self) -> u32 {
        self.header().sequence_number
    }

    fn command_status(&self) -> CommandStatus {
        self.header().command_status
    }

    /// Builder-style sequence number setter
    fn with_sequence_number(mut self, sequence_number: u32) -> Self {
        self.header_mut().sequence_number = sequence_number;
        self
    }

    /// Builder-style command status setter
    fn with_status(mut self, command_status: CommandStatus) -> Self {
        self.header_mut().command_status = command_status;
        self
    }
}

/// A request PDU and the response it is answered with
pub trait Request: Pdu {
    type Response: Pdu;

    /// Builds the matching response, copying the sequence number
    fn response(&self) -> Self::Response {
        Self::Response::default().with_sequence_number(self.sequence_number())
    }
}

/// Encodes `pdu` and appends it to `buf`, returning a hex dump of the
/// encoded bytes. Nothing is written to `buf` when encoding fails.
///
/// The command_id always comes from the PDU type. A PDU with a non-OK status
/// is written as a bare header.
pub fn marshal<P: Pdu>(pdu: &P, buf: &mut BytesMut) -> Result<String, CodecError> {
    let mut header = *pdu.header();
    header.command_id = P::COMMAND_ID;

    if header.sequence_number == 0 || header.sequence_number > MAX_SEQUENCE_NUMBER {
        return Err(CodecError::InvalidSequenceNumber(header.sequence_number));
    }

    let mut out = BytesMut::with_capacity(PduHeader::SIZE);
    header.encode(&mut out);

    if header.command_status.is_ok() {
        let mut ctx = FieldContext::for_command(P::COMMAND_ID);
        pdu.encode_body(&mut out, &mut ctx)?;
    }

    patch_length(&mut out)?;
    let dump = hex_dump(&out);
    buf.extend_from_slice(&out);
    Ok(dump)
}

/// Decodes the body of a PDU whose header has already been read. A non-OK
/// status ends decoding after the header. Any field failure is reported as
/// [`CodecError::Malformed`].
pub fn unmarshal<P: Pdu>(header: PduHeader, buf: &mut Cursor<&[u8]>) -> Result<P, CodecError> {
    let mut pdu = P::default();
    *pdu.header_mut() = header;

    if !header.command_status.is_ok() {
        return Ok(pdu);
    }

    let mut ctx = FieldContext::for_command(P::COMMAND_ID);
    pdu.decode_body(buf, &mut ctx)
        .map_err(|source| CodecError::Malformed {
            command_id: header.command_id,
            source: Box::new(source),
        })?;
    Ok(pdu)
}

/// Writes command_length, refusing PDUs a peer would reject on read
fn patch_length(buf: &mut BytesMut) -> Result<(), CodecError> {
    let length = u32::try_from(buf.len()).unwrap_or(u32::MAX);
    if length > MAX_PDU_SIZE {
        return Err(CodecError::InvalidPduLength {
            length,
            min: MIN_PDU_SIZE,
            max: MAX_PDU_SIZE,
        });
    }
    buf[0..4].copy_from_slice(&length.to_be_bytes());
    Ok(())
}

/// Trait for types that can be encoded to bytes
pub trait Encodable {
    /// Encode onto the buffer, returning a hex dump of the written bytes
    fn encode(&self, buf: &mut BytesMut) -> Result<String, CodecError>;

    /// Convert to bytes with the command_length patched
    fn to_bytes(&self) -> Result<Bytes, CodecError> {
        let mut buf = BytesMut::new();
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }
}

/// Trait for types that can be decoded from bytes
pub trait Decodable: Sized {
    /// Decode this PDU from the buffer after header
    fn decode(header: PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError>;

    /// Return the expected command_id for this PDU type
    fn command_id() -> CommandId;

    /// Validate the header is appropriate for this PDU type
    fn validate_header(header: &PduHeader) -> Result<(), CodecError> {
        if header.command_id != Self::command_id() {
            return Err(CodecError::UnexpectedCommandId {
                expected: Self::command_id(),
                actual: header.command_id,
            });
        }
        header.validate_length()
    }

    /// Decode a complete PDU, header included
    fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        let mut cursor = Cursor::new(data);
        let header = PduHeader::decode(&mut cursor)?;
        Self::validate_header(&header)?;

        let end = header.command_length as usize;
        if data.len() < end {
            return Err(CodecError::Incomplete);
        }
        let mut body = Cursor::new(&data[PduHeader::SIZE..end]);
        Self::decode(header, &mut body)
    }
}

impl<P: Pdu> Encodable for P {
    fn encode(&self, buf: &mut BytesMut) -> Result<String, CodecError> {
        marshal(self, buf)
    }
}

impl<P: Pdu> Decodable for P {
    fn decode(header: PduHeader, buf: &mut Cursor<&[u8]>) -> Result<Self, CodecError> {
        unmarshal(header, buf)
    }

    fn command_id() -> CommandId {
        P::COMMAND_ID
    }
}

/// Codec errors with detailed context for debugging
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Incomplete PDU: need more data")]
    Incomplete,

    #[error("Invalid command_id: {0:#x}")]
    InvalidCommandId(u32),

    #[error("Invalid PDU length: {length}, must be {min}-{max}")]
    InvalidPduLength { length: u32, min: u32, max: u32 },

    #[error("Invalid sequence number {0}: must be between 1 and 0x7FFFFFFF")]
    InvalidSequenceNumber(u32),

    #[error("Unexpected command_id: expected {expected:?}, got {actual:?}")]
    UnexpectedCommandId {
        expected: CommandId,
        actual: CommandId,
    },

    #[error("C-string is missing its null terminator")]
    UnterminatedString,

    #[error("UTF-8 decoding error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Field '{field}' validation failed: {reason}")]
    FieldValidation { field: &'static str, reason: String },

    #[error("Invalid destination flag: {0}")]
    InvalidDestinationFlag(u8),

    #[error("Too many entries in '{field}': {count} (max 255)")]
    TooManyItems { field: &'static str, count: usize },

    #[error("User data header error: {0}")]
    Udh(#[from] UdhError),

    #[error("Short message body is {0} octets (max 254)")]
    ShortMessageTooLong(usize),

    #[error("Malformed {command_id:?} PDU: {source}")]
    Malformed {
        command_id: CommandId,
        #[source]
        source: Box<CodecError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert codec errors to appropriate SMPP command_status codes
impl CodecError {
    pub fn to_command_status(&self) -> CommandStatus {
        match self {
            CodecError::InvalidCommandId(_) | CodecError::UnexpectedCommandId { .. } => {
                CommandStatus::InvalidCommandId
            }
            CodecError::InvalidSequenceNumber(_) => CommandStatus::UnknownError,
            CodecError::InvalidDestinationFlag(_) => CommandStatus::InvalidDestinationFlag,
            CodecError::TooManyItems { .. } => CommandStatus::InvalidNumberOfDestinations,
            CodecError::ShortMessageTooLong(_) | CodecError::Udh(UdhError::DataTooLarge { .. }) => {
                CommandStatus::InvalidMsgLength
            }
            CodecError::Io(_) => CommandStatus::SystemError,
            CodecError::Incomplete
            | CodecError::InvalidPduLength { .. }
            | CodecError::UnterminatedString
            | CodecError::Utf8Error(_)
            | CodecError::FieldValidation { .. }
            | CodecError::Udh(_)
            | CodecError::Malformed { .. } => CommandStatus::InvalidCommandLength,
        }
    }
}

/// Renders bytes as lowercase hex for diagnostic capture
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Decode a null-terminated string
pub fn decode_cstring(buf: &mut Cursor<&[u8]>) -> Result<String, CodecError> {
    let end = buf
        .chunk()
        .iter()
        .position(|&b| b == 0)
        .ok_or(CodecError::UnterminatedString)?;
    let bytes = buf.chunk()[..end].to_vec();
    buf.advance(end + 1);
    Ok(String::from_utf8(bytes)?)
}

/// Decode a single byte
pub fn decode_u8(buf: &mut Cursor<&[u8]>) -> Result<u8, CodecError> {
    if buf.remaining() < 1 {
        return Err(CodecError::Incomplete);
    }
    Ok(buf.get_u8())
}

/// Decode a 16-bit big-endian integer
pub fn decode_u16(buf: &mut Cursor<&[u8]>) -> Result<u16, CodecError> {
    if buf.remaining() < 2 {
        return Err(CodecError::Incomplete);
    }
    Ok(buf.get_u16())
}

/// Decode a 32-bit big-endian integer
pub fn decode_u32(buf: &mut Cursor<&[u8]>) -> Result<u32, CodecError> {
    if buf.remaining() < 4 {
        return Err(CodecError::Incomplete);
    }
    Ok(buf.get_u32())
}

/// Decode exactly `len` raw bytes
pub fn decode_bytes(buf: &mut Cursor<&[u8]>, len: usize) -> Result<Bytes, CodecError> {
    if buf.remaining() < len {
        return Err(CodecError::Incomplete);
    }
    Ok(buf.copy_to_bytes(len))
}

/// Peek at next 4 bytes without advancing cursor (for command_length)
pub fn peek_u32(buf: &Cursor<&[u8]>) -> Result<u32, CodecError> {
    let chunk = buf.chunk();
    if chunk.len() < 4 {
        return Err(CodecError::Incomplete);
    }
    Ok(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
}

/// Encode a string followed by a single null terminator
pub fn encode_cstring(buf: &mut BytesMut, value: &str) {
    buf.put_slice(value.as_bytes());
    buf.put_u8(0);
}

/// Encode a single byte
pub fn encode_u8(buf: &mut BytesMut, value: u8) {
    buf.put_u8(value);
}

/// Encode a 16-bit big-endian integer
pub fn encode_u16(buf: &mut BytesMut, value: u16) {
    buf.put_u16(value);
}

/// Encode a 32-bit big-endian integer
pub fn encode_u32(buf: &mut BytesMut, value: u32) {
    buf.put_u32(value);
}

/// Encodes then decodes a PDU, checking the patched command_length. The
/// decoded copy gets the original's command_length back so the two compare
/// equal when every field survived.
#[cfg(test)]
pub(crate) fn roundtrip<P: Pdu>(pdu: &P) -> P {
    let bytes = pdu.to_bytes().expect("encode");
    let mut decoded = P::from_bytes(&bytes).expect("decode");
    assert_eq!(decoded.header().command_length as usize, bytes.len());
    decoded.header_mut().command_length = pdu.header().command_length;
    decoded
}
