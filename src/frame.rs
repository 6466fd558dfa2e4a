//! SMPP Frame Reader and Dispatcher
//!
//! `Frame` is the closed union of every PDU type. A static registry maps each
//! command_id to the decoder of its PDU type; [`read_pdu`] reads one PDU from
//! a byte stream and reports failures with the SMPP status a peer should be
//! answered with, along with the raw bytes that were consumed.

use crate::codec::{
    CodecError, Decodable, Encodable, MAX_PDU_SIZE, MIN_PDU_SIZE, Pdu, PduHeader, Request,
    hex_dump, peek_u32,
};
use crate::datatypes::{CommandId, CommandStatus, GenericNack};
use bytes::{Buf, BytesMut};
use std::collections::HashMap;
use std::io::{self, Cursor};
use std::sync::OnceLock;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

crate::macros::frames! {
    plain {
        GenericNack,
        BindReceiver,
        BindReceiverResponse,
        BindTransmitter,
        BindTransmitterResponse,
        BindTransceiver,
        BindTransceiverResponse,
        Outbind,
        Unbind,
        UnbindResponse,
        EnquireLink,
        EnquireLinkResponse,
        QuerySm,
        QuerySmResponse,
        SubmitSmResponse,
        DeliverSmResponse,
        DataSmResponse,
        SubmitMultiResponse,
        CancelSm,
        CancelSmResponse,
        ReplaceSmResponse,
        AlertNotification,
        BroadcastSmResponse,
        CancelBroadcastSm,
        CancelBroadcastSmResponse,
        QueryBroadcastSm,
        QueryBroadcastSmResponse,
    }
    boxed {
        SubmitSm,
        DeliverSm,
        DataSm,
        SubmitMulti,
        ReplaceSm,
        BroadcastSm,
    }
}

type DecoderFn =
    Box<dyn Fn(PduHeader, &mut Cursor<&[u8]>) -> Result<Frame, CodecError> + Send + Sync>;

/// Immutable command_id to decoder table
pub struct PduRegistry {
    decoders: HashMap<CommandId, DecoderFn>,
}

impl PduRegistry {
    /// Process-wide registry, built on first use
    pub fn global() -> &'static PduRegistry {
        static REGISTRY: OnceLock<PduRegistry> = OnceLock::new();
        REGISTRY.get_or_init(PduRegistry::new)
    }

    fn register_pdu<T>(&mut self)
    where
        T: Decodable + Into<Frame> + 'static,
    {
        let decoder: DecoderFn = Box::new(
            |header: PduHeader, buf: &mut Cursor<&[u8]>| -> Result<Frame, CodecError> {
                let pdu = T::decode(header, buf)?;
                Ok(pdu.into())
            },
        );
        self.decoders.insert(T::command_id(), decoder);
    }

    /// Decodes the body of a PDU whose header has been read. Unknown ids are
    /// rejected without touching the body.
    pub fn decode_pdu(
        &self,
        header: PduHeader,
        buf: &mut Cursor<&[u8]>,
    ) -> Result<Frame, CodecError> {
        match self.decoders.get(&header.command_id) {
            Some(decoder) => decoder(header, buf),
            None => {
                let raw = u32::from(header.command_id);
                let hex = format!("{raw:#010x}");
                warn!(
                    command_id = %hex,
                    sequence_number = header.sequence_number,
                    "unknown command_id"
                );
                Err(CodecError::InvalidCommandId(raw))
            }
        }
    }

    pub fn is_registered(&self, command_id: CommandId) -> bool {
        self.decoders.contains_key(&command_id)
    }

    /// Get list of registered command IDs
    pub fn registered_commands(&self) -> Vec<CommandId> {
        self.decoders.keys().copied().collect()
    }
}

impl Default for PduRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    pub fn sequence_number(&self) -> u32 {
        self.header().sequence_number
    }

    pub fn command_status(&self) -> CommandStatus {
        self.header().command_status
    }

    pub fn set_sequence_number(&mut self, sequence_number: u32) {
        self.header_mut().sequence_number = sequence_number;
    }

    pub fn is_response(&self) -> bool {
        self.command_id().is_response()
    }

    /// Builds the response to a request frame, copying its sequence number.
    /// Returns `None` for responses and for requests that are not answered
    /// (outbind, alert_notification).
    pub fn response(&self) -> Option<Frame> {
        let response = match self {
            Frame::BindReceiver(pdu) => pdu.response().into(),
            Frame::BindTransmitter(pdu) => pdu.response().into(),
            Frame::BindTransceiver(pdu) => pdu.response().into(),
            Frame::Unbind(pdu) => pdu.response().into(),
            Frame::EnquireLink(pdu) => pdu.response().into(),
            Frame::QuerySm(pdu) => pdu.response().into(),
            Frame::SubmitSm(pdu) => pdu.response().into(),
            Frame::DeliverSm(pdu) => pdu.response().into(),
            Frame::DataSm(pdu) => pdu.response().into(),
            Frame::SubmitMulti(pdu) => pdu.response().into(),
            Frame::CancelSm(pdu) => pdu.response().into(),
            Frame::ReplaceSm(pdu) => pdu.response().into(),
            Frame::BroadcastSm(pdu) => pdu.response().into(),
            Frame::CancelBroadcastSm(pdu) => pdu.response().into(),
            Frame::QueryBroadcastSm(pdu) => pdu.response().into(),
            _ => return None,
        };
        Some(response)
    }

    /// Checks that `buf` holds a complete PDU with a legal command_length.
    /// The cursor is left where it was.
    pub fn check(buf: &mut Cursor<&[u8]>) -> Result<(), CodecError> {
        if buf.remaining() < PduHeader::SIZE {
            return Err(CodecError::Incomplete);
        }

        let command_length = peek_u32(buf)?;
        if !(MIN_PDU_SIZE..=MAX_PDU_SIZE).contains(&command_length) {
            return Err(CodecError::InvalidPduLength {
                length: command_length,
                min: MIN_PDU_SIZE,
                max: MAX_PDU_SIZE,
            });
        }

        if buf.remaining() < command_length as usize {
            return Err(CodecError::Incomplete);
        }
        Ok(())
    }

    /// Decodes one PDU and moves the cursor past it
    pub fn parse(buf: &mut Cursor<&[u8]>) -> Result<Frame, CodecError> {
        let data: &[u8] = *buf.get_ref();
        let start = buf.position() as usize;

        let header = PduHeader::decode(buf)?;
        header.validate_length()?;

        let end = start + header.command_length as usize;
        if data.len() < end {
            return Err(CodecError::Incomplete);
        }

        let mut body = Cursor::new(&data[start + PduHeader::SIZE..end]);
        let frame = PduRegistry::global().decode_pdu(header, &mut body)?;
        buf.set_position(end as u64);
        Ok(frame)
    }
}

/// Takes one PDU off the front of a read buffer. Returns `Ok(None)` until a
/// complete PDU has been buffered.
pub fn decode_frame(buffer: &mut BytesMut) -> Result<Option<Frame>, CodecError> {
    let mut buf = Cursor::new(&buffer[..]);
    match Frame::check(&mut buf) {
        Ok(()) => {
            let frame = Frame::parse(&mut buf)?;
            let len = buf.position() as usize;
            buffer.advance(len);
            Ok(Some(frame))
        }
        Err(CodecError::Incomplete) => Ok(None),
        Err(err) => Err(err),
    }
}

/// A PDU read off a stream with its header and raw bytes
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedPdu {
    pub frame: Frame,
    pub header: PduHeader,
    /// Hex dump of every byte read for this PDU
    pub hex_dump: String,
}

/// A PDU that could not be read, with the status to answer it with
#[derive(Debug, Error)]
#[error("{status}: {source}")]
pub struct ReadError {
    pub status: CommandStatus,
    /// Present once the 16 header octets have been read
    pub header: Option<PduHeader>,
    /// Hex dump of every byte read before the failure
    pub hex_dump: String,
    #[source]
    pub source: CodecError,
}

impl ReadError {
    fn new(source: CodecError, header: Option<PduHeader>, raw: &[u8]) -> Self {
        Self {
            status: source.to_command_status(),
            header,
            hex_dump: hex_dump(raw),
            source,
        }
    }

    /// generic_nack answering the rejected PDU, when its header was read and
    /// carries a usable sequence number
    pub fn generic_nack(&self) -> Option<GenericNack> {
        let header = self.header?;
        if header.sequence_number == 0 {
            return None;
        }
        Some(
            GenericNack::default()
                .with_sequence_number(header.sequence_number)
                .with_status(self.status),
        )
    }
}

/// Reads exactly one PDU from `reader`.
///
/// A command_length outside [16, 0x10000] or a stream that ends early is
/// reported as `InvalidCommandLength`, an unregistered command_id as
/// `InvalidCommandId` and any body decoding failure as `InvalidCommandLength`.
pub async fn read_pdu<R>(reader: &mut R) -> Result<ReceivedPdu, ReadError>
where
    R: AsyncRead + Unpin,
{
    let mut raw = vec![0u8; PduHeader::SIZE];
    let filled = read_full(reader, &mut raw)
        .await
        .map_err(|err| ReadError::new(err.into(), None, &[]))?;
    if filled < PduHeader::SIZE {
        debug!(read = filled, "stream ended inside a PDU header");
        return Err(ReadError::new(CodecError::Incomplete, None, &raw[..filled]));
    }

    let header = PduHeader::decode(&mut Cursor::new(&raw[..]))
        .map_err(|err| ReadError::new(err, None, &raw))?;
    if let Err(err) = header.validate_length() {
        debug!(command_length = header.command_length, "rejecting PDU length");
        return Err(ReadError::new(err, Some(header), &raw));
    }

    raw.resize(header.command_length as usize, 0);
    let filled = read_full(reader, &mut raw[PduHeader::SIZE..])
        .await
        .map_err(|err| ReadError::new(err.into(), Some(header), &raw[..PduHeader::SIZE]))?;
    if filled < header.body_length() {
        debug!(
            expected = header.body_length(),
            read = filled,
            "stream ended inside a PDU body"
        );
        let end = PduHeader::SIZE + filled;
        return Err(ReadError::new(CodecError::Incomplete, Some(header), &raw[..end]));
    }

    let mut body = Cursor::new(&raw[PduHeader::SIZE..]);
    match PduRegistry::global().decode_pdu(header, &mut body) {
        Ok(frame) => Ok(ReceivedPdu {
            frame,
            header,
            hex_dump: hex_dump(&raw),
        }),
        Err(err) => {
            debug!(command_id = ?header.command_id, error = %err, "rejecting PDU");
            Err(ReadError::new(err, Some(header), &raw))
        }
    }
}

/// Encodes `pdu` and writes it to `writer`, returning the hex dump of the
/// written bytes. Nothing is written when encoding fails.
pub async fn write_pdu<W, P>(writer: &mut W, pdu: &P) -> Result<String, CodecError>
where
    W: AsyncWrite + Unpin,
    P: Encodable,
{
    let mut buf = BytesMut::new();
    let dump = pdu.encode(&mut buf)?;
    writer.write_all(&buf).await?;
    writer.flush().await?;
    Ok(dump)
}

/// Reads until `buf` is full or the stream ends, returning the bytes read
async fn read_full<R>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]).await? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}
