//! SMPP v3.4/v5.0 PDU codec with SMS character coding and segmentation.
//!
//! The crate has three layers:
//!
//! * [`codec`] and [`datatypes`]: the PDU catalogue and the schema-driven
//!   marshal/unmarshal engine that turns each PDU into its wire bytes.
//! * [`frame`]: reading one PDU off a byte stream, dispatching on command_id
//!   and reporting failures with the status a peer should be answered with.
//! * [`coding`] and [`compose`]: choosing a data coding for outbound text,
//!   converting it to and from octets and splitting it into concatenated
//!   parts that fit a segment.
//!
//! # Example
//!
//! ```
//! use smpp_pdu::datatypes::{Address, SubmitSm};
//! use smpp_pdu::{CodecConfig, Encodable, MessageComposer, Pdu};
//!
//! let composer = MessageComposer::new(CodecConfig::default());
//! let parts = composer.compose(&"Hello world. ".repeat(20), 1).unwrap();
//! assert_eq!(parts.len(), 2);
//!
//! for (sequence, part) in (1..).zip(parts) {
//!     let pdu = SubmitSm::new(Address::alphanumeric("ACME"), Address::international("447700900123"))
//!         .with_message(part)
//!         .with_sequence_number(sequence);
//!     assert!(pdu.esm_class.udh_indicator);
//!     assert!(pdu.to_bytes().is_ok());
//! }
//! ```

pub mod codec;
pub mod coding;
pub mod compose;
pub mod config;
pub mod datatypes;
pub mod frame;
mod macros;

#[cfg(test)]
mod tests;

// Re-export codec types for direct access
pub use codec::{CodecError, Decodable, Encodable, Pdu, PduHeader, Request, marshal, unmarshal};

// Re-export the frame reader
pub use frame::{Frame, PduRegistry, ReadError, ReceivedPdu, decode_frame, read_pdu, write_pdu};

pub use coding::{CodingPolicy, CodingSelector};
pub use compose::{ComposeError, MessageComposer, reassemble};
pub use config::CodecConfig;
