// ABOUTME: User Data Header information elements prefixed to multipart and feature-bearing messages
// ABOUTME: Includes the concatenation element in its 8-bit and 16-bit reference forms

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Cursor;
use thiserror::Error;

/// Concatenated short message, 8-bit reference
pub const IE_CONCATENATED_8BIT: u8 = 0x00;
/// Concatenated short message, 16-bit reference
pub const IE_CONCATENATED_16BIT: u8 = 0x08;

const MAX_ELEMENT_LEN: usize = 0xFF;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UdhError {
    #[error("information element {id:#04x} is {len} octets, max 255")]
    DataTooLarge { id: u8, len: usize },

    #[error("header declares {declared} octets but its elements span {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("header elements span {0} octets, max 255")]
    HeaderTooLarge(usize),

    #[error("header is truncated")]
    Truncated,
}

/// Information elements keyed by identifier. Elements are written in
/// ascending identifier order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserDataHeader {
    elements: BTreeMap<u8, Bytes>,
}

impl UserDataHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an element, returning the previous payload
    pub fn insert(&mut self, id: u8, data: impl Into<Bytes>) -> Option<Bytes> {
        self.elements.insert(id, data.into())
    }

    pub fn get(&self, id: u8) -> Option<&Bytes> {
        self.elements.get(&id)
    }

    pub fn remove(&mut self, id: u8) -> Option<Bytes> {
        self.elements.remove(&id)
    }

    pub fn contains(&self, id: u8) -> bool {
        self.elements.contains_key(&id)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Bytes)> {
        self.elements.iter().map(|(id, data)| (*id, data))
    }

    /// Wire length: the length octet plus every (id, length, payload) triple.
    /// An empty header has no wire form.
    pub fn encoded_len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        1 + self
            .elements
            .values()
            .map(|data| 2 + data.len())
            .sum::<usize>()
    }

    /// Writes the header. Nothing is written for an empty header and nothing
    /// is written at all when an element is too large.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), UdhError> {
        if self.is_empty() {
            return Ok(());
        }
        if let Some((id, data)) = self.iter().find(|(_, data)| data.len() > MAX_ELEMENT_LEN) {
            return Err(UdhError::DataTooLarge {
                id,
                len: data.len(),
            });
        }
        let total = self.encoded_len() - 1;
        if total > MAX_ELEMENT_LEN {
            return Err(UdhError::HeaderTooLarge(total));
        }

        buf.put_u8(total as u8);
        for (id, data) in self.iter() {
            buf.put_u8(id);
            buf.put_u8(data.len() as u8);
            buf.put_slice(data);
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Bytes, UdhError> {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Reads a length octet and the elements it spans. Returns `None` when
    /// the header holds no element. The element lengths must add up to the
    /// declared length exactly.
    pub fn decode(buf: &mut Cursor<&[u8]>) -> Result<Option<Self>, UdhError> {
        if !buf.has_remaining() {
            return Err(UdhError::Truncated);
        }
        let declared = buf.get_u8() as usize;
        if buf.remaining() < declared {
            return Err(UdhError::Truncated);
        }

        let mut header = Self::new();
        let mut remaining = declared;
        while remaining > 0 {
            if remaining < 2 {
                return Err(UdhError::LengthMismatch {
                    declared,
                    actual: declared - remaining + 2,
                });
            }
            let id = buf.get_u8();
            let len = buf.get_u8() as usize;
            remaining -= 2;
            if len > remaining {
                return Err(UdhError::LengthMismatch {
                    declared,
                    actual: declared - remaining + len,
                });
            }
            header.insert(id, buf.copy_to_bytes(len));
            remaining -= len;
        }

        Ok((!header.is_empty()).then_some(header))
    }

    /// Reads the concatenation element, preferring the 8-bit reference form
    pub fn concatenated_header(&self) -> Option<ConcatenatedHeader> {
        if let Some(data) = self.get(IE_CONCATENATED_8BIT) {
            if let [reference, total_parts, sequence, ..] = data[..] {
                return Some(ConcatenatedHeader {
                    reference: u16::from(reference),
                    total_parts,
                    sequence,
                });
            }
        }
        if let Some(data) = self.get(IE_CONCATENATED_16BIT) {
            if let [hi, lo, total_parts, sequence, ..] = data[..] {
                return Some(ConcatenatedHeader {
                    reference: u16::from_be_bytes([hi, lo]),
                    total_parts,
                    sequence,
                });
            }
        }
        None
    }

    /// Stores the concatenation element, replacing either form already present
    pub fn set_concatenated_header(&mut self, header: ConcatenatedHeader) {
        self.remove(IE_CONCATENATED_8BIT);
        self.remove(IE_CONCATENATED_16BIT);
        let (id, data) = header.element();
        self.insert(id, data);
    }
}

/// Concatenated short message element: reference, total parts and the
/// 1-based sequence of this part
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConcatenatedHeader {
    pub reference: u16,
    pub total_parts: u8,
    pub sequence: u8,
}

impl ConcatenatedHeader {
    pub fn new(reference: u16, total_parts: u8, sequence: u8) -> Self {
        Self {
            reference,
            total_parts,
            sequence,
        }
    }

    /// References from 0xFF upwards use the 16-bit form
    pub fn is_extended(&self) -> bool {
        self.reference >= 0xFF
    }

    /// Element identifier and payload
    pub fn element(&self) -> (u8, Bytes) {
        if self.is_extended() {
            let [hi, lo] = self.reference.to_be_bytes();
            (
                IE_CONCATENATED_16BIT,
                Bytes::from(vec![hi, lo, self.total_parts, self.sequence]),
            )
        } else {
            (
                IE_CONCATENATED_8BIT,
                Bytes::from(vec![self.reference as u8, self.total_parts, self.sequence]),
            )
        }
    }

    /// Octets the element adds to a header (id, length and payload)
    pub fn element_len(&self) -> usize {
        element_len(self.reference)
    }

    /// Wire length of a header holding only this element
    pub fn header_len(&self) -> usize {
        1 + self.element_len()
    }
}

/// Octets a concatenation element with this reference takes in a header
pub fn element_len(reference: u16) -> usize {
    if reference < 0xFF { 5 } else { 6 }
}
