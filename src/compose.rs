// ABOUTME: Turns outbound text into one or more short messages ready for submit_sm
// ABOUTME: Picks the coding, splits over the segment budget and numbers concatenated parts

use crate::coding::SplitError;
use crate::config::CodecConfig;
use crate::datatypes::udh::element_len;
use crate::datatypes::{ConcatenatedHeader, DataCoding, ShortMessage, UserDataHeader};
use thiserror::Error;
use tracing::debug;

/// A concatenated message is numbered with one octet
pub const MAX_PARTS: usize = 0xFF;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("no splitter for data coding {0}")]
    UnsupportedCoding(DataCoding),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error("message needs {0} parts, max 255")]
    TooManyParts(usize),
}

/// Builds the short messages for a piece of text under a [`CodecConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageComposer {
    config: CodecConfig,
}

impl MessageComposer {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Coding the configured policy picks for `text`
    pub fn coding_for(&self, text: &str) -> DataCoding {
        self.config
            .selector()
            .best_coding(text, self.config.gsm7_capable)
    }

    /// Encodes `text` as a single short message when it fits the segment
    /// budget, otherwise as concatenated parts sharing `reference`. Parts
    /// are numbered from 1 and every part carries a user data header, so
    /// the PDU carrying it needs its UDHI bit set.
    pub fn compose(&self, text: &str, reference: u16) -> Result<Vec<ShortMessage>, ComposeError> {
        let coding = self.coding_for(text);
        let splitter = coding
            .splitter()
            .ok_or(ComposeError::UnsupportedCoding(coding))?;
        let budget = self.config.segment_budget;

        if splitter.byte_len(text) <= budget {
            debug!(%coding, "message fits a single segment");
            return Ok(vec![ShortMessage::from_text(text, coding)]);
        }

        let overhead = 1 + element_len(reference);
        let parts = splitter.split(text, budget, overhead)?;
        if parts.len() > MAX_PARTS {
            return Err(ComposeError::TooManyParts(parts.len()));
        }

        let total_parts = parts.len() as u8;
        debug!(%coding, parts = total_parts, reference, "splitting message");

        let messages = parts
            .iter()
            .zip(1..=total_parts)
            .map(|(part, sequence)| {
                let mut udh = UserDataHeader::new();
                udh.set_concatenated_header(ConcatenatedHeader::new(
                    reference,
                    total_parts,
                    sequence,
                ));
                ShortMessage::from_text(part, coding).with_udh(udh)
            })
            .collect();
        Ok(messages)
    }
}

/// Joins the decoded text of concatenated parts in sequence order. Returns
/// `None` unless every part of one reference is present exactly once.
pub fn reassemble(parts: &[ShortMessage]) -> Option<String> {
    let mut numbered = parts
        .iter()
        .map(|part| part.concatenated_header().map(|header| (header, part)))
        .collect::<Option<Vec<_>>>()?;
    numbered.sort_by_key(|(header, _)| header.sequence);

    let (first, _) = numbered.first()?;
    let reference = first.reference;
    let total_parts = first.total_parts;
    if numbered.len() != total_parts as usize {
        return None;
    }

    let mut text = String::new();
    for ((header, part), expected) in numbered.into_iter().zip(1..=total_parts) {
        if header.reference != reference || header.sequence != expected {
            return None;
        }
        text.push_str(&part.clone().decode_text());
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coding::CodingPolicy;

    #[test]
    fn short_text_is_a_single_message() {
        let messages = MessageComposer::default().compose("HELLO", 1).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].data_coding, DataCoding::Gsm7);
        assert_eq!(messages[0].udh, None);
        assert_eq!(messages[0].message.as_ref(), b"HELLO");
    }

    #[test]
    fn long_gsm7_text_uses_8bit_reference() {
        let text = "A".repeat(200);
        let messages = MessageComposer::default().compose(&text, 7).unwrap();
        assert_eq!(messages.len(), 2);

        // 140 octets less 6 of header leave room for 153 septets
        assert_eq!(messages[0].message.len(), 153);
        assert_eq!(messages[1].message.len(), 47);
        for (index, message) in messages.iter().enumerate() {
            let header = message.concatenated_header().unwrap();
            assert_eq!(header, ConcatenatedHeader::new(7, 2, index as u8 + 1));
            assert!(!header.is_extended());
        }
        assert_eq!(reassemble(&messages).unwrap(), text);
    }

    #[test]
    fn extended_reference_takes_one_more_octet() {
        let text = "Ж".repeat(150);
        let messages = MessageComposer::default().compose(&text, 0x1234).unwrap();
        assert_eq!(messages[0].data_coding, DataCoding::Cyrillic);
        // 140 less 7 octets of header
        assert_eq!(messages[0].message.len(), 133);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].concatenated_header().unwrap().is_extended());
        assert_eq!(reassemble(&messages).unwrap(), text);
    }

    #[test]
    fn safe_policy_splits_ucs2() {
        let config = CodecConfig::new().policy(CodingPolicy::Safe);
        let text = "Привет мир! ".repeat(10);
        let messages = MessageComposer::new(config).compose(&text, 3).unwrap();
        assert!(messages.iter().all(|m| m.data_coding == DataCoding::Ucs2));
        assert!(messages.iter().all(|m| m.body_len() <= 140));
        assert_eq!(reassemble(&messages).unwrap(), text);
    }

    #[test]
    fn too_many_parts() {
        let config = CodecConfig::new().segment_budget(8);
        let text = "A".repeat(600);
        assert_eq!(
            MessageComposer::new(config).compose(&text, 1),
            Err(ComposeError::TooManyParts(300))
        );
    }

    #[test]
    fn reassembly_needs_every_part() {
        let text = "B".repeat(400);
        let messages = MessageComposer::default().compose(&text, 9).unwrap();
        assert_eq!(messages.len(), 3);

        let mut shuffled = messages.clone();
        shuffled.reverse();
        assert_eq!(reassemble(&shuffled).unwrap(), text);

        assert_eq!(reassemble(&messages[..2]), None);
        assert_eq!(reassemble(&[]), None);
        assert_eq!(reassemble(&[ShortMessage::default()]), None);
    }
}
