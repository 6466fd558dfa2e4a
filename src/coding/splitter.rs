// ABOUTME: Per-character bit widths for each coding family and the budget-driven text splitter
// ABOUTME: Produces message segments that fit a byte budget once the UDH overhead is added

use super::gsm7;
use thiserror::Error;

/// Bit-width family of a data coding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Splitter {
    /// GSM-7: 7 bits, 14 for extension table characters
    SevenBit,
    /// Single octet codings (ASCII, Latin-1, Cyrillic, Hebrew, octet)
    OneByte,
    /// Shift-JIS, ISO-2022-JP, EUC-JP, EUC-KR: 8 bits below 0x7F, 16 otherwise
    Multibyte,
    /// UCS-2/UTF-16: 16 bits in the BMP, 32 for surrogate pairs
    Utf16,
}

/// Errors raised while segmenting text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error(
        "character {character:?} needs {bits} bits but only {available} bits fit in a segment"
    )]
    CharacterTooWide {
        character: char,
        bits: usize,
        available: usize,
    },
}

impl Splitter {
    /// Number of bits `c` occupies in this coding
    pub fn bit_width(&self, c: char) -> usize {
        let code = c as u32;
        match self {
            Splitter::SevenBit => {
                if gsm7::is_extended(c) {
                    14
                } else {
                    7
                }
            }
            Splitter::OneByte => 8,
            Splitter::Multibyte => {
                if code < 0x7F {
                    8
                } else {
                    16
                }
            }
            Splitter::Utf16 => {
                if code <= 0xD7FF || (0xE000..=0xFFFF).contains(&code) {
                    16
                } else {
                    32
                }
            }
        }
    }

    /// Total bit length of `input`
    pub fn bit_len(&self, input: &str) -> usize {
        input.chars().map(|c| self.bit_width(c)).sum()
    }

    /// Encoded length of `input` in octets, rounded up to a whole octet
    pub fn byte_len(&self, input: &str) -> usize {
        self.bit_len(input).div_ceil(8)
    }

    /// Splits `input` into segments whose bit length plus `udh_len` octets of
    /// header stays within `limit` octets. Concatenating the segments gives
    /// back `input`.
    pub fn split(&self, input: &str, limit: usize, udh_len: usize) -> Result<Vec<String>, SplitError> {
        let limit = limit * 8;
        let udh_len = udh_len * 8;
        let available = limit.saturating_sub(udh_len);

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut length = 0;

        for c in input.chars() {
            let bits = self.bit_width(c);
            if bits > available {
                return Err(SplitError::CharacterTooWide {
                    character: c,
                    bits,
                    available,
                });
            }

            if length + bits + udh_len > limit {
                segments.push(std::mem::take(&mut current));
                length = 0;
            }

            current.push(c);
            length += bits;
        }

        if length > 0 {
            segments.push(current);
        }

        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_is_five_octets_in_gsm7() {
        assert_eq!(Splitter::SevenBit.byte_len("HELLO"), 5);
        assert_eq!(Splitter::SevenBit.bit_len("HELLO"), 35);
    }

    #[test]
    fn bit_widths() {
        assert_eq!(Splitter::SevenBit.bit_width('€'), 14);
        assert_eq!(Splitter::OneByte.bit_width('Ж'), 8);
        assert_eq!(Splitter::Multibyte.bit_width('a'), 8);
        assert_eq!(Splitter::Multibyte.bit_width('\u{7F}'), 16);
        assert_eq!(Splitter::Multibyte.bit_width('あ'), 16);
        assert_eq!(Splitter::Utf16.bit_width('Ж'), 16);
        assert_eq!(Splitter::Utf16.bit_width('\u{E000}'), 16);
        assert_eq!(Splitter::Utf16.bit_width('😀'), 32);
    }

    #[test]
    fn byte_len_rounds_up() {
        // 8 septets fit exactly in 7 octets
        assert_eq!(Splitter::SevenBit.byte_len("ABCDEFGH"), 7);
        assert_eq!(Splitter::SevenBit.byte_len("ABCDEFGHI"), 8);
        assert_eq!(Splitter::Utf16.byte_len("a😀"), 6);
        assert_eq!(Splitter::OneByte.byte_len(""), 0);
    }

    #[test]
    fn long_gsm7_text_splits_at_153_characters() {
        let text: String = "0123456789".repeat(18);
        assert_eq!(text.chars().count(), 180);

        let segments = Splitter::SevenBit.split(&text, 140, 6).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].chars().count(), 153);
        assert_eq!(segments[1].chars().count(), 27);
        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn single_part_limits() {
        let text = "a".repeat(160);
        assert_eq!(Splitter::SevenBit.split(&text, 140, 0).unwrap().len(), 1);

        let text = "a".repeat(161);
        assert_eq!(Splitter::SevenBit.split(&text, 140, 0).unwrap().len(), 2);

        let text = "Ж".repeat(70);
        assert_eq!(Splitter::Utf16.split(&text, 140, 0).unwrap().len(), 1);

        let text = "Ж".repeat(134);
        let segments = Splitter::Utf16.split(&text, 140, 6).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].chars().count(), 67);
    }

    #[test]
    fn extension_characters_are_not_torn() {
        // 152 septets + one 14 bit character would exceed 1072 bits
        let text = format!("{}€", "a".repeat(152));
        let segments = Splitter::SevenBit.split(&text, 140, 6).unwrap();
        assert_eq!(segments, vec!["a".repeat(152), "€".to_string()]);
    }

    #[test]
    fn budget_large_enough_never_fragments() {
        for (splitter, text) in [
            (Splitter::SevenBit, "Hello {world} €"),
            (Splitter::OneByte, "Привет мир"),
            (Splitter::Multibyte, "こんにちは abc"),
            (Splitter::Utf16, "emoji 😀 text"),
        ] {
            let budget = splitter.byte_len(text) + 1;
            let segments = splitter.split(text, budget, 0).unwrap();
            assert_eq!(segments, vec![text.to_string()]);
        }
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(Splitter::OneByte.split("", 140, 6).unwrap().is_empty());
    }

    #[test]
    fn character_wider_than_budget_is_reported() {
        let err = Splitter::Utf16.split("a😀", 5, 2).unwrap_err();
        assert_eq!(
            err,
            SplitError::CharacterTooWide {
                character: '😀',
                bits: 32,
                available: 24
            }
        );

        // a budget fully consumed by the header leaves no room at all
        assert!(Splitter::OneByte.split("a", 6, 6).is_err());
    }
}
