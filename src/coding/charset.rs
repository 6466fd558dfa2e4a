// ABOUTME: Byte-level text codecs for the codepage based data codings, backed by encoding_rs
// ABOUTME: Latin-1 and UCS-2 are handled directly, the rest map onto WHATWG encodings

use crate::datatypes::DataCoding;
use encoding_rs::{
    EUC_JP, EUC_KR, Encoding, ISO_2022_JP, ISO_8859_5, ISO_8859_8, SHIFT_JIS, UTF_16BE,
    WINDOWS_1254,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextCodecError {
    #[error("{charset} cannot represent the text")]
    Unmappable { charset: &'static str },

    #[error("bytes are not valid {charset}")]
    Malformed { charset: &'static str },
}

/// Converts between text and the octets of one data coding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextCodec {
    Charset(&'static Encoding),
    Latin1,
    Ucs2,
}

impl TextCodec {
    /// Looks up the codec registered for a base coding. GSM-7, the octet
    /// codings, the no-coding sentinel and reserved values have none.
    pub fn for_coding(coding: DataCoding) -> Option<TextCodec> {
        let codec = match coding {
            DataCoding::Ascii => TextCodec::Charset(WINDOWS_1254),
            DataCoding::Latin1 => TextCodec::Latin1,
            DataCoding::ShiftJis => TextCodec::Charset(SHIFT_JIS),
            DataCoding::Cyrillic => TextCodec::Charset(ISO_8859_5),
            DataCoding::Hebrew => TextCodec::Charset(ISO_8859_8),
            DataCoding::Ucs2 => TextCodec::Ucs2,
            DataCoding::Iso2022Jp => TextCodec::Charset(ISO_2022_JP),
            DataCoding::EucJp => TextCodec::Charset(EUC_JP),
            DataCoding::EucKr => TextCodec::Charset(EUC_KR),
            _ => return None,
        };
        Some(codec)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextCodec::Charset(encoding) => encoding.name(),
            TextCodec::Latin1 => "ISO-8859-1",
            TextCodec::Ucs2 => "UTF-16BE",
        }
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u8>, TextCodecError> {
        match self {
            TextCodec::Charset(encoding) => {
                let (bytes, _, had_errors) = encoding.encode(text);
                if had_errors {
                    return Err(TextCodecError::Unmappable {
                        charset: encoding.name(),
                    });
                }
                Ok(bytes.into_owned())
            }
            TextCodec::Latin1 => {
                if !encoding_rs::mem::is_str_latin1(text) {
                    return Err(TextCodecError::Unmappable {
                        charset: self.name(),
                    });
                }
                Ok(encoding_rs::mem::encode_latin1_lossy(text).into_owned())
            }
            TextCodec::Ucs2 => Ok(text
                .encode_utf16()
                .flat_map(|unit| unit.to_be_bytes())
                .collect()),
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String, TextCodecError> {
        let encoding = match self {
            TextCodec::Latin1 => return Ok(encoding_rs::mem::decode_latin1(bytes).into_owned()),
            TextCodec::Ucs2 => UTF_16BE,
            TextCodec::Charset(encoding) => *encoding,
        };
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or(TextCodecError::Malformed {
                charset: self.name(),
            })
    }
}
