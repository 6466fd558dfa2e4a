// ABOUTME: SMPP data_coding octet with message waiting and message class overlays
// ABOUTME: Resolves every raw value to the base coding used for validation, text codecs and splitting

use crate::coding::{self, Splitter, TextCodec};
use serde::Serialize;
use std::fmt;

/// The data_coding octet. Raw values are preserved so a decoded PDU encodes
/// back to the same octet, including reserved values and the message
/// waiting/message class groups.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub enum DataCoding {
    /// SMSC default alphabet (GSM 7-bit)
    #[default]
    Gsm7,
    /// IA5/ASCII, carried with the ISO-8859-9 codepage
    Ascii,
    /// Octet unspecified (8-bit binary)
    Octet,
    /// Latin-1 (ISO-8859-1)
    Latin1,
    /// Octet unspecified, alternate value 0x04
    Octet4,
    /// JIS (X 0208-1990), carried as Shift-JIS
    ShiftJis,
    /// Cyrillic (ISO-8859-5)
    Cyrillic,
    /// Latin/Hebrew (ISO-8859-8)
    Hebrew,
    /// UCS-2/UTF-16BE (ISO/IEC-10646)
    Ucs2,
    /// Music codes (ISO-2022-JP)
    Iso2022Jp,
    /// Extended Kanji JIS (X 0212-1990), carried as EUC-JP
    EucJp,
    /// KS C 5601, carried as EUC-KR
    EucKr,
    /// Sentinel for PDUs whose short message carries no data_coding octet
    NoCoding,
    /// Any other raw value
    Other(u8),
}

impl DataCoding {
    pub const NO_CODING_BYTE: u8 = 0xBF;

    /// Creates a DataCoding from the raw octet without losing information
    pub fn from_byte(value: u8) -> Self {
        match value {
            0x00 => DataCoding::Gsm7,
            0x01 => DataCoding::Ascii,
            0x02 => DataCoding::Octet,
            0x03 => DataCoding::Latin1,
            0x04 => DataCoding::Octet4,
            0x05 => DataCoding::ShiftJis,
            0x06 => DataCoding::Cyrillic,
            0x07 => DataCoding::Hebrew,
            0x08 => DataCoding::Ucs2,
            0x0A => DataCoding::Iso2022Jp,
            0x0D => DataCoding::EucJp,
            0x0E => DataCoding::EucKr,
            Self::NO_CODING_BYTE => DataCoding::NoCoding,
            _ => DataCoding::Other(value),
        }
    }

    /// Maps a numeric coding code to a named coding. Unrecognized and reserved
    /// codes become UCS-2 so decoding never fails.
    pub fn from_code(code: u8) -> Self {
        match Self::from_byte(code) {
            DataCoding::Other(_) => DataCoding::Ucs2,
            coding => coding,
        }
    }

    /// Returns the raw u8 value for wire protocol
    pub fn to_byte(&self) -> u8 {
        match self {
            DataCoding::Gsm7 => 0x00,
            DataCoding::Ascii => 0x01,
            DataCoding::Octet => 0x02,
            DataCoding::Latin1 => 0x03,
            DataCoding::Octet4 => 0x04,
            DataCoding::ShiftJis => 0x05,
            DataCoding::Cyrillic => 0x06,
            DataCoding::Hebrew => 0x07,
            DataCoding::Ucs2 => 0x08,
            DataCoding::Iso2022Jp => 0x0A,
            DataCoding::EucJp => 0x0D,
            DataCoding::EucKr => 0x0E,
            DataCoding::NoCoding => Self::NO_CODING_BYTE,
            DataCoding::Other(value) => *value,
        }
    }

    /// Decodes the message waiting indication group (high nibble 1100, 1101
    /// or 1110).
    pub fn message_waiting_info(&self) -> Option<MessageWaitingInfo> {
        let value = self.to_byte();
        let coding = match value >> 4 {
            0b1100 => DataCoding::NoCoding,
            0b1101 => DataCoding::Gsm7,
            0b1110 => DataCoding::Ucs2,
            _ => return None,
        };
        Some(MessageWaitingInfo {
            coding,
            active: (value >> 3) & 0b1 == 1,
            indication: IndicationType::from_bits(value),
        })
    }

    /// Decodes the message class group (high nibble 1111). Bit 2 selects
    /// UCS-2 over GSM-7.
    pub fn message_class(&self) -> Option<(DataCoding, MessageClass)> {
        let value = self.to_byte();
        if value >> 4 != 0b1111 {
            return None;
        }
        let coding = if (value >> 2) & 0b1 == 1 {
            DataCoding::Ucs2
        } else {
            DataCoding::Gsm7
        };
        Some((coding, MessageClass::from_bits(value)))
    }

    /// Creates a message class coding over GSM-7 or UCS-2
    pub fn with_class(unicode: bool, class: MessageClass) -> Self {
        let base = if unicode { 0xF4 } else { 0xF0 };
        Self::from_byte(base | class as u8)
    }

    /// The coding whose alphabet, codec and splitter apply to this octet
    pub fn base(&self) -> DataCoding {
        if let Some(info) = self.message_waiting_info() {
            info.coding
        } else if let Some((coding, _)) = self.message_class() {
            coding
        } else {
            *self
        }
    }

    /// Returns true if the whole of `text` is representable in this coding
    pub fn validate(&self, text: &str) -> bool {
        coding::validate(self.base(), text)
    }

    /// Bit-width family used to measure and segment text
    pub fn splitter(&self) -> Option<Splitter> {
        coding::splitter_for(self.base())
    }

    /// Byte-level text codec, if the coding has one
    pub fn text_codec(&self) -> Option<TextCodec> {
        TextCodec::for_coding(self.base())
    }

    /// Returns true for the GSM 7-bit alphabet, with or without overlays
    pub fn is_gsm7(&self) -> bool {
        self.base() == DataCoding::Gsm7
    }

    /// Returns true for UCS-2, with or without overlays
    pub fn is_unicode(&self) -> bool {
        self.base() == DataCoding::Ucs2
    }

    /// Returns true for the two unspecified octet codings
    pub fn is_octet(&self) -> bool {
        matches!(self, DataCoding::Octet | DataCoding::Octet4)
    }

    /// Returns the character set name for this encoding
    pub fn charset_name(&self) -> &'static str {
        match self {
            DataCoding::Gsm7 => "GSM 7-bit Default",
            DataCoding::Ascii => "ASCII/IA5",
            DataCoding::Octet | DataCoding::Octet4 => "Octet unspecified",
            DataCoding::Latin1 => "ISO-8859-1",
            DataCoding::ShiftJis => "JIS X 0208-1990",
            DataCoding::Cyrillic => "ISO-8859-5",
            DataCoding::Hebrew => "ISO-8859-8",
            DataCoding::Ucs2 => "UCS-2",
            DataCoding::Iso2022Jp => "ISO-2022-JP",
            DataCoding::EucJp => "JIS X 0212-1990",
            DataCoding::EucKr => "KS C 5601",
            DataCoding::NoCoding => "No coding",
            DataCoding::Other(_) => match self.base() {
                DataCoding::Other(_) => "Custom/Reserved",
                base => base.charset_name(),
            },
        }
    }
}

/// Message class carried in the low two bits of a class coding
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum MessageClass {
    /// Class 0, flash SMS (displayed immediately, not stored)
    Flash = 0,
    /// Class 1, mobile equipment specific
    MobileEquipment = 1,
    /// Class 2, SIM specific (stored on SIM card)
    SimSpecific = 2,
    /// Class 3, terminal equipment specific
    TerminalEquipment = 3,
}

impl MessageClass {
    fn from_bits(value: u8) -> Self {
        match value & 0b11 {
            0 => MessageClass::Flash,
            1 => MessageClass::MobileEquipment,
            2 => MessageClass::SimSpecific,
            _ => MessageClass::TerminalEquipment,
        }
    }

    /// Returns a human-readable description of the message class
    pub fn description(&self) -> &'static str {
        match self {
            MessageClass::Flash => "Flash SMS (immediate display)",
            MessageClass::MobileEquipment => "Mobile Equipment specific",
            MessageClass::SimSpecific => "SIM card storage",
            MessageClass::TerminalEquipment => "Terminal Equipment specific",
        }
    }
}

/// Indication carried in the low two bits of a message waiting coding
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum IndicationType {
    Voicemail = 0,
    Fax = 1,
    ElectronicMail = 2,
    Other = 3,
}

impl IndicationType {
    fn from_bits(value: u8) -> Self {
        match value & 0b11 {
            0 => IndicationType::Voicemail,
            1 => IndicationType::Fax,
            2 => IndicationType::ElectronicMail,
            _ => IndicationType::Other,
        }
    }
}

/// Decoded message waiting indication group
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MessageWaitingInfo {
    /// Coding of the accompanying text; `NoCoding` for the discard group
    pub coding: DataCoding,
    /// Indication active (bit 3)
    pub active: bool,
    pub indication: IndicationType,
}

impl fmt::Display for DataCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.charset_name())?;
        if let Some((_, class)) = self.message_class() {
            write!(f, " ({})", class.description())?;
        }
        Ok(())
    }
}

impl fmt::Debug for DataCoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataCoding({:08b})", self.to_byte())
    }
}

impl From<u8> for DataCoding {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<DataCoding> for u8 {
    fn from(data_coding: DataCoding) -> Self {
        data_coding.to_byte()
    }
}

crate::macros::octet_field!(DataCoding);
