// ABOUTME: GSM 03.38 default alphabet and extension table with unpacked septet encode/decode
// ABOUTME: Backs GSM-7 validation, bit-width calculation and short message text conversion

use std::collections::HashMap;
use std::sync::LazyLock;

/// Escape septet that introduces an extension table character
pub const ESCAPE: u8 = 0x1B;

/// Septet written for characters outside the alphabet
const REPLACEMENT: u8 = b'?';

/// GSM 03.38 default alphabet indexed by septet value. Slot 0x1B is the escape
/// code and never maps to a character.
const DEFAULT_ALPHABET: [char; 128] = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å', //
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', '\u{1B}', 'Æ', 'æ', 'ß', 'É', //
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', //
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?', //
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', //
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§', //
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', //
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à', //
];

/// Extension table, each entry is sent as ESC followed by the code
const EXTENSION_TABLE: [(u8, char); 10] = [
    (0x0A, '\u{0C}'),
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x65, '€'),
];

#[derive(Clone, Copy, Debug)]
enum Septet {
    Default(u8),
    Extended(u8),
}

static CHAR_TO_SEPTET: LazyLock<HashMap<char, Septet>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(DEFAULT_ALPHABET.len() + EXTENSION_TABLE.len());
    for (code, &ch) in DEFAULT_ALPHABET.iter().enumerate() {
        if code as u8 != ESCAPE {
            map.insert(ch, Septet::Default(code as u8));
        }
    }
    for &(code, ch) in &EXTENSION_TABLE {
        map.insert(ch, Septet::Extended(code));
    }
    map
});

/// Returns true if every character of `input` is in the default or extension alphabet
pub fn is_valid(input: &str) -> bool {
    input.chars().all(|c| CHAR_TO_SEPTET.contains_key(&c))
}

/// Returns true if `c` needs the escape mechanism
pub fn is_extended(c: char) -> bool {
    matches!(CHAR_TO_SEPTET.get(&c), Some(Septet::Extended(_)))
}

/// Encodes text as unpacked septets, one per octet. Characters outside the
/// alphabet are replaced with `?`.
pub fn encode(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for c in input.chars() {
        match CHAR_TO_SEPTET.get(&c) {
            Some(Septet::Default(code)) => out.push(*code),
            Some(Septet::Extended(code)) => {
                out.push(ESCAPE);
                out.push(*code);
            }
            None => out.push(REPLACEMENT),
        }
    }
    out
}

/// Decodes unpacked septets. The high bit of every octet is ignored, unknown
/// escape codes fall back to the default alphabet character and a trailing
/// escape is dropped.
pub fn decode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    let mut escaped = false;
    for &byte in data {
        let septet = byte & 0x7F;
        if escaped {
            escaped = false;
            match EXTENSION_TABLE.iter().find(|(code, _)| *code == septet) {
                Some(&(_, ch)) => out.push(ch),
                None => out.push(DEFAULT_ALPHABET[septet as usize]),
            }
        } else if septet == ESCAPE {
            escaped = true;
        } else {
            out.push(DEFAULT_ALPHABET[septet as usize]);
        }
    }
    out
}
