// ABOUTME: Unicode range tables describing which characters each 8-bit and multibyte coding accepts
// ABOUTME: Every table is ASCII plus the script ranges the coding's codepage can carry, or a superset of them

/// Inclusive code point ranges, sorted ascending
pub type RangeTable = &'static [(u32, u32)];

const ASCII_RANGE: (u32, u32) = (0x0000, 0x007F);

/// 7-bit ASCII
pub static ASCII: RangeTable = &[ASCII_RANGE];

/// ISO-8859-1: ASCII plus the printable upper half
pub static LATIN1: RangeTable = &[ASCII_RANGE, (0x00A0, 0x00FF)];

/// ISO-8859-5: ASCII plus the Cyrillic letters the codepage maps
pub static CYRILLIC: RangeTable = &[
    ASCII_RANGE,
    (0x0401, 0x040C),
    (0x040E, 0x044F),
    (0x0451, 0x045C),
    (0x045E, 0x045F),
];

/// ISO-8859-8: ASCII plus the Hebrew letters
pub static HEBREW: RangeTable = &[ASCII_RANGE, (0x05D0, 0x05EA)];

/// Shift-JIS: ASCII, CJK punctuation, kana, unified ideographs and full/half width forms.
/// Only a subset of the ideograph block is in JIS X 0208, so membership here
/// is a prefilter and the codepage decides.
pub static SHIFT_JIS: RangeTable = &[
    ASCII_RANGE,
    (0x3000, 0x3003),
    (0x3005, 0x3015),
    (0x3041, 0x3093),
    (0x309B, 0x309E),
    (0x30A1, 0x30F6),
    (0x30FB, 0x30FE),
    (0x4E00, 0x9FA0),
    (0xFF01, 0xFF5E),
    (0xFF61, 0xFF9F),
];

/// EUC-KR: ASCII, CJK punctuation, Hangul compatibility jamo, Hangul syllables
/// and full width forms. A few full width forms are missing from KS X 1001,
/// the codepage decides those.
pub static EUC_KR: RangeTable = &[
    ASCII_RANGE,
    (0x3000, 0x3003),
    (0x3008, 0x3011),
    (0x3131, 0x318E),
    (0xAC00, 0xD7A3),
    (0xFF01, 0xFF5E),
];

/// Returns true if `c` falls inside one of the ranges
pub fn contains(table: RangeTable, c: char) -> bool {
    let code = c as u32;
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < code {
                std::cmp::Ordering::Less
            } else if lo > code {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Returns true if every character of `text` is covered by the table
pub fn covers(table: RangeTable, text: &str) -> bool {
    text.chars().all(|c| contains(table, c))
}
