// ABOUTME: Coding registry and best-fit coding selection for outbound text
// ABOUTME: Maps each data coding to its validator, text codec and splitter

pub mod alphabet;
pub mod charset;
pub mod gsm7;
pub mod splitter;

pub use charset::{TextCodec, TextCodecError};
pub use splitter::{SplitError, Splitter};

use crate::datatypes::DataCoding;
use std::fmt;
use std::str::FromStr;

/// Candidate order for the all-coding policy after GSM-7. UCS-2 always
/// validates so the search never falls off the end.
const ALL_CODING_PRIORITY: [DataCoding; 7] = [
    DataCoding::Ascii,
    DataCoding::Latin1,
    DataCoding::Cyrillic,
    DataCoding::Hebrew,
    DataCoding::ShiftJis,
    DataCoding::EucKr,
    DataCoding::Ucs2,
];

/// Returns true if every character of `text` is representable in `coding`.
/// The range table rejects foreign scripts cheaply; the coding's codec then
/// has the final word, since a range can be wider than the codepage.
/// Overlays are not resolved here, see [`DataCoding::validate`].
pub(crate) fn validate(coding: DataCoding, text: &str) -> bool {
    let table = match coding {
        DataCoding::Gsm7 => return gsm7::is_valid(text),
        DataCoding::Ucs2 => return true,
        DataCoding::Ascii => alphabet::ASCII,
        DataCoding::Latin1 => alphabet::LATIN1,
        DataCoding::Cyrillic => alphabet::CYRILLIC,
        DataCoding::Hebrew => alphabet::HEBREW,
        DataCoding::ShiftJis => alphabet::SHIFT_JIS,
        DataCoding::EucKr => alphabet::EUC_KR,
        _ => return false,
    };
    alphabet::covers(table, text)
        && TextCodec::for_coding(coding).is_some_and(|codec| codec.encode(text).is_ok())
}

pub(crate) fn splitter_for(coding: DataCoding) -> Option<Splitter> {
    match coding {
        DataCoding::Gsm7 => Some(Splitter::SevenBit),
        DataCoding::Ascii
        | DataCoding::Octet
        | DataCoding::Latin1
        | DataCoding::Octet4
        | DataCoding::Cyrillic
        | DataCoding::Hebrew => Some(Splitter::OneByte),
        DataCoding::ShiftJis | DataCoding::Iso2022Jp | DataCoding::EucJp | DataCoding::EucKr => {
            Some(Splitter::Multibyte)
        }
        DataCoding::Ucs2 => Some(Splitter::Utf16),
        _ => None,
    }
}

/// Picks the narrowest coding from the full priority list
pub fn best_all_coding(text: &str, gsm7_capable: bool) -> DataCoding {
    if gsm7_capable && gsm7::is_valid(text) {
        return DataCoding::Gsm7;
    }
    ALL_CODING_PRIORITY
        .into_iter()
        .find(|&coding| validate(coding, text))
        .unwrap_or(DataCoding::Ucs2)
}

/// Picks between GSM-7, UCS-2 and octet only
pub fn best_safe_coding(text: &str, gsm7_capable: bool) -> DataCoding {
    if gsm7_capable && gsm7::is_valid(text) {
        DataCoding::Gsm7
    } else if text.chars().any(|c| c as u32 > 0xFF) {
        DataCoding::Ucs2
    } else {
        DataCoding::Octet
    }
}

/// Coding selection policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodingPolicy {
    /// Search every supported alphabet for the narrowest fit
    #[default]
    All,
    /// Restrict the choice to GSM-7, UCS-2 and octet
    Safe,
}

impl FromStr for CodingPolicy {
    type Err = String;

    /// Accepts the policy names or a boolean "safe coding" switch
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "false" | "0" => Ok(CodingPolicy::All),
            "safe" | "true" | "1" => Ok(CodingPolicy::Safe),
            other => Err(format!("unknown coding policy: {other}")),
        }
    }
}

impl fmt::Display for CodingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodingPolicy::All => write!(f, "all"),
            CodingPolicy::Safe => write!(f, "safe"),
        }
    }
}

/// Chooses a data coding for outbound text under a fixed policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodingSelector {
    policy: CodingPolicy,
}

impl CodingSelector {
    pub fn new(policy: CodingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CodingPolicy {
        self.policy
    }

    pub fn best_coding(&self, text: &str, gsm7_capable: bool) -> DataCoding {
        match self.policy {
            CodingPolicy::All => best_all_coding(text, gsm7_capable),
            CodingPolicy::Safe => best_safe_coding(text, gsm7_capable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::ShortMessage;

    #[test]
    fn hello_selects_gsm7() {
        assert_eq!(best_all_coding("HELLO", true), DataCoding::Gsm7);
        assert_eq!(best_safe_coding("HELLO", true), DataCoding::Gsm7);
        assert_eq!(DataCoding::Gsm7.splitter().unwrap().byte_len("HELLO"), 5);
    }

    #[test]
    fn all_policy_priority() {
        assert_eq!(best_all_coding("HELLO", false), DataCoding::Ascii);
        assert_eq!(best_all_coding("Привет", true), DataCoding::Cyrillic);
        assert_eq!(best_all_coding("Ça coûte 5 €", true), DataCoding::Ucs2);
        assert_eq!(best_all_coding("naïve", true), DataCoding::Latin1);
        assert_eq!(best_all_coding("שלום", true), DataCoding::Hebrew);
        assert_eq!(best_all_coding("こんにちは", true), DataCoding::ShiftJis);
        assert_eq!(best_all_coding("안녕하세요", true), DataCoding::EucKr);
        assert_eq!(best_all_coding("emoji 😀", true), DataCoding::Ucs2);
    }

    #[test]
    fn all_policy_result_always_validates() {
        for text in [
            "", "plain", "{€}", "naïve", "Жж", "ש", "日本", "한", "😀", "Ж and ש", "我们", "中文",
            "说话", "＼",
        ] {
            for gsm7_capable in [true, false] {
                let coding = best_all_coding(text, gsm7_capable);
                assert!(coding.validate(text), "{text:?} -> {coding:?}");

                // the chosen coding must also carry the text without downgrading
                let mut message = ShortMessage::from_text(text, coding);
                assert_eq!(message.data_coding, coding, "{text:?}");
                assert_eq!(message.decode_text(), text);
            }
        }
    }

    #[test]
    fn ideographs_outside_jis_fall_back_to_ucs2() {
        // 们 and 说 are simplified forms with no JIS X 0208 code
        assert!(alphabet::covers(alphabet::SHIFT_JIS, "我们"));
        assert!(!validate(DataCoding::ShiftJis, "我们"));
        assert_eq!(best_all_coding("我们", true), DataCoding::Ucs2);
        assert_eq!(best_all_coding("说话", true), DataCoding::Ucs2);
        assert_eq!(best_all_coding("中文", true), DataCoding::ShiftJis);
    }

    #[test]
    fn every_table_character_survives_its_codec() {
        // single byte tables list exactly what the codepage maps
        let tables = [
            (DataCoding::Ascii, alphabet::ASCII, true),
            (DataCoding::Latin1, alphabet::LATIN1, true),
            (DataCoding::Cyrillic, alphabet::CYRILLIC, true),
            (DataCoding::Hebrew, alphabet::HEBREW, true),
            (DataCoding::ShiftJis, alphabet::SHIFT_JIS, false),
            (DataCoding::EucKr, alphabet::EUC_KR, false),
        ];

        for (coding, table, exact) in tables {
            let codec = TextCodec::for_coding(coding).unwrap();
            let mut accepted = 0;
            for &(lo, hi) in table {
                for c in (lo..=hi).filter_map(char::from_u32) {
                    let text = c.to_string();
                    if !validate(coding, &text) {
                        assert!(!exact, "{coding:?} rejects {c:?} from its own table");
                        continue;
                    }
                    accepted += 1;
                    let bytes = codec.encode(&text).unwrap();
                    assert_eq!(codec.decode(&bytes).unwrap(), text, "{coding:?} {c:?}");
                }
            }
            assert!(accepted > 0, "{coding:?}");
        }
    }

    #[test]
    fn safe_policy() {
        assert_eq!(best_safe_coding("{€}", true), DataCoding::Gsm7);
        assert_eq!(best_safe_coding("{€}", false), DataCoding::Ucs2);
        assert_eq!(best_safe_coding("naïve", true), DataCoding::Octet);
        assert_eq!(best_safe_coding("Привет", true), DataCoding::Ucs2);
    }

    #[test]
    fn validators() {
        assert!(validate(DataCoding::Ucs2, "anything 😀"));
        assert!(!validate(DataCoding::Octet, "a"));
        assert!(!validate(DataCoding::NoCoding, ""));
        assert!(DataCoding::from_byte(0xF1).validate("GSM text"));
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("all".parse::<CodingPolicy>().unwrap(), CodingPolicy::All);
        assert_eq!("Safe".parse::<CodingPolicy>().unwrap(), CodingPolicy::Safe);
        assert_eq!("true".parse::<CodingPolicy>().unwrap(), CodingPolicy::Safe);
        assert_eq!("0".parse::<CodingPolicy>().unwrap(), CodingPolicy::All);
        assert!("maybe".parse::<CodingPolicy>().is_err());
    }

    #[test]
    fn selector_follows_policy() {
        let text = "Привет";
        assert_eq!(CodingSelector::default().best_coding(text, true), DataCoding::Cyrillic);
        assert_eq!(
            CodingSelector::new(CodingPolicy::Safe).best_coding(text, true),
            DataCoding::Ucs2
        );
    }
}
