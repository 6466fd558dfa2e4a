// ABOUTME: Settings for coding selection and message composition
// ABOUTME: Callers fill these from their own configuration source; nothing is read from the process

use crate::coding::{CodingPolicy, CodingSelector};

/// Octets available to one short message on the air interface
pub const DEFAULT_SEGMENT_BUDGET: usize = 140;

/// Coding and segmentation settings
///
/// ```
/// use smpp_pdu::config::CodecConfig;
/// use smpp_pdu::coding::CodingPolicy;
///
/// let config = CodecConfig::new()
///     .policy(CodingPolicy::Safe)
///     .gsm7_capable(false);
/// assert_eq!(config.segment_budget, 140);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Which codings the selector may pick from
    pub policy: CodingPolicy,
    /// Whether the peer accepts the GSM 7-bit default alphabet
    pub gsm7_capable: bool,
    /// Octets per segment, user data header included
    pub segment_budget: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            policy: CodingPolicy::All,
            gsm7_capable: true,
            segment_budget: DEFAULT_SEGMENT_BUDGET,
        }
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    crate::macros::builder_setters! {
        policy: CodingPolicy,
        gsm7_capable: bool,
        segment_budget: usize,
    }

    /// Coding selector for the configured policy
    pub fn selector(&self) -> CodingSelector {
        CodingSelector::new(self.policy)
    }
}
