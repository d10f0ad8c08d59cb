//! FM chip identification
//!
//! Maps the connsys chip id strings published as system properties onto
//! the closed set of FM chips this crate knows how to configure.

use std::fmt;

/// Identifies the FM-capable connsys chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChipId {
    /// SoC-integrated FM (reported as "soc")
    Mt6580,
    Mt6620,
    Mt6627,
    Mt6628,
    Mt6630,
    Mt6631,
    Mt6632,
    Mt6635,
    /// No known chip could be resolved
    #[default]
    Unsupported,
}

impl ChipId {
    /// Every supported chip, in table order
    pub const SUPPORTED: [ChipId; 8] = [
        ChipId::Mt6580,
        ChipId::Mt6620,
        ChipId::Mt6627,
        ChipId::Mt6628,
        ChipId::Mt6630,
        ChipId::Mt6631,
        ChipId::Mt6632,
        ChipId::Mt6635,
    ];

    /// Map a `persist.vendor.connsys.fm_chipid` value
    ///
    /// Matching is exact: no trimming, no case folding.
    pub fn from_fm_chipid(value: &str) -> Self {
        match value {
            "soc" => ChipId::Mt6580,
            "mt6620" => ChipId::Mt6620,
            "mt6627" => ChipId::Mt6627,
            "mt6628" => ChipId::Mt6628,
            "mt6630" => ChipId::Mt6630,
            "mt6631" => ChipId::Mt6631,
            "mt6632" => ChipId::Mt6632,
            "mt6635" => ChipId::Mt6635,
            _ => ChipId::Unsupported,
        }
    }

    /// Map a `vendor.connsys.adie.chipid` value
    ///
    /// Only the A-die chips that carry FM are recognised here.
    pub fn from_adie_chipid(value: &str) -> Self {
        match value {
            "0x6631" => ChipId::Mt6631,
            "0x6635" => ChipId::Mt6635,
            _ => ChipId::Unsupported,
        }
    }

    /// Numeric chip id as used by the FM driver (`-1` when unsupported)
    pub fn raw(&self) -> i32 {
        match self {
            ChipId::Mt6580 => 0x6580,
            ChipId::Mt6620 => 0x6620,
            ChipId::Mt6627 => 0x6627,
            ChipId::Mt6628 => 0x6628,
            ChipId::Mt6630 => 0x6630,
            ChipId::Mt6631 => 0x6631,
            ChipId::Mt6632 => 0x6632,
            ChipId::Mt6635 => 0x6635,
            ChipId::Unsupported => -1,
        }
    }

    /// Look up a chip by its numeric driver id
    pub fn from_raw(raw: i32) -> Self {
        Self::SUPPORTED
            .iter()
            .copied()
            .find(|chip| chip.raw() == raw)
            .unwrap_or(ChipId::Unsupported)
    }

    /// Returns a human-readable name for the chip
    pub fn name(&self) -> &'static str {
        match self {
            ChipId::Mt6580 => "MT6580",
            ChipId::Mt6620 => "MT6620",
            ChipId::Mt6627 => "MT6627",
            ChipId::Mt6628 => "MT6628",
            ChipId::Mt6630 => "MT6630",
            ChipId::Mt6631 => "MT6631",
            ChipId::Mt6632 => "MT6632",
            ChipId::Mt6635 => "MT6635",
            ChipId::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ChipId::Unsupported)
    }
}

impl fmt::Display for ChipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
