//! Fake channel tables
//!
//! Some chips produce spurious stations at fixed frequencies (harmonics of
//! on-board clocks and similar). Each table lists those frequencies with the
//! RSSI a real station must exceed there. Tables end with a sentinel entry
//! whose frequency is `0`.

use crate::ChipId;

/// A single fake channel entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FakeChannel {
    /// Frequency in 10 kHz units (e.g. 9600 = 96.00 MHz)
    pub freq: i32,
    /// RSSI threshold below which a hit at `freq` is rejected
    pub rssi_th: i32,
    /// Unused, always -1 in the shipped tables
    pub reserve: i32,
}

impl FakeChannel {
    pub const fn new(freq: i32, rssi_th: i32, reserve: i32) -> Self {
        Self {
            freq,
            rssi_th,
            reserve,
        }
    }

    /// Terminating entry
    pub const SENTINEL: FakeChannel = FakeChannel::new(0, 0, 0);

    pub fn is_sentinel(&self) -> bool {
        self.freq <= 0
    }
}

static MT6580_FAKE_CH: &[FakeChannel] = &[
    FakeChannel::new(9600, -107, -1),
    FakeChannel::new(9570, -258, -1),
    FakeChannel::new(9580, -258, -1),
    FakeChannel::new(9590, -258, -1),
    FakeChannel::new(10400, -107, -1),
    FakeChannel::SENTINEL,
];

static MT6620_FAKE_CH: &[FakeChannel] = &[
    FakeChannel::new(10400, -40, -1),
    FakeChannel::new(9100, -40, -1),
    FakeChannel::new(9600, -40, -1),
    FakeChannel::new(9220, -80, -1),
    FakeChannel::SENTINEL,
];

static MT6627_FAKE_CH: &[FakeChannel] = &[
    FakeChannel::new(9600, -107, -1),
    FakeChannel::new(10400, -107, -1),
    FakeChannel::new(10750, -224, -1),
    FakeChannel::SENTINEL,
];

static MT6628_FAKE_CH: &[FakeChannel] = &[FakeChannel::SENTINEL];

static MT6630_FAKE_CH: &[FakeChannel] = &[
    FakeChannel::new(9600, -107, -1),
    FakeChannel::new(10400, -107, -1),
    FakeChannel::SENTINEL,
];

static MT6631_FAKE_CH: &[FakeChannel] = &[
    FakeChannel::new(9210, -205, -1),
    FakeChannel::new(9600, -152, -1),
    FakeChannel::new(10400, -152, -1),
    FakeChannel::new(10750, -205, -1),
    FakeChannel::SENTINEL,
];

static MT6632_FAKE_CH: &[FakeChannel] = &[
    FakeChannel::new(9600, -107, -1),
    FakeChannel::new(10400, -107, -1),
    FakeChannel::SENTINEL,
];

/// Lookup of the static fake channel tables
pub struct FakeChannelTable;

impl FakeChannelTable {
    /// Sentinel-terminated table for a chip, `None` when unsupported
    ///
    /// MT6635 shares the MT6631 table.
    pub fn for_chip(chip: ChipId) -> Option<&'static [FakeChannel]> {
        match chip {
            ChipId::Mt6580 => Some(MT6580_FAKE_CH),
            ChipId::Mt6620 => Some(MT6620_FAKE_CH),
            ChipId::Mt6627 => Some(MT6627_FAKE_CH),
            ChipId::Mt6628 => Some(MT6628_FAKE_CH),
            ChipId::Mt6630 => Some(MT6630_FAKE_CH),
            ChipId::Mt6631 | ChipId::Mt6635 => Some(MT6631_FAKE_CH),
            ChipId::Mt6632 => Some(MT6632_FAKE_CH),
            ChipId::Unsupported => None,
        }
    }
}

/// A fake channel table together with its valid entry count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FakeChannelInfo {
    /// Full table including the sentinel
    pub chan: &'static [FakeChannel],
    /// Number of entries before the sentinel
    pub size: usize,
}

impl FakeChannelInfo {
    /// Build the info for a table by counting entries up to the sentinel
    pub fn from_table(chan: &'static [FakeChannel]) -> Self {
        let size = chan.iter().take_while(|ch| !ch.is_sentinel()).count();
        Self { chan, size }
    }

    pub fn for_chip(chip: ChipId) -> Option<Self> {
        FakeChannelTable::for_chip(chip).map(Self::from_table)
    }

    /// The valid entries, without the sentinel
    pub fn channels(&self) -> &'static [FakeChannel] {
        &self.chan[..self.size]
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}
