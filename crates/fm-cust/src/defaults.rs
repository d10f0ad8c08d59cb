//! Platform customization defaults
//!
//! These values come from the platform's FM customization header and are
//! identical for every chip. They are grouped in [`CustDefaults`] so a
//! product can override them without touching the resolver.

/// Lowest accepted desense RSSI threshold (dBm)
pub const RSSI_TH_L2_MIN: i32 = -102;
/// Highest accepted desense RSSI threshold (dBm)
pub const RSSI_TH_L2_MAX: i32 = -72;

/// Radio region band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Band {
    /// US/Europe, 87.5 - 108.0 MHz
    #[default]
    UsEurope,
    /// Japan, 76.0 - 90.0 MHz
    Japan,
    /// Japan wide, 76.0 - 108.0 MHz
    JapanWide,
}

impl Band {
    pub fn code(&self) -> u8 {
        match self {
            Band::UsEurope => 1,
            Band::Japan => 2,
            Band::JapanWide => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Band::UsEurope),
            2 => Some(Band::Japan),
            3 => Some(Band::JapanWide),
            _ => None,
        }
    }
}

/// Seek/scan step size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeekSpace {
    Khz50,
    #[default]
    Khz100,
    Khz200,
}

impl SeekSpace {
    /// Driver code (5: 50 kHz, 1: 100 kHz, 2: 200 kHz)
    pub fn code(&self) -> u8 {
        match self {
            SeekSpace::Khz50 => 5,
            SeekSpace::Khz100 => 1,
            SeekSpace::Khz200 => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            5 => Some(SeekSpace::Khz50),
            1 => Some(SeekSpace::Khz100),
            2 => Some(SeekSpace::Khz200),
            _ => None,
        }
    }

    /// Step width in kHz
    pub fn khz(&self) -> u32 {
        match self {
            SeekSpace::Khz50 => 50,
            SeekSpace::Khz100 => 100,
            SeekSpace::Khz200 => 200,
        }
    }
}

/// Ordering applied to scan results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanSort {
    /// Keep the order the hardware reported
    #[default]
    None,
    /// Sort by ascending signal strength
    Up,
    /// Sort by descending signal strength
    Down,
}

impl ScanSort {
    pub fn code(&self) -> u8 {
        match self {
            ScanSort::None => 0,
            ScanSort::Up => 1,
            ScanSort::Down => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ScanSort::None),
            1 => Some(ScanSort::Up),
            2 => Some(ScanSort::Down),
            _ => None,
        }
    }
}

/// Customization values applied to every resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CustDefaults {
    /// Region band
    pub band: Band,
    /// Lower band edge in 100 kHz units (875 = 87.5 MHz)
    pub freq_min: i32,
    /// Upper band edge in 100 kHz units
    pub freq_max: i32,
    /// Maximum number of channels a scan may return
    pub max_scan_num: u16,
    /// Seek threshold level
    pub seek_lev: i32,
    /// Scan result ordering
    pub scan_sort: ScanSort,
    /// Desense RSSI threshold, clamped to [`RSSI_TH_L2_MIN`]..=[`RSSI_TH_L2_MAX`]
    pub dese_rssi_th: i32,
}

impl Default for CustDefaults {
    fn default() -> Self {
        Self {
            band: Band::UsEurope,
            freq_min: 875,
            freq_max: 1080,
            max_scan_num: 40,
            seek_lev: 4,
            scan_sort: ScanSort::None,
            dese_rssi_th: -102,
        }
    }
}

impl CustDefaults {
    /// Lower band edge in 10 kHz units
    pub fn low_band(&self) -> i32 {
        self.freq_min * 10
    }

    /// Upper band edge in 10 kHz units
    pub fn high_band(&self) -> i32 {
        self.freq_max * 10
    }

    /// Desense threshold pulled into the accepted range
    pub fn rssi_th_l2(&self) -> i32 {
        clamp_rssi_th_l2(self.dese_rssi_th)
    }
}

/// Clamp a desense RSSI threshold into `[-102, -72]`
pub fn clamp_rssi_th_l2(rssi: i32) -> i32 {
    rssi.clamp(RSSI_TH_L2_MIN, RSSI_TH_L2_MAX)
}
