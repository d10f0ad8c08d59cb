//! Configuration resolution
//!
//! [`CustResolver`] reads the connsys properties, works out which FM chip is
//! present and fills a [`CustConfig`] with the chip's fake channel table and
//! the platform defaults.

use tracing::{debug, error, info, warn};

use crate::channels::{FakeChannelInfo, FakeChannelTable};
use crate::defaults::{Band, CustDefaults, ScanSort, SeekSpace};
use crate::error::CustError;
use crate::props::{
    PropertySource, PROP_ADIE_CHIPID, PROP_FM_50KHZ_SUPPORT, PROP_FM_CHIPID,
    PROP_FM_SHORT_ANTENNA_SUPPORT,
};
use crate::ChipId;

/// Log target shared by all resolver diagnostics
pub const LOG_TAG: &str = "fmlib_cust";

/// Resolved FM driver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CustConfig {
    /// Detected chip
    pub chip: ChipId,
    /// Region band
    pub band: Band,
    /// Lower band edge in 10 kHz units
    pub low_band: i32,
    /// Upper band edge in 10 kHz units
    pub high_band: i32,
    /// Seek step
    pub seek_space: SeekSpace,
    /// Maximum number of scan results
    pub max_scan_num: u16,
    /// Seek threshold level
    pub seek_lev: i32,
    /// Scan result ordering
    pub scan_sort: ScanSort,
    /// Short antenna compensation enabled
    pub short_ana_sup: bool,
    /// Desense RSSI threshold, always within [-102, -72]
    pub rssi_th_l2: i32,
    /// Fake channel table for the chip, `None` when unsupported
    pub fake_chan: Option<FakeChannelInfo>,
}

impl CustConfig {
    /// True when the chip was recognised and a fake channel table attached
    pub fn is_supported(&self) -> bool {
        self.chip.is_supported() && self.fake_chan.is_some()
    }
}

/// Resolves [`CustConfig`] from a property source
#[derive(Debug, Clone)]
pub struct CustResolver<P> {
    props: P,
    defaults: CustDefaults,
}

impl<P: PropertySource> CustResolver<P> {
    /// Create a resolver using the platform defaults
    pub fn new(props: P) -> Self {
        Self::with_defaults(props, CustDefaults::default())
    }

    /// Create a resolver with custom defaults
    pub fn with_defaults(props: P, defaults: CustDefaults) -> Self {
        Self { props, defaults }
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn defaults(&self) -> &CustDefaults {
        &self.defaults
    }

    /// Non-empty property value
    fn read(&self, key: &str) -> Option<String> {
        self.props.get(key).filter(|v| !v.is_empty())
    }

    /// Work out which FM chip is present
    ///
    /// The FM chip id property wins; the A-die chip id is only consulted
    /// when that is missing or unknown. Never fails: an unknown chip is
    /// reported as [`ChipId::Unsupported`].
    pub fn resolve_chip_id(&self) -> ChipId {
        let mut chip = match self.read(PROP_FM_CHIPID) {
            Some(value) => {
                let chip = ChipId::from_fm_chipid(&value);
                if !chip.is_supported() {
                    debug!(target: LOG_TAG, "unknown {}={}", PROP_FM_CHIPID, value);
                }
                chip
            }
            None => ChipId::Unsupported,
        };

        if !chip.is_supported() {
            match self.read(PROP_ADIE_CHIPID) {
                Some(value) => {
                    chip = ChipId::from_adie_chipid(&value);
                    if !chip.is_supported() {
                        warn!(target: LOG_TAG, "not support chipid={}", value);
                    }
                }
                None => warn!(target: LOG_TAG, "get {} fail", PROP_ADIE_CHIPID),
            }
        }

        chip
    }

    /// Fill `cfg` for the given chip
    ///
    /// Every field is written. An unsupported chip still gets the platform
    /// defaults but no fake channel table.
    pub fn update_config(&self, cfg: &mut CustConfig, chip: ChipId) {
        info!(target: LOG_TAG, "update connsys chipid=0x{:x}", chip.raw());

        cfg.chip = chip;

        let fake_ch = FakeChannelTable::for_chip(chip);
        if fake_ch.is_none() {
            error!(target: LOG_TAG, "not support chipid=0x{:x}", chip.raw());
        }

        cfg.band = self.defaults.band;
        cfg.low_band = self.defaults.low_band();
        cfg.high_band = self.defaults.high_band();

        cfg.seek_space = if self.props.get_int32(PROP_FM_50KHZ_SUPPORT, 0) == 1 {
            SeekSpace::Khz50
        } else {
            SeekSpace::Khz100
        };

        cfg.max_scan_num = self.defaults.max_scan_num;
        cfg.seek_lev = self.defaults.seek_lev;
        cfg.scan_sort = self.defaults.scan_sort;

        // Property set means the product ships a short antenna and wants
        // compensation off.
        cfg.short_ana_sup = self.props.get_int32(PROP_FM_SHORT_ANTENNA_SUPPORT, 0) != 1;

        cfg.rssi_th_l2 = self.defaults.rssi_th_l2();

        cfg.fake_chan = fake_ch.map(FakeChannelInfo::from_table);
    }

    /// Resolve the chip and fill `cfg`
    ///
    /// Always returns `Ok`; check [`CustConfig::is_supported`] to find out
    /// whether a chip was recognised.
    pub fn get_config(&self, cfg: &mut CustConfig) -> Result<(), CustError> {
        let chip = self.resolve_chip_id();
        self.update_config(cfg, chip);
        Ok(())
    }

    /// Resolve into a fresh [`CustConfig`]
    pub fn config(&self) -> CustConfig {
        let mut cfg = CustConfig::default();
        self.update_config(&mut cfg, self.resolve_chip_id());
        cfg
    }
}

/// Resolve the chip from `props`
pub fn resolve_chip_id<P: PropertySource>(props: P) -> ChipId {
    CustResolver::new(props).resolve_chip_id()
}

/// Fill `cfg` for `chip` using the platform defaults
pub fn update_config<P: PropertySource>(props: P, cfg: &mut CustConfig, chip: ChipId) {
    CustResolver::new(props).update_config(cfg, chip)
}

/// Resolve the chip from `props` and fill `cfg` using the platform defaults
pub fn get_config<P: PropertySource>(props: P, cfg: &mut CustConfig) -> Result<(), CustError> {
    CustResolver::new(props).get_config(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::MemoryProperties;

    fn resolver(pairs: &[(&str, &str)]) -> CustResolver<MemoryProperties> {
        CustResolver::new(pairs.iter().copied().collect())
    }

    #[test]
    fn test_primary_property_wins() {
        let r = resolver(&[(PROP_FM_CHIPID, "mt6627"), (PROP_ADIE_CHIPID, "0x6635")]);
        assert_eq!(r.resolve_chip_id(), ChipId::Mt6627);
    }

    #[test]
    fn test_secondary_used_when_primary_unknown() {
        let r = resolver(&[(PROP_FM_CHIPID, "mt9999"), (PROP_ADIE_CHIPID, "0x6631")]);
        assert_eq!(r.resolve_chip_id(), ChipId::Mt6631);
    }

    #[test]
    fn test_empty_primary_is_missing() {
        let r = resolver(&[(PROP_FM_CHIPID, ""), (PROP_ADIE_CHIPID, "0x6635")]);
        assert_eq!(r.resolve_chip_id(), ChipId::Mt6635);
    }

    #[test]
    fn test_unknown_secondary() {
        let r = resolver(&[(PROP_ADIE_CHIPID, "0x6637")]);
        assert_eq!(r.resolve_chip_id(), ChipId::Unsupported);
    }

    #[test]
    fn test_nothing_set() {
        assert_eq!(resolver(&[]).resolve_chip_id(), ChipId::Unsupported);
    }

    #[test]
    fn test_update_populates_defaults() {
        let r = resolver(&[]);
        let mut cfg = CustConfig::default();
        r.update_config(&mut cfg, ChipId::Mt6630);

        assert_eq!(cfg.chip, ChipId::Mt6630);
        assert_eq!(cfg.band, Band::UsEurope);
        assert_eq!(cfg.low_band, 8750);
        assert_eq!(cfg.high_band, 10800);
        assert_eq!(cfg.seek_space, SeekSpace::Khz100);
        assert_eq!(cfg.max_scan_num, 40);
        assert_eq!(cfg.seek_lev, 4);
        assert_eq!(cfg.scan_sort, ScanSort::None);
        assert!(cfg.short_ana_sup);
        assert_eq!(cfg.rssi_th_l2, -102);
        assert_eq!(cfg.fake_chan.unwrap().size, 2);
        assert!(cfg.is_supported());
    }

    #[test]
    fn test_50khz_only_when_exactly_one() {
        for (value, expected) in [
            ("1", SeekSpace::Khz50),
            ("0x1", SeekSpace::Khz50),
            ("0", SeekSpace::Khz100),
            ("2", SeekSpace::Khz100),
            ("true", SeekSpace::Khz100),
            ("", SeekSpace::Khz100),
        ] {
            let r = resolver(&[(PROP_FM_50KHZ_SUPPORT, value)]);
            let mut cfg = CustConfig::default();
            r.update_config(&mut cfg, ChipId::Mt6631);
            assert_eq!(cfg.seek_space, expected, "value {value:?}");
        }
    }

    #[test]
    fn test_short_antenna_inverted() {
        let mut cfg = CustConfig::default();

        resolver(&[(PROP_FM_SHORT_ANTENNA_SUPPORT, "1")]).update_config(&mut cfg, ChipId::Mt6631);
        assert!(!cfg.short_ana_sup);

        resolver(&[(PROP_FM_SHORT_ANTENNA_SUPPORT, "0")]).update_config(&mut cfg, ChipId::Mt6631);
        assert!(cfg.short_ana_sup);

        resolver(&[]).update_config(&mut cfg, ChipId::Mt6631);
        assert!(cfg.short_ana_sup);
    }

    #[test]
    fn test_rssi_clamped_from_custom_defaults() {
        let props = MemoryProperties::new();
        let high = CustResolver::with_defaults(
            &props,
            CustDefaults {
                dese_rssi_th: -10,
                ..Default::default()
            },
        );
        let low = CustResolver::with_defaults(
            &props,
            CustDefaults {
                dese_rssi_th: -200,
                ..Default::default()
            },
        );

        assert_eq!(high.config().rssi_th_l2, -72);
        assert_eq!(low.config().rssi_th_l2, -102);
    }

    #[test]
    fn test_unsupported_clears_previous_table() {
        let r = resolver(&[]);
        let mut cfg = CustConfig::default();

        r.update_config(&mut cfg, ChipId::Mt6580);
        assert!(cfg.fake_chan.is_some());

        r.update_config(&mut cfg, ChipId::Unsupported);
        assert_eq!(cfg.chip, ChipId::Unsupported);
        assert!(cfg.fake_chan.is_none());
        assert!(!cfg.is_supported());
        assert_eq!(cfg.low_band, 8750);
    }

    #[test]
    fn test_get_config_always_ok() {
        let mut cfg = CustConfig::default();
        assert!(get_config(MemoryProperties::new(), &mut cfg).is_ok());
        assert_eq!(cfg.chip, ChipId::Unsupported);
    }

    #[test]
    fn test_free_functions() {
        let props = MemoryProperties::new().with(PROP_FM_CHIPID, "soc");
        assert_eq!(resolve_chip_id(&props), ChipId::Mt6580);

        let mut cfg = CustConfig::default();
        update_config(&props, &mut cfg, ChipId::Mt6620);
        assert_eq!(cfg.chip, ChipId::Mt6620);
        assert_eq!(cfg.fake_chan.unwrap().size, 4);
    }
}
