//! FM Chip Customization Library
//!
//! This crate works out the default operating parameters for MediaTek
//! connsys FM radio tuners:
//!
//! - **Chip detection**: maps `persist.vendor.connsys.fm_chipid` (and, as a
//!   fallback, `vendor.connsys.adie.chipid`) onto a [`ChipId`]
//! - **Fake channels**: per-chip tables of frequencies where the tuner
//!   reports spurious stations, with the RSSI a real station must beat
//! - **Defaults**: band edges, seek step, scan limits and the desense
//!   RSSI threshold
//!
//! Properties are read through the [`PropertySource`] trait so the same
//! resolution runs against a live device, a captured `getprop` dump or a
//! test fixture.
//!
//! # Example
//!
//! ```rust
//! use fm_cust::{ChipId, CustConfig, CustResolver, MemoryProperties, SeekSpace};
//!
//! let props = MemoryProperties::new()
//!     .with("vendor.connsys.adie.chipid", "0x6635")
//!     .with("persist.vendor.connsys.fm_50khz_support", "1");
//!
//! let mut cfg = CustConfig::default();
//! CustResolver::new(props).get_config(&mut cfg).unwrap();
//!
//! assert_eq!(cfg.chip, ChipId::Mt6635);
//! assert_eq!(cfg.seek_space, SeekSpace::Khz50);
//! assert_eq!(cfg.fake_chan.unwrap().size, 4);
//! ```

pub mod channels;
pub mod chip;
pub mod config;
pub mod defaults;
pub mod error;
pub mod props;

pub use channels::{FakeChannel, FakeChannelInfo, FakeChannelTable};
pub use chip::ChipId;
pub use config::{get_config, resolve_chip_id, update_config, CustConfig, CustResolver, LOG_TAG};
pub use defaults::{clamp_rssi_th_l2, Band, CustDefaults, ScanSort, SeekSpace};
pub use error::CustError;
pub use props::{EnvProperties, MemoryProperties, PropertySource};
