//! Human-readable configuration summary

use std::fmt::Write;

use fm_cust::CustConfig;

/// Render a resolved configuration as aligned text
pub fn summary(cfg: &CustConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "chip          {} (0x{:x})", cfg.chip, cfg.chip.raw());
    let _ = writeln!(out, "band          {:?} ({})", cfg.band, cfg.band.code());
    let _ = writeln!(
        out,
        "range         {:.2} - {:.2} MHz",
        f64::from(cfg.low_band) / 100.0,
        f64::from(cfg.high_band) / 100.0
    );
    let _ = writeln!(
        out,
        "seek space    {} kHz ({})",
        cfg.seek_space.khz(),
        cfg.seek_space.code()
    );
    let _ = writeln!(out, "max scan      {}", cfg.max_scan_num);
    let _ = writeln!(out, "seek level    {}", cfg.seek_lev);
    let _ = writeln!(out, "scan sort     {:?} ({})", cfg.scan_sort, cfg.scan_sort.code());
    let _ = writeln!(out, "short antenna {}", cfg.short_ana_sup);
    let _ = writeln!(out, "rssi th l2    {} dBm", cfg.rssi_th_l2);

    match &cfg.fake_chan {
        Some(info) if info.is_empty() => {
            let _ = writeln!(out, "fake channels none");
        }
        Some(info) => {
            let _ = writeln!(out, "fake channels {}", info.size);
            for ch in info.channels() {
                let _ = writeln!(
                    out,
                    "  {:>7.2} MHz  rssi {}",
                    f64::from(ch.freq) / 100.0,
                    ch.rssi_th
                );
            }
        }
        None => {
            let _ = writeln!(out, "fake channels unsupported chip");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fm_cust::{ChipId, CustResolver, MemoryProperties};

    #[test]
    fn test_summary_lists_channels() {
        let mut cfg = CustConfig::default();
        CustResolver::new(MemoryProperties::new()).update_config(&mut cfg, ChipId::Mt6630);

        let text = summary(&cfg);
        assert!(text.contains("chip          MT6630 (0x6630)"));
        assert!(text.contains("range         87.50 - 108.00 MHz"));
        assert!(text.contains("fake channels 2"));
        assert!(text.contains("  96.00 MHz  rssi -107"));
    }

    #[test]
    fn test_summary_unsupported() {
        let cfg = CustResolver::new(MemoryProperties::new()).config();
        let text = summary(&cfg);
        assert!(text.contains("chip          unsupported (0xffffffff)"));
        assert!(text.contains("fake channels unsupported chip"));
    }

    #[test]
    fn test_summary_mt6628() {
        let mut cfg = CustConfig::default();
        CustResolver::new(MemoryProperties::new()).update_config(&mut cfg, ChipId::Mt6628);
        assert!(summary(&cfg).contains("fake channels none"));
    }
}
