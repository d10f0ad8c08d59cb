//! FM Customization Dump Tool
//!
//! Resolves the FM driver configuration a set of system properties would
//! produce and prints it. Properties come from captured snapshots
//! (`getprop` output or `build.prop` files), the environment, and
//! command-line overrides.

mod report;
mod sources;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fm_cust::{ChipId, CustConfig, CustDefaults, CustResolver, EnvProperties, MemoryProperties};
use sources::{parse_override, LayeredProperties};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print the FM customization resolved from system properties
#[derive(Parser, Debug)]
#[command(name = "fm-cust-dump")]
#[command(version)]
struct Args {
    /// Property snapshot(s) to load; earlier files take precedence
    #[arg(short, long, value_name = "FILE")]
    props: Vec<PathBuf>,

    /// Override a property (can be repeated)
    #[arg(short, long, value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Also read properties from environment variables
    #[arg(long)]
    env: bool,

    /// Prefix for environment variable names
    #[arg(long, value_name = "PREFIX", requires = "env")]
    env_prefix: Option<String>,

    /// JSON file overriding the platform defaults
    #[arg(long, value_name = "FILE")]
    defaults: Option<PathBuf>,

    /// Skip detection and configure this raw chip id (e.g. 0x6631)
    #[arg(long, value_name = "ID", value_parser = parse_chip)]
    chip: Option<ChipId>,

    /// Print JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_chip(value: &str) -> Result<ChipId, String> {
    let raw = fm_cust::props::parse_int32(value)
        .ok_or_else(|| format!("invalid chip id {value:?}"))?;
    match ChipId::from_raw(raw) {
        ChipId::Unsupported => Err(format!("unknown chip id {value}")),
        chip => Ok(chip),
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "fm_cust=warn,fm_cust_dump=warn,fmlib_cust=warn",
        1 => "fm_cust=info,fm_cust_dump=info,fmlib_cust=info",
        _ => "fm_cust=debug,fm_cust_dump=debug,fmlib_cust=debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_defaults(path: Option<&PathBuf>) -> Result<CustDefaults> {
    let Some(path) = path else {
        return Ok(CustDefaults::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read defaults {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid defaults {}", path.display()))
}

fn build_sources(args: &Args) -> Result<LayeredProperties> {
    let mut layered = LayeredProperties::new();

    let overrides = args
        .set
        .iter()
        .map(|arg| parse_override(arg))
        .collect::<Result<MemoryProperties>>()?;
    layered.push(overrides);

    if args.env {
        layered.push(EnvProperties::with_prefix(args.env_prefix.clone().unwrap_or_default()));
    }

    for path in &args.props {
        let props = MemoryProperties::load(path)?;
        tracing::info!("Loaded {} properties from {}", props.len(), path.display());
        layered.push(props);
    }

    Ok(layered)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let defaults = load_defaults(args.defaults.as_ref())?;
    let resolver = CustResolver::with_defaults(build_sources(&args)?, defaults);

    let mut cfg = CustConfig::default();
    match args.chip {
        Some(chip) => resolver.update_config(&mut cfg, chip),
        None => resolver.get_config(&mut cfg)?,
    }

    if !cfg.is_supported() {
        tracing::warn!("No supported FM chip found, using generic defaults");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
    } else {
        print!("{}", report::summary(&cfg));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chip() {
        assert_eq!(parse_chip("0x6631"), Ok(ChipId::Mt6631));
        assert_eq!(parse_chip("26165"), Ok(ChipId::Mt6635));
        assert!(parse_chip("0x1234").is_err());
        assert!(parse_chip("mt6631").is_err());
    }

    #[test]
    fn test_args_layering() {
        let args = Args::parse_from([
            "fm-cust-dump",
            "--set",
            "persist.vendor.connsys.fm_chipid=mt6632",
            "--json",
        ]);
        let sources = build_sources(&args).unwrap();
        let cfg = CustResolver::new(sources).config();

        assert_eq!(cfg.chip, ChipId::Mt6632);
        assert!(args.json);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_defaults() {
        assert_eq!(load_defaults(None).unwrap(), CustDefaults::default());
    }
}
