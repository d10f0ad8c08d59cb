//! Layered property lookup

use anyhow::{bail, Result};
use fm_cust::PropertySource;

/// Property sources consulted in order; the first non-empty value wins
#[derive(Default)]
pub struct LayeredProperties {
    layers: Vec<Box<dyn PropertySource>>,
}

impl LayeredProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer below the existing ones
    pub fn push(&mut self, source: impl PropertySource + 'static) {
        self.layers.push(Box::new(source));
    }
}

impl PropertySource for LayeredProperties {
    fn get(&self, key: &str) -> Option<String> {
        self.layers
            .iter()
            .filter_map(|layer| layer.get(key))
            .find(|value| !value.is_empty())
    }
}

/// Split a `--set key=value` argument
pub fn parse_override(arg: &str) -> Result<(String, String)> {
    let Some((key, value)) = arg.split_once('=') else {
        bail!("expected key=value, got {arg:?}");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("missing property name in {arg:?}");
    }
    Ok((key.to_string(), value.trim().to_string()))
}
