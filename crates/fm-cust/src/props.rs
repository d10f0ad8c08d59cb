//! System property access
//!
//! The resolver never touches the platform property store directly; it reads
//! through a [`PropertySource`]. Two sources are provided:
//!
//! - [`MemoryProperties`]: an in-memory map, optionally parsed from a
//!   `build.prop` style file or captured `getprop` output
//! - [`EnvProperties`]: maps property names onto environment variables

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::CustError;

/// Primary FM chip selector
pub const PROP_FM_CHIPID: &str = "persist.vendor.connsys.fm_chipid";
/// A-die chip id, consulted when the primary selector is missing or unknown
pub const PROP_ADIE_CHIPID: &str = "vendor.connsys.adie.chipid";
/// `1` enables 50 kHz seek steps
pub const PROP_FM_50KHZ_SUPPORT: &str = "persist.vendor.connsys.fm_50khz_support";
/// `1` disables short antenna compensation
pub const PROP_FM_SHORT_ANTENNA_SUPPORT: &str = "persist.vendor.connsys.fm_short_antenna_support";

/// Read-only access to string-valued system properties
pub trait PropertySource {
    /// Get a property value
    ///
    /// Implementations may return `Some("")`; callers treat an empty value
    /// the same as a missing one.
    fn get(&self, key: &str) -> Option<String>;

    /// Get a property as an `i32`, falling back to `default` when it is
    /// missing, empty, malformed or out of range
    fn get_int32(&self, key: &str, default: i32) -> i32 {
        self.get(key)
            .and_then(|value| parse_int32(&value))
            .unwrap_or(default)
    }
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: PropertySource + ?Sized> PropertySource for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl PropertySource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Parse an integer property value the way the platform does
///
/// Leading whitespace and a sign are accepted, the base follows C
/// conventions (`0x` hex, leading `0` octal, decimal otherwise) and the
/// whole remaining string must be consumed.
pub fn parse_int32(value: &str) -> Option<i32> {
    let s = value.trim_start_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r']);

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let hex = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"));
    let (radix, digits) = if let Some(hex) = hex {
        (16, hex)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// In-memory property store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryProperties {
    values: BTreeMap<String, String>,
}

impl MemoryProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a property snapshot
    ///
    /// Accepts `key=value` lines (`build.prop` style) and `[key]: [value]`
    /// lines as printed by `getprop`. Blank lines and `#` comments are
    /// skipped; later definitions override earlier ones.
    pub fn parse(text: &str) -> Result<Self, CustError> {
        let mut props = Self::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = if line.starts_with('[') {
                parse_getprop_line(line)
            } else {
                parse_assignment_line(line)
            }
            .map_err(|reason| CustError::Parse {
                line: line_no,
                reason,
            })?;

            props.set(key, value);
        }

        debug!("Parsed {} properties", props.len());
        Ok(props)
    }

    /// Load a property snapshot from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CustError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CustError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}

fn parse_assignment_line(line: &str) -> Result<(&str, &str), String> {
    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {line:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("missing property name".to_string());
    }
    Ok((key, value.trim()))
}

fn parse_getprop_line(line: &str) -> Result<(&str, &str), String> {
    let malformed = || format!("expected [key]: [value], got {line:?}");

    let rest = line.strip_prefix('[').ok_or_else(malformed)?;
    let (key, rest) = rest.split_once(']').ok_or_else(malformed)?;
    let rest = rest.strip_prefix(':').ok_or_else(malformed)?.trim_start();
    let value = rest
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or_else(malformed)?;

    if key.is_empty() {
        return Err("missing property name".to_string());
    }
    Ok((key, value))
}

impl PropertySource for MemoryProperties {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}

/// Properties read from environment variables
///
/// `persist.vendor.connsys.fm_chipid` is looked up as
/// `<prefix>PERSIST_VENDOR_CONNSYS_FM_CHIPID`.
#[derive(Debug, Clone, Default)]
pub struct EnvProperties {
    prefix: String,
}

impl EnvProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable name for a property
    pub fn env_key(&self, key: &str) -> String {
        let mapped: String = key
            .chars()
            .map(|c| match c {
                '.' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        format!("{}{}", self.prefix, mapped)
    }
}

impl PropertySource for EnvProperties {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(self.env_key(key)).ok()
    }
}
