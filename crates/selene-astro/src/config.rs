//! Resolver settings, loadable from `configs/selene.toml`.

use crate::ephemeris::types::GeoLocation;
use serde::Deserialize;
use std::fs;

fn default_location() -> GeoLocation {
    // Documented default reference location: New York. Used when a supplied
    // city resolves to zero matches, and flagged approximate in the result.
    GeoLocation {
        lat: 40.7128,
        lon: -74.0060,
    }
}

fn default_geocode_timeout_ms() -> u64 {
    5_000
}

fn default_ephemeris_timeout_ms() -> u64 {
    5_000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    #[serde(default = "default_location")]
    pub default_location: GeoLocation,
    #[serde(default = "default_geocode_timeout_ms")]
    pub geocode_timeout_ms: u64,
    #[serde(default = "default_ephemeris_timeout_ms")]
    pub ephemeris_timeout_ms: u64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            default_location: default_location(),
            geocode_timeout_ms: default_geocode_timeout_ms(),
            ephemeris_timeout_ms: default_ephemeris_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    resolver: Option<ResolverSettings>,
}

/// Try common relative paths for `configs/selene.toml`.
fn read_config_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/selene.toml", "../../configs/selene.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load selene.toml from {:?}", paths);
}

/// Load resolver settings. A missing config file yields the defaults; a
/// malformed one is an error.
pub fn load_resolver_settings() -> anyhow::Result<ResolverSettings> {
    let text = match read_config_toml_text() {
        Ok(text) => text,
        Err(_) => return Ok(ResolverSettings::default()),
    };
    let root: RootConfigToml = toml::from_str(&text)
        .map_err(|e| anyhow::anyhow!("Failed to parse selene.toml for resolver settings: {e}"))?;
    Ok(root.resolver.unwrap_or_default())
}
