use crate::layout::LayoutConfig;
use crate::search::FuzzyMode;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const ENV_FUZZY: &str = "DATUM_FUZZY";
pub const ENV_HORIZONTAL_SPACING: &str = "DATUM_HORIZONTAL_SPACING";
pub const ENV_CATEGORY_OFFSET: &str = "DATUM_CATEGORY_OFFSET";
pub const ENV_FILE_OFFSET: &str = "DATUM_FILE_OFFSET";
pub const ENV_FILE_SPACING: &str = "DATUM_FILE_SPACING";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub fuzzy: FuzzyMode,
    pub layout: LayoutConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or invalid keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = LayoutConfig::default();

        let fuzzy = match lookup(ENV_FUZZY) {
            Some(raw) => FuzzyMode::parse_str(&raw).unwrap_or_else(|| {
                warn!(key = ENV_FUZZY, value = %raw, "unknown fuzzy mode, using overlap");
                FuzzyMode::default()
            }),
            None => FuzzyMode::default(),
        };

        let spacing = |key: &str, default: f64| -> f64 {
            let Some(raw) = lookup(key) else {
                return default;
            };
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => v,
                _ => {
                    warn!(key, value = %raw, default, "invalid spacing, using default");
                    default
                }
            }
        };

        Self {
            fuzzy,
            layout: LayoutConfig {
                horizontal_spacing: spacing(ENV_HORIZONTAL_SPACING, defaults.horizontal_spacing),
                category_offset: spacing(ENV_CATEGORY_OFFSET, defaults.category_offset),
                file_offset: spacing(ENV_FILE_OFFSET, defaults.file_offset),
                file_spacing: spacing(ENV_FILE_SPACING, defaults.file_spacing),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.layout.horizontal_spacing, 350.0);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_FUZZY, "jaro-winkler"),
            (ENV_HORIZONTAL_SPACING, "400"),
            (ENV_FILE_SPACING, " 90.5 "),
        ]));
        assert_eq!(config.fuzzy, FuzzyMode::JaroWinkler);
        assert_eq!(config.layout.horizontal_spacing, 400.0);
        assert_eq!(config.layout.file_spacing, 90.5);
        assert_eq!(config.layout.file_offset, 180.0);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_FUZZY, "soundex"),
            (ENV_CATEGORY_OFFSET, "-20"),
            (ENV_FILE_OFFSET, "wide"),
        ]));
        assert_eq!(config, Config::default());
    }
}
