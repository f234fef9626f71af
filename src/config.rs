//! Storefront Configuration
//!
//! Defaults, overridable by `<meta name="nursery:..." content="...">` tags
//! in the host page.

pub const DEFAULT_API_BASE: &str = "https://openapi.programming-hero.com/api";
pub const DEFAULT_DISPLAY_CAP: usize = 9;
pub const DEFAULT_DESCRIPTION_CHARS: usize = 8;

pub const META_API_BASE: &str = "nursery:api-base";
pub const META_DISPLAY_CAP: &str = "nursery:display-cap";
pub const META_DESCRIPTION_CHARS: &str = "nursery:description-chars";

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Base URL of the plant API, without trailing slash
    pub api_base: String,
    /// Maximum number of product cards in the grid
    pub display_cap: usize,
    /// Characters of description shown on a card
    pub description_chars: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            display_cap: DEFAULT_DISPLAY_CAP,
            description_chars: DEFAULT_DESCRIPTION_CHARS,
        }
    }
}

impl StorefrontConfig {
    /// Read overrides from the current page's meta tags
    pub fn from_document() -> Self {
        Self::from_lookup(read_meta)
    }

    /// Build from any key -> value source; bad values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup(META_API_BASE) {
            let base = base.trim().trim_end_matches('/');
            if base.is_empty() {
                tracing::warn!(key = META_API_BASE, "empty value, using default");
            } else {
                config.api_base = base.to_string();
            }
        }
        if let Some(raw) = lookup(META_DISPLAY_CAP) {
            config.display_cap = parse_positive(META_DISPLAY_CAP, &raw, config.display_cap);
        }
        if let Some(raw) = lookup(META_DESCRIPTION_CHARS) {
            config.description_chars =
                parse_positive(META_DESCRIPTION_CHARS, &raw, config.description_chars);
        }

        config
    }
}

fn parse_positive(key: &str, raw: &str, default: usize) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => value,
        _ => {
            tracing::warn!(key, value = raw, "expected a positive integer, using default");
            default
        }
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> StorefrontConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_overrides() {
        assert_eq!(config_from(&[]), StorefrontConfig::default());
        assert_eq!(StorefrontConfig::default().display_cap, 9);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (META_API_BASE, "http://localhost:8080/api/"),
            (META_DISPLAY_CAP, "3"),
            (META_DESCRIPTION_CHARS, " 40 "),
        ]);
        assert_eq!(config.api_base, "http://localhost:8080/api");
        assert_eq!(config.display_cap, 3);
        assert_eq!(config.description_chars, 40);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            (META_API_BASE, "  "),
            (META_DISPLAY_CAP, "0"),
            (META_DESCRIPTION_CHARS, "lots"),
        ]);
        assert_eq!(config, StorefrontConfig::default());
    }
}
