use std::time::Duration;

/// Key older boards saved under, so existing snapshots still load.
pub const DEFAULT_STORAGE_KEY: &str = "kanban-data-store";
pub const DEFAULT_LOAD_DELAY_MS: u32 = 1_000;
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        if tag == "en" || tag.starts_with("en-") {
            Some(Locale::En)
        } else if tag == "zh" || tag.starts_with("zh-") {
            Some(Locale::Zh)
        } else {
            None
        }
    }
}

/// Board-wide settings, provided to every component through context.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub storage_key: String,
    /// Simulated latency before the stored snapshot is read.
    pub load_delay_ms: u32,
    /// How often cards recompute their relative-time label.
    pub refresh_interval_ms: u32,
    pub locale: Locale,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            locale: Locale::default(),
        }
    }
}

impl BoardConfig {
    /// Builds a config from `data-*` style attributes, falling back to the
    /// defaults for anything missing or unparsable.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(key) = lookup("data-storage-key").filter(|k| !k.trim().is_empty()) {
            config = config.with_storage_key(key.trim());
        }
        if let Some(delay) = lookup("data-load-delay").and_then(|d| d.trim().parse().ok()) {
            config = config.with_load_delay_ms(delay);
        }
        if let Some(locale) = lookup("data-locale").and_then(|l| Locale::parse(&l)) {
            config = config.with_locale(locale);
        }
        config
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_load_delay_ms(mut self, delay_ms: u32) -> Self {
        self.load_delay_ms = delay_ms;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.refresh_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stored_board_layout() {
        let config = BoardConfig::default();
        assert_eq!(config.storage_key, "kanban-data-store");
        assert_eq!(config.load_delay_ms, 1_000);
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = BoardConfig::default()
            .with_storage_key("team-board")
            .with_load_delay_ms(0)
            .with_locale(Locale::Zh);
        assert_eq!(config.storage_key, "team-board");
        assert_eq!(config.load_delay_ms, 0);
        assert_eq!(config.locale, Locale::Zh);
        assert_eq!(config.refresh_interval_ms, DEFAULT_REFRESH_INTERVAL_MS);
    }

    #[test]
    fn reads_overrides_from_attributes() {
        let config = BoardConfig::from_attributes(|name| match name {
            "data-storage-key" => Some(" sprint-12 ".to_string()),
            "data-load-delay" => Some("250".to_string()),
            "data-locale" => Some("zh-CN".to_string()),
            _ => None,
        });
        assert_eq!(config.storage_key, "sprint-12");
        assert_eq!(config.load_delay_ms, 250);
        assert_eq!(config.locale, Locale::Zh);
    }

    #[test]
    fn ignores_blank_or_invalid_attributes() {
        let config = BoardConfig::from_attributes(|name| match name {
            "data-storage-key" => Some("   ".to_string()),
            "data-load-delay" => Some("soon".to_string()),
            "data-locale" => Some("fr".to_string()),
            _ => None,
        });
        assert_eq!(config, BoardConfig::default());
    }
}
