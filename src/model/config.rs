use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Periods of the two reconciliation processes, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// How often edited rows are copied into the store and flushed
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// How often rows are re-sorted by priority and re-rendered
    #[serde(default = "default_reorder_ms")]
    pub reorder_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            tick_ms: default_tick_ms(),
            reorder_ms: default_reorder_ms(),
        }
    }
}

impl SyncConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn reorder_period(&self) -> Duration {
        Duration::from_millis(self.reorder_ms.max(1))
    }
}

fn default_tick_ms() -> u64 {
    10
}

fn default_reorder_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsConfig {
    /// Lists shown in the tab bar at once; the rest are parked in the cache
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for TabsConfig {
    fn default() -> Self {
        TabsConfig {
            max_visible: default_max_visible(),
        }
    }
}

impl TabsConfig {
    /// `max_visible`, never below one
    pub fn capacity(&self) -> usize {
        self.max_visible.max(1)
    }
}

fn default_max_visible() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    /// Theme overrides, e.g. `background = "#000000"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
