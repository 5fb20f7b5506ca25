use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Delay before the catalog resolves.
    pub catalog_latency_ms: u32,
    /// Delay before a simulated reply is appended.
    pub reply_latency_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// How long the "copied" indicator stays visible.
    pub copied_flash_ms: u32,
    /// localStorage key holding the theme name.
    pub theme_storage_key: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[simulation]
catalog_latency_ms = 1000
reply_latency_ms = 1500

[ui]
copied_flash_ms = 2000
theme_storage_key = "theme"
"#;

#[derive(Debug, Deserialize, Default)]
struct ConfigOverrides {
    #[serde(default)]
    simulation: SimulationOverrides,
    #[serde(default)]
    ui: UiOverrides,
}

#[derive(Debug, Deserialize, Default)]
struct SimulationOverrides {
    catalog_latency_ms: Option<u32>,
    reply_latency_ms: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
struct UiOverrides {
    copied_flash_ms: Option<u32>,
    theme_storage_key: Option<String>,
}

impl Config {
    fn apply(&mut self, overrides: ConfigOverrides) {
        let ConfigOverrides { simulation, ui } = overrides;
        if let Some(v) = simulation.catalog_latency_ms {
            self.simulation.catalog_latency_ms = v;
        }
        if let Some(v) = simulation.reply_latency_ms {
            self.simulation.reply_latency_ms = v;
        }
        if let Some(v) = ui.copied_flash_ms {
            self.ui.copied_flash_ms = v;
        }
        if let Some(v) = ui.theme_storage_key {
            self.ui.theme_storage_key = v;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                catalog_latency_ms: 1000,
                reply_latency_ms: 1500,
            },
            ui: UiConfig {
                copied_flash_ms: 2000,
                theme_storage_key: "theme".to_string(),
            },
        }
    }
}

/// Load configuration.
///
/// Starts from [`DEFAULT_CONFIG`] and layers every field present in
/// `overrides` on top of it. Missing fields keep their defaults.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(src) = overrides {
        let overrides: ConfigOverrides = toml::from_str(src)?;
        config.apply(overrides);
    }
    Ok(config)
}
