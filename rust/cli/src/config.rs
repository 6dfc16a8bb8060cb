use serde::{Deserialize, Serialize};
use std::fs;

use felt_engine::player::MAX_SEATS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub seats: usize,
    pub seed: Option<u64>,
    pub save_path: String,
    pub history_path: Option<String>,
    pub strategy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_chips: 1000,
            seats: MAX_SEATS,
            seed: None,
            save_path: "felt_game_state.txt".into(),
            history_path: None,
            strategy: "threshold".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub seats: ValueSource,
    pub seed: ValueSource,
    pub save_path: ValueSource,
    pub history_path: ValueSource,
    pub strategy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            seats: ValueSource::Default,
            seed: ValueSource::Default,
            save_path: ValueSource::Default,
            history_path: ValueSource::Default,
            strategy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    starting_chips: Option<u32>,
    seats: Option<usize>,
    seed: Option<u64>,
    save_path: Option<String>,
    history_path: Option<String>,
    strategy: Option<String>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolve the configuration: defaults, then the TOML file named in
/// `FELT_CONFIG`, then the `FELT_SEED`/`FELT_SAVE` environment variables.
/// Each field remembers where its value came from.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FELT_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.save_path {
            cfg.save_path = v;
            sources.save_path = ValueSource::File;
        }
        if let Some(v) = f.history_path {
            cfg.history_path = Some(v);
            sources.history_path = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("FELT_SEED")
        && !seed.is_empty()
    {
        let parsed = seed
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid(format!("FELT_SEED must be an integer, got {:?}", seed)))?;
        cfg.seed = Some(parsed);
        sources.seed = ValueSource::Env;
    }

    if let Ok(path) = std::env::var("FELT_SAVE")
        && !path.is_empty()
    {
        cfg.save_path = path;
        sources.save_path = ValueSource::Env;
    }

    if cfg.seats < 2 || cfg.seats > MAX_SEATS {
        return Err(ConfigError::Invalid(format!(
            "seats must be between 2 and {}, got {}",
            MAX_SEATS, cfg.seats
        )));
    }
    if cfg.starting_chips == 0 {
        return Err(ConfigError::Invalid(
            "starting_chips must be positive".to_string(),
        ));
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}
