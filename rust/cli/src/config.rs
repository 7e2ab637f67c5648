use maskcard_engine::config::{AbilityCosts, TableConfig, ThinkTime};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "MASKCARD_CONFIG";
pub const SEED_ENV: &str = "MASKCARD_SEED";
pub const POLICY_ENV: &str = "MASKCARD_POLICY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub table: TableConfig,
    pub policy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            policy: "weighted".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub initial_chips: ValueSource,
    pub forced_bet: ValueSource,
    pub think_time: ValueSource,
    pub include_jokers: ValueSource,
    pub seed: ValueSource,
    pub abilities: ValueSource,
    pub policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            initial_chips: ValueSource::Default,
            forced_bet: ValueSource::Default,
            think_time: ValueSource::Default,
            include_jokers: ValueSource::Default,
            seed: ValueSource::Default,
            abilities: ValueSource::Default,
            policy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line flags on top of file and environment values.
    pub fn with_flags(mut self, seed: Option<u64>, policy: Option<&str>) -> Self {
        if let Some(seed) = seed {
            self.config.table.seed = Some(seed);
            self.sources.seed = ValueSource::Flag;
        }
        if let Some(policy) = policy {
            self.config.policy = policy.to_string();
            self.sources.policy = ValueSource::Flag;
        }
        self
    }
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves the configuration: defaults, then the TOML file named by
/// `MASKCARD_CONFIG`, then `MASKCARD_SEED` / `MASKCARD_POLICY`.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.initial_chips {
            cfg.table.initial_chips = v;
            sources.initial_chips = ValueSource::File;
        }
        if let Some(v) = f.forced_bet {
            cfg.table.forced_bet = v;
            sources.forced_bet = ValueSource::File;
        }
        if let Some(v) = f.think_time {
            cfg.table.think_time = v;
            sources.think_time = ValueSource::File;
        }
        if let Some(v) = f.include_jokers {
            cfg.table.include_jokers = v;
            sources.include_jokers = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.table.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.abilities {
            cfg.table.abilities = v;
            sources.abilities = ValueSource::File;
        }
        if let Some(v) = f.policy {
            cfg.policy = v;
            sources.policy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.table.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(policy) = std::env::var(POLICY_ENV)
        && !policy.is_empty()
    {
        cfg.policy = policy;
        sources.policy = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    initial_chips: Option<i64>,
    #[serde(default)]
    forced_bet: Option<i64>,
    #[serde(default)]
    think_time: Option<ThinkTime>,
    #[serde(default)]
    include_jokers: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    abilities: Option<AbilityCosts>,
    #[serde(default)]
    policy: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if maskcard_ai::create_policy(&cfg.policy).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Unknown policy '{}' (expected one of: {})",
            cfg.policy,
            maskcard_ai::POLICY_NAMES.join(", ")
        )));
    }
    Ok(())
}
