use crate::error::AppError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.cfg";
const KEYS: [&str; 5] = ["LEAGUE_PATH", "RIOT_KEY", "SUMMONER", "REGION", "CERT_PATH"];

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub league_path: Option<PathBuf>,
    pub riot_key: Option<String>,
    pub summoner: Option<String>,
    pub region: String,
    pub cert_path: PathBuf,
}

/// A Riot ID split into its `Name#TAG` halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl Config {
    /// Loads the config file (explicit path, `./config.cfg`, then the user config dir)
    /// and overlays environment variables of the same names.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::load_with_env(explicit, |key| env::var(key).ok())
    }

    fn load_with_env<F>(explicit: Option<&Path>, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => Self::default_path().ok_or_else(|| {
                AppError::ConfigError(format!(
                    "{} not found in the working directory or user config directory",
                    CONFIG_FILE_NAME
                ))
            })?,
        };
        tracing::debug!(path = %path.display(), "reading config");

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let mut pairs = parse_lines(&content);

        for key in KEYS {
            if let Some(value) = lookup(key) {
                pairs.push((key.to_string(), value));
            }
        }

        Ok(Self::from_pairs(pairs))
    }

    fn default_path() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("loot_report").join(CONFIG_FILE_NAME))
            .filter(|p| p.exists())
    }

    /// Later pairs win over earlier ones; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Config {
            region: "euw1".to_string(),
            cert_path: PathBuf::from("riotgames.pem"),
            ..Default::default()
        };

        for (key, value) in pairs {
            let value = value.trim().to_string();
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "LEAGUE_PATH" => config.league_path = Some(PathBuf::from(value)),
                "RIOT_KEY" => config.riot_key = Some(value),
                "SUMMONER" => config.summoner = Some(value),
                "REGION" => config.region = value,
                "CERT_PATH" => config.cert_path = PathBuf::from(value),
                _ => {}
            }
        }

        config
    }

    pub fn league_path(&self) -> Result<&Path, AppError> {
        self.league_path
            .as_deref()
            .ok_or_else(|| AppError::ConfigError("LEAGUE_PATH not set in config".to_string()))
    }

    pub fn riot_key(&self) -> Result<&str, AppError> {
        self.riot_key
            .as_deref()
            .ok_or_else(|| AppError::ConfigError("RIOT_KEY not set in config".to_string()))
    }

    pub fn riot_id(&self) -> Result<RiotId, AppError> {
        let raw = self
            .summoner
            .as_deref()
            .ok_or_else(|| AppError::ConfigError("SUMMONER not set in config".to_string()))?;
        RiotId::parse(raw)
    }
}

/// Splits `KEY=value` lines at the first `=`; values are taken verbatim, so
/// Windows paths with spaces or backslashes need no quoting.
fn parse_lines(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .collect()
}

impl RiotId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.split_once('#') {
            Some((name, tag)) if !name.trim().is_empty() && !tag.trim().is_empty() => Ok(RiotId {
                game_name: name.trim().to_string(),
                tag_line: tag.trim().to_string(),
            }),
            _ => Err(AppError::ConfigError(format!(
                "Invalid Riot ID '{}'. Use format: Name#TAG",
                raw
            ))),
        }
    }
}

impl std::fmt::Display for RiotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}
