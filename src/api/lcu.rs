use crate::config::Config;
use crate::error::AppError;
use base64::{engine::general_purpose, Engine as _};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::endpoints::{LCU_HOST, LCU_USERNAME, PLAYER_LOOT_PATH, USER_AGENT};
use super::models::LootItem;

const SERVICE: &str = "League client";

/// Connection details the running client publishes in its lockfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
    pub port: u16,
    pub password: String,
    pub protocol: String,
}

impl Lockfile {
    pub fn read(league_path: &Path) -> Result<Self, AppError> {
        let path = league_path.join("lockfile");
        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::ConfigError(format!(
                "Cannot read {} ({}). Is the League client running?",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Format: `name:pid:port:password:protocol` on the first line.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let line = content.lines().next().unwrap_or_default().trim();
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() < 5 {
            return Err(AppError::ConfigError(format!(
                "Malformed lockfile: expected 5 fields, found {}",
                fields.len()
            )));
        }

        let port = fields[2].parse::<u16>().map_err(|_| {
            AppError::ConfigError(format!("Malformed lockfile: invalid port '{}'", fields[2]))
        })?;

        Ok(Lockfile {
            port,
            password: fields[3].to_string(),
            protocol: fields[4].to_string(),
        })
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}:{}/", self.protocol, LCU_HOST, self.port)
    }

    pub fn basic_auth(&self) -> String {
        let secret = general_purpose::STANDARD.encode(format!("{}:{}", LCU_USERNAME, self.password));
        format!("Basic {}", secret)
    }
}

pub struct LcuClient {
    agent: ureq::Agent,
    base_url: String,
    auth_header: String,
}

impl LcuClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let lockfile = Lockfile::read(config.league_path()?)?;
        let connector = Self::tls_connector(&config.cert_path)?;
        let agent = ureq::AgentBuilder::new()
            .tls_connector(Arc::new(connector))
            .user_agent(USER_AGENT)
            .build();

        Ok(LcuClient {
            agent,
            base_url: lockfile.base_url(),
            auth_header: lockfile.basic_auth(),
        })
    }

    fn tls_connector(cert_path: &Path) -> Result<native_tls::TlsConnector, AppError> {
        let pem = fs::read(cert_path).map_err(|e| {
            AppError::ConfigError(format!(
                "Cannot read Riot root certificate {}: {}",
                cert_path.display(),
                e
            ))
        })?;
        let cert = native_tls::Certificate::from_pem(&pem)
            .map_err(|e| AppError::ConfigError(format!("Invalid certificate: {}", e)))?;

        native_tls::TlsConnector::builder()
            .add_root_certificate(cert)
            .build()
            .map_err(|e| AppError::ConfigError(format!("TLS setup failed: {}", e)))
    }

    pub fn get_player_loot(&self) -> Result<Vec<LootItem>, AppError> {
        let url = format!("{}{}", self.base_url, PLAYER_LOOT_PATH);
        tracing::debug!(%url, "GET");

        let body = self
            .agent
            .get(&url)
            .set("Authorization", &self.auth_header)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| AppError::from_ureq(SERVICE, e))?
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| AppError::JsonError(format!("player loot: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lockfile_fields() {
        let lockfile = Lockfile::parse("LeagueClient:12345:54321:s3cr3t:https\n").unwrap();
        assert_eq!(
            lockfile,
            Lockfile {
                port: 54321,
                password: "s3cr3t".to_string(),
                protocol: "https".to_string(),
            }
        );
        assert_eq!(lockfile.base_url(), "https://127.0.0.1:54321/");
    }

    #[test]
    fn basic_auth_uses_riot_user() {
        let lockfile = Lockfile::parse("LeagueClient:1:2999:pass:https").unwrap();
        // base64("riot:pass")
        assert_eq!(lockfile.basic_auth(), "Basic cmlvdDpwYXNz");
    }

    #[test]
    fn rejects_short_lockfile() {
        let err = Lockfile::parse("LeagueClient:12345:54321").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Lockfile::parse("LeagueClient:12345:port:pw:https").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
