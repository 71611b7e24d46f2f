use crate::analysis::mastery::{ChampionCatalog, MasteryStats};
use crate::config::{Config, RiotId};
use crate::error::AppError;
use serde::de::DeserializeOwned;

use super::endpoints::*;
use super::models::*;

const SERVICE: &str = "Riot API";

pub struct RiotApiClient {
    agent: ureq::Agent,
    api_key: String,
    platform: String,
}

impl RiotApiClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        Ok(RiotApiClient {
            agent,
            api_key: config.riot_key()?.to_string(),
            platform: platform_routing(&config.region)?,
        })
    }

    fn get_regional_routing(&self) -> &str {
        match self.platform.as_str() {
            "na1" | "br1" | "la1" | "la2" => "americas",
            "euw1" | "eun1" | "tr1" | "ru" | "me1" => "europe",
            "kr" | "jp1" => "asia",
            "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
            _ => "americas", // default
        }
    }

    fn execute_request<T: DeserializeOwned>(&self, url: &str, authenticated: bool) -> Result<T, AppError> {
        tracing::debug!(%url, "GET");

        let mut request = self.agent.get(url);
        if authenticated {
            request = request.set("X-Riot-Token", &self.api_key);
        }

        let body = request
            .call()
            .map_err(|e| AppError::from_ureq(SERVICE, e))?
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn get_account(&self, riot_id: &RiotId) -> Result<AccountDto, AppError> {
        let url = format!(
            "https://{}.api.riotgames.com/{}/{}/{}",
            self.get_regional_routing(),
            ACCOUNT_BY_RIOT_ID_PATH,
            urlencoding::encode(&riot_id.game_name),
            urlencoding::encode(&riot_id.tag_line),
        );

        self.execute_request(&url, true).map_err(|e| match e {
            AppError::DataNotFound(_) => AppError::DataNotFound(format!("Player {}", riot_id)),
            other => other,
        })
    }

    pub fn get_masteries(&self, puuid: &str) -> Result<Vec<ChampionMasteryDto>, AppError> {
        let url = format!(
            "https://{}.api.riotgames.com/{}/{}",
            self.platform, MASTERY_BY_PUUID_PATH, puuid
        );
        self.execute_request(&url, true)
    }

    pub fn get_champion_data(&self) -> Result<DataDragonChampions, AppError> {
        let versions: Vec<String> = self.execute_request(DATA_DRAGON_VERSIONS, false)?;
        let latest = versions
            .first()
            .ok_or_else(|| AppError::DataNotFound("Data Dragon version list is empty".to_string()))?;

        let url = format!("{}/{}/data/en_US/champion.json", DATA_DRAGON_CDN, latest);
        self.execute_request(&url, false)
    }

    /// Fetches everything the mastery reports need for one player.
    pub fn load_mastery_stats(&self, riot_id: &RiotId) -> Result<MasteryStats, AppError> {
        let account = self.get_account(riot_id)?;
        tracing::debug!(game_name = %account.game_name, tag_line = %account.tag_line, "account resolved");
        let masteries = self.get_masteries(&account.puuid)?;
        let catalog = ChampionCatalog::from_data_dragon(self.get_champion_data()?)?;
        tracing::debug!(
            masteries = masteries.len(),
            champions = catalog.len(),
            "remote data loaded"
        );
        MasteryStats::from_dtos(catalog, masteries)
    }
}

/// Maps short region names (`EUW`, `NA`, ...) to platform ids; platform ids pass through.
pub fn platform_routing(region: &str) -> Result<String, AppError> {
    let lower = region.trim().to_lowercase();
    let platform = match lower.as_str() {
        "br" | "br1" => "br1",
        "eune" | "eun1" => "eun1",
        "euw" | "euw1" => "euw1",
        "jp" | "jp1" => "jp1",
        "kr" => "kr",
        "lan" | "la1" => "la1",
        "las" | "la2" => "la2",
        "me" | "me1" => "me1",
        "na" | "na1" => "na1",
        "oce" | "oc1" => "oc1",
        "ph" | "ph2" => "ph2",
        "ru" => "ru",
        "sg" | "sg2" => "sg2",
        "th" | "th2" => "th2",
        "tr" | "tr1" => "tr1",
        "tw" | "tw2" => "tw2",
        "vn" | "vn2" => "vn2",
        _ => {
            return Err(AppError::ConfigError(format!("Unknown region '{}'", region)));
        }
    };
    Ok(platform.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(region: &str) -> RiotApiClient {
        let config = Config::from_pairs(vec![
            ("RIOT_KEY".to_string(), "RGAPI-test".to_string()),
            ("REGION".to_string(), region.to_string()),
        ]);
        RiotApiClient::new(&config).unwrap()
    }

    #[test]
    fn short_region_names_resolve() {
        assert_eq!(platform_routing("EUW").unwrap(), "euw1");
        assert_eq!(platform_routing("na1").unwrap(), "na1");
        assert_eq!(platform_routing(" kr ").unwrap(), "kr");
        assert!(matches!(platform_routing("mars"), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn regional_routing_follows_platform() {
        assert_eq!(client_for("EUW").get_regional_routing(), "europe");
        assert_eq!(client_for("NA").get_regional_routing(), "americas");
        assert_eq!(client_for("jp1").get_regional_routing(), "asia");
        assert_eq!(client_for("OCE").get_regional_routing(), "sea");
    }

    #[test]
    fn client_requires_api_key() {
        let config = Config::from_pairs(Vec::new());
        assert!(matches!(RiotApiClient::new(&config), Err(AppError::ConfigError(_))));
    }
}
