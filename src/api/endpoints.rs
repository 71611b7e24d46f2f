// Endpoint paths for the local client and the Riot web services.

pub const LCU_HOST: &str = "127.0.0.1";
pub const LCU_USERNAME: &str = "riot";
pub const PLAYER_LOOT_PATH: &str = "lol-loot/v1/player-loot";

pub const ACCOUNT_BY_RIOT_ID_PATH: &str = "riot/account/v1/accounts/by-riot-id";
pub const MASTERY_BY_PUUID_PATH: &str = "lol/champion-mastery/v4/champion-masteries/by-puuid";

pub const DATA_DRAGON_VERSIONS: &str = "https://ddragon.leagueoflegends.com/api/versions.json";
pub const DATA_DRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

pub const USER_AGENT: &str = "loot_report/0.1.0";
