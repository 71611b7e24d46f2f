use serde::Deserialize;
use std::collections::HashMap;

// LCU lol-loot/v1/player-loot entry
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LootItem {
    #[serde(rename = "type")]
    pub loot_type: String,
    #[serde(rename = "displayCategories", default)]
    pub category: String,
    pub loot_name: String,
    #[serde(default)]
    pub localized_name: String,
    #[serde(default)]
    pub item_desc: String,
    pub count: u32,
    #[serde(rename = "parentStoreItemId", default)]
    pub parent_id: i64,
    #[serde(default)]
    pub disenchant_value: u32,
}

// Account V1 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

// Champion Mastery V4 response entry
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_level: u32,
    pub champion_points: i64,
    #[serde(default)]
    pub champion_points_until_next_level: i64,
    #[serde(default)]
    pub tokens_earned: u32,
    #[serde(default)]
    pub chest_granted: bool,
}

/// Mastery entry joined with the champion's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ChampionMasteryRecord {
    #[allow(dead_code)]
    pub champion_id: i64,
    pub champion_name: String,
    pub level: u32,
    pub points: i64,
    pub points_until_next_level: i64,
    pub tokens_earned: u32,
    pub chest_granted: bool,
}

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub id: String,
    pub name: String,
    /// Numeric champion id, sent as a string.
    pub key: String,
}
