use crate::api::models::LootItem;
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub const TYPE_CURRENCY: &str = "CURRENCY";
pub const TYPE_MASTERY_TOKEN: &str = "CHAMPION_TOKEN";
pub const CATEGORY_CHAMPION: &str = "CHAMPION";
pub const CATEGORY_CHEST: &str = "CHEST";
pub const CATEGORY_ETERNALS: &str = "ETERNALS";
pub const CATEGORY_SKINS: &str = "SKIN";
pub const TOKEN_NAME_MASTERY_SEVEN: &str = "CHAMPION_TOKEN_7";
pub const CURRENCY_BLUE_ESSENCE: &str = "CURRENCY_champion";

/// Whether a mastery token stack can be turned into the next mastery level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Upgradability {
    /// Enough tokens, but no champion shard to pay with.
    NotUpgradable,
    Upgradable,
    /// Still collecting tokens.
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasteryTokenStatus {
    pub item_desc: String,
    #[allow(dead_code)]
    pub loot_name: String,
    pub count: u32,
    pub level: u32,
    pub req_count: u32,
    pub upgradable: Upgradability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlueEssence {
    pub total: u64,
    pub keep_1: u64,
    pub keep_2: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinShard {
    pub item_desc: String,
    pub parent_id: i64,
}

/// Read-only view over one loot snapshot.
pub struct LootInventory {
    items: Vec<LootItem>,
}

impl LootInventory {
    pub fn new(items: Vec<LootItem>) -> Self {
        LootInventory { items }
    }

    pub fn get_credits(&self) -> BTreeMap<String, u32> {
        self.items
            .iter()
            .filter(|l| l.loot_type == TYPE_CURRENCY)
            .map(|c| (c.loot_name.clone(), c.count))
            .collect()
    }

    pub fn get_eternals(&self) -> Vec<String> {
        self.with_category(CATEGORY_ETERNALS)
            .map(|e| e.localized_name.clone())
            .collect()
    }

    pub fn get_mastery_tokens(&self) -> Vec<MasteryTokenStatus> {
        let shard_counts: HashMap<&str, u32> = self
            .champ_shards()
            .map(|c| (c.item_desc.as_str(), c.count))
            .collect();

        self.with_category(CATEGORY_CHEST)
            .filter(|c| c.loot_type == TYPE_MASTERY_TOKEN)
            .map(|t| {
                let level = if t.loot_name == TOKEN_NAME_MASTERY_SEVEN { 7 } else { 6 };
                let req_count = level - 4;

                let upgradable = if t.count != req_count {
                    Upgradability::NotApplicable
                } else if shard_counts.get(t.item_desc.as_str()).is_some_and(|&n| n > 0) {
                    Upgradability::Upgradable
                } else {
                    Upgradability::NotUpgradable
                };

                MasteryTokenStatus {
                    item_desc: t.item_desc.clone(),
                    loot_name: t.loot_name.clone(),
                    count: t.count,
                    level,
                    req_count,
                    upgradable,
                }
            })
            .collect()
    }

    pub fn get_convertable_blue_essence(&self) -> BlueEssence {
        let value_keeping = |keep: u32| -> u64 {
            self.champ_shards()
                .map(|c| u64::from(c.count.saturating_sub(keep)) * u64::from(c.disenchant_value))
                .sum()
        };

        BlueEssence {
            total: value_keeping(0),
            keep_1: value_keeping(1),
            keep_2: value_keeping(2),
        }
    }

    pub fn get_missing_champ_shards<I, S>(&self, all_champs: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: BTreeSet<&str> = self.champ_shards().map(|s| s.item_desc.as_str()).collect();

        all_champs
            .into_iter()
            .filter(|c| !owned.contains(c.as_ref()))
            .map(|c| c.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn get_owned_skin_shards(&self) -> Vec<SkinShard> {
        self.with_category(CATEGORY_SKINS)
            .map(|s| SkinShard {
                item_desc: s.item_desc.clone(),
                parent_id: s.parent_id,
            })
            .collect()
    }

    fn with_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a LootItem> + 'a {
        self.items.iter().filter(move |l| l.category == category)
    }

    fn champ_shards(&self) -> impl Iterator<Item = &LootItem> + '_ {
        self.with_category(CATEGORY_CHAMPION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> LootItem {
        serde_json::from_value(value).unwrap()
    }

    fn champ_shard(name: &str, count: u32, value: u32) -> LootItem {
        item(json!({
            "type": "CHAMPION_RENTAL",
            "displayCategories": "CHAMPION",
            "lootName": format!("CHAMPION_RENTAL_{}", name),
            "itemDesc": name,
            "count": count,
            "disenchantValue": value
        }))
    }

    fn token(name: &str, loot_name: &str, count: u32) -> LootItem {
        item(json!({
            "type": "CHAMPION_TOKEN",
            "displayCategories": "CHEST",
            "lootName": loot_name,
            "itemDesc": name,
            "count": count
        }))
    }

    fn currency(name: &str, count: u32) -> LootItem {
        item(json!({ "type": "CURRENCY", "lootName": name, "count": count }))
    }

    #[test]
    fn credits_contain_only_currencies() {
        let loot = LootInventory::new(vec![currency("BE", 500)]);
        assert_eq!(loot.get_credits(), BTreeMap::from([("BE".to_string(), 500)]));

        let loot = LootInventory::new(vec![
            currency("CURRENCY_champion", 1200),
            champ_shard("Ahri", 1, 960),
            currency("CURRENCY_RP", 10),
            currency("CURRENCY_champion", 1300),
        ]);
        let credits = loot.get_credits();
        assert_eq!(credits.len(), 2);
        assert_eq!(credits["CURRENCY_champion"], 1300);
        assert_eq!(credits["CURRENCY_RP"], 10);
    }

    #[test]
    fn eternals_use_localized_names() {
        let loot = LootInventory::new(vec![
            item(json!({
                "type": "STATSTONE",
                "displayCategories": "ETERNALS",
                "lootName": "STATSTONE_1",
                "localizedName": "Starter Series",
                "count": 1
            })),
            champ_shard("Ahri", 1, 960),
        ]);
        assert_eq!(loot.get_eternals(), vec!["Starter Series".to_string()]);
    }

    #[test]
    fn level_seven_token_with_shard_is_upgradable() {
        let loot = LootInventory::new(vec![
            token("Ahri", "CHAMPION_TOKEN_7", 3),
            champ_shard("Ahri", 1, 960),
        ]);
        let tokens = loot.get_mastery_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].item_desc, "Ahri");
        assert_eq!(tokens[0].loot_name, "CHAMPION_TOKEN_7");
        assert_eq!(tokens[0].count, 3);
        assert_eq!(tokens[0].level, 7);
        assert_eq!(tokens[0].req_count, 3);
        assert_eq!(tokens[0].upgradable, Upgradability::Upgradable);
    }

    #[test]
    fn complete_token_without_shard_is_not_upgradable() {
        let loot = LootInventory::new(vec![
            token("Ahri", "CHAMPION_TOKEN_7", 3),
            token("Lux", "CHAMPION_TOKEN_6", 2),
            champ_shard("Lux", 0, 630),
        ]);
        let tokens = loot.get_mastery_tokens();
        assert_eq!(tokens[0].upgradable, Upgradability::NotUpgradable);
        assert_eq!(tokens[1].level, 6);
        assert_eq!(tokens[1].req_count, 2);
        assert_eq!(tokens[1].upgradable, Upgradability::NotUpgradable);
    }

    #[test]
    fn incomplete_token_is_not_applicable() {
        let loot = LootInventory::new(vec![
            token("Ahri", "CHAMPION_TOKEN_7", 1),
            champ_shard("Ahri", 2, 960),
        ]);
        let tokens = loot.get_mastery_tokens();
        assert_eq!(tokens[0].upgradable, Upgradability::NotApplicable);
    }

    #[test]
    fn tokens_ignore_other_chest_items() {
        let loot = LootInventory::new(vec![item(json!({
            "type": "CHEST",
            "displayCategories": "CHEST",
            "lootName": "CHEST_generic",
            "count": 4
        }))]);
        assert!(loot.get_mastery_tokens().is_empty());
    }

    #[test]
    fn blue_essence_keeps_shards_per_champion() {
        let loot = LootInventory::new(vec![
            champ_shard("Ahri", 3, 960),
            champ_shard("Lux", 1, 450),
            currency("CURRENCY_champion", 99),
        ]);
        let be = loot.get_convertable_blue_essence();
        assert_eq!(be.total, 3 * 960 + 450);
        assert_eq!(be.keep_1, 2 * 960);
        assert_eq!(be.keep_2, 960);
        assert!(be.keep_2 <= be.keep_1 && be.keep_1 <= be.total);
    }

    #[test]
    fn blue_essence_of_empty_loot_is_zero() {
        let loot = LootInventory::new(Vec::new());
        assert_eq!(loot.get_convertable_blue_essence(), BlueEssence::default());
    }

    #[test]
    fn missing_shards_are_sorted_and_disjoint() {
        let loot = LootInventory::new(vec![champ_shard("Ahri", 1, 960)]);
        assert_eq!(loot.get_missing_champ_shards(["Ahri", "Lux"]), vec!["Lux".to_string()]);

        let missing = loot.get_missing_champ_shards(vec!["Zed", "Ahri", "Annie", "Zed"]);
        assert_eq!(missing, vec!["Annie".to_string(), "Zed".to_string()]);
    }

    #[test]
    fn skin_shards_keep_parent_id() {
        let loot = LootInventory::new(vec![
            item(json!({
                "type": "SKIN_RENTAL",
                "displayCategories": "SKIN",
                "lootName": "CHAMPION_SKIN_RENTAL_103015",
                "itemDesc": "Spirit Blossom Ahri",
                "count": 1,
                "parentStoreItemId": 103
            })),
            champ_shard("Ahri", 1, 960),
        ]);
        assert_eq!(
            loot.get_owned_skin_shards(),
            vec![SkinShard {
                item_desc: "Spirit Blossom Ahri".to_string(),
                parent_id: 103
            }]
        );
    }
}
