use crate::api::models::{ChampionMasteryDto, ChampionMasteryRecord, DataDragonChampions};
use crate::error::AppError;
use std::collections::BTreeMap;

/// Champion id to display name for the active patch.
#[derive(Debug, Clone, Default)]
pub struct ChampionCatalog {
    champs: BTreeMap<i64, String>,
}

impl ChampionCatalog {
    pub fn new(champs: BTreeMap<i64, String>) -> Self {
        ChampionCatalog { champs }
    }

    pub fn from_data_dragon(data: DataDragonChampions) -> Result<Self, AppError> {
        let mut champs = BTreeMap::new();
        for info in data.data.into_values() {
            let id = info.key.parse::<i64>().map_err(|_| {
                AppError::JsonError(format!("Champion {} has non-numeric key '{}'", info.id, info.key))
            })?;
            champs.insert(id, info.name);
        }
        Ok(ChampionCatalog::new(champs))
    }

    pub fn len(&self) -> usize {
        self.champs.len()
    }

    pub fn name(&self, id: i64) -> Result<&str, AppError> {
        self.champs
            .get(&id)
            .map(String::as_str)
            .ok_or_else(|| AppError::DataNotFound(format!("Champion with id {}", id)))
    }
}

/// Champion catalog plus one player's mastery records.
pub struct MasteryStats {
    catalog: ChampionCatalog,
    masteries: Vec<ChampionMasteryRecord>,
}

impl MasteryStats {
    pub fn new(catalog: ChampionCatalog, masteries: Vec<ChampionMasteryRecord>) -> Self {
        MasteryStats { catalog, masteries }
    }

    /// Joins raw mastery entries with champion names; unknown ids are an error.
    pub fn from_dtos(catalog: ChampionCatalog, dtos: Vec<ChampionMasteryDto>) -> Result<Self, AppError> {
        let mut masteries = Vec::with_capacity(dtos.len());
        for dto in dtos {
            let champion_name = catalog.name(dto.champion_id)?.to_string();
            masteries.push(ChampionMasteryRecord {
                champion_id: dto.champion_id,
                champion_name,
                level: dto.champion_level,
                points: dto.champion_points,
                points_until_next_level: dto.champion_points_until_next_level,
                tokens_earned: dto.tokens_earned,
                chest_granted: dto.chest_granted,
            });
        }
        Ok(MasteryStats::new(catalog, masteries))
    }

    pub fn catalog(&self) -> &ChampionCatalog {
        &self.catalog
    }

    pub fn get_champs(&self) -> &BTreeMap<i64, String> {
        &self.catalog.champs
    }

    pub fn mastery_4(&self) -> BTreeMap<String, i64> {
        self.masteries
            .iter()
            .filter(|c| c.level == 4)
            .map(|c| (c.champion_name.clone(), c.points_until_next_level))
            .collect()
    }

    pub fn mastery_counts(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for cm in &self.masteries {
            *counts.entry(cm.level).or_insert(0) += 1;
        }
        counts
    }

    /// Level 5 and 6 champions that can still earn tokens.
    pub fn mastery_tokens(&self) -> BTreeMap<String, u32> {
        self.masteries
            .iter()
            .filter(|c| matches!(c.level, 5 | 6))
            .filter(|c| c.tokens_earned < c.level - 3)
            .map(|c| (c.champion_name.clone(), c.tokens_earned))
            .collect()
    }

    pub fn mastery_chests(&self, min_level: Option<u32>) -> Vec<String> {
        let mut chests_avail: Vec<&ChampionMasteryRecord> = self
            .masteries
            .iter()
            .filter(|c| !c.chest_granted && min_level.map_or(true, |min| c.level >= min))
            .collect();
        chests_avail.sort_by(|a, b| b.level.cmp(&a.level));
        chests_avail.into_iter().map(|c| c.champion_name.clone()).collect()
    }

    pub fn mastery_unplayed(&self) -> Vec<String> {
        self.masteries
            .iter()
            .filter(|c| c.level == 0)
            .map(|c| c.champion_name.clone())
            .collect()
    }

    pub fn champs_sorted_by_mastery(&self) -> Vec<String> {
        let mut sorted: Vec<&ChampionMasteryRecord> = self.masteries.iter().collect();
        sorted.sort_by(|a, b| b.points.cmp(&a.points));
        sorted.into_iter().map(|c| c.champion_name.clone()).collect()
    }

    pub fn champs_with_minpts(&self, minpts: i64) -> Vec<String> {
        self.masteries
            .iter()
            .filter(|c| c.points > minpts)
            .map(|c| c.champion_name.clone())
            .collect()
    }
}
