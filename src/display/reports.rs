use crate::analysis::loot::{LootInventory, Upgradability, CURRENCY_BLUE_ESSENCE};
use crate::analysis::mastery::MasteryStats;
use crate::error::AppError;
use std::cmp::Reverse;
use std::collections::HashMap;
use tabled::{settings::Style, Table, Tabled};

/// Skins are only interesting for champions with at least this many points.
pub const PLAYED_CHAMP_MIN_POINTS: i64 = 10_000;

#[derive(Tabled)]
struct LevelRow {
    level: String,
    champions: String,
}

pub fn currency_label(loot_name: &str) -> &str {
    match loot_name {
        "CURRENCY_champion" => "Blue Essence",
        "CURRENCY_cosmetic" => "Orange Essence",
        "CURRENCY_mythic" => "Mythic Essence",
        "CURRENCY_RP" => "Riot Points",
        other => other,
    }
}

/// Terminates every line with a newline; no lines gives an empty report.
fn join_lines<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn render_credits(loot: &LootInventory) -> String {
    join_lines(
        loot.get_credits()
            .into_iter()
            .map(|(name, amount)| format!("{}: {}", currency_label(&name), amount)),
    )
}

pub fn render_eternals(loot: &LootInventory) -> String {
    join_lines(loot.get_eternals())
}

pub fn render_mastery_tokens(loot: &LootInventory) -> String {
    let mut tokens = loot.get_mastery_tokens();
    tokens.sort_by(|a, b| {
        (Reverse(a.level), Reverse(a.count), a.upgradable, &a.item_desc)
            .cmp(&(Reverse(b.level), Reverse(b.count), b.upgradable, &b.item_desc))
    });

    join_lines(tokens.into_iter().map(|t| {
        let suffix = match t.upgradable {
            Upgradability::Upgradable => " - READY FOR UPGRADE",
            Upgradability::NotUpgradable => " - MISSING SHARD",
            Upgradability::NotApplicable => "",
        };
        format!(
            "{} (Level {}): {}/{} tokens{}",
            t.item_desc, t.level, t.count, t.req_count, suffix
        )
    }))
}

pub fn render_blue_essence(loot: &LootInventory) -> String {
    let be = loot.get_convertable_blue_essence();
    let current = loot
        .get_credits()
        .get(CURRENCY_BLUE_ESSENCE)
        .copied()
        .unwrap_or(0);

    format!(
        "Current BE: {}\n\
         Convertable BE: {}\n\
         Convertable BE (Keep one shard per champ): {}\n\
         Convertable BE (Keep two shards per champ): {}\n",
        current, be.total, be.keep_1, be.keep_2
    )
}

pub fn render_missing_champ_shards(loot: &LootInventory, stats: &MasteryStats) -> String {
    let missing = loot.get_missing_champ_shards(stats.get_champs().values());
    if missing.is_empty() {
        return "You own a shard of every champion.\n".to_string();
    }
    format!("Missing champion shards ({}):\n{}\n", missing.len(), missing.join(", "))
}

pub fn render_interesting_skins(loot: &LootInventory, stats: &MasteryStats) -> Result<String, AppError> {
    let rank: HashMap<String, usize> = stats
        .champs_sorted_by_mastery()
        .into_iter()
        .enumerate()
        .map(|(idx, name)| (name, idx))
        .collect();
    let played = stats.champs_with_minpts(PLAYED_CHAMP_MIN_POINTS - 1);

    let mut shards = Vec::new();
    for shard in loot.get_owned_skin_shards() {
        let champ = stats.catalog().name(shard.parent_id)?;
        if played.iter().any(|p| p == champ) {
            shards.push((champ.to_string(), shard.item_desc));
        }
    }
    shards.sort_by_key(|(champ, _)| rank.get(champ).copied().unwrap_or(usize::MAX));

    Ok(join_lines(
        shards.into_iter().map(|(champ, skin)| format!("{}: {}", champ, skin)),
    ))
}

pub fn render_mastery_overview(stats: &MasteryStats, chest_min_level: Option<u32>) -> String {
    let rows: Vec<LevelRow> = stats
        .mastery_counts()
        .into_iter()
        .rev()
        .map(|(level, count)| LevelRow {
            level: level.to_string(),
            champions: count.to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut lines = vec![table.to_string(), String::new()];

    let level_4 = stats.mastery_4();
    if !level_4.is_empty() {
        let mut entries: Vec<(String, i64)> = level_4.into_iter().collect();
        entries.sort_by_key(|(_, remaining)| *remaining);
        lines.push("Level 4, points until level 5:".to_string());
        lines.extend(
            entries
                .into_iter()
                .map(|(name, remaining)| format!("  {}: {}", name, remaining)),
        );
        lines.push(String::new());
    }

    let tokens = stats.mastery_tokens();
    if !tokens.is_empty() {
        lines.push("Tokens still to earn:".to_string());
        lines.extend(
            tokens
                .into_iter()
                .map(|(name, count)| format!("  {}: {} earned", name, count)),
        );
        lines.push(String::new());
    }

    let chests = stats.mastery_chests(chest_min_level);
    lines.push(format!("Chests available ({}):", chests.len()));
    lines.push(format!("  {}", chests.join(", ")));
    lines.push(String::new());

    let unplayed = stats.mastery_unplayed();
    lines.push(format!("Unplayed champions ({}):", unplayed.len()));
    lines.push(format!("  {}", unplayed.join(", ")));

    join_lines(lines)
}
