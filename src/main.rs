mod analysis;
mod api;
mod config;
mod display;
mod error;

use analysis::loot::LootInventory;
use analysis::mastery::MasteryStats;
use api::client::RiotApiClient;
use api::lcu::LcuClient;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{display_error, display_info, display_report, display_success, fetch_spinner};
use display::reports;
use error::AppError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Loot Report")]
#[command(about = "Summarize League client loot and champion mastery", long_about = None)]
struct Args {
    /// Path to config.cfg (default: ./config.cfg, then the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Currency balances
    Credits,

    /// Eternals owned
    Eternals,

    /// Mastery tokens and whether they can be upgraded
    Tokens,

    /// Blue essence gained by disenchanting champion shards
    BlueEssence,

    /// Champions without a shard in loot
    MissingShards,

    /// Skin shards for champions you actually play, most played first
    InterestingSkins,

    /// Mastery level overview, chests and unplayed champions
    Mastery {
        /// Only list chests for champions at or above this level
        #[arg(long)]
        min_level: Option<u32>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Credits => {
            let loot = load_loot(&config)?;
            display_report("💰 Credits", &reports::render_credits(&loot));
        }
        Command::Eternals => {
            let loot = load_loot(&config)?;
            display_report("🏆 Eternals", &reports::render_eternals(&loot));
        }
        Command::Tokens => {
            let loot = load_loot(&config)?;
            display_report("🎖 Mastery Tokens", &reports::render_mastery_tokens(&loot));
        }
        Command::BlueEssence => {
            let loot = load_loot(&config)?;
            display_report("💎 Blue Essence", &reports::render_blue_essence(&loot));
        }
        Command::MissingShards => {
            let loot = load_loot(&config)?;
            let stats = load_mastery_stats(&config)?;
            display_report(
                "🧩 Missing Champion Shards",
                &reports::render_missing_champ_shards(&loot, &stats),
            );
        }
        Command::InterestingSkins => {
            let loot = load_loot(&config)?;
            let stats = load_mastery_stats(&config)?;
            display_report(
                "🎨 Interesting Skin Shards",
                &reports::render_interesting_skins(&loot, &stats)?,
            );
        }
        Command::Mastery { min_level } => {
            let stats = load_mastery_stats(&config)?;
            display_report(
                "📊 Champion Mastery",
                &reports::render_mastery_overview(&stats, min_level),
            );
        }
    }

    Ok(())
}

fn load_loot(config: &Config) -> Result<LootInventory, AppError> {
    let client = LcuClient::new(config)?;

    let pb = fetch_spinner("Fetching loot from the League client...");
    let items = client.get_player_loot();
    pb.finish_and_clear();
    let items = items?;

    display_success(&format!("Loaded {} loot entries", items.len()));
    Ok(LootInventory::new(items))
}

fn load_mastery_stats(config: &Config) -> Result<MasteryStats, AppError> {
    let riot_id = config.riot_id()?;
    let client = RiotApiClient::new(config)?;
    display_info(&format!("Fetching mastery for {} in region {}", riot_id, config.region));

    let pb = fetch_spinner("Fetching mastery and champion data...");
    let stats = client.load_mastery_stats(&riot_id);
    pb.finish_and_clear();
    let stats = stats?;

    display_success(&format!("Loaded {} champions", stats.catalog().len()));
    Ok(stats)
}
