//! Rune Almanac CLI
//!
//! Prints what the game has rotated in at a given instant, or over the
//! coming days and hours.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rune_almanac::{
    links,
    rotation::{flash, jewels, merchant},
    AlmanacConfig, FlashRuleSelection, Forecast, Timestamp, VERSION,
};

/// Longest look-ahead accepted for daily listings (about a century).
const MAX_DAYS: i64 = 36_525;

/// Longest look-ahead accepted for hourly listings (about ten years).
const MAX_HOURS: i64 = 87_660;

/// Predict RuneScape rotations offline
#[derive(Parser)]
#[command(name = "rune-almanac")]
#[command(about = "Predict RuneScape rotations offline", long_about = None)]
#[command(version)]
struct Cli {
    /// Instant to forecast (RFC 3339). Defaults to now.
    #[arg(long, global = true)]
    at: Option<String>,

    /// Days to shift the instant by.
    #[arg(long, global = true, default_value_t = 0, allow_hyphen_values = true)]
    offset_days: i64,

    /// Flash event rule set: auto, legacy or stryke.
    #[arg(long, global = true, default_value_t = FlashRuleSelection::Automatic)]
    flash_rules: FlashRuleSelection,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Everything active at the instant (default)
    Forecast,

    /// Travelling merchant stock for the coming days
    Stock {
        /// Number of days to list.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DAYS))]
        days: Option<u32>,
    },

    /// Jewel doors for the coming days
    Jewels {
        /// Number of days to list.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DAYS))]
        days: Option<u32>,
    },

    /// Wilderness Flash Events for the coming hours
    Flash {
        /// Number of hours to list.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_HOURS))]
        hours: Option<u32>,
    },

    /// Page links for a player
    Player {
        /// Display name.
        name: String,
    },

    /// Page links for a clan
    Clan {
        /// Clan name.
        name: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Rune Almanac v{}", VERSION);

    let base = match &cli.at {
        Some(at) => Timestamp::parse_rfc3339(at).context("parsing --at")?,
        None => Timestamp::now(),
    };
    let at = base
        .checked_add_days(cli.offset_days)
        .context("applying --offset-days")?;
    debug!(%at, flash_rules = %cli.flash_rules, "resolved instant");

    let config = AlmanacConfig {
        flash_rules: cli.flash_rules,
        ..AlmanacConfig::default()
    };

    match cli.command.unwrap_or(Command::Forecast) {
        Command::Forecast => {
            let forecast = Forecast::at(at, &config);
            if cli.json {
                emit_json(&forecast)?;
            } else {
                print_forecast(&forecast);
            }
        }
        Command::Stock { days } => {
            let rows = merchant::upcoming_stock(at, days.unwrap_or(config.horizon_days));
            if cli.json {
                emit_json(&rows)?;
            } else {
                for (day, stock) in rows {
                    println!("{:>6}  {}  {}", day, day.start(), stock);
                }
            }
        }
        Command::Jewels { days } => {
            let rows = jewels::upcoming_jewels(at, days.unwrap_or(config.horizon_days));
            if cli.json {
                emit_json(&rows)?;
            } else {
                for (day, jewel) in rows {
                    let door: &str = jewel.map_or("none", Into::into);
                    println!("{:>6}  {}  {}", day, day.start(), door);
                }
            }
        }
        Command::Flash { hours } => {
            let hours = hours.unwrap_or(config.horizon_hours);
            let rows = flash::upcoming_flash_events(at, hours, config.flash_rules)
                .context("listing flash events")?;
            if cli.json {
                emit_json(&rows)?;
            } else {
                for (hour, event) in rows {
                    println!("{}  {}", hour, event);
                }
            }
        }
        Command::Player { name } => emit_pages(&links::player_pages(&name), cli.json)?,
        Command::Clan { name } => emit_pages(&links::clan_pages(&name), cli.json)?,
    }

    Ok(())
}

fn print_forecast(forecast: &Forecast) {
    println!("Instant:              {}", forecast.at);
    println!("Runedate:             {}", forecast.runedate);
    println!("Travelling merchant:  {}", forecast.stock);
    let door: &str = forecast.jewel.map_or("none", Into::into);
    println!("Jewel door:           {}", door);
    println!("Guthixian Cache:      {}", yes_no(forecast.guthixian_cache));
    println!("Raven:                {}", yes_no(forecast.raven));
    println!("Wilderness Warbands:  {}", yes_no(forecast.wilderness_warbands));
    println!(
        "Flash event:          {} ({} rules)",
        forecast.flash_event, forecast.flash_rule_set
    );
}

fn emit_pages(pages: &[links::Page], json: bool) -> Result<()> {
    if json {
        return emit_json(&pages);
    }
    for page in pages {
        println!("{:<12} {}", format!("{:?}", page.source), page.url);
    }
    Ok(())
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{out}");
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizons_are_bounded() {
        assert!(Cli::try_parse_from(["rune-almanac", "stock", "--days", "4000000000"]).is_err());
        assert!(Cli::try_parse_from(["rune-almanac", "jewels", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["rune-almanac", "flash", "--hours", "100000"]).is_err());
        assert!(Cli::try_parse_from(["rune-almanac", "stock", "--days", "30"]).is_ok());
    }

    #[test]
    fn test_flash_rules_flag() {
        let cli = Cli::try_parse_from(["rune-almanac", "flash", "--flash-rules", "legacy"]).unwrap();
        assert_eq!(
            cli.flash_rules,
            FlashRuleSelection::Pinned(rune_almanac::FlashRuleSetId::Legacy)
        );
        assert!(Cli::try_parse_from(["rune-almanac", "--flash-rules", "newest"]).is_err());
    }
}
