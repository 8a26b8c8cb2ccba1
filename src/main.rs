//! Pitwall CLI
//!
//! Command-line shell over the Pitwall store:
//! - Load a dataset and optionally replay an intent log
//! - Print the dashboard, race analytics, driver comparison, team
//!   analytics and profile views
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pitwall::config::{generate_default_config, Config};
use pitwall::dataset::{load_intents, Dataset};
use pitwall::logging::init_logging;
use pitwall::store::{DriverIntent, Store};
use pitwall::views::{self, Palette, ProfileSummary};

#[derive(Parser)]
#[command(name = "pitwall")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Motorsport race, driver and team statistics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset JSON (overrides the config)
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Intent log (JSON array) applied after the dataset
    #[arg(short, long, global = true)]
    pub replay: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Race overview: counts and lap time progression
    Dashboard,

    /// Lap times per driver, pit stops and race statistics
    Race,

    /// Compare two drivers head to head
    Compare {
        /// First driver id
        first: String,
        /// Second driver id
        second: String,
    },

    /// Constructor standings and wins distribution
    Teams,

    /// Signed-in user and preferences
    Profile,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {}", path.display()))?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);
    tracing::debug!("Pitwall v{}", env!("CARGO_PKG_VERSION"));

    let palette = config.display.palette();
    let mut store = Store::new();

    if let Some(path) = cli.dataset.as_ref().or(config.data.dataset.as_ref()) {
        store.dispatch_all(Dataset::load(path)?.into_intents());
    } else {
        tracing::warn!("No dataset configured, starting from an empty store");
    }

    if let Some(path) = &cli.replay {
        store.dispatch_all(load_intents(path)?);
    }

    let json = cli.format == "json";

    match cli.command {
        Commands::Dashboard => print_dashboard(&store, &palette, json)?,
        Commands::Race => print_race(&store, &palette, json)?,
        Commands::Compare { first, second } => {
            store.dispatch(DriverIntent::ClearComparison);
            store.dispatch(DriverIntent::AddToComparison(first));
            store.dispatch(DriverIntent::AddToComparison(second));
            print_comparison(&store, &palette, json)?;
        }
        Commands::Teams => print_teams(&store, json)?,
        Commands::Profile => print_profile(&store, json)?,
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_dashboard(store: &Store, palette: &Palette, json: bool) -> anyhow::Result<()> {
    let summary = views::dashboard_summary(store.state(), palette);
    if json {
        return print_json(&summary);
    }

    println!("Race Dashboard");
    println!();
    println!("  Active Drivers:  {}", summary.active_drivers);
    println!("  Teams:           {}", summary.teams);
    println!("  Current Race:    {}", summary.current_race);
    println!("  Completed Laps:  {}", summary.completed_laps);
    println!();
    println!("Lap Time Progression (seconds)");
    for series in &summary.lap_times.series {
        for (label, value) in summary.lap_times.labels.iter().zip(&series.data) {
            println!("  {:<10} {:>8.3}", label, value);
        }
    }
    Ok(())
}

fn print_race(store: &Store, palette: &Palette, json: bool) -> anyhow::Result<()> {
    let state = store.state();
    let race = state.race.current_race.as_ref();
    let laps = views::driver_lap_series(race, &state.driver.drivers, palette);
    let pits = views::pit_stop_totals(race, &state.driver.drivers, palette);
    let stats = views::race_stats(race);

    if json {
        return print_json(&serde_json::json!({
            "lapTimes": laps,
            "pitStops": pits,
            "stats": stats,
        }));
    }

    println!("Race Analytics");
    println!();
    println!("Lap Times Comparison (seconds)");
    for series in &laps.series {
        let times: Vec<String> = series.data.iter().map(|v| format!("{:.3}", v)).collect();
        println!("  {:<24} {}", series.label, times.join("  "));
    }
    println!();
    println!("Total Pit Stop Duration (seconds)");
    for (name, total) in pits.labels.iter().zip(pits.series.iter().flat_map(|s| &s.data)) {
        println!("  {:<24} {:>8.2}", name, total);
    }
    println!();
    println!("Race Statistics");
    println!("  Total Laps:      {}", stats.total_laps);
    println!("  Total Pit Stops: {}", stats.total_pit_stops);
    println!("  Race Status:     {}", stats.status);
    println!("  Circuit:         {}", stats.circuit);
    Ok(())
}

fn print_comparison(store: &Store, palette: &Palette, json: bool) -> anyhow::Result<()> {
    let drivers = &store.state().driver;
    let matched = drivers.compared().len();
    if matched < 2 {
        anyhow::bail!("need two known, distinct drivers to compare (matched {})", matched);
    }

    let bars = views::comparison_bars(drivers, palette);
    let radar = views::comparison_radar(drivers, palette);
    let rows = views::head_to_head(drivers);

    if json {
        return print_json(&serde_json::json!({
            "performance": bars,
            "attributes": radar,
            "headToHead": rows,
        }));
    }

    println!("Driver Comparison");
    println!();
    print!("  {:<16}", "");
    for series in &bars.series {
        print!("{:>20}", series.label);
    }
    println!();
    for chart in [&bars, &radar] {
        for (i, label) in chart.labels.iter().enumerate() {
            print!("  {:<16}", label);
            for series in &chart.series {
                print!("{:>20.2}", series.data.get(i).copied().unwrap_or(f64::NAN));
            }
            println!();
        }
        println!();
    }
    for row in rows {
        println!("  {} - experience: {} years", row.name, row.experience);
    }
    Ok(())
}

fn print_teams(store: &Store, json: bool) -> anyhow::Result<()> {
    let teams = &store.state().team.teams;
    let table = views::team_table(teams);
    let wins = views::wins_distribution(teams);

    if json {
        return print_json(&serde_json::json!({
            "standings": views::constructor_standings(teams),
            "winsDistribution": wins,
            "table": table,
        }));
    }

    println!("Team Analytics");
    println!();
    println!("  {:<24} {:>8} {:>6} {:>8} {:>8}", "Team", "Points", "Wins", "Podiums", "Share");
    for (row, share) in table.iter().zip(&wins) {
        println!(
            "  {:<24} {:>8} {:>6} {:>8} {:>7.1}%",
            row.name,
            row.points,
            row.wins,
            row.podiums,
            share.share * 100.0
        );
    }
    Ok(())
}

fn print_profile(store: &Store, json: bool) -> anyhow::Result<()> {
    let profile = views::profile_summary(&store.state().user);
    if json {
        return print_json(&profile);
    }

    match profile {
        ProfileSummary::SignedOut => println!("Not signed in"),
        ProfileSummary::SignedIn {
            username,
            email,
            favorite_drivers,
            favorite_teams,
            dark_mode,
            notifications,
        } => {
            println!("{} <{}>", username, email);
            println!();
            println!("  Dark mode:     {}", if dark_mode { "on" } else { "off" });
            println!("  Notifications: {}", if notifications { "on" } else { "off" });
            println!("  Favorite drivers:");
            for d in favorite_drivers {
                println!("    {} ({})", d.name, d.team);
            }
            println!("  Favorite teams:");
            for t in favorite_teams {
                println!("    {}", t.name);
            }
        }
    }
    Ok(())
}
