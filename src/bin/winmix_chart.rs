//! winmix-chart - render a BTTS momentum chart to SVG.
//!
//! ```text
//! winmix-chart matches.yaml -c dashboard.yaml -o btts.svg --hover 50
//! ```
//!
//! The data file lists samples in match order and may carry a league table:
//!
//! ```yaml
//! samples:
//!   - { match_id: "m1", btts_count: 6, date: "2024-08-17" }
//!   - { match_id: "m2", btts_count: 7 }
//! standings:
//!   - { position: 1, name: "Liverpool", points: 21 }
//! round:
//!   slots:
//!     - { id: 1, home: "Arsenal", away: "Chelsea" }
//! ```

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::io::Write;
use std::path::PathBuf;
use winmix_viz::chart::{BttsChart, BttsRecord};
use winmix_viz::config::DashboardConfig;
use winmix_viz::hover::HoverState;
use winmix_viz::round::{MatchRound, ROUND_SIZE};
use winmix_viz::standings::{LeagueTeam, StandingsTable};

#[derive(Debug, Parser)]
#[command(name = "winmix-chart", version, about = "Render a BTTS momentum chart to SVG")]
struct Args {
    /// YAML data file with `samples` (and optionally `standings`)
    data: PathBuf,

    /// Dashboard configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output SVG path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the hover overlay at this viewport x coordinate
    #[arg(long, value_name = "X")]
    hover: Option<f32>,

    /// Print the league table (and round progress) instead of the chart
    #[arg(long)]
    table: bool,
}

#[derive(Debug, Deserialize)]
struct DataFile {
    #[serde(default)]
    samples: Vec<BttsRecord>,
    #[serde(default)]
    standings: Vec<LeagueTeam>,
    #[serde(default)]
    round: Option<MatchRound>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };

    let content = std::fs::read_to_string(&args.data)
        .with_context(|| format!("reading {}", args.data.display()))?;
    let data: DataFile = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("parsing {}", args.data.display()))?;

    if args.table {
        let table = StandingsTable::from_teams(data.standings);
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", table.render())?;
        writeln!(stdout, "{}", StandingsTable::legend(&config.theme.zones))?;
        if let Some(round) = &data.round {
            writeln!(
                stdout,
                "Round: {}/{ROUND_SIZE} ({:.0}%)",
                round.completed(),
                round.fill_percentage()
            )?;
        }
        return Ok(());
    }

    let chart = BttsChart::with_config(data.samples, &config)?;
    let header = chart.header();
    tracing::info!(
        title = header.title,
        badge = %header.badge,
        trend = %format_args!("{} {}", header.trend.indicator(), header.trend.label()),
        trend_color = %header.trend_color,
        "rendering chart"
    );

    let mut hover = HoverState::new();
    if let Some(x) = args.hover {
        chart.hover_at(&mut hover, x);
    }

    match &args.output {
        Some(path) => {
            chart.write_svg(path, &hover)?;
            tracing::info!(path = %path.display(), "wrote svg");
        }
        None => std::io::stdout().lock().write_all(chart.render_svg(&hover).as_bytes())?,
    }

    Ok(())
}
