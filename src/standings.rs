//! League standings table.
//!
//! Rows are kept in table order (by position). Each position maps to a
//! qualification zone that drives the row accent color and the legend.

use crate::color::Rgba;
use crate::theme::ZoneColors;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as FmtWrite;

/// Matches assumed played when a team record carries no count.
pub const DEFAULT_MATCHES_PLAYED: u32 = 8;

/// Last position that is safe from relegation.
const LAST_SAFE_POSITION: u32 = 17;

/// Qualification zone of a table position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// First place.
    Champion,
    /// Places 2 to 4.
    ChampionsLeague,
    /// Place 5.
    EuropaLeague,
    /// Between the European places and the drop.
    MidTable,
    /// Below place 17.
    Relegation,
}

impl Zone {
    /// Zone for a 1-based table position.
    #[must_use]
    pub fn for_position(position: u32) -> Self {
        match position {
            1 => Self::Champion,
            2..=4 => Self::ChampionsLeague,
            5 => Self::EuropaLeague,
            p if p > LAST_SAFE_POSITION => Self::Relegation,
            _ => Self::MidTable,
        }
    }

    /// Zones listed in the table legend, in display order.
    pub const LEGEND: [Self; 4] = [
        Self::Champion,
        Self::ChampionsLeague,
        Self::EuropaLeague,
        Self::Relegation,
    ];
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Champion => "Champion",
            Self::ChampionsLeague => "UCL",
            Self::EuropaLeague => "UEL",
            Self::MidTable => "Mid-table",
            Self::Relegation => "Relegation",
        };
        write!(f, "{s}")
    }
}

/// Win-draw-loss record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Record {
    /// Wins.
    pub wins: u32,
    /// Draws.
    pub draws: u32,
    /// Losses.
    pub losses: u32,
}

impl Record {
    /// Estimate a record from points alone.
    ///
    /// Wins take as many 3-point blocks as fit, the remainder counts as
    /// draws, and losses fill up to `played` (never negative).
    #[must_use]
    pub fn estimate(points: u32, played: u32) -> Self {
        let wins = points / 3;
        let draws = points % 3;
        let losses = played.saturating_sub(wins + draws);
        Self { wins, draws, losses }
    }
}

/// One team row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTeam {
    /// 1-based table position.
    pub position: u32,
    /// Club name.
    pub name: String,
    /// League points.
    pub points: u32,
    /// Matches played.
    #[serde(default = "default_played")]
    pub played: u32,
}

fn default_played() -> u32 {
    DEFAULT_MATCHES_PLAYED
}

impl LeagueTeam {
    /// Create a team row with the default matches played.
    #[must_use]
    pub fn new(position: u32, name: impl Into<String>, points: u32) -> Self {
        Self {
            position,
            name: name.into(),
            points,
            played: DEFAULT_MATCHES_PLAYED,
        }
    }

    /// Set the matches played.
    #[must_use]
    pub fn with_played(mut self, played: u32) -> Self {
        self.played = played;
        self
    }

    /// The team's zone.
    #[must_use]
    pub fn zone(&self) -> Zone {
        Zone::for_position(self.position)
    }

    /// Row accent color.
    #[must_use]
    pub fn accent(&self, colors: &ZoneColors) -> Rgba {
        colors.position_color(self.position)
    }

    /// Estimated win-draw-loss record.
    #[must_use]
    pub fn record(&self) -> Record {
        Record::estimate(self.points, self.played)
    }

    /// Single-letter crest placeholder.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// League table in position order.
#[derive(Debug, Clone, Default)]
pub struct StandingsTable {
    teams: Vec<LeagueTeam>,
}

impl StandingsTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows in any order.
    #[must_use]
    pub fn from_teams(mut teams: Vec<LeagueTeam>) -> Self {
        teams.sort_by_key(|t| t.position);
        Self { teams }
    }

    /// Insert a team, keeping position order.
    pub fn add_team(&mut self, team: LeagueTeam) {
        let at = self.teams.partition_point(|t| t.position <= team.position);
        self.teams.insert(at, team);
    }

    /// Rows in position order.
    #[must_use]
    pub fn teams(&self) -> &[LeagueTeam] {
        &self.teams
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Rows in a given zone.
    #[must_use]
    pub fn filter_by_zone(&self, zone: Zone) -> Vec<&LeagueTeam> {
        self.teams.iter().filter(|t| t.zone() == zone).collect()
    }

    /// Render the table as a formatted string (for terminal display).
    #[must_use]
    pub fn render(&self) -> String {
        let name_width = self
            .teams
            .iter()
            .map(|t| t.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Club".len());

        let mut output = String::new();
        let _ = writeln!(
            output,
            "| Pos | {:<name_width$} |  W |  D |  L | Pts |",
            "Club"
        );
        let _ = writeln!(output, "|-----|-{}-|----|----|----|-----|", "-".repeat(name_width));

        for team in &self.teams {
            let record = team.record();
            let _ = writeln!(
                output,
                "| {:>3} | {:<name_width$} | {:>2} | {:>2} | {:>2} | {:>3} |",
                team.position, team.name, record.wins, record.draws, record.losses, team.points
            );
        }

        output
    }

    /// Render the zone legend with each zone's color.
    #[must_use]
    pub fn legend(colors: &ZoneColors) -> String {
        Zone::LEGEND
            .iter()
            .map(|&zone| format!("\u{25CF} {zone} {}", colors.color(zone)))
            .collect::<Vec<_>>()
            .join("  ")
    }
}
