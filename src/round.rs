//! Match round selection.
//!
//! A round is a fixed set of match slots, each holding an optional home and
//! away team. A slot counts as completed once both sides are picked, and a
//! team already picked for one side of a slot is not offered for the other.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Match slots in a round.
pub const ROUND_SIZE: usize = 8;

/// Side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Home team.
    Home,
    /// Away team.
    Away,
}

/// One match slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchSlot {
    /// 1-based slot id.
    pub id: usize,
    /// Home team, if picked.
    #[serde(default)]
    pub home: Option<String>,
    /// Away team, if picked.
    #[serde(default)]
    pub away: Option<String>,
}

impl MatchSlot {
    fn empty(id: usize) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Both teams are picked.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.home.is_some() && self.away.is_some()
    }

    /// Team on a side.
    #[must_use]
    pub fn team(&self, side: Side) -> Option<&str> {
        match side {
            Side::Home => self.home.as_deref(),
            Side::Away => self.away.as_deref(),
        }
    }

    /// Teams already picked in this slot.
    #[must_use]
    pub fn excluded_teams(&self) -> Vec<&str> {
        self.home.iter().chain(self.away.iter()).map(String::as_str).collect()
    }
}

/// A round of match slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRound {
    slots: Vec<MatchSlot>,
}

impl Default for MatchRound {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRound {
    /// Create a round of empty slots with ids `1..=ROUND_SIZE`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: (1..=ROUND_SIZE).map(MatchSlot::empty).collect(),
        }
    }

    /// Slots in id order.
    #[must_use]
    pub fn slots(&self) -> &[MatchSlot] {
        &self.slots
    }

    /// Slot by id.
    #[must_use]
    pub fn slot(&self, id: usize) -> Option<&MatchSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Number of slots with both teams picked.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.slots.iter().filter(|s| s.is_complete()).count()
    }

    /// Completed slots as a percentage of the round.
    #[must_use]
    pub fn fill_percentage(&self) -> f32 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.completed() as f32 / self.slots.len() as f32 * 100.0
    }

    /// Pick a team for one side of a slot.
    ///
    /// An empty name clears the side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSlot`] for an id outside the round, and
    /// [`Error::TeamUnavailable`] when the team already plays the other side.
    pub fn set_team(&mut self, id: usize, side: Side, team: &str) -> Result<()> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(Error::UnknownSlot(id))?;

        let team = team.trim();
        let other = match side {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        };
        if !team.is_empty() && slot.team(other) == Some(team) {
            tracing::warn!(slot = id, team, "team already picked for this match");
            return Err(Error::TeamUnavailable {
                slot: id,
                team: team.to_string(),
            });
        }

        let value = (!team.is_empty()).then(|| team.to_string());
        match side {
            Side::Home => slot.home = value,
            Side::Away => slot.away = value,
        }
        tracing::debug!(slot = id, ?side, team, "updated match slot");
        Ok(())
    }

    /// Teams from `pool` that can still be picked in a slot.
    #[must_use]
    pub fn available_teams<'a>(&self, id: usize, pool: &[&'a str]) -> Vec<&'a str> {
        let excluded = self.slot(id).map(MatchSlot::excluded_teams).unwrap_or_default();
        pool.iter()
            .copied()
            .filter(|team| !excluded.contains(team))
            .collect()
    }

    /// Clear every slot.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
