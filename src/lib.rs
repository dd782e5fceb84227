//! IPL match statistics
//!
//! Loads IPL match records and computes per-team and head-to-head aggregates:
//! win percentage, toss conversion and direct meeting tallies.

pub mod data;
pub mod report;
pub mod stats;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single played match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Option<u32>,
    pub season: i32,
    pub city: Option<String>,
    pub date: Option<NaiveDate>,
    pub team1: String,
    pub team2: String,
    pub toss_winner: Option<String>,
    pub toss_decision: Option<String>,
    /// Outcome label, e.g. "normal", "tie" or "no result"
    pub result: String,
    pub winner: Option<String>,
    pub win_by_runs: u32,
    pub win_by_wickets: u32,
    pub player_of_match: Option<String>,
    pub venue: Option<String>,
}

impl MatchRecord {
    /// Record with only the fields the aggregates depend on
    pub fn new(
        team1: impl Into<String>,
        team2: impl Into<String>,
        season: i32,
        winner: Option<&str>,
        toss_winner: Option<&str>,
        result: impl Into<String>,
    ) -> Self {
        MatchRecord {
            id: None,
            season,
            city: None,
            date: None,
            team1: team1.into(),
            team2: team2.into(),
            toss_winner: toss_winner.map(str::to_string),
            toss_decision: None,
            result: result.into(),
            winner: winner.map(str::to_string),
            win_by_runs: 0,
            win_by_wickets: 0,
            player_of_match: None,
            venue: None,
        }
    }

    /// Check that both sides are named
    pub fn validate(&self) -> Result<()> {
        if self.team1.trim().is_empty() || self.team2.trim().is_empty() {
            return Err(StatsError::InvalidInput(format!(
                "match record in season {} is missing a team name",
                self.season
            )));
        }
        Ok(())
    }

    /// Whether the team played in this match
    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// Whether this match was played directly between the two teams
    pub fn is_meeting(&self, team_a: &str, team_b: &str) -> bool {
        (self.team1 == team_a && self.team2 == team_b)
            || (self.team1 == team_b && self.team2 == team_a)
    }

    /// Check if the given team won this match
    pub fn did_win(&self, team: &str) -> bool {
        self.winner.as_deref() == Some(team)
    }

    /// Check if the given team won the toss
    pub fn won_toss(&self, team: &str) -> bool {
        self.toss_winner.as_deref() == Some(team)
    }

    /// Toss winner went on to win the match
    pub fn toss_winner_won(&self) -> bool {
        match (&self.toss_winner, &self.winner) {
            (Some(toss), Some(winner)) => toss == winner,
            _ => false,
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} vs {}", self.season, self.team1, self.team2)?;
        match &self.winner {
            Some(winner) => write!(f, ": {} won", winner),
            None => write!(f, ": {}", self.result),
        }
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub dataset_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows shown by `ipl raw`
    pub raw_rows: usize,
    /// Default output format: table, json or csv
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig {
                dataset_path: "data/matches.csv".to_string(),
            },
            display: DisplayConfig {
                raw_rows: 10,
                format: "table".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StatsError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| StatsError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StatsError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
