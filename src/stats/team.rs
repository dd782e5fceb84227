//! Per-team statistics
//!
//! Win percentage and toss conversion for one team over a set of matches.

use super::{percentage, require_team};
use crate::{MatchRecord, Result};
use serde::Serialize;

/// Aggregate record of one team over a collection of matches
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamStats {
    /// Matches in the collection
    pub played: usize,
    /// Matches won by the team
    pub won: usize,
    /// `won / played` as a percentage, 0 when nothing was played
    pub win_pct: f64,
    /// Tosses won by the team
    pub toss_won: usize,
    /// Matches where the team won both the toss and the match
    pub toss_and_won: usize,
    /// `toss_and_won / toss_won` as a percentage, 0 when no toss was won
    pub toss_conversion_pct: f64,
}

/// Running counts while scanning matches
#[derive(Debug, Default)]
struct Tally {
    played: usize,
    won: usize,
    toss_won: usize,
    toss_and_won: usize,
}

impl Tally {
    fn update(&mut self, record: &MatchRecord, team: &str) {
        let won = record.did_win(team);
        let toss = record.won_toss(team);

        self.played += 1;
        if won {
            self.won += 1;
        }
        if toss {
            self.toss_won += 1;
            if won {
                self.toss_and_won += 1;
            }
        }
    }

    fn into_stats(self) -> TeamStats {
        TeamStats {
            played: self.played,
            won: self.won,
            win_pct: percentage(self.won, self.played),
            toss_won: self.toss_won,
            toss_and_won: self.toss_and_won,
            toss_conversion_pct: percentage(self.toss_and_won, self.toss_won),
        }
    }
}

/// Compute statistics for `team` over `matches`
///
/// Every record counts as played, so callers normally pass the output of
/// [`matches_involving`](super::matches_involving) or
/// [`filter_by_team_and_season`](super::filter_by_team_and_season).
/// An empty collection yields all-zero statistics.
pub fn compute_team_stats(matches: &[MatchRecord], team: &str) -> Result<TeamStats> {
    let team = require_team(team, "team")?;

    let mut tally = Tally::default();
    for record in matches {
        record.validate()?;
        tally.update(record, team);
    }

    Ok(tally.into_stats())
}
