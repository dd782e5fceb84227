//! Head-to-head records between two teams

use super::require_team;
use crate::{MatchRecord, Result, StatsError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Wins of each side over their direct meetings
///
/// Always holds exactly the two compared teams. Content does not depend on the
/// order the teams were given in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHeadTally {
    wins: BTreeMap<String, usize>,
    meetings: usize,
}

impl HeadToHeadTally {
    /// Wins for a team, 0 for a team outside the comparison
    pub fn wins_for(&self, team: &str) -> usize {
        self.wins.get(team).copied().unwrap_or(0)
    }

    /// All direct meetings, including ties and no results
    pub fn meetings(&self) -> usize {
        self.meetings
    }

    /// Meetings won by neither side
    pub fn undecided(&self) -> usize {
        let decided: usize = self.wins.values().sum();
        self.meetings.saturating_sub(decided)
    }

    /// Team name to win count
    pub fn wins(&self) -> &BTreeMap<String, usize> {
        &self.wins
    }
}

/// Tally wins between `team_a` and `team_b` over their direct meetings
pub fn compute_head_to_head(
    matches: &[MatchRecord],
    team_a: &str,
    team_b: &str,
) -> Result<HeadToHeadTally> {
    let team_a = require_team(team_a, "first team")?;
    let team_b = require_team(team_b, "second team")?;
    if team_a == team_b {
        return Err(StatsError::InvalidInput(format!(
            "cannot compare {} with itself",
            team_a
        )));
    }

    let mut wins = BTreeMap::from([(team_a.to_string(), 0), (team_b.to_string(), 0)]);
    let mut meetings = 0;

    for record in matches {
        record.validate()?;
        if !record.is_meeting(team_a, team_b) {
            continue;
        }
        meetings += 1;
        // Ties and no results fall through
        if let Some(winner) = &record.winner {
            if let Some(count) = wins.get_mut(winner) {
                *count += 1;
            }
        }
    }

    log::debug!(
        "{} vs {}: {} meetings, {:?}",
        team_a,
        team_b,
        meetings,
        wins
    );

    Ok(HeadToHeadTally { wins, meetings })
}
