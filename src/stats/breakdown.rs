//! Collection-wide summaries: outcome labels, toss correlation, selection lists

use super::percentage;
use crate::MatchRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Count of matches per outcome label, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultBreakdown {
    pub counts: Vec<(String, usize)>,
}

impl ResultBreakdown {
    /// Count for a label, 0 when absent
    pub fn count(&self, result: &str) -> usize {
        self.counts
            .iter()
            .find(|(label, _)| label == result)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// How often the toss winner also won the match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TossCorrelation {
    /// Toss winner won the match
    pub won_both: usize,
    /// Toss winner lost, or no winner was recorded
    pub did_not: usize,
}

impl TossCorrelation {
    pub fn total(&self) -> usize {
        self.won_both + self.did_not
    }

    pub fn won_both_pct(&self) -> f64 {
        percentage(self.won_both, self.total())
    }

    pub fn did_not_pct(&self) -> f64 {
        percentage(self.did_not, self.total())
    }
}

/// Earliest and latest season in a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonRange {
    pub first: i32,
    pub last: i32,
}

impl SeasonRange {
    pub fn contains(&self, season: i32) -> bool {
        (self.first..=self.last).contains(&season)
    }
}

/// Count matches by outcome label
pub fn result_breakdown(matches: &[MatchRecord]) -> ResultBreakdown {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in matches {
        match counts.iter_mut().find(|(label, _)| *label == record.result) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.result.clone(), 1)),
        }
    }
    ResultBreakdown { counts }
}

/// Split matches by whether the toss winner won
pub fn toss_correlation(matches: &[MatchRecord]) -> TossCorrelation {
    let won_both = matches.iter().filter(|m| m.toss_winner_won()).count();
    TossCorrelation {
        won_both,
        did_not: matches.len() - won_both,
    }
}

/// Sorted unique team1 names
pub fn distinct_teams(matches: &[MatchRecord]) -> Vec<String> {
    matches
        .iter()
        .map(|m| m.team1.as_str())
        .filter(|t| !t.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Season bounds, `None` for an empty collection
pub fn season_range(matches: &[MatchRecord]) -> Option<SeasonRange> {
    let first = matches.iter().map(|m| m.season).min()?;
    let last = matches.iter().map(|m| m.season).max()?;
    Some(SeasonRange { first, last })
}
