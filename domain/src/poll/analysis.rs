//! Vote tally analysis
//!
//! Pure functions over a snapshot of choice tallies. Ties are never broken:
//! every choice sharing the maximum vote count is reported.

use super::tally::ChoiceTally;
use tracing::warn;

/// Classification of a set of tallies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<'a> {
    /// Exactly one choice holds the maximum
    SingleWinner(&'a ChoiceTally),
    /// Two or more choices share the maximum
    Draw(Vec<&'a ChoiceTally>),
    /// There was nothing to vote on
    NoChoices,
}

/// Sum of all vote counts
pub fn total_votes(tallies: &[ChoiceTally]) -> u64 {
    if tallies.is_empty() {
        warn!("Cannot total votes of a poll without choices");
        return 0;
    }
    tallies.iter().map(|t| t.votes).sum()
}

/// Every tally whose vote count equals the maximum, in choice order
///
/// Returns an empty list for empty input.
pub fn all_winners(tallies: &[ChoiceTally]) -> Vec<&ChoiceTally> {
    let Some(max) = tallies.iter().map(|t| t.votes).max() else {
        return Vec::new();
    };
    tallies.iter().filter(|t| t.votes == max).collect()
}

/// The winning tally, if exactly one choice holds the maximum
pub fn has_single_winner(tallies: &[ChoiceTally]) -> Option<&ChoiceTally> {
    match all_winners(tallies).as_slice() {
        [winner] => Some(*winner),
        _ => None,
    }
}

/// The tied tallies, if two or more choices share the maximum
///
/// An empty list is not a draw.
pub fn is_draw(tallies: &[ChoiceTally]) -> Option<Vec<&ChoiceTally>> {
    if has_single_winner(tallies).is_some() {
        return None;
    }
    let winners = all_winners(tallies);
    (winners.len() > 1).then_some(winners)
}

/// Classify tallies into a single winner, a draw, or no choices at all
pub fn classify(tallies: &[ChoiceTally]) -> PollOutcome<'_> {
    if let Some(winner) = has_single_winner(tallies) {
        return PollOutcome::SingleWinner(winner);
    }
    match is_draw(tallies) {
        Some(tied) => PollOutcome::Draw(tied),
        None => PollOutcome::NoChoices,
    }
}
