//! Community poll with simulated live traffic.
//!
//! There is no real-time transport: [`simulated_traffic`] picks a random
//! option and bump size, and the caller feeds the resulting action through
//! the reducer on a timer. Poll state lives in memory only.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::store::Reducer;

/// Interval between simulated traffic ticks in the client.
pub const TICK_INTERVAL_MS: u64 = 3_000;

/// Largest number of simulated votes added in one tick.
pub const MAX_TICK_VOTES: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    pub label: String,
    pub votes: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivePoll {
    pub question: String,
    pub options: Vec<PollOption>,
    pub my_vote: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollAction {
    /// The local user's vote; accepted once.
    Vote(String),
    /// Votes from other (simulated) participants.
    Bump { option_id: String, by: u32 },
}

impl LivePoll {
    #[must_use]
    pub fn new(question: &str, labels: &[(&str, &str)]) -> Self {
        Self {
            question: question.to_owned(),
            options: labels
                .iter()
                .map(|(id, label)| PollOption { id: (*id).to_owned(), label: (*label).to_owned(), votes: 0 })
                .collect(),
            my_vote: None,
        }
    }

    #[must_use]
    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|o| o.votes).fold(0, u32::saturating_add)
    }

    fn add_votes(&self, option_id: &str, by: u32) -> Option<Self> {
        let idx = self.options.iter().position(|o| o.id == option_id)?;
        let mut next = self.clone();
        next.options[idx].votes = next.options[idx].votes.saturating_add(by);
        Some(next)
    }
}

impl Reducer for LivePoll {
    type Action = PollAction;

    fn reduce(&self, action: PollAction) -> Option<Self> {
        match action {
            PollAction::Vote(option_id) => {
                if self.my_vote.is_some() {
                    return None;
                }
                let mut next = self.add_votes(&option_id, 1)?;
                next.my_vote = Some(option_id);
                Some(next)
            }
            PollAction::Bump { option_id, by } => {
                if by == 0 {
                    return None;
                }
                self.add_votes(&option_id, by)
            }
        }
    }
}

/// Random traffic for one tick, or `None` when the poll has no options or
/// the roll came up empty.
pub fn simulated_traffic<R: Rng>(poll: &LivePoll, rng: &mut R) -> Option<PollAction> {
    if poll.options.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..poll.options.len());
    let by = rng.random_range(0..=MAX_TICK_VOTES);
    (by > 0).then(|| PollAction::Bump { option_id: poll.options[idx].id.clone(), by })
}

/// Whole-number share per option, in option order. Zero votes gives zeros.
#[must_use]
pub fn percentages(poll: &LivePoll) -> Vec<(String, u32)> {
    let total = u64::from(poll.total_votes());
    poll.options
        .iter()
        .map(|o| {
            let pct = if total == 0 { 0 } else { (u64::from(o.votes) * 100 + total / 2) / total };
            (o.id.clone(), u32::try_from(pct).unwrap_or(100))
        })
        .collect()
}

/// Starter poll for the community page.
#[must_use]
pub fn poll_seed() -> LivePoll {
    LivePoll::new(
        "What should the next meetup cover?",
        &[("async", "Async Rust"), ("wasm", "WebAssembly front-ends"), ("embedded", "Embedded"), ("ffi", "FFI")],
    )
}
