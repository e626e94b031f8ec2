//! Emoji reaction counters on a shared whiteboard.

#[cfg(test)]
#[path = "reactions_test.rs"]
mod reactions_test;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::store::Reducer;

pub const STORAGE_KEY: &str = "whiteboard_reactions_v1";

pub const DEFAULT_EMOJI: [&str; 5] = ["👍", "🎉", "❤️", "🤔", "🚀"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub counts: BTreeMap<String, u32>,
    /// Emoji the local user has reacted with.
    pub mine: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReactionAction {
    /// Add the local user's reaction, or withdraw it if already present.
    Toggle(String),
}

impl Reducer for Reactions {
    type Action = ReactionAction;

    fn reduce(&self, action: ReactionAction) -> Option<Self> {
        let ReactionAction::Toggle(emoji) = action;
        if emoji.trim().is_empty() {
            return None;
        }
        let mut next = self.clone();
        if next.mine.remove(&emoji) {
            let count = next.counts.entry(emoji.clone()).or_default();
            *count = count.saturating_sub(1);
            if *count == 0 {
                next.counts.remove(&emoji);
            }
        } else {
            *next.counts.entry(emoji.clone()).or_default() += 1;
            next.mine.insert(emoji);
        }
        Some(next)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedReaction {
    pub emoji: String,
    pub count: u32,
    pub mine: bool,
}

/// Reactions with a non-zero count, most popular first.
#[must_use]
pub fn ranked(reactions: &Reactions) -> Vec<RankedReaction> {
    let mut out: Vec<RankedReaction> = reactions
        .counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(emoji, count)| RankedReaction {
            emoji: emoji.clone(),
            count: *count,
            mine: reactions.mine.contains(emoji),
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.emoji.cmp(&b.emoji)));
    out
}

#[must_use]
pub fn total(reactions: &Reactions) -> u32 {
    reactions.counts.values().copied().fold(0, u32::saturating_add)
}
