//! Q&A reputation scoring.

#[cfg(test)]
#[path = "reputation_test.rs"]
mod reputation_test;

use serde::{Deserialize, Serialize};

pub const VOTE_WEIGHT: u64 = 10;
pub const ANSWER_WEIGHT: u64 = 5;
pub const BEST_ANSWER_WEIGHT: u64 = 25;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributions {
    pub votes: u64,
    pub answers: u64,
    pub best_answers: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub contributions: Contributions,
}

#[must_use]
pub fn reputation(c: Contributions) -> u64 {
    c.votes
        .saturating_mul(VOTE_WEIGHT)
        .saturating_add(c.answers.saturating_mul(ANSWER_WEIGHT))
        .saturating_add(c.best_answers.saturating_mul(BEST_ANSWER_WEIGHT))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub member_id: String,
    pub name: String,
    pub score: u64,
}

/// Members by score descending, ties broken by name. Ranks start at 1.
#[must_use]
pub fn leaderboard(members: &[Member]) -> Vec<LeaderboardRow> {
    let mut scored: Vec<(&Member, u64)> = members.iter().map(|m| (m, reputation(m.contributions))).collect();
    scored.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then_with(|| a.name.cmp(&b.name)));
    scored
        .into_iter()
        .enumerate()
        .map(|(i, (m, score))| LeaderboardRow { rank: i + 1, member_id: m.id.clone(), name: m.name.clone(), score })
        .collect()
}

/// Starter community roster for the leaderboard.
#[must_use]
pub fn members_seed() -> Vec<Member> {
    let member = |id: &str, name: &str, votes, answers, best_answers| Member {
        id: id.to_owned(),
        name: name.to_owned(),
        contributions: Contributions { votes, answers, best_answers },
    };
    vec![
        member("u-ana", "Ana", 42, 18, 3),
        member("u-ben", "Ben", 30, 40, 1),
        member("u-cy", "Cy", 12, 9, 6),
        member("u-me", "You", 4, 2, 0),
    ]
}
