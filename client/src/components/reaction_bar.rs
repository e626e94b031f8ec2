//! Emoji reaction bar backed by the persisted reaction counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Counts and the local user's own picks live in one `Reactions` record under
//! `whiteboard_reactions_v1`. Clicking an emoji toggles the local reaction;
//! clicks before hydration completes are ignored by the store.

#[cfg(test)]
#[path = "reaction_bar_test.rs"]
mod reaction_bar_test;

use leptos::prelude::*;
use localstate::reactions::{DEFAULT_EMOJI, RankedReaction, ReactionAction, Reactions, ranked, total};

use crate::state::persisted::Persisted;

#[component]
pub fn ReactionBar() -> impl IntoView {
    let reactions = expect_context::<Persisted<Reactions>>();

    let chips = move || reactions.with(|r| picker_rows(&ranked(r)));
    let summary = move || reactions.with(|r| total_label(total(r)));

    view! {
        <div class="reaction-bar">
            {move || {
                chips()
                    .into_iter()
                    .map(|chip| {
                        let emoji = chip.emoji.clone();
                        let class = if chip.mine { "reaction-bar__chip reaction-bar__chip--mine" } else { "reaction-bar__chip" };
                        view! {
                            <button
                                class=class
                                disabled=move || !reactions.is_ready()
                                on:click=move |_| {
                                    reactions.dispatch(ReactionAction::Toggle(emoji.clone()));
                                }
                            >
                                <span>{chip.emoji.clone()}</span>
                                <span class="reaction-bar__count">{chip.count}</span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <span class="reaction-bar__total">{summary}</span>
        </div>
    }
}

/// Ranked reactions followed by any default emoji nobody has used yet.
fn picker_rows(ranked: &[RankedReaction]) -> Vec<RankedReaction> {
    let mut rows = ranked.to_vec();
    for emoji in DEFAULT_EMOJI {
        if !rows.iter().any(|r| r.emoji == emoji) {
            rows.push(RankedReaction { emoji: emoji.to_owned(), count: 0, mine: false });
        }
    }
    rows
}

fn total_label(count: u32) -> String {
    match count {
        0 => "No reactions yet".to_owned(),
        1 => "1 reaction".to_owned(),
        n => format!("{n} reactions"),
    }
}
