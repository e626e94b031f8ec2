//! Live poll widget with simulated traffic.
//!
//! SYSTEM CONTEXT
//! ==============
//! The poll is component-local and never persisted. While mounted in the
//! browser, a timer adds random votes from imaginary participants every
//! `TICK_INTERVAL_MS`; there is no real-time transport behind it.
//!
//! TRADE-OFFS
//! ==========
//! The timer loop checks an alive flag cleared by `on_cleanup`, so a tick
//! already in flight when the component unmounts never touches disposed state.

#[cfg(test)]
#[path = "live_poll_test.rs"]
mod live_poll_test;

use leptos::prelude::*;
use localstate::Reducer;
use localstate::poll::{LivePoll, PollAction, percentages};

#[component]
pub fn LivePollCard(poll: LivePoll) -> impl IntoView {
    let poll = RwSignal::new(poll);

    #[cfg(feature = "hydrate")]
    {
        use rand::SeedableRng;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let mut rng = rand::rngs::SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(localstate::poll::TICK_INTERVAL_MS)).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let action = poll.with_untracked(|p| localstate::poll::simulated_traffic(p, &mut rng));
                if let Some(action) = action {
                    apply(poll, action);
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let rows = move || {
        poll.with(|p| {
            let shares = percentages(p);
            p.options
                .iter()
                .zip(shares)
                .map(|(o, (_, pct))| (o.id.clone(), o.label.clone(), o.votes, pct, p.my_vote.as_deref() == Some(o.id.as_str())))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="live-poll">
            <h3 class="live-poll__question">{move || poll.with(|p| p.question.clone())}</h3>
            <ul class="live-poll__options">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(id, label, votes, pct, mine)| {
                            view! {
                                <li class=option_class(mine)>
                                    <button
                                        class="btn live-poll__vote"
                                        disabled=move || poll.with(|p| p.my_vote.is_some())
                                        on:click=move |_| apply(poll, PollAction::Vote(id.clone()))
                                    >
                                        {label}
                                    </button>
                                    <span class="live-poll__bar" style=bar_style(pct)></span>
                                    <span class="live-poll__share">{format!("{pct}% ({votes})")}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <p class="live-poll__total">{move || total_label(poll.with(LivePoll::total_votes))}</p>
        </section>
    }
}

fn apply(poll: RwSignal<LivePoll>, action: PollAction) {
    poll.update(|p| {
        if let Some(next) = p.reduce(action) {
            *p = next;
        }
    });
}

fn option_class(mine: bool) -> &'static str {
    if mine { "live-poll__option live-poll__option--mine" } else { "live-poll__option" }
}

fn bar_style(pct: u32) -> String {
    format!("width: {}%", pct.min(100))
}

fn total_label(total: u32) -> String {
    if total == 1 { "1 vote".to_owned() } else { format!("{total} votes") }
}
