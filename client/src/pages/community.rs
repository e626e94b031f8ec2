//! Community landing page: featured post, reactions, live poll, leaderboard.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use leptos::prelude::*;
use localstate::poll::poll_seed;
use localstate::reputation::members_seed;

use crate::components::leaderboard::Leaderboard;
use crate::components::live_poll::LivePollCard;
use crate::components::post_body::PostBody;
use crate::components::reaction_bar::ReactionBar;

const FEATURED_POST: &str = "\
## Weekend hack night

Thanks @ana for hosting and @ben for the pizza. Bring a laptop and an idea.

- [x] Venue booked
- [ ] Pick a theme (vote below!)

Questions go in `#hack-night`.";

#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <div class="community-page">
            <article class="community-page__post">
                <PostBody source=FEATURED_POST.to_owned()/>
                <ReactionBar/>
            </article>
            <aside class="community-page__side">
                <LivePollCard poll=poll_seed()/>
                <h2>"Top contributors"</h2>
                <Leaderboard members=members_seed()/>
            </aside>
        </div>
    }
}
