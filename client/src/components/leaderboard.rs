//! Reputation leaderboard table.

use leptos::prelude::*;
use localstate::reputation::{Member, leaderboard};

#[component]
pub fn Leaderboard(members: Vec<Member>) -> impl IntoView {
    let rows = leaderboard(&members);
    view! {
        <table class="leaderboard">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Member"</th>
                    <th>"Reputation"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr class="leaderboard__row" data-member=row.member_id>
                                <td>{row.rank}</td>
                                <td>{row.name}</td>
                                <td>{row.score}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
