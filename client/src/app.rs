//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use localstate::messages::{MessagesState, messages_seed};
use localstate::notifications::DismissedNotifications;
use localstate::reactions::Reactions;
use localstate::settings::Settings;
use localstate::todo::TodoList;

use crate::components::nav::NavBar;
use crate::pages::{
    admin::AdminPage, community::CommunityPage, editor::EditorPage, messages::MessagesPage,
    notifications::NotificationsPage, settings::SettingsPage, todo::TodoPage,
};
use crate::state::{auth::AuthState, persisted::Persisted, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=dark_mode::theme_name(false)>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session contexts and one `Persisted` store per feature, then
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let me = auth.with_untracked(|a| a.user.id.clone());

    let todo = Persisted::new(localstate::todo::STORAGE_KEY, TodoList::default());
    let messages = Persisted::new(localstate::messages::STORAGE_KEY, messages_seed(&me));
    let reactions = Persisted::new(localstate::reactions::STORAGE_KEY, Reactions::default());
    let dismissed = Persisted::new(localstate::notifications::STORAGE_KEY, DismissedNotifications::default());
    let settings = Persisted::new(localstate::settings::STORAGE_KEY, Settings::default());

    provide_context(auth);
    provide_context(ui);
    provide_context::<Persisted<TodoList>>(todo);
    provide_context::<Persisted<MessagesState>>(messages);
    provide_context::<Persisted<Reactions>>(reactions);
    provide_context::<Persisted<DismissedNotifications>>(dismissed);
    provide_context::<Persisted<Settings>>(settings);

    Effect::new(move || dark_mode::apply(settings.with(|s| s.dark_mode)));

    let shell_class = move || if settings.with(|s| s.compact_mode) { "app app--compact" } else { "app" };

    view! {
        <Stylesheet id="leptos" href="/pkg/agora.css"/>
        <Title text="Agora"/>

        <Router>
            <div class=shell_class>
                <NavBar/>
                <main class="app__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=CommunityPage/>
                        <Route path=StaticSegment("todo") view=TodoPage/>
                        <Route path=StaticSegment("messages") view=MessagesPage/>
                        <Route path=StaticSegment("notifications") view=NotificationsPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                        <Route path=StaticSegment("editor") view=EditorPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                        <Route path=(StaticSegment("admin"), ParamSegment("module")) view=AdminPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
