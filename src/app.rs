//! Root application component with routing and shared auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    comments::CommentsPage, contacts::ContactsPage, dashboard::DashboardPage,
    gallery::GalleryPage, login::LoginPage, news::NewsPage, schedule::SchedulePage,
    school_info::SchoolInfoPage, users::UsersPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
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
/// Provides the shared auth context and restores a stored session before
/// the route guards run.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState {
        user: None,
        loading: true,
    });
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::session;

        if session::token().is_some() {
            // Show the cached profile right away, then confirm it with the
            // server. A stale token gets evicted by the 401 handling in
            // `net::http` before this resolves.
            if let Some(cached) = session::cached_user() {
                auth.set(AuthState {
                    user: Some(cached),
                    loading: true,
                });
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::auth::me().await {
                    Ok(user) => auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    }),
                    Err(e) => {
                        leptos::logging::warn!("session restore failed: {e}");
                        auth.set(AuthState::default());
                    }
                }
            });
        } else {
            auth.set(AuthState::default());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthState::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/school-admin.css"/>
        <Title text="Панель управления"/>

        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <Route path=StaticSegment("admin") view=DashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("news")) view=NewsPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("school-info"))
                    view=SchoolInfoPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("gallery")) view=GalleryPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("contacts")) view=ContactsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("schedule")) view=SchedulePage/>
                <Route path=(StaticSegment("admin"), StaticSegment("comments")) view=CommentsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=UsersPage/>
            </Routes>
        </Router>
    }
}
