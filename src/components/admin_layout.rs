//! Admin shell: sidebar navigation, user footer, and logout.
//!
//! Also the authentication guard for every page it wraps: once the
//! session check settles without a user, it navigates to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::session;
use crate::state::auth::AuthState;

struct NavItem {
    key: &'static str,
    href: &'static str,
    label: &'static str,
    admin_only: bool,
}

const NAV: &[NavItem] = &[
    NavItem { key: "dashboard", href: "/admin", label: "Дашборд", admin_only: false },
    NavItem { key: "news", href: "/admin/news", label: "Новости", admin_only: false },
    NavItem { key: "school-info", href: "/admin/school-info", label: "О школе", admin_only: false },
    NavItem { key: "gallery", href: "/admin/gallery", label: "Галерея", admin_only: false },
    NavItem { key: "contacts", href: "/admin/contacts", label: "Контакты", admin_only: false },
    NavItem { key: "schedule", href: "/admin/schedule", label: "Расписание", admin_only: false },
    NavItem { key: "comments", href: "/admin/comments", label: "Комментарии", admin_only: false },
    NavItem { key: "users", href: "/admin/users", label: "Пользователи", admin_only: true },
];

/// Layout shell for the login-gated admin pages.
#[component]
pub fn AdminLayout(current: &'static str, children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Redirect to login if not authenticated.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/admin/login", NavigateOptions::default());
        }
    });

    let navigate_out = use_navigate();
    let on_logout = move |_| {
        session::clear();
        auth.set(AuthState::default());
        navigate_out("/admin/login", NavigateOptions::default());
    };

    let nav_links = move || {
        let admin = auth.get().is_admin();
        NAV.iter()
            .filter(|item| !item.admin_only || admin)
            .map(|item| {
                let class = if item.key == current {
                    "sidebar__link sidebar__link--current"
                } else {
                    "sidebar__link"
                };
                view! {
                    <a class=class href=item.href>
                        {item.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let initial = move || {
        auth.get()
            .user
            .as_ref()
            .and_then(|u| u.full_name.chars().next())
            .unwrap_or('A')
            .to_string()
    };
    let full_name = move || auth.get().user.map(|u| u.full_name).unwrap_or_default();
    let role_label = move || auth.get().user.map_or("", |u| u.role.label());

    view! {
        <div class="admin-shell">
            <aside class="sidebar">
                <div class="sidebar__brand">
                    <h1>"Админ-панель"</h1>
                </div>
                <nav class="sidebar__nav">{nav_links}</nav>
                <div class="sidebar__footer">
                    <div class="sidebar__avatar">{initial}</div>
                    <div class="sidebar__identity">
                        <p class="sidebar__name">{full_name}</p>
                        <p class="sidebar__role">{role_label}</p>
                    </div>
                    <button class="btn btn--primary sidebar__logout" on:click=on_logout>
                        "Выйти"
                    </button>
                </div>
            </aside>
            <main class="admin-shell__main">{children()}</main>
        </div>
    }
}
