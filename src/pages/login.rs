//! Admin login page with email/password form and first-admin bootstrap.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;

/// Login page, the entry point the HTTP pipeline redirects to on 401.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    // Already signed in, skip the form.
    let navigate_home = use_navigate();
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate_home("/admin", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let credentials = LoginRequest { email: email.get(), password: password.get() };
            if credentials.email.trim().is_empty() || credentials.password.is_empty() {
                return;
            }

            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::auth::login(&credentials).await {
                    Ok(resp) => {
                        crate::net::session::set(&resp.access_token, &resp.user);
                        auth.set(AuthState { user: Some(resp.user), loading: false });
                        navigate("/admin", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(Some("Неверный email или пароль".to_owned()));
                    }
                }
                pending.set(false);
            });
        }
    };

    // One-time bootstrap: creates the first admin account when the backend
    // has no users yet.
    let on_init_admin = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::auth::init_admin().await {
                    Ok(resp) => {
                        notice.set(Some(format!(
                            "Администратор создан: {} / {}",
                            resp.email, resp.password
                        )));
                    }
                    Err(e) => {
                        leptos::logging::warn!("init-admin failed: {e}");
                        error.set(Some("Не удалось создать администратора".to_owned()));
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"Школьный сайт"</h1>
                <p class="login-page__subtitle">"Вход в панель управления"</p>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Пароль"
                        <input
                            class="login-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || error.get().is_some()>
                        <p class="login-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || notice.get().is_some()>
                        <p class="login-form__notice">{move || notice.get().unwrap_or_default()}</p>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>

                <button class="login-page__bootstrap" on:click=on_init_admin>
                    "Создать первого администратора"
                </button>
            </div>
        </div>
    }
}
