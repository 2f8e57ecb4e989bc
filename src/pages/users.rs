//! User management (admin only): list, create, edit role/activity, delete.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::{User, UserRole};

#[component]
pub fn UsersPage() -> impl IntoView {
    let items = LocalResource::new(|| fetch_users());

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(Option::<String>::None);
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::Editor);
    let is_active = RwSignal::new(true);

    let open_create = move |_| {
        editing.set(None);
        email.set(String::new());
        full_name.set(String::new());
        password.set(String::new());
        role.set(UserRole::Editor);
        is_active.set(true);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |user: User| {
        email.set(user.email);
        full_name.set(user.full_name);
        password.set(String::new());
        role.set(user.role);
        is_active.set(user.is_active);
        editing.set(Some(user.id));
        show_form.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        if !crate::util::confirm::confirm("Удалить этого пользователя?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let items = items.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::users::delete(&id).await {
                    leptos::logging::warn!("user delete failed: {e}");
                }
                items.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_save = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::{RegisterRequest, UserUpdate};

            if full_name.get_untracked().trim().is_empty() {
                return;
            }

            let items = items.clone();
            leptos::task::spawn_local(async move {
                let result = match editing.get_untracked() {
                    Some(id) => {
                        let changes = UserUpdate {
                            full_name: Some(full_name.get_untracked()),
                            role: Some(role.get_untracked()),
                            is_active: Some(is_active.get_untracked()),
                        };
                        crate::net::api::users::update(&id, &changes).await.map(|_| ())
                    }
                    None => {
                        if email.get_untracked().trim().is_empty()
                            || password.get_untracked().is_empty()
                        {
                            return;
                        }
                        let account = RegisterRequest {
                            email: email.get_untracked(),
                            full_name: full_name.get_untracked(),
                            password: password.get_untracked(),
                            role: role.get_untracked(),
                        };
                        crate::net::api::auth::register(&account).await.map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        show_form.set(false);
                        items.refetch();
                    }
                    Err(e) => leptos::logging::warn!("user save failed: {e}"),
                }
            });
        }
    });

    view! {
        <AdminLayout current="users">
            <div class="page">
                <header class="page__header page__header--split">
                    <div>
                        <h1>"Пользователи"</h1>
                        <p class="page__subtitle">"Учётные записи панели управления"</p>
                    </div>
                    <button class="btn btn--primary" on:click=open_create>
                        "+ Добавить пользователя"
                    </button>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Загрузка..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) if list.is_empty() => {
                                    view! { <p class="page__empty">"Пользователей нет"</p> }
                                        .into_any()
                                }
                                Some(list) => {
                                    view! {
                                        <ul class="item-list">
                                            {list
                                                .into_iter()
                                                .map(|user| {
                                                    let id = user.id.clone();
                                                    let edit_user = user.clone();
                                                    let activity = if user.is_active {
                                                        view! { <span class="badge badge--published">"Активен"</span> }
                                                    } else {
                                                        view! { <span class="badge badge--archived">"Отключён"</span> }
                                                    };
                                                    view! {
                                                        <li class="item-row">
                                                            <div class="item-row__body">
                                                                <div class="item-row__head">
                                                                    <h3 class="item-row__title">{user.full_name.clone()}</h3>
                                                                    <span class="badge">{user.role.label()}</span>
                                                                    {activity}
                                                                </div>
                                                                <p class="item-row__meta">{user.email.clone()}</p>
                                                            </div>
                                                            <div class="item-row__actions">
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| on_edit.run(edit_user.clone())
                                                                >
                                                                    "Изменить"
                                                                </button>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_delete.run(id.clone())
                                                                >
                                                                    "Удалить"
                                                                </button>
                                                            </div>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <p class="page__error">"Не удалось загрузить пользователей"</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>

                <Show when=move || show_form.get()>
                    <div class="dialog-backdrop" on:click=move |_| show_form.set(false)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>
                                {move || {
                                    if editing.get().is_some() {
                                        "Редактировать пользователя"
                                    } else {
                                        "Добавить пользователя"
                                    }
                                }}
                            </h2>
                            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                on_save.run(());
                            }>
                                <Show when=move || editing.get().is_none()>
                                    <label class="dialog__label">
                                        "Email"
                                        <input
                                            class="dialog__input"
                                            type="email"
                                            prop:value=move || email.get()
                                            on:input=move |ev| email.set(event_target_value(&ev))
                                        />
                                    </label>
                                </Show>
                                <label class="dialog__label">
                                    "Полное имя"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || full_name.get()
                                        on:input=move |ev| full_name.set(event_target_value(&ev))
                                    />
                                </label>
                                <Show when=move || editing.get().is_none()>
                                    <label class="dialog__label">
                                        "Пароль"
                                        <input
                                            class="dialog__input"
                                            type="password"
                                            prop:value=move || password.get()
                                            on:input=move |ev| password.set(event_target_value(&ev))
                                        />
                                    </label>
                                </Show>
                                <label class="dialog__label">
                                    "Роль"
                                    <select
                                        class="dialog__input"
                                        prop:value=move || role.get().as_str()
                                        on:change=move |ev| {
                                            if let Some(r) = UserRole::parse(&event_target_value(&ev)) {
                                                role.set(r);
                                            }
                                        }
                                    >
                                        <option value="editor">"Редактор"</option>
                                        <option value="moderator">"Модератор"</option>
                                        <option value="admin">"Администратор"</option>
                                    </select>
                                </label>
                                <Show when=move || editing.get().is_some()>
                                    <label class="dialog__label dialog__label--inline">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || is_active.get()
                                            on:change=move |ev| is_active.set(event_target_checked(&ev))
                                        />
                                        "Активен"
                                    </label>
                                </Show>
                                <div class="dialog__actions">
                                    <button class="btn" type="button" on:click=move |_| show_form.set(false)>
                                        "Отмена"
                                    </button>
                                    <button class="btn btn--primary" type="submit">
                                        {move || if editing.get().is_some() { "Обновить" } else { "Создать" }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </Show>
            </div>
        </AdminLayout>
    }
}

async fn fetch_users() -> Option<Vec<User>> {
    match crate::net::api::users::list().await {
        Ok(list) => Some(list),
        Err(e) => {
            leptos::logging::warn!("users load failed: {e}");
            None
        }
    }
}
