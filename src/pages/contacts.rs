//! Contact entries: list, create/edit modal, delete.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::Contact;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let items = LocalResource::new(|| fetch_contacts());

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(Option::<String>::None);
    let kind = RwSignal::new(String::from("phone"));
    let label = RwSignal::new(String::new());
    let value = RwSignal::new(String::new());
    let order = RwSignal::new(String::from("0"));

    let open_create = move |_| {
        editing.set(None);
        kind.set(String::from("phone"));
        label.set(String::new());
        value.set(String::new());
        order.set(String::from("0"));
        show_form.set(true);
    };

    let on_edit = Callback::new(move |item: Contact| {
        kind.set(item.kind);
        label.set(item.label);
        value.set(item.value);
        order.set(item.order.to_string());
        editing.set(Some(item.id));
        show_form.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        if !crate::util::confirm::confirm("Удалить этот контакт?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let items = items.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::contacts::delete(&id).await {
                    leptos::logging::warn!("contact delete failed: {e}");
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
            use crate::net::types::{ContactCreate, ContactUpdate};

            if label.get_untracked().trim().is_empty()
                || value.get_untracked().trim().is_empty()
            {
                return;
            }
            let order_value = order.get_untracked().trim().parse::<i32>().unwrap_or(0);

            let items = items.clone();
            leptos::task::spawn_local(async move {
                let result = match editing.get_untracked() {
                    Some(id) => {
                        let changes = ContactUpdate {
                            label: Some(label.get_untracked()),
                            value: Some(value.get_untracked()),
                            order: Some(order_value),
                            ..Default::default()
                        };
                        crate::net::api::contacts::update(&id, &changes).await.map(|_| ())
                    }
                    None => {
                        let contact = ContactCreate {
                            kind: kind.get_untracked(),
                            label: label.get_untracked(),
                            value: value.get_untracked(),
                            order: order_value,
                        };
                        crate::net::api::contacts::create(&contact).await.map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        show_form.set(false);
                        items.refetch();
                    }
                    Err(e) => leptos::logging::warn!("contact save failed: {e}"),
                }
            });
        }
    });

    view! {
        <AdminLayout current="contacts">
            <div class="page">
                <header class="page__header page__header--split">
                    <div>
                        <h1>"Контакты"</h1>
                        <p class="page__subtitle">"Контактная информация на сайте"</p>
                    </div>
                    <button class="btn btn--primary" on:click=open_create>
                        "+ Добавить контакт"
                    </button>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Загрузка..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) if list.is_empty() => {
                                    view! { <p class="page__empty">"Контакты ещё не добавлены"</p> }
                                        .into_any()
                                }
                                Some(list) => {
                                    view! {
                                        <ul class="item-list">
                                            {list
                                                .into_iter()
                                                .map(|item| {
                                                    let id = item.id.clone();
                                                    let edit_item = item.clone();
                                                    view! {
                                                        <li class="item-row">
                                                            <div class="item-row__body">
                                                                <div class="item-row__head">
                                                                    <h3 class="item-row__title">{item.label.clone()}</h3>
                                                                    <span class="badge">{item.kind.clone()}</span>
                                                                </div>
                                                                <p class="item-row__meta">{item.value.clone()}</p>
                                                            </div>
                                                            <div class="item-row__actions">
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| on_edit.run(edit_item.clone())
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
                                        <p class="page__error">"Не удалось загрузить контакты"</p>
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
                                        "Редактировать контакт"
                                    } else {
                                        "Добавить контакт"
                                    }
                                }}
                            </h2>
                            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                on_save.run(());
                            }>
                                <label class="dialog__label">
                                    "Тип"
                                    <select
                                        class="dialog__input"
                                        prop:value=move || kind.get()
                                        on:change=move |ev| kind.set(event_target_value(&ev))
                                    >
                                        <option value="phone">"Телефон"</option>
                                        <option value="email">"Email"</option>
                                        <option value="address">"Адрес"</option>
                                        <option value="other">"Другое"</option>
                                    </select>
                                </label>
                                <label class="dialog__label">
                                    "Название"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || label.get()
                                        on:input=move |ev| label.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "Значение"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || value.get()
                                        on:input=move |ev| value.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "Порядок"
                                    <input
                                        class="dialog__input"
                                        type="number"
                                        prop:value=move || order.get()
                                        on:input=move |ev| order.set(event_target_value(&ev))
                                    />
                                </label>
                                <div class="dialog__actions">
                                    <button class="btn" type="button" on:click=move |_| show_form.set(false)>
                                        "Отмена"
                                    </button>
                                    <button class="btn btn--primary" type="submit">
                                        {move || if editing.get().is_some() { "Обновить" } else { "Добавить" }}
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

async fn fetch_contacts() -> Option<Vec<Contact>> {
    match crate::net::api::contacts::list().await {
        Ok(list) => Some(list),
        Err(e) => {
            leptos::logging::warn!("contacts load failed: {e}");
            None
        }
    }
}
