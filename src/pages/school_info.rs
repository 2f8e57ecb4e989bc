//! School-info sections: list, create/edit modal, show/hide toggle, delete.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::SchoolInfoItem;

#[component]
pub fn SchoolInfoPage() -> impl IntoView {
    let items = LocalResource::new(|| fetch_sections());

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(Option::<String>::None);
    let section = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let order = RwSignal::new(String::from("0"));

    let open_create = move |_| {
        editing.set(None);
        section.set(String::new());
        title.set(String::new());
        content.set(String::new());
        order.set(String::from("0"));
        show_form.set(true);
    };

    let on_edit = Callback::new(move |item: SchoolInfoItem| {
        section.set(item.section);
        title.set(item.title);
        content.set(item.content);
        order.set(item.order.to_string());
        editing.set(Some(item.id));
        show_form.set(true);
    });

    // Flip visibility on the public site without opening the form.
    let on_toggle = Callback::new(move |(id, active): (String, bool)| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::SchoolInfoUpdate;

            let items = items.clone();
            leptos::task::spawn_local(async move {
                let changes = SchoolInfoUpdate { is_active: Some(!active), ..Default::default() };
                if let Err(e) = crate::net::api::school_info::update(&id, &changes).await {
                    leptos::logging::warn!("school-info toggle failed: {e}");
                }
                items.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, active);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        if !crate::util::confirm::confirm("Удалить этот раздел?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let items = items.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::school_info::delete(&id).await {
                    leptos::logging::warn!("school-info delete failed: {e}");
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
            use crate::net::types::{SchoolInfoCreate, SchoolInfoUpdate};

            if section.get_untracked().trim().is_empty()
                || title.get_untracked().trim().is_empty()
            {
                return;
            }
            let order_value = order.get_untracked().trim().parse::<i32>().unwrap_or(0);

            let items = items.clone();
            leptos::task::spawn_local(async move {
                let result = match editing.get_untracked() {
                    Some(id) => {
                        let changes = SchoolInfoUpdate {
                            title: Some(title.get_untracked()),
                            content: Some(content.get_untracked()),
                            order: Some(order_value),
                            ..Default::default()
                        };
                        crate::net::api::school_info::update(&id, &changes).await.map(|_| ())
                    }
                    None => {
                        let item = SchoolInfoCreate {
                            section: section.get_untracked().trim().to_owned(),
                            title: title.get_untracked(),
                            content: content.get_untracked(),
                            image: None,
                            order: order_value,
                        };
                        crate::net::api::school_info::create(&item).await.map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        show_form.set(false);
                        items.refetch();
                    }
                    Err(e) => leptos::logging::warn!("school-info save failed: {e}"),
                }
            });
        }
    });

    view! {
        <AdminLayout current="school-info">
            <div class="page">
                <header class="page__header page__header--split">
                    <div>
                        <h1>"О школе"</h1>
                        <p class="page__subtitle">"Разделы информации о школе"</p>
                    </div>
                    <button class="btn btn--primary" on:click=open_create>
                        "+ Добавить раздел"
                    </button>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Загрузка..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) if list.is_empty() => {
                                    view! { <p class="page__empty">"Разделы ещё не созданы"</p> }
                                        .into_any()
                                }
                                Some(list) => {
                                    view! {
                                        <ul class="item-list">
                                            {list
                                                .into_iter()
                                                .map(|item| {
                                                    let id = item.id.clone();
                                                    let toggle_id = item.id.clone();
                                                    let active = item.is_active;
                                                    let edit_item = item.clone();
                                                    view! {
                                                        <li class="item-row">
                                                            <div class="item-row__body">
                                                                <div class="item-row__head">
                                                                    <h3 class="item-row__title">{item.title.clone()}</h3>
                                                                    <span class="badge">{item.section.clone()}</span>
                                                                </div>
                                                                <p class="item-row__meta">
                                                                    {format!("Порядок: {}", item.order)}
                                                                </p>
                                                            </div>
                                                            <div class="item-row__actions">
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| on_toggle.run((toggle_id.clone(), active))
                                                                >
                                                                    {if active { "Скрыть" } else { "Показать" }}
                                                                </button>
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
                                        <p class="page__error">"Не удалось загрузить разделы"</p>
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
                                        "Редактировать раздел"
                                    } else {
                                        "Добавить раздел"
                                    }
                                }}
                            </h2>
                            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                on_save.run(());
                            }>
                                <label class="dialog__label">
                                    "Раздел (about, history, mission...)"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || section.get()
                                        on:input=move |ev| section.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "Заголовок"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || title.get()
                                        on:input=move |ev| title.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "Содержание"
                                    <textarea
                                        class="dialog__input"
                                        rows="4"
                                        prop:value=move || content.get()
                                        on:input=move |ev| content.set(event_target_value(&ev))
                                    ></textarea>
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

async fn fetch_sections() -> Option<Vec<SchoolInfoItem>> {
    let query = crate::net::api::school_info::SchoolInfoQuery::default();
    match crate::net::api::school_info::list(&query).await {
        Ok(list) => Some(list),
        Err(e) => {
            leptos::logging::warn!("school-info load failed: {e}");
            None
        }
    }
}
