//! Event schedule: list, create/edit modal, delete.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::ScheduleEntry;
use crate::util::format::short_date;

#[component]
pub fn SchedulePage() -> impl IntoView {
    let items = LocalResource::new(|| fetch_schedule());

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(Option::<String>::None);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let open_create = move |_| {
        editing.set(None);
        title.set(String::new());
        description.set(String::new());
        date.set(String::new());
        time.set(String::new());
        location.set(String::new());
        show_form.set(true);
    };

    let on_edit = Callback::new(move |entry: ScheduleEntry| {
        title.set(entry.title);
        description.set(entry.description.unwrap_or_default());
        date.set(short_date(&entry.date).to_owned());
        time.set(entry.time);
        location.set(entry.location.unwrap_or_default());
        editing.set(Some(entry.id));
        show_form.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        if !crate::util::confirm::confirm("Удалить это событие?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let items = items.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::schedule::delete(&id).await {
                    leptos::logging::warn!("schedule delete failed: {e}");
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
            use crate::net::types::{ScheduleCreate, ScheduleUpdate};
            use crate::util::format::non_empty;

            if title.get_untracked().trim().is_empty()
                || date.get_untracked().trim().is_empty()
                || time.get_untracked().trim().is_empty()
            {
                return;
            }

            let items = items.clone();
            leptos::task::spawn_local(async move {
                let result = match editing.get_untracked() {
                    Some(id) => {
                        let changes = ScheduleUpdate {
                            title: Some(title.get_untracked()),
                            description: non_empty(description.get_untracked()),
                            date: Some(date.get_untracked()),
                            time: Some(time.get_untracked()),
                            location: non_empty(location.get_untracked()),
                            ..Default::default()
                        };
                        crate::net::api::schedule::update(&id, &changes).await.map(|_| ())
                    }
                    None => {
                        let entry = ScheduleCreate {
                            title: title.get_untracked(),
                            description: non_empty(description.get_untracked()),
                            date: date.get_untracked(),
                            time: time.get_untracked(),
                            location: non_empty(location.get_untracked()),
                        };
                        crate::net::api::schedule::create(&entry).await.map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        show_form.set(false);
                        items.refetch();
                    }
                    Err(e) => leptos::logging::warn!("schedule save failed: {e}"),
                }
            });
        }
    });

    view! {
        <AdminLayout current="schedule">
            <div class="page">
                <header class="page__header page__header--split">
                    <div>
                        <h1>"Расписание"</h1>
                        <p class="page__subtitle">"События и мероприятия школы"</p>
                    </div>
                    <button class="btn btn--primary" on:click=open_create>
                        "+ Добавить событие"
                    </button>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Загрузка..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) if list.is_empty() => {
                                    view! { <p class="page__empty">"Событий пока нет"</p> }
                                        .into_any()
                                }
                                Some(list) => {
                                    view! {
                                        <ul class="item-list">
                                            {list
                                                .into_iter()
                                                .map(|entry| {
                                                    let id = entry.id.clone();
                                                    let edit_entry = entry.clone();
                                                    view! {
                                                        <li class="item-row">
                                                            <div class="item-row__body">
                                                                <h3 class="item-row__title">{entry.title.clone()}</h3>
                                                                <p class="item-row__meta">
                                                                    {format!(
                                                                        "{} {}{}",
                                                                        short_date(&entry.date),
                                                                        entry.time,
                                                                        entry
                                                                            .location
                                                                            .as_deref()
                                                                            .map(|l| format!(" · {l}"))
                                                                            .unwrap_or_default(),
                                                                    )}
                                                                </p>
                                                            </div>
                                                            <div class="item-row__actions">
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| on_edit.run(edit_entry.clone())
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
                                        <p class="page__error">"Не удалось загрузить расписание"</p>
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
                                        "Редактировать событие"
                                    } else {
                                        "Добавить событие"
                                    }
                                }}
                            </h2>
                            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                on_save.run(());
                            }>
                                <label class="dialog__label">
                                    "Название"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || title.get()
                                        on:input=move |ev| title.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "Описание"
                                    <textarea
                                        class="dialog__input"
                                        rows="3"
                                        prop:value=move || description.get()
                                        on:input=move |ev| description.set(event_target_value(&ev))
                                    ></textarea>
                                </label>
                                <label class="dialog__label">
                                    "Дата"
                                    <input
                                        class="dialog__input"
                                        type="date"
                                        prop:value=move || date.get()
                                        on:input=move |ev| date.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "Время"
                                    <input
                                        class="dialog__input"
                                        type="time"
                                        prop:value=move || time.get()
                                        on:input=move |ev| time.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "Место"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || location.get()
                                        on:input=move |ev| location.set(event_target_value(&ev))
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

async fn fetch_schedule() -> Option<Vec<ScheduleEntry>> {
    let query = crate::net::api::schedule::ScheduleQuery::default();
    match crate::net::api::schedule::list(&query).await {
        Ok(list) => Some(list),
        Err(e) => {
            leptos::logging::warn!("schedule load failed: {e}");
            None
        }
    }
}
