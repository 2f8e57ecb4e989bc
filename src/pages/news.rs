//! News management: list, create/edit modal, delete.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::{NewsItem, NewsStatus};
use crate::util::format::short_date;

#[component]
pub fn NewsPage() -> impl IntoView {
    let items = LocalResource::new(|| fetch_news());

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(Option::<String>::None);
    let title = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let status = RwSignal::new(NewsStatus::Draft);

    let open_create = move |_| {
        editing.set(None);
        title.set(String::new());
        excerpt.set(String::new());
        content.set(String::new());
        image.set(String::new());
        status.set(NewsStatus::Draft);
        show_form.set(true);
    };

    let on_edit = Callback::new(move |item: NewsItem| {
        title.set(item.title);
        excerpt.set(item.excerpt.unwrap_or_default());
        content.set(item.content);
        image.set(item.image.unwrap_or_default());
        status.set(item.status);
        editing.set(Some(item.id));
        show_form.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        if !crate::util::confirm::confirm("Вы уверены, что хотите удалить эту новость?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let items = items.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::news::delete(&id).await {
                    leptos::logging::warn!("news delete failed: {e}");
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
            use crate::net::types::{NewsCreate, NewsUpdate};
            use crate::util::format::non_empty;

            if title.get_untracked().trim().is_empty()
                || content.get_untracked().trim().is_empty()
            {
                return;
            }

            let items = items.clone();
            leptos::task::spawn_local(async move {
                let result = match editing.get_untracked() {
                    Some(id) => {
                        let changes = NewsUpdate {
                            title: Some(title.get_untracked()),
                            content: Some(content.get_untracked()),
                            excerpt: non_empty(excerpt.get_untracked()),
                            image: non_empty(image.get_untracked()),
                            status: Some(status.get_untracked()),
                        };
                        crate::net::api::news::update(&id, &changes).await.map(|_| ())
                    }
                    None => {
                        let item = NewsCreate {
                            title: title.get_untracked(),
                            content: content.get_untracked(),
                            excerpt: non_empty(excerpt.get_untracked()),
                            image: non_empty(image.get_untracked()),
                            status: status.get_untracked(),
                        };
                        crate::net::api::news::create(&item).await.map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        show_form.set(false);
                        items.refetch();
                    }
                    Err(e) => leptos::logging::warn!("news save failed: {e}"),
                }
            });
        }
    });

    view! {
        <AdminLayout current="news">
            <div class="page">
                <header class="page__header page__header--split">
                    <div>
                        <h1>"Новости"</h1>
                        <p class="page__subtitle">"Управление новостями сайта"</p>
                    </div>
                    <button class="btn btn--primary" on:click=open_create>
                        "+ Создать новость"
                    </button>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Загрузка..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) if list.is_empty() => {
                                    view! { <p class="page__empty">"Пока нет новостей"</p> }
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
                                                                    <h3 class="item-row__title">{item.title.clone()}</h3>
                                                                    <span class=item.status.badge_class()>
                                                                        {item.status.label()}
                                                                    </span>
                                                                </div>
                                                                {item
                                                                    .excerpt
                                                                    .clone()
                                                                    .map(|excerpt| {
                                                                        view! { <p class="item-row__meta">{excerpt}</p> }
                                                                    })}
                                                                <p class="item-row__meta">
                                                                    {short_date(&item.created_at).to_owned()}
                                                                </p>
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
                                        <p class="page__error">"Не удалось загрузить новости"</p>
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
                                        "Редактировать новость"
                                    } else {
                                        "Создать новость"
                                    }
                                }}
                            </h2>
                            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                on_save.run(());
                            }>
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
                                    "Краткое описание"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || excerpt.get()
                                        on:input=move |ev| excerpt.set(event_target_value(&ev))
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
                                    "Изображение (URL или base64)"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || image.get()
                                        on:input=move |ev| image.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__label">
                                    "Статус"
                                    <select
                                        class="dialog__input"
                                        prop:value=move || status.get().as_str()
                                        on:change=move |ev| {
                                            if let Some(s) = NewsStatus::parse(&event_target_value(&ev)) {
                                                status.set(s);
                                            }
                                        }
                                    >
                                        <option value="draft">"Черновик"</option>
                                        <option value="published">"Опубликовать"</option>
                                        <option value="archived">"Архив"</option>
                                    </select>
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

async fn fetch_news() -> Option<Vec<NewsItem>> {
    match crate::net::api::news::list(&crate::net::api::news::NewsQuery::default()).await {
        Ok(list) => Some(list),
        Err(e) => {
            leptos::logging::warn!("news load failed: {e}");
            None
        }
    }
}
