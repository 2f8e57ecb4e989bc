//! Gallery management: image list, create/edit modal, delete.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::GalleryItem;
use crate::util::format::short_date;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let items = LocalResource::new(|| fetch_gallery());

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(Option::<String>::None);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let category = RwSignal::new(String::from("general"));

    let open_create = move |_| {
        editing.set(None);
        title.set(String::new());
        description.set(String::new());
        image.set(String::new());
        category.set(String::from("general"));
        show_form.set(true);
    };

    let on_edit = Callback::new(move |item: GalleryItem| {
        title.set(item.title);
        description.set(item.description.unwrap_or_default());
        image.set(item.image);
        category.set(item.category);
        editing.set(Some(item.id));
        show_form.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        if !crate::util::confirm::confirm("Удалить это изображение из галереи?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let items = items.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::gallery::delete(&id).await {
                    leptos::logging::warn!("gallery delete failed: {e}");
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
            use crate::net::types::{GalleryCreate, GalleryUpdate};
            use crate::util::format::non_empty;

            if title.get_untracked().trim().is_empty() || image.get_untracked().trim().is_empty()
            {
                return;
            }

            let items = items.clone();
            leptos::task::spawn_local(async move {
                let result = match editing.get_untracked() {
                    Some(id) => {
                        let changes = GalleryUpdate {
                            title: Some(title.get_untracked()),
                            description: non_empty(description.get_untracked()),
                            image: Some(image.get_untracked()),
                            category: Some(category.get_untracked()),
                            ..Default::default()
                        };
                        crate::net::api::gallery::update(&id, &changes).await.map(|_| ())
                    }
                    None => {
                        let item = GalleryCreate {
                            title: title.get_untracked(),
                            description: non_empty(description.get_untracked()),
                            image: image.get_untracked(),
                            category: category.get_untracked(),
                        };
                        crate::net::api::gallery::create(&item).await.map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        show_form.set(false);
                        items.refetch();
                    }
                    Err(e) => leptos::logging::warn!("gallery save failed: {e}"),
                }
            });
        }
    });

    view! {
        <AdminLayout current="gallery">
            <div class="page">
                <header class="page__header page__header--split">
                    <div>
                        <h1>"Галерея"</h1>
                        <p class="page__subtitle">"Фотографии школы"</p>
                    </div>
                    <button class="btn btn--primary" on:click=open_create>
                        "+ Добавить фото"
                    </button>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Загрузка..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) if list.is_empty() => {
                                    view! { <p class="page__empty">"Галерея пуста"</p> }.into_any()
                                }
                                Some(list) => {
                                    view! {
                                        <div class="gallery-grid">
                                            {list
                                                .into_iter()
                                                .map(|item| {
                                                    let id = item.id.clone();
                                                    let edit_item = item.clone();
                                                    view! {
                                                        <div class="gallery-card">
                                                            <img
                                                                class="gallery-card__image"
                                                                src=item.image.clone()
                                                                alt=item.title.clone()
                                                            />
                                                            <div class="gallery-card__body">
                                                                <h3 class="gallery-card__title">{item.title.clone()}</h3>
                                                                <p class="item-row__meta">
                                                                    {format!(
                                                                        "{} · {}",
                                                                        item.category,
                                                                        short_date(&item.created_at),
                                                                    )}
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
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <p class="page__error">"Не удалось загрузить галерею"</p>
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
                                    if editing.get().is_some() { "Редактировать фото" } else { "Добавить фото" }
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
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || description.get()
                                        on:input=move |ev| description.set(event_target_value(&ev))
                                    />
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
                                    "Категория"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || category.get()
                                        on:input=move |ev| category.set(event_target_value(&ev))
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

async fn fetch_gallery() -> Option<Vec<GalleryItem>> {
    let query = crate::net::api::gallery::GalleryQuery::default();
    match crate::net::api::gallery::list(&query).await {
        Ok(list) => Some(list),
        Err(e) => {
            leptos::logging::warn!("gallery load failed: {e}");
            None
        }
    }
}
