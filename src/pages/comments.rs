//! Comment moderation: full queue with approve/reject and delete.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::net::types::Comment;
use crate::util::format::short_date;

#[component]
pub fn CommentsPage() -> impl IntoView {
    let items = LocalResource::new(|| fetch_comments());

    // Approve or reject; the backend stores the flag, the list refreshes.
    let on_moderate = Callback::new(move |(id, approved): (String, bool)| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::CommentUpdate;

            let items = items.clone();
            leptos::task::spawn_local(async move {
                let changes = CommentUpdate { is_approved: Some(approved) };
                if let Err(e) = crate::net::api::comments::update(&id, &changes).await {
                    leptos::logging::warn!("comment moderation failed: {e}");
                }
                items.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, approved);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        if !crate::util::confirm::confirm("Удалить этот комментарий?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let items = items.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::comments::delete(&id).await {
                    leptos::logging::warn!("comment delete failed: {e}");
                }
                items.refetch();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <AdminLayout current="comments">
            <div class="page">
                <header class="page__header">
                    <h1>"Комментарии"</h1>
                    <p class="page__subtitle">"Модерация комментариев к новостям"</p>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Загрузка..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|loaded| match loaded {
                                Some(list) if list.is_empty() => {
                                    view! { <p class="page__empty">"Комментариев нет"</p> }
                                        .into_any()
                                }
                                Some(list) => {
                                    view! {
                                        <ul class="item-list">
                                            {list
                                                .into_iter()
                                                .map(|comment| {
                                                    let approve_id = comment.id.clone();
                                                    let reject_id = comment.id.clone();
                                                    let delete_id = comment.id.clone();
                                                    let approved = comment.is_approved;
                                                    let badge = if approved {
                                                        view! { <span class="badge badge--published">"Одобрен"</span> }
                                                    } else {
                                                        view! { <span class="badge badge--draft">"На модерации"</span> }
                                                    };
                                                    view! {
                                                        <li class="item-row">
                                                            <div class="item-row__body">
                                                                <div class="item-row__head">
                                                                    <h3 class="item-row__title">{comment.author_name.clone()}</h3>
                                                                    {badge}
                                                                </div>
                                                                <p class="item-row__content">{comment.content.clone()}</p>
                                                                <p class="item-row__meta">
                                                                    {short_date(&comment.created_at).to_owned()}
                                                                </p>
                                                            </div>
                                                            <div class="item-row__actions">
                                                                <Show when=move || !approved>
                                                                    <button
                                                                        class="btn btn--primary"
                                                                        on:click={
                                                                            let id = approve_id.clone();
                                                                            move |_| on_moderate.run((id.clone(), true))
                                                                        }
                                                                    >
                                                                        "Одобрить"
                                                                    </button>
                                                                </Show>
                                                                <Show when=move || approved>
                                                                    <button
                                                                        class="btn"
                                                                        on:click={
                                                                            let id = reject_id.clone();
                                                                            move |_| on_moderate.run((id.clone(), false))
                                                                        }
                                                                    >
                                                                        "Отклонить"
                                                                    </button>
                                                                </Show>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_delete.run(delete_id.clone())
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
                                        <p class="page__error">"Не удалось загрузить комментарии"</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </AdminLayout>
    }
}

/// The whole queue, not just approved comments.
async fn fetch_comments() -> Option<Vec<Comment>> {
    let query = crate::net::api::comments::CommentQuery {
        approved_only: Some(false),
        ..Default::default()
    };
    match crate::net::api::comments::list(&query).await {
        Ok(list) => Some(list),
        Err(e) => {
            leptos::logging::warn!("comments load failed: {e}");
            None
        }
    }
}
