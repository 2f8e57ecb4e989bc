//! Dashboard page with site-wide counters and quick actions.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::stat_card::StatCard;
use crate::net::types::SiteStats;

/// Dashboard: stat cards from `/stats` plus quick-action links.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = LocalResource::new(|| fetch_stats());

    view! {
        <AdminLayout current="dashboard">
            <div class="page">
                <header class="page__header">
                    <h1>"Дашборд"</h1>
                    <p class="page__subtitle">"Обзор системы управления школьным сайтом"</p>
                </header>

                <Suspense fallback=move || view! { <p class="page__loading">"Загрузка..."</p> }>
                    {move || {
                        stats
                            .get()
                            .map(|loaded| match loaded {
                                Some(s) => {
                                    view! {
                                        <div class="stat-grid">
                                            <StatCard
                                                title="Всего пользователей"
                                                value=s.total_users
                                                icon="👥"
                                                accent="blue"
                                            />
                                            <StatCard
                                                title="Всего новостей"
                                                value=s.total_news
                                                icon="📰"
                                                accent="green"
                                            />
                                            <StatCard
                                                title="Всего комментариев"
                                                value=s.total_comments
                                                icon="💬"
                                                accent="yellow"
                                            />
                                            <StatCard
                                                title="Ожидают модерации"
                                                value=s.pending_comments
                                                icon="⏳"
                                                accent="red"
                                            />
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <p class="page__error">"Не удалось загрузить статистику"</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>

                <section class="panel">
                    <h2 class="panel__title">"Быстрые действия"</h2>
                    <div class="quick-actions">
                        <a class="quick-actions__item" href="/admin/news">
                            <span class="quick-actions__icon">"📰"</span>
                            <span>"Создать новость"</span>
                        </a>
                        <a class="quick-actions__item" href="/admin/gallery">
                            <span class="quick-actions__icon">"🖼️"</span>
                            <span>"Загрузить в галерею"</span>
                        </a>
                        <a class="quick-actions__item" href="/admin/comments">
                            <span class="quick-actions__icon">"💬"</span>
                            <span>"Модерировать комментарии"</span>
                        </a>
                    </div>
                </section>
            </div>
        </AdminLayout>
    }
}

/// Fetch counters; failures are logged and rendered as a failed state.
async fn fetch_stats() -> Option<SiteStats> {
    match crate::net::api::stats::get().await {
        Ok(stats) => Some(stats),
        Err(e) => {
            leptos::logging::warn!("stats load failed: {e}");
            None
        }
    }
}
