//! Dashboard counter card.

use leptos::prelude::*;

/// A single counter on the dashboard grid.
#[component]
pub fn StatCard(
    title: &'static str,
    value: i64,
    icon: &'static str,
    accent: &'static str,
) -> impl IntoView {
    let badge_class = format!("stat-card__icon stat-card__icon--{accent}");

    view! {
        <div class="stat-card">
            <div class="stat-card__body">
                <p class="stat-card__title">{title}</p>
                <p class="stat-card__value">{value}</p>
            </div>
            <div class=badge_class>
                <span>{icon}</span>
            </div>
        </div>
    }
}
