use super::Motion;
use crate::cards::{Card, render_cards};
use crate::content::{Anchor, Feature};
use crate::theme::Theme;
use leptos::prelude::*;

/// Feature grid, one card per entry.
#[component]
pub fn Features(theme: Theme, features: &'static [Feature]) -> impl IntoView {
    let heading = format!("Why {}", theme.name);
    view! {
        <section id=Anchor::Features.id() class="section section-alt">
            <div class="container">
                <div class="section-head">
                    <h2 class="section-title">{heading}</h2>
                    <span class="section-aside">"For homeowners • architects • builders"</span>
                </div>
                <div class="card-grid features-grid">
                    <For each=move || render_cards(features) key=|card| card.key let:card>
                        <FeatureCard card=card />
                    </For>
                </div>
            </div>
        </section>
    }
}

/// Card with a letter badge, title and body.
#[component]
pub fn FeatureCard(card: Card<Feature>) -> impl IntoView {
    let Card { key, entry, motion, .. } = card;
    let badge = entry.initial().map(String::from).unwrap_or_default();

    view! {
        <Motion spec=motion class="card feature-card" label=key>
            <div class="feature-badge">{badge}</div>
            <h3 class="feature-title">{entry.title}</h3>
            <p class="card-body">{entry.body}</p>
        </Motion>
    }
}
