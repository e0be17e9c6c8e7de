use super::Motion;
use crate::cards::{Card, render_cards};
use crate::content::{Anchor, Step};
use leptos::prelude::*;

/// "How it works" as an ordered list of step cards.
#[component]
pub fn HowItWorks(steps: &'static [Step]) -> impl IntoView {
    view! {
        <section id=Anchor::How.id() class="section">
            <div class="container">
                <h2 class="section-title">"How it works"</h2>
                <ol class="card-grid steps-grid">
                    <For each=move || render_cards(steps) key=|card| card.key let:card>
                        <li class="step-item">
                            <StepCard card=card />
                        </li>
                    </For>
                </ol>
            </div>
        </section>
    }
}

/// Step card; the badge shows the step number.
#[component]
pub fn StepCard(card: Card<Step>) -> impl IntoView {
    let Card { key, entry, motion, .. } = card;

    view! {
        <Motion spec=motion class="card step-card" label=format!("step-{key}")>
            <div class="step-head">
                <div class="step-badge">{entry.n}</div>
                <h3 class="step-title">{entry.title}</h3>
            </div>
            <p class="card-body">{entry.body}</p>
        </Motion>
    }
}
