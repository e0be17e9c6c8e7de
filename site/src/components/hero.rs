use std::time::Duration;

use super::Motion;
use crate::cards::render_cards;
use crate::content::{Anchor, FilterChip};
use crate::motion::MotionSpec;
use leptos::prelude::*;

const HERO_MOTION: MotionSpec = MotionSpec::fade_up(12.0).duration(Duration::from_millis(600));

/// Above-the-fold section: pitch and CTAs on the left, app preview on the right.
#[component]
pub fn Hero(preview_src: String, chips: &'static [FilterChip]) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-blob-layer" aria-hidden="true">
                <div class="hero-blob"></div>
            </div>

            <div class="container hero-grid">
                <Motion spec=HERO_MOTION class="hero-copy" label="hero-copy">
                    <h1 class="hero-title">
                        "Premium residential plans — faster, smarter, fairly paid."
                    </h1>
                    <p class="hero-lede">
                        "We connect homeowners and architects on a marketplace for beautiful, design-ready plans. "
                        "Save months, control costs, and share value with the original designer."
                    </p>
                    <div class="hero-actions">
                        <a href=Anchor::Signup.href() class="btn btn-accent">"Get early access"</a>
                        <a href=Anchor::How.href() class="btn btn-outline">"See how it works"</a>
                    </div>
                    <div class="hero-tagline">
                        <span>"AU-focused • Builder-ready • Revenue for architects"</span>
                    </div>
                </Motion>

                <Motion
                    spec=HERO_MOTION.delay(Duration::from_millis(100))
                    class="hero-visual"
                    label="hero-visual"
                >
                    <div class="preview-frame">
                        <img src=preview_src alt="App preview" class="preview-image" />
                    </div>
                    <FilterPanel chips=chips />
                </Motion>
            </div>
        </section>
    }
}

/// Overlay listing example search filters.
#[component]
pub fn FilterPanel(chips: &'static [FilterChip]) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-label">"Example filters"</div>
            <div class="filter-chips">
                <For each=move || render_cards(chips) key=|card| card.key let:card>
                    <span class="filter-chip">{card.entry.0}</span>
                </For>
            </div>
        </div>
    }
}
