use crate::content::Anchor;
use crate::theme::Theme;
use leptos::prelude::*;

/// Sticky header with the logo, section links and the signup CTA.
#[component]
pub fn Header(theme: Theme, logo_src: String) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header-inner">
                <a href=Anchor::Top.href() class="site-brand">
                    <img src=logo_src alt=theme.logo_alt class="site-logo" />
                </a>
                <nav class="site-nav">
                    <a href=Anchor::How.href()>"How it works"</a>
                    <a href=Anchor::Features.href()>"Why us"</a>
                    <a href=Anchor::Signup.href()>"Early access"</a>
                </nav>
                <a href=Anchor::Signup.href() class="btn btn-accent btn-small">
                    "Join waitlist"
                </a>
            </div>
        </header>
    }
}
