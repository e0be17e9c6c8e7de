//! Waitlist signup. No backend: submissions are swallowed.

use crate::content::Anchor;
use crate::form::intercept_submit;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Email waitlist form.
#[component]
pub fn Signup() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        intercept_submit(&ev);
    };

    view! {
        <section id=Anchor::Signup.id() class="section section-surface">
            <div class="container-narrow">
                <h2 class="section-title">"Get early access"</h2>
                <p class="signup-lede">
                    "Join the waitlist and we'll notify you when invites open. We respect your inbox."
                </p>
                <form class="signup-form" on:submit=on_submit>
                    <input
                        type="email"
                        name="email"
                        required=true
                        placeholder="you@home.com.au"
                        aria-label="Email address"
                        class="signup-input"
                    />
                    <button type="submit" class="btn btn-accent">"Join waitlist"</button>
                </form>
                <p class="signup-legal">
                    "By subscribing you agree to our "
                    <a href="#">"Terms"</a>
                    " and "
                    <a href="#">"Privacy Policy"</a>
                    "."
                </p>
            </div>
        </section>
    }
}
