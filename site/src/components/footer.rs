use crate::theme::Theme;
use leptos::prelude::*;

/// Page footer: logo, copyright line, legal links.
#[component]
pub fn Footer(theme: Theme, logo_src: String, year: i32) -> impl IntoView {
    let copyright = format!("© {year} {}", theme.name);
    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <img src=logo_src alt=theme.logo_alt class="footer-logo" />
                    <span class="footer-copy">{copyright}</span>
                </div>
                <div class="footer-links">
                    <a href="#">"Contact"</a>
                    <a href="#">"For Architects"</a>
                    <a href="#">"For Builders"</a>
                    <a href="#">"LinkedIn"</a>
                </div>
            </div>
        </footer>
    }
}
