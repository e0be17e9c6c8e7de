//! Page root and the full HTML document.

use super::{Features, Footer, Header, Hero, HowItWorks, Signup};
use crate::config::SiteConfig;
use crate::content::{FEATURES, FILTER_CHIPS, STEPS};
use crate::styles::LANDING_CSS;
use crate::theme::Theme;
use leptos::prelude::*;

/// App preview image, resolved against the configured base URL.
pub const APP_PREVIEW_FILE: &str = "app-placeholder.png";

/// Root node carrying the theme as CSS custom properties.
///
/// The variable declaration is computed once, when the root mounts.
#[component]
pub fn ThemeProvider(theme: Theme, children: Children) -> impl IntoView {
    let vars = theme.style_vars();
    view! {
        <div class="landing-root" style=vars>
            {children()}
        </div>
    }
}

/// Page stylesheet as an inline `<style>` element.
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! { <style>{LANDING_CSS}</style> }
}

/// The whole landing page, ready to mount.
#[component]
pub fn LandingPage(
    config: SiteConfig,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    let logo_src = config.asset_url(theme.logo_file);
    let preview_src = config.asset_url(APP_PREVIEW_FILE);
    let year = config.year();

    view! {
        <ThemeProvider theme=theme>
            <Header theme=theme logo_src=logo_src.clone() />
            <main>
                <Hero preview_src=preview_src chips=&FILTER_CHIPS />
                <Features theme=theme features=&FEATURES />
                <HowItWorks steps=&STEPS />
                <Signup />
            </main>
            <Footer theme=theme logo_src=logo_src year=year />
        </ThemeProvider>
    }
}

/// Complete `<html>` document for static rendering.
#[cfg(feature = "ssr")]
#[component]
pub fn LandingDocument(
    config: SiteConfig,
    #[prop(optional)] theme: Theme,
) -> impl IntoView {
    let title = format!("{} | Premium residential plans", theme.name);
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="A marketplace for architect-designed residential plans, with royalties for the original designer."
                />
                <title>{title}</title>
                <LandingStyles />
            </head>
            <body>
                <LandingPage config=config theme=theme />
            </body>
        </html>
    }
}
