//! # archivedesign-site
//!
//! Components and content for the Archivedesign.ai landing page, built with
//! [Leptos](https://leptos.dev/) 0.8.
//!
//! The same component tree runs in two places:
//!
//! - **Browser** - the `archivedesign-landing` binary mounts
//!   [`components::LandingPage`] to the document body (client-side rendering).
//! - **Static HTML** - `render_page` renders the full document to a string
//!   with Leptos's `RenderHtml` trait, for prerendering and for tests. It
//!   needs the `ssr` feature (on by default; the browser build turns it off).
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! use archivedesign_site::{render_page, SiteConfig};
//!
//! let config = SiteConfig {
//!     copyright_year: Some(2025),
//!     ..Default::default()
//! };
//!
//! let html = render_page(&config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Plan marketplace"));
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`theme`] - brand tokens, exposed as `--brand-*` CSS variables
//! - [`content`] - the fixed feature, step and filter lists
//! - [`cards`] - ordered, keyed list-to-card mapping
//! - [`motion`] - entrance animation intents and the fire-once viewport latch
//! - [`form`] - the signup stub (submission is suppressed)
//! - [`config`] - TOML site configuration
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cards;
pub mod components;
pub mod config;
pub mod content;
pub mod form;
pub mod motion;
pub mod styles;
pub mod theme;

pub use config::{ConfigError, SiteConfig};
pub use theme::Theme;

#[cfg(feature = "ssr")]
use components::LandingDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page as an HTML document.
///
/// Animated nodes come out in their initial pose; a browser build takes
/// them to their target pose.
#[cfg(feature = "ssr")]
pub fn render_page(config: &SiteConfig) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <LandingDocument config=config.clone() /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{FEATURES, STEPS};
    use crate::theme::Theme;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    fn render() -> String {
        render_page(&SiteConfig {
            copyright_year: Some(2025),
            ..Default::default()
        })
    }

    fn positions(html: &str, needles: &[String]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| html.find(n).unwrap_or_else(|| panic!("missing {n:?}")))
            .collect()
    }

    #[test]
    fn renders_document_shell() {
        let html = render();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<style>"));
        assert!(html.contains("Archivedesign.ai | Premium residential plans"));
    }

    #[test]
    fn every_section_present_exactly_once() {
        let html = render();
        for marker in [
            "<header class=\"site-header\"",
            "<section class=\"hero\"",
            "id=\"features\"",
            "id=\"how\"",
            "id=\"signup\"",
            "<form class=\"signup-form\"",
            "<footer class=\"site-footer\"",
        ] {
            assert_eq!(html.matches(marker).count(), 1, "{marker}");
        }
    }

    #[test]
    fn renders_three_feature_cards_in_order() {
        let html = render();
        assert_eq!(html.matches("class=\"card feature-card\"").count(), 3);

        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["Plan marketplace", "Royalties for architects", "Builder-ready"]
        );

        let mut needles = Vec::new();
        for feature in FEATURES {
            needles.push(format!("class=\"feature-title\">{}<", feature.title));
            needles.push(format!("class=\"card-body\">{}<", feature.body));
        }
        let found = positions(&html, &needles);
        assert!(found.windows(2).all(|w| w[0] < w[1]), "{found:?}");
    }

    #[test]
    fn renders_four_steps_with_number_badges() {
        let html = render();
        assert_eq!(html.matches("class=\"step-item\"").count(), 4);

        let badges = Regex::new(r#"class="step-badge">(\d+)<"#).expect("regex");
        let numbers: Vec<u32> = badges
            .captures_iter(&html)
            .map(|c| c[1].parse().expect("badge number"))
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);

        let titles: Vec<&str> = STEPS.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Browse", "Match", "Customize", "Build"]);
        let needles: Vec<String> = STEPS
            .iter()
            .map(|s| format!("class=\"step-title\">{}<", s.title))
            .collect();
        let found = positions(&html, &needles);
        assert!(found.windows(2).all(|w| w[0] < w[1]), "{found:?}");
    }

    #[test]
    fn signup_form_is_a_required_email_stub() {
        let html = render();
        let form_start = html.find("<form").expect("form");
        let form_end = html[form_start..].find("</form>").expect("form end") + form_start;
        let form = &html[form_start..form_end];

        assert!(form.contains("type=\"email\""));
        assert!(form.contains("required"));
        assert!(form.contains("you@home.com.au"));
        assert!(form.contains("Join waitlist"));
        assert!(!form.contains("action="), "no submission target");
    }

    #[test]
    fn theme_colors_are_declared_once_on_root() {
        let html = render();
        let theme = Theme::ARCHIVEDESIGN;

        // the only hex literals in the document are the root declarations
        let hex = Regex::new(r"#[0-9A-Fa-f]{6}\b").expect("regex");
        let literals: Vec<&str> = hex.find_iter(&html).map(|m| m.as_str()).collect();
        let declared: Vec<&str> = theme.tokens().iter().map(|(_, v)| *v).collect();
        assert_eq!(literals, declared);

        assert_eq!(html.matches(&theme.style_vars()).count(), 1);
        assert!(html.contains("class=\"landing-root\""));
    }

    #[test]
    fn every_brand_variable_used_is_declared() {
        let html = render();
        let theme = Theme::ARCHIVEDESIGN;
        let declared: Vec<&str> = theme.tokens().iter().map(|(n, _)| *n).collect();

        let uses = Regex::new(r"var\((--brand-[a-z-]+)\)").expect("regex");
        let mut used = 0;
        for cap in uses.captures_iter(&html) {
            let name = cap.get(1).expect("group").as_str();
            assert!(declared.contains(&name), "undeclared {name}");
            used += 1;
        }
        assert!(used > 0);
    }

    #[test]
    fn anchors_and_assets_resolve() {
        let html = render_page(&SiteConfig {
            base_url: "/landing/".into(),
            copyright_year: Some(2031),
            ..Default::default()
        });

        assert_eq!(html.matches("src=\"/landing/archivedesignai-logo.png\"").count(), 2);
        assert!(html.contains("src=\"/landing/app-placeholder.png\""));
        assert!(html.contains("href=\"#how\""));
        assert!(html.contains("href=\"#features\""));
        assert!(html.contains("href=\"#signup\""));
        assert!(html.contains("© 2031 Archivedesign.ai"));
    }

    #[test]
    fn animated_nodes_start_hidden() {
        let html = render();
        // two hero columns, three features, four steps
        assert_eq!(html.matches("data-motion=\"mount\"").count(), 2);
        assert_eq!(html.matches("data-motion=\"in-view-once\"").count(), 7);
        assert_eq!(html.matches("opacity:0;").count(), 9);
        assert!(html.contains("transition:opacity 400ms ease-out 200ms"));
    }

    fn style_of(html: &str, class: &str) -> String {
        let tag = Regex::new(&format!(r#"<div[^>]*\bclass="{class}"[^>]*>"#)).expect("regex");
        let style = Regex::new(r#"\bstyle="([^"]*)""#).expect("regex");
        let open = tag
            .find(html)
            .unwrap_or_else(|| panic!("no div with class {class}"));
        style
            .captures(open.as_str())
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| panic!("{class} has no inline style"))
    }

    #[test]
    fn hero_columns_use_hero_timing() {
        let html = render();
        let copy = style_of(&html, "hero-copy");
        let visual = style_of(&html, "hero-visual");

        assert!(copy.contains("translateY(12px)"), "{copy}");
        assert!(visual.contains("translateY(12px)"), "{visual}");
        assert!(copy.contains("transition:opacity 600ms ease-out 0ms"), "{copy}");
        // right column trails the left by 100ms
        assert!(visual.contains("transition:opacity 600ms ease-out 100ms"), "{visual}");
        assert!(visual.contains("transform 600ms ease-out 100ms"), "{visual}");
    }

    #[test]
    fn renders_filter_chips() {
        let html = render();
        assert_eq!(html.matches("class=\"filter-chip\"").count(), 4);
        assert!(html.contains("Budget $400–600k"));
    }
}
