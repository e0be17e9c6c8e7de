//! Brand theme tokens.
//!
//! Every color on the page is defined exactly once here. The root node
//! carries them as CSS custom properties (see [`Theme::style_vars`]) and
//! everything below, including [`crate::styles::LANDING_CSS`], refers to
//! them through `var(--brand-*)`.
//!
//! Palette taken from the Archivedesign.ai logo.

/// Named, immutable brand values shared across the view tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Display name used in copy and alt texts
    pub name: &'static str,
    /// Dark teal from the logo wordmark
    pub primary: &'static str,
    /// Light cream page background from the logo
    pub primary_muted: &'static str,
    /// Orange from the logo icon
    pub accent: &'static str,
    /// Body and heading text
    pub text: &'static str,
    /// Secondary copy, card bodies
    pub text_muted: &'static str,
    /// Cards and the default section background
    pub surface: &'static str,
    /// Alternating section background
    pub surface_alt: &'static str,
    /// Sticky header background
    pub header_surface: &'static str,
    /// Background behind the app preview image
    pub preview_surface: &'static str,
    /// Foreground on accent-filled buttons and badges
    pub on_accent: &'static str,
    /// Logo file name, resolved against the configured base URL
    pub logo_file: &'static str,
    /// Alt text for the logo image
    pub logo_alt: &'static str,
}

impl Theme {
    /// The Archivedesign.ai brand.
    pub const ARCHIVEDESIGN: Theme = Theme {
        name: "Archivedesign.ai",
        primary: "#003B49",
        primary_muted: "#EDE6D9",
        accent: "#F15A24",
        text: "#003B49",
        text_muted: "#4B4B4B",
        surface: "#FFFFFF",
        surface_alt: "#FAF9F6",
        header_surface: "#FEF6E2",
        preview_surface: "#FFF6E2",
        on_accent: "#FFFFFF",
        logo_file: "archivedesignai-logo.png",
        logo_alt: "Archivedesign.ai logo",
    };

    /// Custom property name/value pairs, in declaration order.
    pub fn tokens(&self) -> [(&'static str, &'static str); 10] {
        [
            ("--brand-primary", self.primary),
            ("--brand-primary-muted", self.primary_muted),
            ("--brand-accent", self.accent),
            ("--brand-text", self.text),
            ("--brand-text-muted", self.text_muted),
            ("--brand-surface", self.surface),
            ("--brand-surface-alt", self.surface_alt),
            ("--brand-header-surface", self.header_surface),
            ("--brand-preview-surface", self.preview_surface),
            ("--brand-on-accent", self.on_accent),
        ]
    }

    /// Inline `style` value declaring every token on the root node.
    pub fn style_vars(&self) -> String {
        self.tokens()
            .iter()
            .map(|(name, value)| format!("{name}:{value};"))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ARCHIVEDESIGN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn style_vars_declares_every_token_once() {
        let theme = Theme::ARCHIVEDESIGN;
        let vars = theme.style_vars();

        for (name, value) in theme.tokens() {
            let decl = format!("{name}:{value};");
            assert_eq!(vars.matches(&decl).count(), 1, "{decl}");
        }
        assert_eq!(vars.matches(';').count(), theme.tokens().len());
    }

    #[test]
    fn token_names_are_unique() {
        let tokens = Theme::ARCHIVEDESIGN.tokens();
        for (i, (a, _)) in tokens.iter().enumerate() {
            for (b, _) in &tokens[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_is_archivedesign() {
        assert_eq!(Theme::default(), Theme::ARCHIVEDESIGN);
    }
}
