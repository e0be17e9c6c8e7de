//! CSS for the landing page.
//!
//! Colors come exclusively from the `--brand-*` custom properties that
//! [`crate::theme::Theme::style_vars`] puts on the root node. Neutral
//! hairlines and shadows use translucent black.

/// Complete stylesheet, inlined into the document head.
pub const LANDING_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    -webkit-font-smoothing: antialiased;
}
img { display: block; max-width: 100%; }
a { color: inherit; text-decoration: none; }

.landing-root {
    min-height: 100vh;
    width: 100%;
    background: var(--brand-primary-muted);
    color: var(--brand-text);
}

.container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
.container-narrow { max-width: 48rem; margin: 0 auto; padding: 0 1rem; text-align: center; }
.muted { color: var(--brand-text-muted); }

/* Buttons */
.btn {
    display: inline-flex;
    justify-content: center;
    align-items: center;
    border-radius: 1rem;
    padding: 0.75rem 1.25rem;
    font-weight: 500;
    transition: box-shadow 150ms, background 150ms;
    cursor: pointer;
}
.btn-accent {
    background: var(--brand-accent);
    color: var(--brand-on-accent);
    border: none;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
}
.btn-accent:hover { box-shadow: 0 4px 10px rgba(0, 0, 0, 0.14); }
.btn-outline { border: 1px solid rgba(0, 0, 0, 0.1); }
.btn-outline:hover { background: rgba(0, 0, 0, 0.05); }
.btn-small { padding: 0.5rem 1rem; font-size: 0.875rem; border: 1px solid rgba(0, 0, 0, 0.1); }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 40;
    background: var(--brand-header-surface);
    border-bottom: 1px solid rgba(0, 0, 0, 0.05);
}
.site-header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 0.75rem;
    padding-bottom: 0.75rem;
}
.site-logo { height: 4rem; width: auto; }
.site-nav { display: none; gap: 1.5rem; font-size: 0.875rem; }
.site-nav a:hover, .footer-links a:hover { opacity: 0.8; }

/* Hero */
.hero { position: relative; overflow: hidden; }
.hero-blob-layer { pointer-events: none; position: absolute; inset: 0; }
.hero-blob {
    height: 16rem;
    width: 16rem;
    border-radius: 9999px;
    filter: blur(64px);
    opacity: 0.2;
    background: var(--brand-accent);
}
.hero-grid {
    position: relative;
    display: grid;
    gap: 2.5rem;
    align-items: center;
    padding-top: 3.5rem;
    padding-bottom: 4rem;
}
.hero-title { font-size: 1.875rem; font-weight: 600; line-height: 1.15; letter-spacing: -0.02em; margin: 0; }
.hero-lede { margin-top: 1.25rem; font-size: 1rem; max-width: 65ch; color: var(--brand-text-muted); }
.hero-actions { margin-top: 1.75rem; display: flex; flex-direction: column; gap: 0.75rem; }
.hero-tagline { margin-top: 1.5rem; font-size: 0.75rem; color: var(--brand-text-muted); }
.hero-visual { position: relative; }
.preview-frame {
    aspect-ratio: 4 / 3;
    width: 100%;
    border-radius: 1.5rem;
    border: 1px solid rgba(0, 0, 0, 0.05);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
    overflow: hidden;
    background: var(--brand-preview-surface);
    display: flex;
    align-items: center;
    justify-content: center;
}
.preview-image { object-fit: contain; width: 100%; height: 100%; }
.filter-panel {
    display: none;
    position: absolute;
    bottom: -1.5rem;
    right: -1.5rem;
    padding: 1rem;
    border-radius: 1rem;
    border: 1px solid rgba(0, 0, 0, 0.05);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
    background: var(--brand-surface);
}
.filter-panel-label { font-size: 0.75rem; color: var(--brand-text-muted); }
.filter-chips { margin-top: 0.5rem; display: flex; flex-wrap: wrap; gap: 0.5rem; }
.filter-chip { font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 9999px; border: 1px solid rgba(0, 0, 0, 0.1); }

/* Sections */
.section { padding: 4rem 0; scroll-margin-top: 6rem; }
.section-alt {
    background: var(--brand-surface-alt);
    border-top: 1px solid rgba(0, 0, 0, 0.05);
    border-bottom: 1px solid rgba(0, 0, 0, 0.05);
}
.section-surface { background: var(--brand-surface); }
.section-head { display: flex; align-items: flex-end; justify-content: space-between; gap: 1.5rem; }
.section-title { font-size: 1.5rem; font-weight: 600; margin: 0; }
.section-aside { font-size: 0.875rem; color: var(--brand-text-muted); }

.card-grid { margin-top: 2rem; display: grid; gap: 1.5rem; padding: 0; list-style: none; }
.card {
    border-radius: 1.5rem;
    padding: 1.25rem;
    border: 1px solid rgba(0, 0, 0, 0.1);
    background: var(--brand-surface);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
}
.feature-badge {
    height: 2.5rem;
    width: 2.5rem;
    border-radius: 0.75rem;
    display: grid;
    place-content: center;
    font-weight: 600;
    background: var(--brand-primary-muted);
    color: var(--brand-accent);
}
.feature-title { margin: 1rem 0 0; font-weight: 600; font-size: 1.125rem; }
.card-body { margin: 0.5rem 0 0; font-size: 0.875rem; line-height: 1.6; color: var(--brand-text-muted); }
.step-head { display: flex; align-items: center; gap: 0.75rem; }
.step-badge {
    height: 2.25rem;
    width: 2.25rem;
    border-radius: 9999px;
    display: grid;
    place-content: center;
    font-weight: 600;
    background: var(--brand-accent);
    color: var(--brand-on-accent);
}
.step-title { margin: 0; font-weight: 600; }

/* Signup */
.signup-lede { margin-top: 0.75rem; color: var(--brand-text-muted); }
.signup-form {
    margin: 1.5rem auto 0;
    max-width: 36rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.signup-input {
    flex: 1;
    border-radius: 1rem;
    padding: 0.75rem 1rem;
    border: 1px solid rgba(0, 0, 0, 0.1);
    font: inherit;
}
.signup-input:focus { outline: none; box-shadow: 0 0 0 2px var(--brand-accent); }
.signup-legal { margin-top: 0.5rem; font-size: 0.75rem; color: var(--brand-text-muted); }
.signup-legal a { text-decoration: underline; }

/* Footer */
.site-footer {
    padding: 2.5rem 0;
    border-top: 1px solid rgba(0, 0, 0, 0.05);
    background: var(--brand-surface);
}
.footer-inner { display: flex; flex-direction: column; align-items: center; justify-content: space-between; gap: 1rem; }
.footer-brand { display: flex; align-items: center; gap: 0.75rem; }
.footer-logo { height: 1.5rem; width: auto; }
.footer-copy { font-size: 0.875rem; color: var(--brand-text-muted); }
.footer-links { display: flex; align-items: center; gap: 1.25rem; font-size: 0.875rem; }

@media (min-width: 640px) {
    .hero-actions, .signup-form { flex-direction: row; }
}

@media (min-width: 768px) {
    .site-logo { height: 5rem; }
    .site-nav { display: flex; align-items: center; }
    .hero-blob { height: 28rem; width: 28rem; }
    .hero-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); padding-top: 6rem; padding-bottom: 6rem; }
    .hero-title { font-size: 3rem; }
    .hero-lede { font-size: 1.125rem; }
    .filter-panel { display: block; }
    .section { padding: 5rem 0; }
    .section-title { font-size: 1.875rem; }
    .features-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .steps-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
    .footer-inner { flex-direction: row; }
}

@media (prefers-reduced-motion: reduce) {
    [data-motion] { transition: none !important; }
}
"#;
