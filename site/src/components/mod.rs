//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument (static render only, `ssr` feature)
//! ├── LandingStyles
//! └── LandingPage
//!     └── ThemeProvider (root node, carries --brand-* variables)
//!         ├── Header
//!         ├── Hero
//!         │   ├── Motion (copy column, on mount)
//!         │   └── Motion (preview column, on mount, delayed)
//!         │       └── FilterPanel
//!         ├── Features
//!         │   └── FeatureCard × 3 (Motion, in view once)
//!         ├── HowItWorks
//!         │   └── StepCard × 4 (Motion, in view once, staggered)
//!         ├── Signup
//!         └── Footer
//! ```
//!
//! Sections take the [`crate::theme::Theme`] and their content lists as
//! props; nothing reads global state.

mod document;
mod features;
mod footer;
mod header;
mod hero;
mod motion;
mod signup;
mod steps;

#[cfg(feature = "ssr")]
pub use document::LandingDocument;
pub use document::{APP_PREVIEW_FILE, LandingPage, LandingStyles, ThemeProvider};
pub use features::{FeatureCard, Features};
pub use footer::Footer;
pub use header::Header;
pub use hero::{FilterPanel, Hero};
pub use motion::Motion;
pub use signup::Signup;
pub use steps::{HowItWorks, StepCard};
