//! Static page content.
//!
//! Display order is array order. Nothing here changes at runtime.

use std::time::Duration;

use crate::cards::Entry;
use crate::motion::MotionSpec;

/// One card in the "Why Archivedesign.ai" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Card heading, also its list key
    pub title: &'static str,
    /// One-sentence description
    pub body: &'static str,
}

impl Feature {
    /// Badge letter: first character of the title.
    pub fn initial(&self) -> Option<char> {
        self.title.chars().next()
    }
}

/// One step in "How it works".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Sequence label, also the stagger multiplier
    pub n: u8,
    /// Short verb heading
    pub title: &'static str,
    /// One-sentence description
    pub body: &'static str,
}

/// Example filter shown on the hero preview overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterChip(
    /// Chip label
    pub &'static str,
);

/// Feature cards, in display order.
pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Plan marketplace",
        body: "Architect-designed plans licensed for single projects and tailored to your site.",
    },
    Feature {
        title: "Royalties for architects",
        body: "Creators earn ongoing revenue while homeowners get premium design at lower cost.",
    },
    Feature {
        title: "Builder-ready",
        body: "Documentation bundles aligned to Australian standards and local conditions.",
    },
];

/// How-it-works steps, numbered from 1.
pub const STEPS: [Step; 4] = [
    Step {
        n: 1,
        title: "Browse",
        body: "Explore verified, high-quality residential plans.",
    },
    Step {
        n: 2,
        title: "Match",
        body: "Filter by block size, style, and budget. Add options.",
    },
    Step {
        n: 3,
        title: "Customize",
        body: "Engage the original architect for light edits or add-ons.",
    },
    Step {
        n: 4,
        title: "Build",
        body: "Hand over to your builder with compliant docs ready.",
    },
];

/// Chips on the hero's filter overlay.
pub const FILTER_CHIPS: [FilterChip; 4] = [
    FilterChip("Block 10–13m"),
    FilterChip("Modern"),
    FilterChip("3BR"),
    FilterChip("Budget $400–600k"),
];

/// Stagger between consecutive step reveals.
pub const STEP_STAGGER: Duration = Duration::from_millis(50);

impl Entry for Feature {
    type Key = &'static str;

    fn key(&self) -> Self::Key {
        self.title
    }

    fn motion(&self) -> Option<MotionSpec> {
        Some(MotionSpec::fade_up(8.0).in_view_once())
    }
}

impl Entry for Step {
    type Key = u8;

    fn key(&self) -> Self::Key {
        self.n
    }

    fn motion(&self) -> Option<MotionSpec> {
        Some(
            MotionSpec::fade_up(10.0)
                .delay(STEP_STAGGER * u32::from(self.n))
                .in_view_once(),
        )
    }
}

impl Entry for FilterChip {
    type Key = &'static str;

    fn key(&self) -> Self::Key {
        self.0
    }
}

/// In-page navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Top of the page (logo link)
    Top,
    /// "How it works" section
    How,
    /// Feature grid
    Features,
    /// Waitlist form
    Signup,
}

impl Anchor {
    /// Element id, `None` for the implicit top of the page.
    pub const fn id(self) -> Option<&'static str> {
        match self {
            Anchor::Top => None,
            Anchor::How => Some("how"),
            Anchor::Features => Some("features"),
            Anchor::Signup => Some("signup"),
        }
    }

    /// Fragment link to the anchor.
    pub const fn href(self) -> &'static str {
        match self {
            Anchor::Top => "#",
            Anchor::How => "#how",
            Anchor::Features => "#features",
            Anchor::Signup => "#signup",
        }
    }
}
