//! Entrance animation intents.
//!
//! A [`MotionSpec`] only *declares* how a node enters: its initial pose,
//! its target pose, the timing and what triggers it. Turning that into
//! pixels is the job of an [`EntranceAnimator`]; the page ships with
//! [`CssTransitions`], which hands the tween to the browser's CSS
//! transition engine.
//!
//! ```rust
//! use std::time::Duration;
//! use archivedesign_site::motion::{CssTransitions, EntranceAnimator, MotionSpec, Phase};
//!
//! let spec = MotionSpec::fade_up(12.0)
//!     .duration(Duration::from_millis(600))
//!     .delay(Duration::from_millis(100));
//!
//! let style = CssTransitions.frame(&spec, Phase::Initial);
//! assert!(style.starts_with("opacity:0;"));
//! ```

use std::time::Duration;

/// A visual state: opacity and vertical offset in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// 0.0 (transparent) to 1.0.
    pub opacity: f32,
    /// Downward offset in px.
    pub y: f32,
}

impl Pose {
    /// Fully visible, no offset.
    pub const SETTLED: Pose = Pose { opacity: 1.0, y: 0.0 };

    /// Transparent and pushed down by `y` px.
    pub const fn hidden(y: f32) -> Self {
        Pose { opacity: 0.0, y }
    }
}

/// What starts the transition from the initial to the target pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Animate as soon as the node is mounted.
    OnMount,
    /// Animate the first time the node intersects the viewport, never again.
    InViewOnce,
}

/// Where a node is in its entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Trigger has not fired; the node shows its initial pose.
    #[default]
    Initial,
    /// Trigger fired; the node is at (or moving to) its target pose.
    Settled,
}

/// Declarative entrance description for one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSpec {
    /// Pose before the trigger fires.
    pub initial: Pose,
    /// Pose after the transition.
    pub target: Pose,
    /// Transition length.
    pub duration: Duration,
    /// Wait between the trigger and the start of the transition.
    pub delay: Duration,
    /// What starts the transition.
    pub trigger: Trigger,
}

impl MotionSpec {
    /// Fade in while sliding up `y` px; mount-triggered, 400ms, no delay.
    pub const fn fade_up(y: f32) -> Self {
        MotionSpec {
            initial: Pose::hidden(y),
            target: Pose::SETTLED,
            duration: Duration::from_millis(400),
            delay: Duration::ZERO,
            trigger: Trigger::OnMount,
        }
    }

    /// Replace the initial pose.
    pub const fn initial(mut self, pose: Pose) -> Self {
        self.initial = pose;
        self
    }

    /// Replace the target pose.
    pub const fn target(mut self, pose: Pose) -> Self {
        self.target = pose;
        self
    }

    /// Set the transition length.
    pub const fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the wait before the transition starts.
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Switch to the fire-once viewport trigger.
    pub const fn in_view_once(mut self) -> Self {
        self.trigger = Trigger::InViewOnce;
        self
    }

    /// The pose a node should show in `phase`.
    pub fn pose(&self, phase: Phase) -> Pose {
        match phase {
            Phase::Initial => self.initial,
            Phase::Settled => self.target,
        }
    }
}

/// Capability that realizes a [`MotionSpec`] on a node.
///
/// Implementations turn a spec and the node's current phase into the
/// node's inline style. The trigger itself is handled by the component
/// layer (see [`crate::components::Motion`]).
pub trait EntranceAnimator {
    /// Style for the node before its trigger fires.
    fn initial(&self, spec: &MotionSpec) -> String;

    /// Style for the node once its trigger has fired.
    fn target(&self, spec: &MotionSpec) -> String;

    /// Style for `phase`.
    fn frame(&self, spec: &MotionSpec, phase: Phase) -> String {
        match phase {
            Phase::Initial => self.initial(spec),
            Phase::Settled => self.target(spec),
        }
    }
}

/// Animator backed by CSS `opacity`/`transform` transitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct CssTransitions;

impl CssTransitions {
    fn render(pose: Pose, spec: &MotionSpec) -> String {
        let duration = spec.duration.as_millis();
        let delay = spec.delay.as_millis();
        format!(
            "opacity:{};transform:translateY({}px);transition:opacity {duration}ms ease-out {delay}ms,transform {duration}ms ease-out {delay}ms;",
            pose.opacity, pose.y
        )
    }
}

impl EntranceAnimator for CssTransitions {
    fn initial(&self, spec: &MotionSpec) -> String {
        Self::render(spec.initial, spec)
    }

    fn target(&self, spec: &MotionSpec) -> String {
        Self::render(spec.target, spec)
    }
}

/// Fire-once latch for viewport triggers.
///
/// Feed it every intersection report for a node; it answers `true` exactly
/// once, on the first report that says the node is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportLatch {
    fired: bool,
}

impl ViewportLatch {
    /// An unfired latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report. Returns `true` if this report fires the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the node has been seen in the viewport.
    pub fn fired(&self) -> bool {
        self.fired
    }
}
