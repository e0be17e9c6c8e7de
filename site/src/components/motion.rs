//! Animated wrapper node.
//!
//! Renders in the `MotionSpec` initial pose and flips to the target pose when the
//! trigger fires. Outside the browser nothing fires, so a static render
//! shows every animated node in its initial pose.

use crate::motion::{CssTransitions, EntranceAnimator, MotionSpec, Phase, Trigger};
use leptos::html;
use leptos::prelude::*;

/// A `<div>` that enters according to `spec`. `None` renders a plain div.
#[component]
pub fn Motion(
    #[prop(into)] spec: Option<MotionSpec>,
    #[prop(optional, into)] class: String,
    /// Shows up in reveal logs
    #[prop(optional, into)]
    label: String,
    children: Children,
) -> impl IntoView {
    let (phase, set_phase) = signal(Phase::Initial);
    let node_ref = NodeRef::<html::Div>::new();

    if let Some(spec) = spec {
        arm(spec, label, node_ref, set_phase);
    }

    let style = move || {
        spec.map(|spec| CssTransitions.frame(&spec, phase.get()))
            .unwrap_or_default()
    };
    let trigger = spec.map(|spec| match spec.trigger {
        Trigger::OnMount => "mount",
        Trigger::InViewOnce => "in-view-once",
    });

    view! {
        <div class=class node_ref=node_ref style=style data-motion=trigger>
            {children()}
        </div>
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn arm(
    _spec: MotionSpec,
    _label: String,
    _node_ref: NodeRef<html::Div>,
    _set_phase: WriteSignal<Phase>,
) {
}

#[cfg(target_arch = "wasm32")]
fn arm(
    spec: MotionSpec,
    label: String,
    node_ref: NodeRef<html::Div>,
    set_phase: WriteSignal<Phase>,
) {
    let label = std::rc::Rc::<str>::from(label);
    match spec.trigger {
        Trigger::OnMount => {
            Effect::new(move || {
                let label = label.clone();
                // two frames so the initial pose gets painted first
                request_animation_frame(move || {
                    request_animation_frame(move || {
                        tracing::debug!(node = %label, "entrance on mount");
                        set_phase.set(Phase::Settled);
                    });
                });
            });
        }
        Trigger::InViewOnce => {
            Effect::new(move || {
                if let Some(el) = node_ref.get() {
                    let label = label.clone();
                    viewport::observe_once(&el, move || {
                        tracing::debug!(node = %label, "entrance in view");
                        set_phase.set(Phase::Settled);
                    });
                }
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod viewport {
    use crate::motion::ViewportLatch;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    /// Call `on_enter` the first time `target` intersects the viewport.
    ///
    /// Falls back to revealing right away when the observer is unavailable.
    pub(super) fn observe_once(target: &web_sys::Element, on_enter: impl Fn() + 'static) {
        let on_enter = Rc::new(on_enter);
        let reveal = Rc::clone(&on_enter);

        let mut latch = ViewportLatch::new();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if latch.observe(intersecting) {
                    observer.disconnect();
                    reveal();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(target);
                // lives as long as the page
                callback.forget();
            }
            Err(err) => {
                tracing::warn!(?err, "IntersectionObserver unavailable, revealing immediately");
                on_enter();
            }
        }
    }
}
