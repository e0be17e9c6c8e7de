//! Browser checks: `wasm-pack test --headless --firefox site`

#![cfg(target_arch = "wasm32")]

use archivedesign_site::form::{SignupState, intercept_submit};
use wasm_bindgen_test::*;
use web_sys::{SubmitEvent, SubmitEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn cancelable_submit() -> SubmitEvent {
    let init = SubmitEventInit::new();
    init.set_cancelable(true);
    SubmitEvent::new_with_event_init_dict("submit", &init).expect("SubmitEvent")
}

#[wasm_bindgen_test]
fn submit_is_cancelled_and_form_stays_idle() {
    let event = cancelable_submit();
    assert!(!event.default_prevented());

    assert_eq!(intercept_submit(&event), SignupState::Idle);
    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn repeated_submits_stay_idle() {
    for _ in 0..3 {
        let event = cancelable_submit();
        assert_eq!(intercept_submit(&event), SignupState::Idle);
        assert!(event.default_prevented());
    }
}
