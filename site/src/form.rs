//! Waitlist signup form behavior.
//!
//! There is no backend: a submission is swallowed and the form stays idle.

/// Anything whose default browser action can be cancelled.
pub trait Cancelable {
    /// Cancel the default action (for a form, the navigation).
    fn prevent_default(&self);
}

impl Cancelable for web_sys::SubmitEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// The form has a single state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupState {
    /// Waiting for input; also the state after every submit.
    #[default]
    Idle,
}

/// Handle a submit: cancel the navigation and do nothing else.
pub fn intercept_submit<E: Cancelable + ?Sized>(event: &E) -> SignupState {
    event.prevent_default();
    tracing::debug!("signup submission suppressed");
    SignupState::Idle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeSubmit {
        email: &'static str,
        prevented: Cell<u32>,
    }

    impl Cancelable for FakeSubmit {
        fn prevent_default(&self) {
            self.prevented.set(self.prevented.get() + 1);
        }
    }

    #[test]
    fn submit_is_always_suppressed() {
        for email in ["you@home.com.au", "", "not-an-email"] {
            let event = FakeSubmit {
                email,
                ..Default::default()
            };
            assert_eq!(intercept_submit(&event), SignupState::Idle, "{}", event.email);
            assert_eq!(event.prevented.get(), 1);
        }
    }

    #[test]
    fn repeated_submits_stay_idle() {
        let event = FakeSubmit::default();
        let mut state = SignupState::default();
        for _ in 0..3 {
            state = intercept_submit(&event);
        }
        assert_eq!(state, SignupState::Idle);
        assert_eq!(event.prevented.get(), 3);
    }
}
