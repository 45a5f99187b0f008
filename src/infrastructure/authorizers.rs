use crate::domain::ports::Authorizer;
use std::sync::{Mutex, PoisonError};
use std::sync::atomic::{AtomicBool, Ordering};

/// Captcha-style authorizer: a single "I am not a robot" confirmation.
///
/// Starts unverified; `confirm_human` flips it and there is no way back.
#[derive(Default)]
pub struct NotARobot {
    verified: AtomicBool,
}

impl NotARobot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirm_human(&self) {
        self.verified.store(true, Ordering::Relaxed);
    }
}

impl Authorizer for NotARobot {
    fn is_verified(&self) -> bool {
        self.verified.load(Ordering::Relaxed)
    }
}

/// SMS-code authorizer: verified once a code has been submitted.
///
/// The last submitted code is kept so the driver can echo it back to the
/// user. No code validation is modeled.
#[derive(Default)]
pub struct SmsAuthorizer {
    verified: AtomicBool,
    last_code: Mutex<Option<String>>,
}

impl SmsAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verify_code(&self, code: &str) {
        let mut last_code = self
            .last_code
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *last_code = Some(code.to_string());
        self.verified.store(true, Ordering::Relaxed);
    }

    pub fn last_code(&self) -> Option<String> {
        self.last_code
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Authorizer for SmsAuthorizer {
    fn is_verified(&self) -> bool {
        self.verified.load(Ordering::Relaxed)
    }
}
