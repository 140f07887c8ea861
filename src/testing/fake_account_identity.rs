use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::AccountIdentityPort;

pub struct FakeAccountIdentity {
    pub account: Result<String, String>,
    pub lookups: Mutex<usize>,
}

impl FakeAccountIdentity {
    pub fn new(account: &str) -> Self {
        Self { account: Ok(account.to_string()), lookups: Mutex::new(0) }
    }

    pub fn failing(message: &str) -> Self {
        Self { account: Err(message.to_string()), lookups: Mutex::new(0) }
    }

    pub fn lookups(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

impl AccountIdentityPort for FakeAccountIdentity {
    fn current_account_id(&self) -> Result<String, AppError> {
        *self.lookups.lock().unwrap() += 1;
        self.account.clone().map_err(AppError::AccountDiscovery)
    }
}
