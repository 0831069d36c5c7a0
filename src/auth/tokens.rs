//! In-memory access-token storage
//!
//! The access token lives only here, for the life of the process. The
//! long-lived credential is the httpOnly refresh cookie, which never reaches
//! application code. The cell is a shared handle owned by whoever builds the
//! client, never a process global.

use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct TokenCell {
    token: Arc<ParkingMutex<Option<String>>>,
}

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.token.lock().clone()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.lock() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.lock() = None;
    }

    pub fn is_set(&self) -> bool {
        self.token.lock().is_some()
    }
}
