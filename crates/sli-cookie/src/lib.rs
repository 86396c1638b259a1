pub mod data;

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use sli_core::SliResult;

pub use data::{data_cookie, DATA_COOKIE_NAME};

/// A cookie directive handed to the host transport. Always emitted without
/// an expiry, so the cookie lives for the browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: String,
}

/// Host-owned set-cookie primitive. Delivery is not acknowledged beyond
/// the returned result; errors propagate to the caller unmodified.
pub trait CookieSink {
    fn set(&self, cookie: &SetCookie) -> SliResult<()>;
}

/// Discards every directive. For hosts that handle cookies elsewhere.
pub struct NoopSink;

impl CookieSink for NoopSink {
    fn set(&self, _cookie: &SetCookie) -> SliResult<()> {
        Ok(())
    }
}

/// Records directives in memory. Intended for tests and host wiring checks.
#[derive(Default)]
pub struct MemorySink {
    cookies: Mutex<Vec<SetCookie>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<SetCookie> {
        self.cookies.lock().expect("cookie sink lock").clone()
    }
}

impl CookieSink for MemorySink {
    fn set(&self, cookie: &SetCookie) -> SliResult<()> {
        self.cookies
            .lock()
            .expect("cookie sink lock")
            .push(cookie.clone());
        Ok(())
    }
}
