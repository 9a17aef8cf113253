//! Telegram identity used to authenticate management API calls.
//!
//! The hosting environment (the Telegram WebApp) exposes a signed `initData`
//! string. The API expects it verbatim in an `Authorization: tma <initData>`
//! header.

use zeroize::Zeroizing;

/// Environment variable read by [`EnvIdentity`].
pub const INIT_DATA_ENV: &str = "ULTROID_INIT_DATA";

/// Source of the init data for authenticated calls.
pub trait IdentityProvider: Send + Sync {
    /// Current init data, or `None` when running outside Telegram.
    fn init_data(&self) -> Option<Zeroizing<String>>;

    /// Value for the `Authorization` header.
    fn authorization(&self) -> Option<Zeroizing<String>> {
        self.init_data()
            .filter(|data| !data.is_empty())
            .map(|data| Zeroizing::new(format!("tma {}", data.as_str())))
    }
}

/// Fixed init data handed over by the host at startup.
#[derive(Default)]
pub struct StaticIdentity {
    init_data: Option<Zeroizing<String>>,
}

impl StaticIdentity {
    pub fn new(init_data: impl Into<String>) -> Self {
        Self {
            init_data: Some(Zeroizing::new(init_data.into())),
        }
    }

    pub fn anonymous() -> Self {
        Self { init_data: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn init_data(&self) -> Option<Zeroizing<String>> {
        self.init_data.clone()
    }
}

impl std::fmt::Debug for StaticIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticIdentity")
            .field("init_data", &self.init_data.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Reads init data from [`INIT_DATA_ENV`] on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvIdentity;

impl IdentityProvider for EnvIdentity {
    fn init_data(&self) -> Option<Zeroizing<String>> {
        std::env::var(INIT_DATA_ENV).ok().map(Zeroizing::new)
    }
}
