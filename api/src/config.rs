use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::entities::Slot;

const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// JSON catalog file; the built-in Guwahati seed is used when unset
    pub catalog_path: Option<String>,
    /// Checkout backend base URL; bookings are simulated when unset
    pub checkout_url: Option<String>,
    pub checkout_delay: Duration,
    pub auth_delay: Duration,
    pub onboarding_delay: Duration,
    pub max_upload_bytes: u64,
    /// Slot used when checkout starts without one
    pub default_slot: Slot,
    /// Per-IP rate limiting on the sign-up and sign-in routes
    pub rate_limit: bool,
}

fn parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn millis(key: &str, default: u64) -> Duration {
    Duration::from_millis(parsed(key, default))
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: parsed("PORT", 8080),
            catalog_path: env::var("CATALOG_PATH").ok().filter(|s| !s.is_empty()),
            checkout_url: env::var("CHECKOUT_URL").ok().filter(|s| !s.is_empty()),
            checkout_delay: millis("CHECKOUT_DELAY_MS", 1000),
            auth_delay: millis("AUTH_DELAY_MS", 1500),
            onboarding_delay: millis("ONBOARDING_DELAY_MS", 1500),
            max_upload_bytes: parsed("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            default_slot: env::var("DEFAULT_SLOT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(Slot::first),
            rate_limit: parsed("RATE_LIMIT", true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            catalog_path: None,
            checkout_url: None,
            checkout_delay: Duration::from_millis(1000),
            auth_delay: Duration::from_millis(1500),
            onboarding_delay: Duration::from_millis(1500),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            default_slot: Slot::first(),
            rate_limit: true,
        }
    }
}
