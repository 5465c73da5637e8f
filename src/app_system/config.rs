use tracing::warn;

/// Environment variable overriding the actor mailbox size.
pub const BUFFER_SIZE_ENV: &str = "SHOP_BUFFER_SIZE";

const DEFAULT_BUFFER_SIZE: usize = 32;

/// Startup parameters for [`ShopSystem`](crate::app_system::ShopSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the product store's request channel.
    pub buffer_size: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the environment, keeping defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(BUFFER_SIZE_ENV) {
            // tokio's mpsc panics on a zero capacity
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(value = %raw, "Ignoring invalid {}", BUFFER_SIZE_ENV),
            }
        }
        config
    }
}
