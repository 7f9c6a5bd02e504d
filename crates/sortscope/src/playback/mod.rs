//! Step-by-step replay of recorded traces
//!
//! [`PlaybackState`] is the clock-free state machine; [`PlaybackDriver`]
//! (native targets) runs it on a cancellable tokio timer. Browser builds
//! drive the same state machine from the page's own timer.

#[cfg(not(target_arch = "wasm32"))]
mod driver;
mod state;

#[cfg(not(target_arch = "wasm32"))]
pub use driver::{PlaybackDriver, SnapshotStream};
pub use state::{PlaybackState, PlaybackStatus, Snapshot};

use std::time::Duration;
use tracing::warn;

/// Delay between steps when nothing else is configured
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Playback timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Delay between consecutive steps
    pub delay: Duration,
}

impl PlaybackConfig {
    /// Create a configuration with the given delay in milliseconds
    pub fn from_millis(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Read `SORTSCOPE_DELAY_MS`, falling back to the default delay
    pub fn from_env() -> Self {
        match std::env::var("SORTSCOPE_DELAY_MS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(delay_ms) => Self::from_millis(delay_ms),
                Err(_) => {
                    warn!(value = %raw, "Ignoring invalid SORTSCOPE_DELAY_MS");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }
}
