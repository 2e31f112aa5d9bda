//! Tracing subscriber bootstrap for hosts that do not install their own.

use tracing::Level;

/// Install a fmt subscriber capped at `level`.
///
/// Returns `false` when a global subscriber is already installed, in which
/// case the existing one stays in place.
pub fn init_tracing(level: Level) -> bool {
    let installed = tracing_subscriber::fmt().with_max_level(level).try_init().is_ok();
    if installed {
        tracing::debug!(%level, "tracing initialised");
    }
    installed
}
