//! Process-Wide Shell
//!
//! Explicitly installed singleton exposing the fullscreen control surface
//! to application code. Lifetime is the process; there is no teardown.

use std::sync::{Mutex, OnceLock};

use crate::host::DocumentHost;
use crate::shell::FullscreenShell;

/// The installed, type-erased shell
pub type InstalledShell = FullscreenShell<Box<dyn DocumentHost + Send>>;

static SHELL: OnceLock<Mutex<InstalledShell>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("fullscreen shell already installed")]
    AlreadyInstalled,
}

/// Install the process-wide shell around `host`. Fails on the second call;
/// there is exactly one host context per process.
pub fn install(host: impl DocumentHost + Send + 'static) -> Result<(), InstallError> {
    let shell = FullscreenShell::new(Box::new(host) as Box<dyn DocumentHost + Send>);
    SHELL
        .set(Mutex::new(shell))
        .map_err(|_| InstallError::AlreadyInstalled)
}

pub fn is_installed() -> bool {
    SHELL.get().is_some()
}

/// Run `f` against the installed shell, or return `None` if nothing is
/// installed yet
pub fn with<R>(f: impl FnOnce(&mut InstalledShell) -> R) -> Option<R> {
    let shell = SHELL.get()?;
    Some(f(&mut shell.lock().unwrap()))
}

// === Exposed control surface ===
//
// No-ops (and `false`) until a shell is installed.

pub fn enter_fullscreen() {
    with(|shell| shell.enter_fullscreen());
}

pub fn exit_fullscreen() {
    with(|shell| shell.exit_fullscreen());
}

pub fn is_fullscreen() -> bool {
    with(|shell| shell.is_fullscreen()).unwrap_or(false)
}
