//! Opening link entries in the system browser.

use std::{io, process::Command};

use tracing::{info, warn};

/// Hands a URL to something that can display it.
pub trait LinkOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Spawns the platform's default opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        #[cfg(target_os = "windows")]
        let mut command = {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", url]);
            command
        };

        #[cfg(target_os = "macos")]
        let mut command = {
            let mut command = Command::new("open");
            command.arg(url);
            command
        };

        #[cfg(all(unix, not(target_os = "macos")))]
        let mut command = {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            command
        };

        command.spawn().map(drop)
    }
}

/// Open `url`, logging the outcome. Failures never reach the user.
pub(crate) fn open_link(opener: &dyn LinkOpener, url: &str) {
    match opener.open(url) {
        Ok(()) => info!(%url, "opened link"),
        Err(err) => warn!(%url, error = %err, "failed to open link"),
    }
}
