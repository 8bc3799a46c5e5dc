// Hands composed URLs to the system browser

use crate::error::{FinderError, Result};
use log::info;

/// Opens a URL in a new browsing context without touching the form window.
pub trait UrlOpener {
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Default browser via the platform opener. Fire and forget: the spawned
/// process is not waited on.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open_url(&self, url: &str) -> Result<()> {
        open::that_detached(url).map_err(FinderError::Browser)?;
        info!("Opened {}", url);
        Ok(())
    }
}
