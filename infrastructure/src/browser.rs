//! System browser adapter

use pollcast_application::UrlOpener;
use tracing::{debug, warn};

/// Opens URLs in the user's default browser
pub struct BrowserUrlOpener;

impl UrlOpener for BrowserUrlOpener {
    fn open_url(&self, url: &str) {
        debug!("Opening {} in the system browser", url);
        if let Err(e) = webbrowser::open(url) {
            warn!("Failed to open browser: {}", e);
        }
    }
}
