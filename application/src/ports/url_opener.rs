//! External URL opening port

/// Opens a URL outside the process (e.g. in the system browser)
///
/// Best effort: failures are the implementation's to log. Callers only pass
/// non-empty URLs.
pub trait UrlOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

/// Opener that does nothing, for headless use
pub struct NoUrlOpener;

impl UrlOpener for NoUrlOpener {
    fn open_url(&self, _url: &str) {}
}
