//! Public site URLs.

/// Site URL overrides.
///
/// Both fields stay `None` unless the deployment supplies them; the host
/// application then falls back to the URLs stored in its own database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public address of the site (`WP_HOME`).
    pub home_url: Option<String>,
    /// Address where core files are served (`WP_SITEURL`).
    pub site_url: Option<String>,
}
