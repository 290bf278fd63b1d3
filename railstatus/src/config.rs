//! Configuration management via environment variables
//!
//! Every setting has a default; missing, empty or unparsable values fall back
//! to it instead of failing startup.

use std::path::PathBuf;

/// Default listen port
pub const DEFAULT_PORT: u16 = 4000;
/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default static asset directory
pub const DEFAULT_PUBLIC_DIR: &str = "public";
/// Default application name shown on the page
pub const DEFAULT_APP_NAME: &str = "StarRail-Auto";

/// Get an environment variable, treating empty values as unset
///
/// # Example
/// ```
/// use railstatus::config::get_env;
///
/// let port = get_env("PORT");
/// ```
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Get an environment variable or `default`
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable parsed to `T`, or `default` when unset or invalid
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match get_env(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Environment variable '{}' has an invalid value '{}', using default",
                name,
                raw
            );
            default
        }),
        None => default,
    }
}

/// Listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Directory served for static assets (icons, manifest)
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Load from `PORT`, `RAILSTATUS_HOST` and `RAILSTATUS_PUBLIC_DIR`.
    pub fn from_env() -> Self {
        Self {
            host: get_env_or("RAILSTATUS_HOST", DEFAULT_HOST),
            port: get_env_parse("PORT", DEFAULT_PORT),
            public_dir: PathBuf::from(get_env_or("RAILSTATUS_PUBLIC_DIR", DEFAULT_PUBLIC_DIR)),
        }
    }

    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Visual style of an outbound link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Blue button
    Primary,
    /// Red button
    Danger,
}

impl LinkStyle {
    /// CSS class for the button
    pub fn css_class(self) -> &'static str {
        match self {
            LinkStyle::Primary => "button button-green",
            LinkStyle::Danger => "button button-red",
        }
    }
}

/// Outbound link rendered below the status lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Button text
    pub label: String,
    /// Target URL
    pub href: String,
    /// Button style
    pub style: LinkStyle,
}

impl PageLink {
    fn new(label: &str, href: &str, style: LinkStyle) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            style,
        }
    }
}

/// Status page content settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Name used in the title and heading
    pub app_name: String,
    /// Buttons in display order
    pub links: Vec<PageLink>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            links: vec![
                PageLink::new(
                    "Invite SwitchMOD",
                    "https://discord.com/oauth2/authorize?&client_id=1152079618719883304&scope=applications.commands+bot&permissions=8",
                    LinkStyle::Primary,
                ),
                PageLink::new(
                    "Support Server",
                    "https://discord.gg/6H3nzKfdyT",
                    LinkStyle::Primary,
                ),
                PageLink::new("Go Back to Homepage", "https://kickcar.me", LinkStyle::Danger),
            ],
        }
    }
}

impl PageConfig {
    /// Defaults, with the name overridable by `RAILSTATUS_APP_NAME`.
    pub fn from_env() -> Self {
        Self {
            app_name: get_env_or("RAILSTATUS_APP_NAME", DEFAULT_APP_NAME),
            ..Self::default()
        }
    }
}
