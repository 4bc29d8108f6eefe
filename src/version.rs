// Package identity baked in at build time

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

/// "name/version", used as the `generator` tag on emitted dashboards.
pub fn generator() -> String {
    format!("{NAME}/{VERSION}")
}
