//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` if set, otherwise `level` for this crate and `tower_http`.
/// A `level` that is already a directive list is used verbatim.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

pub fn default_directives(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("parks_of_prague={level},tower_http={level}")
    }
}

pub fn init(level: &str) {
    tracing_subscriber::fmt().with_env_filter(env_filter(level)).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_applies_to_crate_and_http_layer() {
        assert_eq!(default_directives("debug"), "parks_of_prague=debug,tower_http=debug");
        assert_eq!(default_directives("sqlx=warn"), "sqlx=warn");
    }
}
