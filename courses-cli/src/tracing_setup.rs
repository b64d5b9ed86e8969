//! Console logging for the courses CLI
//!
//! Usage:
//!   courses --debug serve             # Debug logging, request spans, SQL
//!   RUST_LOG=courses_server=debug     # Fine-grained log control
//!
//! `RUST_LOG` replaces the default filter entirely when set.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default filter directives.
///
/// sqlx logs every statement at info, so it is held at warn unless
/// debugging.
pub fn default_directives(debug: bool) -> &'static str {
    if debug {
        "debug,tower_http=debug,sqlx=info"
    } else {
        "info,sqlx=warn"
    }
}

/// Install the global fmt subscriber.
pub fn init(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        for debug in [false, true] {
            assert!(EnvFilter::try_new(default_directives(debug)).is_ok());
        }
    }

    #[test]
    fn sqlx_statements_quiet_by_default() {
        assert!(default_directives(false).contains("sqlx=warn"));
        assert!(default_directives(true).contains("sqlx=info"));
    }
}
