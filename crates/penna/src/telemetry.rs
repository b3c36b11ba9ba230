//! Tracing subscriber setup for the agent binary.

use tracing_subscriber::EnvFilter;

/// Filter directives used when `RUST_LOG` is unset.
fn default_directives(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info,penna=debug" }
}

/// Initialize console tracing.
///
/// `RUST_LOG` takes precedence when set; otherwise `verbose` selects the
/// fallback directives.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_directives_are_valid_filters() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(EnvFilter::try_new(directives).is_ok());
        }
    }

    #[test]
    fn verbose_flag_selects_debug_fallback() {
        assert_eq!(default_directives(true), "debug");
        assert_eq!(default_directives(false), "info,penna=debug");
    }
}
