//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "atomic_toolbox=debug,atomic_toolbox_cli=debug"
    } else if quiet {
        "atomic_toolbox=error,atomic_toolbox_cli=error"
    } else {
        "atomic_toolbox=info,atomic_toolbox_cli=info"
    }
}

/// Install the global subscriber, logging to stderr. `RUST_LOG` wins when set.
pub fn init(verbose: bool, quiet: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert!(default_directive(true, false).contains("debug"));
        assert!(default_directive(false, true).contains("error"));
        assert!(default_directive(false, false).contains("info"));
    }
}
