use atomic_toolbox::util::ids::short_uuid;
use atomic_toolbox_cli::cli::{self, Cli};
use atomic_toolbox_cli::logging;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    // Output helpers read these, so flags and env vars behave the same.
    if cli.json {
        std::env::set_var("ATOMIC_TOOLBOX_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("ATOMIC_TOOLBOX_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("ATOMIC_TOOLBOX_VERBOSE", "1");
    }

    logging::init(
        cli::output::is_verbose(),
        cli::output::is_quiet(),
        cli::output::is_json(),
    );

    let run_id = format!("{:08x}", short_uuid());
    let span = tracing::info_span!("run", id = %run_id);
    let _guard = span.enter();

    if let Err(e) = cli::run(cli) {
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": "failed",
                "message": format!("{e:#}"),
            }));
        } else {
            eprintln!("  error: {e:#}");
        }
        std::process::exit(1);
    }
}
