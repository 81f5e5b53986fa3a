use chesspath::colors::ColorScheme;
use chesspath::display::{DisplayOptions, display_search_info, display_search_results, display_targets};
use chesspath::json_output::{create_json_output, print_json_output};
use chesspath::{Args, ChessPathApp};
use chesspath_core::CancelFlag;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    let app = match ChessPathApp::new(&args) {
        Ok(app) => app,
        Err(error_message) => exit_with_error(&colors, &error_message.to_string()),
    };

    if args.list_targets {
        display_targets(&app.targets, &colors);
        return;
    }

    let username = args.username.clone().unwrap_or_default();
    let identity = match app.resolve_target(args.target.as_deref()) {
        Ok(identity) => identity,
        Err(error_message) => exit_with_error(&colors, &error_message),
    };

    let interactive = !args.json && !args.quiet;
    if interactive && args.verbose {
        display_search_info(&username, identity, app.finder.config(), &colors);
    }

    let cancel = CancelFlag::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let spinner = interactive.then(create_spinner);
    let outcome = app
        .finder
        .find_path_cancellable(&username, identity, cancel)
        .await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if args.json {
        let json_output = create_json_output(&username, identity, app.finder.config(), &outcome);
        print_json_output(&json_output);
    } else {
        let options = DisplayOptions {
            hide_urls: args.hide_urls,
            verbose: args.verbose,
            quiet: args.quiet,
            profile_base_url: args.lichess_url.clone(),
        };
        display_search_results(&outcome, identity, &options, &colors);
    }

    std::process::exit(if outcome.is_found() { 0 } else { 1 });
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "chesspath_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Walking through opponents...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn exit_with_error(colors: &ColorScheme, message: &str) -> ! {
    eprintln!("{} {}", colors.error("❌ Error:"), message);
    std::process::exit(1);
}
