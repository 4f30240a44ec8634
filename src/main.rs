use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use drnu::api::DrNuApi;
use drnu::cli::args::{Cli, Commands, CompletionsArgs, OutputFormat};
use drnu::cli::commands;
use drnu::config::{Config, Paths};
use drnu::error::DrNuError;

fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), DrNuError> {
    // Handle completions command early (no config or client needed)
    if let Commands::Completions(CompletionsArgs { shell }) = &cli.command {
        Cli::print_completions(*shell);
        return Ok(());
    }

    let paths = Paths::new()?;
    let mut config = Config::load_from(&paths)?;
    let format = cli
        .output
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));

    // Handle commands that don't need the API client
    let output = match &cli.command {
        Commands::Completions(_) => unreachable!(), // Handled above
        Commands::Config(args) => commands::config(&mut config, &paths, args, format)?,
        Commands::Cache(args) => commands::cache(&config, &paths, args, format)?,
        Commands::Image(args) => commands::image(&config, args, format)?,

        _ => {
            // --no-cache only applies to this run, never to the saved config
            let mut run_config = config.clone();
            if cli.no_cache {
                run_config.cache.minutes = 0;
            }
            let api = DrNuApi::new(&run_config, &paths)?;

            match &cli.command {
                Commands::Series(args) => commands::series(&api, args, format)?,
                Commands::SeriesInfo(args) => commands::series_info(&api, args, format)?,
                Commands::Labels => commands::labels(&api, format)?,
                Commands::Videos(args) => commands::videos(&api, args, format)?,
                Commands::SeriesVideos(args) => commands::series_videos(&api, args, format)?,
                Commands::Video(args) => commands::video(&api, args, format)?,
                Commands::Resource(args) => commands::resource(&api, args)?,
                Commands::Search(args) => commands::search(&api, args, format)?,
                Commands::Config(_)
                | Commands::Cache(_)
                | Commands::Image(_)
                | Commands::Completions(_) => unreachable!(),
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
