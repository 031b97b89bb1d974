use clap::Parser;
use tracing_subscriber::EnvFilter;

use ck_cli::cli::{self, Cli, Command, ConfigCommand};
use ck_cli::prompt::ReadlinePrompter;
use ck_cli::session::Session;
use ck_domain::config::LoggingConfig;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let (mut config, config_path) = cli::load_config()?;
    if let Some(dir) = args.lessons {
        config.lessons.dir = dir;
    }
    init_cli_tracing(&config.logging);

    match args.command {
        // Default to an interactive session when no subcommand is given.
        None | Some(Command::Start) => {
            let catalog = cli::open_catalog(&config)?;
            let tracker = cli::open_tracker(&config)?;
            let prompter = ReadlinePrompter::new()?;
            Session::new(&catalog, &tracker, &config.session, prompter).run()?;
            Ok(())
        }
        Some(Command::Validate) => {
            let catalog = cli::open_catalog(&config)?;
            if !cli::validate::run(&catalog) {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Check { expression }) => {
            if !cli::check::run(&expression.join(" ")) {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Status) => {
            let catalog = cli::open_catalog(&config)?;
            let tracker = cli::open_tracker(&config)?;
            cli::status::status(&catalog, &tracker);
            Ok(())
        }
        Some(Command::List) => {
            let catalog = cli::open_catalog(&config)?;
            let tracker = cli::open_tracker(&config)?;
            cli::status::list(&catalog, &tracker);
            Ok(())
        }
        Some(Command::Reset { yes }) => {
            let tracker = cli::open_tracker(&config)?;
            let mut prompter = ReadlinePrompter::new()?;
            cli::status::reset(&tracker, yes, &mut prompter)?;
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Validate)) => {
            if !cli::config::validate(&config, &config_path) {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Show)) => cli::config::show(&config),
        Some(Command::Version) => {
            println!("cronkoans {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Logs go to stderr so the session owns stdout. `RUST_LOG` overrides the
/// configured filter.
fn init_cli_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
