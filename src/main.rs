use clap::Parser;
use crud_scaffold::cli::commands::{cmd_dashboard, cmd_resolve};
use crud_scaffold::cli::config::{Cli, Commands, load_config, resolve_format};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref());

    let output = match cli.command {
        Commands::Resolve {
            context,
            action,
            phase,
            format,
        } => {
            let format = resolve_format(format.as_deref(), &config);
            cmd_resolve(&context, action.as_deref(), &phase, &format, &config)?
        }
        Commands::Dashboard { file, format } => {
            let format = resolve_format(format.as_deref(), &config);
            cmd_dashboard(&file, &format, &config)?
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
