use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use ticketpdf::TicketPipelineBuilder;

/// Renders one ticket into a printable PDF and prints the document's path.
#[derive(Parser, Debug)]
#[command(name = "ticketpdf", version, about)]
struct Cli {
    /// The ticket record as a JSON object with id, eventName, email,
    /// purchaseDate and price.
    ticket: String,

    /// Directory for the generated files. Defaults to the directory
    /// containing this executable.
    #[arg(long)]
    scope_dir: Option<PathBuf>,
}

fn default_scope_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let scope_dir = match cli.scope_dir {
        Some(dir) => dir,
        None => match default_scope_dir() {
            Ok(dir) => dir,
            Err(e) => {
                log::error!("Cannot locate executable directory: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let result = TicketPipelineBuilder::new()
        .with_scope_dir(scope_dir)
        .build()
        .and_then(|pipeline| pipeline.generate_from_json(&cli.ticket));

    match result {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Main execution failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
