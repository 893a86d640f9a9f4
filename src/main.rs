use clap::Parser;
use miette::Result;
use strokepad::cli::{Cli, Commands};
use strokepad::library::Settings;
use strokepad::output::Printer;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let printer = Printer::new();

    let settings = || Settings::discover(&cli.dir);

    match cli.command {
        Commands::Draw(args) => strokepad::cli::draw::run(args, &settings()?, &printer)?,
        Commands::Render(args) => strokepad::cli::render::run(args, &settings()?, &printer)?,
        Commands::Info(args) => strokepad::cli::info::run(args, &settings()?)?,
        Commands::List(args) => strokepad::cli::list::run(args, &settings()?, &printer)?,
        Commands::Completions(args) => strokepad::cli::completions::run(args)?,
    }

    Ok(())
}
