use clap::Parser;
use dotgen::cli::{Cli, Commands};
use dotgen::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_quiet(cli.quiet);

    match cli.command.unwrap_or_default() {
        Commands::Generate(args) => dotgen::cli::generate::run(args, &printer)?,
        Commands::Validate(args) => dotgen::cli::validate::run(args, &printer)?,
        Commands::Palette(args) => dotgen::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => dotgen::cli::completions::run(args)?,
    }

    Ok(())
}
