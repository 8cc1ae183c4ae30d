use clap::{Parser, Subcommand};

use crate::cmd::{
    advise::AdviseCommand, bracket::BracketCommand, catalog::CatalogCommand,
    schema::SchemaCommand, schemes::SchemesCommand,
};
use crate::core::Catalog;

mod cmd;
mod core;
mod money;

#[derive(Parser, Debug)]
#[command(
    name = "taxsave",
    version,
    author,
    about = "Find your income tax bracket and the tax-saving schemes you can use"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (the default when no command is given)
    Advise(AdviseCommand),
    /// Classify an annual income into a tax bracket
    Bracket(BracketCommand),
    /// List the tax-saving schemes available at a given age
    Schemes(SchemesCommand),
    /// Print all tax sections with their eligibility rules
    Catalog(CatalogCommand),
    /// Print the JSON schema of the catalog
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let catalog = Catalog::builtin()?;

    match cli.command.unwrap_or_else(|| Command::Advise(AdviseCommand::default())) {
        Command::Advise(advise) => advise.exec(&catalog),
        Command::Bracket(bracket) => bracket.exec(),
        Command::Schemes(schemes) => schemes.exec(&catalog),
        Command::Catalog(cmd) => cmd.exec(&catalog),
        Command::Schema(schema) => schema.exec(),
    }
}
