use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bl")]
#[command(about = "BL language parser and pretty-printer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a BL program and print the AST
    Parse(ParseArgs),
    /// Parse a BL program and print it in canonical form
    Format(FormatArgs),
}

#[derive(clap::Args)]
pub struct ParseArgs {
    /// Input file path
    pub file: String,
}

#[derive(clap::Args)]
pub struct FormatArgs {
    /// Input file path
    pub file: String,
}
