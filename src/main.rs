pub mod ast;
pub mod cli;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod printer;

use clap::Parser as _;

use cli::{Cli, Commands};
use limits::CompilerLimits;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let limits = CompilerLimits::from_project_toml("project.toml")?;
    limits.validate()?;

    match cli.command {
        Commands::Parse(args) => {
            let program = load_program(&args.file, &limits)?;
            print!("{}", program.tree_string());
        }
        Commands::Format(args) => {
            let program = load_program(&args.file, &limits)?;
            print!("{}", printer::print_program(&program));
        }
    }

    Ok(())
}

fn load_program(
    path: &str,
    limits: &CompilerLimits,
) -> Result<ast::Program, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let tokens = lexer::lex(&source, limits)?;
    let program = parser::parse(&tokens, limits.clone())?;
    Ok(program)
}
