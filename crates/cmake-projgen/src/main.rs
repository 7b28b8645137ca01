//! cmake-projgen CLI - interactive CMake C/C++ project generator

use anyhow::{Context, Result};
use clap::Parser;
use projgen_core::config::resolver::RawAnswers;
use projgen_core::error::FatalError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "cmake-projgen")]
#[command(about = "Interactive generator for CMake-based C/C++ projects")]
#[command(version)]
pub struct Args {
    /// Directory to generate the project under (defaults to the current
    /// directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// YAML answers file; skips the question flow
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Skip the generation and confirmation prompts
    #[arg(short = 'y', long)]
    pub yes: bool,
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = run(args);
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Declines and write failures carry their own exit codes.
            if let Some(fatal) = err.downcast_ref::<FatalError>() {
                eprintln!("{fatal}");
                ExitCode::from(fatal.exit_code())
            } else {
                eprintln!("Error: {err:#}");
                ExitCode::FAILURE
            }
        }
    }
}

fn run(args: Args) -> Result<()> {
    let base_dir = match args.directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine the current directory")?,
    };

    let answers: Option<RawAnswers> = match args.answers {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read answers file {}", path.display()))?;
            Some(
                serde_yaml::from_str(&text)
                    .with_context(|| format!("malformed answers file {}", path.display()))?,
            )
        }
        None => None,
    };

    projgen_core::tui::run(&base_dir, answers, args.yes)
}
