//! Code Mentor - explains code snippets the way an interviewer would
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use code_mentor::Options;

/// Code Mentor - an AI pair-programming interviewer for your terminal
#[derive(Parser, Debug)]
#[command(name = "code-mentor", version)]
#[command(about = "Explain a code snippet and get asked \"Why?\"", long_about = None)]
struct Args {
    /// File to preload into the editor (`-` reads stdin)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Explain PATH (or stdin) once and print NDJSON events instead of the TUI
    #[arg(long)]
    headless: bool,

    /// Model to use instead of the configured one
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.init_config {
        return match code_mentor::init_config() {
            Ok(path) => {
                eprintln!("Config file: {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ {e}");
                ExitCode::FAILURE
            }
        };
    }

    let options = Options {
        path: args.path,
        headless: args.headless,
        model: args.model,
    };

    match code_mentor::run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_fatal() {
                eprintln!("❌ {e}");
            } else {
                eprintln!("Error: {e}");
            }
            if let Ok(log_file) = mentor_core::logging::get_current_log_file() {
                eprintln!("   Details in {}", log_file.display());
            }
            ExitCode::FAILURE
        }
    }
}
