use clap::Parser;
use slugmv_core::SlugmvError;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

mod cli;
mod rename;

use cli::{Cli, OutputFormat};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    let root = resolve_root(&cli.path);
    let options = cli.rename_options();

    let result = rename::handle_rename(&root, &options, cli.output, use_color);

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// 2 for bad input caught before any file is touched, 3 for failures mid-run
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SlugmvError>() {
        Some(e) if e.is_invalid_input() => 2,
        _ => 3,
    }
}

/// Expand a leading `~` and make the path absolute when it exists.
fn resolve_root(path: &Path) -> PathBuf {
    let expanded = expand_home(path, dirs::home_dir().as_deref());
    expanded.canonicalize().unwrap_or(expanded)
}

fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
