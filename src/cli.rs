use clap::Parser;
use std::path::PathBuf;

/// Update Gradle buildSrc dependency constants to their latest Maven versions
#[derive(Parser, Debug, Clone)]
#[command(name = "gradle-check-updates")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the dependency file (defaults to Dependencies.kt)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the rewritten file to stdout instead of overwriting it
    #[arg(short, long)]
    pub dry_run: bool,

    /// Skip the Google Maven fallback lookup
    #[arg(short, long)]
    pub no_fallback: bool,

    /// Seconds to wait for the Google Maven index before giving up
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,
}

impl Args {
    /// Get the dependency file path, defaulting to the conventional name
    pub fn dependency_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| PathBuf::from("Dependencies.kt"))
    }
}
