use anyhow::Result;
use clap::Parser;
use gcu::cli::Args;
use gcu::depfile::DepFile;
use gcu::gmaven::GoogleMavenClient;
use gcu::mavencentral::MavenCentralClient;
use gcu::output::SummaryRenderer;
use gcu::resolver::VersionResolver;
use gcu::rewriter;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load and classify the dependency file
    let path = args.dependency_file();
    if !path.exists() {
        anyhow::bail!("Dependency file does not exist: {}", path.display());
    }
    let file = DepFile::load(&path)?;

    // 2. Wire up the resolver chain
    let fallback = (!args.no_fallback)
        .then(|| GoogleMavenClient::new(Duration::from_secs(args.timeout)));
    let resolver = VersionResolver::new(MavenCentralClient::new(), fallback);

    // 3. One sequential pass over the lines, resolving as we go
    let progress_bar = ProgressBar::new(file.lines.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .expect("hardcoded progress template must parse")
            .progress_chars("#>-"),
    );

    let outcome = rewriter::rewrite(&file.lines, &resolver, |processed| {
        progress_bar.set_position(processed as u64);
    })
    .await;
    progress_bar.finish_and_clear();

    // 4. Commit the full rewritten sequence (or show it for --dry-run)
    if args.dry_run {
        print!("{}", file.render(&outcome.lines));
    } else {
        file.store(&outcome.lines)?;
    }

    // 5. Report
    SummaryRenderer::new(true).render(&outcome);

    Ok(())
}
