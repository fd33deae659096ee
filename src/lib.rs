pub mod cli;
pub mod depfile;
pub mod gmaven;
pub mod mavencentral;
pub mod output;
pub mod resolver;
pub mod rewriter;

pub use cli::Args;
pub use depfile::{DepFile, DependencyLine, LineKind};
pub use gmaven::GoogleMavenClient;
pub use mavencentral::MavenCentralClient;
pub use output::SummaryRenderer;
pub use resolver::{Resolve, ResolveError, VersionResolver};
pub use rewriter::{RewriteOutcome, Skipped};
