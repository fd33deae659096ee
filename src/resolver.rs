use crate::gmaven::GoogleMavenClient;
use crate::mavencentral::MavenCentralClient;
use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("'{coordinate}' not found on Maven Central or the Google Maven index")]
    NotFound { coordinate: String },
    #[error("timed out after {seconds}s waiting for the Google Maven index for '{coordinate}'")]
    Timeout { coordinate: String, seconds: u64 },
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected group index document: {0}")]
    BadIndex(String),
}

/// Lookup seam for the rewrite engine. The production implementation chains
/// registry strategies; tests substitute fixed-version stubs.
pub trait Resolve {
    fn resolve(
        &self,
        group: &str,
        artifact: &str,
    ) -> impl Future<Output = Result<String, ResolveError>>;
}

/// Resolves the latest version of a coordinate: Maven Central search first,
/// then (when enabled) the Google Maven index. The fallback is only consulted
/// when the search returns zero records, never speculatively.
pub struct VersionResolver {
    primary: MavenCentralClient,
    fallback: Option<GoogleMavenClient>,
}

impl VersionResolver {
    pub fn new(primary: MavenCentralClient, fallback: Option<GoogleMavenClient>) -> Self {
        Self { primary, fallback }
    }
}

impl Resolve for VersionResolver {
    async fn resolve(&self, group: &str, artifact: &str) -> Result<String, ResolveError> {
        if let Some(version) = self.primary.latest_version(group, artifact).await? {
            return Ok(version);
        }

        if let Some(fallback) = &self.fallback {
            if let Some(version) = fallback.latest_version(group, artifact).await? {
                return Ok(version);
            }
        }

        Err(ResolveError::NotFound {
            coordinate: format!("{group}:{artifact}"),
        })
    }
}
