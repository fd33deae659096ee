use crate::resolver::ResolveError;
use colored::Colorize;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::time::Duration;

const GOOGLE_MAVEN_URL: &str = "https://dl.google.com/android/maven2";

/// Fallback lookup against the Google Maven mirror. Fetches the group index
/// document that backs maven.google.com and reads the artifact's version
/// list out of it. The whole fetch is bounded by `wait`; this lookup covers
/// artifacts (androidx, compose) that Maven Central's search does not carry,
/// and is only used once the primary search comes back empty.
pub struct GoogleMavenClient {
    client: reqwest::Client,
    base_url: String,
    wait: Duration,
}

impl GoogleMavenClient {
    pub fn new(wait: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("gradle-check-updates/0.2.0")
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: GOOGLE_MAVEN_URL.to_string(),
            wait,
        }
    }

    /// Point the client at a different mirror (tests)
    pub fn with_mirror_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Latest version in the mirror's group index, or `None` when the group
    /// or artifact is not listed there. A fetch that exceeds the configured
    /// wait fails with `ResolveError::Timeout`.
    pub async fn latest_version(
        &self,
        group: &str,
        artifact: &str,
    ) -> Result<Option<String>, ResolveError> {
        let url = format!(
            "{}/{}/group-index.xml",
            self.base_url,
            group.replace('.', "/")
        );
        eprintln!("{}", format!("falling back to {url}").dimmed());

        let fetch = async {
            let response = self.client.get(&url).send().await?;
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            let body = response.error_for_status()?.text().await?;
            Ok::<_, ResolveError>(Some(body))
        };

        let body = match tokio::time::timeout(self.wait, fetch).await {
            Ok(result) => match result? {
                Some(body) => body,
                None => return Ok(None),
            },
            Err(_) => {
                return Err(ResolveError::Timeout {
                    coordinate: format!("{group}:{artifact}"),
                    seconds: self.wait.as_secs(),
                });
            }
        };

        latest_in_index(&body, artifact)
    }
}

/// Extract the last (newest) entry of the artifact's `versions` attribute
/// from a group index document. The document looks like:
///
/// ```xml
/// <androidx.activity>
///   <activity-compose versions="1.3.0,1.3.1"/>
/// </androidx.activity>
/// ```
fn latest_in_index(xml: &str, artifact: &str) -> Result<Option<String>, ResolveError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                if e.local_name().as_ref() == artifact.as_bytes() {
                    for attr in e.attributes() {
                        let attr = attr.map_err(|err| ResolveError::BadIndex(err.to_string()))?;
                        if attr.key.as_ref() == b"versions" {
                            let versions = attr
                                .unescape_value()
                                .map_err(|err| ResolveError::BadIndex(err.to_string()))?;
                            return Ok(versions
                                .split(',')
                                .next_back()
                                .map(|v| v.trim().to_string()));
                        }
                    }
                }
            }
            Ok(Event::Eof) => return Ok(None),
            Err(err) => return Err(ResolveError::BadIndex(err.to_string())),
            _ => {}
        }
        buf.clear();
    }
}
