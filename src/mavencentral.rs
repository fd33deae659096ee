use crate::resolver::ResolveError;
use serde::Deserialize;

const SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";

/// Client for the Maven Central search API
pub struct MavenCentralClient {
    client: reqwest::Client,
    base_url: String,
}

/// Search API response, trimmed to the fields we read
#[derive(Debug, Deserialize)]
struct SearchResponse {
    response: SearchBody,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    v: String,
}

impl MavenCentralClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("gradle-check-updates/0.2.0")
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: SEARCH_URL.to_string(),
        }
    }

    /// Point the client at a different search endpoint (mirrors, tests)
    pub fn with_search_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Latest version known to Maven Central for the coordinate, or `None`
    /// when the search returns zero records. Requests the single most
    /// relevant GAV record for an exact group+artifact filter.
    pub async fn latest_version(
        &self,
        group: &str,
        artifact: &str,
    ) -> Result<Option<String>, ResolveError> {
        let query = format!("g:\"{group}\" AND a:\"{artifact}\"");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query.as_str()),
                ("core", "gav"),
                ("rows", "1"),
                ("wt", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        Ok(body.response.docs.into_iter().next().map(|doc| doc.v))
    }
}

impl Default for MavenCentralClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_latest_version_from_first_doc() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "g:\"com.karumi\" AND a:\"shot\""))
            .and(query_param("core", "gav"))
            .and(query_param("rows", "1"))
            .and(query_param("wt", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "responseHeader": { "status": 0 },
                "response": {
                    "numFound": 42,
                    "docs": [{ "id": "com.karumi:shot:5.14.1", "g": "com.karumi", "a": "shot", "v": "5.14.1" }]
                }
            })))
            .mount(&server)
            .await;

        let client = MavenCentralClient::new().with_search_url(&server.uri());
        let version = client.latest_version("com.karumi", "shot").await.unwrap();
        assert_eq!(version.as_deref(), Some("5.14.1"));
    }

    #[tokio::test]
    async fn test_zero_records_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "response": { "numFound": 0, "docs": [] }
            })))
            .mount(&server)
            .await;

        let client = MavenCentralClient::new().with_search_url(&server.uri());
        let version = client.latest_version("androidx.test", "core").await.unwrap();
        assert_eq!(version, None);
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = MavenCentralClient::new().with_search_url(&server.uri());
        let result = client.latest_version("com.example", "lib").await;
        assert!(matches!(result, Err(ResolveError::Http(_))));
    }
}
