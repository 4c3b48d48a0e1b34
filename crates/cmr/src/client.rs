use crate::error::{CmrError, Result};
use crate::types::{CollectionsResponse, DatasetRecord};
use papertag_core::Tag;
use reqwest::Client;

const DEFAULT_ENDPOINT: &str = "https://cmr.earthdata.nasa.gov/search";

/// Thin client over NASA CMR collection search.
///
/// One keyword query per tag, first hit wins. Retry/backoff and rate
/// limiting are the caller's concern.
#[derive(Debug, Clone)]
pub struct CmrClient {
    client: Client,
    endpoint: String,
}

impl CmrClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client against a non-default endpoint (UAT, a local fixture server)
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Keyword string queried for a tag: the mission, instrument, and
    /// variable for entity tags, or the bare exception name.
    #[must_use]
    pub fn keyword_for(tag: &Tag) -> String {
        match (tag.mission(), tag.instrument()) {
            (Some(mission), Some(instrument)) => {
                format!("{mission} {instrument} {}", tag.variable)
            }
            _ => tag.subject.clone(),
        }
    }

    /// Query CMR for the first collection matching a keyword.
    pub async fn search_first(&self, keyword: &str) -> Result<Option<DatasetRecord>> {
        let url = format!("{}/collections.json", self.endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("keyword", keyword), ("page_size", "1")])
            .send()
            .await?
            .error_for_status()?;

        let body: CollectionsResponse = response
            .json()
            .await
            .map_err(|e| CmrError::UnexpectedResponse(e.to_string()))?;
        let record = body.feed.entry.into_iter().next().map(DatasetRecord::from);
        log::debug!(
            "CMR keyword '{keyword}' -> {}",
            record
                .as_ref()
                .map_or("no dataset", |r| r.concept_id.as_str())
        );
        Ok(record)
    }

    /// Zero-or-one best-matching dataset for a tag.
    pub async fn find_dataset(&self, tag: &Tag) -> Result<Option<DatasetRecord>> {
        self.search_first(&Self::keyword_for(tag)).await
    }
}

impl Default for CmrClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keyword_for_entity_tag_joins_triple() {
        let tag = Tag::entity("aura", "mls", "h2o");
        assert_eq!(CmrClient::keyword_for(&tag), "aura mls h2o");
    }

    #[test]
    fn keyword_for_exception_tag_is_the_name() {
        let tag = Tag::exception("merra-2");
        assert_eq!(CmrClient::keyword_for(&tag), "merra-2");
    }

    // One-shot HTTP fixture: answers the first connection with a canned
    // response and returns the endpoint to point the client at.
    async fn spawn_fixture(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn search_first_returns_the_first_collection() {
        let endpoint = spawn_fixture(
            "HTTP/1.1 200 OK",
            r#"{"feed":{"entry":[{"id":"C1251101777-GES_DISC","short_name":"ML2H2O","dataset_id":"MLS/Aura Level 2 Water Vapor"}]}}"#,
        )
        .await;

        let client = CmrClient::with_endpoint(endpoint);
        let record = client.search_first("aura mls h2o").await.unwrap().unwrap();
        assert_eq!(record.concept_id, "C1251101777-GES_DISC");
        assert_eq!(record.short_name.as_deref(), Some("ML2H2O"));
    }

    #[tokio::test]
    async fn search_first_returns_none_for_an_empty_feed() {
        let endpoint = spawn_fixture("HTTP/1.1 200 OK", r#"{"feed":{"entry":[]}}"#).await;

        let client = CmrClient::with_endpoint(endpoint);
        let record = client.search_first("nothing matches this").await.unwrap();
        assert_eq!(record, None);
    }

    #[tokio::test]
    async fn non_json_body_is_an_unexpected_response() {
        let endpoint = spawn_fixture("HTTP/1.1 200 OK", "<html>maintenance page</html>").await;

        let client = CmrClient::with_endpoint(endpoint);
        let err = client.search_first("aura mls h2o").await.unwrap_err();
        assert!(matches!(err, CmrError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn error_status_surfaces_as_request_failure() {
        let endpoint = spawn_fixture("HTTP/1.1 503 Service Unavailable", "").await;

        let client = CmrClient::with_endpoint(endpoint);
        let err = client.search_first("aura mls h2o").await.unwrap_err();
        assert!(matches!(err, CmrError::Request(_)));
    }
}
