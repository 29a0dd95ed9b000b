//! Steam store `appdetails` tag provider
//!
//! Tags are the genre descriptions Steam reports for an app:
//! `GET /api/appdetails?appids=<id>&filters=genres&l=<lang>`.

use crate::error::{ProviderError, Result, ValidationError};
use crate::provider::{ProviderConfig, TagProvider};
use crate::types::TagList;
use async_trait::async_trait;
use log::{debug, trace};
use serde_json::Value;

/// Tag provider backed by the Steam store API
pub struct SteamStoreProvider {
    config: ProviderConfig,
    http_client: reqwest::Client,
}

impl SteamStoreProvider {
    /// Create a provider after validating its configuration
    pub fn new(config: ProviderConfig) -> Result<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                ValidationError::invalid_configuration(&format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Endpoint queried for every lookup
    fn endpoint(&self) -> String {
        format!(
            "{}/api/appdetails",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TagProvider for SteamStoreProvider {
    async fn fetch_tags(&self, id: &str) -> std::result::Result<TagList, ProviderError> {
        let url = self.endpoint();
        debug!("Fetching Steam app details for {id}");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("appids", id),
                ("filters", "genres"),
                ("l", self.config.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::network(id, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::http_status(id, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::network(id, e.to_string()))?;
        trace!("Steam response for {id}: {body}");

        parse_app_details(id, &body)
    }

    fn name(&self) -> &str {
        "steam"
    }
}

/// Extract genre descriptions for `id` from an `appdetails` response body
///
/// A body that is not a JSON object keyed by app id is malformed, and so is a
/// `genres` value that is not a list of `{ "description": <string> }`
/// objects. A missing or null app entry, `success` other than `true`, and
/// absent genres all yield an empty list.
pub fn parse_app_details(id: &str, body: &str) -> std::result::Result<TagList, ProviderError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ProviderError::malformed(id, e.to_string()))?;
    let Value::Object(mut apps) = value else {
        return Err(ProviderError::malformed(id, "response is not an object"));
    };

    let Some(Value::Object(app)) = apps.remove(id) else {
        debug!("Steam response has no entry for {id}");
        return Ok(TagList::new());
    };

    if app.get("success") != Some(&Value::Bool(true)) {
        debug!("Steam reported no success for {id}");
        return Ok(TagList::new());
    }

    // Steam sends `data: []` when a filtered app has nothing to report
    let genres = match app.get("data").and_then(|data| data.get("genres")) {
        None | Some(Value::Null) => return Ok(TagList::new()),
        Some(Value::Array(genres)) => genres,
        Some(other) => {
            return Err(ProviderError::malformed(
                id,
                format!("genres is not a list: {other}"),
            ));
        }
    };

    genres
        .iter()
        .map(|genre| {
            genre
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    ProviderError::malformed(id, format!("genre without description: {genre}"))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genres_in_order() {
        let body = r#"{"413150": {"success": true, "data": {"genres": [
            {"id": "23", "description": "Indie"},
            {"id": "3", "description": "RPG"},
            {"id": "28", "description": "Simulation"}
        ]}}}"#;

        let tags = parse_app_details("413150", body).unwrap();
        assert_eq!(tags, vec!["Indie", "RPG", "Simulation"]);
    }

    #[test]
    fn test_parse_success_false_is_empty() {
        let body = r#"{"999999": {"success": false}}"#;
        assert_eq!(parse_app_details("999999", body).unwrap(), TagList::new());
    }

    #[test]
    fn test_parse_empty_data_array_is_empty() {
        let body = r#"{"10": {"success": true, "data": []}}"#;
        assert_eq!(parse_app_details("10", body).unwrap(), TagList::new());
    }

    #[test]
    fn test_parse_missing_app_key_is_empty() {
        let body = r#"{"20": {"success": true, "data": {"genres": []}}}"#;
        assert_eq!(parse_app_details("10", body).unwrap(), TagList::new());
    }

    #[test]
    fn test_parse_null_app_entry_is_empty() {
        assert_eq!(parse_app_details("10", r#"{"10": null}"#).unwrap(), TagList::new());
        assert_eq!(parse_app_details("10", r#"{"10": 7}"#).unwrap(), TagList::new());
    }

    #[test]
    fn test_parse_genres_not_a_list_is_malformed() {
        let body = r#"{"10": {"success": true, "data": {"genres": "Action"}}}"#;
        let error = parse_app_details("10", body).unwrap_err();
        assert!(matches!(error, ProviderError::MalformedResponse { .. }));
        assert_eq!(error.id(), "10");
    }

    #[test]
    fn test_parse_genre_without_description_is_malformed() {
        let body = r#"{"10": {"success": true, "data": {"genres": [
            {"id": "2", "description": "Action"}, 3
        ]}}}"#;
        let error = parse_app_details("10", body).unwrap_err();
        assert!(matches!(error, ProviderError::MalformedResponse { .. }));

        let body = r#"{"10": {"success": true, "data": {"genres": [{"id": "1"}]}}}"#;
        assert!(parse_app_details("10", body).is_err());
    }

    #[test]
    fn test_parse_null_genres_is_empty() {
        let body = r#"{"10": {"success": true, "data": {"genres": null}}}"#;
        assert_eq!(parse_app_details("10", body).unwrap(), TagList::new());
    }

    #[test]
    fn test_parse_invalid_json_is_malformed() {
        let error = parse_app_details("10", "<html>busy</html>").unwrap_err();
        assert!(matches!(error, ProviderError::MalformedResponse { .. }));
        assert_eq!(error.id(), "10");
    }

    #[test]
    fn test_parse_non_object_is_malformed() {
        let error = parse_app_details("10", "null").unwrap_err();
        assert!(matches!(error, ProviderError::MalformedResponse { .. }));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ProviderConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            SteamStoreProvider::new(config),
            Err(crate::Error::Validation(_))
        ));
    }

    #[test]
    fn test_new_rejects_unusable_user_agent() {
        let config = ProviderConfig {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        match SteamStoreProvider::new(config) {
            Err(crate::Error::Validation(ValidationError::InvalidConfiguration { message })) => {
                assert!(message.contains("HTTP client"));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("client with invalid user agent was built"),
        }
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = SteamStoreProvider::new(ProviderConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(provider.endpoint(), "http://127.0.0.1:9/api/appdetails");
    }
}
