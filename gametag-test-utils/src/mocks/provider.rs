//! Mock implementation of TagProvider for testing

use async_trait::async_trait;
use gametag_core::TagList;
use gametag_core::error::ProviderError;
use gametag_core::provider::TagProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock tag provider with scripted per-identifier responses
///
/// Identifiers without a scripted response get the default behavior:
/// tags `["tag-<id>"]`. Every call is recorded, and the peak number of
/// concurrent in-flight lookups is tracked.
///
/// # Examples
///
/// ```rust,no_run
/// use gametag_test_utils::MockTagProvider;
///
/// let provider = MockTagProvider::new()
///     .with_tags("413150", &["Indie", "RPG"])
///     .with_empty("999")
///     .with_failure("500");
/// ```
#[derive(Clone)]
pub struct MockTagProvider {
    state: Arc<Mutex<MockState>>,
    delay: Duration,
}

#[derive(Debug, Clone)]
enum MockResponse {
    Tags(TagList),
    HttpStatus(u16),
    Network(String),
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, MockResponse>,
    calls: Vec<String>,
    in_flight: usize,
    peak_in_flight: usize,
}

impl MockTagProvider {
    /// Create a new mock provider with default behavior
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            delay: Duration::from_millis(5),
        }
    }

    /// Respond to `id` with the given tags
    pub fn with_tags(self, id: &str, tags: &[&str]) -> Self {
        self.respond(
            id,
            MockResponse::Tags(tags.iter().map(|t| t.to_string()).collect()),
        )
    }

    /// Respond to `id` with an explicit empty tag list
    pub fn with_empty(self, id: &str) -> Self {
        self.respond(id, MockResponse::Tags(TagList::new()))
    }

    /// Fail lookups for `id` with an HTTP 500
    pub fn with_failure(self, id: &str) -> Self {
        self.respond(id, MockResponse::HttpStatus(500))
    }

    /// Fail lookups for `id` with a network error
    pub fn with_network_failure(self, id: &str, message: &str) -> Self {
        self.respond(id, MockResponse::Network(message.to_string()))
    }

    /// Time each lookup takes before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn respond(self, id: &str, response: MockResponse) -> Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(id.to_string(), response);
        self
    }

    /// Identifiers looked up so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Highest number of lookups that were in flight at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.state.lock().unwrap().peak_in_flight
    }

    /// Forget recorded calls and the in-flight peak
    pub fn reset_calls(&self) {
        let mut state = self.state.lock().unwrap();
        state.calls.clear();
        state.peak_in_flight = 0;
    }

    /// Tags this mock would return for `id`, if the lookup succeeds
    pub fn expected_tags(&self, id: &str) -> Option<TagList> {
        match self.state.lock().unwrap().responses.get(id) {
            Some(MockResponse::Tags(tags)) => Some(tags.clone()),
            Some(_) => None,
            None => Some(vec![format!("tag-{id}")]),
        }
    }
}

impl Default for MockTagProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagProvider for MockTagProvider {
    async fn fetch_tags(&self, id: &str) -> Result<TagList, ProviderError> {
        let response = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(id.to_string());
            state.in_flight += 1;
            state.peak_in_flight = state.peak_in_flight.max(state.in_flight);
            state.responses.get(id).cloned()
        };

        tokio::time::sleep(self.delay).await;

        self.state.lock().unwrap().in_flight -= 1;

        match response {
            Some(MockResponse::Tags(tags)) => Ok(tags),
            Some(MockResponse::HttpStatus(status)) => Err(ProviderError::http_status(id, status)),
            Some(MockResponse::Network(message)) => Err(ProviderError::network(id, message)),
            None => Ok(vec![format!("tag-{id}")]),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
