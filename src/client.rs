// Customer-facing facade tying the builder, transport, backup writer and
// normalizer together for a single search call

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::backup::write_backup;
use crate::error::ApiError;
use crate::normalize::{normalize, FlightOffer};
use crate::query::{build_request_body, FlightQuery};
use crate::transport::{endpoint_url, HttpTransport, Transport, QPX_SEARCH_URL};

// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    // Directory for request/response audit copies. `None` disables backups.
    pub backup_dir: Option<PathBuf>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: QPX_SEARCH_URL.to_string(),
            backup_dir: None,
        }
    }
}

// Flight-search client for the QPX Express API.
//
// Holds no mutable state; any number of `query` calls may run concurrently
// on one client.
pub struct QpxClient {
    api_key: String,
    options: ClientOptions,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for QpxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QpxClient")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl QpxClient {
    // Client that talks to the live endpoint over HTTP.
    pub fn new(api_key: impl Into<String>, options: ClientOptions) -> Result<Self, ApiError> {
        Self::with_transport(api_key, options, Arc::new(HttpTransport::new()))
    }

    // Client over a caller-supplied transport.
    pub fn with_transport(
        api_key: impl Into<String>,
        options: ClientOptions,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ApiError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ApiError::Validation(
                "api key must not be empty".to_string(),
            ));
        }
        Ok(Self {
            api_key,
            options,
            transport,
        })
    }

    // Runs one search: build the body, POST it, optionally write the audit
    // copy, then flatten the response into offers. Strictly sequential, one
    // outbound call, no retry.
    pub async fn query(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, ApiError> {
        let body = build_request_body(query)?;
        let url = endpoint_url(&self.options.base_url, &self.api_key);

        debug!(
            origin = %query.origin,
            destination = %query.destination,
            date = %query.date,
            "sending flight search"
        );
        let response = self.transport.send_search(&url, &body).await?;

        // The audit copy is taken before normalization so a provider-reported
        // error still ends up on disk.
        if let Some(dir) = &self.options.backup_dir {
            let path = write_backup(dir, &body, &response)?;
            debug!(path = %path.display(), "backup written");
        }

        normalize(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::provider::{
        FlightLeg, ProviderFault, SearchRequestBody, SearchResponse, TripOption, TripSegment,
        TripSlice, Trips,
    };

    // In-process transport double; plays the role of the provider server.
    struct FixedTransport {
        response: SearchResponse,
        calls: AtomicUsize,
    }

    impl FixedTransport {
        fn new(response: SearchResponse) -> Arc<Self> {
            Arc::new(Self {
                response,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn send_search(
            &self,
            _url: &str,
            _body: &SearchRequestBody,
        ) -> Result<SearchResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    fn offers_response() -> SearchResponse {
        SearchResponse {
            error: None,
            trips: Some(Trips {
                trip_option: vec![TripOption {
                    sale_total: Some("EUR450.00".to_string()),
                    slice: vec![TripSlice {
                        segment: vec![TripSegment {
                            flight: Some(FlightLeg {
                                carrier: Some("DL".to_string()),
                                number: Some("405".to_string()),
                            }),
                        }],
                    }],
                }],
            }),
        }
    }

    fn error_response() -> SearchResponse {
        SearchResponse {
            error: Some(ProviderFault {
                code: 400,
                message: "Invalid airport".to_string(),
            }),
            trips: None,
        }
    }

    fn temp_backup_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("qpx-client-{}-{}", tag, rand::random::<u32>()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn base_query() -> FlightQuery {
        FlightQuery::new("JFK", "LAX", "2016-12-14", "EUR200")
    }

    #[test]
    fn rejects_an_empty_api_key() {
        let err = QpxClient::new("", ClientOptions::default()).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn returns_offers_from_the_transport() {
        let transport = FixedTransport::new(offers_response());
        let client =
            QpxClient::with_transport("test-key", ClientOptions::default(), transport.clone())
                .unwrap();

        let offers = client.query(&base_query()).await.unwrap();

        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].airline, "DL");
        assert_eq!(offers[0].price, "EUR450.00");
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_query_never_reaches_the_transport() {
        let transport = FixedTransport::new(offers_response());
        let client =
            QpxClient::with_transport("test-key", ClientOptions::default(), transport.clone())
                .unwrap();

        let query = FlightQuery::new("", "LAX", "2016-12-14", "EUR200");
        let err = client.query(&query).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn provider_error_is_still_backed_up() {
        let dir = temp_backup_dir("provider-error");
        let transport = FixedTransport::new(error_response());
        let options = ClientOptions {
            backup_dir: Some(dir.clone()),
            ..Default::default()
        };
        let client = QpxClient::with_transport("test-key", options, transport).unwrap();

        let err = client.query(&base_query()).await.unwrap_err();
        assert!(matches!(err, ApiError::Provider { code: 400, .. }));

        // The raw error response must be on disk even though the call failed.
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn backup_failure_aborts_the_call() {
        let missing =
            std::env::temp_dir().join(format!("qpx-client-missing-{}", rand::random::<u32>()));
        let transport = FixedTransport::new(offers_response());
        let options = ClientOptions {
            backup_dir: Some(missing),
            ..Default::default()
        };
        let client = QpxClient::with_transport("test-key", options, transport).unwrap();

        let err = client.query(&base_query()).await.unwrap_err();
        assert!(
            matches!(err, ApiError::Backup(_)),
            "expected a backup error, got {:?}",
            err
        );
    }
}
