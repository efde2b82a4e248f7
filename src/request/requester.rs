//! Turns a [`ForecastRequest`] into a fully qualified URL and executes it
//! through the configured transport.

use crate::request::error::RequestError;
use crate::request::forecast_request::ForecastRequest;
use crate::request::transport::Transport;
use log::debug;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

const FORECAST_BASE_URL: &str = "https://api.darksky.net/forecast";

/// Where requests are sent.
///
/// Direct requests embed the API key in the URL path. A proxy endpoint keeps
/// the key off the client and forwards to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Direct { api_key: String },
    Proxy { url: String },
}

impl Endpoint {
    fn base(&self) -> String {
        match self {
            Endpoint::Direct { api_key } => format!("{FORECAST_BASE_URL}/{api_key}"),
            Endpoint::Proxy { url } => url.trim_end_matches('/').to_string(),
        }
    }
}

/// Owns the endpoint and transport; stateless across calls.
pub struct Requester {
    endpoint: Endpoint,
    transport: Arc<dyn Transport>,
}

impl Requester {
    pub fn new(endpoint: Endpoint, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// Builds `<base>/<latitude>,<longitude>[,<instant>]?<query>`.
    ///
    /// Fails with [`RequestError::MissingCoordinates`] when either coordinate
    /// is unset. The query string is appended only when at least one optional
    /// field is set; pair order is unspecified.
    pub fn build_url(&self, request: &ForecastRequest) -> Result<Url, RequestError> {
        let (Some(latitude), Some(longitude)) = (request.latitude, request.longitude) else {
            return Err(RequestError::MissingCoordinates);
        };

        let mut raw = format!("{}/{},{}", self.endpoint.base(), latitude, longitude);
        if let Some(instant) = &request.instant {
            raw.push(',');
            raw.push_str(instant);
        }
        let mut url = Url::parse(&raw)?;

        let has_query = request.units.is_some()
            || request.language.is_some()
            || !request.exclude.is_empty()
            || request.extend_hourly;
        if has_query {
            let mut pairs = url.query_pairs_mut();
            if let Some(units) = request.units {
                pairs.append_pair("units", units.as_str());
            }
            if let Some(language) = request.language {
                pairs.append_pair("lang", language.as_str());
            }
            if !request.exclude.is_empty() {
                let joined = request
                    .exclude
                    .iter()
                    .map(|block| block.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                pairs.append_pair("exclude", &joined);
            }
            if request.extend_hourly {
                pairs.append_pair("extend", "hourly");
            }
        }

        Ok(url)
    }

    /// Executes the request and returns the parsed JSON body.
    ///
    /// Unlike the original JavaScript client, which resolved its promise with
    /// the caught error value, every transport or parse failure here is a
    /// typed `Err`.
    pub async fn fetch(&self, request: &ForecastRequest) -> Result<Value, RequestError> {
        let url = self.build_url(request)?;
        debug!("Requesting weather data from {url}");
        self.transport.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::block::Block;
    use crate::types::language::Language;
    use crate::units::UnitSystem;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use chrono::Utc;
    use std::sync::Mutex;

    struct RecordingTransport {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get_json(&self, url: &Url) -> Result<Value, RequestError> {
            self.calls.lock().unwrap().push(url.to_string());
            Ok(Value::Null)
        }
    }

    fn direct_requester() -> (Requester, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport {
            calls: Mutex::new(Vec::new()),
        });
        let requester = Requester::new(
            Endpoint::Direct {
                api_key: "test-key".to_string(),
            },
            transport.clone(),
        );
        (requester, transport)
    }

    #[test]
    fn url_contains_key_and_coordinates() {
        let (requester, _) = direct_requester();
        let request = ForecastRequest::new().latitude(37.8).longitude(-122.4);
        let url = requester.build_url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.darksky.net/forecast/test-key/37.8,-122.4"
        );
    }

    #[test]
    fn query_string_contains_every_set_field() {
        let (requester, _) = direct_requester();
        let request = ForecastRequest::new()
            .latitude(37.8)
            .longitude(-122.4)
            .units(UnitSystem::Si)
            .language(Language::De)
            .exclude(vec![Block::Hourly]);
        let url = requester.build_url(&request).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("units=si"));
        assert!(query.contains("lang=de"));
        assert!(query.contains("exclude=hourly"));
    }

    #[test]
    fn no_query_string_when_nothing_optional_is_set() {
        let (requester, _) = direct_requester();
        let request = ForecastRequest::new().latitude(37.8).longitude(-122.4);
        let url = requester.build_url(&request).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn instant_lands_in_the_path() {
        let (requester, _) = direct_requester();
        let instant = Utc.with_ymd_and_hms(2000, 4, 6, 12, 20, 5).unwrap();
        let request = ForecastRequest::new()
            .latitude(37.8)
            .longitude(-122.4)
            .instant(instant);
        let url = requester.build_url(&request).unwrap();
        assert!(url.path().ends_with("/37.8,-122.4,2000-04-06T12:20:05"));
    }

    #[test]
    fn excludes_are_comma_joined() {
        let (requester, _) = direct_requester();
        let request = ForecastRequest::new()
            .latitude(37.8)
            .longitude(-122.4)
            .exclude(vec![Block::Minutely, Block::Alerts]);
        let url = requester.build_url(&request).unwrap();
        assert!(url.query().unwrap().contains("exclude=minutely%2Calerts"));
    }

    #[test]
    fn proxy_endpoint_replaces_the_provider_base() {
        let transport = Arc::new(RecordingTransport {
            calls: Mutex::new(Vec::new()),
        });
        let requester = Requester::new(
            Endpoint::Proxy {
                url: "https://proxy.example.com/darksky/".to_string(),
            },
            transport,
        );
        let request = ForecastRequest::new().latitude(37.8).longitude(-122.4);
        let url = requester.build_url(&request).unwrap();
        assert_eq!(url.as_str(), "https://proxy.example.com/darksky/37.8,-122.4");
    }

    #[tokio::test]
    async fn fetch_without_coordinates_never_touches_the_transport() {
        let (requester, transport) = direct_requester();
        let request = ForecastRequest::new().latitude(37.8);
        let err = requester.fetch(&request).await.unwrap_err();
        assert!(matches!(err, RequestError::MissingCoordinates));
        assert!(transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_hands_the_built_url_to_the_transport() {
        let (requester, transport) = direct_requester();
        let request = ForecastRequest::new()
            .latitude(37.8)
            .longitude(-122.4)
            .units(UnitSystem::Us);
        requester.fetch(&request).await.unwrap();
        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("37.8,-122.4"));
        assert!(calls[0].contains("units=us"));
    }
}
