//! Remote data gateway for the statistics API.
//!
//! Requests go through a [`Transport`] so the browser `fetch` binding can be
//! replaced by a scripted fake in tests. There is no retry, timeout or
//! backoff: a failure is handed straight back to the caller.

use crate::config::API_DOMAIN;
use crate::error::{AppError, Resource, Result};
use crate::models::{Constructor, Driver, QualifyingEntry, Race, ResultEntry, Season, SeasonData};
use crate::utils::js_error_message;
use serde::de::DeserializeOwned;
use std::future::Future;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Status and body of a completed GET request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests.
///
/// `Err` means no response was received at all; HTTP error statuses are
/// returned as `Ok` and judged by the gateway.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = std::result::Result<HttpResponse, String>>;
}

/// `window.fetch` through `web-sys`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    fn get(&self, url: &str) -> impl Future<Output = std::result::Result<HttpResponse, String>> {
        let url = url.to_string();
        async move {
            let promise = gloo_utils::window().fetch_with_str(&url);
            let response = JsFuture::from(promise)
                .await
                .map_err(|e| js_error_message(&e))?;
            let response: web_sys::Response = response
                .dyn_into()
                .map_err(|_| "fetch did not resolve to a Response".to_string())?;

            let status = response.status();
            let text = response.text().map_err(|e| js_error_message(&e))?;
            let body = JsFuture::from(text)
                .await
                .map_err(|e| js_error_message(&e))?
                .as_string()
                .unwrap_or_default();

            Ok(HttpResponse { status, body })
        }
    }
}

pub struct Gateway<T: Transport> {
    base_url: String,
    transport: T,
}

impl Gateway<BrowserTransport> {
    /// Gateway against the configured API domain using `window.fetch`.
    pub fn browser() -> Self {
        Self::new(API_DOMAIN, BrowserTransport)
    }
}

impl<T: Transport> Gateway<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Endpoint URL, with `?season=` for the per-season resources.
    pub fn url(&self, resource: Resource, season: Option<Season>) -> String {
        match season {
            Some(season) => format!("{}/{}?season={}", self.base_url, resource.path(), season),
            None => format!("{}/{}", self.base_url, resource.path()),
        }
    }

    async fn fetch_json<D: DeserializeOwned>(
        &self,
        resource: Resource,
        season: Option<Season>,
    ) -> Result<D> {
        let url = self.url(resource, season);
        log::info!("GET {}", url);

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|message| AppError::Transport { resource, message })?;
        if !response.is_success() {
            return Err(AppError::Http {
                resource,
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| AppError::Decode {
            resource,
            message: e.to_string(),
        })
    }

    /// Fetch races, qualifying and results of a season concurrently.
    ///
    /// All three must succeed; the first failure is returned and the other
    /// responses are discarded.
    pub async fn fetch_season_data(&self, season: Season) -> Result<SeasonData> {
        let (races, qualifying, results) = futures::try_join!(
            self.fetch_json::<Vec<Race>>(Resource::Races, Some(season)),
            self.fetch_json::<Vec<QualifyingEntry>>(Resource::Qualifying, Some(season)),
            self.fetch_json::<Vec<ResultEntry>>(Resource::Results, Some(season)),
        )?;

        Ok(SeasonData {
            races,
            qualifying,
            results,
        })
    }

    /// Full, unfiltered driver catalog.
    pub async fn fetch_drivers(&self) -> Result<Vec<Driver>> {
        self.fetch_json(Resource::Drivers, None).await.map_err(|e| {
            log::error!("Error in fetch_drivers: {}", e);
            e
        })
    }

    /// Full, unfiltered constructor catalog.
    pub async fn fetch_constructors(&self) -> Result<Vec<Constructor>> {
        self.fetch_json(Resource::Constructors, None)
            .await
            .map_err(|e| {
                log::error!("Error in fetch_constructors: {}", e);
                e
            })
    }
}

/// Scripted transport shared by the gateway, loader and detail tests.
#[cfg(test)]
pub(crate) mod fake {
    use super::{HttpResponse, Transport};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::future::Future;

    #[derive(Default)]
    pub struct FakeTransport {
        responses: HashMap<String, std::result::Result<HttpResponse, String>>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
            self.responses.insert(
                url.to_string(),
                Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
            );
            self
        }

        pub fn fail(mut self, url: &str, message: &str) -> Self {
            self.responses
                .insert(url.to_string(), Err(message.to_string()));
            self
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl Transport for FakeTransport {
        fn get(
            &self,
            url: &str,
        ) -> impl Future<Output = std::result::Result<HttpResponse, String>> {
            self.requests.borrow_mut().push(url.to_string());
            let response = self.responses.get(url).cloned().unwrap_or(Ok(HttpResponse {
                status: 404,
                body: String::new(),
            }));
            futures::future::ready(response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeTransport;
    use super::*;
    use futures::executor::block_on;

    const BASE: &str = "https://api.test/f1";

    fn season(year: u16) -> Season {
        Season::try_from(year).unwrap()
    }

    fn season_transport(qualifying_status: u16) -> FakeTransport {
        FakeTransport::new()
            .respond(
                "https://api.test/f1/races.php?season=2022",
                200,
                r#"[{"round": 1, "name": "Bahrain Grand Prix", "year": 2022, "date": "2022-03-20",
                     "circuit": {"name": "Bahrain International Circuit", "location": "Sakhir",
                                 "country": "Bahrain", "url": "http://example.org/bahrain"}}]"#,
            )
            .respond(
                "https://api.test/f1/qualifying.php?season=2022",
                qualifying_status,
                r#"[{"race": {"round": 1, "year": 2022}, "position": 1,
                     "driver": {"ref": "leclerc", "forename": "Charles", "surname": "Leclerc"},
                     "constructor": {"name": "Ferrari"}, "q1": "1:31.471", "q2": "1:30.932", "q3": "1:30.558"}]"#,
            )
            .respond(
                "https://api.test/f1/results.php?season=2022",
                200,
                r#"[{"race": {"round": 1, "year": 2022, "name": "Bahrain Grand Prix"}, "position": 1,
                     "driver": {"ref": "leclerc", "forename": "Charles", "surname": "Leclerc"},
                     "constructor": {"name": "Ferrari"}, "laps": 57, "points": 26}]"#,
            )
    }

    #[test]
    fn urls_are_built_from_the_base() {
        let gateway = Gateway::new("https://api.test/f1/", FakeTransport::new());
        assert_eq!(
            gateway.url(Resource::Qualifying, Some(season(2021))),
            "https://api.test/f1/qualifying.php?season=2021"
        );
        assert_eq!(
            gateway.url(Resource::Drivers, None),
            "https://api.test/f1/drivers.php"
        );
    }

    #[test]
    fn season_fetch_requests_each_endpoint_once() {
        let gateway = Gateway::new(BASE, season_transport(200));
        let data = block_on(gateway.fetch_season_data(season(2022))).unwrap();

        assert_eq!(data.races.len(), 1);
        assert_eq!(data.qualifying[0].q3.as_deref(), Some("1:30.558"));
        assert_eq!(data.results[0].points_or_zero(), 26.0);

        let mut requests = gateway.transport().requests();
        requests.sort();
        assert_eq!(
            requests,
            vec![
                "https://api.test/f1/qualifying.php?season=2022",
                "https://api.test/f1/races.php?season=2022",
                "https://api.test/f1/results.php?season=2022",
            ]
        );
    }

    #[test]
    fn one_failing_endpoint_fails_the_season() {
        let gateway = Gateway::new(BASE, season_transport(500));
        let err = block_on(gateway.fetch_season_data(season(2022))).unwrap_err();
        assert_eq!(
            err,
            AppError::Http {
                resource: Resource::Qualifying,
                status: 500
            }
        );
        assert!(err.to_string().starts_with("Error fetching qualifying data"));
    }

    #[test]
    fn transport_and_decode_failures_are_distinguished() {
        let transport = FakeTransport::new()
            .fail("https://api.test/f1/drivers.php", "NetworkError")
            .respond("https://api.test/f1/constructors.php", 200, "<html>");
        let gateway = Gateway::new(BASE, transport);

        let err = block_on(gateway.fetch_drivers()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Transport {
                resource: Resource::Drivers,
                ..
            }
        ));

        let err = block_on(gateway.fetch_constructors()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Decode {
                resource: Resource::Constructors,
                ..
            }
        ));
    }
}
