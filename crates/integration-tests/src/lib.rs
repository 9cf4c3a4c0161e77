//! Integration tests for `SimpleMarket`.
//!
//! The storefront router is driven in-process with
//! `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p simple-market-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_pages` - Page rendering, catalog filter, not-found handling
//! - `storefront_cart` - Cart form posts and session persistence

use std::net::SocketAddr;

use axum::{
    Router,
    extract::ConnectInfo,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use simple_market_core::Catalog;
use simple_market_storefront::{
    app, config::StorefrontConfig, middleware::session::SESSION_COOKIE_NAME, state::AppState,
};
use tower::ServiceExt;

/// Peer address every request appears to come from.
const CLIENT_ADDR: ([u8; 4], u16) = ([203, 0, 113, 10], 40_000);

/// Largest response body the helpers will read.
const BODY_LIMIT: usize = 1024 * 1024;

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub location: Option<String>,
    pub body: String,
}

/// In-process client that keeps the session cookie between requests.
///
/// Requests carry the peer address the server would record with
/// `into_make_service_with_connect_info`.
pub struct TestClient {
    app: Router,
    session_cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// A client against a storefront with default config and the fixture catalog.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(StorefrontConfig::default(), Catalog::fixture());
        Self {
            app: app(state),
            session_cookie: None,
        }
    }

    /// Another visitor on the same running app: shared router and session
    /// store, but no session cookie yet.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            app: self.app.clone(),
            session_cookie: None,
        }
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self
            .request_builder("GET", uri)
            .body(Body::empty())
            .expect("valid GET request");
        self.send(request).await
    }

    /// Send a form POST with `fields` URL-encoded as the body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = self.form_request(uri, fields, None);
        self.send(request).await
    }

    /// Send a form POST with one extra request header.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post_form_with_header(
        &mut self,
        uri: &str,
        fields: &[(&str, &str)],
        extra: (&str, &str),
    ) -> TestResponse {
        let request = self.form_request(uri, fields, Some(extra));
        self.send(request).await
    }

    /// POST a form and follow the `303` redirect with a GET.
    ///
    /// # Panics
    ///
    /// Panics if the POST does not answer with `303 See Other`.
    pub async fn submit(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let response = self.post_form(uri, fields).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "POST {uri}");
        let location = response.location.expect("redirect has a location");
        self.get(&location).await
    }

    fn form_request(
        &self,
        uri: &str,
        fields: &[(&str, &str)],
        extra: Option<(&str, &str)>,
    ) -> Request<Body> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let mut builder = self
            .request_builder("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some((name, value)) = extra {
            builder = builder.header(name, value);
        }
        builder.body(Body::from(body)).expect("valid POST request")
    }

    fn request_builder(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .extension(ConnectInfo(SocketAddr::from(CLIENT_ADDR)));
        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|value| value.split(';').next())
            .find(|pair| pair.starts_with(SESSION_COOKIE_NAME))
        {
            self.session_cookie = Some(cookie.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let location = headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let bytes = to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
