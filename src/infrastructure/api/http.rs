//! Dashboard notification API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::StatusCode;

use crate::application::ports::{ApiError, NotificationApi};
use crate::domain::notification::{NotificationId, NotificationSummary};

use super::cookie::cookie_value;

/// Unread-notifications endpoint, relative to the base URL
const UNREAD_PATH: &str = "/api/notifications/unread/";

/// Notifications listing page opened from a toast
pub const NOTIFICATIONS_PAGE_PATH: &str = "/core/notifications/";

/// Cookie carrying the CSRF token
const CSRF_COOKIE: &str = "csrftoken";

/// Header Django reads the CSRF token from
const CSRF_HEADER: &str = "X-CSRFToken";

/// Upper bound on a single request, so a stalled server cannot wedge a poll
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// reqwest client for the dashboard's notification endpoints
pub struct HttpNotificationApi {
    base_url: String,
    cookies: Option<String>,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpNotificationApi {
    /// Create a client for `base_url`, sending `cookies` as the Cookie header
    pub fn new(base_url: impl Into<String>, cookies: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cookies,
            timeout: REQUEST_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn unread_url(&self) -> String {
        format!("{}{}", self.base_url, UNREAD_PATH)
    }

    fn read_url(&self, id: NotificationId) -> String {
        format!("{}/api/notifications/{}/read/", self.base_url, id)
    }

    /// Absolute URL of the notifications listing page
    pub fn notifications_page_url(&self) -> String {
        format!("{}{}", self.base_url, NOTIFICATIONS_PAGE_PATH)
    }

    fn csrf_token(&self) -> String {
        self.cookies
            .as_deref()
            .and_then(|c| cookie_value(c, CSRF_COOKIE))
            .unwrap_or_default()
    }

    fn with_cookies(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.timeout(self.timeout);
        match &self.cookies {
            Some(cookies) => request.header(COOKIE, cookies),
            None => request,
        }
    }
}

#[async_trait]
impl NotificationApi for HttpNotificationApi {
    async fn fetch_unread(&self) -> Result<NotificationSummary, ApiError> {
        let request = self
            .client
            .get(self.unread_url())
            .header(ACCEPT, "application/json");

        let response = self
            .with_cookies(request)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthenticated(status.as_u16()));
        }

        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn mark_read(&self, id: NotificationId) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.read_url(id))
            .header(CSRF_HEADER, self.csrf_token());

        let response = self
            .with_cookies(request)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(())
    }
}
