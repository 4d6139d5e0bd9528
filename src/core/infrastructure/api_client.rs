//! Internal HTTP client that handles authentication and automatic ticket refresh.

use crate::{
    auth::application::service::login_service::LoginService,
    config::{RateLimitConfig, ValidationConfig},
    core::domain::{
        error::{ProxmoxError, ProxmoxResult, ValidationError},
        model::{
            api_response::ApiResponse, proxmox_auth::ProxmoxAuth,
            proxmox_connection::ProxmoxConnection,
        },
        value_object::ProxmoxCSRFToken,
    },
};
use governor::{DefaultDirectRateLimiter, Quota};
use log::{debug, warn};
use reqwest::{Client, Method, StatusCode};
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Internal HTTP client that manages authentication and provides methods to call the Proxmox API.
///
/// This client automatically adds the necessary authentication headers (`PVEAuthCookie` and
/// `CSRFPreventionToken`) to each request. If a request receives a `401 Unauthorized` response,
/// it attempts to refresh the ticket once using the stored credentials and retries the request.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: Arc<ProxmoxConnection>,
    auth: Arc<RwLock<Option<ProxmoxAuth>>>,
    config: Arc<ValidationConfig>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

fn build_rate_limiter(rl: RateLimitConfig) -> ProxmoxResult<DefaultDirectRateLimiter> {
    let invalid = |field: &str| ValidationError::Field {
        field: field.to_string(),
        message: "must be greater than zero".to_string(),
    };
    let rate = NonZeroU32::new(rl.requests_per_second).ok_or_else(|| invalid("requests_per_second"))?;
    let burst = NonZeroU32::new(rl.burst_size).ok_or_else(|| invalid("burst_size"))?;
    Ok(DefaultDirectRateLimiter::direct(
        Quota::per_second(rate).allow_burst(burst),
    ))
}

impl ApiClient {
    /// Creates a new `ApiClient`. The client starts unauthenticated.
    ///
    /// # Errors
    /// Returns `ProxmoxError::Connection` if the HTTP client cannot be built, or
    /// `ProxmoxError::Validation` if the rate limit is zero.
    pub fn new(connection: ProxmoxConnection, config: ValidationConfig) -> ProxmoxResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accept_invalid_certs())
            .build()
            .map_err(|e| ProxmoxError::Connection(e.to_string()))?;

        let rate_limiter = config
            .rate_limit
            .map(build_rate_limiter)
            .transpose()?
            .map(Arc::new);

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            auth: Arc::new(RwLock::new(None)),
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &ProxmoxConnection {
        &self.connection
    }

    /// Sets the authentication state (used after a successful login).
    pub async fn set_auth(&self, auth: ProxmoxAuth) {
        let mut lock = self.auth.write().await;
        *lock = Some(auth);
    }

    /// Returns the current authentication state, if any.
    pub async fn auth(&self) -> Option<ProxmoxAuth> {
        self.auth.read().await.clone()
    }

    /// Returns `true` if there is a valid (non-expired) ticket.
    pub async fn is_authenticated(&self) -> bool {
        let lock = self.auth.read().await;
        lock.as_ref()
            .map(|a| !a.ticket().is_expired(self.config.ticket_lifetime))
            .unwrap_or(false)
    }

    /// Performs a fresh login using the stored credentials to obtain a new ticket.
    pub async fn login(&self) -> ProxmoxResult<()> {
        let auth = LoginService::new()
            .execute(&self.http_client, &self.connection)
            .await?;
        self.set_auth(auth).await;
        Ok(())
    }

    /// Performs an authenticated GET request and unwraps the `data` envelope.
    ///
    /// # Errors
    /// Returns `ProxmoxError` if the request fails, authentication cannot be refreshed,
    /// or the response cannot be parsed into `T`.
    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> ProxmoxResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response: ApiResponse<T> = self
            .execute_request(Method::GET, path, query, None::<&()>)
            .await?;
        Ok(response.data)
    }

    /// Performs an authenticated POST request with a JSON body and unwraps the `data` envelope.
    ///
    /// # Errors
    /// Returns `ProxmoxError` if the request fails, authentication cannot be refreshed,
    /// or the response cannot be parsed into `T`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ProxmoxResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response: ApiResponse<T> = self
            .execute_request(Method::POST, path, &[], Some(body))
            .await?;
        Ok(response.data)
    }

    /// Core request execution method. It ensures authentication, sends the request,
    /// handles 401 by refreshing once, and parses the response.
    async fn execute_request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ProxmoxResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        self.ensure_authenticated().await?;

        let response = self.send(method.clone(), path, query, body).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("ticket rejected for {} {}, logging in again", method, path);
            self.login().await?;
            // Retry exactly once
            let retried = self.send(method, path, query, body).await?;
            return Self::parse(retried, " after refresh").await;
        }

        Self::parse(response, "").await
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ProxmoxResult<reqwest::Response>
    where
        B: serde::Serialize,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.connection.url().endpoint(path, query);
        debug!("{} {}", method, url);

        let mut req_builder = self.http_client.request(method, url);

        {
            let auth_guard = self.auth.read().await;
            if let Some(auth) = auth_guard.as_ref() {
                req_builder = req_builder.header("Cookie", auth.ticket().as_cookie_header());
                if let Some(csrf) = auth.csrf_token() {
                    req_builder = req_builder.header(ProxmoxCSRFToken::HEADER, csrf.as_str());
                }
            }
        }

        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        req_builder
            .send()
            .await
            .map_err(|e| ProxmoxError::Connection(format!("HTTP request failed: {}", e)))
    }

    async fn parse<T>(response: reqwest::Response, stage: &str) -> ProxmoxResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ProxmoxError::Authentication(format!(
                "Request unauthorized{}",
                stage
            )));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(ProxmoxError::Connection(format!(
                "API error{} ({}): {}",
                stage, status, error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            ProxmoxError::Connection(format!("Failed to parse response{}: {}", stage, e))
        })
    }

    /// Ensures that we have a valid (non-expired) ticket. If not, logs in again.
    async fn ensure_authenticated(&self) -> ProxmoxResult<()> {
        let need_refresh = {
            let auth_guard = self.auth.read().await;
            match auth_guard.as_ref() {
                Some(auth) => auth.ticket().is_expired(self.config.ticket_lifetime),
                None => true,
            }
        };

        if need_refresh {
            debug!("no valid ticket, logging in as {}", self.connection.login_name());
            self.login().await?;
        }
        Ok(())
    }
}
