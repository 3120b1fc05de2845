//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and reading token cookies off responses. The client keeps no cookie jar
//! on purpose: the tests steer cookies explicitly so that rotation and
//! replay behavior stays observable.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use estate_api::server::{create_app, create_app_state};
use estate_common::{
    AppConfig, AppSettings, CookieConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, SmtpConfig, SnowflakeConfig, StorageConfig,
};
use reqwest::{header, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Directory this server stores uploaded images in
    pub upload_dir: PathBuf,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let upload_dir = PathBuf::from(&config.storage.upload_dir);

        let state = create_app_state(config)
            .await
            .map_err(|e| anyhow::anyhow!("App state error: {e}"))?;
        let app = create_app(state);

        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            upload_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with a Bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a Bearer token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a bodyless POST request with a Bearer token
    pub async fn post_auth_empty(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a bodyless POST request carrying a Cookie header
    pub async fn post_with_cookie(&self, path: &str, cookie: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(header::COOKIE, cookie)
            .send()
            .await?)
    }

    /// Make a GET request carrying a Cookie header
    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header(header::COOKIE, cookie)
            .send()
            .await?)
    }

    /// Make a multipart POST request with a Bearer token
    pub async fn post_multipart_auth(
        &self,
        path: &str,
        token: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .multipart(form)
            .send()
            .await?)
    }

    /// Make a DELETE request with a Bearer token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .delete(&url)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?)
    }
}

/// Create a test configuration
///
/// Only `DATABASE_URL` comes from the environment; everything else is fixed
/// so that the tests do not depend on a full deployment setup. The rate
/// limit is opened wide so concurrent tests are never throttled.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL not set"))?;

    Ok(AppConfig {
        app: AppSettings {
            name: "estate-server-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            access_secret: "integration-access-secret-0123456789".to_string(),
            refresh_secret: "integration-refresh-secret-0123456789".to_string(),
            access_token_expiry: 900,
            refresh_token_expiry: 604_800,
        },
        cookie: CookieConfig {
            domain: String::new(),
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        storage: StorageConfig {
            upload_dir: std::env::temp_dir()
                .join(format!("estate-uploads-{}", uuid::Uuid::new_v4()))
                .to_string_lossy()
                .into_owned(),
            max_file_size_mb: 10,
        },
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            port: 2525,
            username: String::new(),
            password: String::new(),
            from_address: "noreply@estate.test".to_string(),
        },
        snowflake: SnowflakeConfig { worker_id: 0 },
    })
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Read one cookie value off a response's Set-Cookie headers
pub fn cookie_value(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|raw| {
            let pair = raw.split(';').next()?;
            let (cookie_name, value) = pair.split_once('=')?;
            (cookie_name.trim() == name).then(|| value.to_string())
        })
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
