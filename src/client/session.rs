use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Result, VhcError};

const SESSION_HEADER: &str = "vmware-api-session-id";

/// Connection parameters for one vCenter endpoint.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Accept self-signed certificates (common on standalone vCenter setups)
    pub insecure: bool,
    pub timeout_secs: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 443,
            username: String::new(),
            password: String::new(),
            insecure: false,
            timeout_secs: 30,
        }
    }
}

/// An authenticated session against the vCenter Automation API.
///
/// Obtained with [`VsphereSession::connect`]; the session token is sent on
/// every request and invalidated again by [`VsphereSession::logout`].
pub struct VsphereSession {
    http: Client,
    base: Url,
    token: String,
}

impl VsphereSession {
    /// Authenticate against the endpoint and return a live session.
    pub fn connect(options: &SessionOptions) -> Result<Self> {
        let base = Url::parse(&format!("https://{}:{}/", options.host, options.port))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .danger_accept_invalid_certs(options.insecure)
            .build()?;

        let url = base.join("api/session")?;
        debug!("creating session at {}", url);

        let response = http
            .post(url)
            .basic_auth(&options.username, Some(&options.password))
            .send()?;

        if !response.status().is_success() {
            return Err(VhcError::session(format!(
                "authentication failed with status {}",
                response.status()
            )));
        }

        // The session endpoint returns the bare token as a JSON string.
        let token: String = response.json()?;

        Ok(Self { http, base, token })
    }

    /// GET a JSON document relative to the API root.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base.join(path)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(SESSION_HEADER, &self.token)
            .send()?;

        if !response.status().is_success() {
            return Err(VhcError::api(format!(
                "endpoint returned status {} for {}",
                response.status(),
                path
            )));
        }

        Ok(response.json()?)
    }

    /// Invalidate the session token. Best-effort: a failed logout only
    /// shortens the token's idle lifetime on the server side.
    pub fn logout(self) {
        let url = match self.base.join("api/session") {
            Ok(url) => url,
            Err(_) => return,
        };
        let result = self
            .http
            .delete(url)
            .header(SESSION_HEADER, &self.token)
            .send();
        if let Err(err) = result {
            warn!("session logout failed: {}", err);
        }
    }
}
