use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Port advertised in redirect URLs when the HTTPS redirect is enabled.
    pub ssl_port: u16,
    /// Redirect plain-HTTP traffic to the SSL port. Off by default; TLS is
    /// expected to be terminated by the surrounding infrastructure.
    pub https_redirect: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                ssl_port: env::var("SSL_PORT")
                    .unwrap_or_else(|_| "8443".to_string())
                    .parse()?,
                https_redirect: env::var("HTTPS_REDIRECT")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()?,
            },
        })
    }
}
