use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_allowed_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let cors_allowed_origin =
            env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        Self::from_values(&bind_addr, &cors_allowed_origin)
    }

    pub fn from_values(bind_addr: &str, cors_allowed_origin: &str) -> Result<Self, String> {
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| format!("BIND_ADDR '{}' is not a socket address: {}", bind_addr, e))?;

        let cors_allowed_origin = cors_allowed_origin
            .parse::<HeaderValue>()
            .map_err(|e| format!("CORS_ALLOWED_ORIGIN is not a valid header value: {}", e))?;

        Ok(Self {
            bind_addr,
            cors_allowed_origin,
        })
    }
}
