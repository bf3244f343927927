// Request context: who is calling.
//
// Resolution order
// - first entry of x-forwarded-for
// - x-real-ip
// - the direct connection address (ConnectInfo)
// - 127.0.0.1
//
// Header values that are empty, too long or contain characters outside an ip/host
// alphabet are skipped.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use std::convert::Infallible;
use std::net::SocketAddr;

pub const LOCALHOST: &str = "127.0.0.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl ClientIp {
    pub fn localhost() -> Self {
        Self(LOCALHOST.to_string())
    }
}

fn sanitized(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() || value.len() > 64 {
        return None;
    }
    value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b':' || b == b'-')
        .then(|| value.to_string())
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get("x-forwarded-for")?.to_str().ok()?;
    sanitized(raw.split(',').next()?)
}

fn real_ip(headers: &HeaderMap) -> Option<String> {
    sanitized(headers.get("x-real-ip")?.to_str().ok()?)
}

pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    forwarded_for(headers)
        .or_else(|| real_ip(headers))
        .or_else(|| peer.map(|address| address.ip().to_string()))
        .unwrap_or_else(|| LOCALHOST.to_string())
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(address)| *address);
        Ok(ClientIp(resolve_client_ip(&parts.headers, peer)))
    }
}
