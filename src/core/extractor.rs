use std::net::{IpAddr, SocketAddr};

use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        ConnectInfo, FromRequest, FromRequestParts, Path, Request,
    },
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Path extractor whose rejections go through [`AppError`]
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(path_rejection_message(&rejection))),
        }
    }
}

fn path_rejection_message(rejection: &PathRejection) -> String {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => {
            format!("Invalid path parameter: {}", err.body_text())
        }
        _ => "Invalid path parameters".to_string(),
    }
}

/// Where a request came from, as far as the server can tell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl<S> FromRequestParts<S> for ClientInfo
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(Self {
            ip: forwarded_ip(&parts.headers).or(peer),
            user_agent: header_text(&parts.headers, header::USER_AGENT.as_str()),
        })
    }
}

/// First hop of `X-Forwarded-For`, else `X-Real-IP`. Values that are not an
/// IP address are ignored.
fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    header_text(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next().and_then(parse_ip))
        .or_else(|| header_text(headers, "x-real-ip").and_then(|v| parse_ip(&v)))
}

fn parse_ip(raw: &str) -> Option<String> {
    raw.trim().parse::<IpAddr>().ok().map(|ip| ip.to_string())
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn client_info(request: axum::http::Request<()>) -> ClientInfo {
        let (mut parts, _) = request.into_parts();
        match ClientInfo::from_request_parts(&mut parts, &()).await {
            Ok(info) => info,
            Err(never) => match never {},
        }
    }

    #[tokio::test]
    async fn test_client_info_prefers_first_forwarded_hop() {
        let request = axum::http::Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .header("x-real-ip", "198.51.100.2")
            .header("user-agent", "curl/8.0")
            .body(())
            .unwrap();

        let info = client_info(request).await;
        assert_eq!(info.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(info.user_agent.as_deref(), Some("curl/8.0"));
    }

    #[tokio::test]
    async fn test_client_info_falls_back_to_real_ip() {
        let request = axum::http::Request::builder()
            .header("x-real-ip", "198.51.100.2")
            .body(())
            .unwrap();

        assert_eq!(client_info(request).await.ip.as_deref(), Some("198.51.100.2"));
    }

    #[tokio::test]
    async fn test_client_info_uses_socket_peer() {
        let mut request = axum::http::Request::new(());
        let addr: SocketAddr = "192.0.2.10:5500".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        assert_eq!(client_info(request).await.ip.as_deref(), Some("192.0.2.10"));
    }

    #[tokio::test]
    async fn test_client_info_ignores_header_that_is_not_an_address() {
        let mut request = axum::http::Request::builder()
            .header("x-forwarded-for", "x".repeat(100))
            .header("x-real-ip", "unknown")
            .body(())
            .unwrap();
        let addr: SocketAddr = "192.0.2.10:5500".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        assert_eq!(client_info(request).await.ip.as_deref(), Some("192.0.2.10"));
    }

    #[tokio::test]
    async fn test_client_info_accepts_ipv6_hop() {
        let request = axum::http::Request::builder()
            .header("x-forwarded-for", " 2001:db8::1 , 10.0.0.1")
            .body(())
            .unwrap();

        assert_eq!(client_info(request).await.ip.as_deref(), Some("2001:db8::1"));
    }

    #[tokio::test]
    async fn test_client_info_without_any_source_is_empty() {
        let info = client_info(axum::http::Request::new(())).await;
        assert_eq!(info, ClientInfo::default());
    }
}
