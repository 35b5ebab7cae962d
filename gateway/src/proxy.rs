use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, HeaderName, header},
    response::Response,
};
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::{error::GatewayError, route::RouteTable};

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

fn forwardable(headers: &HeaderMap, extra: &[HeaderName]) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !HOP_BY_HOP.contains(name) && !extra.contains(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

#[derive(Debug, Clone)]
pub struct Proxy {
    client: Client,
    routes: RouteTable,
}

impl Proxy {
    pub fn new(routes: RouteTable) -> Self {
        Self {
            client: Client::new(),
            routes,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Relays `request` to the upstream owning its path and returns the
    /// upstream answer unchanged apart from hop-by-hop headers.
    pub async fn forward(&self, request: Request) -> Result<Response, GatewayError> {
        let (parts, body) = request.into_parts();
        let path = parts.uri.path();

        let (route, remainder) = self
            .routes
            .resolve(path)
            .ok_or_else(|| GatewayError::NoRoute(path.to_string()))?;
        let target = route.target(remainder, parts.uri.query());

        debug!(route = %route.name, %target, "Forwarding {} {}", parts.method, path);

        let body: Bytes = to_bytes(body, MAX_BODY_BYTES).await?;
        let upstream = self
            .client
            .request(parts.method.clone(), &target)
            .headers(forwardable(
                &parts.headers,
                &[header::HOST, header::CONTENT_LENGTH],
            ))
            .body(body)
            .send()
            .await?;

        let status = upstream.status();
        let headers = forwardable(upstream.headers(), &[]);
        let body = upstream.bytes().await?;

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;

        Ok(response)
    }
}
