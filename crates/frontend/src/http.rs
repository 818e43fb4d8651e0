//! gloo-net implementation of the HTTP transport.

use gloo_net::http::Request;
use project_client::{ApiRequest, ApiResponse, ClientError, HttpTransport, Method, Result};

/// Sends requests with the browser's fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn network(err: gloo_net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };

        if let Some(authorization) = request.authorization() {
            builder = builder.header("Authorization", &authorization);
        }
        if let Some(content_type) = request.body.content_type() {
            builder = builder.header("Content-Type", content_type);
        }

        let pending = match request.body.payload() {
            Some(payload) => builder.body(payload.to_string()).map_err(network)?,
            None => builder.build().map_err(network)?,
        };

        let response = pending.send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;

        Ok(ApiResponse::new(status, body))
    }
}
