//! Request and response interception around every transport call.
//!
//! The request side is a hook that currently does nothing. The response side
//! never looks at status codes: a response that reached us is handed on as-is
//! and `status::check_status` decides what it means. Only a missing response
//! is turned into an error here.

use log::error;

use crate::error::{ApiError, TransportError, TransportErrorKind};
use crate::http::{HttpRequest, HttpResponse};

/// Rewrites an outgoing request before it hits the transport.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: HttpRequest) -> HttpRequest;
}

/// Identity interceptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl RequestInterceptor for Passthrough {
    fn intercept(&self, request: HttpRequest) -> HttpRequest {
        request
    }
}

pub fn intercept_response(
    result: Result<HttpResponse, TransportError>,
) -> Result<HttpResponse, ApiError> {
    match result {
        Ok(response) => Ok(response),
        Err(err) => {
            match err.kind {
                TransportErrorKind::Network => {
                    error!("network error - server is probably down: {}", err.message)
                }
                TransportErrorKind::Unknown => error!("unknown error: {}", err.message),
            }
            Err(ApiError::Transport(err))
        }
    }
}
