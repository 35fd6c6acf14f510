//! Status checker: the only place HTTP status codes are interpreted.

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Pass a `2xx` response through untouched; turn anything else into
/// `ApiError::HttpStatus` carrying the raw body.
pub fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(response);
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body,
    })
}
