//! The one HTTP client the CLI talks to the API with.
//!
//! Built once in `main` from `Config` and handed to `ApiService`. Never
//! reconfigured afterwards; ureq's agent is safe to share between calls.

use poll_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

use crate::config::Config;

#[derive(Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for HttpClient {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let body = req.body.as_deref().map(str::as_bytes);
        let result = match (req.method, body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self.agent.post(&req.path).content_type("application/json").send(body),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Patch, Some(body)) => self.agent.patch(&req.path).content_type("application/json").send(body),
            (HttpMethod::Patch, None) => self.agent.patch(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self.agent.put(&req.path).content_type("application/json").send(body),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(classify)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response.body_mut().read_to_string().map_err(classify)?;

        Ok(HttpResponse { status, headers, body })
    }
}

/// Sort a ureq failure into network trouble or anything else.
fn classify(err: ureq::Error) -> TransportError {
    let message = err.to_string();
    match err {
        ureq::Error::Io(_) | ureq::Error::Timeout(_) | ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
            TransportError::network(message)
        }
        _ => TransportError::unknown(message),
    }
}

#[cfg(test)]
mod tests {
    use poll_core::TransportErrorKind;

    use super::*;

    #[test]
    fn connection_failures_are_network_errors() {
        assert_eq!(classify(ureq::Error::ConnectionFailed).kind, TransportErrorKind::Network);
        assert_eq!(classify(ureq::Error::HostNotFound).kind, TransportErrorKind::Network);
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert_eq!(classify(ureq::Error::Io(io)).kind, TransportErrorKind::Network);
    }

    #[test]
    fn other_failures_are_unknown() {
        let err = classify(ureq::Error::BadUri("nope".to_string()));
        assert_eq!(err.kind, TransportErrorKind::Unknown);
        assert!(!err.message.is_empty());
    }
}
