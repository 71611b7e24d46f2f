use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Not found: {0}")]
    DataNotFound(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl AppError {
    /// Classifies a failed request against `service` ("League client", "Riot API", ...).
    pub fn from_ureq(service: &str, err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(401 | 403, _) => AppError::AuthError(format!(
                "{} rejected the credentials, check RIOT_KEY or restart the client",
                service
            )),
            ureq::Error::Status(404, resp) => {
                AppError::DataNotFound(format!("{} has no resource at {}", service, resp.get_url()))
            }
            ureq::Error::Status(code, resp) => AppError::HttpError(format!(
                "{} returned {} {}",
                service,
                code,
                resp.status_text()
            )),
            ureq::Error::Transport(t) => {
                AppError::ServiceUnavailable(format!("could not reach {}: {}", service, t))
            }
        }
    }
}
