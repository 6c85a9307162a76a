//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use timesync_domain::TimeSyncError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TimeSyncError);

impl From<InfraError> for TimeSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

/// Maps an external error onto the domain error.
trait IntoTimeSyncError {
    fn into_timesync(self) -> TimeSyncError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TimeSyncError */
/* -------------------------------------------------------------------------- */

impl IntoTimeSyncError for HttpError {
    fn into_timesync(self) -> TimeSyncError {
        if self.is_timeout() {
            return TimeSyncError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return TimeSyncError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return TimeSyncError::Upstream(format!("undecodable HTTP response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => TimeSyncError::Auth(message),
                404 => TimeSyncError::NotFound(message),
                429 => TimeSyncError::Network(message),
                400..=499 => TimeSyncError::InvalidInput(message),
                _ => TimeSyncError::Network(message),
            };
        }

        if self.is_builder() {
            return TimeSyncError::Internal(format!("invalid HTTP request: {self}"));
        }

        TimeSyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_timesync())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
