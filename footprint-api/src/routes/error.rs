use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use emissions::{ActivityError, ProfileError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidQuantity,
    UnknownActivityType,
    UnknownFuelType,
    InvalidPassengers,
    TargetOutOfRange,
    ActivityNotFound,
    InvalidUsage,
    NotImplemented,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

use crate::domain::{InsightError, TrackerError};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<ErrorCode>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_IMPLEMENTED, message).with_code(ErrorCode::NotImplemented)
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::InvalidActivity(ActivityError::InvalidQuantity(_)) => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::InvalidQuantity)
            }
            TrackerError::InvalidActivity(ActivityError::UnknownActivityType { .. }) => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::UnknownActivityType)
            }
            TrackerError::InvalidActivity(ActivityError::UnknownFuelType(_)) => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::UnknownFuelType)
            }
            TrackerError::InvalidActivity(ActivityError::InvalidPassengers(_)) => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::InvalidPassengers)
            }
            TrackerError::InvalidTarget(ProfileError::TargetOutOfRange(_)) => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::TargetOutOfRange)
            }
            TrackerError::ActivityNotFound(_) => {
                Self::not_found(err.to_string()).with_code(ErrorCode::ActivityNotFound)
            }
        }
    }
}

impl From<InsightError> for ApiError {
    fn from(err: InsightError) -> Self {
        tracing::error!("Footprint insight failed: {}", err);
        Self::internal(err.to_string()).with_code(ErrorCode::InvalidUsage)
    }
}

#[cfg(test)]
mod tests {
    use emissions::{ActivityCategory, ActivityId};

    use super::*;

    #[test]
    fn tracker_errors_map_to_statuses() {
        let invalid: ApiError = TrackerError::from(ActivityError::InvalidQuantity(-1.0)).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.code(), Some(ErrorCode::InvalidQuantity));

        let unknown: ApiError = TrackerError::from(ActivityError::UnknownActivityType {
            category: ActivityCategory::Home,
            kind: "sauna".to_string(),
        })
        .into();
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
        assert_eq!(unknown.code(), Some(ErrorCode::UnknownActivityType));

        let fuel: ApiError =
            TrackerError::from(ActivityError::UnknownFuelType("hydrogen".to_string())).into();
        assert_eq!(fuel.status(), StatusCode::BAD_REQUEST);
        assert_eq!(fuel.code(), Some(ErrorCode::UnknownFuelType));

        let passengers: ApiError = TrackerError::from(ActivityError::InvalidPassengers(0.0)).into();
        assert_eq!(passengers.status(), StatusCode::BAD_REQUEST);
        assert_eq!(passengers.code(), Some(ErrorCode::InvalidPassengers));

        let missing: ApiError = TrackerError::ActivityNotFound(ActivityId::new("9")).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn insight_errors_are_internal() {
        let err: ApiError = InsightError::InvalidUsage.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_uses_screaming_snake_codes() {
        let body = ErrorBody {
            error: "nope".to_string(),
            code: Some(ErrorCode::ActivityNotFound),
        };
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["error"], "nope");
        assert_eq!(json["code"], "ACTIVITY_NOT_FOUND");
    }
}
