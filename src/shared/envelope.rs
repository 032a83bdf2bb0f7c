//! Response Envelope
//!
//! Every JSON body produced by the API is wrapped as
//! `{ "status": "success" | "error", "message": ..., "data": ... }`.
//! Error bodies carry no `data` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Outcome marker serialized into the `status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Serialized envelope body
#[derive(Debug, Serialize)]
pub struct EnvelopeBody<T> {
    pub status: EnvelopeStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// An HTTP status paired with an envelope body
#[derive(Debug)]
pub struct Envelope<T> {
    status: StatusCode,
    body: EnvelopeBody<T>,
}

impl<T: Serialize> Envelope<T> {
    /// 200 OK with `data`
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::OK, message, data)
    }

    /// 201 Created with `data`
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::CREATED, message, data)
    }

    /// Success body with an arbitrary status code
    pub fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            body: EnvelopeBody {
                status: EnvelopeStatus::Success,
                message: message.into(),
                data: Some(data),
            },
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn body(&self) -> &EnvelopeBody<T> {
        &self.body
    }
}

impl Envelope<()> {
    /// Error body: `{ "status": "error", "message": ... }`
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: EnvelopeBody {
                status: EnvelopeStatus::Error,
                message: message.into(),
                data: None,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
