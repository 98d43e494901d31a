// Response envelope and outcome mapping for external callers

use crate::error::Error;
use serde::Serialize;

/// Uniform envelope carried by every externally visible outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An envelope paired with the status code the transport should send.
///
/// This is the whole boundary contract: absent records map to 404,
/// conflicts to 409, anything else that fails to 500.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    pub status: u16,
    pub body: ApiResponse<T>,
}

impl<T> Reply<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            body: ApiResponse {
                success: true,
                data: Some(data),
                error: None,
                message: None,
            },
        }
    }

    pub fn ok_with(data: T, message: &str) -> Self {
        Self {
            status: 200,
            body: ApiResponse {
                success: true,
                data: Some(data),
                error: None,
                message: Some(message.to_string()),
            },
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: 201,
            body: ApiResponse {
                success: true,
                data: Some(data),
                error: None,
                message: Some("Resource created successfully".to_string()),
            },
        }
    }

    /// Absent-record outcome, e.g. `not_found("User")`
    pub fn not_found(resource: &str) -> Self {
        Self {
            status: 404,
            body: ApiResponse {
                success: false,
                data: None,
                error: Some(format!("{resource} not found")),
                message: None,
            },
        }
    }

    pub fn failure(err: &Error) -> Self {
        let status = if err.is_conflict() { 409 } else { 500 };
        Self {
            status,
            body: ApiResponse {
                success: false,
                data: None,
                error: Some(err.to_string()),
                message: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_ok_envelope_shape() {
        let reply = Reply::ok(vec!["a", "b"]);
        assert_eq!(reply.status, 200);

        let json = serde_json::to_string(&reply.body).unwrap();
        assert_eq!(json, r#"{"success":true,"data":["a","b"]}"#);
    }

    #[test]
    fn test_created_carries_message() {
        let reply = Reply::created("record");
        assert_eq!(reply.status, 201);
        assert_eq!(
            reply.body.message.as_deref(),
            Some("Resource created successfully")
        );
    }

    #[test]
    fn test_not_found_names_the_resource() {
        let reply = Reply::<()>::not_found("User");
        assert_eq!(reply.status, 404);
        assert!(!reply.body.success);
        assert_eq!(reply.body.error.as_deref(), Some("User not found"));
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err = Error::Conflict {
            message: "Email already exists".to_string(),
        };
        let reply = Reply::<()>::failure(&err);
        assert_eq!(reply.status, 409);
        assert_eq!(reply.body.error.as_deref(), Some("Email already exists"));
    }

    #[test]
    fn test_io_failure_maps_to_500() {
        let err = Error::ReadFailed {
            path: PathBuf::from("data/users.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let reply = Reply::<()>::failure(&err);
        assert_eq!(reply.status, 500);
        assert!(!reply.body.success);
    }
}
