use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    Domain(domain::Error),
    Unauthenticated(&'static str),
}

impl From<domain::Error> for ApiError {
    fn from(e: domain::Error) -> Self {
        Self::Domain(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use domain::Error;

        let (status, message) = match self {
            Self::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg.to_string()),
            Self::Domain(e) => match e {
                Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
                Error::Authorization(msg) => (StatusCode::FORBIDDEN, msg),
                Error::Storage(e) => {
                    error!("Storage failure: {:?}", e);
                    let body = json!({
                        "status": "error",
                        "message": "an internal server error occurred",
                    });
                    return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
                }
                validation => (StatusCode::BAD_REQUEST, translate(&validation)),
            },
        };

        let body = json!({ "status": "fail", "message": message });
        (status, Json(body)).into_response()
    }
}

fn translate(e: &domain::Error) -> String {
    use domain::Error::{InvalidTypeProperty, MissingProperty};

    let msg = match e {
        MissingProperty { entity: "ADD_THREAD" } => {
            "cannot create a new thread because a required property is missing"
        }
        InvalidTypeProperty { entity: "ADD_THREAD" } => {
            "cannot create a new thread because a property has the wrong data type"
        }
        MissingProperty { entity: "ADD_COMMENT" } => {
            "cannot add the comment because a required property is missing"
        }
        InvalidTypeProperty { entity: "ADD_COMMENT" } => {
            "cannot add the comment because a property has the wrong data type"
        }
        _ => return e.to_string(),
    };
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Error;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (Error::MissingProperty { entity: "ADD_THREAD" }, StatusCode::BAD_REQUEST),
            (Error::InvalidTypeProperty { entity: "ADD_COMMENT" }, StatusCode::BAD_REQUEST),
            (Error::not_found("thread not found"), StatusCode::NOT_FOUND),
            (Error::authorization("nope"), StatusCode::FORBIDDEN),
            (Error::Storage(anyhow::anyhow!("db down")), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
        assert_eq!(
            ApiError::Unauthenticated("Missing authentication")
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_translate() {
        assert_eq!(
            translate(&Error::MissingProperty { entity: "ADD_COMMENT" }),
            "cannot add the comment because a required property is missing"
        );
        assert_eq!(
            translate(&Error::InvalidTypeProperty { entity: "ADDED_THREAD" }),
            "ADDED_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION"
        );
    }
}
