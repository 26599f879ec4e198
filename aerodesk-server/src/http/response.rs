//! Presentation -> HTTP response
//!
//! | outcome                         | status |
//! |---------------------------------|--------|
//! | list, detail, search, dashboard | 200    |
//! | form re-render                  | 422    |
//! | redirect, success               | 303    |
//! | redirect, constraint violation  | 409    |
//! | redirect, not found             | 404    |
//! | redirect, validation            | 400    |
//! | redirect, login                 | 401    |
//! | redirect, unknown               | 500    |

use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::orchestrator::{Failure, Level, Presentation};

pub fn status_of(presentation: &Presentation) -> StatusCode {
    match presentation {
        Presentation::RenderList { .. }
        | Presentation::RenderDetail { .. }
        | Presentation::SearchResults { .. }
        | Presentation::Dashboard(_) => StatusCode::OK,
        Presentation::RenderForm { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        Presentation::RedirectWithMessage { level, failure, .. } => match (level, failure) {
            (Level::Success, _) | (Level::Error, None) => StatusCode::SEE_OTHER,
            (Level::Error, Some(failure)) => match failure {
                Failure::ForeignKeyViolation { .. } | Failure::UniqueViolation { .. } => {
                    StatusCode::CONFLICT
                }
                Failure::NotFound => StatusCode::NOT_FOUND,
                Failure::Validation { .. } => StatusCode::BAD_REQUEST,
                Failure::Unauthenticated => StatusCode::UNAUTHORIZED,
                Failure::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
            },
        },
    }
}

impl IntoResponse for Presentation {
    fn into_response(self) -> Response {
        let status = status_of(&self);
        let location = match &self {
            Self::RedirectWithMessage { location, .. } => HeaderValue::from_str(location).ok(),
            _ => None,
        };

        let mut response = (status, Json(self)).into_response();
        if let Some(location) = location {
            response.headers_mut().insert(LOCATION, location);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(failure: Failure) -> Presentation {
        Presentation::RedirectWithMessage {
            level: Level::Error,
            text: "x".into(),
            location: "/flight/".into(),
            failure: Some(failure),
        }
    }

    #[test]
    fn success_redirect_is_see_other_with_location() {
        let response = Presentation::RedirectWithMessage {
            level: Level::Success,
            text: "Flight added successfully!".into(),
            location: "/flight/".into(),
            failure: None,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/flight/");
    }

    #[test]
    fn failures_map_to_statuses() {
        assert_eq!(
            status_of(&redirect(Failure::ForeignKeyViolation {
                column: None,
                target: Some("flight")
            })),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(&redirect(Failure::UniqueViolation { column: Some("bookingid") })),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(&redirect(Failure::NotFound)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(&redirect(Failure::Unauthenticated)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(&redirect(Failure::Unknown)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn form_is_unprocessable() {
        let form = Presentation::RenderForm {
            entity: "passenger",
            failure: Failure::Validation { fields: vec!["lastname".into()] },
            message: "Please correct the following: lastname is required".into(),
            errors: Vec::new(),
            values: Default::default(),
        };
        assert_eq!(status_of(&form), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
