use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::accounts::application::domain::{Actor, User};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller behind a live session cookie.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub session_key: String,
    pub user: User,
}

impl AuthenticatedUser {
    pub fn actor(&self) -> Actor {
        self.user.actor()
    }
}

/// Like [`AuthenticatedUser`] but never rejects: anonymous callers get `None`.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl OptionalUser {
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

async fn resolve_session(req: &HttpRequest) -> Result<Option<AuthenticatedUser>, ActixError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

    let Some(cookie) = req.cookie(&state.session_cookie.name) else {
        return Ok(None);
    };

    match state.session_resolver.resolve(cookie.value()).await {
        Ok(resolved) => Ok(resolved.map(|session| AuthenticatedUser {
            session_key: session.session_key,
            user: session.user,
        })),
        Err(e) => {
            tracing::error!(error = %e, "Session lookup failed");
            Err(create_api_error(ApiResponse::internal_error()))
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            resolve_session(&req).await?.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "NOT_AUTHENTICATED",
                    "Authentication credentials were not provided.",
                ))
            })
        })
    }
}

impl FromRequest for OptionalUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move { resolve_session(&req).await.map(OptionalUser) })
    }
}
