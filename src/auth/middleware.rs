use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::Header,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::require_admin,
    errors::{AppError, AppResult},
    models::domain::User,
};

/// Reads the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token<T: HttpMessage>(req: &T) -> AppResult<String> {
    let authorization = Authorization::<Bearer>::parse(req).map_err(|_| {
        AppError::Unauthenticated("Missing or malformed bearer token".to_string())
    })?;

    Ok(authorization.into_scheme().token().to_string())
}

fn app_state(data: Option<&web::Data<AppState>>) -> AppResult<web::Data<AppState>> {
    data.cloned()
        .ok_or_else(|| AppError::InternalError("Application state not configured".to_string()))
}

/// Resolves the bearer token to a `User` for every request in the wrapped
/// scope and stores it in the request extensions.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let resolved = match app_state(req.app_data::<web::Data<AppState>>()) {
                Ok(state) => match bearer_token(&req) {
                    Ok(token) => state.auth_service.resolve_user(&token).await,
                    Err(e) => Err(e),
                },
                Err(e) => Err(e),
            };

            match resolved {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => Ok(req.error_response(e).map_into_right_body()),
            }
        })
    }
}

/// Extractor for the caller's account. Uses the user stored by
/// `AuthMiddleware` when present and resolves the bearer token otherwise.
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(user) = req.extensions().get::<User>().cloned() {
            return Box::pin(ready(Ok(AuthenticatedUser(user))));
        }

        let state = app_state(req.app_data::<web::Data<AppState>>());
        let token = bearer_token(req);

        Box::pin(async move {
            let state = state?;
            let user = state.auth_service.resolve_user(&token?).await?;
            Ok(AuthenticatedUser(user))
        })
    }
}

/// Same as `AuthenticatedUser` but rejects non-admin accounts with `Forbidden`.
pub struct AdminUser(pub User);

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let AuthenticatedUser(user) = authenticated.await?;
            require_admin(&user)?;
            Ok(AdminUser(user))
        })
    }
}
