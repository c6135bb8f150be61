use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;

use crate::error::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// POST body decoded from JSON or a urlencoded form.
///
/// A request without a `Content-Type` is read as `{}`, so payloads whose
/// fields are all optional still decode. JSON goes through `JsonConfig` and
/// forms through `FormConfig`, so their error handlers shape the 400s.
#[derive(Debug)]
pub struct Body<T>(pub T);

impl<T> Body<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Body<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match req.content_type() {
            "" => {
                let decoded = serde_json::from_slice::<T>(b"{}").map(Body).map_err(|e| {
                    actix_web::Error::from(AppError::invalid("INVALID_BODY", e.to_string()))
                });
                ready(decoded).boxed_local()
            }
            FORM_CONTENT_TYPE => web::Form::<T>::from_request(req, payload)
                .map(|res| res.map(|form| Body(form.into_inner())))
                .boxed_local(),
            _ => web::Json::<T>::from_request(req, payload)
                .map(|res| res.map(|json| Body(json.into_inner())))
                .boxed_local(),
        }
    }
}
