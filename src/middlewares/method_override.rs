//! HTTP 메서드 오버라이드 미들웨어
//!
//! HTML 폼은 GET/POST만 보낼 수 있으므로, 수정/삭제 폼은
//! `POST /listings/{id}?_method=PUT` 형태로 제출합니다.
//! 이 미들웨어는 라우팅 이전에 요청 메서드를 바꿔 줍니다.
//!
//! - POST 요청에만 적용됩니다.
//! - `PUT`, `PATCH`, `DELETE`(대소문자 무관) 외의 값은 무시합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web, Error, Result,
};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// 쿼리 문자열의 `_method` 값을 해석합니다.
pub fn override_method(query_string: &str) -> Option<Method> {
    let query = web::Query::<OverrideQuery>::from_query(query_string).ok()?;

    match query.method.as_deref()?.trim().to_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MethodOverride;

impl<S, B> Transform<S, ServiceRequest> for MethodOverride
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MethodOverrideService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideService {
            service: Rc::new(service),
        }))
    }
}

pub struct MethodOverrideService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if req.method() == Method::POST {
            if let Some(method) = override_method(req.query_string()) {
                log::debug!("메서드 오버라이드: POST → {} {}", method, req.path());
                req.head_mut().method = method;
            }
        }

        let service = self.service.clone();
        Box::pin(async move { service.call(req).await })
    }
}
