//! 로그인 필수 미들웨어
//!
//! 보호된 라우트 앞에서 세션의 로그인 사용자를 확인합니다.
//! 확인에 실패하면 하위 핸들러와 폼 검증은 실행되지 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::LoginRequiredService;

/// 로그인 요구 시 표시되는 플래시 메시지
pub const LOGIN_REQUIRED_MESSAGE: &str = "You must be logged in to do that!";

/// 로그인 필수 미들웨어
///
/// 세션 미들웨어 안쪽에서 실행되어야 합니다.
///
/// ```rust,ignore
/// cfg.route("/listings/{id}/edit", web::get().to(handlers::listings::edit_form).wrap(LoginRequired));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginRequired;

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for LoginRequired
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = LoginRequiredService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoginRequiredService {
            service: Rc::new(service),
        }))
    }
}
