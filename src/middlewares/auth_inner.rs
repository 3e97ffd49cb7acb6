//! LoginRequired 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::{header, Method};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::middlewares::auth_middleware::LOGIN_REQUIRED_MESSAGE;
use crate::session::RequestContext;

/// 실제 로그인 확인을 수행하는 서비스
pub struct LoginRequiredService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoginRequiredService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let ctx = RequestContext::from_service_request(&req);

            match ctx.user() {
                Some(user) => {
                    log::debug!("인증 성공: 사용자 {}", user.username);
                    // 사용자 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(user);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                None => {
                    if req.method() == Method::GET {
                        let requested = req.uri()
                            .path_and_query()
                            .map(|path| path.as_str().to_string())
                            .unwrap_or_else(|| req.path().to_string());
                        ctx.set_return_to(requested)?;
                    }
                    ctx.flash_error(LOGIN_REQUIRED_MESSAGE)?;

                    log::debug!("로그인 필요: {} {}", req.method(), req.path());
                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, "/login"))
                        .finish();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    Ok(res)
                }
            }
        })
    }
}
