//! 회원가입/로그인/로그아웃 핸들러
//!
//! 이 경로의 입력 오류는 400 페이지 대신 플래시 메시지와 함께 폼으로 되돌립니다.

use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::{LoginRequest, SignupRequest};
use crate::domain::models::AuthenticatedUser;
use crate::handlers::redirect;
use crate::middlewares::format_validation_errors;
use crate::session::RequestContext;
use crate::views::{self, html, PageContext};

/// `GET /signup`
pub async fn signup_form(ctx: RequestContext) -> Result<HttpResponse, AppError> {
    let page = PageContext::from_session(&ctx);
    Ok(html(views::auth::signup_form(&page)))
}

/// `POST /signup`
///
/// 가입에 성공하면 곧바로 로그인 상태가 됩니다.
pub async fn signup(
    state: web::Data<AppState>,
    ctx: RequestContext,
    form: web::Form<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let request = form.into_inner();

    if let Err(errors) = request.validate() {
        ctx.flash_error(format_validation_errors(&errors))?;
        return Ok(redirect("/signup"));
    }

    let user = match state.users.register(request).await {
        Ok(user) => user,
        Err(AppError::ConflictError(message)) => {
            ctx.flash_error(message)?;
            return Ok(redirect("/signup"));
        }
        Err(e) => return Err(e),
    };

    ctx.login(&AuthenticatedUser::try_from(&user)?)?;
    ctx.flash_success("Welcome to Wanderlust!")?;
    Ok(redirect("/listings"))
}

/// `GET /login`
pub async fn login_form(ctx: RequestContext) -> Result<HttpResponse, AppError> {
    let page = PageContext::from_session(&ctx);
    Ok(html(views::auth::login_form(&page)))
}

/// `POST /login`
///
/// 로그인 전에 보호된 페이지에서 넘어왔다면 그 경로로 돌아갑니다.
pub async fn login(
    state: web::Data<AppState>,
    ctx: RequestContext,
    form: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = form.into_inner();

    if let Err(errors) = request.validate() {
        ctx.flash_error(format_validation_errors(&errors))?;
        return Ok(redirect("/login"));
    }

    let user = match state.users.authenticate(&request.username, &request.password).await {
        Ok(user) => user,
        Err(AppError::AuthenticationError(message)) => {
            log::debug!("로그인 실패: {}", request.username);
            ctx.flash_error(message)?;
            return Ok(redirect("/login"));
        }
        Err(e) => return Err(e),
    };

    ctx.login(&AuthenticatedUser::try_from(&user)?)?;
    ctx.flash_success("Welcome back to Wanderlust!")?;

    let destination = ctx.take_return_to().unwrap_or_else(|| "/listings".to_string());
    Ok(redirect(&destination))
}

/// `GET /logout`
pub async fn logout(ctx: RequestContext) -> Result<HttpResponse, AppError> {
    ctx.logout();
    ctx.flash_success("You are logged out!")?;
    Ok(redirect("/listings"))
}
