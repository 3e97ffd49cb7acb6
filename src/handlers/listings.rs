//! 숙소 핸들러
//!
//! 보호된 핸들러(`new_form`, `create`, `edit_form`, `update`, `delete`)는
//! 라우트에 `LoginRequired`가 걸려 있어 `AuthenticatedUser`를 바로 받습니다.

use actix_web::{web, HttpResponse};
use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::ListingRequest;
use crate::domain::models::AuthenticatedUser;
use crate::handlers::{redirect, redirect_if_forbidden};
use crate::middlewares::ValidatedForm;
use crate::session::RequestContext;
use crate::views::{self, html, PageContext};

pub const LISTING_DOES_NOT_EXIST: &str = "Listing you requested for does not exist!";

fn listing_path(raw_id: &str) -> String {
    format!("/listings/{}", raw_id.trim())
}

/// `GET /listings`
pub async fn index(state: web::Data<AppState>, ctx: RequestContext) -> Result<HttpResponse, AppError> {
    let listings = state.listings.list().await?;

    let page = PageContext::from_session(&ctx);
    Ok(html(views::listings::index(&page, &listings)))
}

/// `GET /listings/new`
pub async fn new_form(_user: AuthenticatedUser, ctx: RequestContext) -> Result<HttpResponse, AppError> {
    let page = PageContext::from_session(&ctx);
    Ok(html(views::listings::new_form(&page)))
}

/// `POST /listings`
pub async fn create(
    state: web::Data<AppState>,
    ctx: RequestContext,
    user: AuthenticatedUser,
    form: ValidatedForm<ListingRequest>,
) -> Result<HttpResponse, AppError> {
    let fields = form.into_inner().into_fields()?;
    state.listings.create(fields, &user).await?;

    ctx.flash_success("New Listing Created!")?;
    Ok(redirect("/listings"))
}

/// `GET /listings/{id}`
///
/// 형식이 잘못된 식별자는 400, 없는 숙소는 목록으로 리다이렉트합니다.
pub async fn show(
    state: web::Data<AppState>,
    ctx: RequestContext,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let Some(details) = state.listings.show(&path).await? else {
        ctx.flash_error(LISTING_DOES_NOT_EXIST)?;
        return Ok(redirect("/listings"));
    };

    let page = PageContext::from_session(&ctx);
    Ok(html(views::listings::show(&page, &details)))
}

/// `GET /listings/{id}/edit`
pub async fn edit_form(
    state: web::Data<AppState>,
    ctx: RequestContext,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result: Result<HttpResponse, AppError> = async {
        let listing = state.listings.find_for_edit(&path, &user).await?;
        let page = PageContext::from_session(&ctx);
        Ok(html(views::listings::edit_form(&page, &listing)))
    }
    .await;

    redirect_if_forbidden(result, &ctx, &listing_path(&path))
}

/// `PUT /listings/{id}`
pub async fn update(
    state: web::Data<AppState>,
    ctx: RequestContext,
    user: AuthenticatedUser,
    path: web::Path<String>,
    form: ValidatedForm<ListingRequest>,
) -> Result<HttpResponse, AppError> {
    let fields = form.into_inner().into_fields()?;

    let result: Result<HttpResponse, AppError> = async {
        state.listings.update(&path, fields, &user).await?;
        ctx.flash_success("Listing Updated!")?;
        Ok(redirect(&listing_path(&path)))
    }
    .await;

    redirect_if_forbidden(result, &ctx, &listing_path(&path))
}

/// `DELETE /listings/{id}`
pub async fn delete(
    state: web::Data<AppState>,
    ctx: RequestContext,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result: Result<HttpResponse, AppError> = async {
        state.listings.delete(&path, &user).await?;
        ctx.flash_success("Listing Deleted!")?;
        Ok(redirect("/listings"))
    }
    .await;

    redirect_if_forbidden(result, &ctx, &listing_path(&path))
}
