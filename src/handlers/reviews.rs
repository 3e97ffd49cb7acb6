//! 리뷰 핸들러

use actix_web::{web, HttpResponse};
use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::dto::ReviewRequest;
use crate::domain::models::AuthenticatedUser;
use crate::handlers::{redirect, redirect_if_forbidden};
use crate::middlewares::ValidatedForm;
use crate::session::RequestContext;

/// `POST /listings/{id}/reviews`
pub async fn create(
    state: web::Data<AppState>,
    ctx: RequestContext,
    user: AuthenticatedUser,
    path: web::Path<String>,
    form: ValidatedForm<ReviewRequest>,
) -> Result<HttpResponse, AppError> {
    let (comment, rating) = form.into_inner().into_parts()?;
    state.reviews.create(&path, comment, rating, &user).await?;

    ctx.flash_success("New Review Created!")?;
    Ok(redirect(&format!("/listings/{}", path.trim())))
}

/// `DELETE /listings/{id}/reviews/{review_id}`
pub async fn delete(
    state: web::Data<AppState>,
    ctx: RequestContext,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (listing_id, review_id) = path.into_inner();
    let location = format!("/listings/{}", listing_id.trim());

    let result: Result<HttpResponse, AppError> = async {
        state.reviews.delete(&listing_id, &review_id, &user).await?;
        ctx.flash_success("Review Deleted!")?;
        Ok(redirect(&location))
    }
    .await;

    redirect_if_forbidden(result, &ctx, &location)
}
