//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: `ResponseError` 구현으로 에러 페이지 자동 렌더링
//! - **ErrorContext**: 외부 에러에 컨텍스트를 붙여 `AppError`로 변환
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: 서비스와 세션 저장소를 묶은 공유 상태
//! - `web::Data<AppState>`로 워커마다 복제되며 내부는 `Arc`로 공유
//!
//! ```rust,ignore
//! use crate::core::{AppError, AppState};
//!
//! async fn index(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
//!     let listings = state.listings.list().await?;
//!     Ok(render(listings))
//! }
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
