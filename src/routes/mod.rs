//! 라우트 설정
//!
//! 모든 HTTP 경로를 등록하고 애플리케이션을 조립합니다.
//!
//! | 경로 | 메서드 | 로그인 |
//! |------|--------|--------|
//! | `/listings` | GET / POST | POST만 |
//! | `/listings/new` | GET | 필요 |
//! | `/listings/{id}` | GET / PUT / DELETE | PUT, DELETE |
//! | `/listings/{id}/edit` | GET | 필요 |
//! | `/listings/{id}/reviews` | POST | 필요 |
//! | `/listings/{id}/reviews/{review_id}` | DELETE | 필요 |
//! | `/signup`, `/login` | GET / POST | - |
//! | `/logout` | GET | - |
//! | `/health` | GET | - |

use actix_session::storage::CookieSessionStore;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};
use serde_json::json;
use crate::core::state::AppState;
use crate::handlers;
use crate::middlewares::{session_middleware, LoginRequired, MethodOverride};

/// 모든 라우트를 설정합니다
///
/// `/listings/new`는 `/listings/{id}`보다 먼저 등록되어야 합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);
    cfg.route("/", web::get().to(handlers::errors::root));

    configure_listing_routes(cfg);
    configure_review_routes(cfg);
    configure_auth_routes(cfg);
}

/// 숙소 라우트
///
/// 보호된 라우트는 `Route::wrap(LoginRequired)`로 개별 지정합니다.
/// 미들웨어는 핸들러의 추출자보다 먼저 실행되므로, 로그인하지 않은 요청은
/// 폼 검증 없이 `/login`으로 리다이렉트됩니다.
fn configure_listing_routes(cfg: &mut web::ServiceConfig) {
    use handlers::listings;

    cfg.service(
        web::resource("/listings")
            .route(web::get().to(listings::index))
            .route(web::post().to(listings::create).wrap(LoginRequired)),
    );

    cfg.service(
        web::resource("/listings/new")
            .route(web::get().to(listings::new_form).wrap(LoginRequired)),
    );

    cfg.service(
        web::resource("/listings/{id}")
            .route(web::get().to(listings::show))
            .route(web::put().to(listings::update).wrap(LoginRequired))
            .route(web::delete().to(listings::delete).wrap(LoginRequired)),
    );

    cfg.service(
        web::resource("/listings/{id}/edit")
            .route(web::get().to(listings::edit_form).wrap(LoginRequired)),
    );
}

/// 리뷰 라우트 (모두 로그인 필요)
fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    use handlers::reviews;

    cfg.service(
        web::resource("/listings/{id}/reviews")
            .route(web::post().to(reviews::create).wrap(LoginRequired)),
    );

    cfg.service(
        web::resource("/listings/{id}/reviews/{review_id}")
            .route(web::delete().to(reviews::delete).wrap(LoginRequired)),
    );
}

/// 인증 라우트
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    use handlers::auth;

    cfg.service(
        web::resource("/signup")
            .route(web::get().to(auth::signup_form))
            .route(web::post().to(auth::signup)),
    );

    cfg.service(
        web::resource("/login")
            .route(web::get().to(auth::login_form))
            .route(web::post().to(auth::login)),
    );

    cfg.route("/logout", web::get().to(auth::logout));
}

/// 쿠키 세션 저장소로 애플리케이션을 조립합니다
///
/// 통합 테스트와 로컬 데모용입니다. 서버 바이너리는 `main`에서 같은 순서로
/// 구체 타입의 `App`을 만들고 Rate Limiting, 접근 로그, 경로 정규화를 더합니다.
///
/// ```rust,ignore
/// let app = test::init_service(build_app(AppState::in_memory(4))).await;
/// ```
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let sessions = session_middleware(
        CookieSessionStore::default(),
        state.session_key.clone(),
        &state.session_config,
    );

    App::new()
        .app_data(web::Data::new(state))
        .configure(configure_all_routes)
        .default_service(web::to(handlers::errors::not_found))
        .wrap(sessions)
        // 마지막에 등록한 미들웨어가 먼저 실행됨: 라우팅 전에 메서드 변경
        .wrap(MethodOverride)
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "wanderlust",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "sessions": "Cookie / Redis"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "wanderlust",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "sessions": "Cookie / Redis"
        }
    }))
}
