//! Wanderlust 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB에 연결하고 세션 저장소(암호화 쿠키 또는 Redis)를 고른 뒤
//! 숙소/리뷰/인증 페이지를 제공합니다.

use std::io;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_session::storage::{CookieSessionStore, RedisSessionStore, SessionStore};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use wanderlust::config::{ServerConfig, SessionBackend};
use wanderlust::core::errors::AppError;
use wanderlust::core::AppState;
use wanderlust::handlers;
use wanderlust::middlewares::{session_middleware, MethodOverride};
use wanderlust::routes::configure_all_routes;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let server = ServerConfig::from_env();
    info!("🚀 Wanderlust 시작중... (환경: {:?})", server.environment);

    let state = AppState::from_env(&server).await.map_err(|e| {
        error!("❌ 애플리케이션 상태 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    match state.session_config.backend {
        SessionBackend::Redis => {
            let store = RedisSessionStore::new(state.session_config.redis_url.clone())
                .await
                .map_err(|e| {
                    let e = AppError::RedisError(e.to_string());
                    error!("❌ 세션 저장소 연결 실패: {}", e);
                    io::Error::other(e.to_string())
                })?;
            info!("🗄️ 세션 저장소: Redis");
            start_http_server(state, &server, move || store.clone()).await
        }
        SessionBackend::Cookie => {
            info!("🗄️ 세션 저장소: 암호화 쿠키");
            start_http_server(state, &server, CookieSessionStore::default).await
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 워커마다 `new_store`로 세션 저장소를 만들고, 세션과 메서드 오버라이드 위에
/// Rate Limiting, 접근 로그, 경로 정규화 미들웨어를 감쌉니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server<S, F>(state: AppState, server: &ServerConfig, new_store: F) -> io::Result<()>
where
    S: SessionStore + 'static,
    F: Fn() -> S + Clone + Send + 'static,
{
    let bind_address = server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Listings: http://{}/listings", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let sessions = session_middleware(
            new_store(),
            state.session_key.clone(),
            &state.session_config,
        );

        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_all_routes)
            .default_service(web::to(handlers::errors::not_found))
            .wrap(sessions)
            .wrap(MethodOverride)
            // Rate Limiting 미들웨어
            .wrap(Governor::new(&governor_conf))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=wanderlust::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
