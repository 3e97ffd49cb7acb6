//! Wanderlust
//!
//! 숙소(listing)를 등록하고 리뷰를 남기는 서버 렌더링 웹 애플리케이션입니다.
//! 세션 쿠키 기반 로그인과 소유자/작성자 권한 검사를 제공합니다.
//!
//! # Features
//!
//! - **숙소 관리**: 목록, 상세, 등록, 수정, 삭제
//! - **리뷰**: 평점(1-5)과 코멘트 작성, 작성자 삭제
//! - **인증**: 회원가입, 로그인, 로그아웃 (bcrypt 해시)
//! - **세션**: `actix-session` (암호화 쿠키 또는 Redis 저장소), 플래시 메시지
//! - **MongoDB**: 숙소/리뷰/사용자 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Middlewares   │ ← 메서드 오버라이드, 세션, 로그인 검사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 처리, 플래시, 리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Services     │     │      Views      │ ← HTML 렌더링
//! └─────────────────┘     └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / 메모리 구현
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::HttpServer;
//! use wanderlust::core::AppState;
//! use wanderlust::config::ServerConfig;
//! use wanderlust::routes::build_app;
//!
//! let state = AppState::from_env(&ServerConfig::from_env()).await?;
//! HttpServer::new(move || build_app(state.clone()))
//!     .bind(("0.0.0.0", 8080))?
//!     .run()
//!     .await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod session;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
pub mod views;
