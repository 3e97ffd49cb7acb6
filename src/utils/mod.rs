//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - HTML 이스케이프, 가격 표기 등 뷰에서 쓰는 문자열 처리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{escape_html, format_price};
//!
//! let safe = escape_html("<script>");   // "&lt;script&gt;"
//! let price = format_price(12500.0);    // "12,500"
//! ```

pub mod string_utils;
