//! 서버 실행 설정
//!
//! `ENVIRONMENT`, `HOST`, `PORT`, `BCRYPT_COST`를 시작 시 한 번 읽어
//! [`ServerConfig`] 하나로 묶습니다.

use std::env;
use std::ops::RangeInclusive;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// bcrypt가 받아들이는 범위 중 서비스에서 허용하는 cost
const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=15;

/// 실행 환경
///
/// 값이 없으면 개발 환경입니다. 알아볼 수 없는 값은 프로덕션으로 취급합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::parse(&value))
            .unwrap_or(Environment::Development)
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "dev" | "development" | "test" | "local" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    fn default_bcrypt_cost(self) -> u32 {
        match self {
            Environment::Development => 4,
            Environment::Production => 12,
        }
    }
}

/// 바인딩 주소와 비밀번호 해싱 비용
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let environment = Environment::current();

        let host = env::var("HOST")
            .ok()
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let bcrypt_cost = parse_bcrypt_cost(env::var("BCRYPT_COST").ok().as_deref(), environment);

        Self {
            environment,
            host,
            port,
            bcrypt_cost,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 범위를 벗어나거나 숫자가 아니면 환경별 기본값 (개발 4, 프로덕션 12)
fn parse_bcrypt_cost(raw: Option<&str>, environment: Environment) -> u32 {
    match raw.map(|value| value.trim().parse::<u32>()) {
        Some(Ok(cost)) if BCRYPT_COST_RANGE.contains(&cost) => cost,
        Some(_) => {
            log::warn!("BCRYPT_COST 값이 4-15 범위가 아닙니다. 환경 기본값을 사용합니다");
            environment.default_bcrypt_cost()
        }
        None => environment.default_bcrypt_cost(),
    }
}
