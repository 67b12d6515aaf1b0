//! # Authentication Configuration Module
//!
//! JWT 토큰 서명에 필요한 설정을 관리하는 모듈입니다.
//! Spring Security의 `jwt.secret` / `jwt.expiration` 프로퍼티와 동일한 역할을 하며,
//! 프로세스 시작 시점에 한 번만 읽혀 이후 변경되지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-256-bit-key"
//! export JWT_EXPIRATION_MINUTES="60"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let secret = JwtConfig::secret();
//! let ttl = JwtConfig::expiration_minutes();
//! ```

use std::env;

use once_cell::sync::Lazy;

/// JWT 서명 비밀키 (프로세스 시작 시 1회 로드)
static JWT_SECRET: Lazy<String> = Lazy::new(|| {
    env::var("JWT_SECRET").unwrap_or_else(|_| {
        log::warn!("JWT_SECRET not set, using default (not secure for production!)");
        "change-me-jwt-secret".to_string()
    })
});

/// JWT 토큰 만료 시간, 분 단위 (프로세스 시작 시 1회 로드)
static JWT_EXPIRATION_MINUTES: Lazy<i64> = Lazy::new(|| {
    env::var("JWT_EXPIRATION_MINUTES")
        .unwrap_or_else(|_| "60".to_string())
        .parse()
        .unwrap_or(60)
});

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 비밀키와 만료 시간을 제공합니다. 두 값 모두 프로세스 전역 설정으로,
/// 첫 접근 시 환경 변수에서 읽힌 뒤 절대 변경되지 않습니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 프로덕션에서는 짧은 만료 시간 권장
/// 3. **환경별 키 분리**: 개발/운영 환경에 서로 다른 키 사용
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본 키를 사용하며
    /// 경고 로그가 출력됩니다. 프로덕션에서는 반드시 `JWT_SECRET`을 설정해야 합니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> &'static str {
        &JWT_SECRET
    }

    /// JWT 액세스 토큰의 만료 시간을 분 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 60분
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_EXPIRATION_MINUTES="15"
    /// ```
    pub fn expiration_minutes() -> i64 {
        *JWT_EXPIRATION_MINUTES
    }
}

/// 관리자 부트스트랩 계정 설정
///
/// 서버 최초 기동 시 생성되는 기본 관리자 계정의 자격 증명입니다.
pub struct AdminConfig;

impl AdminConfig {
    /// 기본 관리자 계정의 비밀번호를 반환합니다.
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export ADMIN_PASSWORD="strong-admin-password"
    /// ```
    pub fn password() -> String {
        env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            log::warn!("ADMIN_PASSWORD not set, using default (not secure for production!)");
            "admin123".to_string()
        })
    }

    /// 기본 관리자 계정의 이메일 주소를 반환합니다.
    pub fn email() -> String {
        env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string())
    }
}
