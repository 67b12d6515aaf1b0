//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증/인가 핵심과 사용자 관리 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 원칙
//!
//! 인증/인가 실패(401/403)는 클라이언트에게 **일반화된 메시지만** 전달하고,
//! 구체적인 원인(알 수 없는 사용자명, 잘못된 비밀번호, 만료된 토큰 등)은
//! 서버 로그에만 기록합니다. 사용자명 열거 공격을 차단하기 위해
//! "존재하지 않는 사용자"와 "잘못된 비밀번호"는 동일한 응답으로 통일됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn load_account(id: &str) -> AppResult<User> {
//!     user_store
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", id)))
//! }
//! ```

use thiserror::Error;

/// 토큰 검증 에러
///
/// 토큰 코덱의 순수 검증 단계에서만 발생하는 에러입니다.
/// 요청 파이프라인에서는 이 에러가 클라이언트로 전파되지 않고,
/// 인터셉터가 로그로 남긴 뒤 "식별자 미부착" 상태로 강등됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 입력이 공백이거나 비어 있음
    #[error("JWT claims string is empty")]
    Empty,

    /// 구조를 파싱할 수 없거나 서명이 올바르지 않음
    #[error("Invalid JWT token")]
    Malformed,

    /// 현재 시각이 만료 시각 이상임
    #[error("JWT token is expired")]
    Expired,

    /// 서명 알고리즘이 고정된 알고리즘(HS256)과 일치하지 않음
    #[error("JWT token is unsupported")]
    Unsupported,
}

/// 애플리케이션 전역 에러 타입
///
/// 사용자 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 자격 증명 불일치 (401 Unauthorized)
    ///
    /// 알 수 없는 사용자명, 잘못된 비밀번호, 비활성화된 계정을 모두 포괄합니다.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// 인증되지 않은 요청 (401 Unauthorized)
    #[error("authentication required")]
    Unauthenticated,

    /// 권한 부족 (403 Forbidden)
    #[error("insufficient privileges")]
    Forbidden,

    /// 사용자명 중복 (409 Conflict)
    #[error("username is already taken: {0}")]
    DuplicateUsername(String),

    /// 이메일 중복 (409 Conflict)
    #[error("email is already in use: {0}")]
    DuplicateEmail(String),

    /// 역할 참조 해석 실패 (500 Internal Server Error)
    ///
    /// 닫힌 역할 집합에는 속하지만 역할 레코드가 저장소에 없는 경우로,
    /// 부트스트랩 시딩이 누락된 배포를 의미합니다.
    #[error("role is not found: {0}")]
    UnknownRole(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 인증/인가 실패와 서버 내부 오류는 구체적인 원인을 로그에만 남기고
    /// 일반화된 메시지로 응답합니다. 나머지는 각 상태 코드와 메시지를 그대로 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let (status, message) = match self {
            AppError::InvalidCredentials | AppError::Unauthenticated => {
                log::warn!("Unauthorized error: {}", self);
                (StatusCode::UNAUTHORIZED, "Error: Unauthorized".to_string())
            }
            AppError::Forbidden => {
                log::warn!("Forbidden error: {}", self);
                (StatusCode::FORBIDDEN, "Error: Forbidden".to_string())
            }
            AppError::DuplicateUsername(_) | AppError::DuplicateEmail(_) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::UnknownRole(_) | AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "message": message
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
