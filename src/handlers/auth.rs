//! Authentication HTTP Handlers
//!
//! 가입과 로그인 엔드포인트를 처리하는 핸들러 함수들입니다.
//! JWT 토큰 기반의 상태 없는 인증을 구현하며, 두 엔드포인트 모두
//! 인증 없이 접근 가능합니다.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::domain::dto::users::request::{LoginRequest, SignupRequest};
use crate::errors::AppError;
use crate::services::auth::AuthService;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// 새 사용자 계정을 등록합니다. 중복 사용자명/이메일은 에러가 아닌
/// 메시지 페이로드로 응답됩니다. 가입 시 토큰은 발급되지 않습니다.
///
/// # Endpoint
/// `POST /api/auth/signup`
#[post("/signup")]
pub async fn signup(
    users: web::Data<UserService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let message = users.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(message))
}

/// 로그인 핸들러
///
/// 사용자명/비밀번호를 검증하고 JWT 토큰과 계정 정보를 반환합니다.
/// 실패 원인(알 수 없는 사용자명/잘못된 비밀번호)은 구분 없이
/// 401 응답으로 통일됩니다.
///
/// # Endpoint
/// `POST /api/auth/signin`
#[post("/signin")]
pub async fn signin(
    auth: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = auth.authenticate(&payload).await?;

    Ok(HttpResponse::Ok().json(response))
}
