//! 로그인 인증 서비스
//!
//! 사용자명/비밀번호 자격 증명을 검증하고, 성공 시 인증 식별자와
//! 서명된 토큰을 생성합니다. 세션 상태는 어디에도 기록되지 않습니다.

use std::sync::Arc;

use crate::domain::dto::users::request::LoginRequest;
use crate::domain::dto::users::response::JwtResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserStore;
use crate::services::auth::token_service::TokenService;

/// 인증 서비스
///
/// Spring Security의 `DaoAuthenticationProvider` + `AuthenticationManager`
/// 조합과 동일한 역할을 합니다.
pub struct AuthService {
    /// 자격 증명 저장소
    users: Arc<dyn UserStore>,
    /// 토큰 코덱
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// 새 인증 서비스 생성
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// 사용자명과 비밀번호로 인증을 수행합니다.
    ///
    /// 성공 시 계정의 역할을 권한 집합으로 해석한 인증 식별자를 만들고,
    /// 새로 발급한 토큰과 함께 `JwtResponse`로 반환합니다.
    ///
    /// # 보안
    ///
    /// 알 수 없는 사용자명, 잘못된 비밀번호, 비활성화된 계정은 모두
    /// 동일한 `InvalidCredentials`로 응답합니다. 구분되는 원인은
    /// 서버 로그에만 기록되어 사용자명 열거 공격을 차단합니다.
    /// 비밀번호 비교는 bcrypt의 상수 시간 검증을 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 자격 증명 불일치
    /// * `AppError::InternalError` - 해시 검증 또는 토큰 발급 실패
    pub async fn authenticate(&self, request: &LoginRequest) -> AppResult<JwtResponse> {
        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                log::warn!("로그인 실패: 존재하지 않는 사용자명 '{}'", request.username);
                AppError::InvalidCredentials
            })?;

        if !user.enabled {
            log::warn!("로그인 실패: 비활성화된 계정 '{}'", request.username);
            return Err(AppError::InvalidCredentials);
        }

        let verified = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !verified {
            log::warn!("로그인 실패: 비밀번호 불일치 '{}'", request.username);
            return Err(AppError::InvalidCredentials);
        }

        let identity = AuthenticatedUser::from_account(&user);
        let token = self.tokens.issue(&identity)?;

        log::info!("로그인 성공: {}", identity.username);

        Ok(JwtResponse::new(
            token,
            identity.account_id,
            identity.username,
            identity.email,
            identity.authorities,
        ))
    }
}
