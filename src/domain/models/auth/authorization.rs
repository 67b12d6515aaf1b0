//! 인가 가드 술어와 평가 함수
//!
//! 엔드포인트별 역할 요구사항을 데이터로 표현하고, 해석된 식별자에 대해
//! 평가하는 명시적 가드 함수들입니다. 어노테이션 스캔이나 리플렉션 없이
//! 라우트 등록 지점과 핸들러에서 직접 호출됩니다.

use crate::domain::entities::roles::role::RoleName;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::{AppError, AppResult};

/// 요구되는 역할 정보
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(RoleName),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<RoleName>),
}

impl RequiredRole {
    /// 단일 역할 요구사항 생성
    pub fn single(role: RoleName) -> Self {
        RequiredRole::Single(role)
    }

    /// 복수 역할 중 하나 요구사항 생성
    pub fn any(roles: Vec<RoleName>) -> Self {
        RequiredRole::Any(roles)
    }

    /// 권한 집합이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, identity: &AuthenticatedUser) -> bool {
        match self {
            RequiredRole::Single(required) => identity.has_role(*required),
            RequiredRole::Any(required) => identity.has_any_role(required),
        }
    }
}

/// 역할 요구사항에 대해 식별자를 평가합니다.
///
/// 평가 순서는 고정입니다:
///
/// 1. 식별자가 부착되지 않은 요청 → `Unauthenticated` (401)
/// 2. 식별자는 있으나 술어 불만족 → `Forbidden` (403)
/// 3. 만족 → 식별자 반환, 핸들러 진행
///
/// # Examples
///
/// ```rust,ignore
/// let identity = authorize(
///     identity.as_ref(),
///     &RequiredRole::single(RoleName::Administrator),
/// )?;
/// ```
pub fn authorize<'a>(
    identity: Option<&'a AuthenticatedUser>,
    required: &RequiredRole,
) -> AppResult<&'a AuthenticatedUser> {
    let identity = identity.ok_or(AppError::Unauthenticated)?;

    if !required.is_satisfied(identity) {
        log::warn!(
            "권한 부족: 사용자 {} ({:?}), 필요 권한: {:?}",
            identity.username,
            identity.authorities,
            required
        );
        return Err(AppError::Forbidden);
    }

    Ok(identity)
}

/// 소유권 기반 접근을 평가합니다 (self-match 술어).
///
/// 경로의 대상 계정 ID가 인증된 식별자의 계정 ID와 같거나,
/// 식별자가 관리자 역할을 보유한 경우에만 허용됩니다.
pub fn authorize_owner(identity: &AuthenticatedUser, account_id: &str) -> AppResult<()> {
    if identity.is_admin() || identity.is_account_owner(account_id) {
        return Ok(());
    }

    log::warn!(
        "소유권 불일치: 사용자 {} (계정 {})가 계정 {}에 접근 시도",
        identity.username,
        identity.account_id,
        account_id
    );
    Err(AppError::Forbidden)
}
