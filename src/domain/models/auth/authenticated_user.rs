//! 요청 단위 인증 식별자 모델
//!
//! 검증된 토큰 또는 직접 자격 증명 확인에서 파생되는 일시적 식별자입니다.
//! 해당 요청의 extensions에만 존재하며, 요청 종료와 함께 폐기됩니다.
//! 프로세스 전역 홀더나 스레드 로컬에 저장되지 않습니다.

use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::entities::roles::role::RoleName;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;

/// 인증된 사용자 식별자
///
/// 계정 식별자, 사용자명, 이메일, 그리고 역할에서 해석된 권한 집합을 담습니다.
/// 비밀번호 해시 등 민감 정보는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 계정 고유 ID
    pub account_id: String,

    /// 사용자명 (토큰 주체)
    pub username: String,

    /// 이메일
    pub email: String,

    /// 권한 라벨 집합 (예: "ORDINARY_USER", "ADMINISTRATOR")
    pub authorities: Vec<String>,
}

impl AuthenticatedUser {
    /// 계정 엔티티로부터 인증 식별자를 구성합니다.
    ///
    /// 역할 참조를 권한 집합으로 해석하는 조인은 이 시점에 정확히 한 번 수행됩니다.
    pub fn from_account(user: &User) -> Self {
        Self {
            account_id: user.id_string().unwrap_or_default(),
            username: user.username.clone(),
            email: user.email.clone(),
            authorities: user.authority_set(),
        }
    }

    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: RoleName) -> bool {
        self.authorities.iter().any(|a| a == role.as_label())
    }

    /// 여러 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[RoleName]) -> bool {
        roles.iter().any(|&role| self.has_role(role))
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role(RoleName::Administrator)
    }

    /// 주어진 계정 ID의 소유자인지 확인 (self-match 술어)
    pub fn is_account_owner(&self, account_id: &str) -> bool {
        self.account_id == account_id
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 인터셉터가 extensions에 부착한 식별자를 핸들러 인자로 추출합니다.
/// 식별자가 없으면 401로 거부되므로, 보호된 핸들러에서만 사용해야 합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => ready(Err(AppError::Unauthenticated.into())),
        }
    }
}

/// 선택적 인증 식별자 추출자
///
/// 익명 요청도 통과시켜야 하는 핸들러에서 사용합니다.
/// 401/403 판정은 핸들러가 인가 가드를 통해 직접 수행합니다.
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<AuthenticatedUser>);

impl OptionalIdentity {
    /// 내부 식별자에 대한 참조를 반환합니다.
    pub fn as_ref(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

impl FromRequest for OptionalIdentity {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let identity = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalIdentity(identity)))
    }
}
