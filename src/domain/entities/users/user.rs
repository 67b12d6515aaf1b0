//! User Entity Implementation
//!
//! 사용자 계정 엔티티의 핵심 구현체입니다.
//! 사용자명/이메일은 전역 유니크하며, 비밀번호 해시는 API 응답으로
//! 직렬화되지 않습니다 (응답은 항상 `UserResponse` DTO를 거칩니다).

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::roles::role::RoleName;

/// 사용자 계정 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 가입 시 생성되며, 인증 흐름에서는 절대 삭제되지 않습니다
/// (삭제는 관리자 전용 운영 작업입니다).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique)
    pub username: String,
    /// 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호 (bcrypt)
    pub password_hash: String,
    /// 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// 성
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// 전화번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 계정 활성화 여부
    pub enabled: bool,
    /// 보유 역할 (최소 1개, 기본값 ORDINARY_USER)
    pub roles: Vec<RoleName>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 계정 생성
    ///
    /// 활성 상태로 시작하며, 역할 목록이 비어 있으면 호출 전에
    /// 기본 역할이 적용되어 있어야 합니다.
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
        phone: Option<String>,
        roles: Vec<RoleName>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password_hash,
            first_name,
            last_name,
            phone,
            enabled: true,
            roles,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 특정 역할 보유 여부 확인
    pub fn has_role(&self, role: RoleName) -> bool {
        self.roles.contains(&role)
    }

    /// 보유 역할을 권한 라벨 집합으로 변환합니다.
    ///
    /// 계정의 역할 참조를 권한 문자열로 해석하는 단일 지점으로,
    /// 식별자 해석 시점에 정확히 한 번 수행됩니다.
    pub fn authority_set(&self) -> Vec<String> {
        self.roles
            .iter()
            .map(|role| role.as_label().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$04$hash".to_string(),
            Some("Alice".to_string()),
            None,
            None,
            vec![RoleName::OrdinaryUser, RoleName::Moderator],
        )
    }

    #[test]
    fn test_new_user_is_enabled() {
        let user = sample_user();
        assert!(user.enabled);
        assert!(user.id.is_none());
    }

    #[test]
    fn test_has_role() {
        let user = sample_user();
        assert!(user.has_role(RoleName::OrdinaryUser));
        assert!(user.has_role(RoleName::Moderator));
        assert!(!user.has_role(RoleName::Administrator));
    }

    #[test]
    fn test_authority_set_resolves_labels() {
        let user = sample_user();
        assert_eq!(
            user.authority_set(),
            vec!["ORDINARY_USER".to_string(), "MODERATOR".to_string()]
        );
    }
}
