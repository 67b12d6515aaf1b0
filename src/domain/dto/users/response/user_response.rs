//! 사용자 정보 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답
///
/// 계정 엔티티에서 민감 정보(비밀번호 해시)를 제거한 공개 표현입니다.
/// 모든 사용자 조회 API는 엔티티 대신 이 DTO를 반환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// 계정 고유 ID
    pub id: String,
    /// 사용자명
    pub username: String,
    /// 이메일
    pub email: String,
    /// 이름
    pub first_name: Option<String>,
    /// 성
    pub last_name: Option<String>,
    /// 전화번호
    pub phone: Option<String>,
    /// 계정 활성화 여부
    pub enabled: bool,
    /// 보유 역할 라벨 목록
    pub roles: Vec<String>,
    /// 생성 시각 (RFC 3339)
    pub created_at: String,
    /// 수정 시각 (RFC 3339)
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            enabled: user.enabled,
            roles: user.roles.iter().map(|r| r.as_label().to_string()).collect(),
            created_at: user.created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: user.updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::roles::role::RoleName;

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$04$secret-hash".to_string(),
            None,
            None,
            None,
            vec![RoleName::OrdinaryUser],
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
        assert!(json.contains("ORDINARY_USER"));
    }
}
