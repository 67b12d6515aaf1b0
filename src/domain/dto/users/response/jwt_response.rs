//! 로그인 성공 응답 DTO

use serde::{Deserialize, Serialize};

/// JWT 응답
///
/// 로그인 성공 시 반환되는 데이터입니다. 클라이언트는 `token`을 보관했다가
/// 이후 요청의 `Authorization: Bearer <token>` 헤더로 제시합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtResponse {
    /// 서명된 JWT 토큰
    pub token: String,

    /// 토큰 타입, OAuth 2.0 규약에 따라 항상 "Bearer"
    #[serde(rename = "type")]
    pub token_type: String,

    /// 계정 고유 ID
    #[serde(rename = "accountId")]
    pub account_id: String,

    /// 사용자명
    pub username: String,

    /// 이메일
    pub email: String,

    /// 보유 역할 라벨 목록
    pub roles: Vec<String>,
}

impl JwtResponse {
    /// 새 JWT 응답 생성
    pub fn new(
        token: String,
        account_id: String,
        username: String,
        email: String,
        roles: Vec<String>,
    ) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            account_id,
            username,
            email,
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_is_bearer() {
        let response = JwtResponse::new(
            "eyJ...".to_string(),
            "507f1f77bcf86cd799439011".to_string(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            vec!["ORDINARY_USER".to_string()],
        );

        assert_eq!(response.token_type, "Bearer");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "Bearer");
        assert_eq!(json["accountId"], "507f1f77bcf86cd799439011");
    }
}
