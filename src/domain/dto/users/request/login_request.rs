//! 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 로그인 요청
///
/// `POST /api/auth/signin` 요청 본문입니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자명
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// 비밀번호
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_username_rejected() {
        let request = LoginRequest {
            username: String::new(),
            password: "secret1".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_filled_request_passes() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "secret1".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
