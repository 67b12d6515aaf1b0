//! 회원가입 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청
///
/// `POST /api/auth/signup` 요청 본문입니다.
/// Jakarta Bean Validation 스타일의 필드 제약을 `validator` derive로 표현합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// 사용자명 (3-20자)
    #[validate(length(
        min = 3,
        max = 20,
        message = "Username must be between 3 and 20 characters"
    ))]
    pub username: String,

    /// 이메일 (최대 50자, 유효한 형식)
    #[validate(
        length(max = 50, message = "Email must be less than 50 characters"),
        email(message = "Email should be valid")
    )]
    pub email: String,

    /// 비밀번호 (6-40자, 평문으로 수신되어 서비스 계층에서 해싱)
    #[validate(length(
        min = 6,
        max = 40,
        message = "Password must be between 6 and 40 characters"
    ))]
    pub password: String,

    /// 이름 (선택)
    pub first_name: Option<String>,

    /// 성 (선택)
    pub last_name: Option<String>,

    /// 전화번호 (선택)
    pub phone: Option<String>,

    /// 역할 라벨 목록 (선택, 미지정 시 ORDINARY_USER)
    pub roles: Option<Vec<String>>,
}
