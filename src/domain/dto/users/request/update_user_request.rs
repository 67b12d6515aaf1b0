//! 사용자 정보 수정 요청 DTO

use serde::Deserialize;

/// 사용자 정보 수정 요청
///
/// `PUT /api/users/{id}` 요청 본문입니다. 제공된 필드만 변경됩니다.
/// 사용자명, 이메일, 비밀번호는 이 경로로 변경할 수 없습니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// 이름
    pub first_name: Option<String>,

    /// 성
    pub last_name: Option<String>,

    /// 전화번호
    pub phone: Option<String>,

    /// 계정 활성화 여부
    pub enabled: Option<bool>,
}
