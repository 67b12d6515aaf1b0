//! 단순 메시지 응답 DTO

use serde::{Deserialize, Serialize};

/// 메시지 응답
///
/// 작업 결과나 복구된 충돌(중복 가입 등)을 통일된 형식으로 전달합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// 메시지 내용
    pub message: String,
}

impl MessageResponse {
    /// 새 메시지 응답 생성
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
