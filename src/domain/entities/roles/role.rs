//! Role Entity Implementation
//!
//! 역할 기반 접근 제어(RBAC)의 기준 데이터인 역할 엔티티입니다.
//! 역할은 시스템 부트스트랩 시 한 번 생성되는 불변 참조 데이터이며,
//! 닫힌 집합 {ORDINARY_USER, MODERATOR, ADMINISTRATOR} 외의 값은 존재하지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 시스템에 존재하는 역할의 닫힌 집합
///
/// 자유 문자열 비교 대신 태그된 열거형으로 역할을 표현합니다.
/// 저장소와 API 응답에서는 `ORDINARY_USER` 형태의 대문자 라벨로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    /// 일반 사용자 (가입 시 기본 역할)
    OrdinaryUser,
    /// 운영자
    Moderator,
    /// 관리자
    Administrator,
}

impl RoleName {
    /// 역할 라벨 문자열을 반환합니다.
    pub fn as_label(&self) -> &'static str {
        match self {
            RoleName::OrdinaryUser => "ORDINARY_USER",
            RoleName::Moderator => "MODERATOR",
            RoleName::Administrator => "ADMINISTRATOR",
        }
    }

    /// 자유 형식 라벨을 역할로 변환합니다 (전체 매핑).
    ///
    /// 대소문자를 구분하지 않으며, 닫힌 집합에 속하지 않는 라벨은
    /// 명시적으로 `None`을 반환합니다. 호출자가 기본 역할 적용 여부를 결정합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(RoleName::from_label("administrator"), Some(RoleName::Administrator));
    /// assert_eq!(RoleName::from_label("superuser"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "ORDINARY_USER" => Some(RoleName::OrdinaryUser),
            "MODERATOR" => Some(RoleName::Moderator),
            "ADMINISTRATOR" => Some(RoleName::Administrator),
            _ => None,
        }
    }

    /// 부트스트랩 시 시딩되는 전체 역할 목록
    pub fn all() -> [RoleName; 3] {
        [
            RoleName::OrdinaryUser,
            RoleName::Moderator,
            RoleName::Administrator,
        ]
    }
}

/// 역할 엔티티
///
/// `roles` 컬렉션에 저장되는 역할 레코드입니다. 역할 이름은 유니크합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 역할 이름 (unique)
    pub name: RoleName,
}

impl Role {
    /// 새 역할 레코드 생성
    pub fn new(name: RoleName) -> Self {
        Self { id: None, name }
    }
}
