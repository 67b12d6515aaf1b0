//! # 역할 저장소
//!
//! 역할 기준 데이터의 데이터 액세스 계층입니다. 역할은 부트스트랩 시
//! 한 번 시딩되는 불변 참조 데이터이므로 연산 집합이 최소화되어 있습니다.

use async_trait::async_trait;
use mongodb::bson::doc;

use crate::db::Database;
use crate::domain::entities::roles::role::{Role, RoleName};
use crate::errors::{AppError, AppResult};

/// 역할 저장소 인터페이스
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// 이름으로 역할 조회
    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>>;

    /// 저장된 역할 수 반환
    async fn count(&self) -> AppResult<u64>;

    /// 역할 저장 (부트스트랩 시딩 전용)
    async fn insert(&self, role: Role) -> AppResult<Role>;
}

/// MongoDB 기반 역할 저장소 구현
///
/// `roles` 컬렉션을 사용합니다.
pub struct MongoRoleRepository {
    db: Database,
}

impl MongoRoleRepository {
    /// 새 저장소 인스턴스 생성
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// `roles` 컬렉션 핸들 반환
    fn collection(&self) -> mongodb::Collection<Role> {
        self.db.get_database().collection::<Role>("roles")
    }
}

#[async_trait]
impl RoleStore for MongoRoleRepository {
    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>> {
        self.collection()
            .find_one(doc! { "name": name.as_label() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut role: Role) -> AppResult<Role> {
        let result = self
            .collection()
            .insert_one(&role)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        role.id = result.inserted_id.as_object_id();
        Ok(role)
    }
}
