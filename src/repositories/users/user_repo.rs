//! # 사용자 저장소
//!
//! 사용자 계정의 데이터 액세스 계층입니다. 인증 핵심은 저장소를
//! `UserStore` trait으로만 바라보며, 운영 환경에서는 MongoDB 구현이,
//! 테스트에서는 인메모리 구현이 주입됩니다.
//!
//! ## 동시성 계약
//!
//! 모든 조회는 동시 접근에 안전하며, 쓰기의 일관성은 저장소의 유니크
//! 제약에만 의존합니다. 경합 상황에서 유니크 인덱스 위반(11000)은
//! `DuplicateUsername` / `DuplicateEmail`로 변환되어 올라갑니다.

use async_trait::async_trait;
use mongodb::{
    IndexModel,
    bson::{doc, oid::ObjectId},
    options::{FindOneAndReplaceOptions, IndexOptions, ReturnDocument},
};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};

/// 사용자 계정 저장소 인터페이스
///
/// 인증 핵심이 자격 증명 저장소에 기대하는 전체 연산 집합입니다.
/// Spring Data의 `UserRepository` 인터페이스와 동일한 역할을 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 사용자명으로 사용자 조회
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 사용자명 존재 여부 확인
    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;

    /// 이메일 존재 여부 확인
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// 전체 사용자 조회
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 새 사용자 저장
    ///
    /// 유니크 제약 위반은 `DuplicateUsername` / `DuplicateEmail`로 반환됩니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 기존 사용자 교체 저장
    ///
    /// ID가 일치하는 레코드를 통째로 교체하며, 없으면 `None`을 반환합니다.
    async fn update(&self, user: &User) -> AppResult<Option<User>>;

    /// 사용자 삭제
    ///
    /// 삭제된 경우 `true`, 대상이 없으면 `false`를 반환합니다.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// MongoDB 기반 사용자 저장소 구현
///
/// `users` 컬렉션을 사용하며, username/email 유니크 인덱스를 관리합니다.
pub struct MongoUserRepository {
    db: Database,
}

impl MongoUserRepository {
    /// 새 저장소 인스턴스 생성
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// `users` 컬렉션 핸들 반환
    fn collection(&self) -> mongodb::Collection<User> {
        self.db.get_database().collection::<User>("users")
    }

    /// 유니크 인덱스를 생성합니다.
    ///
    /// 서버 기동 시 한 번 호출됩니다. username/email의 유니크 제약이
    /// 가입 경합의 유일한 일관성 보장 장치입니다.
    pub async fn initialize(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection()
            .create_index(username_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// ObjectId 문자열 파싱
    fn parse_object_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// 삽입 에러를 도메인 에러로 변환합니다.
    ///
    /// 유니크 인덱스 위반(11000)은 위반된 인덱스에 따라
    /// `DuplicateUsername` / `DuplicateEmail`로 구분됩니다.
    fn map_insert_error(user: &User, error: mongodb::error::Error) -> AppError {
        use mongodb::error::{ErrorKind, WriteFailure};

        if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *error.kind {
            if write_error.code == 11000 {
                if write_error.message.contains("username") {
                    return AppError::DuplicateUsername(user.username.clone());
                }
                if write_error.message.contains("email") {
                    return AppError::DuplicateEmail(user.email.clone());
                }
            }
        }

        AppError::DatabaseError(error.to_string())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = Self::parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        use futures_util::TryStreamExt;

        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| Self::map_insert_error(&user, e))?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<Option<User>> {
        let object_id = user
            .id
            .ok_or_else(|| AppError::ValidationError("저장되지 않은 사용자입니다".to_string()))?;

        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_replace(doc! { "_id": object_id }, user)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = Self::parse_object_id(id)?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
