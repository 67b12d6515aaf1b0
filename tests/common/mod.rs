//! 통합 테스트 공용 헬퍼
//!
//! 저장소 trait의 인메모리 구현과 테스트 앱 구성 매크로를 제공합니다.
//! MongoDB 없이도 인증/인가 파이프라인 전체를 구동할 수 있습니다.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use ecommerce_user_service::domain::entities::roles::role::{Role, RoleName};
use ecommerce_user_service::domain::entities::users::user::User;
use ecommerce_user_service::errors::{AppError, AppResult};
use ecommerce_user_service::repositories::roles::RoleStore;
use ecommerce_user_service::repositories::users::UserStore;

/// 테스트 앱이 사용하는 JWT 서명 비밀키
pub const TEST_SECRET: &str = "integration-test-secret";

/// 인메모리 사용자 저장소
///
/// 운영 구현과 동일하게 사용자명/이메일 유니크 제약을 흉내내며,
/// 위반 시 `DuplicateUsername` / `DuplicateEmail`을 반환합니다.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().unwrap().get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().unwrap().values().cloned().collect())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().unwrap();

        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::DuplicateUsername(user.username.clone()));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateEmail(user.email.clone()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id.to_hex(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<Option<User>> {
        let id = user
            .id_string()
            .ok_or_else(|| AppError::ValidationError("저장되지 않은 사용자입니다".to_string()))?;

        let mut users = self.users.write().unwrap();
        if !users.contains_key(&id) {
            return Ok(None);
        }

        users.insert(id, user.clone());
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.users.write().unwrap().remove(id).is_some())
    }
}

/// 인메모리 역할 저장소
#[derive(Default)]
pub struct MemoryRoleStore {
    roles: RwLock<Vec<Role>>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .read()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.roles.read().unwrap().len() as u64)
    }

    async fn insert(&self, mut role: Role) -> AppResult<Role> {
        role.id = Some(ObjectId::new());
        self.roles.write().unwrap().push(role.clone());
        Ok(role)
    }
}

/// 역할 기준 데이터가 시딩된 인메모리 저장소 쌍을 생성합니다.
pub async fn seeded_stores() -> (Arc<dyn UserStore>, Arc<dyn RoleStore>) {
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let roles: Arc<dyn RoleStore> = Arc::new(MemoryRoleStore::new());

    for name in RoleName::all() {
        roles.insert(Role::new(name)).await.unwrap();
    }

    (users, roles)
}

/// 지정한 역할을 가진 계정을 저장소에 직접 생성합니다.
///
/// 비밀번호는 테스트용 저비용 bcrypt(cost 4)로 해싱됩니다.
pub async fn insert_account(
    users: &Arc<dyn UserStore>,
    username: &str,
    password: &str,
    roles: Vec<RoleName>,
) -> User {
    let password_hash = bcrypt::hash(password, 4).unwrap();

    let user = User::new(
        username.to_string(),
        format!("{}@example.com", username),
        password_hash,
        None,
        None,
        None,
        roles,
    );

    users.insert(user).await.unwrap()
}

/// 전체 라우트와 식별자 인터셉터가 구성된 테스트 앱을 초기화합니다.
///
/// 운영 `main`과 동일한 배선이되, 저장소만 인메모리 구현으로 대체됩니다.
macro_rules! test_app {
    ($user_store:expr, $role_store:expr) => {{
        let token_service = std::sync::Arc::new(
            ecommerce_user_service::services::auth::TokenService::new($crate::common::TEST_SECRET, 60),
        );
        let auth_service = std::sync::Arc::new(
            ecommerce_user_service::services::auth::AuthService::new(
                $user_store.clone(),
                token_service.clone(),
            ),
        );
        let user_service = std::sync::Arc::new(
            ecommerce_user_service::services::users::UserService::new(
                $user_store.clone(),
                $role_store.clone(),
            ),
        );

        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(ecommerce_user_service::middlewares::IdentityMiddleware)
                .app_data(actix_web::web::Data::from($user_store.clone()))
                .app_data(actix_web::web::Data::from(token_service))
                .app_data(actix_web::web::Data::from(auth_service))
                .app_data(actix_web::web::Data::from(user_service))
                .configure(ecommerce_user_service::routes::configure_all_routes),
        )
        .await
    }};
}

pub(crate) use test_app;
