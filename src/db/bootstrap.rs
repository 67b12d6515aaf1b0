//! 데이터베이스 부트스트랩 시딩
//!
//! 서버 기동 시 역할 기준 데이터와 기본 관리자 계정을 준비합니다.
//! Spring Boot의 `CommandLineRunner` 기반 초기화와 동일한 역할을 하며,
//! 저장소 trait 위에서 동작하므로 저장소 구현과 무관합니다.

use std::sync::Arc;

use log::info;

use crate::config::{AdminConfig, PasswordConfig};
use crate::domain::entities::roles::role::{Role, RoleName};
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::roles::role_repo::RoleStore;
use crate::repositories::users::user_repo::UserStore;

/// 기본 관리자 계정의 사용자명
pub const ADMIN_USERNAME: &str = "admin";

/// 역할 기준 데이터와 기본 관리자 계정을 시딩합니다.
///
/// 멱등 연산입니다. 역할 컬렉션이 비어 있을 때만 역할 3종을 생성하고,
/// `admin` 계정이 없을 때만 관리자 계정을 생성합니다.
///
/// # Errors
///
/// * `AppError::DatabaseError` - 저장소 접근 실패
/// * `AppError::InternalError` - 관리자 비밀번호 해싱 실패
pub async fn initialize(
    users: &Arc<dyn UserStore>,
    roles: &Arc<dyn RoleStore>,
) -> AppResult<()> {
    init_roles(roles).await?;
    create_admin_account(users).await?;
    Ok(())
}

/// 역할 기준 데이터를 시딩합니다.
async fn init_roles(roles: &Arc<dyn RoleStore>) -> AppResult<()> {
    if roles.count().await? > 0 {
        return Ok(());
    }

    for name in RoleName::all() {
        roles.insert(Role::new(name)).await?;
    }

    info!("✅ 역할 기준 데이터 시딩 완료: {:?}", RoleName::all());
    Ok(())
}

/// 기본 관리자 계정을 생성합니다.
async fn create_admin_account(users: &Arc<dyn UserStore>) -> AppResult<()> {
    if users.exists_by_username(ADMIN_USERNAME).await? {
        return Ok(());
    }

    let password_hash = bcrypt::hash(AdminConfig::password(), PasswordConfig::bcrypt_cost())
        .map_err(|e| AppError::InternalError(format!("관리자 비밀번호 해싱 실패: {}", e)))?;

    let admin = User::new(
        ADMIN_USERNAME.to_string(),
        AdminConfig::email(),
        password_hash,
        Some("Admin".to_string()),
        Some("User".to_string()),
        None,
        vec![RoleName::Administrator],
    );

    users.insert(admin).await?;

    info!("✅ 기본 관리자 계정 생성 완료: {}", ADMIN_USERNAME);
    Ok(())
}
