//! User Management HTTP Handlers
//!
//! 사용자 계정의 조회/수정/삭제 엔드포인트입니다. 엔드포인트마다 요구
//! 역할 술어가 다르므로, 스코프 단위 가드 대신 핸들러 진입 지점에서
//! 명시적 가드 함수를 호출합니다.
//!
//! | Endpoint | 요구 술어 |
//! |----------|-----------|
//! | `GET /api/users` | ADMINISTRATOR |
//! | `GET /api/users/{id}` | ORDINARY_USER 또는 ADMINISTRATOR + 본인-또는-관리자 |
//! | `PUT /api/users/{id}` | ORDINARY_USER 또는 ADMINISTRATOR + 본인-또는-관리자 |
//! | `DELETE /api/users/{id}` | ADMINISTRATOR |

use actix_web::{HttpResponse, delete, get, put, web};

use crate::domain::dto::users::request::UpdateUserRequest;
use crate::domain::entities::roles::role::RoleName;
use crate::domain::models::auth::authenticated_user::OptionalIdentity;
use crate::domain::models::auth::authorization::{RequiredRole, authorize, authorize_owner};
use crate::errors::AppError;
use crate::services::users::UserService;

/// 전체 사용자 목록 조회 핸들러 (관리자 전용)
///
/// # Endpoint
/// `GET /api/users`
#[get("")]
pub async fn list_users(
    identity: OptionalIdentity,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    authorize(
        identity.as_ref(),
        &RequiredRole::single(RoleName::Administrator),
    )?;

    let list = users.list_users().await?;

    Ok(HttpResponse::Ok().json(list))
}

/// 사용자 단건 조회 핸들러
///
/// 일반 사용자는 본인 계정만, 관리자는 모든 계정을 조회할 수 있습니다.
///
/// # Endpoint
/// `GET /api/users/{id}`
#[get("/{id}")]
pub async fn get_user(
    identity: OptionalIdentity,
    path: web::Path<String>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let identity = authorize(
        identity.as_ref(),
        &RequiredRole::any(vec![RoleName::OrdinaryUser, RoleName::Administrator]),
    )?;
    authorize_owner(identity, &id)?;

    let user = users.get_user(&id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 정보 수정 핸들러
///
/// 일반 사용자는 본인 계정만, 관리자는 모든 계정을 수정할 수 있습니다.
///
/// # Endpoint
/// `PUT /api/users/{id}`
#[put("/{id}")]
pub async fn update_user(
    identity: OptionalIdentity,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let identity = authorize(
        identity.as_ref(),
        &RequiredRole::any(vec![RoleName::OrdinaryUser, RoleName::Administrator]),
    )?;
    authorize_owner(identity, &id)?;

    let updated = users.update_user(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 사용자 삭제 핸들러 (관리자 전용)
///
/// # Endpoint
/// `DELETE /api/users/{id}`
#[delete("/{id}")]
pub async fn delete_user(
    identity: OptionalIdentity,
    path: web::Path<String>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    authorize(
        identity.as_ref(),
        &RequiredRole::single(RoleName::Administrator),
    )?;

    let message = users.delete_user(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(message))
}
