//! # 사용자 관리 서비스
//!
//! 사용자 계정의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! Spring Framework의 `UserService` 패턴을 따르며, 가입(등록)과
//! 계정 조회/수정/삭제를 담당합니다.
//!
//! ## 가입 흐름의 일관성 계약
//!
//! 사용자명/이메일 중복은 두 단계로 방어됩니다:
//!
//! 1. **사전 검사**: `exists_by_*` 조회로 대부분의 중복을 조기에 차단
//! 2. **유니크 제약**: 경합 상황에서 저장소의 유니크 인덱스 위반이
//!    `DuplicateUsername` / `DuplicateEmail`로 올라옴
//!
//! 두 경로 모두 예외가 아닌 메시지 페이로드로 복구되어 호출자에게
//! 200 응답으로 전달됩니다.

use std::sync::Arc;

use bcrypt::hash;

use crate::config::PasswordConfig;
use crate::domain::dto::users::request::{SignupRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{MessageResponse, UserResponse};
use crate::domain::entities::roles::role::RoleName;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::roles::role_repo::RoleStore;
use crate::repositories::users::user_repo::UserStore;

/// 가입 성공 메시지
const MSG_REGISTERED: &str = "User registered successfully!";
/// 사용자명 중복 메시지
const MSG_USERNAME_TAKEN: &str = "Error: Username is already taken!";
/// 이메일 중복 메시지
const MSG_EMAIL_IN_USE: &str = "Error: Email is already in use!";

/// 사용자 관리 서비스
pub struct UserService {
    /// 사용자 계정 저장소
    users: Arc<dyn UserStore>,
    /// 역할 기준 데이터 저장소
    roles: Arc<dyn RoleStore>,
}

impl UserService {
    /// 새 사용자 서비스 생성
    pub fn new(users: Arc<dyn UserStore>, roles: Arc<dyn RoleStore>) -> Self {
        Self { users, roles }
    }

    /// 새 사용자 계정을 등록합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 사용자명/이메일 중복 사전 검사
    /// 2. 비밀번호 bcrypt 해싱 (환경별 cost)
    /// 3. 역할 라벨 해석 (알 수 없는 라벨은 무시, 빈 결과는 ORDINARY_USER)
    /// 4. 영구 저장 (경합 시 유니크 제약 위반을 중복 메시지로 복구)
    ///
    /// 가입 시 토큰은 발급되지 않습니다. 호출자는 이후 로그인해야 합니다.
    ///
    /// # Returns
    ///
    /// 성공/중복 모두 `MessageResponse`로 반환됩니다 (중복은 에러가 아닌
    /// 복구된 결과로 취급).
    pub async fn register(&self, request: SignupRequest) -> AppResult<MessageResponse> {
        if self.users.exists_by_username(&request.username).await? {
            return Ok(MessageResponse::new(MSG_USERNAME_TAKEN));
        }

        if self.users.exists_by_email(&request.email).await? {
            return Ok(MessageResponse::new(MSG_EMAIL_IN_USE));
        }

        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let roles = self.resolve_roles(request.roles.as_deref()).await?;

        let user = User::new(
            request.username,
            request.email,
            password_hash,
            request.first_name,
            request.last_name,
            request.phone,
            roles,
        );

        match self.users.insert(user).await {
            Ok(created) => {
                log::info!("사용자 등록 완료: {}", created.username);
                Ok(MessageResponse::new(MSG_REGISTERED))
            }
            // 사전 검사를 통과한 경합 케이스: 유니크 제약 위반을 동일한 메시지로 복구
            Err(AppError::DuplicateUsername(_)) => Ok(MessageResponse::new(MSG_USERNAME_TAKEN)),
            Err(AppError::DuplicateEmail(_)) => Ok(MessageResponse::new(MSG_EMAIL_IN_USE)),
            Err(e) => Err(e),
        }
    }

    /// 요청된 역할 라벨 목록을 역할 집합으로 해석합니다.
    ///
    /// 닫힌 집합에 속하지 않는 라벨은 거부되지 않고 경고 로그와 함께
    /// 무시됩니다. 결과가 비어 있으면 기본 역할 ORDINARY_USER가 적용됩니다.
    /// 해석된 각 역할은 저장소에 레코드가 존재해야 하며, 없으면 시딩이
    /// 누락된 배포이므로 `UnknownRole`로 실패합니다.
    async fn resolve_roles(&self, labels: Option<&[String]>) -> AppResult<Vec<RoleName>> {
        let mut resolved: Vec<RoleName> = Vec::new();

        for label in labels.unwrap_or_default() {
            match RoleName::from_label(label) {
                Some(name) => {
                    self.roles
                        .find_by_name(name)
                        .await?
                        .ok_or_else(|| AppError::UnknownRole(label.clone()))?;

                    if !resolved.contains(&name) {
                        resolved.push(name);
                    }
                }
                None => {
                    log::warn!("알 수 없는 역할 라벨 무시: '{}'", label);
                }
            }
        }

        if resolved.is_empty() {
            self.roles
                .find_by_name(RoleName::OrdinaryUser)
                .await?
                .ok_or_else(|| AppError::UnknownRole("ORDINARY_USER".to_string()))?;

            resolved.push(RoleName::OrdinaryUser);
        }

        Ok(resolved)
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 존재하지 않음
    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", id)))?;

        Ok(UserResponse::from(user))
    }

    /// 전체 사용자 목록을 조회합니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.users.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 정보를 수정합니다.
    ///
    /// 제공된 필드만 변경됩니다. 사용자명/이메일/비밀번호는 이 경로로
    /// 변경할 수 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 존재하지 않음
    pub async fn update_user(
        &self,
        id: &str,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", id)))?;

        if let Some(first_name) = request.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = request.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(phone) = request.phone {
            user.phone = Some(phone);
        }
        if let Some(enabled) = request.enabled {
            user.enabled = enabled;
        }
        user.updated_at = mongodb::bson::DateTime::now();

        let updated = self
            .users
            .update(&user)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found with id: {}", id)))?;

        Ok(UserResponse::from(updated))
    }

    /// 사용자 계정을 삭제합니다.
    ///
    /// 관리자 전용 운영 작업입니다. 대상이 없어도 에러가 아닌
    /// 메시지로 응답합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<MessageResponse> {
        if self.users.delete(id).await? {
            log::info!("사용자 삭제 완료: {}", id);
            Ok(MessageResponse::new("User deleted successfully"))
        } else {
            Ok(MessageResponse::new(format!(
                "User not found with id: {}",
                id
            )))
        }
    }
}
