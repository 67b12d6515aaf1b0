//! 접근 제어 검증용 핸들러
//!
//! 역할별 접근 권한을 확인할 수 있는 엔드포인트들입니다.
//! 각 엔드포인트의 역할 술어는 라우트 등록 지점의 `RoleGuard`로 선언됩니다
//! (`routes` 모듈 참고).

use actix_web::{HttpResponse, get};

/// 공개 콘텐츠 (인증 불필요)
///
/// # Endpoint
/// `GET /api/test/all`
#[get("/all")]
pub async fn all_access() -> HttpResponse {
    HttpResponse::Ok().body("Public Content.")
}

/// 일반 사용자 콘텐츠 (ORDINARY_USER / MODERATOR / ADMINISTRATOR)
///
/// # Endpoint
/// `GET /api/test/user`
#[get("")]
pub async fn user_access() -> HttpResponse {
    HttpResponse::Ok().body("User Content.")
}

/// 운영자 콘텐츠 (MODERATOR)
///
/// # Endpoint
/// `GET /api/test/mod`
#[get("")]
pub async fn moderator_access() -> HttpResponse {
    HttpResponse::Ok().body("Moderator Board.")
}

/// 관리자 콘텐츠 (ADMINISTRATOR)
///
/// # Endpoint
/// `GET /api/test/admin`
#[get("")]
pub async fn admin_access() -> HttpResponse {
    HttpResponse::Ok().body("Admin Board.")
}
