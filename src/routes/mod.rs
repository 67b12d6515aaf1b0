//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자 관리, 접근 제어 검증 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # 인가 구조
//!
//! 역할 술어는 두 방식으로 선언됩니다:
//!
//! - 스코프 전체가 하나의 술어를 공유하면 등록 지점에서 `RoleGuard`를 부착
//! - 같은 경로에 메서드별로 다른 술어가 필요하면 핸들러 진입 지점에서
//!   명시적 가드 함수 호출 (`handlers::users` 참고)
//!
//! 식별자 부착은 애플리케이션 전역의 `IdentityMiddleware`가 담당하므로,
//! 여기서는 판정만 선언합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{App, web};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::domain::entities::roles::role::RoleName;
use crate::handlers;
use crate::middlewares::RoleGuard;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_test_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 가입과 로그인 엔드포인트는 인증을 위한 엔드포인트이므로
/// 모두 Public 접근이 가능합니다.
///
/// # Available Routes
///
/// - `POST /api/auth/signup` - 회원가입
/// - `POST /api/auth/signin` - 로그인 (JWT 발급)
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/auth/signin \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","password":"secret1"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::signin),
    );
}

/// 사용자 관리 라우트를 설정합니다
///
/// 같은 경로(`/api/users/{id}`)에 메서드별로 다른 역할 술어가 걸리므로
/// 스코프 가드 대신 핸들러 수준의 명시적 가드를 사용합니다.
///
/// # Available Routes
///
/// - `GET /api/users` - 전체 사용자 조회 (관리자)
/// - `GET /api/users/{id}` - 단건 조회 (본인 또는 관리자)
/// - `PUT /api/users/{id}` - 정보 수정 (본인 또는 관리자)
/// - `DELETE /api/users/{id}` - 삭제 (관리자)
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 접근 제어 검증 라우트를 설정합니다
///
/// 역할별 접근 권한을 확인하는 엔드포인트입니다. 각 하위 스코프가
/// 하나의 술어를 공유하므로 등록 지점에서 `RoleGuard`를 부착합니다.
///
/// # Available Routes
///
/// - `GET /api/test/all` - 공개
/// - `GET /api/test/user` - ORDINARY_USER / MODERATOR / ADMINISTRATOR
/// - `GET /api/test/mod` - MODERATOR
/// - `GET /api/test/admin` - ADMINISTRATOR
fn configure_test_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/test")
            .service(handlers::test::all_access)
            .service(
                web::scope("/user")
                    .wrap(RoleGuard::any(vec![
                        RoleName::OrdinaryUser,
                        RoleName::Moderator,
                        RoleName::Administrator,
                    ]))
                    .service(handlers::test::user_access),
            )
            .service(
                web::scope("/mod")
                    .wrap(RoleGuard::single(RoleName::Moderator))
                    .service(handlers::test::moderator_access),
            )
            .service(
                web::scope("/admin")
                    .wrap(RoleGuard::single(RoleName::Administrator))
                    .service(handlers::test::admin_access),
            ),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "ecommerce_user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
