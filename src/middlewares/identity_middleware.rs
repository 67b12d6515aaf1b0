//! 요청 식별자 인터셉터
//!
//! 모든 인바운드 요청에서 정확히 한 번 실행되어 베어러 토큰을 검증하고,
//! 성공 시 요청 범위의 인증 식별자를 부착합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::identity_inner::IdentityMiddlewareService;

/// 식별자 인터셉터 미들웨어
///
/// fail-open 설계입니다. 토큰이 없거나 유효하지 않아도 요청을 중단하지
/// 않고 익명으로 진행시킵니다. 보호된 엔드포인트의 거부(401/403)는
/// 전적으로 인가 가드가 담당하므로, 공개 엔드포인트는 토큰 상태와
/// 무관하게 항상 접근 가능합니다.
pub struct IdentityMiddleware;

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for IdentityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = IdentityMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
