//! 역할 기반 인가 가드 미들웨어
//!
//! 라우트 등록 지점에서 스코프/리소스에 선언적으로 부착되는 가드입니다.
//! 요구 역할 술어를 데이터로 보관하며, 판정은 핸들러 수준 가드와 동일한
//! `authorize` 함수에 위임합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError, Result};
use futures_util::future::LocalBoxFuture;

use crate::domain::entities::roles::role::RoleName;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::auth::authorization::{RequiredRole, authorize};

/// 역할 가드 미들웨어
pub struct RoleGuard {
    /// 접근에 필요한 역할 술어
    required: RequiredRole,
}

impl RoleGuard {
    /// 단일 역할을 요구하는 가드 생성
    pub fn single(role: RoleName) -> Self {
        Self {
            required: RequiredRole::single(role),
        }
    }

    /// 복수 역할 중 하나를 요구하는 가드 생성
    pub fn any(roles: Vec<RoleName>) -> Self {
        Self {
            required: RequiredRole::any(roles),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RoleGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RoleGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoleGuardService {
            service: Rc::new(service),
            required: self.required.clone(),
        }))
    }
}

/// 실제 인가 판정을 수행하는 서비스
pub struct RoleGuardService<S> {
    service: Rc<S>,
    required: RequiredRole,
}

impl<S, B> Service<ServiceRequest> for RoleGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let required = self.required.clone();

        Box::pin(async move {
            let identity = req.extensions().get::<AuthenticatedUser>().cloned();

            match authorize(identity.as_ref(), &required) {
                Ok(_) => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    // 단일 응답 지점: 401/403 본문은 ResponseError 구현이 만든다
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
            }
        })
    }
}
