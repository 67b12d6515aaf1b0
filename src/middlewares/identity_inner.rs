//! IdentityMiddleware 식별자 부착 로직의 핵심 기능
use std::rc::Rc;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::repositories::users::user_repo::UserStore;
use crate::services::auth::token_service::TokenService;

/// 실제 식별자 부착 로직을 수행하는 서비스
pub struct IdentityMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            attach_identity(&req).await;

            // 식별자 부착 여부와 무관하게 다음 서비스로 요청 전달
            service.call(req).await
        })
    }
}

/// 요청에서 베어러 토큰을 추출/검증하고 인증 식별자를 부착합니다.
///
/// 모든 실패 경로는 로그만 남기고 조용히 반환합니다. 식별자가 부착되지
/// 않은 요청은 이후 인가 가드에서 보호된 엔드포인트에 한해 401로
/// 거부됩니다.
async fn attach_identity(req: &ServiceRequest) {
    let Some(tokens) = req.app_data::<web::Data<TokenService>>() else {
        log::error!("TokenService가 애플리케이션에 등록되지 않았습니다");
        return;
    };
    let Some(users) = req.app_data::<web::Data<dyn UserStore>>() else {
        log::error!("UserStore가 애플리케이션에 등록되지 않았습니다");
        return;
    };

    // Authorization 헤더가 없거나 Bearer 형식이 아니면 익명 요청
    let Some(auth_header) = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return;
    };
    let Some(token) = TokenService::extract_bearer_token(auth_header) else {
        return;
    };

    let subject = match tokens.validate(token) {
        Ok(subject) => subject,
        Err(e) => {
            log::warn!("토큰 검증 실패, 익명으로 진행: {}", e);
            return;
        }
    };

    // 주체 사용자명으로 계정을 로드하고 역할을 권한 집합으로 해석 (1회 조인)
    match users.find_by_username(&subject).await {
        Ok(Some(account)) if account.enabled => {
            let identity = AuthenticatedUser::from_account(&account);
            log::debug!("식별자 부착: {}", identity.username);
            req.extensions_mut().insert(identity);
        }
        Ok(Some(_)) => {
            log::warn!("비활성화된 계정의 토큰, 익명으로 진행: {}", subject);
        }
        Ok(None) => {
            log::warn!("토큰 주체에 해당하는 계정 없음, 익명으로 진행: {}", subject);
        }
        Err(e) => {
            log::error!("계정 조회 실패, 익명으로 진행: {}", e);
        }
    }
}
