//! 이커머스 사용자 서비스
//!
//! Rust 기반의 사용자 관리 및 인증 서비스입니다.
//! 상태 없는 JWT 베어러 토큰 인증과 역할 기반 접근 제어(RBAC)를 제공합니다.
//!
//! # Features
//!
//! - **상태 없는 인증**: 서버 측 세션 없이 HS256 서명 토큰만으로 식별
//! - **역할 기반 인가**: 닫힌 역할 집합 {ORDINARY_USER, MODERATOR, ADMINISTRATOR}
//! - **소유권 검사**: 본인-또는-관리자(self-match) 술어
//! - **사용자 관리**: 가입, 조회, 수정, 삭제
//! - **MongoDB**: 계정/역할 데이터 영구 저장 (trait 경계 뒤)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  IdentityMiddleware  │ ← 요청당 1회 토큰 검증, 식별자 부착 (fail-open)
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │ Authorization Guard  │ ← 역할/소유권 술어 평가 (401/403)
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │      Handlers        │ ← 요청/응답 처리
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │      Services        │ ← 인증, 토큰 코덱, 계정 관리
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │   Store Traits       │ ← UserStore / RoleStore (MongoDB 구현)
//! └──────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use ecommerce_user_service::services::auth::{AuthService, TokenService};
//!
//! let tokens = Arc::new(TokenService::from_env());
//! let auth = AuthService::new(user_store, tokens.clone());
//!
//! let response = auth.authenticate(&login_request).await?;
//! println!("token: {}", response.token);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
