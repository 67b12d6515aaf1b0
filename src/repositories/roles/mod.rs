//! 역할 저장소 모듈

pub mod role_repo;

pub use role_repo::{MongoRoleRepository, RoleStore};
