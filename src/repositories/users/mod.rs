//! 사용자 저장소 모듈

pub mod user_repo;

pub use user_repo::{MongoUserRepository, UserStore};
