//! API 경계 데이터 전송 객체 모듈

pub mod users;
