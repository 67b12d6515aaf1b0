//! JWT 토큰 코덱 구현
//!
//! HMAC-SHA256 서명 기반의 상태 없는 베어러 토큰을 발급하고 검증합니다.
//! 서명 비밀키와 만료 시간(TTL)은 생성 시점에 고정되어 이후 변경되지 않으므로,
//! 코덱 인스턴스는 잠금 없이 동시 호출에 안전합니다.
//!
//! 검증은 (토큰, 현재 시각, 비밀키)의 순수 함수입니다. I/O나 공유 가변
//! 상태가 없으며, 같은 토큰을 몇 번을 검증해도 결과가 같습니다
//! (일회성 소비 없음).

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::{AppError, AppResult, TokenError};

/// JWT 클레임
///
/// 토큰 페이로드는 주체(사용자명), 발급 시각, 만료 시각만을 담습니다.
/// 역할 정보는 토큰에 싣지 않고 검증 시점에 저장소에서 해석합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰 주체 (사용자명)
    pub sub: String,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 코덱
///
/// 대칭 비밀키와 고정 TTL로 토큰을 발급/검증합니다.
/// Spring Security의 `JwtUtils` 컴포넌트와 동일한 역할을 합니다.
pub struct TokenService {
    /// 서명 비밀키 (시작 시점 고정)
    secret: String,
    /// 토큰 만료 시간, 분 단위 (시작 시점 고정)
    expiration_minutes: i64,
}

impl TokenService {
    /// 비밀키와 TTL을 직접 지정하여 코덱을 생성합니다.
    pub fn new(secret: impl Into<String>, expiration_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_minutes,
        }
    }

    /// 프로세스 전역 설정으로부터 코덱을 생성합니다.
    ///
    /// 서버 기동 시 한 번 호출되며, 이후 설정은 변경되지 않습니다.
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_minutes())
    }

    /// 인증된 식별자를 위한 JWT 토큰을 발급합니다.
    ///
    /// 페이로드는 `{sub: 사용자명, iat: 현재 시각, exp: 현재 시각 + TTL}`이며
    /// HS256으로 서명됩니다. 서버 측에는 아무것도 저장되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn issue(&self, identity: &AuthenticatedUser) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.expiration_minutes);

        let claims = TokenClaims {
            sub: identity.username.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰을 검증하고 주체(사용자명)를 반환합니다.
    ///
    /// 현재 시각을 기준으로 만료를 판정합니다.
    ///
    /// # Errors
    ///
    /// * `TokenError::Empty` - 입력이 공백
    /// * `TokenError::Malformed` - 구조 파싱 불가 또는 서명 불일치
    /// * `TokenError::Unsupported` - 서명 알고리즘 불일치
    /// * `TokenError::Expired` - 현재 시각 >= 만료 시각
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        self.validate_at(token, Utc::now().timestamp())
    }

    /// 주어진 시각을 기준으로 JWT 토큰을 검증합니다.
    ///
    /// (토큰, 시각, 비밀키)의 순수 함수이므로 시간 의존 동작을
    /// 결정적으로 검증할 수 있습니다.
    pub fn validate_at(&self, token: &str, now: i64) -> Result<String, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::Empty);
        }

        // 만료는 아래에서 고정된 기준 시각으로 직접 판정한다
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        let claims = decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithmName
                | jsonwebtoken::errors::ErrorKind::MissingAlgorithm => TokenError::Unsupported,
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        if now >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims.sub)
    }

    /// Authorization 헤더 값에서 베어러 토큰을 추출합니다.
    ///
    /// `"Bearer "` 접두사가 없는 값은 에러가 아니라 "토큰 없음"으로
    /// 취급됩니다. 익명 요청은 인가 가드까지 그대로 진행됩니다.
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        auth_header.strip_prefix("Bearer ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    fn identity(username: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            account_id: "507f1f77bcf86cd799439011".to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            authorities: vec!["ORDINARY_USER".to_string()],
        }
    }

    #[test]
    fn test_issue_then_validate_returns_subject() {
        let codec = TokenService::new(TEST_SECRET, 60);
        let token = codec.issue(&identity("alice")).unwrap();

        let subject = codec.validate(&token).unwrap();
        assert_eq!(subject, "alice");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let codec = TokenService::new(TEST_SECRET, 60);
        let token = codec.issue(&identity("alice")).unwrap();

        assert_eq!(codec.validate(&token).unwrap(), "alice");
        assert_eq!(codec.validate(&token).unwrap(), "alice");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // TTL이 음수이므로 발급 즉시 만료 시각을 지난 상태가 된다
        let codec = TokenService::new(TEST_SECRET, -5);
        let token = codec.issue(&identity("alice")).unwrap();

        assert_eq!(codec.validate(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_validation_at_exact_expiry_is_rejected() {
        let codec = TokenService::new(TEST_SECRET, 10);
        let token = codec.issue(&identity("alice")).unwrap();

        let exp = Utc::now().timestamp() + 10 * 60;
        assert_eq!(codec.validate_at(&token, exp), Err(TokenError::Expired));
        assert_eq!(
            codec.validate_at(&token, exp + 1),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let codec = TokenService::new(TEST_SECRET, 60);
        let token = codec.issue(&identity("alice")).unwrap();

        let mut segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);

        // 서명 세그먼트의 첫 바이트를 비트 반전시킨다
        let mut signature = URL_SAFE_NO_PAD.decode(segments[2]).unwrap();
        signature[0] ^= 0xFF;
        let tampered_signature = URL_SAFE_NO_PAD.encode(&signature);
        segments[2] = &tampered_signature;
        let tampered = segments.join(".");

        assert!(codec.validate(&tampered).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let codec = TokenService::new(TEST_SECRET, 60);
        let other = TokenService::new("another-secret-entirely", 60);

        let token = codec.issue(&identity("alice")).unwrap();
        assert_eq!(other.validate(&token), Err(TokenError::Malformed));
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let codec = TokenService::new(TEST_SECRET, 60);

        assert_eq!(codec.validate(""), Err(TokenError::Empty));
        assert_eq!(codec.validate("   "), Err(TokenError::Empty));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let codec = TokenService::new(TEST_SECRET, 60);

        assert_eq!(
            codec.validate("not-a-jwt-at-all"),
            Err(TokenError::Malformed)
        );
        assert_eq!(codec.validate("a.b.c"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_unsupported_algorithm_is_rejected() {
        let codec = TokenService::new(TEST_SECRET, 60);

        let claims = TokenClaims {
            sub: "alice".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(codec.validate(&token), Err(TokenError::Unsupported));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(
            TokenService::extract_bearer_token("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );

        // 접두사 불일치는 에러가 아니라 "토큰 없음"
        assert_eq!(TokenService::extract_bearer_token("Basic abc"), None);
        assert_eq!(TokenService::extract_bearer_token("bearer abc"), None);
        assert_eq!(TokenService::extract_bearer_token(""), None);
    }
}
