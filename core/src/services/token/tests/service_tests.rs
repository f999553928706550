//! Token lifecycle tests against the in-memory repositories

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockTokenRepository, MockUserRepository, TokenRepository, UserRepository};
use crate::services::token::codec::TokenCodec;
use crate::services::token::config::TokenServiceConfig;
use crate::services::token::service::TokenService;

struct Harness {
    service: Arc<TokenService<MockTokenRepository, MockUserRepository>>,
    tokens: Arc<MockTokenRepository>,
    users: Arc<MockUserRepository>,
    config: TokenServiceConfig,
}

fn harness() -> Harness {
    let tokens = Arc::new(MockTokenRepository::new());
    let users = Arc::new(MockUserRepository::new());
    let config = TokenServiceConfig {
        jwt_secret: "test-secret".into(),
        ..TokenServiceConfig::default()
    };
    let service = Arc::new(TokenService::new(
        Arc::clone(&tokens),
        Arc::clone(&users),
        config.clone(),
    ));
    Harness {
        service,
        tokens,
        users,
        config,
    }
}

async fn registered_user(users: &MockUserRepository) -> User {
    let user = User::new("Ada".into(), "ada@example.com".into(), "bcrypt-hash".into());
    users.create(user).await.unwrap()
}

#[tokio::test]
async fn issue_then_verify_round_trip() {
    let h = harness();
    let user = registered_user(&h.users).await;

    let pair = h.service.issue_tokens(&user).await.unwrap();
    assert_eq!(pair.expires_in, h.config.access_token_lifetime_minutes * 60);
    assert_eq!(pair.refresh_token.len(), 32);
    assert_eq!(h.tokens.len().await, 1);

    let verified = h.service.verify_access_token(&pair.access_token).await.unwrap();
    assert_eq!(verified.id, user.id);
    assert_eq!(verified.email, user.email);
}

#[tokio::test]
async fn raw_refresh_value_is_not_stored() {
    let h = harness();
    let user = registered_user(&h.users).await;

    let pair = h.service.issue_tokens(&user).await.unwrap();

    // Only the hash is persisted, so a lookup by the raw value finds nothing.
    assert!(h
        .tokens
        .find_active_by_hash(&pair.refresh_token)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn tampered_token_is_invalid_not_expired() {
    let h = harness();
    let user = registered_user(&h.users).await;
    let pair = h.service.issue_tokens(&user).await.unwrap();

    // Flip the last signature character.
    let mut tampered = pair.access_token.clone();
    let last = if tampered.ends_with('x') { 'y' } else { 'x' };
    tampered.pop();
    tampered.push(last);

    let err = h.service.verify_access_token(&tampered).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature | TokenError::InvalidTokenFormat)
    ));
}

#[tokio::test]
async fn expired_access_token_is_reported_as_expired() {
    let h = harness();
    let user = registered_user(&h.users).await;

    // Craft an already-expired token with the service's own key.
    let codec = TokenCodec::new(&h.config.jwt_secret, &h.config.issuer, &h.config.audience);
    let mut claims = Claims::new_access_token(
        user.id,
        &user.email,
        &h.config.issuer,
        &h.config.audience,
        15,
    );
    claims.iat -= 3600;
    claims.nbf -= 3600;
    claims.exp = Utc::now().timestamp() - 60;
    let stale = codec.encode(&claims).unwrap();

    let err = h.service.verify_access_token(&stale).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[tokio::test]
async fn valid_token_for_vanished_user_reads_as_invalid() {
    let h = harness();
    let user = registered_user(&h.users).await;
    let pair = h.service.issue_tokens(&user).await.unwrap();

    h.users.delete(user.id).await.unwrap();

    // Same failure as a malformed token: verification must not reveal
    // whether the subject ever existed.
    let err = h.service.verify_access_token(&pair.access_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidTokenFormat)));
}

#[tokio::test]
async fn rotation_consumes_the_old_token() {
    let h = harness();
    let user = registered_user(&h.users).await;
    let first = h.service.issue_tokens(&user).await.unwrap();

    let second = h
        .service
        .rotate_tokens(&first.refresh_token)
        .await
        .unwrap()
        .unwrap();
    assert_ne!(second.refresh_token, first.refresh_token);
    assert_eq!(h.tokens.len().await, 1);

    // Replaying the consumed value yields nothing.
    assert!(h
        .service
        .rotate_tokens(&first.refresh_token)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn rotation_chain_stays_single_use() {
    let h = harness();
    let user = registered_user(&h.users).await;

    let first = h.service.issue_tokens(&user).await.unwrap();
    let second = h
        .service
        .rotate_tokens(&first.refresh_token)
        .await
        .unwrap()
        .unwrap();
    let third = h
        .service
        .rotate_tokens(&second.refresh_token)
        .await
        .unwrap()
        .unwrap();

    // Every access token in the chain verifies; only the newest refresh
    // value is live.
    h.service.verify_access_token(&third.access_token).await.unwrap();
    assert!(h.service.rotate_tokens(&first.refresh_token).await.unwrap().is_none());
    assert!(h.service.rotate_tokens(&second.refresh_token).await.unwrap().is_none());
    assert_eq!(h.tokens.len().await, 1);
}

#[tokio::test]
async fn concurrent_rotation_has_exactly_one_winner() {
    let h = harness();
    let user = registered_user(&h.users).await;
    let pair = h.service.issue_tokens(&user).await.unwrap();

    let (a, b) = tokio::join!(
        h.service.rotate_tokens(&pair.refresh_token),
        h.service.rotate_tokens(&pair.refresh_token),
    );

    let winners = [a.unwrap(), b.unwrap()]
        .into_iter()
        .filter(Option::is_some)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(h.tokens.len().await, 1);
}

#[tokio::test]
async fn unknown_refresh_value_rotates_to_none() {
    let h = harness();
    registered_user(&h.users).await;

    assert!(h
        .service
        .rotate_tokens("definitely-not-a-real-token-value")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn rotation_for_vanished_user_is_none_and_consumes_the_token() {
    let h = harness();
    let user = registered_user(&h.users).await;
    let pair = h.service.issue_tokens(&user).await.unwrap();

    h.users.delete(user.id).await.unwrap();

    assert!(h.service.rotate_tokens(&pair.refresh_token).await.unwrap().is_none());
    assert!(h.tokens.is_empty().await);
}

#[tokio::test]
async fn revoke_deletes_the_record() {
    let h = harness();
    let user = registered_user(&h.users).await;
    let pair = h.service.issue_tokens(&user).await.unwrap();

    assert!(h.service.revoke_token(&pair.refresh_token).await);
    assert!(h.tokens.is_empty().await);

    // Revoking again, or rotating, finds nothing.
    assert!(!h.service.revoke_token(&pair.refresh_token).await);
    assert!(h.service.rotate_tokens(&pair.refresh_token).await.unwrap().is_none());
}

#[tokio::test]
async fn revoke_all_clears_only_that_user() {
    let h = harness();
    let ada = registered_user(&h.users).await;
    let bob = h
        .users
        .create(User::new("Bob".into(), "bob@example.com".into(), "hash".into()))
        .await
        .unwrap();

    h.service.issue_tokens(&ada).await.unwrap();
    h.service.issue_tokens(&ada).await.unwrap();
    let bob_pair = h.service.issue_tokens(&bob).await.unwrap();

    assert!(h.service.revoke_all_user_tokens(ada.id).await);
    assert_eq!(h.tokens.len().await, 1);
    assert!(h
        .service
        .rotate_tokens(&bob_pair.refresh_token)
        .await
        .unwrap()
        .is_some());

    assert!(!h.service.revoke_all_user_tokens(ada.id).await);
}

#[tokio::test]
async fn issuance_sweeps_the_users_expired_records() {
    use crate::domain::entities::token::RefreshToken;

    let h = harness();
    let user = registered_user(&h.users).await;

    let mut mine = RefreshToken::new(user.id, "my-stale-hash".into(), 7);
    mine.expires_at = Utc::now() - chrono::Duration::hours(1);
    h.tokens.save(mine).await.unwrap();

    let mut theirs = RefreshToken::new(Uuid::new_v4(), "other-stale-hash".into(), 7);
    theirs.expires_at = Utc::now() - chrono::Duration::hours(1);
    h.tokens.save(theirs).await.unwrap();

    h.service.issue_tokens(&user).await.unwrap();

    // Issuance already removed this user's expired row; only the other
    // user's remains for the global purge.
    assert_eq!(h.service.purge_expired_tokens().await.unwrap(), 1);
    assert_eq!(h.tokens.len().await, 1);
}

#[tokio::test]
async fn purge_removes_only_expired_records() {
    use crate::domain::entities::token::RefreshToken;

    let h = harness();
    let user = registered_user(&h.users).await;
    h.service.issue_tokens(&user).await.unwrap();

    let mut stale = RefreshToken::new(Uuid::new_v4(), "stale-hash".into(), 7);
    stale.expires_at = Utc::now() - chrono::Duration::hours(1);
    h.tokens.save(stale).await.unwrap();

    assert_eq!(h.service.purge_expired_tokens().await.unwrap(), 1);
    assert_eq!(h.tokens.len().await, 1);
}
