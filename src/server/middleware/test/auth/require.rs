use axum::http::{header, HeaderMap, HeaderValue};

use super::*;

/// Tests authenticating with a bearer Authorization header.
///
/// Verifies that a token issued for an existing user, presented in the
/// Authorization header, resolves to that user.
///
/// Expected: Ok(Model) matching the created user
#[tokio::test]
async fn authenticates_with_bearer_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_auth();
    let user = factory::user::create_user(db).await?;
    let token = auth.issue_token(user.id)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let authenticated = AuthGuard::new(db, &auth, &headers).require().await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.email, user.email);

    Ok(())
}

/// Tests authenticating with the `user` cookie.
///
/// Verifies that the same token presented as a cookie among others is found
/// and verified.
///
/// Expected: Ok(Model) matching the created user
#[tokio::test]
async fn authenticates_with_user_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_auth();
    let user = factory::user::create_user(db).await?;
    let token = auth.issue_token(user.id)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("theme=dark; user={}", token)).unwrap(),
    );

    let authenticated = AuthGuard::new(db, &auth, &headers).require().await?;

    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests a request that carries no credential at all.
///
/// Expected: Err(AppError::AuthErr)
#[tokio::test]
async fn rejects_missing_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_auth();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &auth, &headers).require().await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests a syntactically valid token signed with the wrong secret.
///
/// Expected: Err(AppError::AuthErr)
#[tokio::test]
async fn rejects_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_auth();
    let user = factory::user::create_user(db).await?;

    let forger = AuthService::from_config(&Config {
        bind_addr: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        token_secret: "a-different-secret".to_string(),
        token_issuer: "crowdmap-test".to_string(),
        token_audience: "crowdmap-client".to_string(),
        token_ttl_secs: 3600,
        mail_api_url: "http://localhost/mail".to_string(),
        mail_api_key: "key".to_string(),
        mail_sender: "noreply@example.com".to_string(),
        mail_subject: "Temporary password".to_string(),
    });
    let token = forger.issue_token(user.id)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let result = AuthGuard::new(db, &auth, &headers).require().await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests a valid token whose subject was deleted after issuance.
///
/// The token still verifies, but the guard must fail the lookup rather than
/// authenticate a ghost.
///
/// Expected: Err(AppError::AuthErr)
#[tokio::test]
async fn rejects_unknown_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auth = test_auth();
    let token = auth.issue_token(4242)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    let result = AuthGuard::new(db, &auth, &headers).require().await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}
