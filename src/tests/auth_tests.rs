use crate::core::errors::LedgerError;
use crate::core::password::strength_score;
use crate::tests::create_test_service;

#[test]
fn strength_scores_span_the_scale() {
    assert!(strength_score("password") < 3);
    assert!(strength_score("abc123") < 3);
    assert!(strength_score("correct horse battery staple") >= 3);
}

#[tokio::test]
async fn register_stores_a_hash_not_the_plaintext() {
    let service = create_test_service();
    let user = service
        .register("a@x.com", "Alice", "Str0ng!Pass#1")
        .await
        .unwrap();
    assert_ne!(user.password_hash, "Str0ng!Pass#1");
    assert!(user.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn weak_password_rejected_before_email_is_consumed() {
    let service = create_test_service();
    let result = service.register("a@x.com", "Alice", "password").await;
    assert!(matches!(result, Err(LedgerError::WeakPassword)));

    // The failed attempt must not have reached the uniqueness check.
    let user = service
        .register("a@x.com", "Alice", "Str0ng!Pass#1")
        .await
        .unwrap();
    assert_eq!(user.email, "a@x.com");
}

#[tokio::test]
async fn duplicate_email_leaves_original_record_intact() {
    let service = create_test_service();
    service
        .register("a@x.com", "Alice", "Str0ng!Pass#1")
        .await
        .unwrap();

    let result = service
        .register("a@x.com", "Alice2", "Another$Str0ngPw9")
        .await;
    assert!(matches!(result, Err(LedgerError::DuplicateEmail(_))));

    // Original credentials and name survive the rejected attempt.
    let user = service.login("a@x.com", "Str0ng!Pass#1").await.unwrap();
    assert_eq!(user.name, "Alice");
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let service = create_test_service();
    service
        .register("a@x.com", "Alice", "Str0ng!Pass#1")
        .await
        .unwrap();

    let wrong_password = service.login("a@x.com", "wrong").await;
    let unknown_email = service.login("nobody@x.com", "Str0ng!Pass#1").await;
    assert!(matches!(wrong_password, Err(LedgerError::AuthFailure)));
    assert!(matches!(unknown_email, Err(LedgerError::AuthFailure)));

    let user = service.login("a@x.com", "Str0ng!Pass#1").await.unwrap();
    assert_eq!(user.email, "a@x.com");
}

#[tokio::test]
async fn registration_opens_a_session_for_the_new_user() {
    let service = create_test_service();
    let user = service
        .register("a@x.com", "Alice", "Str0ng!Pass#1")
        .await
        .unwrap();

    let token = service.start_session(user.id).await.unwrap();
    let resolved = service.current_user(&token).await.unwrap().unwrap();
    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.name, "Alice");
}
