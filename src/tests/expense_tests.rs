use crate::core::errors::LedgerError;
use crate::core::models::User;
use crate::core::services::{LedgerService, OwnershipPolicy};
use crate::infrastructure::sessions::in_memory::InMemorySessions;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::tests::create_test_service;

async fn register_alice(service: &LedgerService<InMemoryStorage, InMemorySessions>) -> User {
    service
        .register("a@x.com", "Alice", "Str0ng!Pass#1")
        .await
        .unwrap()
}

async fn register_bob(service: &LedgerService<InMemoryStorage, InMemorySessions>) -> User {
    service
        .register("b@x.com", "Bob", "Another$Str0ngPw9")
        .await
        .unwrap()
}

#[tokio::test]
async fn add_then_list_returns_the_expense_and_total() {
    let service = create_test_service();
    let alice = register_alice(&service).await;

    service
        .add_expense(alice.id, "Coffee", "4.50", "Food", None)
        .await
        .unwrap();

    let expenses = service.expenses_for(alice.id).await.unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].title, "Coffee");
    assert_eq!(expenses[0].category, "Food");
    assert!(expenses[0].description.is_none());

    let total = service.total_for(alice.id).await.unwrap();
    assert!((total - 4.50).abs() < 1e-9);
}

#[tokio::test]
async fn listing_is_most_recent_first() {
    let service = create_test_service();
    let alice = register_alice(&service).await;

    for title in ["Rent", "Groceries", "Coffee"] {
        service
            .add_expense(alice.id, title, "10", "Misc", None)
            .await
            .unwrap();
    }

    let titles: Vec<String> = service
        .expenses_for(alice.id)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, ["Coffee", "Groceries", "Rent"]);
}

#[tokio::test]
async fn total_is_zero_without_expenses() {
    let service = create_test_service();
    let alice = register_alice(&service).await;
    assert_eq!(service.total_for(alice.id).await.unwrap(), 0.0);
}

#[tokio::test]
async fn total_sums_all_amounts() {
    let service = create_test_service();
    let alice = register_alice(&service).await;

    for amount in ["4.50", "10.25", "-2.00"] {
        service
            .add_expense(alice.id, "Item", amount, "Misc", None)
            .await
            .unwrap();
    }

    let total = service.total_for(alice.id).await.unwrap();
    assert!((total - 12.75).abs() < 1e-9);
}

#[tokio::test]
async fn listing_is_scoped_to_the_owner() {
    let service = create_test_service();
    let alice = register_alice(&service).await;
    let bob = register_bob(&service).await;

    service
        .add_expense(alice.id, "Coffee", "4.50", "Food", None)
        .await
        .unwrap();
    service
        .add_expense(bob.id, "Lunch", "12.00", "Food", None)
        .await
        .unwrap();

    let alices = service.expenses_for(alice.id).await.unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].title, "Coffee");

    let bobs = service.expenses_for(bob.id).await.unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].title, "Lunch");
}

#[tokio::test]
async fn non_numeric_amount_is_a_validation_error() {
    let service = create_test_service();
    let alice = register_alice(&service).await;

    let result = service
        .add_expense(alice.id, "Coffee", "four fifty", "Food", None)
        .await;
    assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
    assert!(service.expenses_for(alice.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_edits_fields_but_not_the_timestamp() {
    let service = create_test_service();
    let alice = register_alice(&service).await;

    let expense = service
        .add_expense(alice.id, "Coffee", "4.50", "Food", None)
        .await
        .unwrap();

    let updated = service
        .update_expense(
            alice.id,
            expense.id,
            "Espresso",
            "3.20",
            "Food",
            Some("double shot".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Espresso");
    assert!((updated.amount - 3.20).abs() < 1e-9);
    assert_eq!(updated.description.as_deref(), Some("double shot"));
    assert_eq!(updated.created_at, expense.created_at);
    assert_eq!(updated.owner_id, alice.id);
}

#[tokio::test]
async fn update_with_bad_amount_leaves_the_record_untouched() {
    let service = create_test_service();
    let alice = register_alice(&service).await;

    let expense = service
        .add_expense(alice.id, "Coffee", "4.50", "Food", None)
        .await
        .unwrap();

    let result = service
        .update_expense(alice.id, expense.id, "Espresso", "n/a", "Food", None)
        .await;
    assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));

    let stored = &service.expenses_for(alice.id).await.unwrap()[0];
    assert_eq!(stored.title, "Coffee");
    assert!((stored.amount - 4.50).abs() < 1e-9);
}

#[tokio::test]
async fn deleting_an_unknown_id_is_not_found() {
    let service = create_test_service();
    let alice = register_alice(&service).await;

    let result = service.delete_expense(alice.id, 999).await;
    assert!(matches!(result, Err(LedgerError::ExpenseNotFound(999))));
}

#[tokio::test]
async fn updating_an_unknown_id_is_not_found() {
    let service = create_test_service();
    let alice = register_alice(&service).await;

    let result = service
        .update_expense(alice.id, 999, "Coffee", "4.50", "Food", None)
        .await;
    assert!(matches!(result, Err(LedgerError::ExpenseNotFound(999))));
}

#[tokio::test]
async fn delete_removes_the_expense() {
    let service = create_test_service();
    let alice = register_alice(&service).await;

    let expense = service
        .add_expense(alice.id, "Coffee", "4.50", "Food", None)
        .await
        .unwrap();
    service.delete_expense(alice.id, expense.id).await.unwrap();

    assert!(service.expenses_for(alice.id).await.unwrap().is_empty());
    assert_eq!(service.total_for(alice.id).await.unwrap(), 0.0);
}

#[tokio::test]
async fn ownership_is_enforced_by_default() {
    let service = create_test_service();
    let alice = register_alice(&service).await;
    let bob = register_bob(&service).await;

    let expense = service
        .add_expense(alice.id, "Coffee", "4.50", "Food", None)
        .await
        .unwrap();

    let edit = service
        .update_expense(bob.id, expense.id, "Hijacked", "0", "Food", None)
        .await;
    assert!(matches!(edit, Err(LedgerError::ExpenseNotOwned(_))));

    let delete = service.delete_expense(bob.id, expense.id).await;
    assert!(matches!(delete, Err(LedgerError::ExpenseNotOwned(_))));

    let stored = &service.expenses_for(alice.id).await.unwrap()[0];
    assert_eq!(stored.title, "Coffee");
}

#[tokio::test]
async fn unchecked_policy_reproduces_the_legacy_behavior() {
    let service = LedgerService::new(InMemoryStorage::new(), InMemorySessions::new(3600))
        .with_ownership_policy(OwnershipPolicy::Unchecked);
    let alice = register_alice(&service).await;
    let bob = register_bob(&service).await;

    let expense = service
        .add_expense(alice.id, "Coffee", "4.50", "Food", None)
        .await
        .unwrap();

    // Any authenticated user can mutate any expense by id in this mode.
    service
        .update_expense(bob.id, expense.id, "Espresso", "3.20", "Food", None)
        .await
        .unwrap();
    service.delete_expense(bob.id, expense.id).await.unwrap();
    assert!(service.expenses_for(alice.id).await.unwrap().is_empty());
}
