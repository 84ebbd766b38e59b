mod common;

use common::InMemoryUsers;
use rekap::cli::{CreateUserInput, create_user};
use rekap::modules::users::repository::UserRepository;
use rekap_core::verify_password;

fn input(email: &str, password: &str) -> CreateUserInput {
    CreateUserInput {
        name: " Manajer Cabang ".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        branch_id: Some(7),
    }
}

#[tokio::test]
async fn test_create_user_with_branch_scope() {
    let users = InMemoryUsers::default();

    let user = create_user(&users, input("Manajer@Rekap.test", "rahasia"))
        .await
        .unwrap();

    assert_eq!(user.name, "Manajer Cabang");
    assert_eq!(user.email, "manajer@rekap.test");
    assert_eq!(user.branch_id, Some(7));

    let stored = users.find_by_email("manajer@rekap.test").await.unwrap().unwrap();
    assert!(verify_password("rahasia", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn test_create_user_rejects_duplicate() {
    let users = InMemoryUsers::default();
    create_user(&users, input("dup@rekap.test", "rahasia")).await.unwrap();

    let err = create_user(&users, input("dup@rekap.test", "rahasia"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "User with this email already exists");
}

#[tokio::test]
async fn test_create_user_applies_password_policy() {
    let users = InMemoryUsers::default();

    let err = create_user(&users, input("short@rekap.test", "abc"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid account details");
    assert_eq!(users.len(), 0);
}
