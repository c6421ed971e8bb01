mod common;

use common::{buyer, create_test_pool, seller};

use st_core::{Identity, Role, SellerStatus};
use st_db::{UserFilter, UserRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_new_identity_when_inserted_then_can_be_found_by_email() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    let identity = buyer("a@x.com");

    // When
    let result = repo.insert(&identity).await.unwrap();

    // Then
    assert_that!(result.inserted_id, some(eq(&identity.id.to_string())));
    let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_that!(found.id, eq(identity.id));
    assert_that!(found.role, some(eq(Role::Buyer)));
}

#[tokio::test]
async fn given_registered_email_when_inserted_again_then_insert_is_skipped() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    repo.insert(&buyer("a@x.com")).await.unwrap();

    // When
    let result = repo.insert(&seller("a@x.com")).await.unwrap();

    // Then: still one record, still a buyer
    assert_that!(result.inserted_id, none());
    let all = repo.find(&UserFilter::default()).await.unwrap();
    assert_that!(all.len(), eq(1));
    assert_that!(all[0].role, some(eq(Role::Buyer)));
}

#[tokio::test]
async fn given_unknown_email_when_finding_then_returns_none() {
    let repo = UserRepository::new(create_test_pool().await);

    let result = repo.find_by_email("nobody@x.com").await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_mixed_roles_when_filtering_by_role_then_only_matching_returned() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    repo.insert(&buyer("b1@x.com")).await.unwrap();
    repo.insert(&buyer("b2@x.com")).await.unwrap();
    repo.insert(&seller("s1@x.com")).await.unwrap();

    // When
    let buyers = repo.find(&UserFilter::by_role(Role::Buyer)).await.unwrap();
    let sellers = repo.find(&UserFilter::by_role(Role::Seller)).await.unwrap();

    // Then
    assert_that!(buyers.len(), eq(2));
    assert_that!(sellers.len(), eq(1));
    assert_that!(sellers[0].status, some(eq(SellerStatus::Pending)));
}

#[tokio::test]
async fn given_seller_when_status_set_to_verified_then_role_is_unchanged() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    let identity = seller("s@x.com");
    repo.insert(&identity).await.unwrap();

    // When
    let result = repo
        .set_seller_status(identity.id, SellerStatus::Verified)
        .await
        .unwrap();

    // Then
    assert_that!(result.modified_count, eq(1));
    let found = repo.find_by_id(identity.id).await.unwrap().unwrap();
    assert_that!(found.role, some(eq(Role::Seller)));
    assert_that!(found.is_verified_seller(), eq(true));
}

#[tokio::test]
async fn given_buyer_when_seller_status_set_then_nothing_matches() {
    let repo = UserRepository::new(create_test_pool().await);
    let identity = buyer("b@x.com");
    repo.insert(&identity).await.unwrap();

    let result = repo
        .set_seller_status(identity.id, SellerStatus::Verified)
        .await
        .unwrap();

    assert_that!(result.matched_count, eq(0));
}

#[tokio::test]
async fn given_buyer_when_role_changed_to_seller_then_status_becomes_pending() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    let identity = buyer("b@x.com");
    repo.insert(&identity).await.unwrap();

    // When
    repo.set_role(identity.id, Some(Role::Seller)).await.unwrap();

    // Then
    let found = repo.find_by_email("b@x.com").await.unwrap().unwrap();
    assert_that!(found.role, some(eq(Role::Seller)));
    assert_that!(found.status, some(eq(SellerStatus::Pending)));
}

#[tokio::test]
async fn given_existing_buyer_when_ensuring_admin_then_role_is_promoted() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    repo.insert(&buyer("root@x.com")).await.unwrap();

    // When
    repo.ensure_role(&Identity::admin("root@x.com")).await.unwrap();

    // Then
    let found = repo.find_by_email("root@x.com").await.unwrap().unwrap();
    assert_that!(found.role, some(eq(Role::Admin)));
}

#[tokio::test]
async fn given_verified_seller_when_demoted_to_buyer_then_status_is_cleared() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    let identity = seller("s@x.com");
    repo.insert(&identity).await.unwrap();
    repo.set_seller_status(identity.id, SellerStatus::Verified)
        .await
        .unwrap();

    // When
    repo.set_role(identity.id, Some(Role::Buyer)).await.unwrap();

    // Then
    let found = repo.find_by_email("s@x.com").await.unwrap().unwrap();
    assert_that!(found.role, some(eq(Role::Buyer)));
    assert_that!(found.status, none());
}

#[tokio::test]
async fn given_existing_seller_when_ensuring_admin_then_status_is_cleared() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    repo.insert(&seller("root@x.com")).await.unwrap();

    // When
    repo.ensure_role(&Identity::admin("root@x.com")).await.unwrap();

    // Then
    let found = repo.find_by_email("root@x.com").await.unwrap().unwrap();
    assert_that!(found.role, some(eq(Role::Admin)));
    assert_that!(found.status, none());
}

#[tokio::test]
async fn given_verified_seller_when_ensured_as_seller_again_then_status_is_kept() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    let identity = seller("s@x.com");
    repo.insert(&identity).await.unwrap();
    repo.set_seller_status(identity.id, SellerStatus::Verified)
        .await
        .unwrap();

    // When
    repo.ensure_role(&seller("s@x.com")).await.unwrap();

    // Then
    let found = repo.find_by_email("s@x.com").await.unwrap().unwrap();
    assert_that!(found.status, some(eq(SellerStatus::Verified)));
}

#[tokio::test]
async fn given_seller_when_deleted_as_buyer_then_record_survives() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    let identity = seller("s@x.com");
    repo.insert(&identity).await.unwrap();

    // When
    let wrong_role = repo.delete_with_role(identity.id, Role::Buyer).await.unwrap();
    let right_role = repo.delete_with_role(identity.id, Role::Seller).await.unwrap();

    // Then
    assert_that!(wrong_role.deleted_count, eq(0));
    assert_that!(right_role.deleted_count, eq(1));
    assert_that!(repo.find_by_id(identity.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_missing_id_when_deleting_then_zero_count() {
    let repo = UserRepository::new(create_test_pool().await);

    let result = repo.delete_with_role(Uuid::new_v4(), Role::Buyer).await.unwrap();

    assert_that!(result.deleted_count, eq(0));
}
