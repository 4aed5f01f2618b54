//! Referential integrity of the in-memory tables.

use chrono::Utc;
use futures::future::join_all;
use rust_decimal_macros::dec;
use std::collections::BTreeSet;
use std::sync::Arc;

use sharesapp_core::companies::{CompanyRepositoryTrait, NewCompany};
use sharesapp_core::errors::{ErrorKind, StoreError};
use sharesapp_core::shares::{NewShare, ShareRepositoryTrait};
use sharesapp_core::users::{NewUser, UserRepositoryTrait};
use sharesapp_core::Error;
use sharesapp_storage_memory::{CompanyRepository, MemoryStore, ShareRepository, UserRepository};

fn repositories() -> (CompanyRepository, ShareRepository, UserRepository) {
    let store = MemoryStore::new();
    (
        CompanyRepository::new(store.clone()),
        ShareRepository::new(store.clone()),
        UserRepository::new(store),
    )
}

fn is_constraint_violation(err: &Error) -> bool {
    matches!(err, Error::Store(StoreError::ConstraintViolation(_)))
}

#[tokio::test]
async fn test_ids_are_assigned_per_table() {
    let (companies, shares, users) = repositories();

    let acme = companies.insert(NewCompany::new("Acme")).await.unwrap();
    let globex = companies.insert(NewCompany::new("Globex")).await.unwrap();
    let share = shares
        .insert(NewShare::new("ACM", acme.id, dec!(10)))
        .await
        .unwrap();
    let ada = users.insert(NewUser::new("Ada", "Lovelace")).await.unwrap();

    assert_eq!((acme.id, globex.id), (1, 2));
    assert_eq!(share.id, 1);
    assert_eq!(ada.id, 1);
    assert_eq!(companies.find_by_id(2).unwrap(), Some(globex));
    assert!(companies.find_by_id(3).unwrap().is_none());
}

#[tokio::test]
async fn test_share_insert_requires_existing_company() {
    let (_, shares, _) = repositories();

    let err = shares
        .insert(NewShare::new("ACM", 7, dec!(10)))
        .await
        .unwrap_err();
    assert!(is_constraint_violation(&err));
    assert_eq!(err.kind(), ErrorKind::Internal);

    let orphan = NewShare {
        symbol: "ORP".to_string(),
        last_sale_price: Some(dec!(1)),
        last_time_updated: Some(Utc::now()),
        ..Default::default()
    };
    assert!(is_constraint_violation(
        &shares.insert(orphan).await.unwrap_err()
    ));
    assert!(shares.find_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_share_batch_writes_nothing_on_failure() {
    let (companies, shares, _) = repositories();
    let acme = companies.insert(NewCompany::new("Acme")).await.unwrap();

    let err = shares
        .insert_many(vec![
            NewShare::new("A", acme.id, dec!(1)),
            NewShare::new("B", 99, dec!(2)),
        ])
        .await
        .unwrap_err();

    assert!(is_constraint_violation(&err));
    assert!(shares.find_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_save_rejects_unknown_rows_and_dangling_ids() {
    let (companies, shares, users) = repositories();
    let mut acme = companies.insert(NewCompany::new("Acme")).await.unwrap();

    acme.share_ids = BTreeSet::from([5]);
    assert!(is_constraint_violation(
        &companies.save(acme.clone()).await.unwrap_err()
    ));

    let mut ghost = acme.clone();
    ghost.id = 42;
    ghost.share_ids.clear();
    assert!(is_constraint_violation(&companies.save(ghost).await.unwrap_err()));

    let mut ada = users.insert(NewUser::new("Ada", "Lovelace")).await.unwrap();
    ada.share_ids.insert(3);
    assert!(is_constraint_violation(&users.save(ada).await.unwrap_err()));

    let mut share = shares
        .insert(NewShare::new("ACM", acme.id, dec!(1)))
        .await
        .unwrap();
    share.user_ids.insert(9);
    assert!(is_constraint_violation(&shares.save(share).await.unwrap_err()));
}

#[tokio::test]
async fn test_delete_refuses_referenced_rows() {
    let (companies, shares, users) = repositories();
    let mut acme = companies.insert(NewCompany::new("Acme")).await.unwrap();
    let mut share = shares
        .insert(NewShare::new("ACM", acme.id, dec!(1)))
        .await
        .unwrap();
    let mut ada = users.insert(NewUser::new("Ada", "Lovelace")).await.unwrap();

    acme.share_ids.insert(share.id);
    let acme = companies.save(acme).await.unwrap();
    share.user_ids.insert(ada.id);
    let share = shares.save(share).await.unwrap();
    ada.share_ids.insert(share.id);
    let ada = users.save(ada).await.unwrap();

    assert!(is_constraint_violation(
        &companies.delete_by_id(acme.id).await.unwrap_err()
    ));
    assert!(is_constraint_violation(
        &shares.delete_by_id(share.id).await.unwrap_err()
    ));
    assert!(is_constraint_violation(
        &users.delete_by_id(ada.id).await.unwrap_err()
    ));

    // Unlink both sides, then everything can go
    let mut acme = acme;
    acme.share_ids.clear();
    companies.save(acme.clone()).await.unwrap();
    let mut ada = ada;
    ada.share_ids.clear();
    users.save(ada.clone()).await.unwrap();

    shares.delete_by_id(share.id).await.unwrap();
    users.delete_by_id(ada.id).await.unwrap();
    companies.delete_by_id(acme.id).await.unwrap();

    assert!(companies.find_all().unwrap().is_empty());
    assert!(shares.find_all().unwrap().is_empty());
    assert!(users.find_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_inserts_get_distinct_ids() {
    let store = MemoryStore::new();
    let users = Arc::new(UserRepository::new(store));

    let inserts = (0..25).map(|i| {
        let users = Arc::clone(&users);
        async move {
            users
                .insert(NewUser::new(format!("User{}", i), "Test"))
                .await
                .unwrap()
                .id
        }
    });
    let ids: BTreeSet<i64> = join_all(inserts).await.into_iter().collect();

    assert_eq!(ids.len(), 25);
    assert_eq!(users.find_all().unwrap().len(), 25);
}
