// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0

//! Integration tests for the role service against the in-memory repository:
//! create/get round-trips, validation short-circuits, not-found paths,
//! update/delete semantics and pagination.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use atrium_core::application::{RoleService, ServiceError, StandardRoleService};
use atrium_core::domain::repository::{RepositoryError, RoleRepository};
use atrium_core::domain::role::{CreateRoleInput, RoleRecord, RoleUuid, UpdateRoleInput};
use atrium_core::infrastructure::repositories::InMemoryRoleRepository;

fn service() -> StandardRoleService {
    StandardRoleService::new(Arc::new(InMemoryRoleRepository::new()))
}

fn create_input(title: &str) -> CreateRoleInput {
    CreateRoleInput {
        title: title.to_string(),
    }
}

/// Counts every repository call so tests can assert that invalid input
/// never reaches storage.
#[derive(Default)]
struct CountingRoleRepository {
    calls: AtomicUsize,
}

impl CountingRoleRepository {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoleRepository for CountingRoleRepository {
    async fn get(&self, uuid: RoleUuid) -> Result<RoleRecord, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RepositoryError::NotFound(uuid.to_string()))
    }

    async fn query(&self, _offset: i64, _limit: i64) -> Result<Vec<RoleRecord>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }

    async fn create(&self, _record: RoleRecord) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn update(&self, _record: RoleRecord) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, uuid: RoleUuid) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RepositoryError::NotFound(uuid.to_string()))
    }
}

#[tokio::test]
async fn create_assigns_uuid_and_round_trips() {
    let service = service();

    let created = service.create(create_input("Admin")).await.unwrap();
    assert_eq!(created.title, "Admin");
    assert_eq!(created.created_at, created.updated_at);

    let fetched = service.get(created.uuid).await.unwrap();
    assert_eq!(fetched.title, "Admin");
    assert_eq!(fetched.uuid, created.uuid);
}

#[tokio::test]
async fn create_assigns_distinct_uuids() {
    let service = service();

    let first = service.create(create_input("Admin")).await.unwrap();
    let second = service.create(create_input("Admin")).await.unwrap();

    // Same title is fine; the instances are unrelated.
    assert_ne!(first.uuid, second.uuid);
}

#[tokio::test]
async fn create_rejects_empty_title_before_storage() {
    let repo = Arc::new(CountingRoleRepository::default());
    let service = StandardRoleService::new(repo.clone());

    let err = service.create(create_input("")).await.unwrap_err();
    match err {
        ServiceError::Validation(violation) => assert_eq!(violation.field, "title"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn create_rejects_overlong_title_before_storage() {
    let repo = Arc::new(CountingRoleRepository::default());
    let service = StandardRoleService::new(repo.clone());

    let err = service
        .create(create_input(&"x".repeat(129)))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn update_rejects_invalid_title_before_storage() {
    let repo = Arc::new(CountingRoleRepository::default());
    let service = StandardRoleService::new(repo.clone());

    let err = service
        .update(UpdateRoleInput {
            uuid: RoleUuid::new(),
            title: String::new(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn create_accepts_title_at_limit() {
    let service = service();
    let created = service.create(create_input(&"x".repeat(128))).await.unwrap();
    assert_eq!(created.title.len(), 128);
}

#[tokio::test]
async fn get_unknown_uuid_is_not_found() {
    let service = service();
    let err = service.get(RoleUuid::new()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn update_unknown_uuid_is_not_found() {
    let service = service();
    let err = service
        .update(UpdateRoleInput {
            uuid: RoleUuid::new(),
            title: "Admin".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn delete_unknown_uuid_is_not_found() {
    let service = service();
    let err = service.delete(RoleUuid::new()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn update_replaces_title_and_refreshes_updated_at() {
    let service = service();
    let created = service.create(create_input("Admin")).await.unwrap();

    tokio::time::sleep(Duration::from_millis(2)).await;
    let updated = service
        .update(UpdateRoleInput {
            uuid: created.uuid,
            title: "Super Admin".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(updated.title, "Super Admin");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let fetched = service.get(created.uuid).await.unwrap();
    assert_eq!(fetched.title, "Super Admin");
    assert_eq!(fetched.updated_at, updated.updated_at);
}

#[tokio::test]
async fn delete_returns_last_known_state() {
    let service = service();
    let created = service.create(create_input("Admin")).await.unwrap();

    let deleted = service.delete(created.uuid).await.unwrap();
    assert_eq!(deleted, created);

    let err = service.get(created.uuid).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn count_tracks_live_records() {
    let service = service();
    assert_eq!(service.count().await.unwrap(), 0);

    let first = service.create(create_input("a")).await.unwrap();
    service.create(create_input("b")).await.unwrap();
    assert_eq!(service.count().await.unwrap(), 2);

    service.delete(first.uuid).await.unwrap();
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn query_never_exceeds_limit_and_reports_full_count() {
    let service = service();
    for title in ["a", "b", "c"] {
        service.create(create_input(title)).await.unwrap();
    }

    let page = service.query(1, 1).await.unwrap();
    assert_eq!(page.roles.len(), 1);
    assert_eq!(page.roles[0].title, "b");
    assert_eq!(page.total_count, 3);
    assert_eq!(page.offset, 1);
    assert_eq!(page.limit, 1);
}

#[tokio::test]
async fn query_past_end_is_empty() {
    let service = service();
    service.create(create_input("a")).await.unwrap();

    let page = service.query(10, 5).await.unwrap();
    assert!(page.roles.is_empty());
    assert_eq!(page.total_count, 1);
}

#[tokio::test]
async fn admin_lifecycle_scenario() {
    let service = service();

    let created = service.create(create_input("Admin")).await.unwrap();
    assert_eq!(created.title, "Admin");

    service
        .update(UpdateRoleInput {
            uuid: created.uuid,
            title: "Super Admin".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(service.get(created.uuid).await.unwrap().title, "Super Admin");

    let count_before = service.count().await.unwrap();
    service.delete(created.uuid).await.unwrap();

    assert!(matches!(
        service.get(created.uuid).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert_eq!(service.count().await.unwrap(), count_before - 1);
}
