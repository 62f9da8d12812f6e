// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0

//! Integration tests for the workspace service. The shape mirrors the role
//! service; these cover the lifecycle and the per-resource wiring.

use std::sync::Arc;
use std::time::Duration;

use atrium_core::application::{ServiceError, StandardWorkspaceService, WorkspaceService};
use atrium_core::domain::workspace::{CreateWorkspaceInput, UpdateWorkspaceInput, WorkspaceUuid};
use atrium_core::infrastructure::repositories::InMemoryWorkspaceRepository;

fn service() -> StandardWorkspaceService {
    StandardWorkspaceService::new(Arc::new(InMemoryWorkspaceRepository::new()))
}

#[tokio::test]
async fn workspace_lifecycle() {
    let service = service();

    let created = service
        .create(CreateWorkspaceInput {
            title: "Engineering".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.title, "Engineering");

    tokio::time::sleep(Duration::from_millis(2)).await;
    let updated = service
        .update(UpdateWorkspaceInput {
            uuid: created.uuid,
            title: "Platform Engineering".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let deleted = service.delete(created.uuid).await.unwrap();
    assert_eq!(deleted.title, "Platform Engineering");
    assert!(matches!(
        service.get(created.uuid).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[tokio::test]
async fn workspace_validation_rules_apply() {
    let service = service();

    let err = service
        .create(CreateWorkspaceInput {
            title: String::new(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = service
        .update(UpdateWorkspaceInput {
            uuid: WorkspaceUuid::new(),
            title: "x".repeat(200),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn workspace_query_reports_window_and_count() {
    let service = service();
    for title in ["a", "b", "c", "d"] {
        service
            .create(CreateWorkspaceInput {
                title: title.to_string(),
            })
            .await
            .unwrap();
    }

    let page = service.query(2, 5).await.unwrap();
    assert_eq!(page.workspaces.len(), 2);
    assert_eq!(page.total_count, 4);
    assert_eq!(page.offset, 2);
    assert_eq!(page.limit, 5);
}
