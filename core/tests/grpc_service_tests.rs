// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0

//! gRPC adapter tests: the tonic service implementations are called
//! directly, verifying the message translation and the mapping of domain
//! errors onto status codes.

use std::sync::Arc;

use tonic::{Code, Request};

use atrium_core::application::{StandardRoleService, StandardWorkspaceService};
use atrium_core::infrastructure::repositories::{
    InMemoryRoleRepository, InMemoryWorkspaceRepository,
};
use atrium_core::presentation::grpc::server::{
    roles_proto, workspaces_proto, RoleGrpcService, WorkspaceGrpcService,
};
use roles_proto::role_service_server::RoleService as RoleServiceRpc;
use workspaces_proto::workspace_service_server::WorkspaceService as WorkspaceServiceRpc;

fn role_service() -> RoleGrpcService {
    RoleGrpcService::new(Arc::new(StandardRoleService::new(Arc::new(
        InMemoryRoleRepository::new(),
    ))))
}

fn workspace_service() -> WorkspaceGrpcService {
    WorkspaceGrpcService::new(Arc::new(StandardWorkspaceService::new(Arc::new(
        InMemoryWorkspaceRepository::new(),
    ))))
}

#[tokio::test]
async fn create_then_get_role() {
    let service = role_service();

    let created = service
        .create_role(Request::new(roles_proto::CreateRoleRequest {
            title: "Admin".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(created.title, "Admin");
    assert!(!created.uuid.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    let fetched = service
        .get_role(Request::new(roles_proto::GetRoleRequest {
            uuid: created.uuid.clone(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(fetched.uuid, created.uuid);
    assert_eq!(fetched.title, "Admin");
}

#[tokio::test]
async fn malformed_uuid_is_invalid_argument() {
    let service = role_service();

    let status = service
        .get_role(Request::new(roles_proto::GetRoleRequest {
            uuid: "not-a-uuid".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn unknown_uuid_is_not_found() {
    let service = role_service();

    let status = service
        .get_role(Request::new(roles_proto::GetRoleRequest {
            uuid: "00000000-0000-0000-0000-000000000000".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn empty_title_is_invalid_argument() {
    let service = role_service();

    let status = service
        .create_role(Request::new(roles_proto::CreateRoleRequest {
            title: String::new(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(status.message().contains("title"));
}

#[tokio::test]
async fn list_and_count_roles() {
    let service = role_service();
    for title in ["a", "b", "c"] {
        service
            .create_role(Request::new(roles_proto::CreateRoleRequest {
                title: title.to_string(),
            }))
            .await
            .unwrap();
    }

    let page = service
        .list_roles(Request::new(roles_proto::ListRolesRequest {
            offset: 1,
            limit: 2,
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(page.roles.len(), 2);
    assert_eq!(page.total_count, 3);
    assert_eq!(page.offset, 1);
    assert_eq!(page.limit, 2);

    let count = service
        .count_roles(Request::new(roles_proto::CountRolesRequest {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(count.count, 3);
}

#[tokio::test]
async fn delete_role_returns_pre_deletion_state() {
    let service = role_service();

    let created = service
        .create_role(Request::new(roles_proto::CreateRoleRequest {
            title: "Admin".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    let deleted = service
        .delete_role(Request::new(roles_proto::DeleteRoleRequest {
            uuid: created.uuid.clone(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(deleted.title, "Admin");
    assert_eq!(deleted.uuid, created.uuid);

    let status = service
        .get_role(Request::new(roles_proto::GetRoleRequest {
            uuid: created.uuid,
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn workspace_update_over_grpc() {
    let service = workspace_service();

    let created = service
        .create_workspace(Request::new(workspaces_proto::CreateWorkspaceRequest {
            title: "Engineering".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    let updated = service
        .update_workspace(Request::new(workspaces_proto::UpdateWorkspaceRequest {
            uuid: created.uuid.clone(),
            title: "Platform Engineering".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(updated.uuid, created.uuid);
    assert_eq!(updated.title, "Platform Engineering");
    assert_eq!(updated.created_at, created.created_at);
}
