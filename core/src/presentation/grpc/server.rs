// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0

//! gRPC transport adapter for the resource services.
//!
//! Thin translation layer: wire messages in, service calls out, domain
//! errors mapped onto `tonic::Status` codes. All resource semantics live in
//! the application layer.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::application::{RoleService, ServiceError, WorkspaceService};
use crate::domain::role::{CreateRoleInput, Role, RoleUuid, UpdateRoleInput};
use crate::domain::workspace::{
    CreateWorkspaceInput, UpdateWorkspaceInput, Workspace, WorkspaceUuid,
};

// Generated protobuf code
pub mod roles_proto {
    tonic::include_proto!("atrium.roles.v1");
}

pub mod workspaces_proto {
    tonic::include_proto!("atrium.workspaces.v1");
}

use roles_proto::role_service_server::RoleServiceServer;
use workspaces_proto::workspace_service_server::WorkspaceServiceServer;

fn status_from(err: ServiceError) -> Status {
    match err {
        ServiceError::Validation(violation) => Status::invalid_argument(violation.to_string()),
        ServiceError::NotFound(id) => Status::not_found(format!("no resource with uuid {}", id)),
        ServiceError::Storage(err) => {
            tracing::error!(error = %err, "storage failure");
            Status::internal("storage failure")
        }
    }
}

fn role_to_proto(role: &Role) -> roles_proto::Role {
    roles_proto::Role {
        uuid: role.uuid.to_string(),
        title: role.title.clone(),
        created_at: role.created_at.to_rfc3339(),
        updated_at: role.updated_at.to_rfc3339(),
    }
}

fn workspace_to_proto(workspace: &Workspace) -> workspaces_proto::Workspace {
    workspaces_proto::Workspace {
        uuid: workspace.uuid.to_string(),
        title: workspace.title.clone(),
        created_at: workspace.created_at.to_rfc3339(),
        updated_at: workspace.updated_at.to_rfc3339(),
    }
}

/// Implementation of the RoleService gRPC service.
pub struct RoleGrpcService {
    service: Arc<dyn RoleService>,
}

impl RoleGrpcService {
    pub fn new(service: Arc<dyn RoleService>) -> Self {
        Self { service }
    }

    pub fn into_server(self) -> RoleServiceServer<Self> {
        RoleServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl roles_proto::role_service_server::RoleService for RoleGrpcService {
    async fn list_roles(
        &self,
        request: Request<roles_proto::ListRolesRequest>,
    ) -> Result<Response<roles_proto::ListRolesResponse>, Status> {
        let req = request.into_inner();
        let page = self
            .service
            .query(req.offset, req.limit)
            .await
            .map_err(status_from)?;

        Ok(Response::new(roles_proto::ListRolesResponse {
            roles: page.roles.iter().map(role_to_proto).collect(),
            total_count: page.total_count,
            offset: page.offset,
            limit: page.limit,
        }))
    }

    async fn get_role(
        &self,
        request: Request<roles_proto::GetRoleRequest>,
    ) -> Result<Response<roles_proto::Role>, Status> {
        let req = request.into_inner();
        let uuid = RoleUuid::from_string(&req.uuid)
            .map_err(|e| Status::invalid_argument(format!("invalid uuid: {}", e)))?;
        let role = self.service.get(uuid).await.map_err(status_from)?;
        Ok(Response::new(role_to_proto(&role)))
    }

    async fn create_role(
        &self,
        request: Request<roles_proto::CreateRoleRequest>,
    ) -> Result<Response<roles_proto::Role>, Status> {
        let req = request.into_inner();
        let role = self
            .service
            .create(CreateRoleInput { title: req.title })
            .await
            .map_err(status_from)?;
        Ok(Response::new(role_to_proto(&role)))
    }

    async fn update_role(
        &self,
        request: Request<roles_proto::UpdateRoleRequest>,
    ) -> Result<Response<roles_proto::Role>, Status> {
        let req = request.into_inner();
        let uuid = RoleUuid::from_string(&req.uuid)
            .map_err(|e| Status::invalid_argument(format!("invalid uuid: {}", e)))?;
        let role = self
            .service
            .update(UpdateRoleInput {
                uuid,
                title: req.title,
            })
            .await
            .map_err(status_from)?;
        Ok(Response::new(role_to_proto(&role)))
    }

    async fn delete_role(
        &self,
        request: Request<roles_proto::DeleteRoleRequest>,
    ) -> Result<Response<roles_proto::Role>, Status> {
        let req = request.into_inner();
        let uuid = RoleUuid::from_string(&req.uuid)
            .map_err(|e| Status::invalid_argument(format!("invalid uuid: {}", e)))?;
        let role = self.service.delete(uuid).await.map_err(status_from)?;
        Ok(Response::new(role_to_proto(&role)))
    }

    async fn count_roles(
        &self,
        _request: Request<roles_proto::CountRolesRequest>,
    ) -> Result<Response<roles_proto::CountRolesResponse>, Status> {
        let count = self.service.count().await.map_err(status_from)?;
        Ok(Response::new(roles_proto::CountRolesResponse { count }))
    }
}

/// Implementation of the WorkspaceService gRPC service.
pub struct WorkspaceGrpcService {
    service: Arc<dyn WorkspaceService>,
}

impl WorkspaceGrpcService {
    pub fn new(service: Arc<dyn WorkspaceService>) -> Self {
        Self { service }
    }

    pub fn into_server(self) -> WorkspaceServiceServer<Self> {
        WorkspaceServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl workspaces_proto::workspace_service_server::WorkspaceService for WorkspaceGrpcService {
    async fn list_workspaces(
        &self,
        request: Request<workspaces_proto::ListWorkspacesRequest>,
    ) -> Result<Response<workspaces_proto::ListWorkspacesResponse>, Status> {
        let req = request.into_inner();
        let page = self
            .service
            .query(req.offset, req.limit)
            .await
            .map_err(status_from)?;

        Ok(Response::new(workspaces_proto::ListWorkspacesResponse {
            workspaces: page.workspaces.iter().map(workspace_to_proto).collect(),
            total_count: page.total_count,
            offset: page.offset,
            limit: page.limit,
        }))
    }

    async fn get_workspace(
        &self,
        request: Request<workspaces_proto::GetWorkspaceRequest>,
    ) -> Result<Response<workspaces_proto::Workspace>, Status> {
        let req = request.into_inner();
        let uuid = WorkspaceUuid::from_string(&req.uuid)
            .map_err(|e| Status::invalid_argument(format!("invalid uuid: {}", e)))?;
        let workspace = self.service.get(uuid).await.map_err(status_from)?;
        Ok(Response::new(workspace_to_proto(&workspace)))
    }

    async fn create_workspace(
        &self,
        request: Request<workspaces_proto::CreateWorkspaceRequest>,
    ) -> Result<Response<workspaces_proto::Workspace>, Status> {
        let req = request.into_inner();
        let workspace = self
            .service
            .create(CreateWorkspaceInput { title: req.title })
            .await
            .map_err(status_from)?;
        Ok(Response::new(workspace_to_proto(&workspace)))
    }

    async fn update_workspace(
        &self,
        request: Request<workspaces_proto::UpdateWorkspaceRequest>,
    ) -> Result<Response<workspaces_proto::Workspace>, Status> {
        let req = request.into_inner();
        let uuid = WorkspaceUuid::from_string(&req.uuid)
            .map_err(|e| Status::invalid_argument(format!("invalid uuid: {}", e)))?;
        let workspace = self
            .service
            .update(UpdateWorkspaceInput {
                uuid,
                title: req.title,
            })
            .await
            .map_err(status_from)?;
        Ok(Response::new(workspace_to_proto(&workspace)))
    }

    async fn delete_workspace(
        &self,
        request: Request<workspaces_proto::DeleteWorkspaceRequest>,
    ) -> Result<Response<workspaces_proto::Workspace>, Status> {
        let req = request.into_inner();
        let uuid = WorkspaceUuid::from_string(&req.uuid)
            .map_err(|e| Status::invalid_argument(format!("invalid uuid: {}", e)))?;
        let workspace = self.service.delete(uuid).await.map_err(status_from)?;
        Ok(Response::new(workspace_to_proto(&workspace)))
    }

    async fn count_workspaces(
        &self,
        _request: Request<workspaces_proto::CountWorkspacesRequest>,
    ) -> Result<Response<workspaces_proto::CountWorkspacesResponse>, Status> {
        let count = self.service.count().await.map_err(status_from)?;
        Ok(Response::new(workspaces_proto::CountWorkspacesResponse {
            count,
        }))
    }
}

/// Start the gRPC server, serving until `shutdown` resolves.
pub async fn start_grpc_server(
    addr: std::net::SocketAddr,
    roles: Arc<dyn RoleService>,
    workspaces: Arc<dyn WorkspaceService>,
    shutdown: impl std::future::Future<Output = ()>,
) -> Result<(), tonic::transport::Error> {
    tracing::info!("starting gRPC server on {}", addr);

    tonic::transport::Server::builder()
        .add_service(RoleGrpcService::new(roles).into_server())
        .add_service(WorkspaceGrpcService::new(workspaces).into_server())
        .serve_with_shutdown(addr, shutdown)
        .await
}
