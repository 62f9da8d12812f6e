// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! Workspace resource service. Mirrors `application::roles`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::application::ServiceError;
use crate::domain::repository::WorkspaceRepository;
use crate::domain::validation::{validate_create_workspace, validate_update_workspace};
use crate::domain::workspace::{
    CreateWorkspaceInput, UpdateWorkspaceInput, Workspace, WorkspacePage, WorkspaceRecord,
    WorkspaceUuid,
};

/// Use case surface for workspaces.
#[async_trait]
pub trait WorkspaceService: Send + Sync {
    /// Fetch a workspace by external uuid.
    async fn get(&self, uuid: WorkspaceUuid) -> Result<Workspace, ServiceError>;

    /// Fetch a page of workspaces plus the total live count.
    async fn query(&self, offset: i64, limit: i64) -> Result<WorkspacePage, ServiceError>;

    /// Number of live workspaces.
    async fn count(&self) -> Result<i64, ServiceError>;

    /// Validate, assign identity and timestamps, and persist a new workspace.
    async fn create(&self, input: CreateWorkspaceInput) -> Result<Workspace, ServiceError>;

    /// Validate and replace the title of an existing workspace.
    async fn update(&self, input: UpdateWorkspaceInput) -> Result<Workspace, ServiceError>;

    /// Remove a workspace, returning its state immediately before removal.
    async fn delete(&self, uuid: WorkspaceUuid) -> Result<Workspace, ServiceError>;
}

/// Standard `WorkspaceService` backed by a pluggable repository.
pub struct StandardWorkspaceService {
    repo: Arc<dyn WorkspaceRepository>,
}

impl StandardWorkspaceService {
    pub fn new(repo: Arc<dyn WorkspaceRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl WorkspaceService for StandardWorkspaceService {
    async fn get(&self, uuid: WorkspaceUuid) -> Result<Workspace, ServiceError> {
        let record = self.repo.get(uuid).await?;
        Ok(Workspace::from(&record))
    }

    async fn query(&self, offset: i64, limit: i64) -> Result<WorkspacePage, ServiceError> {
        let records = self.repo.query(offset, limit).await?;
        let total_count = self.repo.count().await?;
        Ok(WorkspacePage {
            workspaces: records.iter().map(Workspace::from).collect(),
            total_count,
            offset,
            limit,
        })
    }

    async fn count(&self) -> Result<i64, ServiceError> {
        Ok(self.repo.count().await?)
    }

    async fn create(&self, input: CreateWorkspaceInput) -> Result<Workspace, ServiceError> {
        validate_create_workspace(&input)?;

        // One "now" for both timestamps of the new record.
        let now = Utc::now();
        let record = WorkspaceRecord {
            id: 0,
            uuid: WorkspaceUuid::new(),
            title: input.title,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(record.clone()).await?;

        debug!(uuid = %record.uuid, "created workspace");
        Ok(Workspace::from(&record))
    }

    async fn update(&self, input: UpdateWorkspaceInput) -> Result<Workspace, ServiceError> {
        validate_update_workspace(&input)?;

        let mut record = self.repo.get(input.uuid).await?;
        record.title = input.title;
        record.updated_at = Utc::now();
        self.repo.update(record.clone()).await?;

        debug!(uuid = %record.uuid, "updated workspace");
        Ok(Workspace::from(&record))
    }

    async fn delete(&self, uuid: WorkspaceUuid) -> Result<Workspace, ServiceError> {
        let record = self.repo.get(uuid).await?;
        self.repo.delete(uuid).await?;

        debug!(uuid = %uuid, "deleted workspace");
        Ok(Workspace::from(&record))
    }
}
