// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! Role resource service.
//!
//! Orchestrates validation, identity assignment, timestamps and repository
//! round-trips, and maps records to the transport-neutral projection. Both
//! transport adapters call this service, so semantics are identical on gRPC
//! and REST. Create and Update both return the projection of the record just
//! written; neither re-reads after the write.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::application::ServiceError;
use crate::domain::repository::RoleRepository;
use crate::domain::role::{CreateRoleInput, Role, RolePage, RoleRecord, RoleUuid, UpdateRoleInput};
use crate::domain::validation::{validate_create_role, validate_update_role};

/// Use case surface for roles.
#[async_trait]
pub trait RoleService: Send + Sync {
    /// Fetch a role by external uuid.
    async fn get(&self, uuid: RoleUuid) -> Result<Role, ServiceError>;

    /// Fetch a page of roles plus the total live count.
    async fn query(&self, offset: i64, limit: i64) -> Result<RolePage, ServiceError>;

    /// Number of live roles.
    async fn count(&self) -> Result<i64, ServiceError>;

    /// Validate, assign identity and timestamps, and persist a new role.
    async fn create(&self, input: CreateRoleInput) -> Result<Role, ServiceError>;

    /// Validate and replace the title of an existing role.
    async fn update(&self, input: UpdateRoleInput) -> Result<Role, ServiceError>;

    /// Remove a role, returning its state immediately before removal.
    async fn delete(&self, uuid: RoleUuid) -> Result<Role, ServiceError>;
}

/// Standard `RoleService` backed by a pluggable repository.
pub struct StandardRoleService {
    repo: Arc<dyn RoleRepository>,
}

impl StandardRoleService {
    pub fn new(repo: Arc<dyn RoleRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RoleService for StandardRoleService {
    async fn get(&self, uuid: RoleUuid) -> Result<Role, ServiceError> {
        let record = self.repo.get(uuid).await?;
        Ok(Role::from(&record))
    }

    async fn query(&self, offset: i64, limit: i64) -> Result<RolePage, ServiceError> {
        let records = self.repo.query(offset, limit).await?;
        let total_count = self.repo.count().await?;
        Ok(RolePage {
            roles: records.iter().map(Role::from).collect(),
            total_count,
            offset,
            limit,
        })
    }

    async fn count(&self) -> Result<i64, ServiceError> {
        Ok(self.repo.count().await?)
    }

    async fn create(&self, input: CreateRoleInput) -> Result<Role, ServiceError> {
        validate_create_role(&input)?;

        // One "now" for both timestamps of the new record.
        let now = Utc::now();
        let record = RoleRecord {
            id: 0,
            uuid: RoleUuid::new(),
            title: input.title,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(record.clone()).await?;

        debug!(uuid = %record.uuid, "created role");
        Ok(Role::from(&record))
    }

    async fn update(&self, input: UpdateRoleInput) -> Result<Role, ServiceError> {
        validate_update_role(&input)?;

        let mut record = self.repo.get(input.uuid).await?;
        record.title = input.title;
        record.updated_at = Utc::now();
        self.repo.update(record.clone()).await?;

        debug!(uuid = %record.uuid, "updated role");
        Ok(Role::from(&record))
    }

    async fn delete(&self, uuid: RoleUuid) -> Result<Role, ServiceError> {
        let record = self.repo.get(uuid).await?;
        self.repo.delete(uuid).await?;

        debug!(uuid = %uuid, "deleted role");
        Ok(Role::from(&record))
    }
}
