// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! # Domain Repository Interfaces
//!
//! Persistence contracts for each resource type, following the Repository
//! pattern: one repository per aggregate, interface defined in the domain
//! layer, implemented in `crate::infrastructure::repositories`.
//!
//! | Trait | Aggregate | Implementations |
//! |-------|-----------|----------------|
//! | `RoleRepository` | `RoleRecord` | `InMemoryRoleRepository`, `PostgresRoleRepository` |
//! | `WorkspaceRepository` | `WorkspaceRecord` | `InMemoryWorkspaceRepository`, `PostgresWorkspaceRepository` |
//!
//! ## Contract
//!
//! - `get`/`update`/`delete` on an unknown uuid return `NotFound`.
//! - `query` is offset-based in insertion order; a window past the end is an
//!   empty sequence, not an error.
//! - `create` enforces uniqueness of the external uuid (`Conflict`).
//!
//! Concrete implementations are selected at server startup from
//! configuration: in-memory for development and testing, PostgreSQL for
//! production.

use async_trait::async_trait;

use crate::domain::role::{RoleRecord, RoleUuid};
use crate::domain::workspace::{WorkspaceRecord, WorkspaceUuid};

/// Repository interface for role records.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Fetch a role by external uuid.
    async fn get(&self, uuid: RoleUuid) -> Result<RoleRecord, RepositoryError>;

    /// Fetch a page of roles in insertion order.
    async fn query(&self, offset: i64, limit: i64) -> Result<Vec<RoleRecord>, RepositoryError>;

    /// Number of live roles.
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Persist a new role; the repository assigns the storage key.
    async fn create(&self, record: RoleRecord) -> Result<(), RepositoryError>;

    /// Replace the stored record with the same uuid.
    async fn update(&self, record: RoleRecord) -> Result<(), RepositoryError>;

    /// Remove a role by external uuid.
    async fn delete(&self, uuid: RoleUuid) -> Result<(), RepositoryError>;
}

/// Repository interface for workspace records.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Fetch a workspace by external uuid.
    async fn get(&self, uuid: WorkspaceUuid) -> Result<WorkspaceRecord, RepositoryError>;

    /// Fetch a page of workspaces in insertion order.
    async fn query(&self, offset: i64, limit: i64)
        -> Result<Vec<WorkspaceRecord>, RepositoryError>;

    /// Number of live workspaces.
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Persist a new workspace; the repository assigns the storage key.
    async fn create(&self, record: WorkspaceRecord) -> Result<(), RepositoryError>;

    /// Replace the stored record with the same uuid.
    async fn update(&self, record: WorkspaceRecord) -> Result<(), RepositoryError>;

    /// Remove a workspace by external uuid.
    async fn delete(&self, uuid: WorkspaceUuid) -> Result<(), RepositoryError>;
}

/// Repository errors
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("no record with uuid {0}")]
    NotFound(String),

    #[error("uuid already taken: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound("row not found".to_string()),
            other => RepositoryError::Database(other.to_string()),
        }
    }
}
