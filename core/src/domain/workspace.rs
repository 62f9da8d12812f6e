// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! Workspace aggregate: record, projection and request inputs.
//!
//! Mirrors the role aggregate; see `domain::role` for the shape rationale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Externally visible identifier for a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceUuid(pub Uuid);

impl WorkspaceUuid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for WorkspaceUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WorkspaceUuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted representation of a workspace. `id` is the storage-owned key.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceRecord {
    pub id: i64,
    pub uuid: WorkspaceUuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transport-neutral workspace returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub uuid: WorkspaceUuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&WorkspaceRecord> for Workspace {
    fn from(record: &WorkspaceRecord) -> Self {
        Self {
            uuid: record.uuid,
            title: record.title.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for creating a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkspaceInput {
    pub title: String,
}

/// Input for updating an existing workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorkspaceInput {
    pub uuid: WorkspaceUuid,
    pub title: String,
}

/// One page of workspaces plus the pagination window that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspacePage {
    pub workspaces: Vec<Workspace>,
    pub total_count: i64,
    pub offset: i64,
    pub limit: i64,
}
