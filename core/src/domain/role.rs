// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! Role aggregate: record, projection and request inputs.
//!
//! The record is the repository's persisted representation and carries the
//! storage-assigned key; the projection is the transport-neutral shape
//! returned to callers and is always derived 1:1 from a record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Externally visible identifier for a role.
///
/// Assigned exactly once at creation, independent of the storage key.
/// Random 128-bit identifiers leak no creation order and cannot collide
/// across resource types; the repository uniqueness constraint is the
/// backstop for the astronomically unlikely duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleUuid(pub Uuid);

impl RoleUuid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for RoleUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoleUuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted representation of a role.
///
/// `id` is the storage-owned key: zero until the repository assigns it, and
/// never interpreted by the service layer beyond passing it through.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRecord {
    pub id: i64,
    pub uuid: RoleUuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transport-neutral role returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub uuid: RoleUuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&RoleRecord> for Role {
    fn from(record: &RoleRecord) -> Self {
        Self {
            uuid: record.uuid,
            title: record.title.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for creating a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoleInput {
    pub title: String,
}

/// Input for updating an existing role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleInput {
    pub uuid: RoleUuid,
    pub title: String,
}

/// One page of roles plus the pagination window that produced it.
///
/// `total_count` counts all live roles, not the returned slice; callers use
/// it for pagination math.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePage {
    pub roles: Vec<Role>,
    pub total_count: i64,
    pub offset: i64,
    pub limit: i64,
}
