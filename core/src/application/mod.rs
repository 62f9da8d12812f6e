// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0

pub mod roles;
pub mod workspaces;

use thiserror::Error;

use crate::domain::repository::RepositoryError;
use crate::domain::validation::FieldViolation;

pub use roles::{RoleService, StandardRoleService};
pub use workspaces::{StandardWorkspaceService, WorkspaceService};

/// Errors surfaced by the resource services.
///
/// Validation errors never reach storage; storage errors are propagated
/// opaquely for the transport adapter to map onto protocol codes. No retries
/// happen at this layer: at most one attempt per repository call per
/// invocation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(#[from] FieldViolation),

    #[error("no resource with uuid {0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Storage(other),
        }
    }
}
