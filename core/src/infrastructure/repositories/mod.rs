// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0

pub mod memory;
pub mod postgres_role;
pub mod postgres_workspace;

pub use memory::{InMemoryRoleRepository, InMemoryWorkspaceRepository};
pub use postgres_role::PostgresRoleRepository;
pub use postgres_workspace::PostgresWorkspaceRepository;
