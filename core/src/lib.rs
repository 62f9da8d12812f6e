// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! Atrium directory service core.
//!
//! CRUD over simple named resources (roles, workspaces) exposed through a
//! dual transport: tonic gRPC services and an axum HTTP/JSON gateway. Both
//! adapters call the same resource services, so semantics are identical
//! regardless of how a caller arrives.
//!
//! # Architecture
//!
//! - **Layer: domain** — entities, value objects, repository contracts,
//!   validation rules, configuration schema
//! - **Layer: application** — resource services (use case orchestration)
//! - **Layer: infrastructure** — in-memory and PostgreSQL repositories
//! - **Layer: presentation** — REST gateway and gRPC transport adapters

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
