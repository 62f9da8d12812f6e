// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0

pub mod config;
pub mod repository;
pub mod role;
pub mod validation;
pub mod workspace;

pub use repository::RepositoryError;
pub use validation::FieldViolation;
