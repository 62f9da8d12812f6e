// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! # Mutation Request Validation
//!
//! Pure, synchronous field checks applied to create/update inputs before any
//! repository access, so invalid requests never reach storage. A violation
//! names the offending field and the broken rule; the first violation per
//! field wins.

use thiserror::Error;

use crate::domain::role::{CreateRoleInput, UpdateRoleInput};
use crate::domain::workspace::{CreateWorkspaceInput, UpdateWorkspaceInput};

/// Maximum length of a resource title, in Unicode scalar values.
pub const TITLE_MAX_LEN: usize = 128;

/// A field rule that a request can break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MaxLength(usize),
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Required => write!(f, "cannot be blank"),
            Rule::MaxLength(max) => write!(f, "the length must be no more than {}", max),
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {rule}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
}

fn validate_title(title: &str) -> Result<(), FieldViolation> {
    if title.is_empty() {
        return Err(FieldViolation {
            field: "title",
            rule: Rule::Required,
        });
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(FieldViolation {
            field: "title",
            rule: Rule::MaxLength(TITLE_MAX_LEN),
        });
    }
    Ok(())
}

pub fn validate_create_role(input: &CreateRoleInput) -> Result<(), FieldViolation> {
    validate_title(&input.title)
}

pub fn validate_update_role(input: &UpdateRoleInput) -> Result<(), FieldViolation> {
    validate_title(&input.title)
}

pub fn validate_create_workspace(input: &CreateWorkspaceInput) -> Result<(), FieldViolation> {
    validate_title(&input.title)
}

pub fn validate_update_workspace(input: &UpdateWorkspaceInput) -> Result<(), FieldViolation> {
    validate_title(&input.title)
}
