// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! # PostgreSQL Workspace Repository
//!
//! Production `WorkspaceRepository` implementation backed by the
//! `workspaces` table via `sqlx`. Mirrors `postgres_role`.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use crate::domain::repository::{RepositoryError, WorkspaceRepository};
use crate::domain::workspace::{WorkspaceRecord, WorkspaceUuid};

pub struct PostgresWorkspaceRepository {
    pool: PgPool,
}

impl PostgresWorkspaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn record_from_row(row: &PgRow) -> WorkspaceRecord {
    WorkspaceRecord {
        id: row.get("id"),
        uuid: WorkspaceUuid(row.get("uuid")),
        title: row.get("title"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl WorkspaceRepository for PostgresWorkspaceRepository {
    async fn get(&self, uuid: WorkspaceUuid) -> Result<WorkspaceRecord, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, uuid, title, created_at, updated_at
            FROM workspaces
            WHERE uuid = $1
            "#,
        )
        .bind(uuid.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match row {
            Some(row) => Ok(record_from_row(&row)),
            None => Err(RepositoryError::NotFound(uuid.to_string())),
        }
    }

    async fn query(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<WorkspaceRecord>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, uuid, title, created_at, updated_at
            FROM workspaces
            ORDER BY id ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset.max(0))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(rows.iter().map(record_from_row).collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM workspaces")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(row.get("count"))
    }

    async fn create(&self, record: WorkspaceRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO workspaces (uuid, title, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.uuid.0)
        .bind(&record.title)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                RepositoryError::Conflict(record.uuid.to_string())
            } else {
                RepositoryError::Database(e.to_string())
            }
        })?;
        Ok(())
    }

    async fn update(&self, record: WorkspaceRecord) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE workspaces
            SET title = $2, updated_at = $3
            WHERE uuid = $1
            "#,
        )
        .bind(record.uuid.0)
        .bind(&record.title)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(record.uuid.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, uuid: WorkspaceUuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM workspaces WHERE uuid = $1")
            .bind(uuid.0)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(uuid.to_string()));
        }
        Ok(())
    }
}
