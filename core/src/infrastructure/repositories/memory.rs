// Copyright (c) 2026 Atrium Labs
// SPDX-License-Identifier: AGPL-3.0
//! In-memory repository implementations for development and testing.
//!
//! Records are kept in insertion order behind a mutex; storage keys are a
//! process-local sequence. Uuid uniqueness is enforced the same way the
//! PostgreSQL backend's unique constraint does it.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::repository::{
    RepositoryError, RoleRepository, WorkspaceRepository,
};
use crate::domain::role::{RoleRecord, RoleUuid};
use crate::domain::workspace::{WorkspaceRecord, WorkspaceUuid};

#[derive(Default)]
struct RoleStore {
    next_id: i64,
    records: Vec<RoleRecord>,
}

#[derive(Clone, Default)]
pub struct InMemoryRoleRepository {
    store: Arc<Mutex<RoleStore>>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, RoleStore>, RepositoryError> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::Database("mutex poisoned".to_string()))
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn get(&self, uuid: RoleUuid) -> Result<RoleRecord, RepositoryError> {
        let store = self.lock()?;
        store
            .records
            .iter()
            .find(|r| r.uuid == uuid)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(uuid.to_string()))
    }

    async fn query(&self, offset: i64, limit: i64) -> Result<Vec<RoleRecord>, RepositoryError> {
        let store = self.lock()?;
        Ok(store
            .records
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.lock()?.records.len() as i64)
    }

    async fn create(&self, mut record: RoleRecord) -> Result<(), RepositoryError> {
        let mut store = self.lock()?;
        if store.records.iter().any(|r| r.uuid == record.uuid) {
            return Err(RepositoryError::Conflict(record.uuid.to_string()));
        }
        store.next_id += 1;
        record.id = store.next_id;
        store.records.push(record);
        Ok(())
    }

    async fn update(&self, record: RoleRecord) -> Result<(), RepositoryError> {
        let mut store = self.lock()?;
        match store.records.iter_mut().find(|r| r.uuid == record.uuid) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(record.uuid.to_string())),
        }
    }

    async fn delete(&self, uuid: RoleUuid) -> Result<(), RepositoryError> {
        let mut store = self.lock()?;
        let before = store.records.len();
        store.records.retain(|r| r.uuid != uuid);
        if store.records.len() == before {
            return Err(RepositoryError::NotFound(uuid.to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
struct WorkspaceStore {
    next_id: i64,
    records: Vec<WorkspaceRecord>,
}

#[derive(Clone, Default)]
pub struct InMemoryWorkspaceRepository {
    store: Arc<Mutex<WorkspaceStore>>,
}

impl InMemoryWorkspaceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, WorkspaceStore>, RepositoryError> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::Database("mutex poisoned".to_string()))
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn get(&self, uuid: WorkspaceUuid) -> Result<WorkspaceRecord, RepositoryError> {
        let store = self.lock()?;
        store
            .records
            .iter()
            .find(|r| r.uuid == uuid)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(uuid.to_string()))
    }

    async fn query(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<WorkspaceRecord>, RepositoryError> {
        let store = self.lock()?;
        Ok(store
            .records
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.lock()?.records.len() as i64)
    }

    async fn create(&self, mut record: WorkspaceRecord) -> Result<(), RepositoryError> {
        let mut store = self.lock()?;
        if store.records.iter().any(|r| r.uuid == record.uuid) {
            return Err(RepositoryError::Conflict(record.uuid.to_string()));
        }
        store.next_id += 1;
        record.id = store.next_id;
        store.records.push(record);
        Ok(())
    }

    async fn update(&self, record: WorkspaceRecord) -> Result<(), RepositoryError> {
        let mut store = self.lock()?;
        match store.records.iter_mut().find(|r| r.uuid == record.uuid) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(record.uuid.to_string())),
        }
    }

    async fn delete(&self, uuid: WorkspaceUuid) -> Result<(), RepositoryError> {
        let mut store = self.lock()?;
        let before = store.records.len();
        store.records.retain(|r| r.uuid != uuid);
        if store.records.len() == before {
            return Err(RepositoryError::NotFound(uuid.to_string()));
        }
        Ok(())
    }
}
