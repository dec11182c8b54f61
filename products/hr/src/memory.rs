//! Process-local repository used by `serve --in-memory` and the test suites.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    model::{Employee, EmployeeId},
    repository::EmployeeRepository,
};

#[derive(Debug)]
struct Store {
    rows: BTreeMap<EmployeeId, Employee>,
    next_id: EmployeeId,
}

/// Employees kept in a map, with ids handed out from 1 upwards like the
/// database sequence.
#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    store: RwLock<Store>,
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self {
            store: RwLock::new(Store {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        Ok(self.store.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool> {
        Ok(self.store.read().await.rows.contains_key(&id))
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee> {
        let mut store = self.store.write().await;
        let id = match employee.id {
            Some(id) => id,
            None => {
                let id = store.next_id;
                store.next_id += 1;
                id
            }
        };
        // keep explicit ids from colliding with later generated ones
        store.next_id = store.next_id.max(id + 1);
        employee.id = Some(id);
        store.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<()> {
        if self.store.write().await.rows.remove(&id).is_none() {
            bail!("no employee stored under id {id}");
        }
        Ok(())
    }
}
