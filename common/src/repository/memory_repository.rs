use crate::repository_util::{Entity, Repository, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Table<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

/// 进程内存储，重启后数据丢失。主键从 1 开始递增，删除后也不复用
pub struct MemoryRepository<T: Entity> {
    table: RwLock<Table<T>>,
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self { table: RwLock::new(Table { next_id: 1, rows: BTreeMap::new() }) }
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn insert(&self, mut entity: T) -> Result<u64> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        entity.set_id(id);
        table.rows.insert(id, entity);
        Ok(id)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<T>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn query_all(&self) -> Result<Vec<T>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn query_filter<F>(&self, filter: F) -> Result<Vec<T>>
    where
        F: Fn(&T) -> bool + Send + 'static,
    {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|row| filter(row)).cloned().collect())
    }

    async fn update_by_id<F>(&self, id: u64, update: F) -> Result<bool>
    where
        F: FnOnce(&mut T) + Send + 'static,
    {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                update(row);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
