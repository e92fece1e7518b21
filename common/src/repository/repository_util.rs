use crate::errors::AppError;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, AppError>;

/// 由仓库分配自增主键的实体
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

#[async_trait]
pub trait Repository<T: Entity> {
    /// 写入实体并返回分配的主键
    async fn insert(&self, entity: T) -> Result<u64>;
    async fn find_by_id(&self, id: u64) -> Result<Option<T>>;
    /// 按主键升序返回全部数据
    async fn query_all(&self) -> Result<Vec<T>>;
    async fn query_filter<F>(&self, filter: F) -> Result<Vec<T>>
    where
        F: Fn(&T) -> bool + Send + 'static;
    /// 原地修改，返回实体是否存在
    async fn update_by_id<F>(&self, id: u64, update: F) -> Result<bool>
    where
        F: FnOnce(&mut T) + Send + 'static;
}
