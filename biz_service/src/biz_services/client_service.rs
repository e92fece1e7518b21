use crate::entitys::client_entity::{ClientAddDto, ClientInfo};
use crate::entitys::meal_entity::MealInfo;
use common::ClientId;
use common::errors::AppError;
use common::memory_repository::MemoryRepository;
use common::repository_util::Repository;
use common::util::date_util::now;
use log::info;

/// 客户登记簿，生命周期跟随应用实例
#[derive(Default)]
pub struct ClientService {
    dao: MemoryRepository<ClientInfo>,
}

impl ClientService {
    pub fn new() -> Self {
        Self { dao: MemoryRepository::new() }
    }

    pub async fn add(&self, dto: ClientAddDto) -> Result<ClientId, AppError> {
        let client = ClientInfo {
            name: dto.name,
            age: dto.age,
            height: dto.height,
            weight: dto.weight,
            activity: dto.activity,
            desired_weight: dto.desired_weight,
            create_time: now(),
            ..Default::default()
        };
        let id = self.dao.insert(client).await?;
        info!("client {} registered", id);
        Ok(id)
    }

    pub async fn find_by_id(&self, id: ClientId) -> Result<Option<ClientInfo>, AppError> {
        self.dao.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<ClientInfo>, AppError> {
        self.dao.query_all().await
    }

    /// 按姓名模糊查询（不区分大小写），空查询返回全部
    pub async fn search(&self, query: &str) -> Result<Vec<ClientInfo>, AppError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.list().await;
        }
        self.dao.query_filter(move |c: &ClientInfo| c.name.to_lowercase().contains(&query)).await
    }

    pub async fn add_meal(&self, id: ClientId, meal: MealInfo) -> Result<(), AppError> {
        let image = meal.image.clone();
        let found = self.dao.update_by_id(id, move |c: &mut ClientInfo| c.meals.push(meal)).await?;
        if !found {
            return Err(AppError::client_not_found());
        }
        info!("meal {} added to client {}", image, id);
        Ok(())
    }
}
