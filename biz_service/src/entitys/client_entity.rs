use crate::entitys::meal_entity::MealInfo;
use common::ClientId;
use common::repository_util::Entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// ==========================
/// 👤 客户实体
/// ==========================
/// 所有资料字段原样保存为字符串，不做数值或单位校验
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    #[schema(value_type = u64)]
    pub id: ClientId,
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub activity: String,
    pub desired_weight: String,
    /// 按上传顺序排列
    pub meals: Vec<MealInfo>,
    pub create_time: i64,
}

impl Entity for ClientInfo {
    fn id(&self) -> u64 {
        self.id
    }
    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// 新增客户表单，缺失的字段按空字符串处理
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(default)]
pub struct ClientAddDto {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub activity: String,
    pub desired_weight: String,
}
