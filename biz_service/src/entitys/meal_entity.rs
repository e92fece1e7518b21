use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 单项营养成分，如 Protein / 25g
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct NutrientEntry {
    pub name: String,
    pub amount: String,
}

impl NutrientEntry {
    pub fn new(name: &str, amount: &str) -> Self {
        Self { name: name.to_string(), amount: amount.to_string() }
    }
}

/// 餐食分析结果
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct MealAnalysis {
    pub nutrients: Vec<NutrientEntry>,
    pub recommendation: String,
}

/// ==========================
/// 🍽 餐食记录，归属于唯一的客户，创建后不再修改
/// ==========================
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MealInfo {
    /// 图片相对 static 目录的路径，如 uploads/client1_lunch.jpg
    pub image: String,
    pub nutrients: Vec<NutrientEntry>,
    pub recommendation: String,
    /// 上传时间（Unix 秒）
    pub upload_time: i64,
}
