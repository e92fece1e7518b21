use crate::entitys::meal_entity::{MealAnalysis, NutrientEntry};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

pub const DEFAULT_RECOMMENDATION: &str = "Overall, the client made a great choice with this meal. However, since they've already had breakfast \
and lunch, it may be challenging to reach the daily protein target. This meal is a bit low in protein, \
so it might be beneficial to boost protein intake for dinner. Would you like me to send a specific recommendation \
to help increase their protein intake? In the meantime, consider adding more protein-rich foods and fiber-rich \
vegetables to support muscle building and overall nutrition.";

/// 餐食图片分析接口，接入真实识别服务时替换实现即可
#[async_trait]
pub trait MealAnalyzer: Send + Sync {
    async fn analyze(&self, image: &Path) -> Result<MealAnalysis>;
}

/// 固定返回值的占位实现，不读取图片内容
#[derive(Debug, Default, Clone)]
pub struct StaticMealAnalyzer;

impl StaticMealAnalyzer {
    pub fn fixed_analysis() -> MealAnalysis {
        MealAnalysis {
            nutrients: vec![
                NutrientEntry::new("Protein", "25g"),
                NutrientEntry::new("Carbohydrates", "30g"),
                NutrientEntry::new("Fats", "10g"),
            ],
            recommendation: DEFAULT_RECOMMENDATION.to_string(),
        }
    }
}

#[async_trait]
impl MealAnalyzer for StaticMealAnalyzer {
    async fn analyze(&self, _image: &Path) -> Result<MealAnalysis> {
        Ok(Self::fixed_analysis())
    }
}
