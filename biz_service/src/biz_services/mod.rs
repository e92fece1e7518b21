use crate::biz_services::analysis_service::{MealAnalyzer, StaticMealAnalyzer};
use crate::biz_services::client_service::ClientService;
use crate::biz_services::meal_service::MealService;
use actix_web::web;
use common::config::UploadConfig;
use std::sync::Arc;

pub mod analysis_service;
pub mod client_service;
pub mod meal_service;

/// 应用级共享服务，只构建一次，各 worker 共用同一份数据
#[derive(Clone)]
pub struct BizServices {
    pub client_service: web::Data<ClientService>,
    pub meal_service: web::Data<MealService>,
}

impl BizServices {
    pub fn new(upload: UploadConfig) -> Self {
        Self::with_analyzer(upload, Arc::new(StaticMealAnalyzer))
    }

    pub fn with_analyzer(upload: UploadConfig, analyzer: Arc<dyn MealAnalyzer>) -> Self {
        Self {
            client_service: web::Data::new(ClientService::new()),
            meal_service: web::Data::new(MealService::new(upload, analyzer)),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, services: &BizServices) {
    cfg.app_data(services.client_service.clone());
    cfg.app_data(services.meal_service.clone());
}
