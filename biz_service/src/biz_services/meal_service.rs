use crate::biz_services::analysis_service::MealAnalyzer;
use crate::entitys::meal_entity::MealInfo;
use common::ClientId;
use common::config::UploadConfig;
use common::errors::AppError;
use common::util::common_utils::{append_stem_suffix, build_id, secure_filename};
use common::util::date_util::now;
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

/// 餐食图片入库：落盘、调用分析、生成 MealInfo
pub struct MealService {
    upload: UploadConfig,
    analyzer: Arc<dyn MealAnalyzer>,
}

impl MealService {
    pub fn new(upload: UploadConfig, analyzer: Arc<dyn MealAnalyzer>) -> Self {
        Self { upload, analyzer }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.upload.max_upload_bytes
    }

    /// 启动时创建上传目录
    pub async fn init_upload_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.upload.upload_root()).await
    }

    /// 存储文件名：`client{id}_{原文件名}` 整体清洗；开启 unique_names 时追加 UUID
    pub fn storage_name(&self, client_id: ClientId, original: &str) -> String {
        let name = secure_filename(&format!("client{}_{}", client_id, original));
        if self.upload.unique_names { append_stem_suffix(&name, &build_id()) } else { name }
    }

    pub fn storage_path(&self, file_name: &str) -> PathBuf {
        self.upload.upload_root().join(file_name)
    }

    /// 写入上传文件并生成餐食记录。同名文件直接覆盖
    pub async fn save_meal(&self, client_id: ClientId, original: &str, data: &[u8]) -> Result<MealInfo, AppError> {
        let file_name = self.storage_name(client_id, original);
        let path = self.storage_path(&file_name);
        if let Err(e) = tokio::fs::write(&path, data).await {
            error!("write upload {} failed: {}", path.display(), e);
            return Err(e.into());
        }
        info!("client {} uploaded {} ({} bytes)", client_id, file_name, data.len());

        let analysis = self.analyzer.analyze(&path).await?;
        Ok(MealInfo {
            image: format!("{}/{}", self.upload.upload_dir.trim_end_matches('/'), file_name),
            nutrients: analysis.nutrients,
            recommendation: analysis.recommendation,
            upload_time: now(),
        })
    }
}
