use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use app_main::handlers;
use biz_service::biz_services;
use biz_service::biz_services::BizServices;
use common::config::{AppConfig, SysConfig};
use log::{LevelFilter, warn};
use std::str::FromStr;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 读取配置文件
    let app_cfg = AppConfig::new("main-config.toml").map_err(std::io::Error::other)?;
    //初始化日志
    init_log(&app_cfg.get_sys());

    let upload_cfg = app_cfg.get_upload();
    let static_dir = upload_cfg.static_dir.clone();
    // 服务只构建一次，所有 worker 共享同一个客户登记簿
    let services = BizServices::new(upload_cfg);
    services.meal_service.init_upload_dir().await?;

    let server_cfg = app_cfg.get_server();
    let address_and_port = format!("{}:{}", &server_cfg.host, &server_cfg.port);
    warn!("Starting server on {}", address_and_port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            //配置 服务
            .configure(|cfg| {
                biz_services::configure(cfg, &services);
            })
            // 配置 控制器
            .configure(|cfg| {
                handlers::configure(cfg, &static_dir);
            })
    })
    .bind(address_and_port)?
    .run()
    .await
}

pub fn init_log(config: &SysConfig) {
    let level = LevelFilter::from_str(&config.log_level).unwrap_or(LevelFilter::Info);
    env_logger::Builder::new().filter(None, level).parse_default_env().init();
}
