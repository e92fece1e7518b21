use actix_web::web;

/// 测试用：以给定服务和静态目录构建应用
#[cfg(test)]
macro_rules! init_test_app {
    ($services:expr, $static_dir:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| biz_service::biz_services::configure(cfg, &$services))
                .configure(|cfg| crate::handlers::configure(cfg, $static_dir)),
        )
        .await
    };
}

pub mod client_api_handler;
pub mod client_handler;
pub mod common_handler;
pub mod swagger;

pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &str) {
    common_handler::configure(cfg);
    client_handler::configure(cfg);
    client_api_handler::configure(cfg);
    swagger::configure(cfg);
    // 上传的图片通过 /static/uploads/... 访问
    cfg.service(actix_files::Files::new("/static", static_dir));
}
