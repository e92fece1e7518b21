pub mod biz_services;
pub mod entitys;
