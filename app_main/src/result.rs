use actix_web::HttpResponse;
use actix_web::http::header;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

pub fn result() -> Value {
    serde_json::json!({"success":true})
}

pub fn result_data<T: Serialize + Debug>(data: T) -> Value {
    serde_json::json!({"success":true,"data":data})
}

pub fn result_list<T: Serialize + Debug>(list: Vec<T>) -> Value {
    serde_json::json!({"success":true,"data":list})
}

/// 302 跳转
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found().insert_header((header::LOCATION, location)).finish()
}

pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body)
}
