use crate::result::{html, redirect};
use crate::views::client_view;
use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use biz_service::biz_services::client_service::ClientService;
use biz_service::biz_services::meal_service::MealService;
use biz_service::entitys::client_entity::ClientAddDto;
use bytes::BytesMut;
use common::ClientId;
use common::errors::AppError;
use futures_util::StreamExt;
use log::debug;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(client_list);
    // /clients/add 必须先于 /clients/{client_id} 注册
    cfg.service(client_add_form);
    cfg.service(client_add);
    cfg.service(client_detail);
    cfg.service(meal_upload);
}

#[get("/")]
pub async fn home() -> impl Responder {
    redirect("/clients")
}

#[get("/clients")]
pub async fn client_list(client_service: web::Data<ClientService>) -> Result<HttpResponse, AppError> {
    let clients = client_service.list().await?;
    Ok(html(client_view::client_list(&clients)))
}

#[get("/clients/add")]
pub async fn client_add_form() -> impl Responder {
    html(client_view::add_client_form())
}

#[post("/clients/add")]
pub async fn client_add(form: web::Form<ClientAddDto>, client_service: web::Data<ClientService>) -> Result<HttpResponse, AppError> {
    client_service.add(form.into_inner()).await?;
    Ok(redirect("/clients"))
}

#[get("/clients/{client_id}")]
pub async fn client_detail(client_id: web::Path<ClientId>, client_service: web::Data<ClientService>) -> Result<HttpResponse, AppError> {
    let client = client_service.find_by_id(client_id.into_inner()).await?.ok_or_else(AppError::client_not_found)?;
    Ok(html(client_view::client_detail(&client)))
}

struct UploadFile {
    file_name: String,
    data: BytesMut,
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/"))
}

/// 取第一个名为 `file` 且带 filename 的分段；文件名为空视为未上传，其余分段丢弃。
/// 非 multipart 请求、空 body、没有任何分段都视为未上传
async fn read_upload(req: &HttpRequest, body: web::Payload, limit: usize) -> Result<Option<UploadFile>, AppError> {
    if !is_multipart(req) {
        return Ok(None);
    }
    let mut payload = Multipart::new(req.headers(), body);
    let mut upload = None;
    let mut seen_file = false;
    let mut parts = 0usize;
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) if parts == 0 => {
                debug!("multipart body without parts: {}", e);
                return Ok(None);
            }
            Err(e) => return Err(AppError::Validation(e.to_string())),
        };
        parts += 1;
        let file_name = match field.content_disposition() {
            Some(cd) if !seen_file && cd.get_name() == Some("file") => cd.get_filename().map(str::to_string),
            _ => None,
        };
        seen_file |= file_name.is_some();

        let mut data = BytesMut::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| AppError::Validation(e.to_string()))?;
            if file_name.is_none() {
                continue;
            }
            if data.len() + chunk.len() > limit {
                return Err(AppError::FileUpload(format!("file exceeds {} bytes", limit)));
            }
            data.extend_from_slice(&chunk);
        }
        if let Some(file_name) = file_name.filter(|name| !name.is_empty()) {
            upload = Some(UploadFile { file_name, data });
        }
    }
    Ok(upload)
}

#[post("/clients/{client_id}")]
pub async fn meal_upload(
    req: HttpRequest,
    client_id: web::Path<ClientId>,
    body: web::Payload,
    client_service: web::Data<ClientService>,
    meal_service: web::Data<MealService>,
) -> Result<HttpResponse, AppError> {
    let client_id = client_id.into_inner();
    if client_service.find_by_id(client_id).await?.is_none() {
        return Err(AppError::client_not_found());
    }
    let detail_url = format!("/clients/{}", client_id);
    let Some(upload) = read_upload(&req, body, meal_service.max_upload_bytes()).await? else {
        return Ok(redirect(&detail_url));
    };
    let meal = meal_service.save_meal(client_id, &upload.file_name, &upload.data).await?;
    client_service.add_meal(client_id, meal).await?;
    Ok(redirect(&detail_url))
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use biz_service::biz_services::BizServices;
    use biz_service::biz_services::analysis_service::StaticMealAnalyzer;
    use common::config::UploadConfig;
    use tempfile::TempDir;

    const BOUNDARY: &str = "----mealboundary";

    async fn services(dir: &TempDir) -> BizServices {
        let upload = UploadConfig { static_dir: dir.path().to_str().unwrap().to_string(), ..Default::default() };
        let services = BizServices::new(upload);
        services.meal_service.init_upload_dir().await.unwrap();
        services
    }

    fn alice_form() -> [(&'static str, &'static str); 6] {
        [
            ("name", "Alice"),
            ("age", "30"),
            ("height", "165"),
            ("weight", "60"),
            ("activity", "moderate"),
            ("desired_weight", "55"),
        ]
    }

    fn multipart_body(field: &str, filename: Option<&str>, data: &[u8]) -> Vec<u8> {
        let mut body = format!("--{}\r\n", BOUNDARY).into_bytes();
        let disposition = match filename {
            Some(f) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: image/jpeg\r\n\r\n",
                field, f
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", field),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn upload_request(client_id: u64, body: Vec<u8>) -> actix_web::test::TestRequest {
        test::TestRequest::post()
            .uri(&format!("/clients/{}", client_id))
            .insert_header((header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY)))
            .set_payload(body)
    }

    fn location(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_string()
    }

    #[actix_web::test]
    async fn test_root_redirects_to_list() {
        let dir = TempDir::new().unwrap();
        let services = services(&dir).await;
        let app = init_test_app!(services, dir.path().to_str().unwrap());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/clients");
    }

    #[actix_web::test]
    async fn test_register_client_then_view() {
        let dir = TempDir::new().unwrap();
        let services = services(&dir).await;
        let app = init_test_app!(services, dir.path().to_str().unwrap());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/clients/add").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post().uri("/clients/add").set_form(alice_form()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/clients");

        let list = test::call_and_read_body(&app, test::TestRequest::get().uri("/clients").to_request()).await;
        let list = String::from_utf8(list.to_vec()).unwrap();
        assert!(list.contains("<a href=\"/clients/1\">Alice</a>"));

        let detail = test::call_and_read_body(&app, test::TestRequest::get().uri("/clients/1").to_request()).await;
        let detail = String::from_utf8(detail.to_vec()).unwrap();
        for value in ["Alice", "30", "165", "60", "moderate", "55"] {
            assert!(detail.contains(&format!("<dd>{}</dd>", value)) || detail.contains(&format!("<h1>{}</h1>", value)));
        }
        assert!(detail.contains("No meals uploaded yet."));

        let client = services.client_service.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(client.desired_weight, "55");
        assert!(client.meals.is_empty());
    }

    #[actix_web::test]
    async fn test_missing_form_fields_are_empty() {
        let dir = TempDir::new().unwrap();
        let services = services(&dir).await;
        let app = init_test_app!(services, dir.path().to_str().unwrap());

        let req = test::TestRequest::post().uri("/clients/add").set_form([("name", "Bob")]).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FOUND);
        let client = services.client_service.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(client.name, "Bob");
        assert_eq!(client.age, "");
    }

    #[actix_web::test]
    async fn test_unknown_client_is_not_found() {
        let dir = TempDir::new().unwrap();
        let services = services(&dir).await;
        let app = init_test_app!(services, dir.path().to_str().unwrap());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/clients/42").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(test::read_body(resp).await.as_ref(), b"Client not found");

        let req = upload_request(42, multipart_body("file", Some("lunch.jpg"), b"img")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(std::fs::read_dir(dir.path().join("uploads")).unwrap().count(), 0);
        assert_eq!(services.client_service.list().await.unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_upload_meal() {
        let dir = TempDir::new().unwrap();
        let services = services(&dir).await;
        let app = init_test_app!(services, dir.path().to_str().unwrap());
        let req = test::TestRequest::post().uri("/clients/add").set_form(alice_form()).to_request();
        test::call_service(&app, req).await;

        let req = upload_request(1, multipart_body("file", Some("lunch.jpg"), b"fake-jpeg")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/clients/1");

        let client = services.client_service.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(client.meals.len(), 1);
        let meal = &client.meals[0];
        assert_eq!(meal.image, "uploads/client1_lunch.jpg");
        assert_eq!(meal.nutrients, StaticMealAnalyzer::fixed_analysis().nutrients);
        assert_eq!(meal.recommendation, StaticMealAnalyzer::fixed_analysis().recommendation);
        assert_eq!(std::fs::read(dir.path().join(&meal.image)).unwrap(), b"fake-jpeg");

        let detail = test::call_and_read_body(&app, test::TestRequest::get().uri("/clients/1").to_request()).await;
        let detail = String::from_utf8(detail.to_vec()).unwrap();
        assert!(detail.contains("/static/uploads/client1_lunch.jpg"));
        assert!(detail.contains("Protein: 25g"));

        let image = test::call_and_read_body(&app, test::TestRequest::get().uri("/static/uploads/client1_lunch.jpg").to_request()).await;
        assert_eq!(image.as_ref(), b"fake-jpeg");
    }

    #[actix_web::test]
    async fn test_empty_or_missing_file_redirects_without_change() {
        let dir = TempDir::new().unwrap();
        let services = services(&dir).await;
        let app = init_test_app!(services, dir.path().to_str().unwrap());
        let req = test::TestRequest::post().uri("/clients/add").set_form(alice_form()).to_request();
        test::call_service(&app, req).await;

        for body in [multipart_body("file", Some(""), b""), multipart_body("note", None, b"hello")] {
            let resp = test::call_service(&app, upload_request(1, body).to_request()).await;
            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(location(&resp), "/clients/1");
        }
        let client = services.client_service.find_by_id(1).await.unwrap().unwrap();
        assert!(client.meals.is_empty());
        assert_eq!(std::fs::read_dir(dir.path().join("uploads")).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn test_non_multipart_or_empty_post_redirects_without_change() {
        let dir = TempDir::new().unwrap();
        let services = services(&dir).await;
        let app = init_test_app!(services, dir.path().to_str().unwrap());
        let req = test::TestRequest::post().uri("/clients/add").set_form(alice_form()).to_request();
        test::call_service(&app, req).await;

        let requests = vec![
            test::TestRequest::post().uri("/clients/1").set_form([("note", "hello")]),
            test::TestRequest::post().uri("/clients/1"),
            upload_request(1, format!("--{}--\r\n", BOUNDARY).into_bytes()),
            upload_request(1, Vec::new()),
        ];
        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(location(&resp), "/clients/1");
        }
        let client = services.client_service.find_by_id(1).await.unwrap().unwrap();
        assert!(client.meals.is_empty());
        assert_eq!(std::fs::read_dir(dir.path().join("uploads")).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn test_same_filename_overwrites_previous_upload() {
        let dir = TempDir::new().unwrap();
        let services = services(&dir).await;
        let app = init_test_app!(services, dir.path().to_str().unwrap());
        let req = test::TestRequest::post().uri("/clients/add").set_form(alice_form()).to_request();
        test::call_service(&app, req).await;

        for data in [b"first".as_slice(), b"second".as_slice()] {
            let req = upload_request(1, multipart_body("file", Some("dinner.png"), data)).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FOUND);
        }
        let client = services.client_service.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(client.meals.len(), 2);
        assert_eq!(client.meals[0].image, client.meals[1].image);
        assert_eq!(std::fs::read(dir.path().join(&client.meals[1].image)).unwrap(), b"second");
    }

    #[actix_web::test]
    async fn test_upload_over_limit_is_rejected() {
        let dir = TempDir::new().unwrap();
        let upload = UploadConfig {
            static_dir: dir.path().to_str().unwrap().to_string(),
            max_upload_bytes: 4,
            ..Default::default()
        };
        let services = BizServices::new(upload);
        services.meal_service.init_upload_dir().await.unwrap();
        let app = init_test_app!(services, dir.path().to_str().unwrap());
        let req = test::TestRequest::post().uri("/clients/add").set_form(alice_form()).to_request();
        test::call_service(&app, req).await;

        let req = upload_request(1, multipart_body("file", Some("big.jpg"), b"too large")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
        let client = services.client_service.find_by_id(1).await.unwrap().unwrap();
        assert!(client.meals.is_empty());
    }
}
