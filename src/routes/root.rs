use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// Liveness endpoint at the server root.
///
/// Always answers 200 regardless of auth state; deploy probes and uptime
/// checks hit this before any credential exists.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": "Backend running successfully"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_root_endpoint() {
        let app = test::init_service(actix_web::App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "ok");
        assert_eq!(json["message"], "Backend running successfully");
    }
}
