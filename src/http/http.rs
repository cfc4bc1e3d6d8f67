use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::config::structs::https_server_config::HttpsServerConfig;
use crate::ssl::structs::disk_cert_manager::DiskCertManager;

pub fn https_service_routes(data: Arc<DiskCertManager>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        cfg.service(web::resource("/live").route(web::get().to(https_service_live)));
        cfg.service(web::resource("/ready").route(web::get().to(https_service_ready)));
        cfg.default_service(web::route().to(https_service_not_found));
    })
}

pub fn https_service(
    addr: SocketAddr,
    data: Arc<DiskCertManager>,
    server_config: &HttpsServerConfig
) -> std::io::Result<(ServerHandle, Server)>
{
    info!("[HTTPS] Starting server listener with SSL on {}", addr);

    let tls_config = data.tls_config();
    let server = HttpServer::new(move || {
        App::new()
            .configure(https_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(server_config.keep_alive.unwrap_or(60)))
        .client_request_timeout(Duration::from_secs(server_config.request_timeout.unwrap_or(15)))
        .client_disconnect_timeout(Duration::from_secs(server_config.disconnect_timeout.unwrap_or(15)))
        .workers(server_config.workers.unwrap_or(2) as usize)
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn https_service_live() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": "live"}))
}

pub async fn https_service_ready(data: Data<Arc<DiskCertManager>>) -> HttpResponse
{
    let bundle = data.current_bundle();
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ready",
        "certificate_loaded_at": bundle.loaded_at.to_rfc3339(),
        "certificate_chain_length": bundle.certified_key.cert.len()
    }))
}

pub async fn https_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": "not found"}))
}
