use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{Error, HttpResponse, web};
use futures::{StreamExt, TryStreamExt};
use log::{error, info, warn};
use serde_json::json;
use shared::{
    ErrorResponse, RenderedSignature, SignatureData, UploadResponse, render_signature_html,
    render_signature_text,
};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::storage::local_service::{LocalStorage, StorageError};

const UPLOAD_FIELD: &str = "file";

struct UploadedFile {
    name: String,
    mime_type: String,
    data: Vec<u8>,
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/upload").route(web::post().to(upload_logo)))
        .service(web::resource("/api/image/{filename}").route(web::get().to(serve_logo)))
        .service(web::resource("/api/signature").route(web::post().to(render_signature)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

fn error_json(status: actix_web::http::StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(message))
}

fn storage_error_response(err: &StorageError) -> HttpResponse {
    use actix_web::http::StatusCode;

    match err {
        StorageError::NotAnImage
        | StorageError::EmptyUpload
        | StorageError::NotSquare { .. }
        | StorageError::InvalidFilename => error_json(StatusCode::BAD_REQUEST, err.to_string()),
        StorageError::FileTooLarge => error_json(StatusCode::PAYLOAD_TOO_LARGE, err.to_string()),
        StorageError::NotFound => error_json(StatusCode::NOT_FOUND, err.to_string()),
        StorageError::Io(_) => error_json(StatusCode::INTERNAL_SERVER_ERROR, "Upload failed"),
    }
}

/// Drains the multipart stream, keeping the first `file` field.
async fn read_upload_field(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<Result<Option<UploadedFile>, StorageError>, Error> {
    let mut upload = None;

    while let Some(mut field) = payload.try_next().await? {
        let is_file = field.name() == Some(UPLOAD_FIELD) && upload.is_none();
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();
        let mime_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if !is_file {
                continue;
            }
            if data.len() + chunk.len() > max_bytes {
                return Ok(Err(StorageError::FileTooLarge));
            }
            data.extend_from_slice(&chunk);
        }

        if is_file {
            upload = Some(UploadedFile {
                name,
                mime_type,
                data,
            });
        }
    }

    Ok(Ok(upload))
}

async fn upload_logo(
    storage: web::Data<LocalStorage>,
    config: web::Data<AppConfig>,
    payload: Multipart,
) -> Result<HttpResponse, Error> {
    let upload = match read_upload_field(payload, config.max_upload_bytes).await? {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            warn!("Upload request without a file field");
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("No file provided")));
        }
        Err(e) => {
            warn!("Rejected upload: {}", e);
            return Ok(storage_error_response(&e));
        }
    };

    match storage
        .store_logo(&upload.data, &upload.name, &upload.mime_type)
        .await
    {
        Ok(filename) => {
            let url = format!("{}/{}", config.public_prefix.trim_end_matches('/'), filename);
            info!("Uploaded logo available at {}", url);
            Ok(HttpResponse::Ok().json(UploadResponse { url, filename }))
        }
        Err(e @ StorageError::Io(_)) => {
            error!("Upload error: {:?}", e);
            Ok(storage_error_response(&e))
        }
        Err(e) => {
            warn!("Rejected upload {:?}: {}", upload.name, e);
            Ok(storage_error_response(&e))
        }
    }
}

async fn serve_logo(storage: web::Data<LocalStorage>, path: web::Path<String>) -> HttpResponse {
    let filename = path.into_inner();

    match storage.read_logo(&filename).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(LocalStorage::content_type_for(&filename))
            .insert_header((header::CACHE_CONTROL, "public, max-age=31536000, immutable"))
            .body(bytes),
        Err(StorageError::NotFound) | Err(StorageError::InvalidFilename) => {
            HttpResponse::NotFound().json(ErrorResponse::new("Image not found"))
        }
        Err(e) => {
            error!("Image serve error for {}: {:?}", filename, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to serve image"))
        }
    }
}

async fn render_signature(data: web::Json<SignatureData>) -> HttpResponse {
    let data = data.into_inner();
    HttpResponse::Ok().json(RenderedSignature {
        html: render_signature_html(&data),
        text: render_signature_text(&data),
    })
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
