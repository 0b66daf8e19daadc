use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{ErrorResponse, UploadResponse};
use web_sys::FormData;

const UPLOAD_URL: &str = "/api/upload";

/// Posts the logo as the `file` multipart field and returns where it is served.
pub async fn upload_logo(file: &GlooFile) -> Result<UploadResponse, String> {
    let raw: &web_sys::File = file.as_ref();
    let form_data = FormData::new().map_err(|e| format!("Failed to build form: {:?}", e))?;
    form_data
        .append_with_blob_and_filename("file", raw, &file.name())
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;

    let response = Request::post(UPLOAD_URL)
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(body.error),
            Err(_) => Err(format!("Upload failed ({})", status)),
        }
    }
}
