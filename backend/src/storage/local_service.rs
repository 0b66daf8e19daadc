use chrono::Utc;
use image::ImageReader;
use rand::Rng;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;

const RANDOM_SUFFIX_LEN: usize = 6;
const ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

#[derive(Clone)]
pub struct LocalStorage {
    upload_dir: PathBuf,
    max_upload_bytes: usize,
    require_square: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File must be an image")]
    NotAnImage,
    #[error("Uploaded file is empty")]
    EmptyUpload,
    #[error("File too large")]
    FileTooLarge,
    #[error("Image must be square. Yours is {width}x{height}px")]
    NotSquare { width: u32, height: u32 },
    #[error("Image not found")]
    NotFound,
    #[error("Invalid file name")]
    InvalidFilename,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LocalStorage {
    pub fn new(upload_dir: impl Into<PathBuf>, max_upload_bytes: usize, require_square: bool) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            max_upload_bytes,
            require_square,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.upload_dir.clone(),
            config.max_upload_bytes,
            config.require_square,
        )
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub async fn ensure_upload_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        Ok(())
    }

    /// Known image extensions from the client's name are kept; anything else
    /// is replaced by the extension of the declared MIME type.
    pub fn extract_file_extension(original_name: &str, mime_type: &str) -> String {
        original_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or_else(|| LocalStorage::extension_for_mime(mime_type).to_string())
    }

    fn extension_for_mime(mime_type: &str) -> &'static str {
        match mime_type {
            "image/jpeg" => "jpg",
            "image/gif" => "gif",
            "image/webp" => "webp",
            "image/svg+xml" => "svg",
            _ => "png",
        }
    }

    /// `logo-{unix millis}-{6 base36 chars}.{extension}`
    pub fn generate_filename(extension: &str) -> String {
        let mut rng = rand::rng();
        let suffix: String = (0..RANDOM_SUFFIX_LEN)
            .filter_map(|_| std::char::from_digit(rng.random_range(0..36), 36))
            .collect();
        format!("logo-{}-{}.{}", Utc::now().timestamp_millis(), suffix, extension)
    }

    pub fn validate_content_type(mime_type: &str) -> Result<(), StorageError> {
        if mime_type.starts_with("image/") {
            Ok(())
        } else {
            Err(StorageError::NotAnImage)
        }
    }

    pub fn validate_image_size(&self, image_data: &[u8]) -> Result<(), StorageError> {
        if image_data.is_empty() {
            return Err(StorageError::EmptyUpload);
        }
        if image_data.len() > self.max_upload_bytes {
            return Err(StorageError::FileTooLarge);
        }
        Ok(())
    }

    /// Formats the decoder can't size (SVG, unknown) pass unchecked.
    pub fn validate_square(&self, image_data: &[u8]) -> Result<(), StorageError> {
        if !self.require_square {
            return Ok(());
        }

        let dimensions = ImageReader::new(Cursor::new(image_data))
            .with_guessed_format()
            .ok()
            .and_then(|reader| reader.into_dimensions().ok());

        match dimensions {
            Some((width, height)) if width != height => {
                Err(StorageError::NotSquare { width, height })
            }
            _ => Ok(()),
        }
    }

    pub async fn store_logo(
        &self,
        image_data: &[u8],
        original_name: &str,
        mime_type: &str,
    ) -> Result<String, StorageError> {
        LocalStorage::validate_content_type(mime_type)?;
        self.validate_image_size(image_data)?;
        self.validate_square(image_data)?;

        let extension = LocalStorage::extract_file_extension(original_name, mime_type);
        let filename = LocalStorage::generate_filename(&extension);

        self.ensure_upload_dir().await?;
        tokio::fs::write(self.upload_dir.join(&filename), image_data).await?;

        log::info!("Stored logo {} ({} bytes)", filename, image_data.len());
        Ok(filename)
    }

    /// Keeps only the last path component so lookups never leave the
    /// upload directory.
    pub fn sanitize_filename(raw: &str) -> Result<String, StorageError> {
        let last = raw.rsplit(['/', '\\']).next().unwrap_or_default();
        match last {
            "" | "." | ".." => Err(StorageError::InvalidFilename),
            name => Ok(name.to_string()),
        }
    }

    pub async fn read_logo(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
        let sanitized = LocalStorage::sanitize_filename(filename)?;
        match tokio::fs::read(self.upload_dir.join(sanitized)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NotFound),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    pub fn content_type_for(filename: &str) -> &'static str {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("svg") => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use tempfile::TempDir;

    pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn storage(dir: &TempDir) -> LocalStorage {
        LocalStorage::new(dir.path().join("uploads"), 1024 * 1024, true)
    }

    #[test]
    fn filename_shape() {
        let name = LocalStorage::generate_filename("png");
        let parts: Vec<&str> = name.trim_end_matches(".png").split('-').collect();
        assert_eq!(parts[0], "logo");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn extension_from_original_name() {
        assert_eq!(LocalStorage::extract_file_extension("Logo.JPG", "image/jpeg"), "jpg");
        assert_eq!(LocalStorage::extract_file_extension("a.b.webp", "image/webp"), "webp");
        assert_eq!(LocalStorage::extract_file_extension("logo", "image/png"), "png");
        assert_eq!(LocalStorage::extract_file_extension("logo.", "image/png"), "png");
        assert_eq!(LocalStorage::extract_file_extension("logo", "image/gif"), "gif");
    }

    #[test]
    fn extension_rejects_path_and_query_characters() {
        assert_eq!(LocalStorage::extract_file_extension("brand.png?v=2", "image/png"), "png");
        assert_eq!(LocalStorage::extract_file_extension("brand.png/x", "image/png"), "png");
        assert_eq!(LocalStorage::extract_file_extension("brand.png#top", "image/jpeg"), "jpg");
        assert_eq!(
            LocalStorage::extract_file_extension("brand./../../evil", "image/svg+xml"),
            "svg"
        );
        assert_eq!(LocalStorage::extract_file_extension("brand.exe", "image/bmp"), "png");
    }

    #[test]
    fn content_types() {
        assert_eq!(LocalStorage::content_type_for("a.png"), "image/png");
        assert_eq!(LocalStorage::content_type_for("a.JPEG"), "image/jpeg");
        assert_eq!(LocalStorage::content_type_for("a.jpg"), "image/jpeg");
        assert_eq!(LocalStorage::content_type_for("a.svg"), "image/svg+xml");
        assert_eq!(LocalStorage::content_type_for("a.bmp"), "application/octet-stream");
        assert_eq!(LocalStorage::content_type_for("noext"), "application/octet-stream");
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(LocalStorage::sanitize_filename("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(LocalStorage::sanitize_filename("..\\secret.png").unwrap(), "secret.png");
        assert_eq!(LocalStorage::sanitize_filename("logo-1-abc.png").unwrap(), "logo-1-abc.png");
        assert!(LocalStorage::sanitize_filename("..").is_err());
        assert!(LocalStorage::sanitize_filename("uploads/").is_err());
    }

    #[test]
    fn rejects_non_images_and_bad_sizes() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        assert!(matches!(
            LocalStorage::validate_content_type("text/plain"),
            Err(StorageError::NotAnImage)
        ));
        assert!(matches!(storage.validate_image_size(&[]), Err(StorageError::EmptyUpload)));
        let small = LocalStorage::new(dir.path(), 4, true);
        assert!(matches!(small.validate_image_size(&[0; 5]), Err(StorageError::FileTooLarge)));
    }

    #[test]
    fn square_check() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        assert!(storage.validate_square(&png_bytes(8, 8)).is_ok());
        match storage.validate_square(&png_bytes(8, 4)) {
            Err(StorageError::NotSquare { width, height }) => assert_eq!((width, height), (8, 4)),
            other => panic!("expected NotSquare, got {:?}", other),
        }
        assert!(storage.validate_square(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>").is_ok());

        let lenient = LocalStorage::new(dir.path(), 1024 * 1024, false);
        assert!(lenient.validate_square(&png_bytes(8, 4)).is_ok());
    }

    #[actix_web::test]
    async fn store_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        let bytes = png_bytes(4, 4);

        let filename = storage.store_logo(&bytes, "brand.png", "image/png").await.unwrap();
        assert!(filename.starts_with("logo-") && filename.ends_with(".png"));
        assert_eq!(storage.read_logo(&filename).await.unwrap(), bytes);
        assert_eq!(
            storage.read_logo(&format!("../uploads/{}", filename)).await.unwrap(),
            bytes
        );
    }

    #[actix_web::test]
    async fn missing_logo_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);
        assert!(matches!(
            storage.read_logo("logo-0-zzzzzz.png").await,
            Err(StorageError::NotFound)
        ));
    }
}
