use chrono::Utc;
use gloo_net::http::Request;
use log::info;
use web_sys::{js_sys, File};

use super::error::{StoreError, StoreResult};
use super::DataStore;
use crate::config::StoreConfig;

pub const PORTFOLIO_BUCKET: &str = "portfolio";
pub const IMAGE_FOLDER: &str = "service-images";
pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

const ACCEPTED_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadRejection {
    UnsupportedType,
    TooLarge,
}

impl std::fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadRejection::UnsupportedType => {
                write!(f, "Please upload a valid image file (JPEG, PNG, GIF, or WebP)")
            }
            UploadRejection::TooLarge => write!(f, "Image must be smaller than 5MB"),
        }
    }
}

pub fn validate_image(mime: &str, size: f64) -> Result<(), UploadRejection> {
    if !ACCEPTED_TYPES.contains(&mime) {
        return Err(UploadRejection::UnsupportedType);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    Ok(())
}

/// `service-images/<token>_<millis>.<ext>`, keeping the original extension.
pub fn object_path(file_name: &str, token: &str, millis: i64) -> String {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "bin".to_string());
    format!("{}/{}_{}.{}", IMAGE_FOLDER, token, millis, extension)
}

pub fn public_url(config: &StoreConfig, bucket: &str, path: &str) -> String {
    format!("{}/storage/v1/object/public/{}/{}", config.url, bucket, path)
}

/// Short base-36 token from the browser's random source.
fn random_token() -> String {
    let mut value = (js_sys::Math::random() * 36f64.powi(10)) as u64;
    let mut token = String::new();
    while value > 0 {
        let digit = (value % 36) as u32;
        token.push(std::char::from_digit(digit, 36).unwrap_or('0'));
        value /= 36;
    }
    if token.is_empty() {
        token.push('0');
    }
    token
}

/// Uploads `file` into the portfolio bucket and returns its public URL.
pub async fn upload_portfolio_image(store: &DataStore, file: &File) -> StoreResult<String> {
    validate_image(&file.type_(), file.size())
        .map_err(|rejection| StoreError::Status { status: 400, message: rejection.to_string() })?;
    let config = store.storage().ok_or(StoreError::NotConfigured)?;
    let session = super::auth::get_session().ok_or(StoreError::Unauthorized)?;

    let path = object_path(&file.name(), &random_token(), Utc::now().timestamp_millis());
    let url = format!("{}/storage/v1/object/{}/{}", config.url, PORTFOLIO_BUCKET, path);
    let response = Request::post(&url)
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {}", session.access_token))
        .header("Content-Type", &file.type_())
        .header("cache-control", "3600")
        .header("x-upsert", "false")
        .body(file.clone())
        .send()
        .await
        .map_err(StoreError::network)?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(StoreError::from_status(status, &body));
    }
    info!("uploaded {}", path);
    Ok(public_url(config, PORTFOLIO_BUCKET, &path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_images_under_limit() {
        assert_eq!(validate_image("image/png", 1024.0), Ok(()));
        assert_eq!(validate_image("image/webp", MAX_IMAGE_BYTES), Ok(()));
    }

    #[test]
    fn rejects_other_types_and_large_files() {
        assert_eq!(validate_image("image/svg+xml", 10.0), Err(UploadRejection::UnsupportedType));
        assert_eq!(validate_image("application/pdf", 10.0), Err(UploadRejection::UnsupportedType));
        assert_eq!(
            validate_image("image/jpeg", MAX_IMAGE_BYTES + 1.0),
            Err(UploadRejection::TooLarge)
        );
    }

    #[test]
    fn object_paths_keep_extension() {
        assert_eq!(
            object_path("Hero Shot.JPG", "k3x9", 1_700_000_000_000),
            "service-images/k3x9_1700000000000.jpg"
        );
        assert_eq!(object_path("noext", "a", 1), "service-images/a_1.bin");
    }

    #[test]
    fn public_urls_point_at_bucket() {
        let config = StoreConfig {
            url: "https://x.supabase.co".into(),
            anon_key: "k".into(),
        };
        assert_eq!(
            public_url(&config, PORTFOLIO_BUCKET, "service-images/a_1.png"),
            "https://x.supabase.co/storage/v1/object/public/portfolio/service-images/a_1.png"
        );
    }
}
