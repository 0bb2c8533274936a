/// Media handling module
///
/// This module handles:
/// - Encoding locally selected files into self-contained data URIs
///   (the stand-in for a real object-storage upload)
/// - Decoding data URIs back into raw bytes for display
/// - Fetching remote gallery images over HTTP

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to read file for upload: {0}")]
    Read(#[from] std::io::Error),
    #[error("the selected file is not a recognized image format")]
    UnknownFormat,
}

/// A locally selected image encoded for storage or transmission.
///
/// The base64 payload and mime type feed the AI gateway directly; the data
/// URI form is what gets persisted as a permanent, self-contained image
/// "URL".
#[derive(Debug, Clone)]
pub struct EncodedUpload {
    pub file_name: String,
    pub mime_type: String,
    pub base64: String,
}

impl EncodedUpload {
    /// Encode raw file bytes, sniffing the image format from the content.
    pub fn from_bytes(file_name: impl Into<String>, bytes: &[u8]) -> Result<Self, EncodeError> {
        let format = image::guess_format(bytes).map_err(|_| EncodeError::UnknownFormat)?;

        Ok(EncodedUpload {
            file_name: file_name.into(),
            mime_type: format.to_mime_type().to_string(),
            base64: B64.encode(bytes),
        })
    }

    /// The full contents as a data URI, usable anywhere a URL is accepted.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Read and encode a locally selected image file.
pub async fn encode_image_file(path: &Path) -> Result<EncodedUpload, EncodeError> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    EncodedUpload::from_bytes(file_name, &bytes)
}

/// Decode the payload of a `data:` URI. Returns None for anything else.
pub fn decode_data_uri(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (_, payload) = rest.split_once(";base64,")?;
    B64.decode(payload).ok()
}

/// Fetch a remote image for display in a gallery.
///
/// Errors are normalized to a human-readable message; callers render a
/// placeholder rather than failing the view.
pub async fn fetch_image(client: reqwest::Client, url: String) -> Result<Vec<u8>, String> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if !response.status().is_success() {
        return Err(format!("image request failed: {}", response.status()));
    }

    let bytes = response.bytes().await.map_err(|err| err.to_string())?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_sniffs_png_mime() {
        let upload = EncodedUpload::from_bytes("logo.png", &PNG_MAGIC).unwrap();
        assert_eq!(upload.mime_type, "image/png");
        assert!(upload.data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_unrecognized_bytes_are_rejected() {
        let result = EncodedUpload::from_bytes("notes.txt", b"hello world");
        assert!(matches!(result, Err(EncodeError::UnknownFormat)));
    }

    #[test]
    fn test_data_uri_round_trip() {
        let upload = EncodedUpload::from_bytes("logo.png", &PNG_MAGIC).unwrap();
        let decoded = decode_data_uri(&upload.data_uri()).unwrap();
        assert_eq!(decoded, PNG_MAGIC);
    }

    #[test]
    fn test_remote_urls_are_not_data_uris() {
        assert!(decode_data_uri("https://picsum.photos/seed/soccer1/500/700").is_none());
        assert!(decode_data_uri("data:image/png;base99,zzz").is_none());
    }
}
