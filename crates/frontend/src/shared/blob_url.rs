//! Owned object URLs for binary payloads received from the backend.

use web_sys::{Blob, BlobPropertyBag, Url};

/// Object URL over a binary payload. The URL stays usable while the value
/// is alive and is revoked on drop, so replacing the value never leaks the
/// previous URL.
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Wrap PNG bytes returned by the visualization endpoints
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, String> {
        Self::from_bytes(bytes, "image/png")
    }

    /// Wrap a binary payload with the given MIME type
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Result<Self, String> {
        let array = js_sys::Array::new();
        array.push(&js_sys::Uint8Array::from(bytes).into());

        let properties = BlobPropertyBag::new();
        properties.set_type(mime);

        let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
            .map_err(|e| format!("Failed to create blob: {:?}", e))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            log::error!("Failed to revoke object URL: {:?}", e);
        }
    }
}
