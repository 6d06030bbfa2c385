use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageFormat, ImageOutputFormat};

use crate::error::UploadError;

const JPEG_QUALITY: u8 = 85;

/// An uploaded HMI screenshot, re-encoded as a standalone JPEG `data:` URL.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    data_url: String,
    width: u32,
    height: u32,
}

impl ImagePayload {
    /// Accepts PNG or JPEG bytes; everything else is rejected before decoding.
    pub fn from_upload(bytes: &[u8]) -> Result<Self, UploadError> {
        match image::guess_format(bytes) {
            Ok(ImageFormat::Png | ImageFormat::Jpeg) => {}
            _ => return Err(UploadError::UnsupportedFormat),
        }

        let img = image::load_from_memory(bytes).map_err(UploadError::Decode)?;
        let (width, height) = (img.width(), img.height());

        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

        let mut jpeg_bytes = Vec::new();
        rgb.write_to(
            &mut Cursor::new(&mut jpeg_bytes),
            ImageOutputFormat::Jpeg(JPEG_QUALITY),
        )
        .map_err(UploadError::Encode)?;

        let data_url = format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode(&jpeg_bytes)
        );

        Ok(Self {
            data_url,
            width,
            height,
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
