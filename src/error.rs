//! Errors of the image loading layer. Estimation itself never fails, it returns
//! [`crate::Color::EMPTY`] instead.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The image file could not be opened or read
    #[error("failed to open image {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not an image in a supported format
    #[error("failed to decode image")]
    Decode(#[from] image::ImageError),

    /// The input is not valid base64
    #[error("invalid base64 image data")]
    Base64(#[from] base64::DecodeError),
}
