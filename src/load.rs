//! Loading images from files, encoded bytes and base64 text.

use crate::{error::Error, error::Result, Color, Config};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::io::Reader as ImageReader;
use std::path::Path;
use tracing::warn;

/// Decodes the image file at `path` and estimates its dominant color. The format is detected from
/// the file contents.
pub fn from_path<P: AsRef<Path>>(path: P, config: &Config) -> Result<Color> {
    let path = path.as_ref();
    let open_error = |source| Error::Open {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .map_err(open_error)?
        .with_guessed_format()
        .map_err(open_error)?
        .decode()?;

    Ok(config.estimate(&image))
}

/// Decodes an encoded image (PNG, JPEG, GIF, ...) and estimates its dominant color.
pub fn from_bytes(bytes: &[u8], config: &Config) -> Result<Color> {
    let image = image::load_from_memory(bytes)?;
    Ok(config.estimate(&image))
}

/// Decodes a standard base64 encoded image and estimates its dominant color. Line breaks and
/// other ASCII whitespace in `data` are ignored.
pub fn from_base64(data: &str, config: &Config) -> Result<Color> {
    let data = data
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect::<String>();
    let bytes = STANDARD.decode(data)?;

    from_bytes(&bytes, config)
}

/// Like [`from_path`], but returns the color as lowercase hex. Any failure, including finding no
/// color at all, results in an empty string.
pub fn hex_from_path<P: AsRef<Path>>(path: P, config: &Config) -> String {
    let path = path.as_ref();

    from_path(path, config).map(|color| color.to_string()).unwrap_or_else(|error| {
        warn!(path = %path.display(), %error, "could not estimate dominant color");
        String::new()
    })
}

/// Like [`from_base64`], but returns the color as lowercase hex. Any failure, including finding no
/// color at all, results in an empty string.
pub fn hex_from_base64(data: &str, config: &Config) -> String {
    from_base64(data, config).map(|color| color.to_string()).unwrap_or_else(|error| {
        warn!(%error, "could not estimate dominant color");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_open_error() {
        let error = from_path("does/not/exist.png", &Config::default()).unwrap_err();

        assert!(matches!(error, Error::Open { .. }));
        assert_eq!(hex_from_path("does/not/exist.png", &Config::default()), "");
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let error = from_bytes(b"definitely not an image", &Config::default()).unwrap_err();

        assert!(matches!(error, Error::Decode(_)));
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let error = from_base64("not*base64!", &Config::default()).unwrap_err();

        assert!(matches!(error, Error::Base64(_)));
        assert_eq!(hex_from_base64("not*base64!", &Config::default()), "");
    }
}
