use image::{imageops::FilterType, GenericImageView, ImageBuffer, Pixel};

/// Scale between the 16-bit channel convention and 8-bit channels (`0xffff / 0xff`).
const CHANNEL_SCALE: u16 = 257;

/// A rectangular source of pixels.
///
/// Colors are reported with 16 bits per channel, in the order red, green, blue, alpha. Every
/// [`GenericImageView`] with `u8`, `u16` or `f32` channels is a pixel source.
pub trait PixelSource {
    fn dimensions(&self) -> (u32, u32);

    /// The color at `(x, y)`. Callers keep coordinates within [`PixelSource::dimensions`].
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4];
}

/// A channel type that can be widened to the 16-bit convention.
pub trait Channel: Copy {
    fn to_u16(self) -> u16;
}

impl Channel for u8 {
    fn to_u16(self) -> u16 {
        self as u16 * CHANNEL_SCALE
    }
}

impl Channel for u16 {
    fn to_u16(self) -> u16 {
        self
    }
}

impl Channel for f32 {
    fn to_u16(self) -> u16 {
        (self.clamp(0.0, 1.0) * u16::MAX as f32).round() as u16
    }
}

impl<I> PixelSource for I
where
    I: GenericImageView,
    <I::Pixel as Pixel>::Subpixel: Channel,
{
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        let rgba = self.get_pixel(x, y).to_rgba();
        rgba.0.map(Channel::to_u16)
    }
}

/// Quantizes a 16-bit color down to 8-bit RGB, dropping alpha.
pub(crate) fn to_rgb8([r, g, b, _]: [u16; 4]) -> (u8, u8, u8) {
    (
        (r / CHANNEL_SCALE) as u8,
        (g / CHANNEL_SCALE) as u8,
        (b / CHANNEL_SCALE) as u8,
    )
}

pub(crate) fn is_transparent([_, _, _, a]: [u16; 4]) -> bool {
    a == 0
}

/// Computes the size of an image shrunk to fit in a `max` by `max` box, preserving the aspect
/// ratio. Returns `None` if the image already fits, has no pixels, or if `max` is zero.
pub fn thumbnail_dimensions((width, height): (u32, u32), max: u32) -> Option<(u32, u32)> {
    if max == 0 || width == 0 || height == 0 || (width <= max && height <= max) {
        return None;
    }

    let (width, height, max) = (width as u64, height as u64, max as u64);
    let (mut new_width, mut new_height) = (width, height);

    if width > max {
        new_height = (height * max / width).max(1);
        new_width = max;
    }

    if new_height > max {
        new_width = (new_width * max / new_height).max(1);
        new_height = max;
    }

    Some((new_width as u32, new_height as u32))
}

/// Shrinks the image with nearest-neighbor sampling so that neither dimension exceeds `max`.
/// Returns `None` when no shrinking is needed.
pub fn thumbnail<I>(image: &I, max: u32) -> Option<ImageBuffer<I::Pixel, Vec<<I::Pixel as Pixel>::Subpixel>>>
where
    I: GenericImageView,
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: 'static,
{
    let (width, height) = thumbnail_dimensions(GenericImageView::dimensions(image), max)?;
    Some(image::imageops::resize(image, width, height, FilterType::Nearest))
}
