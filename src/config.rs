use crate::{
    source::{self, Channel, PixelSource},
    Color, DEFAULT_CONVERGENCE_ITERATIONS, DEFAULT_MAXIMUM_BRIGHTNESS_THRESHOLD, DEFAULT_MAXIMUM_DARKNESS_THRESHOLD,
    DEFAULT_NUMBER_OF_CLUSTERS, DEFAULT_SAMPLE_IMAGE_SIZE, DEFAULT_UNIQUE_COLOR_SEARCH_RETRIES,
};
use image::{GenericImageView, Pixel};

/// Parameters of a dominant color estimation.
///
/// The defaults cluster a 256 by 256 sample of the image into four colors and prefer a color whose
/// summed channels lie strictly between 100 and 665.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Largest width and height the image is shrunk to before clustering. Zero disables shrinking.
    pub sample_image_size: u32,
    pub number_of_clusters: usize,
    /// Random draws each cluster gets to find a starting color no other cluster has.
    pub unique_color_search_retries: usize,
    /// Upper limit on assignment rounds.
    pub convergence_iterations: usize,
    /// Exclusive upper bound on `r + g + b` of a preferred color.
    pub maximum_brightness_threshold: u16,
    /// Exclusive lower bound on `r + g + b` of a preferred color.
    pub maximum_darkness_threshold: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_image_size: DEFAULT_SAMPLE_IMAGE_SIZE,
            number_of_clusters: DEFAULT_NUMBER_OF_CLUSTERS,
            unique_color_search_retries: DEFAULT_UNIQUE_COLOR_SEARCH_RETRIES,
            convergence_iterations: DEFAULT_CONVERGENCE_ITERATIONS,
            maximum_brightness_threshold: DEFAULT_MAXIMUM_BRIGHTNESS_THRESHOLD,
            maximum_darkness_threshold: DEFAULT_MAXIMUM_DARKNESS_THRESHOLD,
        }
    }
}

impl Config {
    pub fn new(
        sample_image_size: u32,
        number_of_clusters: usize,
        unique_color_search_retries: usize,
        convergence_iterations: usize,
        maximum_brightness_threshold: u16,
        maximum_darkness_threshold: u16,
    ) -> Self {
        Self {
            sample_image_size,
            number_of_clusters,
            unique_color_search_retries,
            convergence_iterations,
            maximum_brightness_threshold,
            maximum_darkness_threshold,
        }
    }

    /// Estimates the dominant color of an image, shrinking it first if it's larger than
    /// [`Config::sample_image_size`].
    pub fn estimate<I>(&self, image: &I) -> Color
    where
        I: GenericImageView,
        I::Pixel: 'static,
        <I::Pixel as Pixel>::Subpixel: Channel + 'static,
    {
        match source::thumbnail(image, self.sample_image_size) {
            Some(sample) => self.estimate_source(&sample),
            None => self.estimate_source(image),
        }
    }

    /// Estimates the dominant color of a pixel source as is, without shrinking it.
    pub fn estimate_source<S>(&self, source: &S) -> Color
    where
        S: PixelSource + ?Sized,
    {
        crate::estimate(source, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        assert_eq!(Config::default(), Config::new(256, 4, 10, 50, 665, 100));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "number_of_clusters": 8 }"#).unwrap();

        assert_eq!(
            config,
            Config {
                number_of_clusters: 8,
                ..Config::default()
            }
        );
    }
}
