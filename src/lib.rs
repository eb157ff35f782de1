// Copyright 2026 The dominant-color Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract the dominant color from an image.
//!
//! The image is shrunk to a small sample, its pixel colors are clustered with k-means in RGB
//! space, and the most populated cluster whose color is neither too bright nor too dark wins. The
//! clustering follows the dominant color estimation in Chromium's `color_analysis`.
//!
//! 1. Pick starting colors for the clusters by sampling random pixels. A cluster that can't find a
//!    color no other cluster already has within a number of tries ends the search, so an image
//!    with a single color ends up with a single cluster.
//! 2. Assign every pixel to the cluster with the nearest color and move each cluster to the mean
//!    color of its pixels. Repeat until no cluster moves or the iteration limit is hit.
//! 3. Go through the clusters from most to least pixels and pick the first one whose summed
//!    channels lie between the darkness and brightness thresholds. If none does, pick the one with
//!    the most pixels.
//!
//! Fully transparent pixels are ignored. The random sampling uses a fixed seed, so the same image
//! and configuration always give the same color.
//!
//! ```no_run
//! let image = dominant_color::image::open("cover.jpg")?;
//! let color = dominant_color::DominantColorBuilder::from_image(image)
//!     .number_of_clusters(6)
//!     .generate();
//!
//! println!("{color}");
//! # Ok::<(), dominant_color::image::ImageError>(())
//! ```

mod color;
mod config;
mod error;
mod kmeans;
mod load;
mod selector;
mod source;

pub const DEFAULT_SAMPLE_IMAGE_SIZE: u32 = 256;
pub const DEFAULT_NUMBER_OF_CLUSTERS: usize = 4;
pub const DEFAULT_UNIQUE_COLOR_SEARCH_RETRIES: usize = 10;
pub const DEFAULT_CONVERGENCE_ITERATIONS: usize = 50;
pub const DEFAULT_MAXIMUM_BRIGHTNESS_THRESHOLD: u16 = 665;
pub const DEFAULT_MAXIMUM_DARKNESS_THRESHOLD: u16 = 100;

pub use crate::{
    color::Color,
    config::Config,
    error::{Error, Result},
    load::{from_base64, from_bytes, from_path, hex_from_base64, hex_from_path},
    source::{thumbnail, thumbnail_dimensions, Channel, PixelSource},
};
pub use image;

use image::{GenericImageView, Pixel};
use kmeans::ClusterGroup;
use selector::BrightnessBand;
use tracing::debug;

pub struct DominantColorBuilder<I> {
    image: I,
    config: Config,
}

impl<I> DominantColorBuilder<I>
where
    I: GenericImageView,
    I::Pixel: 'static,
    <I::Pixel as Pixel>::Subpixel: Channel + 'static,
{
    pub fn from_image(image: I) -> Self {
        Self {
            image,
            config: Config::default(),
        }
    }

    pub fn config(self, config: Config) -> Self {
        Self { config, ..self }
    }

    pub fn sample_image_size(self, sample_image_size: u32) -> Self {
        Self {
            config: Config {
                sample_image_size,
                ..self.config
            },
            ..self
        }
    }

    pub fn number_of_clusters(self, number_of_clusters: usize) -> Self {
        Self {
            config: Config {
                number_of_clusters,
                ..self.config
            },
            ..self
        }
    }

    pub fn unique_color_search_retries(self, unique_color_search_retries: usize) -> Self {
        Self {
            config: Config {
                unique_color_search_retries,
                ..self.config
            },
            ..self
        }
    }

    pub fn convergence_iterations(self, convergence_iterations: usize) -> Self {
        Self {
            config: Config {
                convergence_iterations,
                ..self.config
            },
            ..self
        }
    }

    pub fn maximum_brightness_threshold(self, maximum_brightness_threshold: u16) -> Self {
        Self {
            config: Config {
                maximum_brightness_threshold,
                ..self.config
            },
            ..self
        }
    }

    pub fn maximum_darkness_threshold(self, maximum_darkness_threshold: u16) -> Self {
        Self {
            config: Config {
                maximum_darkness_threshold,
                ..self.config
            },
            ..self
        }
    }

    pub fn generate(self) -> Color {
        self.config.estimate(&self.image)
    }
}

fn estimate<S>(source: &S, config: &Config) -> Color
where
    S: PixelSource + ?Sized,
{
    let mut rng = kmeans::seeded_rng();
    let mut clusters = ClusterGroup::seed(
        source,
        config.number_of_clusters,
        config.unique_color_search_retries,
        &mut rng,
    );

    if clusters.is_empty() {
        debug!("no clusters to refine, no dominant color");
        return Color::EMPTY;
    }

    clusters.refine(source, config.convergence_iterations);

    let band = BrightnessBand::new(config.maximum_darkness_threshold, config.maximum_brightness_threshold);
    selector::select(clusters.clusters(), band).map_or(Color::EMPTY, Color::opaque)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn builder_applies_every_setting() {
        let image = RgbaImage::from_pixel(1, 1, RED);
        let builder = DominantColorBuilder::from_image(image)
            .sample_image_size(64)
            .number_of_clusters(2)
            .unique_color_search_retries(3)
            .convergence_iterations(7)
            .maximum_brightness_threshold(600)
            .maximum_darkness_threshold(20);

        assert_eq!(builder.config, Config::new(64, 2, 3, 7, 600, 20));
    }

    #[test]
    fn two_by_two_example_picks_heavier_cluster() {
        let image = RgbaImage::from_fn(2, 2, |x, y| match (x, y) {
            (0, 0) | (1, 0) => RED,
            (0, 1) => GREEN,
            _ => CLEAR,
        });

        let color = DominantColorBuilder::from_image(image).number_of_clusters(2).generate();

        assert_eq!(color, Color::opaque((255, 0, 0)));
        assert_eq!(color.to_string(), "ff0000");
    }

    #[test]
    fn empty_image_gives_empty_color() {
        let color = Config::default().estimate(&RgbaImage::new(0, 0));

        assert_eq!(color, Color::EMPTY);
        assert_eq!(color.rgba().3, 0);
    }
}
