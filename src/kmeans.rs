use crate::source::{is_transparent, to_rgb8, PixelSource};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;
use tracing::{debug, trace};

/// Results only depend on the image and the configuration, never on outside entropy.
const RANDOM_SEED: u64 = 0;

pub(crate) fn seeded_rng() -> Xoroshiro128PlusPlus {
    Xoroshiro128PlusPlus::seed_from_u64(RANDOM_SEED)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cluster {
    centroid: (u8, u8, u8),
    sum: [u64; 3],
    count: u64,
}

/// The clusters of a single estimation. The length is fixed once seeding is done.
#[derive(Debug)]
pub(crate) struct ClusterGroup {
    clusters: Vec<Cluster>,
}

impl Cluster {
    pub fn new(centroid: (u8, u8, u8)) -> Self {
        Self {
            centroid,
            sum: [0; 3],
            count: 0,
        }
    }

    pub fn centroid(&self) -> (u8, u8, u8) {
        self.centroid
    }

    /// Number of pixels assigned to this cluster in the latest round.
    pub fn weight(&self) -> u64 {
        self.count
    }

    pub fn add_point(&mut self, (r, g, b): (u8, u8, u8)) {
        self.sum[0] += r as u64;
        self.sum[1] += g as u64;
        self.sum[2] += b as u64;
        self.count += 1;
    }

    fn reset(&mut self) {
        self.sum = [0; 3];
        self.count = 0;
    }

    fn distance_squared(&self, (r, g, b): (u8, u8, u8)) -> u32 {
        let (cr, cg, cb) = self.centroid;
        let dr = r as i32 - cr as i32;
        let dg = g as i32 - cg as i32;
        let db = b as i32 - cb as i32;

        (dr * dr + dg * dg + db * db) as u32
    }

    /// Moves the centroid to the rounded mean of the accumulated points and returns whether it
    /// stayed in place. A cluster without points keeps its centroid.
    fn recompute_centroid(&mut self) -> bool {
        if self.count == 0 {
            return true;
        }

        let mean = |sum: u64| ((sum + self.count / 2) / self.count) as u8;
        let centroid = (mean(self.sum[0]), mean(self.sum[1]), mean(self.sum[2]));
        let unchanged = centroid == self.centroid;
        self.centroid = centroid;

        unchanged
    }
}

impl ClusterGroup {
    /// Picks up to `number_of_clusters` distinct starting colors from randomly drawn pixels.
    ///
    /// Each cluster gets `retries` draws to find a color no other cluster starts with; a draw that
    /// lands on a transparent pixel is spent without a result. Seeding ends at the first cluster
    /// that can't find a unique color, so the group can be smaller than requested or empty.
    pub fn seed<S, R>(source: &S, number_of_clusters: usize, retries: usize, rng: &mut R) -> Self
    where
        S: PixelSource + ?Sized,
        R: Rng,
    {
        let mut group = Self { clusters: Vec::new() };

        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return group;
        }

        for slot in 0..number_of_clusters {
            let mut found = false;

            for _ in 0..retries {
                let x = rng.gen_range(0..width as u64) as u32;
                let y = rng.gen_range(0..height as u64) as u32;

                let rgba = source.rgba16(x, y);
                if is_transparent(rgba) {
                    continue;
                }

                let rgb = to_rgb8(rgba);
                if !group.contains_centroid(rgb) {
                    group.clusters.push(Cluster::new(rgb));
                    found = true;
                    break;
                }
            }

            if !found {
                trace!(slot, retries, "no unique color found, seeding stopped");
                break;
            }
        }

        debug!(requested = number_of_clusters, seeded = group.len(), "seeded clusters");
        group
    }

    pub fn contains_centroid(&self, rgb: (u8, u8, u8)) -> bool {
        self.clusters.iter().any(|cluster| cluster.centroid == rgb)
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Index of the cluster nearest to `rgb`. The first cluster wins ties. The group must not be
    /// empty.
    fn closest(&self, rgb: (u8, u8, u8)) -> usize {
        let mut closest = 0;
        let mut closest_distance = u32::MAX;

        for (i, cluster) in self.clusters.iter().enumerate() {
            let distance = cluster.distance_squared(rgb);

            if distance < closest_distance {
                closest = i;
                closest_distance = distance;
            }
        }

        closest
    }

    /// Runs up to `max_iterations` assignment rounds, stopping early once no centroid moves.
    /// Returns the number of rounds run.
    pub fn refine<S>(&mut self, source: &S, max_iterations: usize) -> usize
    where
        S: PixelSource + ?Sized,
    {
        if self.clusters.is_empty() {
            return 0;
        }

        let (width, height) = source.dimensions();

        for round in 1..=max_iterations {
            self.clusters.iter_mut().for_each(Cluster::reset);

            for y in 0..height {
                for x in 0..width {
                    let rgba = source.rgba16(x, y);
                    if is_transparent(rgba) {
                        continue;
                    }

                    let rgb = to_rgb8(rgba);
                    let closest = self.closest(rgb);
                    self.clusters[closest].add_point(rgb);
                }
            }

            // every centroid has to be recomputed, no short-circuiting
            let mut converged = true;
            for cluster in &mut self.clusters {
                converged &= cluster.recompute_centroid();
            }

            if converged {
                debug!(round, "clusters converged");
                return round;
            }
        }

        debug!(max_iterations, "clusters did not converge");
        max_iterations
    }

    #[cfg(test)]
    fn from_centroids(centroids: &[(u8, u8, u8)]) -> Self {
        Self {
            clusters: centroids.iter().copied().map(Cluster::new).collect(),
        }
    }
}
