use crate::kmeans::Cluster;

/// Exclusive bounds on the summed channels (`r + g + b`, 0 to 765) of an acceptable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BrightnessBand {
    darkness: u16,
    brightness: u16,
}

impl BrightnessBand {
    pub fn new(darkness: u16, brightness: u16) -> BrightnessBand {
        Self { darkness, brightness }
    }

    pub fn contains(self, (r, g, b): (u8, u8, u8)) -> bool {
        let summed = r as u16 + g as u16 + b as u16;
        summed > self.darkness && summed < self.brightness
    }
}

/// Picks the most populated cluster whose centroid falls within the band. If none does, the most
/// populated cluster is picked regardless. Returns `None` only for an empty slice.
pub(crate) fn select(clusters: &[Cluster], band: BrightnessBand) -> Option<(u8, u8, u8)> {
    // stable sort, so equally populated clusters keep their seeding order
    let mut by_weight = clusters.iter().collect::<Vec<_>>();
    by_weight.sort_by(|lhs, rhs| rhs.weight().cmp(&lhs.weight()));

    by_weight
        .iter()
        .map(|cluster| cluster.centroid())
        .find(|&rgb| band.contains(rgb))
        .or_else(|| by_weight.first().map(|cluster| cluster.centroid()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(rgb: (u8, u8, u8), weight: u64) -> Cluster {
        let mut cluster = Cluster::new(rgb);
        for _ in 0..weight {
            cluster.add_point(rgb);
        }
        cluster
    }

    #[test]
    fn band_bounds_are_exclusive() {
        let band = BrightnessBand::new(100, 665);

        assert!(!band.contains((50, 50, 0)));
        assert!(band.contains((50, 50, 1)));
        assert!(band.contains((255, 254, 155)));
        assert!(!band.contains((255, 255, 155)));
    }

    #[test]
    fn heaviest_acceptable_cluster_wins() {
        let clusters = [
            cluster((0, 0, 200), 3),
            cluster((255, 255, 255), 10),
            cluster((0, 200, 0), 5),
        ];

        assert_eq!(select(&clusters, BrightnessBand::new(100, 665)), Some((0, 200, 0)));
    }

    #[test]
    fn falls_back_to_heaviest_cluster() {
        let clusters = [cluster((0, 0, 0), 2), cluster((255, 255, 255), 7)];

        assert_eq!(select(&clusters, BrightnessBand::new(100, 665)), Some((255, 255, 255)));
    }

    #[test]
    fn ties_keep_seeding_order() {
        let clusters = [cluster((10, 100, 10), 4), cluster((100, 10, 10), 4)];

        assert_eq!(select(&clusters, BrightnessBand::new(100, 665)), Some((10, 100, 10)));
    }

    #[test]
    fn empty_group_selects_nothing() {
        assert_eq!(select(&[], BrightnessBand::new(100, 665)), None);
    }
}
