use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::attributes::Attribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Dataset;

/// Seeded stream of labeled points: three numeric attributes drawn from
/// `[0, 10)` and a nominal one with four values. The label is 0 when
/// `x0 + x1 <= threshold`, else 1; the remaining attributes are noise.
#[derive(Debug)]
pub struct ThresholdGenerator {
    seed: u64,
    rng: StdRng,
    threshold: f64,
    header: InstanceHeader,
}

impl ThresholdGenerator {
    pub fn new(threshold: f64, seed: u64) -> Self {
        let header = InstanceHeader::new(
            "threshold".into(),
            vec![
                Attribute::numeric("x0"),
                Attribute::numeric("x1"),
                Attribute::numeric("x2"),
                Attribute::nominal(
                    "group",
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                ),
            ],
        );
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            threshold,
            header,
        }
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn next_point(&mut self) -> (Vec<f64>, usize) {
        let x0 = self.rng.random_range(0.0..10.0);
        let x1 = self.rng.random_range(0.0..10.0);
        let x2 = self.rng.random_range(0.0..10.0);
        let group = self.rng.random_range(0..4usize) as f64;
        let label = usize::from(x0 + x1 > self.threshold);
        (vec![x0, x1, x2, group], label)
    }

    pub fn take_dataset(&mut self, n: usize) -> (Dataset, Vec<usize>) {
        let mut data = Dataset::new(self.header.number_of_attributes());
        let mut labels = Vec::with_capacity(n);
        for _ in 0..n {
            let (point, label) = self.next_point();
            // Points always match the header.
            if data.push(&point).is_ok() {
                labels.push(label);
            }
        }
        (data, labels)
    }

    pub fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_points() {
        let mut a = ThresholdGenerator::new(8.0, 7);
        let mut b = ThresholdGenerator::new(8.0, 7);
        for _ in 0..20 {
            assert_eq!(a.next_point(), b.next_point());
        }
    }

    #[test]
    fn restart_replays_the_stream() {
        let mut g = ThresholdGenerator::new(8.0, 3);
        let (first, labels) = g.take_dataset(10);
        g.restart();
        let (again, labels_again) = g.take_dataset(10);
        assert_eq!(first, again);
        assert_eq!(labels, labels_again);
    }

    #[test]
    fn labels_follow_threshold() {
        let mut g = ThresholdGenerator::new(8.0, 11);
        for _ in 0..100 {
            let (p, label) = g.next_point();
            assert_eq!(label == 0, p[0] + p[1] <= 8.0);
            assert!((0.0..4.0).contains(&p[3]));
        }
    }
}
