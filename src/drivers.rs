//! Seeded driver generation. Each reroll draws a pair of scalars per cell:
//! the height driver is uniform, the color driver is biased upward with the
//! cell index so the rainbow sweeps visibly across the grid.

/// Raw per-cell scalars behind one retarget. Both always in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverPair {
    pub color: f32,
    pub height: f32,
}

/// Deterministic uniform source: a seed plus a draw counter pushed through a
/// 64-bit avalanche hash. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct DriverSource {
    seed: u64,
    draws: u64,
}

impl DriverSource {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    pub fn next_drivers(&mut self, index: usize, cell_count: usize) -> DriverPair {
        let height = self.next_unit();
        let bias = if cell_count == 0 {
            0.0
        } else {
            index as f32 / cell_count as f32
        };
        let color = (self.next_unit() + self.next_unit() * bias).clamp(0.0, 1.0);
        DriverPair { color, height }
    }

    fn next_unit(&mut self) -> f32 {
        self.draws = self.draws.wrapping_add(1);
        let mixed = hash_u64(
            self.seed ^ self.draws.wrapping_mul(0x9E37_79B9_7F4A_7C15),
        );
        unit_from_hash(mixed)
    }
}

fn unit_from_hash(hash: u64) -> f32 {
    (hash as f64 / u64::MAX as f64) as f32
}

fn hash_u64(mut value: u64) -> u64 {
    value ^= value >> 33;
    value = value.wrapping_mul(0xff51_afd7_ed55_8ccd);
    value ^= value >> 33;
    value = value.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    value ^= value >> 33;
    value
}

#[cfg(test)]
mod tests {
    use super::DriverSource;

    #[test]
    fn drivers_stay_in_unit_interval() {
        let mut source = DriverSource::new(7);
        for index in 0..500 {
            let pair = source.next_drivers(index, 500);
            assert!((0.0..=1.0).contains(&pair.color), "color {}", pair.color);
            assert!((0.0..=1.0).contains(&pair.height), "height {}", pair.height);
        }
    }

    #[test]
    fn same_seed_replays_the_same_sequence() {
        let mut first = DriverSource::new(42);
        let mut second = DriverSource::new(42);
        for index in 0..64 {
            assert_eq!(
                first.next_drivers(index, 64),
                second.next_drivers(index, 64)
            );
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut first = DriverSource::new(1);
        let mut second = DriverSource::new(2);
        let mismatches = (0..64)
            .filter(|&index| first.next_drivers(index, 64) != second.next_drivers(index, 64))
            .count();
        assert!(mismatches > 32);
    }

    #[test]
    fn color_bias_pushes_later_indices_upward() {
        // With the additive bias term, the tail of a large grid must average
        // higher color drivers than the head.
        let mut source = DriverSource::new(1234);
        let pairs: Vec<_> = (0..2000).map(|i| source.next_drivers(i, 2000)).collect();
        let head: f32 = pairs[..200].iter().map(|p| p.color).sum::<f32>() / 200.0;
        let tail: f32 = pairs[1800..].iter().map(|p| p.color).sum::<f32>() / 200.0;
        assert!(tail > head + 0.1, "head {head} tail {tail}");
    }
}
