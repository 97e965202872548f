// qualis-core/src/domain/quality/sampling.rs

use serde::Serialize;

use super::SampleFraction;

/// Which learner records of a population get reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SamplingPlan {
    pub population: usize,
    pub fraction: SampleFraction,
    /// Zero-based positions in the population, ascending.
    pub positions: Vec<usize>,
}

impl SamplingPlan {
    /// ceil(population * fraction), computed on integer percents so that
    /// 10 x 70% is exactly 7. Products are taken in u128 and never overflow.
    pub fn sample_size(population: usize, fraction: SampleFraction) -> usize {
        let pct = u128::from(fraction.percent());
        let size = (population as u128 * pct).div_ceil(100);
        usize::try_from(size).map_or(population, |size| size.min(population))
    }

    /// Picks evenly spaced positions. Same input, same plan.
    pub fn draw(population: usize, fraction: SampleFraction) -> Self {
        let size = Self::sample_size(population, fraction);
        let positions = (0..size).map(|k| position(k, population, size)).collect();
        Self {
            population,
            fraction,
            positions,
        }
    }

    pub fn select<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.positions.iter().filter_map(|i| items.get(*i)).collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// k-th of `size` evenly spaced positions in `0..population`.
fn position(k: usize, population: usize, size: usize) -> usize {
    let pos = k as u128 * population as u128 / size.max(1) as u128;
    // k < size, so pos < population
    usize::try_from(pos).unwrap_or(population.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_size_rounds_up() {
        assert_eq!(SamplingPlan::sample_size(10, SampleFraction::High), 7);
        assert_eq!(SamplingPlan::sample_size(10, SampleFraction::Low), 2);
        assert_eq!(SamplingPlan::sample_size(3, SampleFraction::Low), 1);
        assert_eq!(SamplingPlan::sample_size(5, SampleFraction::Medium), 3);
        assert_eq!(SamplingPlan::sample_size(0, SampleFraction::High), 0);
    }

    #[test]
    fn test_positions_are_distinct_and_in_range() {
        for population in [1usize, 2, 7, 10, 33] {
            for fraction in [SampleFraction::Low, SampleFraction::Medium, SampleFraction::High] {
                let plan = SamplingPlan::draw(population, fraction);
                assert_eq!(plan.len(), SamplingPlan::sample_size(population, fraction));
                assert!(plan.positions.windows(2).all(|w| w[0] < w[1]));
                assert!(plan.positions.iter().all(|p| *p < population));
            }
        }
    }

    #[test]
    fn test_draw_is_deterministic() {
        let a = SamplingPlan::draw(20, SampleFraction::Medium);
        let b = SamplingPlan::draw(20, SampleFraction::Medium);
        assert_eq!(a, b);
        assert_eq!(a.positions, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
    }

    #[test]
    fn test_huge_population_does_not_overflow() {
        assert_eq!(
            SamplingPlan::sample_size(usize::MAX, SampleFraction::Low),
            usize::MAX / 5
        );
        assert!(SamplingPlan::sample_size(usize::MAX, SampleFraction::High) < usize::MAX);

        let size = SamplingPlan::sample_size(usize::MAX, SampleFraction::High);
        let last = position(size - 1, usize::MAX, size);
        assert!(last < usize::MAX);
        assert!(last > position(size - 2, usize::MAX, size));
    }

    #[test]
    fn test_select_items() {
        let learners = ["a", "b", "c", "d", "e"];
        let plan = SamplingPlan::draw(learners.len(), SampleFraction::Low);
        assert_eq!(plan.select(&learners), vec![&"a"]);
    }
}
