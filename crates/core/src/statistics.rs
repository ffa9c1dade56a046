//! Aggregate statistics over registered patients.

use vida_types::Age;

/// Summary of the ages currently in the registry.
///
/// With no patients the mean is `0.0` and both extremes are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean_age: f64,
    pub min_age: Option<Age>,
    pub max_age: Option<Age>,
}

impl Statistics {
    /// Computes the statistics in a single pass over `ages`.
    pub fn from_ages<I>(ages: I) -> Self
    where
        I: IntoIterator<Item = Age>,
    {
        let mut count = 0usize;
        let mut sum = 0u64;
        let mut min_age: Option<Age> = None;
        let mut max_age: Option<Age> = None;

        for age in ages {
            count += 1;
            sum += u64::from(age.value());
            min_age = Some(min_age.map_or(age, |m| m.min(age)));
            max_age = Some(max_age.map_or(age, |m| m.max(age)));
        }

        let mean_age = if count > 0 {
            sum as f64 / count as f64
        } else {
            0.0
        };

        Self {
            count,
            mean_age,
            min_age,
            max_age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ages(values: &[u32]) -> Vec<Age> {
        values.iter().copied().map(Age::new).collect()
    }

    #[test]
    fn test_empty_input_has_zero_mean_and_no_extremes() {
        let stats = Statistics::from_ages(Vec::new());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean_age, 0.0);
        assert_eq!(stats.min_age, None);
        assert_eq!(stats.max_age, None);
    }

    #[test]
    fn test_mixed_ages() {
        let stats = Statistics::from_ages(ages(&[30, 45, 20]));
        assert_eq!(stats.count, 3);
        assert_eq!(format!("{:.2}", stats.mean_age), "31.67");
        assert_eq!(stats.min_age, Some(Age::new(20)));
        assert_eq!(stats.max_age, Some(Age::new(45)));
    }

    #[test]
    fn test_single_age_is_its_own_extremes() {
        let stats = Statistics::from_ages(ages(&[7]));
        assert_eq!(stats.mean_age, 7.0);
        assert_eq!(stats.min_age, stats.max_age);
    }

    #[test]
    fn test_large_ages_do_not_overflow_sum() {
        let stats = Statistics::from_ages(ages(&[u32::MAX, u32::MAX]));
        assert_eq!(stats.mean_age, f64::from(u32::MAX));
    }
}
