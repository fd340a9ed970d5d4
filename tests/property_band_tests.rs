use bandchart_rs::core::stats::BAND_Z;
use bandchart_rs::core::{ConfidenceBand, population_std_dev};
use proptest::prelude::*;

proptest! {
    #[test]
    fn band_brackets_the_mean(
        values in prop::collection::vec(50.0f64..150.0, 1..50)
    ) {
        let band = ConfidenceBand::from_values(&values).expect("band");
        prop_assert!(band.lower <= band.mean);
        prop_assert!(band.mean <= band.upper);
    }

    #[test]
    fn band_width_is_two_z_sigma(
        values in prop::collection::vec(50.0f64..150.0, 1..50)
    ) {
        let band = ConfidenceBand::from_values(&values).expect("band");
        let std_dev = population_std_dev(&values).expect("std dev");
        prop_assert!((band.width() - 2.0 * BAND_Z * std_dev).abs() <= 1e-9);
    }

    #[test]
    fn constant_values_collapse_the_band(
        value in 50.0f64..150.0,
        count in 1usize..20
    ) {
        let values = vec![value; count];
        let band = ConfidenceBand::from_values(&values).expect("band");
        prop_assert!((band.upper - band.lower).abs() <= 1e-9);
        prop_assert!((band.mean - value).abs() <= 1e-9);
    }
}
