//! Property-based tests for histogram binning

use plotstat_histogram::{histogram, histogram_with_bins};
use proptest::prelude::*;

proptest! {
    #[test]
    fn counts_sum_to_sample_size(
        sample in prop::collection::vec(-1e6f64..1e6, 1..300),
        bins in 1usize..40,
    ) {
        let hist = histogram_with_bins(&sample, bins);
        prop_assert_eq!(hist.counts().iter().sum::<usize>(), sample.len());
    }

    #[test]
    fn bins_partition_the_range(
        sample in prop::collection::vec(-1e3f64..1e3, 2..300),
        bins in 1usize..40,
    ) {
        let hist = histogram_with_bins(&sample, bins);
        let b = hist.bins();
        prop_assert_eq!(b[0].start, hist.min());
        prop_assert_eq!(b[b.len() - 1].end, hist.max());
        for pair in b.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn default_bin_count_follows_sturges(
        sample in prop::collection::vec(-1e6f64..1e6, 2..300),
    ) {
        let hist = histogram(&sample);
        let expected = ((sample.len() as f64).log2() + 1.0).ceil() as usize;
        // A degenerate (constant) sample collapses to one bin
        prop_assert!(hist.len() == expected || hist.len() == 1);
    }
}
