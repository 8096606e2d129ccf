use rstest::*;

use super::*;

#[rstest]
#[case("1", "8Gi", 0)]
#[case("2", "16Gi", 1)]
#[case("3", "24Gi", 2)]
#[case("4", "32Gi", 3)]
#[case("8", "64Gi", 4)]
#[case("16", "128Gi", 5)]
#[case("32", "256Gi", 6)]
fn test_classify_catalog(#[case] cpu: &str, #[case] memory: &str, #[case] index: usize) {
    assert_eq!(classify(&ResourceLimits::new(cpu, memory)).index(), index);
}

#[rstest]
#[case("04", "32Gi")]
#[case("1.0", "8Gi")]
#[case("4", "32768Mi")]
#[case("4000m", "32Gi")]
#[case("1", "16Gi")]
#[case("", "8Gi")]
#[case("1", "")]
fn test_classify_not_in_catalog(#[case] cpu: &str, #[case] memory: &str) {
    assert_eq!(classify(&ResourceLimits::new(cpu, memory)), SizeBucket::Other);
}

#[rstest]
fn test_bucket_indices_follow_order() {
    for (i, bucket) in SizeBucket::ALL.iter().enumerate() {
        assert_eq!(bucket.index(), i);
    }
    assert_eq!(SizeBucket::Other.index(), BUCKET_COUNT - 1);
}

#[rstest]
fn test_is_unset() {
    assert!(ResourceLimits::default().is_unset());
    assert!(!ResourceLimits::new("", "1Gi").is_unset());
    assert!(!ResourceLimits::new("500m", "").is_unset());
}
