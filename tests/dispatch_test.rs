//! Tests for parameter normalization and tier selection

use image_dispatch_gateway::dispatch::{
    GenerateJob, Tier, DIMENSION_ALIGN, MAX_DIMENSION, MAX_STEPS, MIN_DIMENSION, MIN_STEPS,
    PIXEL_THRESHOLD,
};

#[test]
fn test_dimensions_always_in_range_and_aligned() {
    let inputs = [
        i64::MIN,
        -512,
        -5,
        0,
        1,
        8,
        100,
        255,
        256,
        257,
        511,
        512,
        1000,
        1023,
        1024,
        1025,
        2040,
        2044,
        2047,
        2048,
        2049,
        4096,
        10_000,
        i64::MAX,
    ];

    for &w in &inputs {
        for &h in &inputs {
            let job = GenerateJob::normalize(String::new(), w, h, 4);
            assert!(job.width >= MIN_DIMENSION && job.width <= MAX_DIMENSION);
            assert!(job.height >= MIN_DIMENSION && job.height <= MAX_DIMENSION);
            assert_eq!(job.width % DIMENSION_ALIGN, 0);
            assert_eq!(job.height % DIMENSION_ALIGN, 0);
        }
    }
}

#[test]
fn test_clamp_then_floor() {
    // 2044 is inside the clamp range, so only the floor to a multiple of 8
    // applies
    let job = GenerateJob::normalize("portrait".to_string(), 2044, 2044, 4);
    assert_eq!(job.width, 2040);
    assert_eq!(job.height, 2040);
}

#[test]
fn test_steps_clamped() {
    let low = GenerateJob::normalize(String::new(), 512, 512, 0);
    assert_eq!(low.steps, MIN_STEPS);

    let high = GenerateJob::normalize(String::new(), 512, 512, 25);
    assert_eq!(high.steps, MAX_STEPS);

    let in_range = GenerateJob::normalize(String::new(), 512, 512, 7);
    assert_eq!(in_range.steps, 7);
}

#[test]
fn test_negative_inputs_clamped_not_rejected() {
    let job = GenerateJob::normalize(String::new(), -5, -2048, -3);
    assert_eq!(job.width, MIN_DIMENSION);
    assert_eq!(job.height, MIN_DIMENSION);
    assert_eq!(job.steps, MIN_STEPS);
}

#[test]
fn test_prompt_passed_through_unvalidated() {
    let job = GenerateJob::normalize(String::new(), 512, 512, 4);
    assert_eq!(job.prompt, "");

    let job = GenerateJob::normalize("  odd\n text\t".to_string(), 512, 512, 4);
    assert_eq!(job.prompt, "  odd\n text\t");
}

#[test]
fn test_tier_at_threshold_is_small() {
    let job = GenerateJob::normalize(String::new(), 1024, 1024, 4);
    assert_eq!(job.total_pixels(), PIXEL_THRESHOLD);
    assert_eq!(job.tier(), Tier::Small);
}

#[test]
fn test_tier_above_threshold_is_large() {
    let job = GenerateJob::normalize(String::new(), 1024, 1032, 4);
    assert!(job.total_pixels() > PIXEL_THRESHOLD);
    assert_eq!(job.tier(), Tier::Large);
}

#[test]
fn test_tier_small_resolutions() {
    for (w, h) in [(256, 256), (512, 512), (512, 2048), (1024, 1024)] {
        let job = GenerateJob::normalize(String::new(), w, h, 4);
        assert_eq!(job.tier(), Tier::Small, "{}x{} should be small", w, h);
    }
}

#[test]
fn test_tier_large_resolutions() {
    for (w, h) in [(1032, 1024), (2048, 2048), (2048, 1024), (1536, 1536)] {
        let job = GenerateJob::normalize(String::new(), w, h, 4);
        assert_eq!(job.tier(), Tier::Large, "{}x{} should be large", w, h);
    }
}
