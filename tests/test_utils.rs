#![allow(dead_code)] // Each test crate uses a different subset of these helpers

use bs_surface_lib::{DashboardConfig, OptionParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed shared by the randomized checks so failures reproduce
pub const TEST_SEED: u64 = 123456;

/// S=100, K=100, T=1y, r=5%, sigma=20%: the textbook at-the-money case
pub fn reference_params() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)
}

/// Draw `n` parameter sets inside the model's domain.
///
/// Ranges cover deep in/out of the money, very short and long maturities,
/// negative rates and high volatility.
pub fn random_valid_params(n: usize) -> Vec<OptionParameters> {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    (0..n)
        .map(|_| {
            OptionParameters::new(
                rng.gen_range(10.0..500.0),
                rng.gen_range(10.0..500.0),
                rng.gen_range(0.01..5.0),
                rng.gen_range(-0.02..0.10),
                rng.gen_range(0.05..1.0),
            )
        })
        .collect()
}

/// Assert two floats agree within an absolute tolerance.
pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {} ± {}, got {}",
        what,
        expected,
        tol,
        actual
    );
}

/// Config used by integration tests: default grid, permissive inputs
pub fn create_test_config() -> DashboardConfig {
    DashboardConfig::standard()
}

/// Unique path in the system temp directory for test artefacts.
pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("bs_surface_{}_{}", std::process::id(), name))
}
