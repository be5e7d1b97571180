use anyhow::{anyhow, Result};
use log::debug;
use ndarray::Array2;
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate a `num_samples` x `num_dimensions` matrix of independent draws
/// from the standard normal distribution, in row-major layout.
///
/// With a seed, the output is bit-identical across runs. Without one, the rng
/// is seeded from entropy and runs differ.
pub fn generate_dataset(
    num_samples: usize,
    num_dimensions: usize,
    seed: Option<u64>,
) -> Result<Array2<f32>> {
    if num_samples == 0 || num_dimensions == 0 {
        return Err(anyhow!(
            "Invalid shape {}x{}: both dimensions must be positive",
            num_samples,
            num_dimensions
        ));
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    debug!(
        "Generating {}x{} standard normal dataset",
        num_samples, num_dimensions
    );
    Ok(Array2::random_using(
        (num_samples, num_dimensions),
        StandardNormal,
        &mut rng,
    ))
}
