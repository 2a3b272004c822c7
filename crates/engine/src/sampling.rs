use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("invalid argument: sample size {sample_size} exceeds population size {population_size}")]
    InvalidArgument {
        sample_size: usize,
        population_size: usize,
    },
}

/// Draws `sample_size` distinct indices uniformly from `0..population_size`.
///
/// Runs a partial Fisher-Yates shuffle: only the first `sample_size` slots of
/// the population are settled, so the output is a uniform random subset in
/// random order. Memory is `O(population_size)`.
pub fn sample_without_replacement<R: Rng + ?Sized>(
    sample_size: usize,
    population_size: usize,
    rng: &mut R,
) -> Result<Vec<usize>, SampleError> {
    if sample_size > population_size {
        return Err(SampleError::InvalidArgument {
            sample_size,
            population_size,
        });
    }
    if sample_size == 0 {
        return Ok(Vec::new());
    }

    let mut population: Vec<usize> = (0..population_size).collect();
    for slot in 0..sample_size {
        let pick = rng.gen_range(slot..population_size);
        population.swap(slot, pick);
    }
    population.truncate(sample_size);
    Ok(population)
}
