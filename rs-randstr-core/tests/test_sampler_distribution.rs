//! Statistical tests for the index samplers.
//!
//! Thresholds sit six standard deviations above the chi-square mean, so a
//! correct sampler fails them with negligible probability while a modulo
//! biased one (ex. 256 % 100 skewing the first 56 values) fails reliably.

use rs_randstr_core::{FastSampler, IndexSampler, SecureSampler};

fn histogram<S: IndexSampler>(sampler: &mut S, bound: usize, draws: usize) -> Vec<usize> {
	let mut counts = vec![0usize; bound];
	for _ in 0..draws {
		let index = sampler.sample(bound).unwrap();
		assert!(index < bound, "{} out of [0, {})", index, bound);
		counts[index] += 1;
	}
	counts
}

fn chi_square(counts: &[usize], draws: usize) -> f64 {
	let expected = draws as f64 / counts.len() as f64;
	counts
		.iter()
		.map(|&observed| {
			let diff = observed as f64 - expected;
			diff * diff / expected
		})
		.sum()
}

fn threshold(bound: usize) -> f64 {
	let df = (bound - 1) as f64;
	df + 6.0 * (2.0 * df).sqrt()
}

#[test]
fn test_fast_sampler_uniform_across_seeds() {
	for seed in [1u64, 7, 42, 2024, 0xDEAD_BEEF] {
		for bound in [2usize, 10, 62, 100, 257] {
			let draws = bound * 400;
			let counts = histogram(&mut FastSampler::from_seed(seed), bound, draws);
			let statistic = chi_square(&counts, draws);
			assert!(
				statistic < threshold(bound),
				"seed {} bound {}: chi-square {} above {}",
				seed,
				bound,
				statistic,
				threshold(bound)
			);
		}
	}
}

#[test]
fn test_secure_sampler_uniform() {
	for bound in [2usize, 10, 62, 100, 129, 257] {
		let draws = bound * 400;
		let counts = histogram(&mut SecureSampler::new(), bound, draws);
		let statistic = chi_square(&counts, draws);
		assert!(
			statistic < threshold(bound),
			"bound {}: chi-square {} above {}",
			bound,
			statistic,
			threshold(bound)
		);
	}
}

#[test]
fn test_modulo_bias_would_be_detected() {
	// Reference for the threshold above: plain `byte % 100` over uniform
	// bytes gives values below 56 a 3/2 weight.
	let bound = 100;
	let draws = bound * 400;
	let mut counts = vec![0usize; bound];
	for i in 0..draws {
		counts[(i % 256) % bound] += 1;
	}
	assert!(chi_square(&counts, draws) > threshold(bound));
}

#[test]
fn test_samples_stay_below_bound() {
	let mut fast = FastSampler::new();
	let mut secure = SecureSampler::new();
	let mut bound = 1u64;
	while bound <= u32::MAX as u64 {
		for candidate in [bound, bound + 1, bound * 3 / 2] {
			if candidate == 0 || candidate > u32::MAX as u64 {
				continue;
			}
			let candidate = candidate as usize;
			for _ in 0..20 {
				assert!(fast.sample(candidate).unwrap() < candidate);
				assert!(secure.sample(candidate).unwrap() < candidate);
			}
		}
		bound *= 2;
	}
}

#[test]
fn test_rejection_loop_terminates_quickly() {
	// 62 symbols: 248 of 256 byte values are accepted.
	let mut sampler = SecureSampler::new();
	let samples = 20_000;
	for _ in 0..samples {
		sampler.sample(62).unwrap();
	}
	assert_eq!(sampler.draws(), samples + sampler.rejections());
	let average = sampler.draws() as f64 / samples as f64;
	assert!((1.0..1.1).contains(&average), "average draws per sample {}", average);
}

#[test]
fn test_rejection_loop_worst_case_stays_below_two() {
	// 129 is the worst single-byte bound: only 129 of 256 values are accepted,
	// so a sample costs about 1.98 draws on average.
	let mut sampler = SecureSampler::new();
	let samples = 20_000;
	for _ in 0..samples {
		sampler.sample(129).unwrap();
	}
	let average = sampler.draws() as f64 / samples as f64;
	assert!(average >= 1.0 && average < 2.1, "average draws per sample {}", average);
}

#[test]
fn test_bound_of_one() {
	let mut fast = FastSampler::new();
	let mut secure = SecureSampler::new();
	for _ in 0..1000 {
		assert_eq!(fast.sample(1).unwrap(), 0);
		assert_eq!(secure.sample(1).unwrap(), 0);
	}
}
