use ndarray_rand::rand::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;
use tempdir::TempDir;

use steinhart::convert::{resistance_to_temperature, Coefficients};
use steinhart::fit::{fit_coefficients, Sample};
use steinhart::table::{read_table, ParseMode};
use steinhart::Result;

/// Coefficient set of the reference thermistor.
const REFERENCE: [f64; 4] = [
    4.524024725919526e-4,
    3.934722516618191e-4,
    -7.642331765196044e-6,
    4.048572707661904e-7,
];

fn generate_table<R: Rng>(
    coefficients: &Coefficients<f64>,
    num_samples: usize,
    rng: &mut R,
) -> Vec<Sample<f64>> {
    (0..num_samples)
        .map(|_| {
            let resistance = rng.gen_range(500.0..50_000.0);
            Sample {
                temperature: resistance_to_temperature(resistance, coefficients).unwrap(),
                resistance,
            }
        })
        .collect()
}

fn write_table(samples: &[Sample<f64>], dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("ntc.txt");
    let contents = samples
        .iter()
        .map(|sample| format!("{}\t{}\n", sample.temperature, sample.resistance))
        .collect::<String>();
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn fit_from_generated_table_matches_input_coefficients() -> Result<()> {
    let seed = 40;
    let mut rng = Isaac64Rng::seed_from_u64(seed);

    let coefficients = Coefficients::new(REFERENCE).unwrap();
    let num_samples = rng.gen_range(10..100);
    let samples = generate_table(&coefficients, num_samples, &mut rng);

    let fit = fit_coefficients(&samples)?;

    for (expected, calculated) in REFERENCE.iter().zip(fit.coefficients().values()) {
        approx::assert_relative_eq!(expected, calculated, max_relative = 1e-4,);
    }

    Ok(())
}

#[test]
fn fit_from_table_file_reconstructs_every_temperature() -> Result<()> {
    let seed = 40;
    let mut rng = Isaac64Rng::seed_from_u64(seed);

    let coefficients = Coefficients::new(REFERENCE).unwrap();
    let samples = generate_table(&coefficients, 40, &mut rng);

    let tmp_dir = TempDir::new("fit_from_table_file_reconstructs_every_temperature").unwrap();
    let path = write_table(&samples, &tmp_dir);

    let read_back = read_table(&path, ParseMode::Strict)?;
    assert_eq!(read_back.len(), samples.len());

    let fit = fit_coefficients(&read_back)?;
    let quality = fit.quality(&read_back)?;
    assert!(
        quality.max_abs_error < 1e-6,
        "worst deviation {} at {}",
        quality.max_abs_error,
        quality.at_temperature
    );

    Ok(())
}

#[test]
fn fit_beats_any_perturbed_coefficient_set_on_noisy_data() -> Result<()> {
    let seed = 40;
    let mut rng = Isaac64Rng::seed_from_u64(seed);

    let coefficients = Coefficients::new(REFERENCE).unwrap();
    let samples = generate_table(&coefficients, 30, &mut rng)
        .into_iter()
        .map(|sample| Sample {
            temperature: sample.temperature + rng.gen_range(-0.05..0.05),
            resistance: sample.resistance,
        })
        .collect::<Vec<_>>();

    let fit = fit_coefficients(&samples)?;

    let residual = |coefficients: &Coefficients<f64>| -> f64 {
        samples
            .iter()
            .map(|sample| {
                let y = 1.0 / (sample.temperature - steinhart::ABSOLUTE_ZERO);
                let p = coefficients.evaluate(sample.resistance.ln());
                (p - y).powi(2)
            })
            .sum()
    };

    // The projection is the least-squares minimizer, so any perturbation of
    // the fitted coefficients can only increase the residual.
    let fitted_residual = residual(fit.coefficients());
    for _ in 0..50 {
        let mut perturbed = *fit.coefficients().values();
        for value in &mut perturbed {
            *value *= 1.0 + rng.gen_range(-1e-3..1e-3);
        }
        let perturbed = Coefficients::new(perturbed).unwrap();
        assert!(fitted_residual <= residual(&perturbed));
    }

    Ok(())
}
