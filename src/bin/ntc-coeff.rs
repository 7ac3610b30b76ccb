//! Calculates the coefficients of an extended Steinhart-Hart polynomial from
//! a measured T-R table. Takes the table filename and an optional `-v` flag
//! for a verbose trace of the fitting stages.

use std::env;
use std::path::Path;
use std::process;

use steinhart::fit::{orthonormal_basis, Fit, FittingData};
use steinhart::table::{read_table, ParseMode};
use steinhart::Result;

fn usage(me: &str) -> ! {
    eprintln!("usage : {me} [ options ] file [ options ]");
    eprintln!("Calculates the coefficients of an extended Steinhart-Hart polynomial");
    eprintln!("from a tab-separated temperature/resistance table.\n");
    eprintln!("valid options are :");
    eprintln!("  -v\tenables verbose output");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let me = args[0].as_str();

    let (filename, verbose) = match args.len() {
        2 => (args[1].as_str(), false),
        3 if args[1] == "-v" => (args[2].as_str(), true),
        3 if args[2] == "-v" => (args[1].as_str(), true),
        _ => usage(me),
    };

    if let Err(error) = run(Path::new(filename), verbose) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(path: &Path, verbose: bool) -> Result<()> {
    let samples = read_table(path, ParseMode::Strict)?;
    if verbose {
        println!("table");
        println!("=====");
        for sample in &samples {
            println!("t={:8.2}\tr={:8.2}", sample.temperature, sample.resistance);
        }
        println!();
    }

    let data = FittingData::new(&samples)?;
    if verbose {
        println!("fitting space");
        println!("=============");
        for (x, y) in data.abscissas().iter().zip(data.targets()) {
            println!("x={x:8.2}\ty={y:9.4}");
        }
        println!();
    }

    let basis = orthonormal_basis(&data)?;
    if verbose {
        println!("orthonormal base");
        println!("================");
        for (ii, q) in basis.iter().enumerate() {
            print!("polynomial {ii}:");
            for c in q.coefficients() {
                print!(" {c:.6}");
            }
            println!();
        }
        println!("gram matrix (lower triangle)");
        for (ii, qi) in basis.iter().enumerate() {
            for qj in basis.iter().take(ii + 1) {
                print!("{:.15} ", data.inner(qi, qj));
            }
            println!();
        }
        println!();
    }

    let fit = Fit::from_projection(&data, &basis)?;
    println!("Steinhart-Hart coefficients");
    for (ii, a) in fit.coefficients().values().iter().enumerate() {
        println!("a[{ii}] = {a:.15e}");
    }

    if verbose {
        println!();
        println!("test");
        println!("====");
        let coefficients = fit.coefficients();
        for sample in &samples {
            let estimate =
                steinhart::resistance_to_temperature_raw(sample.resistance, coefficients);
            println!(
                "{estimate:8.3}\t{:8.1}\t{:8.3}",
                sample.resistance, sample.temperature
            );
        }
        let quality = fit.quality(&samples)?;
        println!();
        println!(
            "Maximal error={:7.5} at temperature={:5.1}",
            quality.max_abs_error, quality.at_temperature
        );
    }
    Ok(())
}
