//! Converts temperatures (degree Celsius) to resistances (Ohm) using a
//! built-in reference coefficient set. Each argument is converted
//! independently; with no arguments a single value is prompted for on stdin.

use std::env;
use std::io::{self, Write};

use steinhart::convert::{temperature_to_resistance, Coefficients};

/// Steinhart-Hart coefficients of the reference thermistor.
const REFERENCE: [f64; 4] = [
    4.524024725919526e-4,
    3.934722516618191e-4,
    -7.642331765196044e-6,
    4.048572707661904e-7,
];

fn main() {
    let coefficients =
        Coefficients::new(REFERENCE).expect("reference coefficient set has a non-zero a3");

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print!("Temperature.. : ");
        io::stdout().flush().expect("failed to flush stdout");

        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .expect("failed to read stdin");
        convert(line.trim(), &coefficients);
    } else {
        // One bad value must not block the rest.
        for arg in &args {
            convert(arg, &coefficients);
        }
    }
}

fn convert(raw: &str, coefficients: &Coefficients<f64>) {
    let Ok(temperature) = raw.parse::<f64>() else {
        eprintln!("cannot parse '{raw}' as a temperature");
        return;
    };
    match temperature_to_resistance(temperature, coefficients) {
        Ok(resistance) => {
            println!("Temperature : {temperature:.6}\tResistance... : {resistance:.6}");
        }
        Err(error) => eprintln!("{temperature}: {error}"),
    }
}
