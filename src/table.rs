use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::fit::Sample;
use crate::Result;

/// How malformed table lines are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Reject the table on the first field that does not parse as a number.
    #[default]
    Strict,
    /// Substitute `0.0` for missing or unparsable fields, matching the
    /// `sscanf`-based legacy reader. Only useful for reproducing legacy
    /// output byte for byte.
    Legacy,
}

#[derive(Deserialize)]
struct Row(f64, f64);

/// Read a measured T-R table from a file
///
/// Each line carries a temperature (degree Celsius) and a resistance (Ohm)
/// separated by a tab. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when the file cannot be opened and, in strict
/// mode, [`crate::Error::Table`] for any malformed line.
pub fn read_table(path: &Path, mode: ParseMode) -> Result<Vec<Sample<f64>>> {
    let file = File::open(path)?;
    read_from(file, mode)
}

/// Read a measured T-R table from any reader; see [`read_table`].
///
/// # Errors
///
/// In strict mode, returns [`crate::Error::Table`] for any malformed line.
pub fn read_from<R: Read>(reader: R, mode: ParseMode) -> Result<Vec<Sample<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut samples = vec![];
    match mode {
        ParseMode::Strict => {
            for result in rdr.deserialize() {
                let Row(temperature, resistance) = result?;
                samples.push(Sample {
                    temperature,
                    resistance,
                });
            }
        }
        ParseMode::Legacy => {
            for record in rdr.records() {
                let record = record?;
                let field = |idx: usize| -> f64 {
                    record
                        .get(idx)
                        .and_then(|raw| raw.trim().parse().ok())
                        .unwrap_or(0.0)
                };
                samples.push(Sample {
                    temperature: field(0),
                    resistance: field(1),
                });
            }
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use tempdir::TempDir;

    use crate::fit::Sample;
    use crate::Error;

    use super::{read_from, read_table, ParseMode};

    const TABLE: &str = "0.0\t33000.0\n25.0\t10000.0\n50.0\t3500.0\n85.0\t1200.0\n";

    #[test]
    fn well_formed_table_parses_in_both_modes() {
        for mode in [ParseMode::Strict, ParseMode::Legacy] {
            let samples = read_from(TABLE.as_bytes(), mode).unwrap();
            assert_eq!(samples.len(), 4);
            assert_eq!(
                samples[1],
                Sample {
                    temperature: 25.0,
                    resistance: 10_000.0,
                }
            );
        }
    }

    #[test]
    fn malformed_line_is_rejected_in_strict_mode() {
        let table = "25.0\t10000.0\nnot-a-number\t3500.0\n";
        let result = read_from(table.as_bytes(), ParseMode::Strict);
        assert!(matches!(result, Err(Error::Table(_))));
    }

    #[test]
    fn malformed_fields_become_zero_in_legacy_mode() {
        let table = "25.0\t10000.0\nnot-a-number\t3500.0\n85.0\n";
        let samples = read_from(table.as_bytes(), ParseMode::Legacy).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(
            samples[1],
            Sample {
                temperature: 0.0,
                resistance: 3_500.0,
            }
        );
        assert_eq!(
            samples[2],
            Sample {
                temperature: 85.0,
                resistance: 0.0,
            }
        );
    }

    #[test]
    fn tables_round_trip_through_the_filesystem() {
        let tmp_dir = TempDir::new("tables_round_trip_through_the_filesystem").unwrap();
        let path = tmp_dir.path().join("ntc.txt");
        std::fs::write(&path, TABLE).unwrap();

        let samples = read_table(&path, ParseMode::Strict).unwrap();
        assert_eq!(samples.len(), 4);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_table(Path::new("/nonexistent/ntc.txt"), ParseMode::Strict);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
