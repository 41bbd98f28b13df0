//! Benchmark configuration and command-line parsing.

use crate::error::{BenchError, Result};
use crate::math::dot_product::{available_variants, KernelVariant};
use crate::utils::ramp::ramp_fits;

/// Default vector length
pub const DEFAULT_VECTOR_LENGTH: usize = 1024;
/// Default number of trials per timed batch
pub const DEFAULT_TRIALS: usize = 1_000_000;

/// Parameters of one benchmark run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of elements in each input vector
    pub vector_length: usize,
    /// Kernel invocations per timed batch
    pub trials: usize,
    /// First element of the `a` ramp
    pub a_start: i16,
    /// First element of the `b` ramp
    pub b_start: i16,
    /// Untimed invocations before each batch
    pub warmup_trials: usize,
    /// Pin the benchmarking thread to its current core
    pub pin_cpu: bool,
    /// Restrict the run to these kernel names (`None` runs all)
    pub kernels: Option<Vec<String>>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            vector_length: DEFAULT_VECTOR_LENGTH,
            trials: DEFAULT_TRIALS,
            a_start: 0,
            b_start: 100,
            warmup_trials: 0,
            pin_cpu: true,
            kernels: None,
        }
    }
}

impl BenchConfig {
    pub fn new(vector_length: usize, trials: usize) -> Self {
        Self {
            vector_length,
            trials,
            ..Self::default()
        }
    }

    /// Check that the run is well-formed: positive sizes and ramps that stay in i16.
    pub fn validate(&self) -> Result<()> {
        if self.vector_length == 0 {
            return Err(BenchError::ZeroLength);
        }
        if self.trials == 0 {
            return Err(BenchError::ZeroTrials);
        }
        for start in [self.a_start, self.b_start] {
            if !ramp_fits(start, self.vector_length) {
                return Err(BenchError::RampOverflow {
                    start,
                    length: self.vector_length,
                });
            }
        }
        Ok(())
    }

    /// Kernels to run, in evaluation order.
    ///
    /// The filter only selects; it never reorders.
    pub fn selected_variants(&self) -> Result<Vec<KernelVariant>> {
        let variants = available_variants();
        let Some(names) = &self.kernels else {
            return Ok(variants);
        };

        if let Some(unknown) = names
            .iter()
            .find(|name| !variants.iter().any(|v| v.name == name.as_str()))
        {
            return Err(BenchError::UnknownKernel(unknown.clone()));
        }

        Ok(variants
            .into_iter()
            .filter(|v| names.iter().any(|name| name == v.name))
            .collect())
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Run {
        config: BenchConfig,
        /// Render the terminal table instead of the plain report
        table: bool,
    },
}

impl Command {
    /// Parse command-line arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut config = BenchConfig::default();
        let mut table = false;
        let mut show_list = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--list" | "-l" => show_list = true,
                "--table" | "-t" => table = true,
                "--no-pin" => config.pin_cpu = false,
                "--length" | "-n" => {
                    config.vector_length = parse_value("--length", args.next())?;
                }
                "--trials" | "-r" => {
                    config.trials = parse_value("--trials", args.next())?;
                }
                "--warmup" => {
                    config.warmup_trials = parse_value("--warmup", args.next())?;
                }
                "--kernels" | "-k" => {
                    let value = args.next().ok_or(BenchError::MissingValue("--kernels"))?;
                    let names: Vec<String> = value
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                    if names.is_empty() {
                        return Err(BenchError::InvalidArgument {
                            flag: "--kernels",
                            value,
                        });
                    }
                    config.kernels = Some(names);
                }
                _ => return Err(BenchError::UnknownOption(arg)),
            }
        }

        if show_list {
            return Ok(Command::List);
        }

        Ok(Command::Run { config, table })
    }
}

fn parse_value(flag: &'static str, value: Option<String>) -> Result<usize> {
    let value = value.ok_or(BenchError::MissingValue(flag))?;
    let parsed = value.trim().replace('_', "").parse::<usize>();
    parsed.map_err(|_| BenchError::InvalidArgument { flag, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_matches_reference_run() {
        let config = BenchConfig::default();
        assert_eq!(config.vector_length, 1024);
        assert_eq!(config.trials, 1_000_000);
        assert_eq!((config.a_start, config.b_start), (0, 100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        assert_eq!(BenchConfig::new(0, 10).validate(), Err(BenchError::ZeroLength));
        assert_eq!(BenchConfig::new(10, 0).validate(), Err(BenchError::ZeroTrials));
    }

    #[test]
    fn test_validate_rejects_ramp_overflow() {
        // b ramp starts at 100: the largest valid length is 32768 - 100
        assert!(BenchConfig::new(32_668, 1).validate().is_ok());
        assert_eq!(
            BenchConfig::new(32_669, 1).validate(),
            Err(BenchError::RampOverflow {
                start: 100,
                length: 32_669
            })
        );
    }

    #[test]
    fn test_selected_variants_keeps_evaluation_order() {
        let config = BenchConfig {
            kernels: Some(vec!["simd-x4".into(), "scalar".into()]),
            ..BenchConfig::default()
        };
        let names: Vec<_> = config
            .selected_variants()
            .unwrap()
            .iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["scalar", "simd-x4"]);
    }

    #[test]
    fn test_selected_variants_unknown_kernel() {
        let config = BenchConfig {
            kernels: Some(vec!["simd-x8".into()]),
            ..BenchConfig::default()
        };
        assert_eq!(
            config.selected_variants().unwrap_err(),
            BenchError::UnknownKernel("simd-x8".into())
        );
    }

    #[test]
    fn test_parse_run_flags() {
        let command = Command::parse(args(&[
            "--length", "1027", "--trials", "10_000", "--warmup", "5", "--no-pin", "-t",
        ]))
        .unwrap();

        let Command::Run { config, table } = command else {
            panic!("expected a run command");
        };
        assert!(table);
        assert_eq!(config.vector_length, 1027);
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.warmup_trials, 5);
        assert!(!config.pin_cpu);
    }

    #[test]
    fn test_parse_kernel_filter() {
        let command = Command::parse(args(&["-k", "scalar, simd-x2"])).unwrap();
        let Command::Run { config, .. } = command else {
            panic!("expected a run command");
        };
        assert_eq!(
            config.kernels,
            Some(vec!["scalar".to_string(), "simd-x2".to_string()])
        );
    }

    #[test]
    fn test_parse_help_and_list() {
        assert_eq!(Command::parse(args(&["--list"])).unwrap(), Command::List);
        assert_eq!(
            Command::parse(args(&["--length", "8", "-h"])).unwrap(),
            Command::Help
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse(args(&["--length"])).unwrap_err(),
            BenchError::MissingValue("--length")
        );
        assert_eq!(
            Command::parse(args(&["--trials", "many"])).unwrap_err(),
            BenchError::InvalidArgument {
                flag: "--trials",
                value: "many".into()
            }
        );
        assert_eq!(
            Command::parse(args(&["--bogus"])).unwrap_err(),
            BenchError::UnknownOption("--bogus".into())
        );
    }
}
