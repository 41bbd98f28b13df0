//! Benchmark report: one record per kernel, in evaluation order.

use std::fmt;

/// Outcome of one kernel's timed batch.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    /// Kernel name (e.g. "simd-x2")
    pub label: &'static str,
    /// Kernel description, used as the section banner
    pub description: &'static str,
    /// Value returned by the final trial
    pub last_result: i32,
    /// Wall-clock time of the whole batch, in milliseconds
    pub elapsed_ms: f64,
}

impl BenchmarkResult {
    /// Average time of one trial in nanoseconds.
    pub fn per_trial_ns(&self, trials: usize) -> f64 {
        if trials == 0 {
            return 0.0;
        }
        self.elapsed_ms * 1_000_000.0 / trials as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub vector_length: usize,
    pub trials: usize,
    pub results: Vec<BenchmarkResult>,
}

impl Report {
    pub fn new(vector_length: usize, trials: usize, results: Vec<BenchmarkResult>) -> Self {
        Self {
            vector_length,
            trials,
            results,
        }
    }

    /// The first kernel run; the scalar kernel unless it was filtered out.
    pub fn baseline(&self) -> Option<&BenchmarkResult> {
        self.results.first()
    }

    pub fn find(&self, label: &str) -> Option<&BenchmarkResult> {
        self.results.iter().find(|r| r.label == label)
    }

    /// Results whose value differs from the baseline.
    pub fn mismatches(&self) -> Vec<&BenchmarkResult> {
        let Some(baseline) = self.baseline() else {
            return Vec::new();
        };
        self.results
            .iter()
            .filter(|r| r.last_result != baseline.last_result)
            .collect()
    }

    /// Plain-text report, one block per kernel.
    pub fn render_text(&self) -> String {
        let blocks: Vec<String> = self
            .results
            .iter()
            .map(|r| {
                format!(
                    "----==== {} ====----\nResult: {}\nElapsed time: {:.6} ms",
                    r.description, r.last_result, r.elapsed_ms
                )
            })
            .collect();
        blocks.join("\n\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}
