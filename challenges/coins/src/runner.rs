use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};

use crate::error::{Error, Result};
use crate::problem::{read_problem_file, Problem};
use crate::report::{header_line, verdict_line, Reporter};
use crate::solver::{Outcome, SearchResult, DEFAULT_TIME_BUDGET};

/// Where to read problems from, where to write the three result streams, and
/// how long each search may run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub status_output: PathBuf,
    pub timing_output: PathBuf,
    pub report_output: PathBuf,
    pub time_budget: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("4test.txt"),
            status_output: PathBuf::from("4SATresults.txt"),
            timing_output: PathBuf::from("4Timeresults.txt"),
            report_output: PathBuf::from("4results.txt"),
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub satisfiable: usize,
    pub exhausted: usize,
    pub timed_out: usize,
}

impl RunSummary {
    fn tally(&mut self, result: &SearchResult) {
        match result.outcome {
            Outcome::Satisfiable => self.satisfiable += 1,
            Outcome::Exhausted => self.exhausted += 1,
            Outcome::BudgetExceeded => self.timed_out += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.satisfiable + self.exhausted + self.timed_out
    }
}

/// Solve each problem in order. Stops at the first problem whose
/// denominations are invalid.
pub fn solve_all(problems: &[Problem], time_budget: Duration) -> Result<Vec<SearchResult>> {
    problems.iter().map(|p| p.solve(time_budget)).collect()
}

/// Solve `problems` one at a time, logging progress and handing every result
/// to `reporter`.
pub fn solve_and_report<S, T, R>(
    problems: &[Problem],
    time_budget: Duration,
    reporter: &mut Reporter<S, T, R>,
) -> Result<RunSummary>
where
    S: std::io::Write,
    T: std::io::Write,
    R: std::io::Write,
{
    let mut summary = RunSummary::default();
    for problem in problems {
        info!("{}", header_line(problem));
        let result = problem.solve(time_budget)?;
        match result.outcome {
            Outcome::BudgetExceeded => warn!("{}", verdict_line(problem, &result)),
            _ => info!("{}", verdict_line(problem, &result)),
        }
        info!("Execution time: {} microseconds", result.elapsed_micros);
        reporter.record(problem, &result)?;
        summary.tally(&result);
    }
    reporter.flush()?;
    Ok(summary)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Read the problem file named by `config`, solve every problem and write the
/// three result files.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let problems = read_problem_file(&config.input)?;
    info!(
        "read {} problems from {}",
        problems.len(),
        config.input.display()
    );

    let mut reporter = Reporter::new(
        create(&config.status_output)?,
        create(&config.timing_output)?,
        create(&config.report_output)?,
    );
    let summary = solve_and_report(&problems, config.time_budget, &mut reporter)?;

    info!(
        "solved {} problems: {} satisfiable, {} unsatisfiable, {} over budget",
        summary.total(),
        summary.satisfiable,
        summary.exhausted,
        summary.timed_out
    );
    Ok(summary)
}
