use std::io::Write;

use crate::error::Result;
use crate::problem::Problem;
use crate::solver::{Outcome, SearchResult};

/// Literal written to the satisfiability stream for one result.
///
/// A search that ran out of time is written as `Unsatisfiable` here even
/// though it proves nothing; the combined report keeps the two apart.
pub fn status_label(result: &SearchResult) -> &'static str {
    match result.outcome {
        Outcome::Satisfiable => "Satisfiable",
        Outcome::Exhausted | Outcome::BudgetExceeded => "Unsatisfiable",
    }
}

/// `[1, 5, 10]`
fn format_list(values: &[u64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

pub fn header_line(problem: &Problem) -> String {
    format!(
        "Solving {} problem: Target: {}, Coins: {}",
        problem.label,
        problem.target,
        format_list(&problem.denominations)
    )
}

pub fn verdict_line(problem: &Problem, result: &SearchResult) -> String {
    match result.outcome {
        Outcome::Satisfiable => format!(
            "Satisfiable: {} solves the target of {}",
            format_list(&result.witness),
            problem.target
        ),
        Outcome::Exhausted => format!(
            "Unsatisfiable: No combination of coins can solve the target of {}",
            problem.target
        ),
        Outcome::BudgetExceeded => format!(
            "Unsatisfiable: Search budget exceeded after {} microseconds before a combination for the target of {} was found",
            result.elapsed_micros, problem.target
        ),
    }
}

/// Writes the three result streams: satisfiability labels, timings in
/// microseconds, and the human readable report.
pub struct Reporter<S: Write, T: Write, R: Write> {
    status: S,
    timing: T,
    report: R,
}

impl<S: Write, T: Write, R: Write> Reporter<S, T, R> {
    pub fn new(status: S, timing: T, report: R) -> Self {
        Self {
            status,
            timing,
            report,
        }
    }

    pub fn record(&mut self, problem: &Problem, result: &SearchResult) -> Result<()> {
        writeln!(self.status, "{}", status_label(result))?;
        writeln!(self.timing, "{}", result.elapsed_micros)?;
        writeln!(self.report, "{}", header_line(problem))?;
        writeln!(self.report, "{}", verdict_line(problem, result))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.status.flush()?;
        self.timing.flush()?;
        self.report.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (S, T, R) {
        (self.status, self.timing, self.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: Outcome, witness: Vec<u64>, elapsed_micros: u64) -> SearchResult {
        SearchResult {
            outcome,
            witness,
            elapsed_micros,
        }
    }

    #[test]
    fn test_record_streams() {
        let mut reporter = Reporter::new(Vec::new(), Vec::new(), Vec::new());
        let small = Problem::new("small", 16, vec![1, 5, 10]);
        let medium = Problem::new("medium", 3, vec![5, 10]);

        reporter
            .record(&small, &result(Outcome::Satisfiable, vec![16, 0, 0], 12))
            .unwrap();
        reporter
            .record(&medium, &result(Outcome::Exhausted, vec![0, 0], 3))
            .unwrap();

        let (status, timing, report) = reporter.into_inner();
        assert_eq!(String::from_utf8(status).unwrap(), "Satisfiable\nUnsatisfiable\n");
        assert_eq!(String::from_utf8(timing).unwrap(), "12\n3\n");
        assert_eq!(
            String::from_utf8(report).unwrap(),
            "Solving small problem: Target: 16, Coins: [1, 5, 10]\n\
             Satisfiable: [16, 0, 0] solves the target of 16\n\
             Solving medium problem: Target: 3, Coins: [5, 10]\n\
             Unsatisfiable: No combination of coins can solve the target of 3\n"
        );
    }

    #[test]
    fn test_budget_exceeded_is_distinguished() {
        let problem = Problem::new("large", 1_000_001, vec![2, 4]);
        let timed_out = result(Outcome::BudgetExceeded, vec![7, 3], 500);

        assert_eq!(status_label(&timed_out), "Unsatisfiable");
        assert_eq!(
            verdict_line(&problem, &timed_out),
            "Unsatisfiable: Search budget exceeded after 500 microseconds before a combination for the target of 1000001 was found"
        );
    }
}
