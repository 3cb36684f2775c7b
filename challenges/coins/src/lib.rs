pub mod error;
pub mod problem;
pub mod report;
pub mod runner;
pub mod solver;

pub use error::{Error, Result};
pub use problem::{Problem, Scanner};
pub use runner::{run, RunConfig, RunSummary};
pub use solver::{solve, Outcome, SearchResult, DEFAULT_TIME_BUDGET};

/// Fixture utilities: `data/<category>/<n>.in` holds a problem file and
/// `<n>.out` the expected satisfiability stream.
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use crate::problem::read_problems;
    use crate::report::Reporter;
    use crate::runner::solve_and_report;

    /// Budget applied to every fixture problem.
    pub const FIXTURE_BUDGET: Duration = Duration::from_secs(10);

    /// Discover all fixture numbers for a given category
    pub fn discover_tests(category: &str) -> Vec<usize> {
        let test_dir = PathBuf::from("data").join(category);

        let mut test_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&test_dir) {
            for entry in entries.flatten() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if let Some(num_str) = file_name.strip_suffix(".in") {
                        if let Ok(num) = num_str.parse::<usize>() {
                            test_numbers.push(num);
                        }
                    }
                }
            }
        }

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single fixture and return (expected, actual, duration) output
    pub fn run_test_case(
        category: &str,
        test_num: usize,
    ) -> std::result::Result<(String, String, Duration), String> {
        let test_dir = PathBuf::from("data").join(category);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let problems = read_problems(&mut scanner).map_err(|e| e.to_string())?;
        let mut reporter = Reporter::new(Vec::<u8>::new(), Vec::<u8>::new(), Vec::<u8>::new());

        let start = Instant::now();
        solve_and_report(&problems, FIXTURE_BUDGET, &mut reporter).map_err(|e| e.to_string())?;
        let duration = start.elapsed();

        let (status, _, _) = reporter.into_inner();
        let actual = String::from_utf8(status)
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((
            expected.trim().to_string(),
            actual.trim().to_string(),
            duration,
        ))
    }

    /// Verify all fixtures in a category
    pub fn verify_all_tests(category: &str) {
        let test_cases = discover_tests(category);
        assert!(
            !test_cases.is_empty(),
            "No test cases found for {}",
            category
        );

        for test_num in test_cases {
            match run_test_case(category, test_num) {
                Ok((expected, actual, duration)) => {
                    assert_eq!(
                        actual,
                        expected,
                        "Test case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                        test_num,
                        duration.as_secs_f64(),
                        expected,
                        actual
                    );
                }
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }
    }

    /// Run all fixtures and print results (for CLI usage). Returns the number
    /// of failed fixtures.
    pub fn run_all_tests(category: &str) -> usize {
        let test_cases = discover_tests(category);
        if test_cases.is_empty() {
            println!("No test cases found for {}", category);
            return 0;
        }

        println!("Running {} test cases for {}...", test_cases.len(), category);

        let mut passed = 0;
        let mut failed = 0;
        let mut total_duration = Duration::ZERO;

        for test_num in &test_cases {
            match run_test_case(category, *test_num) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    if actual == expected {
                        println!("✓ Test case {}: PASSED ({:.2}s)", test_num, secs);
                        passed += 1;
                    } else {
                        println!("✗ Test case {}: FAILED ({:.2}s)", test_num, secs);
                        println!("  Expected: {}", expected.replace('\n', " "));
                        println!("  Actual:   {}", actual.replace('\n', " "));
                        failed += 1;
                    }
                }
                Err(e) => {
                    println!("✗ Test case {}: ERROR - {}", test_num, e);
                    failed += 1;
                }
            }
        }

        println!("\nResults: {} passed, {} failed", passed, failed);
        println!("Total time: {:.2}s", total_duration.as_secs_f64());
        failed
    }
}
