use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::solver::{self, SearchResult};

/// One line of a problem file: `<label> <target> <denomination>...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Free-form tag such as `small`, `medium` or `large`.
    pub label: String,
    pub target: u64,
    /// Order matters: it fixes enumeration order and witness indexing.
    pub denominations: Vec<u64>,
}

impl Problem {
    pub fn new(label: impl Into<String>, target: u64, denominations: Vec<u64>) -> Self {
        Self {
            label: label.into(),
            target,
            denominations,
        }
    }

    /// Parse a single problem line. `line_no` is 1-based and only used for errors.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Problem> {
        let mut tokens = line.split_whitespace();
        let malformed = |reason: String| Error::MalformedProblem {
            line: line_no,
            reason,
        };

        let label = tokens
            .next()
            .ok_or_else(|| malformed("missing label".to_string()))?;
        let target = tokens
            .next()
            .ok_or_else(|| malformed("missing target".to_string()))?
            .parse::<u64>()
            .map_err(|e| malformed(format!("target: {}", e)))?;
        let denominations = tokens
            .map(|t| {
                t.parse::<u64>()
                    .map_err(|e| malformed(format!("denomination {:?}: {}", t, e)))
            })
            .collect::<Result<Vec<u64>>>()?;

        Ok(Problem::new(label, target, denominations))
    }

    pub fn solve(&self, time_budget: Duration) -> Result<SearchResult> {
        solver::solve(&self.denominations, self.target, time_budget)
    }
}

/// Line reader over any buffered source, tracking the line number.
pub struct Scanner {
    reader: Box<dyn BufRead>,
    line_no: usize,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            line_no: 0,
        }
    }

    /// The next line with surrounding whitespace trimmed, or `None` at end of input.
    pub fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(input.trim().to_string()))
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Read every problem from `scanner`, skipping blank lines.
pub fn read_problems(scanner: &mut Scanner) -> Result<Vec<Problem>> {
    let mut problems = Vec::new();
    while let Some(line) = scanner.next_line()? {
        if line.is_empty() {
            continue;
        }
        problems.push(Problem::parse_line(&line, scanner.line_no())?);
    }
    Ok(problems)
}

pub fn read_problem_file(path: &Path) -> Result<Vec<Problem>> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut scanner = Scanner::new(BufReader::new(file));
    read_problems(&mut scanner).map_err(|err| match err {
        Error::Stream(source) => Error::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan(input: &str) -> Scanner {
        Scanner::new(Cursor::new(input.to_string()))
    }

    #[test]
    fn test_parse_line() {
        let problem = Problem::parse_line("small 16 1 5 10", 1).unwrap();
        assert_eq!(problem, Problem::new("small", 16, vec![1, 5, 10]));
    }

    #[test]
    fn test_parse_line_extra_whitespace() {
        let problem = Problem::parse_line("  large\t 100   25  50 ", 3).unwrap();
        assert_eq!(problem, Problem::new("large", 100, vec![25, 50]));
    }

    #[test]
    fn test_parse_line_without_denominations() {
        // Accepted here; the solver rejects the empty list.
        let problem = Problem::parse_line("small 5", 1).unwrap();
        assert!(problem.denominations.is_empty());
        assert!(matches!(
            problem.solve(Duration::from_secs(1)),
            Err(Error::InvalidDenominations(_))
        ));
    }

    #[test]
    fn test_malformed() {
        for (line, input) in [(2, "small"), (4, "small x 1 2"), (7, "small 10 1 -5")] {
            match Problem::parse_line(input, line) {
                Err(Error::MalformedProblem { line: l, .. }) => assert_eq!(l, line),
                other => panic!("expected malformed problem for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_read_problems_skips_blank_lines() {
        let mut scanner = scan("small 16 1 5 10\n\nmedium 3 5 10\n");
        let problems = read_problems(&mut scanner).unwrap();
        assert_eq!(
            problems,
            vec![
                Problem::new("small", 16, vec![1, 5, 10]),
                Problem::new("medium", 3, vec![5, 10]),
            ]
        );
    }

    #[test]
    fn test_read_problems_reports_line_number() {
        let mut scanner = scan("small 16 1 5 10\n\nmedium three 5\n");
        match read_problems(&mut scanner) {
            Err(Error::MalformedProblem { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_problem_file(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
