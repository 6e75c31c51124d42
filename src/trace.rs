//! Headless mode: run a search to completion and print every step.
//!
//! Output is one JSON object per line (a [`StepResult`]), followed by the
//! plain-text result sentence.

use crate::model::{AppError, SearchSession, StepResult};
use std::io::{self, Write};
use tracing::info;

/// Step `session` until it is terminal, writing each record to `writer`.
///
/// Returns the records that were written.
pub fn run_trace<W: Write>(
    mut session: SearchSession,
    writer: &mut W,
) -> Result<Vec<StepResult>, AppError> {
    let mut results = Vec::new();

    while !session.is_terminal() {
        let result = session.step();
        serde_json::to_writer(&mut *writer, &result).map_err(io::Error::from)?;
        writeln!(writer)?;
        results.push(result);
    }

    if let Some(summary) = results
        .last()
        .and_then(|result| result.summary(session.target()))
    {
        info!(iterations = session.iterations(), "{summary}");
        writeln!(writer, "{summary}")?;
    }
    writer.flush()?;

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchStatus;
    use insta::assert_snapshot;

    fn trace(values: Vec<f64>, target: f64) -> (Vec<StepResult>, String) {
        let session = SearchSession::new(values, target).unwrap();
        let mut out = Vec::new();
        let results = run_trace(session, &mut out).unwrap();
        (results, String::from_utf8(out).unwrap())
    }

    #[test]
    fn found_trace_ends_with_summary() {
        let (results, output) = trace(vec![1.0, 2.0, 3.0, 4.0, 5.0], 5.0);

        assert_eq!(results.len(), 3);
        assert_eq!(results[2].status, SearchStatus::Found);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_snapshot!(lines[3], @"5 was found after 3 iterations!");
    }

    #[test]
    fn not_found_trace_records_each_step() {
        let (_, output) = trace(vec![10.0], 7.0);

        let lines: Vec<&str> = output.lines().collect();
        assert_snapshot!(lines[0], @r#"{"status":"not_found","iterations":1,"changed":true,"lo":0,"hi":null,"mid":null,"examined":{"start":0,"end":0},"moved":"high","found_index":null}"#);
        assert_snapshot!(lines[1], @"7 was NOT found! Total iterations: 1.");
    }

    #[test]
    fn every_record_line_is_valid_json() {
        let (results, output) = trace(vec![1.0, 3.0, 5.0, 7.0, 9.0, 11.0], 4.0);

        for (line, result) in output.lines().zip(&results) {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["iterations"], result.iterations);
        }
    }

    #[test]
    fn empty_array_traces_a_single_step() {
        let (results, output) = trace(Vec::new(), 1.0);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, SearchStatus::NotFound);
        assert!(output.ends_with("1 was NOT found! Total iterations: 1.\n"));
    }
}
