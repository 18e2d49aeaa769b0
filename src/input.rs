//! Prompted input of names, roll numbers and component scores.
//!
//! Invalid scores are reported and asked for again; only a closed input
//! stream ends a prompt with an error.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::ScoreError;
use crate::marks::{Component, SubjectMarks, TIME_ORDER};

/// Parses one raw entry for `component`, enforcing `[0, max]`.
pub fn parse_score(raw: &str, component: Component) -> Result<f64, ScoreError> {
    let raw = raw.trim();
    let value: f64 = raw.parse().map_err(|_| ScoreError::NotNumeric {
        raw: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ScoreError::NotNumeric {
            raw: raw.to_string(),
        });
    }
    component.check(value)
}

/// Writes `prompt` and reads one trimmed line.
pub fn prompt_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        bail!("input closed while waiting for: {}", prompt.trim_end());
    }
    Ok(line.trim().to_string())
}

/// Prompts for one component until a valid score is entered.
pub fn read_score<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, component: Component) -> Result<f64> {
    loop {
        let raw = prompt_line(reader, writer, &format!("{component} (out of {}): ", component.max()))?;
        match parse_score(&raw, component) {
            Ok(value) => return Ok(value),
            Err(ScoreError::NotNumeric { .. }) => {
                debug!(%component, raw = %raw, "Rejected non-numeric score");
                writeln!(writer, "Invalid input. Please enter a valid number.")?;
            }
            Err(ScoreError::OutOfRange { value, max, .. }) => {
                debug!(%component, value, "Rejected out-of-range score");
                writeln!(writer, "Invalid input. Score should be between 0 and {max}.")?;
            }
        }
    }
}

/// Prompts for all six components of one subject, in semester order.
pub fn read_subject_marks<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    subject: &str,
) -> Result<SubjectMarks> {
    writeln!(writer, "\n-- Enter marks for: {subject} --")?;
    let order: Vec<&str> = TIME_ORDER.iter().map(|c| c.label()).collect();
    writeln!(writer, "Enter marks in the following order: {}", order.join(" - "))?;

    let mut scores = [0.0; 6];
    for (slot, &component) in scores.iter_mut().zip(TIME_ORDER.iter()) {
        *slot = read_score(reader, writer, component)?;
    }
    Ok(SubjectMarks::from_scores(scores)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_score_valid() {
        assert_eq!(parse_score(" 7.5 ", Component::Internal1), Ok(7.5));
        assert_eq!(parse_score("80", Component::Fat), Ok(80.0));
        assert_eq!(parse_score("0", Component::Cat2), Ok(0.0));
    }

    #[test]
    fn test_parse_score_rejects() {
        assert_eq!(
            parse_score("abc", Component::Cat1),
            Err(ScoreError::NotNumeric { raw: "abc".into() })
        );
        assert!(matches!(
            parse_score("NaN", Component::Cat1),
            Err(ScoreError::NotNumeric { .. })
        ));
        assert!(matches!(
            parse_score("inf", Component::Fat),
            Err(ScoreError::NotNumeric { .. })
        ));
        assert!(matches!(
            parse_score("51", Component::Cat1),
            Err(ScoreError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_score("-1", Component::Internal3),
            Err(ScoreError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_read_score_reprompts() {
        let mut reader = Cursor::new("x\n11\n9\n");
        let mut out = Vec::new();

        let value = read_score(&mut reader, &mut out, Component::Internal2).unwrap();
        assert_eq!(value, 9.0);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Internal2 (out of 10): ").count(), 3);
        assert!(text.contains("Please enter a valid number."));
        assert!(text.contains("Score should be between 0 and 10."));
    }

    #[test]
    fn test_read_subject_marks() {
        let mut reader = Cursor::new("10\n50\n10\n50\n10\n80\n");
        let mut out = Vec::new();

        let marks = read_subject_marks(&mut reader, &mut out, "Physics").unwrap();
        assert_eq!(marks.get(Component::Fat), 80.0);
        assert_eq!(marks.raw_total(), 210.0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("-- Enter marks for: Physics --"));
        assert!(text.contains("Internal1 - CAT1 - Internal2 - CAT2 - Internal3 - FAT"));
    }

    #[test]
    fn test_closed_input_is_error() {
        let mut reader = Cursor::new("10\n");
        let mut out = Vec::new();
        assert!(read_subject_marks(&mut reader, &mut out, "Physics").is_err());
    }
}
