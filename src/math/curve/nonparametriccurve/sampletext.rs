//! Text form of a sample table: `key,value` pairs joined by `;`.
//!
//! ```text
//! 10.5,2.3;20,4.1;35.2,6
//! ```

use std::num::ParseFloatError;

use thiserror::Error;

use crate::math::curve::nonparametriccurve::nonparametriccurve::Sample;

pub const SEGMENT_SEPARATOR: char = ';';
pub const FIELD_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseSampleError {
    #[error("segment {index} '{segment}' has {fields} field(s), expected 2")]
    FieldCount {
        index: usize,
        segment: String,
        fields: usize
    },
    #[error("segment {index}: empty number")]
    EmptyNumber {
        index: usize
    },
    #[error("segment {index}: invalid number '{token}': {source}")]
    InvalidNumber {
        index: usize,
        token: String,
        #[source]
        source: ParseFloatError
    }
}

/// Parses a single numeric field. Surrounding whitespace is ignored,
/// a blank field is an error.
pub fn parse_number(token: &str, index: usize) -> Result<f64, ParseSampleError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(ParseSampleError::EmptyNumber { index });
    }
    trimmed.parse::<f64>().map_err(|source| ParseSampleError::InvalidNumber {
        index,
        token: trimmed.to_owned(),
        source
    })
}

pub fn parse_segment(segment: &str, index: usize) -> Result<Sample, ParseSampleError> {
    let fields: Vec<&str> = segment.split(FIELD_SEPARATOR).collect();
    if fields.len() != 2 {
        return Err(ParseSampleError::FieldCount {
            index,
            segment: segment.to_owned(),
            fields: fields.len()
        });
    }
    let key = parse_number(fields[0], index)?;
    let value = parse_number(fields[1], index)?;
    Ok(Sample::new(key, value))
}

/// Parses every segment of `text` in input order. The empty string has no
/// segments and yields an empty list.
pub fn parse_samples(text: &str) -> Result<Vec<Sample>, ParseSampleError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(SEGMENT_SEPARATOR)
        .enumerate()
        .map(|(index, segment)| parse_segment(segment, index))
        .collect()
}

pub fn render_samples(samples: &[Sample]) -> String {
    samples
        .iter()
        .map(|sample| sample.to_string())
        .collect::<Vec<String>>()
        .join(&SEGMENT_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_segments_in_input_order() {
        let samples = parse_samples("3,4;1,2").unwrap();
        assert_eq!(samples, vec![Sample::new(3.0, 4.0), Sample::new(1.0, 2.0)]);
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let samples = parse_samples(" 1 , 2.5;3,\t4 ").unwrap();
        assert_eq!(samples, vec![Sample::new(1.0, 2.5), Sample::new(3.0, 4.0)]);
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(parse_samples("").unwrap().is_empty());
    }

    #[test]
    fn rejects_wrong_field_count() {
        let error = parse_samples("1,2;1,2,3").unwrap_err();
        assert!(matches!(error, ParseSampleError::FieldCount { index: 1, fields: 3, .. }));
    }

    #[test]
    fn rejects_non_numeric_field() {
        let error = parse_samples("abc,1").unwrap_err();
        assert!(matches!(error, ParseSampleError::InvalidNumber { index: 0, .. }));
    }

    #[test]
    fn rejects_blank_fields_and_segments() {
        assert!(matches!(parse_samples("   ").unwrap_err(), ParseSampleError::FieldCount { .. }));
        assert!(matches!(parse_samples(" ,1").unwrap_err(), ParseSampleError::EmptyNumber { index: 0 }));
        assert!(parse_samples("1,2;;3,4").is_err());
        assert!(parse_samples("1,2;").is_err());
    }

    #[test]
    fn renders_shortest_float_form() {
        let samples = vec![Sample::new(1.0, 2.0), Sample::new(10.5, 0.25)];
        assert_eq!(render_samples(&samples), "1,2;10.5,0.25");
        assert_eq!(render_samples(&[]), "");
    }
}
