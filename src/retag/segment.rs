use crate::retag::error::RetagError;

/// One annotated time interval. Times are stored in seconds; the annotation
/// files carry them in hundredths of a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub tag: String,
}

impl Segment {
    /// Parse a single `start\tend\ttag` line. `line_no` is 1-based and used
    /// for error reporting only.
    pub fn parse(line: &str, line_no: usize) -> Result<Self, RetagError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(RetagError::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        Ok(Segment {
            start: parse_time(fields[0], line_no)?,
            end: parse_time(fields[1], line_no)?,
            tag: fields[2].to_string(),
        })
    }
}

fn parse_time(field: &str, line_no: usize) -> Result<f64, RetagError> {
    let hundredths: f64 = field.parse().map_err(|_| RetagError::BadTime {
        line: line_no,
        value: field.to_string(),
    })?;
    Ok(hundredths / 100.0)
}
