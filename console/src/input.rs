use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    #[display("expected two numbers separated by a space, got {count} value(s)")]
    WrongArity { count: usize },
    #[display("{value:?} is not a number")]
    NotANumber { value: String },
}

/// Parses `"row col"`. Any whitespace separates the two values.
pub fn parse_coordinates(line: &str) -> Result<(usize, usize), InputError> {
    let values: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = values.as_slice() else {
        return Err(InputError::WrongArity {
            count: values.len(),
        });
    };
    Ok((parse_number(row)?, parse_number(col)?))
}

pub fn parse_number(value: &str) -> Result<usize, InputError> {
    let value = value.trim();
    value.parse().map_err(|_| InputError::NotANumber {
        value: value.to_string(),
    })
}
