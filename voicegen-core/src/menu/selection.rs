use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please enter a valid number.")]
    NotANumber,

    #[error("Invalid choice. Please try again.")]
    OutOfRange,
}

/// Map a 1-based choice onto an index into a list of `count` entries
pub fn parse_voice_choice(input: &str, count: usize) -> Result<usize, SelectionError> {
    let choice: i64 = input
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber)?;

    if choice < 1 || choice as u64 > count as u64 {
        return Err(SelectionError::OutOfRange);
    }

    Ok(choice as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_listed_number() {
        for count in 1..=6 {
            for choice in 1..=count {
                assert_eq!(parse_voice_choice(&choice.to_string(), count), Ok(choice - 1));
            }
        }
    }

    #[test]
    fn test_rejects_out_of_range_for_any_count() {
        for count in 0..=6 {
            let above = (count + 1).to_string();
            for input in ["0", "-1", above.as_str(), "99999999999999999"] {
                assert_eq!(
                    parse_voice_choice(input, count),
                    Err(SelectionError::OutOfRange),
                    "input {input:?} with {count} voices"
                );
            }
        }
    }

    #[test]
    fn test_rejects_non_numeric_for_any_count() {
        for count in 0..=6 {
            for input in ["", "abc", "1.5", "one", "2a", "99999999999999999999999"] {
                assert_eq!(
                    parse_voice_choice(input, count),
                    Err(SelectionError::NotANumber),
                    "input {input:?} with {count} voices"
                );
            }
        }
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(parse_voice_choice(" 2\t", 2), Ok(1));
    }
}
