// SPDX-License-Identifier: MPL-2.0
//! Jump-to-slide text input.
//!
//! The field keeps the raw text and the i18n key of the last validation
//! error.

pub const JUMP_INPUT_INVALID_KEY: &str = "jump-input-error-invalid";
pub const JUMP_INPUT_RANGE_KEY: &str = "jump-input-error-range";

/// Parses typed input into a slide number of a deck of `total` slides.
///
/// # Errors
///
/// Returns the i18n key describing why the input was rejected.
pub fn parse_slide_number(input: &str, total: usize) -> Result<usize, &'static str> {
    let number: usize = input.trim().parse().map_err(|_| JUMP_INPUT_INVALID_KEY)?;
    if (1..=total).contains(&number) {
        Ok(number)
    } else {
        Err(JUMP_INPUT_RANGE_KEY)
    }
}

/// State of the jump field in the toolbar.
#[derive(Debug, Clone, Default)]
pub struct JumpInput {
    pub value: String,
    pub error_key: Option<&'static str>,
}

impl JumpInput {
    pub fn on_changed(&mut self, value: String) {
        self.value = value;
        self.error_key = None;
    }

    /// Validates the current text. The field is cleared on success.
    pub fn submit(&mut self, total: usize) -> Option<usize> {
        match parse_slide_number(&self.value, total) {
            Ok(number) => {
                self.value.clear();
                self.error_key = None;
                Some(number)
            }
            Err(key) => {
                self.error_key = Some(key);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers_in_range() {
        assert_eq!(parse_slide_number(" 7 ", 15), Ok(7));
        assert_eq!(parse_slide_number("15", 15), Ok(15));
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert_eq!(parse_slide_number("0", 15), Err(JUMP_INPUT_RANGE_KEY));
        assert_eq!(parse_slide_number("16", 15), Err(JUMP_INPUT_RANGE_KEY));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_slide_number("-3", 15), Err(JUMP_INPUT_INVALID_KEY));
        assert_eq!(parse_slide_number("seven", 15), Err(JUMP_INPUT_INVALID_KEY));
        assert_eq!(parse_slide_number("", 15), Err(JUMP_INPUT_INVALID_KEY));
    }

    #[test]
    fn submit_keeps_text_on_error() {
        let mut input = JumpInput::default();
        input.on_changed("42".into());
        assert_eq!(input.submit(15), None);
        assert_eq!(input.value, "42");
        assert_eq!(input.error_key, Some(JUMP_INPUT_RANGE_KEY));

        input.on_changed("4".into());
        assert!(input.error_key.is_none());
        assert_eq!(input.submit(15), Some(4));
        assert!(input.value.is_empty());
    }
}
