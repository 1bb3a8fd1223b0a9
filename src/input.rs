//! Reading the expression from the user.

use std::io::{BufRead, Write};

use crate::error::{Result, XcurveError};

/// Prompt shown before reading the expression.
pub const PROMPT: &str = "f(x) = ";

/// Print the prompt to `output` and read one line from `input`.
///
/// Surrounding whitespace is trimmed. An empty line or end of input yields
/// [`XcurveError::EmptyExpression`].
pub fn read_expression<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let expression = line.trim();
    if expression.is_empty() {
        return Err(XcurveError::EmptyExpression);
    }
    Ok(expression.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_trimmed_line() {
        let mut prompt = Vec::new();
        let expression =
            read_expression(Cursor::new("  sin(x) + 1 \nignored\n"), &mut prompt).unwrap();
        assert_eq!(expression, "sin(x) + 1");
        assert_eq!(prompt, PROMPT.as_bytes());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            read_expression(Cursor::new(""), Vec::new()),
            Err(XcurveError::EmptyExpression)
        ));
        assert!(matches!(
            read_expression(Cursor::new("   \n"), Vec::new()),
            Err(XcurveError::EmptyExpression)
        ));
    }
}
