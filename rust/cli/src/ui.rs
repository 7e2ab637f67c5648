//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        let mut err = Vec::new();
        write_error(&mut err, "bad").unwrap();
        display_warning(&mut err, "careful").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: bad\nWARNING: careful\n");
    }
}
