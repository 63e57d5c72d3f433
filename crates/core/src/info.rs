//! Printing an entity's human-readable summary.

use std::io::{self, Write};

/// Entities that can print their [`Display`](core::fmt::Display) form as one
/// summary block.
///
/// Implementors normally only provide `Display`; both methods have defaults.
pub trait ShowInfo: core::fmt::Display {
    /// Write the summary followed by a newline.
    fn write_info(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Write the summary to stdout.
    fn show_info(&self) -> io::Result<()> {
        self.write_info(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label(&'static str);

    impl core::fmt::Display for Label {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "Label: {}", self.0)
        }
    }

    impl ShowInfo for Label {}

    #[test]
    fn write_info_appends_newline() {
        let mut out = Vec::new();
        Label("a\nb").write_info(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Label: a\nb\n");
    }
}
