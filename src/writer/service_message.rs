use std::io::{self, Write};

use super::{TeamCityWriter, TeamCityWriterFactory, WriterError};

/// Writes `##teamcity[...]` service messages, which the build agent picks up from the
/// build process output.
#[derive(Debug)]
pub struct ServiceMessageWriter<W: Write> {
    output: W,
}

impl<W: Write> ServiceMessageWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> TeamCityWriter for ServiceMessageWriter<W> {
    fn write_build_parameter(&mut self, key: &str, value: &str) -> Result<(), WriterError> {
        writeln!(
            self.output,
            "##teamcity[setParameter name='{}' value='{}']",
            escape(key),
            escape(value)
        )?;
        // the agent reads the stream line by line while the build runs
        self.output.flush()?;
        Ok(())
    }
}

/// Creates writers that report to the process standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriterFactory;

impl TeamCityWriterFactory for StdoutWriterFactory {
    type Writer = ServiceMessageWriter<io::Stdout>;

    fn create_teamcity_writer(&self) -> Self::Writer {
        ServiceMessageWriter::new(io::stdout())
    }
}

/// Escapes an attribute value using the `|` convention of service messages.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '|' => escaped.push_str("||"),
            '\'' => escaped.push_str("|'"),
            '\n' => escaped.push_str("|n"),
            '\r' => escaped.push_str("|r"),
            '[' => escaped.push_str("|["),
            ']' => escaped.push_str("|]"),
            '\u{0085}' => escaped.push_str("|x"),
            '\u{2028}' => escaped.push_str("|l"),
            '\u{2029}' => escaped.push_str("|p"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_build_parameter() {
        let mut writer = ServiceMessageWriter::new(Vec::new());

        writer.write_build_parameter("param1", "newValue").unwrap();
        writer.write_build_parameter("env.PATH", r"C:\tools").unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "##teamcity[setParameter name='param1' value='newValue']\n\
             ##teamcity[setParameter name='env.PATH' value='C:\\tools']\n"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let mut writer = ServiceMessageWriter::new(Vec::new());

        writer
            .write_build_parameter("release.notes", "it's [done]\r\nfor a|b")
            .unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "##teamcity[setParameter name='release.notes' value='it|'s |[done|]|r|nfor a||b']\n"
        );
    }

    #[test]
    fn test_escape_unicode_separators() {
        assert_eq!(escape("a\u{0085}b\u{2028}c\u{2029}d"), "a|xb|lc|pd");
        assert_eq!(escape("Café 🚀"), "Café 🚀");
    }

    #[test]
    fn test_output_error_is_reported() {
        let mut writer = ServiceMessageWriter::new(BrokenPipe);

        let err = writer.write_build_parameter("param1", "newValue").unwrap_err();
        assert_matches!(err, WriterError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe);
    }
}
