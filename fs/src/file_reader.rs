use super::LocalFile;
use std::fs;
use std::io;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

pub trait FileReader {
    /// Returns true if file_path points to an existing regular file.
    fn exists(&self, file_path: &Path) -> bool;

    /// Read the contents of file_path and return them as string.
    ///
    /// If the file is not present it will return an error of kind NotFound
    fn read(&self, file_path: &Path) -> io::Result<String>;
}

impl FileReader for LocalFile {
    fn exists(&self, file_path: &Path) -> bool {
        file_path.is_file()
    }

    fn read(&self, file_path: &Path) -> io::Result<String> {
        if !self.exists(file_path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found or not a file: {}", file_path.display()),
            ));
        }

        let file_contents = fs::read(file_path)?;

        match std::str::from_utf8(&file_contents) {
            Ok(s) => Ok(s.strip_prefix(UTF8_BOM).unwrap_or(s).to_string()),
            Err(_) => fallback_decode_windows_1252(&file_contents),
        }
    }
}

/// Fallback function that decodes data assuming Windows-1252 encoding.
/// Java tooling writes properties files as ISO-8859-1, which Windows-1252 is a superset of.
fn fallback_decode_windows_1252(data: &[u8]) -> io::Result<String> {
    let (output, encoding_used, errors_happened) = encoding_rs::WINDOWS_1252.decode(data);
    // Emit the actual encoding used, which might vary form the attempted due to BOM sniffing
    // Ref: <https://docs.rs/encoding_rs/latest/encoding_rs/struct.Encoding.html#method.decode>
    tracing::debug!("Decoded using: {}", encoding_used.name());
    if errors_happened {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "UTF-8 and Windows-1252 decoding errors, file may be corrupted",
        ))
    } else {
        Ok(output.into_owned())
    }
}

////////////////////////////////////////////////////////////////////////////////////
// Mock
////////////////////////////////////////////////////////////////////////////////////
#[cfg(feature = "mocks")]
pub mod mock {
    use super::*;
    use crate::mock::MockLocalFile;
    use mockall::predicate;

    use std::path::PathBuf;

    impl MockLocalFile {
        pub fn should_read(&mut self, path: &Path, content: String) {
            self.expect_exists()
                .with(predicate::eq(PathBuf::from(path)))
                .return_const(true);
            self.expect_read()
                .with(predicate::eq(PathBuf::from(path)))
                .once()
                .returning(move |_| Ok(content.clone()));
        }

        pub fn should_not_exist(&mut self, path: &Path) {
            self.expect_exists()
                .with(predicate::eq(PathBuf::from(path)))
                .return_const(false);
            self.expect_read().never();
        }

        pub fn should_not_read_io_error(&mut self, path: &Path) {
            self.expect_exists()
                .with(predicate::eq(PathBuf::from(path)))
                .return_const(true);
            self.expect_read()
                .with(predicate::eq(PathBuf::from(path)))
                .once()
                .returning(|_| {
                    Err(io::Error::new(
                        io::ErrorKind::PermissionDenied,
                        "permission denied",
                    ))
                });
        }

        pub fn should_not_be_touched(&mut self) {
            self.expect_exists().never();
            self.expect_read().never();
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_not_found_should_return_error() {
        let reader = LocalFile;
        let result = reader.read(Path::new("/a/path/that/does/not/exist"));
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(
            String::from("file not found or not a file: /a/path/that/does/not/exist"),
            err.to_string()
        );
    }

    #[test]
    fn test_directory_does_not_exist_as_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!LocalFile.exists(dir.path()));
        assert!(LocalFile.read(dir.path()).is_err());
    }

    #[test]
    fn test_read_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "agent.name=BUILDS8").unwrap();

        assert!(LocalFile.exists(file.path()));
        assert_eq!(
            LocalFile.read(file.path()).unwrap(),
            "agent.name=BUILDS8\n".to_string()
        );
    }

    #[test]
    fn test_read_strips_utf8_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFbuild.number=4").unwrap();

        assert_eq!(LocalFile.read(file.path()).unwrap(), "build.number=4");
    }

    #[test]
    fn test_read_latin1_file_falls_back_to_windows_1252() {
        let mut file = NamedTempFile::new().unwrap();
        // "caf\xE9" is "café" in ISO-8859-1 and invalid UTF-8
        file.write_all(b"project=caf\xE9").unwrap();

        assert_eq!(LocalFile.read(file.path()).unwrap(), "project=café");
    }
}
