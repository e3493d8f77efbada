pub mod file_reader;

/// Access to the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFile;

#[cfg(feature = "mocks")]
pub mod mock {
    use super::file_reader::FileReader;
    use mockall::mock;
    use std::io;
    use std::path::Path;

    mock! {
        pub LocalFile {}

        impl FileReader for LocalFile {
            fn exists(&self, file_path: &Path) -> bool;
            fn read(&self, file_path: &Path) -> io::Result<String>;
        }
    }
}
