//! Store construction options.

/// Configuration for opening a store.
///
/// Only `create_if_missing` and `error_if_exists` change the behaviour of the
/// in-memory backend. The sizing fields are carried so the same options can be
/// handed to a disk-backed engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Create the store if it does not exist yet.
    pub create_if_missing: bool,
    /// Fail if the store already exists.
    pub error_if_exists: bool,
    /// Block cache capacity in bytes.
    pub cache_size: usize,
    /// Approximate size of a data block in bytes.
    pub block_size: usize,
    /// Bytes buffered in memory before they are written out.
    pub write_buffer_size: usize,
    /// Number of files the engine may keep open.
    pub max_open_files: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            create_if_missing: true,
            error_if_exists: false,
            cache_size: 8 * 1024 * 1024, // 8MB
            block_size: 4 * 1024,
            write_buffer_size: 4 * 1024 * 1024, // 4MB
            max_open_files: 1000,
        }
    }
}

impl Options {
    /// Options that open an existing store and never create one.
    pub fn existing() -> Self {
        Self {
            create_if_missing: false,
            ..Default::default()
        }
    }

    /// Options that always create a fresh store and refuse an existing one.
    pub fn fresh() -> Self {
        Self {
            create_if_missing: true,
            error_if_exists: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert!(options.create_if_missing);
        assert!(!options.error_if_exists);
        assert_eq!(options.max_open_files, 1000);
    }

    #[test]
    fn test_override_with_struct_update() {
        let options = Options {
            cache_size: 0,
            ..Default::default()
        };
        assert_eq!(options.cache_size, 0);
        assert_eq!(options.block_size, Options::default().block_size);
        assert!(!Options::existing().create_if_missing);
        assert!(Options::fresh().error_if_exists);
    }
}
