//! Output writing for generated code.
//!
//! Generation produces a single Go file. It is written atomically (temp file
//! + rename) so a failed run never leaves a half-written file behind.

use std::fs;
use std::path::Path;

use tracing::info;
use wrapper_define::Function;

use crate::config::GeneratorOptions;
use crate::errors::GeneratorError;
use crate::generator::generate_with_options;

/// Header used when the caller does not supply one.
pub const DEFAULT_HEADER: &str = "\
// Code generated by wrapper-gen. DO NOT EDIT.

package wrapper

import (
\t\"encoding/json\"
)

";

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates wrapper code and writes it to `path`.
///
/// ## Arguments
///
/// * `header` - Literal text placed before the generated methods
/// * `functions` - Functions to generate, in output order
/// * `options` - Identifier and literal choices for the generated code
/// * `path` - Output file
/// * `dry_run` - If true, print the code instead of writing it
///
/// ## Returns
///
/// The generated code.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if the file cannot be written.
pub fn generate_and_write(
    header: &str,
    functions: &[Function],
    options: &GeneratorOptions,
    path: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let code = generate_with_options(header, functions, options);

    if dry_run {
        println!("=== {} ===\n{}", path.display(), code);
    } else {
        write_atomic(path, &code)?;
        info!(path = %path.display(), "wrote generated code");
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_functions;
    use tempfile::TempDir;

    #[test]
    fn write_atomic_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("send.go");

        write_atomic(&path, "package wrapper\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "package wrapper\n");
    }

    #[test]
    fn write_atomic_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("send.go");

        write_atomic(&path, "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_atomic_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("send.go");

        write_atomic(&path, "old").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_atomic_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("send.go");

        write_atomic(&path, "content").unwrap();
        assert!(!dir.path().join("send.tmp").exists());
    }

    #[test]
    fn generate_and_write_dry_run_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("send.go");

        let code = generate_and_write(
            DEFAULT_HEADER,
            &sample_functions(),
            &GeneratorOptions::default(),
            &path,
            true,
        )
        .unwrap();

        assert!(!path.exists());
        assert!(code.starts_with(DEFAULT_HEADER));
    }

    #[test]
    fn generate_and_write_returns_file_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("send.go");

        let code = generate_and_write(
            DEFAULT_HEADER,
            &sample_functions(),
            &GeneratorOptions::default(),
            &path,
            false,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), code);
    }

    #[test]
    fn default_header_declares_package_and_imports() {
        assert!(DEFAULT_HEADER.contains("package wrapper\n"));
        assert!(DEFAULT_HEADER.contains("\"encoding/json\""));
    }
}
