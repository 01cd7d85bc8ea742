/*!
 * Common test utilities for the alartex test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Opening marker of a Kannada run
pub const BEGIN: &str = "\\begin{kannada}";

/// Closing marker of a Kannada run
pub const END: &str = "\\end{kannada}";

/// Route library logs through env_logger while tests run
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Sample corpus in the layout of the Alar dictionary
pub const SAMPLE_DICTIONARY: &str = r#"- id: 1
  head: ಅ
  entry: ಅಕ್ಕ
  phone: akka
  origin: ""
  info: ""
  defs:
    - id: 11
      entry: elder sister
      type: noun
    - id: 12
      entry: a respectful term for a woman, as in ಅಕ್ಕ ಮಹಾದೇವಿ
      type: noun
- id: 2
  head: ಅ
  entry: ಅಗಲ
  phone: agala
  defs:
    - id: 21
      entry: breadth; width
"#;

/// Creates a sample dictionary file for testing
pub fn create_test_dictionary(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_DICTIONARY)
}

/// Remove every Kannada marker from wrapped text
pub fn strip_markers(text: &str) -> String {
    text.replace(BEGIN, "").replace(END, "")
}
