/*!
 * Tests for dictionary corpus loading
 */

use anyhow::Result;
use alartex::dictionary::{self, Definition, DictionaryEntry};
use crate::common;

/// Test that the sample corpus parses into ordered entries
#[test]
fn test_parse_entries_withSampleCorpus_shouldKeepOrder() -> Result<()> {
    let entries = dictionary::parse_entries(common::SAMPLE_DICTIONARY)?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].entry, "ಅಕ್ಕ");
    assert_eq!(entries[0].phone, "akka");
    assert_eq!(entries[0].defs[0].entry, "elder sister");
    assert_eq!(entries[1].entry, "ಅಗಲ");
    assert_eq!(dictionary::count_definitions(&entries), 3);

    Ok(())
}

/// Test that unknown keys in the corpus are ignored
#[test]
fn test_parse_entries_withUnknownKeys_shouldIgnoreThem() -> Result<()> {
    let yaml = "- entry: ಅ\n  phone: a\n  synonyms: [x, y]\n  defs:\n    - entry: first letter\n      note: extra\n";
    let entries = dictionary::parse_entries(yaml)?;

    assert_eq!(entries[0], DictionaryEntry::new("ಅ", "a", vec![Definition::new("first letter")]));

    Ok(())
}

/// Test that a document which is not a list of entries is rejected
#[test]
fn test_parse_entries_withMappingRoot_shouldFail() {
    let result = dictionary::parse_entries("entry: ಅ\nphone: a\n");
    assert!(result.is_err());
}

/// Test that broken YAML is rejected
#[test]
fn test_parse_entries_withMalformedYaml_shouldFail() {
    let result = dictionary::parse_entries("- entry: [unclosed\n");
    assert!(result.is_err());
}

/// Test that load_entries reads from disk
#[test]
fn test_load_entries_withValidFile_shouldReturnEntries() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_dictionary(temp_dir.path(), "alar.yml")?;

    let entries = dictionary::load_entries(&path)?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].definition_count(), 1);

    Ok(())
}

/// Test that a missing file surfaces its path
#[test]
fn test_load_entries_withMissingFile_shouldNamePath() {
    let error = dictionary::load_entries("does_not_exist_12345.yml").unwrap_err();
    assert!(format!("{:#}", error).contains("does_not_exist_12345.yml"));
}

/// Test that a parse failure names the file
#[test]
fn test_load_entries_withMalformedFile_shouldNamePath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.yml", "- entry: ಅ\n")?;

    let error = dictionary::load_entries(&path).unwrap_err();
    let message = format!("{:#}", error);
    assert!(message.contains("broken.yml"));
    assert!(message.contains("Failed to parse dictionary YAML"));

    Ok(())
}
