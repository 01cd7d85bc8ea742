/*!
 * Integration tests for the dictionary conversion workflow
 */

use std::fs;
use anyhow::Result;
use alartex::app_config::Config;
use alartex::app_controller::Controller;
use alartex::latex_template::{AlarBookTemplate, DocumentTemplate, PreambleFileTemplate};
use crate::common::{self, BEGIN, END};

/// Test a full load, transform, assemble and persist run
#[test]
fn test_convert_file_withSampleCorpus_shouldWriteCompleteDocument() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_dictionary(temp_dir.path(), "alar.yml")?;
    let output = temp_dir.path().join("alar_dict.tex");

    let controller = Controller::with_template(Config::default(), Box::new(PreambleFileTemplate::new("PREAMBLE\n")));
    let summary = controller.convert_file(&input, &output)?;

    assert_eq!(summary.entries, 2);
    assert_eq!(summary.definitions, 3);
    assert_eq!(summary.output_path, output);

    let expected = format!(
        "PREAMBLE\n\
         \\section*{{{b}ಅಕ್ಕ{e}}}\n\n\
         Phonetic: akka\n\n\
         \\begin{{itemize}}\n\
         \\item elder sister\n\n\
         \\item a respectful term for a woman, as in {b}ಅಕ್ಕ{e} {b}ಮಹಾದೇವಿ{e}\n\n\
         \\end{{itemize}}\n\
         \\section*{{{b}ಅಗಲ{e}}}\n\n\
         Phonetic: agala\n\n\
         \\begin{{itemize}}\n\
         \\item breadth; width\n\n\
         \\end{{itemize}}\n\
         \\end{{document}}",
        b = BEGIN,
        e = END
    );
    assert_eq!(fs::read_to_string(&output)?, expected);

    Ok(())
}

/// Test that the default template produces the book preamble
#[test]
fn test_run_withDefaultConfig_shouldWriteBookNextToInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_dictionary(temp_dir.path(), "alar.yml")?;

    let controller = Controller::with_config(Config::default())?;
    let summary = controller.run(input, None, false)?.expect("conversion should not be skipped");

    assert_eq!(summary.output_path, temp_dir.path().join("alar.tex"));
    let latex = fs::read_to_string(&summary.output_path)?;
    assert!(latex.starts_with(AlarBookTemplate.preamble()));
    assert!(latex.ends_with("\\end{document}"));

    Ok(())
}

/// Test that existing output is kept unless forced
#[test]
fn test_run_withExistingOutput_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_dictionary(temp_dir.path(), "alar.yml")?;
    let output = common::create_test_file(temp_dir.path(), "alar.tex", "old")?;

    let controller = Controller::with_config(Config::default())?;

    let skipped = controller.run(input.clone(), Some(output.clone()), false)?;
    assert!(skipped.is_none());
    assert_eq!(fs::read_to_string(&output)?, "old");

    let forced = controller.run(input, Some(output.clone()), true)?;
    assert!(forced.is_some());
    assert_ne!(fs::read_to_string(&output)?, "old");

    Ok(())
}

/// Test that a missing input fails fast
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.run(temp_dir.path().join("missing.yml"), None, false);
    assert!(result.is_err());

    Ok(())
}

/// Test that malformed data fails without writing output
#[test]
fn test_run_withMalformedDictionary_shouldFailWithoutOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "broken.yml", "- entry: ಅ\n  defs: []\n")?;

    let controller = Controller::with_config(Config::default())?;
    let error = controller.run(input, None, false).unwrap_err();

    assert!(format!("{:#}", error).contains("phone"));
    assert!(!temp_dir.path().join("broken.tex").exists());

    Ok(())
}

/// Test folder mode over good, bad and unrelated files
#[test]
fn test_run_folder_withMixedFiles_shouldConvertValidDictionaries() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    common::create_test_dictionary(temp_dir.path(), "a.yml")?;
    common::create_test_dictionary(temp_dir.path(), "nested/b.yaml")?;
    common::create_test_file(temp_dir.path(), "c.yml", "- entry: [broken\n")?;
    common::create_test_file(temp_dir.path(), "readme.txt", "not a dictionary")?;

    let controller = Controller::with_config(Config::default())?;
    let converted = controller.run_folder(temp_dir.path().to_path_buf(), false)?;

    assert_eq!(converted, 2);
    assert!(temp_dir.path().join("a.tex").exists());
    assert!(temp_dir.path().join("nested").join("b.tex").exists());
    assert!(!temp_dir.path().join("c.tex").exists());

    // Second pass skips everything already written
    assert_eq!(controller.run_folder(temp_dir.path().to_path_buf(), false)?, 0);

    Ok(())
}

/// Test folder mode on a directory without dictionaries
#[test]
fn test_run_folder_withNoDictionaries_shouldReturnZero() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    assert_eq!(controller.run_folder(temp_dir.path().to_path_buf(), false)?, 0);

    Ok(())
}

/// Test that a large corpus goes through the progress-tracked transform
#[test]
fn test_convert_file_withLargeCorpus_shouldRenderEveryEntry() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut yaml = String::new();
    for i in 0..1500 {
        yaml.push_str(&format!("- entry: ಪದ{}\n  phone: pada{}\n  defs:\n    - entry: word {}\n", i, i, i));
    }
    let input = common::create_test_file(temp_dir.path(), "large.yml", &yaml)?;
    let output = temp_dir.path().join("large.tex");

    let controller = Controller::with_template(Config::default(), Box::new(PreambleFileTemplate::new("")));
    let summary = controller.convert_file(&input, &output)?;

    assert_eq!(summary.entries, 1500);
    let latex = fs::read_to_string(&output)?;
    assert_eq!(latex.matches("\\section*{").count(), 1500);
    assert!(latex.contains(&format!("\\section*{{{}ಪದ{}1499}}", BEGIN, END)));
    assert_eq!(common::strip_markers(&latex).matches("ಪದ").count(), 1500);

    Ok(())
}

/// Test that an empty corpus still yields a framed document
#[test]
fn test_convert_file_withEmptyCorpus_shouldWritePreambleAndPostamble() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "empty.yml", "")?;
    let output = temp_dir.path().join("empty.tex");

    let controller = Controller::with_template(Config::default(), Box::new(PreambleFileTemplate::new("PRE\n")));
    let summary = controller.convert_file(&input, &output)?;

    assert_eq!(summary.entries, 0);
    assert_eq!(fs::read_to_string(&output)?, "PRE\n\\end{document}");

    Ok(())
}
