use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::dictionary::{self, DictionaryEntry};
use crate::document::{self, TypesetEntry};
use crate::errors::AppError;
use crate::file_utils::{FileManager, FileType, DICTIONARY_EXTENSIONS};
use crate::latex_template::{self, DocumentTemplate};
use crate::script_wrapper::ScriptWrapper;

// @module: Application controller for dictionary conversion

// Below this many entries the transform stage runs without a progress bar
const PROGRESS_BAR_MIN_ENTRIES: usize = 1000;

/// Outcome of converting one dictionary file
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Written document
    pub output_path: PathBuf,

    /// Number of entries rendered
    pub entries: usize,

    /// Number of definitions rendered
    pub definitions: usize,

    /// Wall time of the conversion
    pub elapsed: Duration,
}

/// Main application controller: load, transform, assemble, persist
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Wrapper built from the script config
    wrapper: ScriptWrapper,

    // @field: Document layout
    template: Box<dyn DocumentTemplate>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate().map_err(|e| AppError::Config(format!("{:#}", e)))?;

        let wrapper = config.script.wrapper();
        let template = latex_template::template_from_config(&config.template)
            .map_err(|e| AppError::File(format!("{:#}", e)))?;

        Ok(Self {
            config,
            wrapper,
            template,
        })
    }

    /// Create a controller with an explicit template, bypassing the template config
    pub fn with_template(config: Config, template: Box<dyn DocumentTemplate>) -> Self {
        let wrapper = config.script.wrapper();
        Self {
            config,
            wrapper,
            template,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn wrapper(&self) -> &ScriptWrapper {
        &self.wrapper
    }

    /// Default output location: `<stem>.<extension>` next to the input
    pub fn default_output_path(&self, input_file: &Path) -> PathBuf {
        let output_dir = input_file.parent().unwrap_or(Path::new("."));
        FileManager::generate_output_path(input_file, output_dir, &self.config.output_extension)
    }

    /// Convert one dictionary file
    ///
    /// Returns `None` when the output already exists and `force_overwrite` is not set.
    pub fn run(
        &self,
        input_file: PathBuf,
        output_file: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<Option<ConversionSummary>> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        if FileManager::detect_file_type(&input_file)? != FileType::Dictionary {
            warn!("{:?} does not have a YAML extension, reading it as YAML anyway", input_file);
        }

        let output_path = output_file.unwrap_or_else(|| self.default_output_path(&input_file));
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_path);
            return Ok(None);
        }

        let summary = self.convert_file(&input_file, &output_path)?;
        info!(
            "Success: {} ({} entries, {} definitions) in {}",
            summary.output_path.display(),
            summary.entries,
            summary.definitions,
            Self::format_duration(summary.elapsed)
        );

        Ok(Some(summary))
    }

    /// Run the four pipeline stages for one file
    pub fn convert_file(&self, input_file: &Path, output_file: &Path) -> Result<ConversionSummary> {
        let start_time = Instant::now();

        info!("Loading dictionary: {}", input_file.display());
        let entries = dictionary::load_entries(input_file)?;
        let definitions = dictionary::count_definitions(&entries);
        debug!("Loaded {} entries with {} definitions", entries.len(), definitions);

        let typeset = self.transform_with_progress(&entries);

        let latex_document = document::assemble(&typeset, self.template.as_ref());

        FileManager::write_to_file(output_file, &latex_document)
            .with_context(|| format!("Failed to save document: {}", output_file.display()))?;

        Ok(ConversionSummary {
            output_path: output_file.to_path_buf(),
            entries: entries.len(),
            definitions,
            elapsed: start_time.elapsed(),
        })
    }

    // Transform stage with a progress bar for large corpora
    fn transform_with_progress(&self, entries: &[DictionaryEntry]) -> Vec<TypesetEntry> {
        let prefix = &self.config.phonetic_prefix;

        if entries.len() < PROGRESS_BAR_MIN_ENTRIES {
            return document::transform_entries(entries, &self.wrapper, prefix);
        }

        let progress_bar = ProgressBar::new(entries.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} entries ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar.set_message("Typesetting");

        let typeset = entries
            .iter()
            .map(|entry| {
                let typeset_entry = TypesetEntry::from_entry(entry, &self.wrapper, prefix);
                progress_bar.inc(1);
                typeset_entry
            })
            .collect();

        progress_bar.finish_and_clear();
        typeset
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }

    /// Convert every YAML dictionary below `input_dir`
    ///
    /// A file that fails is logged and skipped. Returns the number of documents written.
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<usize> {
        let start_time = Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let mut dictionary_files = Vec::new();
        for ext in DICTIONARY_EXTENSIONS {
            dictionary_files.append(&mut FileManager::find_files(&input_dir, ext)?);
        }
        dictionary_files.sort();

        if dictionary_files.is_empty() {
            warn!("No YAML dictionary files found in {:?}", input_dir);
            return Ok(0);
        }

        info!("Found {} dictionary file(s) in {:?}", dictionary_files.len(), input_dir);

        let mut converted = 0;
        for file in dictionary_files {
            match self.run(file.clone(), None, force_overwrite) {
                Ok(Some(_)) => converted += 1,
                Ok(None) => {}
                Err(e) => error!("Error processing {:?}: {:#}", file, e),
            }
        }

        info!(
            "Finished: {} document(s) written in {}",
            converted,
            Self::format_duration(start_time.elapsed())
        );

        Ok(converted)
    }
}
