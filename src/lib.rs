/*!
 * # alartex - Typeset a Kannada-English dictionary corpus with LaTeX
 *
 * A Rust library that turns a YAML dictionary corpus into a LaTeX book,
 * marking every run of Kannada text with `\begin{kannada}...\end{kannada}` so
 * polyglossia can switch font and hyphenation rules for it.
 *
 * ## Features
 *
 * - Single-pass script-span wrapping over a configurable Unicode range
 * - YAML corpus loading (headword, phonetic transcription, definitions)
 * - Swappable document templates, with a built-in book layout
 * - Single file or whole directory conversion
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `script_wrapper`: Script-run detection and wrapping
 * - `dictionary`: Corpus model and YAML loading
 * - `document`: Transform and assembly stages
 * - `latex_template`: Document templates
 * - `app_controller`: Load, transform, assemble and persist pipeline
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod dictionary;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod latex_template;
pub mod script_wrapper;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{ConversionSummary, Controller};
pub use dictionary::{Definition, DictionaryEntry};
pub use document::TypesetEntry;
pub use errors::{AppError, DictionaryError, ScriptRangeError};
pub use latex_template::{AlarBookTemplate, DocumentTemplate, PreambleFileTemplate};
pub use script_wrapper::{wrap_kannada, Run, ScriptRange, ScriptWrapper};
