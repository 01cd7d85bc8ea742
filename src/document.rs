/*!
 * Transform and assembly stages of the document pipeline.
 *
 * Entries are first turned into [`TypesetEntry`] values, with every text field
 * passed through the [`ScriptWrapper`], and then rendered in corpus order
 * between the template's preamble and postamble.
 */

use crate::dictionary::DictionaryEntry;
use crate::latex_template::DocumentTemplate;
use crate::script_wrapper::ScriptWrapper;

/// Default label put in front of each phonetic transcription
pub const DEFAULT_PHONETIC_PREFIX: &str = "Phonetic: ";

/// Wrapped text fields of one dictionary entry, ready for the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypesetEntry {
    /// Wrapped headword
    pub title: String,

    /// Wrapped phonetic label (prefix + transcription)
    pub phonetic: String,

    /// Wrapped definitions, in corpus order
    pub definitions: Vec<String>,
}

impl TypesetEntry {
    /// Wrap each field of `entry` independently
    pub fn from_entry(entry: &DictionaryEntry, wrapper: &ScriptWrapper, phonetic_prefix: &str) -> Self {
        let phonetic_label = format!("{}{}", phonetic_prefix, entry.phone);

        Self {
            title: wrapper.wrap(&entry.entry),
            phonetic: wrapper.wrap(&phonetic_label),
            definitions: entry.defs.iter().map(|def| wrapper.wrap(&def.entry)).collect(),
        }
    }
}

/// Transform stage: wrap every entry
pub fn transform_entries(
    entries: &[DictionaryEntry],
    wrapper: &ScriptWrapper,
    phonetic_prefix: &str,
) -> Vec<TypesetEntry> {
    entries
        .iter()
        .map(|entry| TypesetEntry::from_entry(entry, wrapper, phonetic_prefix))
        .collect()
}

/// Render one entry block: section, phonetic paragraph, definition list
pub fn render_entry(entry: &TypesetEntry, template: &dyn DocumentTemplate) -> String {
    let mut block = template.section(&entry.title);
    block.push_str(&template.paragraph(&entry.phonetic));
    block.push_str(&template.begin_list());
    for definition in &entry.definitions {
        block.push_str(&template.item(definition));
    }
    block.push_str(&template.end_list());
    block
}

/// Render all entry blocks, in order
pub fn render_body(entries: &[TypesetEntry], template: &dyn DocumentTemplate) -> String {
    entries
        .iter()
        .map(|entry| render_entry(entry, template))
        .collect::<Vec<_>>()
        .concat()
}

/// Assembly stage: preamble, entry blocks, postamble
pub fn assemble(entries: &[TypesetEntry], template: &dyn DocumentTemplate) -> String {
    let body = render_body(entries, template);
    [template.preamble(), body.as_str(), template.postamble()].concat()
}
