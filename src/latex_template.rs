/*!
 * LaTeX document templates.
 *
 * The template owns everything around the generated entries: the preamble,
 * the closing of the document, and the markup each entry is rendered with.
 * Text handed to a template is already markup-safe and is inserted verbatim.
 */

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::app_config::TemplateConfig;
use crate::file_utils::FileManager;

/// Closing line of every generated document
pub const END_DOCUMENT: &str = "\\end{document}";

/// Built-in preamble for the Alar Kannada-English dictionary book
const ALAR_BOOK_PREAMBLE: &str = r"
\documentclass[12pt,a4paper,twoside]{book}

\usepackage{fancyhdr}
\pagestyle{fancy}
\fancyhf{}
\fancyhead[L]{\rightmark}
\fancyfoot[C]{\thepage}
\renewcommand{\headrulewidth}{0pt}

\usepackage{silence}
\WarningFilter{latex}{Command \InputIfFileExists}

\usepackage{noto}
\usepackage{fontspec}
\usepackage{xunicode}
\newfontfamily{\kannadafont}{Noto Serif Kannada}
\usepackage{polyglossia}

\usepackage{fontawesome}
\usepackage[hyphens]{url}
\setmainlanguage{english}
\setotherlanguages{kannada}

% Main serif font for English (Latin alphabet) text
\setmainfont{Noto Serif}
\setsansfont{Noto Sans}
\setmonofont{Noto Mono}

\usepackage{graphicx} 
\begin{document}

\begin{titlepage}
    \centering
    \vfill
    {\bfseries\Huge
        \begin{kannada}ಅಲರ್\end{kannada}
        \vskip2cm
        \Large A Kannada-English dictionary
        \vskip2cm
        \Large V. Krishna\\
    }    
    \vfill
    \includegraphics[width=8cm]{alar.jpg} % also works with logo.pdf
    \vfill
    \vfill
\end{titlepage}

\newpage\null\thispagestyle{empty}\newpage

\newpage\null\thispagestyle{empty}\newpage

\section*{About}

Alar is an authoritative Kannada-English dictionary corpus created by V. Krishna. It contains over 150,000 Kannada words with over 240,000 English definitions. It is released as an open data corpus licensed under the Open Database License (ODC-ODbL).

\section*{V. Krishna}

V. Krishna started building his Kannada-English dictionary in the 1970s as a hobby project. This incredible endeavour spanning four decades has now evolved into an invaluable contribution to Kannada language. In addition to authoring the colossal dictionary, he single-handedly digitised his original manuscripts. In 2019, he open sourced the entire dictionary.

He is a resident of Bengaluru and spends his time working on his dictionary and other Kannada literature projects. He has recently started laying foundations for a new English-Kannada dictionary. He can be reached at vkrishna1411@yahoo.co.in.

\section*{Data}

In 2019, Zerodha collaborated with V. Krishna to open source and publish his dictionary online and awarded him a grant to support his work.

The entire corpus (© V. Krishna) is available on the Alar repository: https://github.com/alar-dict. It is licensed under ODC-ODbL.

\newpage\null\thispagestyle{empty}\newpage
";

/// Layout of the generated LaTeX document
///
/// Only [`DocumentTemplate::preamble`] is required; the entry markup defaults
/// to an unnumbered section per headword followed by an itemized list of
/// definitions.
pub trait DocumentTemplate {
    /// Everything before the first entry, including `\begin{document}`
    fn preamble(&self) -> &str;

    /// Everything after the last entry
    fn postamble(&self) -> &str {
        END_DOCUMENT
    }

    fn section(&self, title: &str) -> String {
        format!("\\section*{{{}}}\n\n", title)
    }

    fn paragraph(&self, text: &str) -> String {
        format!("{}\n\n", text)
    }

    fn begin_list(&self) -> String {
        "\\begin{itemize}\n".to_string()
    }

    fn item(&self, text: &str) -> String {
        format!("\\item {}\n\n", text)
    }

    fn end_list(&self) -> String {
        "\\end{itemize}\n".to_string()
    }
}

/// The built-in dictionary book layout
#[derive(Debug, Clone, Copy, Default)]
pub struct AlarBookTemplate;

impl DocumentTemplate for AlarBookTemplate {
    fn preamble(&self) -> &str {
        ALAR_BOOK_PREAMBLE
    }
}

/// Book layout with a preamble supplied by the user
#[derive(Debug, Clone)]
pub struct PreambleFileTemplate {
    preamble: String,
}

impl PreambleFileTemplate {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
        }
    }

    /// Load the preamble from a `.tex` fragment
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let preamble = FileManager::read_to_string(path)
            .with_context(|| format!("Failed to load preamble: {}", path.display()))?;
        debug!("Loaded preamble from {} ({} bytes)", path.display(), preamble.len());
        Ok(Self::new(preamble))
    }
}

impl DocumentTemplate for PreambleFileTemplate {
    fn preamble(&self) -> &str {
        &self.preamble
    }
}

/// Pick the template described by the configuration
pub fn template_from_config(config: &TemplateConfig) -> Result<Box<dyn DocumentTemplate>> {
    match &config.preamble_path {
        Some(path) => Ok(Box::new(PreambleFileTemplate::from_file(path)?)),
        None => Ok(Box::new(AlarBookTemplate)),
    }
}
