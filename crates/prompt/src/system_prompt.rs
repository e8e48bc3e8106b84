//! System prompt builder: persona + knowledge directory.

use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::knowledge::{format_knowledge, load_knowledge_dir};
use crate::persona::Persona;

/// Produces the instruction string prepended to every completion request.
///
/// The knowledge directory is re-read on every [`build`](Self::build), so edits to the
/// documents take effect without a restart.
#[derive(Debug, Clone)]
pub struct SystemPromptBuilder {
    persona: Persona,
    knowledge_dir: PathBuf,
}

impl SystemPromptBuilder {
    pub fn new(persona: Persona, knowledge_dir: impl Into<PathBuf>) -> Self {
        Self {
            persona,
            knowledge_dir: knowledge_dir.into(),
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn knowledge_dir(&self) -> &Path {
        &self.knowledge_dir
    }

    /// Builds the prompt. Never fails: an unreadable knowledge source is logged and
    /// replaced by an empty knowledge section.
    pub fn build(&self) -> String {
        let knowledge = match load_knowledge_dir(&self.knowledge_dir) {
            Ok(documents) => {
                debug!(
                    knowledge_dir = %self.knowledge_dir.display(),
                    document_count = documents.len(),
                    "Loaded knowledge documents"
                );
                format_knowledge(&documents)
            }
            Err(e) => {
                error!(
                    error = %e,
                    knowledge_dir = %self.knowledge_dir.display(),
                    "Error reading knowledge files"
                );
                String::new()
            }
        };
        self.persona.render(&knowledge)
    }
}
