//! Knowledge documents: static `.md` / `.txt` files injected verbatim into the system prompt.

use std::fs;
use std::io;
use std::path::Path;

/// File extensions treated as knowledge documents.
pub const KNOWLEDGE_EXTENSIONS: &[&str] = &["md", "txt"];

/// One knowledge file: its name (used in the section header) and full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeDocument {
    pub file_name: String,
    pub content: String,
}

fn is_knowledge_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| KNOWLEDGE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Reads every knowledge document in `dir`, sorted by file name.
///
/// Returns an empty list when `dir` does not exist. Subdirectories and files with
/// other extensions are skipped. Any read error aborts the whole load.
pub fn load_knowledge_dir(dir: &Path) -> io::Result<Vec<KnowledgeDocument>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_knowledge_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(&path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        documents.push(KnowledgeDocument { file_name, content });
    }
    Ok(documents)
}

/// Concatenates documents, each preceded by a header naming its file.
pub fn format_knowledge(documents: &[KnowledgeDocument]) -> String {
    let mut out = String::new();
    for doc in documents {
        out.push_str("\n\n--- 来自文件: ");
        out.push_str(&doc.file_name);
        out.push_str(" ---\n\n");
        out.push_str(&doc.content);
    }
    out
}
