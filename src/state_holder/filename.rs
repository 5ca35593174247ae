/// Extension appended to save-as names that lack one
pub const DEFAULT_EXTENSION: &str = "txt";

/// Source of a destination filename for save-as
///
/// Returns `None` when the user cancels. Whatever string comes back is raw
/// user input; trimming and extension handling happen in [`normalize_filename`].
pub trait FilenamePrompt {
    fn prompt_filename(&mut self) -> Option<String>;
}

/// A prompt whose answer is already known
///
/// Used by hosts that collect the name before dispatching (the terminal app)
/// and by tests. The answer is handed out once; later calls see a cancel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PromptAnswer {
    answer: Option<String>,
    asked: usize,
}

impl PromptAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            asked: 0,
        }
    }

    pub fn cancelled() -> Self {
        Self::default()
    }

    /// How many times the state machine asked for a name
    pub fn times_asked(&self) -> usize {
        self.asked
    }
}

impl From<Option<String>> for PromptAnswer {
    fn from(answer: Option<String>) -> Self {
        Self { answer, asked: 0 }
    }
}

impl FilenamePrompt for PromptAnswer {
    fn prompt_filename(&mut self) -> Option<String> {
        self.asked += 1;
        self.answer.take()
    }
}

/// Turn raw prompt input into a store key
///
/// Surrounding whitespace is dropped. An empty result is rejected with `None`.
/// `extension` may be given with or without its leading dot.
pub fn normalize_filename(raw: &str, extension: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        return None;
    }
    let extension = extension.trim().trim_start_matches('.');
    if extension.is_empty() {
        return Some(name.to_string());
    }
    let suffix = format!(".{extension}");
    if name.ends_with(&suffix) {
        Some(name.to_string())
    } else {
        Some(format!("{name}{suffix}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_missing_extension() {
        assert_eq!(normalize_filename("notes", "txt"), Some("notes.txt".into()));
        assert_eq!(normalize_filename("notes", ".txt"), Some("notes.txt".into()));
    }

    #[test]
    fn test_keeps_existing_extension() {
        assert_eq!(normalize_filename("notes.txt", "txt"), Some("notes.txt".into()));
        assert_eq!(normalize_filename("notes.md", "txt"), Some("notes.md.txt".into()));
    }

    #[test]
    fn test_trims_and_rejects_blank() {
        assert_eq!(normalize_filename("  a  ", "txt"), Some("a.txt".into()));
        assert_eq!(normalize_filename("", "txt"), None);
        assert_eq!(normalize_filename(" \t\n", "txt"), None);
    }

    #[test]
    fn test_empty_extension_leaves_name_alone() {
        assert_eq!(normalize_filename("README", ""), Some("README".into()));
    }

    #[test]
    fn test_prompt_answer_is_single_use() {
        let mut prompt = PromptAnswer::new("a");
        assert_eq!(prompt.prompt_filename(), Some("a".into()));
        assert_eq!(prompt.prompt_filename(), None);
        assert_eq!(prompt.times_asked(), 2);
    }
}
