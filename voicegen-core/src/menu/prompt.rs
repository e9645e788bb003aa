use anyhow::Result;

/// Source of user input for the menu
pub trait Prompter {
    /// Show `prompt` and read one line without its trailing newline.
    /// Returns `Ok(None)` once input is exhausted (Ctrl-D, closed stdin).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}
