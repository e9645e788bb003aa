use super::Formatter;

#[derive(Clone)]
pub struct TerminalFormatter {
    use_colors: bool,
}

impl Default for TerminalFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TerminalFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn decorate(&self, color: &str, tag: &str, msg: &str) -> String {
        if self.use_colors {
            format!("\x1b[{color}m{tag}\x1b[0m {msg}")
        } else {
            format!("{tag} {msg}")
        }
    }
}

impl Formatter for TerminalFormatter {
    fn print_line(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn print_system(&mut self, msg: &str) {
        println!("{}", self.decorate("33", "[System]", msg));
    }

    fn print_success(&mut self, msg: &str) {
        println!("{}", self.decorate("32", "✓", msg));
    }

    fn print_warning(&mut self, msg: &str) {
        eprintln!("{}", self.decorate("33", "[Warning]", msg));
    }

    fn print_error(&mut self, msg: &str) {
        eprintln!("{}", self.decorate("31", "[Error]", msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let formatter = TerminalFormatter::new(false);
        assert_eq!(formatter.decorate("31", "[Error]", "boom"), "[Error] boom");
    }

    #[test]
    fn test_colored_output_resets() {
        let formatter = TerminalFormatter::new(true);
        assert_eq!(
            formatter.decorate("31", "[Error]", "boom"),
            "\x1b[31m[Error]\x1b[0m boom"
        );
    }
}
