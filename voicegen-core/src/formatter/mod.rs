mod terminal;

pub use terminal::TerminalFormatter;

/// Trait for displaying menu output in the terminal
pub trait Formatter {
    /// Undecorated output such as menus and voice listings
    fn print_line(&mut self, msg: &str);

    fn print_system(&mut self, msg: &str);

    fn print_success(&mut self, msg: &str);

    fn print_warning(&mut self, msg: &str);

    fn print_error(&mut self, msg: &str);
}
