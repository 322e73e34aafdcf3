use colored::*;
use crate::core::processor::Response;

pub struct OutputStyle;

impl OutputStyle {
    pub fn answer(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn payload(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field(label: &str, value: &str) {
        println!("{:>12}: {}", Self::label(label), value);
    }

    /// Print router output, colored by which branch produced it
    pub fn print_response(response: &Response, text: &str) {
        let styled = match response {
            Response::Canned(_) => Self::answer(text),
            Response::Calculation(_) => Self::payload(text),
            Response::Fallback => Self::muted(text),
        };
        println!("{}", styled);
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_warning(message: &str) {
    eprintln!("⚠️  {}", OutputStyle::warning(message));
}
