use anyhow::Result;
use std::io::{BufRead, Write};

/// Interpret a yes/no answer; `None` means ask again
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question on stdout, reading answers from `input`
///
/// End of input counts as "no".
pub fn prompt_yes_no<R: BufRead>(prompt: &str, input: &mut R) -> Result<bool> {
    loop {
        print!("{} [y/N]: ", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match parse_yes_no(&line) {
            Some(answer) => return Ok(answer),
            None => println!("Please enter 'y' or 'n'"),
        }
    }
}
