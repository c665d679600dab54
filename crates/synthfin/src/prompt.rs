//! Interactive platform selection
//!
//! Selection never fails: input that isn't a valid 1-based menu number picks
//! the first option instead.

use std::io::{self, BufRead, Write};

/// Outcome of parsing one line of menu input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The input named a valid entry
    Chosen(String),
    /// The input was unusable; the first option was substituted
    Fallback(String),
}

impl Selection {
    pub fn name(&self) -> &str {
        match self {
            Selection::Chosen(name) | Selection::Fallback(name) => name,
        }
    }

    pub fn into_name(self) -> String {
        match self {
            Selection::Chosen(name) | Selection::Fallback(name) => name,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Selection::Fallback(_))
    }
}

/// Parse a trimmed 1-based menu number against `options`.
///
/// Non-numeric input, zero, out-of-range numbers and empty input all fall
/// back to the first option. An empty option list yields an empty fallback.
pub fn parse_selection<S: AsRef<str>>(input: &str, options: &[S]) -> Selection {
    let chosen = input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| options.get(index));

    match chosen {
        Some(name) => Selection::Chosen(name.as_ref().to_string()),
        None => Selection::Fallback(
            options
                .first()
                .map(|name| name.as_ref().to_string())
                .unwrap_or_default(),
        ),
    }
}

/// Render the numbered menu
pub fn render_menu<S: AsRef<str>>(options: &[S]) -> String {
    let mut menu = String::from("Available platforms:\n");
    for (i, name) in options.iter().enumerate() {
        menu.push_str(&format!("{}. {}\n", i + 1, name.as_ref()));
    }
    menu
}

/// Print the menu to `output`, read one line from `input` and parse it.
///
/// End of input counts as an empty line.
pub fn prompt_selection<R: BufRead, W: Write, S: AsRef<str>>(
    mut input: R,
    mut output: W,
    options: &[S],
) -> io::Result<Selection> {
    write!(output, "{}", render_menu(options))?;
    write!(output, "\nChoose a platform (1-{}): ", options.len())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let selection = parse_selection(&line, options);
    if selection.is_fallback() {
        writeln!(
            output,
            "Invalid choice. Selecting {} by default.",
            selection.name()
        )?;
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: [&str; 3] = ["Facebook", "WhatsApp", "Instagram"];

    #[test]
    fn test_valid_numbers() {
        assert_eq!(
            parse_selection("1", &OPTIONS),
            Selection::Chosen("Facebook".to_string())
        );
        assert_eq!(
            parse_selection(" 3\n", &OPTIONS),
            Selection::Chosen("Instagram".to_string())
        );
    }

    #[test]
    fn test_invalid_input_falls_back_to_first() {
        for input in ["", "0", "4", "-1", "two", "1.5", "99999999999999999999999"] {
            let selection = parse_selection(input, &OPTIONS);
            assert_eq!(
                selection,
                Selection::Fallback("Facebook".to_string()),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_empty_options() {
        let empty: [&str; 0] = [];
        assert_eq!(parse_selection("1", &empty), Selection::Fallback(String::new()));
    }

    #[test]
    fn test_prompt_round_trip() {
        let mut output = Vec::new();
        let selection = prompt_selection("2\n".as_bytes(), &mut output, &OPTIONS).unwrap();
        assert_eq!(selection.into_name(), "WhatsApp");

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1. Facebook\n2. WhatsApp\n3. Instagram\n"));
        assert!(!text.contains("Invalid choice"));
    }

    #[test]
    fn test_prompt_reports_fallback() {
        let mut output = Vec::new();
        let selection = prompt_selection("nope\n".as_bytes(), &mut output, &OPTIONS).unwrap();
        assert!(selection.is_fallback());
        assert!(String::from_utf8(output).unwrap().contains("Selecting Facebook by default"));

        // End of input
        let selection = prompt_selection(io::empty(), io::sink(), &OPTIONS).unwrap();
        assert_eq!(selection.name(), "Facebook");
    }
}
