use datescan::Match;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_matches(input: &str, found: &[Match], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("Scanning: \"{}\"", preview(input)), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Dates ━━━", ansi::GRAY));
    if found.is_empty() {
        println!("{}", palette.dim("  No dates found"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • A word between the date parts is missing from the loaded dictionaries");
        println!("  • The date is outside --min-date/--max-date");
        println!("  • The numbers do not form a calendar date in the configured order");
        println!("\n{}", palette.dim("  Tip: run with -vvv to trace how each sequence was closed"));
        println!();
        return;
    }

    for (idx, m) in found.iter().enumerate() {
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(m.date.to_string(), ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("offset {}", m.offset), ansi::YELLOW),
            palette.dim(format!("\"{}\"", m.text)),
        );
    }
    println!();
}

/// Input shortened to one line for the header.
fn preview(input: &str) -> String {
    let line: String = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.chars().count() > 80 { format!("{}…", line.chars().take(79).collect::<String>()) } else { line }
}
