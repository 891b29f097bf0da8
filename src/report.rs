use wordplay::Generation;

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

pub fn print_run(tokens: &[String], res: &Generation, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Tokens: {}", tokens.join(" ")), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    for line in result_lines(res) {
        println!("{}", palette.paint(line, ansi::GREEN));
    }

    println!("\n{}", palette.paint("━━━ Search ━━━", ansi::GRAY));
    println!(
        "  Checked: {}  │  Valid tokens: {}  │  Elapsed: {}",
        palette.paint(res.metrics.items_checked.to_string(), ansi::YELLOW),
        palette.paint(res.metrics.valid_tokens.to_string(), ansi::YELLOW),
        palette.dim(format!("{:?}", res.metrics.elapsed)),
    );
    if !res.metrics.warnings.is_empty() {
        println!("  {} {:?}", palette.paint("Warnings:", ansi::YELLOW), res.metrics.warnings);
    }
    println!();
}

/// Plain result lines, sorted for stable output.
fn result_lines(res: &Generation) -> Vec<String> {
    if res.matches.is_empty() {
        return vec!["No palindromes were found - you may have to 'borrow or rob' some from elsewhere.".to_string()];
    }

    let mut lines = vec![format!("Here are the resulting {} palindromes:", res.matches.len())];
    lines.extend(res.sorted().into_iter().map(|m| format!("  - {m}")));
    lines
}
