use std::io::{self, Write};
use uaclass::{DetectionDetails, DetectionVerbose, WindowsFlavor};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
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

/// Report settings shared by every UA in one CLI run.
pub struct ReportOptions {
    pub flavor: WindowsFlavor,
    pub color: bool,
    pub verbose: bool,
}

pub fn write_run(out: &mut impl Write, res: &DetectionVerbose, opts: &ReportOptions) -> io::Result<()> {
    let palette = ansi::Palette::new(opts.color);
    let d = &res.detection;
    writeln!(out, "\n{}", palette.bold(palette.paint(format!("⚙  User agent: \"{}\"", d.user_agent()), ansi::CYAN)))?;

    // Browser
    writeln!(out, "\n{}", palette.paint("━━━ Browser ━━━", ansi::GRAY))?;
    writeln!(
        out,
        "  {} {}",
        palette.bold(palette.paint(d.browser().display_name(), ansi::GREEN)),
        palette.paint(d.version().as_str(), ansi::YELLOW)
    )?;
    if let Some(cv) = d.compatibility_view() {
        writeln!(out, "  {} {} {}", palette.dim("compatibility view:"), cv.browser, palette.paint(cv.version.as_str(), ansi::YELLOW))?;
    }
    writeln!(
        out,
        "  {} {}  {} {}",
        palette.dim("mobile:"),
        flag(d.is_mobile(), &palette),
        palette.dim("│ robot:"),
        flag(d.is_robot(), &palette)
    )?;

    // Platform
    writeln!(out, "\n{}", palette.paint("━━━ Platform ━━━", ansi::GRAY))?;
    let name = d.platform_version_name(opts.flavor).unwrap_or_else(|| uaclass::UNKNOWN.to_string());
    writeln!(
        out,
        "  {} {} {}",
        palette.bold(palette.paint(d.platform().display_name(), ansi::GREEN)),
        palette.paint(d.platform_version().raw(), ansi::YELLOW),
        palette.dim(format!("({name})"))
    )?;
    writeln!(out, "  {} {}", palette.dim("64-bit:"), flag(d.is_64bit(), &palette))?;

    // Extras
    writeln!(out, "\n{}", palette.paint("━━━ Extras ━━━", ansi::GRAY))?;
    let aol = match d.aol_version() {
        Some(version) => palette.paint(format!("yes ({version})"), ansi::GREEN),
        None => palette.dim("no"),
    };
    writeln!(out, "  {} {}  {} {}", palette.dim("AOL:"), aol, palette.dim("│ Chrome Frame:"), flag(d.is_chrome_frame(), &palette))?;

    if opts.verbose {
        write_details(out, &res.details, &palette)?;
    }
    writeln!(out)
}

fn write_details(out: &mut impl Write, details: &DetectionDetails, palette: &ansi::Palette) -> io::Result<()> {
    writeln!(out, "\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY))?;
    match &details.matched_rule {
        Some(rule) => writeln!(out, "  {} {}", palette.dim("matched:"), palette.paint(rule, ansi::CYAN))?,
        None => {
            writeln!(out, "  {}", palette.dim("No rule matched"))?;
            writeln!(out, "\n{}", palette.dim("  Tip: RUST_LOG=uaclass=trace shows every rule evaluated"))?;
        }
    }
    writeln!(
        out,
        "  {} {}  {} {}",
        palette.dim("evaluated:"),
        palette.paint(details.rules_evaluated.to_string(), ansi::BLUE),
        palette.dim("│ skipped:"),
        palette.paint(details.rules_skipped.to_string(), ansi::BLUE)
    )?;
    if !details.active_rules.is_empty() {
        writeln!(out, "  {} {}", palette.dim("active:"), details.active_rules.join(", "))?;
    }

    // Timing
    writeln!(out, "\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY))?;
    writeln!(
        out,
        "  Total: {}  │  Browser: {}  │  Platform: {}  │  AOL: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.browser), ansi::CYAN),
        palette.dim(format!("{:?}", details.platform)),
        palette.dim(format!("{:?}", details.cobrand)),
    )
}

fn flag(value: bool, palette: &ansi::Palette) -> String {
    if value { palette.paint("yes", ansi::GREEN) } else { palette.dim("no") }
}
