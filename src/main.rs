//! sanitext - Detect and sanitize deceptive Unicode in text
//!
//! Flags homoglyphs and invisible characters and rewrites text so it only
//! contains allowed characters.
//!
//! # Usage
//!
//! ```bash
//! # Sanitize a string against printable ASCII
//! sanitext --string "Thіs іs а test."
//!
//! # Sanitize stdin, allowing a few extra characters
//! cat notes.txt | sanitext --allow-chars "αβñç"
//!
//! # Decide per character
//! sanitext --interactive --string "Café ☯"
//! ```

use std::env;
use std::process;

use sanitext::{
    audit::{AuditEntry, AuditLogger},
    config::{BasePolicy, Config},
    engine::Mode,
    input::{self, TerminalResolver},
    output::{format_detected, ReportMode, SanitizeReport},
    AllowedSet, SanitextError, SanitizeEngine,
};

/// Print version information
fn print_version() {
    println!("sanitext {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"sanitext - Detect and sanitize deceptive Unicode in text

USAGE:
    sanitext [OPTIONS]

OPTIONS:
    -h, --help                Print this help message
    -V, --version             Print version information
    -s, --string TEXT         Process TEXT instead of reading stdin
    -d, --detect              Only report characters outside the allowed set
    -v, --verbose             Show input, detected characters and output
    -n, --normalize           Print the policy-independent normalized form
    -i, --interactive         Decide per disallowed character (requires --string)
    -b, --base POLICY         Base policy: ascii_printable, full_unicode
    -u, --allow-unicode       Allow every Unicode character (same as --base full_unicode)
    -a, --allow-chars CHARS   Allow additional characters
    -e, --allow-emoji         Allow single code point emoji
    -f, --allow-file PATH     Allow the characters contained in PATH
    -c, --config PATH         Path to config file
        --json                Print the report as JSON

CONFIG:
    ~/.config/sanitext/config.toml or /etc/sanitext/config.toml
"#
    );
}

/// Parse command line arguments
#[derive(Default)]
struct Args {
    help: bool,
    version: bool,
    string: Option<String>,
    detect: bool,
    verbose: bool,
    normalize: bool,
    interactive: bool,
    allow_unicode: bool,
    base: Option<BasePolicy>,
    allow_chars: Option<String>,
    allow_emoji: bool,
    allow_file: Option<String>,
    config_path: Option<String>,
    json: bool,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-V" | "--version" => result.version = true,
                "-d" | "--detect" => result.detect = true,
                "-v" | "--verbose" => result.verbose = true,
                "-n" | "--normalize" => result.normalize = true,
                "-i" | "--interactive" => result.interactive = true,
                "-u" | "--allow-unicode" => result.allow_unicode = true,
                "-e" | "--allow-emoji" => result.allow_emoji = true,
                "--json" => result.json = true,
                "-s" | "--string" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.string = Some(args[i].clone());
                    }
                }
                "-b" | "--base" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.base = BasePolicy::from_str(&args[i]);
                        if result.base.is_none() {
                            eprintln!("Warning: unknown base policy: {}", args[i]);
                        }
                    }
                }
                "-a" | "--allow-chars" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.allow_chars = Some(args[i].clone());
                    }
                }
                "-f" | "--allow-file" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.allow_file = Some(args[i].clone());
                    }
                }
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--string=") => {
                    result.string = Some(arg.trim_start_matches("--string=").to_string());
                }
                arg if arg.starts_with("--allow-chars=") => {
                    result.allow_chars = Some(arg.trim_start_matches("--allow-chars=").to_string());
                }
                arg if arg.starts_with("--allow-file=") => {
                    result.allow_file = Some(arg.trim_start_matches("--allow-file=").to_string());
                }
                arg if arg.starts_with("--config=") => {
                    result.config_path = Some(arg.trim_start_matches("--config=").to_string());
                }
                other => eprintln!("Warning: ignoring unknown argument: {}", other),
            }
            i += 1;
        }

        result
    }

    /// Apply command line overrides on top of the loaded config
    fn apply(&self, config: &mut Config) {
        if let Some(base) = self.base {
            config.policy.base = base;
        }
        if self.allow_unicode {
            config.policy.base = BasePolicy::FullUnicode;
        }
        if let Some(ref chars) = self.allow_chars {
            config.policy.extra_chars.push_str(chars);
        }
        if self.allow_emoji {
            config.policy.allow_emoji = true;
        }
        if let Some(ref path) = self.allow_file {
            config.policy.extra_file = Some(path.clone());
        }
        if self.interactive {
            config.interactive.enabled = true;
        }
    }
}

fn fail(logger: &mut AuditLogger, mode: ReportMode, input: &str, err: &SanitextError) -> ! {
    if let Err(e) = logger.log(&AuditEntry::error(mode, input, err.to_string())) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }
    eprintln!("Error: {}", err);
    process::exit(1);
}

fn print_report(report: &SanitizeReport, args: &Args) {
    if args.json {
        println!("{}", report.to_json());
        return;
    }

    let output = match report.output {
        Some(ref output) => output,
        None => {
            println!("Detected: {}", format_detected(&report.disallowed));
            return;
        }
    };

    if args.verbose {
        println!("Input: {}", report.input);
        println!("Detected: {}", format_detected(&report.disallowed));
        println!("Output: {}", output);
    } else {
        println!("{}", output);
    }

    if !report.changed {
        eprintln!("No changes!");
    }
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    // Load configuration
    let mut config = match args.config_path {
        Some(ref path) => Config::load_from(&Config::expand_path(path)).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => Config::load(),
    };
    args.apply(&mut config);

    let mode = if args.detect {
        ReportMode::Detect
    } else if args.normalize {
        ReportMode::Normalize
    } else if config.interactive.enabled {
        ReportMode::Interactive
    } else {
        ReportMode::Deterministic
    };

    let audit_path = if config.general.audit_log {
        config.audit_path()
    } else {
        None
    };
    let mut logger = AuditLogger::new(audit_path.as_deref());

    // Prompts read stdin, so the text has to come from the command line
    if mode == ReportMode::Interactive && args.string.is_none() {
        eprintln!("Error: --interactive requires --string");
        process::exit(1);
    }

    // The allowed set is built before any text is touched
    let allowed = match AllowedSet::from_policy(&config.policy) {
        Ok(allowed) => allowed,
        Err(e) => fail(&mut logger, mode, args.string.as_deref().unwrap_or(""), &e),
    };

    let text = match input::read_text(args.string.clone()) {
        Ok(text) => text,
        Err(SanitextError::EmptyInput) => {
            eprintln!("Error: No text provided.");
            process::exit(1);
        }
        Err(e) => fail(&mut logger, mode, "", &e),
    };

    let engine = SanitizeEngine::new(allowed);
    let report = match mode {
        ReportMode::Detect => engine.detect_report(&text),
        ReportMode::Normalize => engine.normalize_report(&text),
        ReportMode::Interactive => {
            let mut resolver = TerminalResolver::stdio();
            engine.report(&text, Mode::Interactive(&mut resolver))
        }
        ReportMode::Deterministic => engine.report(&text, Mode::Deterministic),
    };

    if let Err(e) = logger.log_report(&report) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    print_report(&report, &args);
}
