//! Tagmark CLI - expand placeholder tags into rich text markup

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use tagmark::{
    check_markup,
    diagnostics::{format_diagnostics, Diagnostic, DiagnosticLevel},
    format_with_diagnostics, tag, wrap_with_diagnostics, TagSet,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tagmark")]
#[command(version)]
#[command(about = "Tagmark - placeholder tag expansion engine for rich text markup", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Check mode - validate tag structure without expanding
    #[arg(long)]
    check: bool,

    /// Use colored output for diagnostics
    #[arg(long, default_value_t = true)]
    color: bool,

    /// Strict mode: exit with error if any warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Validate tag structure without expanding
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Expand tags in a file (default action)
    Format {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Wrap a piece of text in a single tag, one level deep
    Wrap {
        /// Tag name
        tag: String,

        /// Content to wrap
        content: String,
    },

    /// List the built-in tag definitions
    Tags,

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let input = read_input(cli.input_file.as_deref())?;

    // If check mode, analyze and report issues
    if cli.check {
        let result = check_markup(&input);
        println!("{}", format_diagnostics(&result, cli.color));

        if result.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let out = format_with_diagnostics(&input);

    if !cli.quiet && out.has_warnings() {
        print_warnings_to_stderr(&out.warnings, cli.color);
    }

    if cli.strict && out.has_warnings() {
        eprintln!("Error: {} warning(s) in strict mode", out.warnings.len());
        std::process::exit(1);
    }

    write_output(cli.output.as_deref(), &out.content, out.warnings.len())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Check { input, no_color } => {
            let content = read_input(input.as_deref())?;
            let result = check_markup(&content);
            println!("{}", format_diagnostics(&result, !no_color));

            if result.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Format { input, output } => {
            let content = read_input(input.as_deref())?;
            let out = format_with_diagnostics(&content);

            if out.has_warnings() {
                print_warnings_to_stderr(&out.warnings, true);
            }

            write_output(output.as_deref(), &out.content, out.warnings.len())?;
        }

        Commands::Wrap { tag, content } => {
            let out = wrap_with_diagnostics(&tag, &content);
            if out.has_warnings() {
                print_warnings_to_stderr(&out.warnings, true);
            }
            println!("{}", out.content);
        }

        Commands::Tags => {
            let set = TagSet::defaults();
            let mut names: Vec<_> = set.names().collect();
            names.sort_unstable();

            for name in names {
                // Defaults always resolve; skip quietly if one ever doesn't
                if let Some(def) = tag(name) {
                    if def.is_alias_of(name) {
                        println!("{:<12} (pass-through)", name);
                    } else {
                        println!("{:<12} {} ... {}", name, def.open, def.close);
                    }
                }
            }
        }

        Commands::Info => {
            println!("Tagmark - placeholder tag expansion engine");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  - Innermost-first tag expansion to a fixed point");
            println!("  - Well-formedness checking with precise diagnostics");
            println!("  - Circular-definition rejection at startup");
            println!("  - Data-driven tag table (no code change to add tags)");
            println!();
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str, warning_count: usize) -> io::Result<()> {
    match path {
        Some(p) => {
            let mut file = fs::File::create(p)?;
            writeln!(file, "{}", content)?;
            if warning_count == 0 {
                eprintln!("✓ Output written to: {}", p);
            } else {
                eprintln!("⚠ Output written to: {} ({} warning(s))", p, warning_count);
            }
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

/// Print warnings to stderr with optional color coding.
#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[Diagnostic], use_color: bool) {
    eprintln!();
    eprintln!(
        "{}Warnings ({}):{}",
        if use_color { "\x1b[33m" } else { "" },
        warnings.len(),
        if use_color { "\x1b[0m" } else { "" }
    );
    eprintln!();

    for diag in warnings {
        let color = if use_color {
            match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",
                DiagnosticLevel::Warning => "\x1b[33m",
                DiagnosticLevel::Info => "\x1b[34m",
            }
        } else {
            ""
        };
        let reset = if use_color { "\x1b[0m" } else { "" };

        eprintln!("  {}[{}]{} {}", color, diag.level, reset, diag.message);
    }
    eprintln!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tagmark --features cli");
    eprintln!("  tagmark [OPTIONS] [INPUT_FILE]");
}
