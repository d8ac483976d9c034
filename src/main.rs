use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Once;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use detronade::{CompilationUnit, MessageReport, RenderOptions, repl};

#[derive(Parser, Debug)]
#[command(name = "detronade", about = "Tokenize detronade source and report diagnostics")]
struct Cli {
    /// Source file to tokenize (omit for REPL)
    file: Option<PathBuf>,

    /// Print the tokens after a successful scan
    #[arg(long)]
    dump_tokens: bool,

    /// Output format for tokens and messages
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// When to color diagnostics
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Unannotated source lines shown around each excerpt
    #[arg(long, default_value_t = 0)]
    context: usize,

    /// Render diagnostics with miette's graphical handler
    #[arg(long)]
    fancy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            Self::Auto => {
                std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            Self::Always => true,
            Self::Never => false,
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=detronade=debug` or `RUST_LOG=detronade=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn report_messages(unit: &CompilationUnit, cli: &Cli, options: &RenderOptions) {
    if cli.fancy {
        for message in &unit.messages {
            let report = MessageReport::new(message, &unit.name, &unit.source_text);
            eprintln!("{:?}", miette::Report::new(report));
        }
    } else {
        eprint!("{}", unit.render_messages(options));
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = RenderOptions {
        color: cli.color.enabled(),
        context: cli.context,
    };

    let Some(path) = cli.file.as_ref() else {
        repl::run_repl(&options).context("run REPL")?;
        return Ok(());
    };

    let mut unit = CompilationUnit::from_file(path)
        .with_context(|| format!("read source file '{}'", path.display()))?;
    unit.compile();

    if cli.format == "json" {
        let json = serde_json::to_string_pretty(&unit).context("serialize unit to JSON")?;
        println!("{json}");
    } else {
        report_messages(&unit, &cli, &options);
        if cli.dump_tokens && unit.success {
            for token in &unit.tokens {
                println!("{token}");
            }
        }
    }

    if !unit.success {
        let errors = unit.messages.iter().filter(|m| m.severity.is_fatal()).count();
        bail!("{errors} error(s)");
    }
    Ok(())
}
