mod source;

use std::io::IsTerminal as _;
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use source::SourceFile;
use tracing_subscriber::EnvFilter;
use uvss_errors::Renderer;
use uvss_ide::LineSpans;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(version, about = "Check and inspect UVSS style sheets")]
struct Options {
    /// Log more; repeat for trace output. `UVSS_LOG` overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[arg(long, value_enum, default_value_t = Color::Auto, global = true)]
    color: Color,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Command {
    /// Report diagnostics; exits non-zero when any error is found.
    Check {
        #[arg(required = true)]
        paths: Vec<Utf8PathBuf>,
        /// Treat warnings as errors.
        #[arg(long)]
        deny_warnings: bool,
    },
    /// Print classified spans with line and column positions.
    Classify { path: Utf8PathBuf },
    /// Print the syntax tree.
    Tree { path: Utf8PathBuf },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("UVSS_LOG").unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn renderer(color: Color) -> Renderer {
    let styled = match color {
        Color::Auto => std::io::stderr().is_terminal(),
        Color::Always => true,
        Color::Never => false,
    };
    if styled { Renderer::styled() } else { Renderer::plain() }
}

fn check(paths: &[Utf8PathBuf], deny_warnings: bool, renderer: &Renderer) -> anyhow::Result<bool> {
    let (mut errors, mut warnings) = (0, 0);
    for path in paths {
        let file = SourceFile::load(path)?;
        for diagnostic in file.parse.diagnostics() {
            eprintln!("{}", diagnostic.render(renderer, file.path.as_str(), &file.text));
            if diagnostic.is_error() {
                errors += 1;
            } else {
                warnings += 1;
            }
        }
    }

    if errors + warnings > 0 {
        eprintln!("{errors} error(s), {warnings} warning(s)");
    }
    Ok(errors == 0 && (!deny_warnings || warnings == 0))
}

fn classify(path: &Utf8Path) -> anyhow::Result<()> {
    let file = SourceFile::load(path)?;
    let lines = LineSpans::new(&file.text);
    let spans = uvss_ide::classify(file.parse.root());
    for (line_span, span) in lines.spans(&spans) {
        let (start, end) = (line_span.start, line_span.end);
        println!(
            "{}:{}-{}:{} {:?} {:?}",
            start.line + 1,
            start.col + 1,
            end.line + 1,
            end.col + 1,
            span.classification,
            &file.text[span.range],
        );
    }
    Ok(())
}

fn tree(path: &Utf8Path) -> anyhow::Result<()> {
    let file = SourceFile::load(path)?;
    print!("{}", file.parse.root().debug_tree());
    for diagnostic in file.parse.diagnostics() {
        println!("{diagnostic}");
    }
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let options = Options::parse();
    init_logging(options.verbose);

    match options.command {
        Command::Check { paths, deny_warnings } => {
            let clean = check(&paths, deny_warnings, &renderer(options.color))?;
            Ok(if clean { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Classify { path } => classify(&path).map(|()| ExitCode::SUCCESS),
        Command::Tree { path } => tree(&path).map(|()| ExitCode::SUCCESS),
    }
}
