use lsh::Interpreter;
use lsh::cli::Options;
use lsh::reader::{EditorReader, LineReader, StdinReader};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let options: Options = argh::from_env();
    init_logging(options.verbose);

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lsh: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> anyhow::Result<()> {
    let mut reader: Box<dyn LineReader> = if options.plain || !io::stdin().is_terminal() {
        Box::new(StdinReader::new(io::stdin().lock(), io::stdout()))
    } else {
        Box::new(EditorReader::new()?)
    };

    Interpreter::default()
        .with_prompt(options.prompt.as_str())
        .repl(reader.as_mut())
}

// RUST_LOG picks the filter; --verbose overrides it with debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
