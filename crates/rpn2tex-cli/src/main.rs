use anyhow::Context as _;
use clap::Parser;
use rpn2tex::diagnostic::ErrorFormatter;
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

/// Convert Reverse Polish Notation expressions to LaTeX.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path of the input file, or `-` to read from stdin.
    #[arg(default_value = "-")]
    input: PathBuf,

    /// The path of the output file. Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::trace!("CLI args = {:?}", args);

    let status = run(&args, io::stdin(), io::stdout(), io::stderr())?;
    Ok(ExitCode::from(status))
}

/// Convert the input named by `args` and return the process exit status.
fn run<R, W, E>(args: &Args, stdin: R, mut stdout: W, mut stderr: E) -> anyhow::Result<u8>
where
    R: Read,
    W: Write,
    E: Write,
{
    let input = read_input(&args.input, stdin)?;

    let latex = match rpn2tex::convert(&input) {
        Ok(latex) => latex,
        Err(err) => {
            tracing::debug!("conversion failed: {}", err);
            writeln!(stderr, "{}", ErrorFormatter::new(&input).format(&err))
                .context("failed to write to stderr")?;
            return Ok(1);
        }
    };

    match &args.output {
        Some(out_file) => {
            fs::write(out_file, format!("{}\n", latex)).with_context(|| {
                anyhow::anyhow!("failed to write the output to {}", out_file.display())
            })?;
            writeln!(stderr, "Generated: {}", out_file.display())
                .context("failed to write to stderr")?;
        }
        None => writeln!(stdout, "{}", latex).context("failed to write to stdout")?,
    }

    Ok(0)
}

fn read_input<R: Read>(path: &Path, stdin: R) -> anyhow::Result<String> {
    if path == Path::new("-") {
        io::read_to_string(stdin).context("failed to read from stdin")
    } else {
        fs::read_to_string(path)
            .with_context(|| anyhow::anyhow!("failed to read the input file {}", path.display()))
    }
}
