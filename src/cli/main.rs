use std::{io, path::PathBuf};

use clap::Parser;

use crate::cx::{ChainConfig, init_chain_cx};

#[derive(Debug, Clone, Parser)]
pub struct MainArgs {
    /// print debug detail while the chain runs
    #[clap(long, short, overrides_with = "verbose")]
    pub verbose: bool,
    /// reserved, nothing consumes it yet
    #[clap(long, short, overrides_with = "input")]
    pub input: Option<PathBuf>,
    /// reserved, nothing consumes it yet
    #[clap(long, short, overrides_with = "output")]
    pub output: Option<PathBuf>,
}

/// Drops every token the option table does not recognize, so unknown flags
/// are ignored instead of errors and a recognized flag keeps its effect no
/// matter where it sits in the argument vector. The first token (program
/// name) passes through. A value-taking flag with no value is dropped too.
pub fn recognized_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut kept = vec![];
    kept.extend(args.next());
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => kept.push(arg),
            "--input" | "-i" | "--output" | "-o" => {
                if let Some(value) = args.next_if(|next| !next.starts_with('-')) {
                    kept.push(arg);
                    kept.push(value);
                }
            }
            _ => {
                let inline_value = arg
                    .split_once('=')
                    .is_some_and(|(key, _)| matches!(key, "--input" | "--output"));
                if inline_value {
                    kept.push(arg);
                }
            }
        }
    }
    kept
}

pub async fn exec_main(args: MainArgs) -> anyhow::Result<()> {
    // only verbose reaches the chain config
    let config = ChainConfig {
        verbose: args.verbose,
    };
    let chain = init_chain_cx(config);
    chain.execute().await?;
    Ok(())
}

/// Awaits the one entry future and maps its result to the process exit code.
/// A failure is written to the error stream as-is and is uniformly fatal.
pub async fn run_to_exit<F, W>(entry: F, err_stream: &mut W) -> u8
where
    F: Future<Output = anyhow::Result<()>>,
    W: io::Write,
{
    match entry.await {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(err_stream, "{err:?}");
            1
        }
    }
}
