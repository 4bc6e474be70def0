use std::{io, process::ExitCode};

use clap::Parser;
use vaultchain::{
    cli::main::{MainArgs, exec_main, recognized_args, run_to_exit},
    trace::init_tracing,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = MainArgs::parse_from(recognized_args(std::env::args()));
    init_tracing(args.verbose);
    let code = run_to_exit(exec_main(args), &mut io::stderr()).await;
    ExitCode::from(code)
}
