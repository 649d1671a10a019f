use clap::Parser;
use dns_forwarding_inspector::config::Args;
use dns_forwarding_inspector::logging::init_logging;
use std::error::Error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    if let Err(e) = init_logging(args.debug) {
        eprintln!("Warning: {e}");
    }
    log::info!("#Start main()");

    match dns_forwarding_inspector::run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if args.debug {
                let mut source = e.source();
                while let Some(cause) = source {
                    eprintln!("  caused by: {cause}");
                    source = cause.source();
                }
                eprintln!("{e:#?}");
            }
            ExitCode::FAILURE
        }
    }
}
