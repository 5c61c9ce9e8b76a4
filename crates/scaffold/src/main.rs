use clap::Parser;
use scaffold::{Args, execute, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let _guard = init_logging(args.log_dir.as_deref(), &args.log_level)?;

    let output = execute(&args)?;
    print!("{output}");

    tracing::info!("Scaffold predictor finished");
    Ok(())
}
