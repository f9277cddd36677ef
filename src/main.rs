use std::process;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use precompress::{
    cli::Cli, compressor::Compressor, stats::RunStats, walker::Walker, Config, Result,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(message) = cli.validate() {
        eprintln!("❌ Compression failed: {}", message);
        process::exit(1);
    }

    let config = cli.into_config();
    println!("\n🗜️  Compressing files in {}...\n", config.root.display());
    info!(root = %config.root.display(), "starting compression run");

    match run(config) {
        Ok(stats) => {
            println!(
                "\n✅ Compression complete! {} files, gzip saved {:.1}%, brotli saved {:.1}%\n",
                stats.files(),
                stats.gzip_ratio() * 100.0,
                stats.brotli_ratio() * 100.0,
            );
        }
        Err(error) => {
            eprintln!("\n❌ Compression failed: {}\n", error);
            process::exit(1);
        }
    }
}

fn run(config: Config) -> Result<RunStats> {
    let progress = if config.show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap(),
        );
        Some(pb)
    } else {
        None
    };

    let walker = Walker::new(config);
    let stats = walker.run(&Compressor::new(), progress.as_ref())?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    Ok(stats)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
