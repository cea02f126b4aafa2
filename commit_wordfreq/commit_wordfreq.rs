use clap::Parser;
use commit_wordfreq::{analyze, AnalyzerConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use log::debug;
use std::path::PathBuf;

/// Show the most used words in a file of commit messages
#[derive(Parser, Debug)]
#[command(name = "commit_wordfreq", about, long_about = None, disable_version_flag = true)]
struct Args {
    /// File of commit messages
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to save the report
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl From<Args> for AnalyzerConfig {
    fn from(args: Args) -> Self {
        AnalyzerConfig::new(args.input, args.output)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AnalyzerConfig::from(Args::parse());
    if let Err(e) = analyze(&config) {
        debug!("analysis failed: {:?}", e);
        println!("{}", e);
    }
}
