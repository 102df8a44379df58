use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "errors-collector",
    version,
    about = "Collects Solidity custom errors into a single generated contract"
)]
pub(crate) struct Cli {
    /// Directory scanned recursively for `.sol` files.
    #[arg(value_name = "SOLIDITY_DIR")]
    pub(crate) source_dir: std::path::PathBuf,
    /// Generated contract path; the contract is named after its file stem.
    #[arg(value_name = "OUTPUT_FILE")]
    pub(crate) output: std::path::PathBuf,
    /// Log pipeline progress to stderr.
    #[arg(short, long)]
    pub(crate) verbose: bool,
    /// Print a JSON summary of the run instead of the plain message.
    #[arg(long)]
    pub(crate) report: bool,
}
