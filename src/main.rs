use clap::Parser;
use codepage_repair::{
    read_document, repair_with, spot_check, write_document, ByteRemapTable, RepairResult,
    DEFAULT_PHRASES, DEFAULT_REMAP, SPOT_CHECKS,
};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

/// Recover Armenian text from a document saved under the wrong 8-bit codepage.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Document to repair
    #[arg(default_value = "SHAHE97.SRC")]
    input: PathBuf,

    /// Where to write the UTF-8 result
    #[arg(short, long, default_value = "CORRECTED_SHAHE97.SRC")]
    output: PathBuf,

    /// Print the byte remap table and exit
    #[arg(long)]
    dump_table: bool,
}

fn dump_table(table: &ByteRemapTable) {
    for (byte, c) in table.iter() {
        let mark = if table.is_override(byte) { " *" } else { "" };
        println!("{:#04x}  {}  U+{:04X}{}", byte, c, c as u32, mark);
    }
}

fn run(args: &Args) -> RepairResult<()> {
    let raw = read_document(&args.input)?;
    let repaired = repair_with(&raw, &DEFAULT_REMAP, &DEFAULT_PHRASES);
    info!(
        "translated {} quoted segments ({} bytes remapped, {} unmapped)",
        repaired.stats.segments, repaired.stats.remapped, repaired.stats.fallback
    );
    let fixed: usize = repaired.phrase_hits.iter().sum();
    info!("phrase polish made {} replacements", fixed);
    write_document(&args.output, &repaired.text)?;
    for (word, found) in spot_check(&repaired.text, SPOT_CHECKS) {
        if found {
            info!("found {}", word);
        } else {
            warn!("{} not found in output, check it by hand", word);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.dump_table {
        dump_table(&DEFAULT_REMAP);
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
