use clap::Parser;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Instruction source carrying the `INS_<opcode>_<mode>` markers.
    #[arg(default_value = "opcodes.go")]
    input: PathBuf,

    /// Log every emitted row to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Follow each row with the disassembly of a sample operand.
    #[arg(long)]
    samples: bool,

    /// Print the addressing mode catalog and exit.
    #[arg(long)]
    list_modes: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut writer = BufWriter::with_capacity(16 * 1024, stdout.lock());

    if args.list_modes {
        if let Err(error) = opgen::write_modes(&mut writer).and_then(|_| writer.flush()) {
            eprintln!("Could not write addressing modes: {error}");
            std::process::exit(1);
        }
        return;
    }

    let in_file = match std::fs::File::open(&args.input) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Could not read in file {}: {error}", args.input.display());
            std::process::exit(1);
        }
    };

    let reader = BufReader::new(in_file);
    let result = if args.samples {
        opgen::generate_with_samples(reader, &mut writer)
    } else {
        opgen::generate(reader, &mut writer)
    };
    if let Err(error) = result {
        tracing::error!(%error, "generation aborted");
        eprintln!("Generating failed in {}", args.input.display());
        eprintln!("{error}");
        std::process::exit(1);
    }
}
