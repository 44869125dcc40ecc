//! huffpack: command-line front end for the prefix-code compressor.
//!
//! Three subcommands: `encode` a file into an archive, `decode` an archive
//! back (to a file or stdout), and `demo`, which generates sample data,
//! round-trips it through the codec, and verifies the result with a CRC32
//! comparison.

mod config;
mod input_gen;

use config::Command;
use huffpack_core::freq::FrequencyTable;
use huffpack_core::metrics::Metrics;
use huffpack_core::{decode_from_file, encode_to_file, encode_to_vec};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match Command::from_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run `huffpack --help` for usage");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> huffpack_core::Result<()> {
    match command {
        Command::Encode {
            input,
            output,
            quiet,
        } => encode(&input, &output, quiet),
        Command::Decode { input, output } => decode(&input, output.as_deref()),
        Command::Demo {
            seed,
            size_bytes,
            keep,
        } => demo(seed, size_bytes, keep),
    }
}

fn encode(input: &std::path::Path, output: &std::path::Path, quiet: bool) -> huffpack_core::Result<()> {
    let data = fs::read(input)?;

    let mut metrics = Metrics::new();
    metrics.input_bytes = data.len() as u64;
    metrics.distinct_symbols = FrequencyTable::from_bytes(&data).distinct();

    let archive = encode_to_vec(&data)?;
    metrics.archive_bytes = archive.len() as u64;
    fs::write(output, &archive)?;
    metrics.complete();

    if !quiet {
        metrics.print_summary();
    }
    Ok(())
}

fn decode(input: &std::path::Path, output: Option<&std::path::Path>) -> huffpack_core::Result<()> {
    let decoded = decode_from_file(input)?;
    match output {
        Some(path) => fs::write(path, &decoded)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&decoded)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn demo(seed: Option<u64>, size_bytes: usize, keep: Option<PathBuf>) -> huffpack_core::Result<()> {
    // Explicit seed, or wall clock so every bare run differs.
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|t| t.as_millis() as u64)
            .unwrap_or(0)
    });
    println!("Seed: {seed}");
    println!("Size: {size_bytes} bytes");
    println!();

    let data = input_gen::generate_sample_data(seed, size_bytes);

    let archive_path = keep
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(format!("huffpack-demo-{seed}.huff")));

    let mut metrics = Metrics::new();
    metrics.input_bytes = data.len() as u64;
    metrics.distinct_symbols = FrequencyTable::from_bytes(&data).distinct();

    encode_to_file(&data, &archive_path)?;
    metrics.archive_bytes = fs::metadata(&archive_path)?.len();

    let decoded = decode_from_file(&archive_path)?;
    metrics.complete();

    if keep.is_none() {
        fs::remove_file(&archive_path).ok();
    } else {
        println!("Archive kept at {}", archive_path.display());
    }

    let input_crc = crc32(&data);
    let output_crc = crc32(&decoded);

    metrics.print_summary();
    println!();

    if input_crc == output_crc && data == decoded {
        println!("✓ round trip verified (crc32 {input_crc:#010x})");
        Ok(())
    } else {
        println!("✗ round trip FAILED (crc32 {input_crc:#010x} != {output_crc:#010x})");
        std::process::exit(1);
    }
}

fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
