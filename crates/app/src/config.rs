//! Command-line configuration for the huffpack tool.
//!
//! Hand-rolled argument parsing: a subcommand followed by flags. The demo
//! subcommand works with ZERO extra arguments, using a time-based seed that
//! is printed so runs are reproducible.

use std::path::PathBuf;

/// Parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compress a file into an archive
    Encode {
        input: PathBuf,
        output: PathBuf,
        /// Suppress the metrics summary
        quiet: bool,
    },

    /// Decompress an archive, to a file or stdout
    Decode {
        input: PathBuf,
        /// None = write decoded bytes to stdout
        output: Option<PathBuf>,
    },

    /// Generate sample data, round-trip it, verify, report
    Demo {
        /// None = derive from wall clock
        seed: Option<u64>,
        size_bytes: usize,
        /// Keep the intermediate archive at this path
        keep: Option<PathBuf>,
    },
}

impl Command {
    /// Parse a command from arguments (program name already stripped).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut args = args.iter();

        let subcommand = match args.next() {
            Some(s) => s.as_str(),
            None => return Err("missing subcommand (try --help)".to_string()),
        };

        match subcommand {
            "encode" => {
                let mut input: Option<PathBuf> = None;
                let mut output: Option<PathBuf> = None;
                let mut quiet = false;

                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--in" => {
                            input = Some(PathBuf::from(
                                args.next().ok_or("--in requires a path")?,
                            ));
                        }
                        "--out" => {
                            output = Some(PathBuf::from(
                                args.next().ok_or("--out requires a path")?,
                            ));
                        }
                        "--quiet" => quiet = true,
                        other => return Err(format!("unknown argument: {other}")),
                    }
                }

                Ok(Command::Encode {
                    input: input.ok_or("encode requires --in <PATH>")?,
                    output: output.ok_or("encode requires --out <PATH>")?,
                    quiet,
                })
            }

            "decode" => {
                let mut input: Option<PathBuf> = None;
                let mut output: Option<PathBuf> = None;

                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--in" => {
                            input = Some(PathBuf::from(
                                args.next().ok_or("--in requires a path")?,
                            ));
                        }
                        "--out" => {
                            output = Some(PathBuf::from(
                                args.next().ok_or("--out requires a path")?,
                            ));
                        }
                        other => return Err(format!("unknown argument: {other}")),
                    }
                }

                Ok(Command::Decode {
                    input: input.ok_or("decode requires --in <PATH>")?,
                    output,
                })
            }

            "demo" => {
                let mut seed: Option<u64> = None;
                let mut size_bytes: usize = 64 * 1024;
                let mut keep: Option<PathBuf> = None;

                while let Some(arg) = args.next() {
                    match arg.as_str() {
                        "--seed" => {
                            seed = Some(
                                args.next()
                                    .ok_or("--seed requires a number")?
                                    .parse()
                                    .map_err(|_| "invalid seed")?,
                            );
                        }
                        "--size" => {
                            size_bytes = args
                                .next()
                                .ok_or("--size requires a number")?
                                .parse()
                                .map_err(|_| "invalid size")?;
                        }
                        "--keep" => {
                            keep = Some(PathBuf::from(
                                args.next().ok_or("--keep requires a path")?,
                            ));
                        }
                        other => return Err(format!("unknown argument: {other}")),
                    }
                }

                Ok(Command::Demo {
                    seed,
                    size_bytes,
                    keep,
                })
            }

            "--help" | "-h" | "help" => {
                print_help();
                std::process::exit(0);
            }

            other => Err(format!("unknown subcommand: {other}")),
        }
    }
}

fn print_help() {
    println!("huffpack: byte-frequency prefix-code compressor");
    println!();
    println!("USAGE:");
    println!("    huffpack <SUBCOMMAND> [OPTIONS]");
    println!();
    println!("SUBCOMMANDS:");
    println!("    encode --in <PATH> --out <PATH> [--quiet]");
    println!("        Compress a file into an archive.");
    println!();
    println!("    decode --in <PATH> [--out <PATH>]");
    println!("        Decompress an archive. Without --out, decoded bytes");
    println!("        go to stdout.");
    println!();
    println!("    demo [--seed <N>] [--size <BYTES>] [--keep <PATH>]");
    println!("        Generate sample data, compress and decompress it,");
    println!("        verify the round trip, and print metrics.");
    println!("        Default size: 65536. Default seed: wall clock.");
    println!();
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack encode --in notes.txt --out notes.huff");
    println!("    huffpack decode --in notes.huff --out notes.txt");
    println!("    huffpack demo --seed 42 --size 1048576");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Command::from_args(&owned)
    }

    #[test]
    fn test_encode_args() {
        let command = parse(&["encode", "--in", "a.txt", "--out", "a.huff"]).unwrap();
        assert_eq!(
            command,
            Command::Encode {
                input: PathBuf::from("a.txt"),
                output: PathBuf::from("a.huff"),
                quiet: false,
            }
        );
    }

    #[test]
    fn test_encode_requires_paths() {
        assert!(parse(&["encode", "--in", "a.txt"]).is_err());
        assert!(parse(&["encode"]).is_err());
    }

    #[test]
    fn test_decode_defaults_to_stdout() {
        let command = parse(&["decode", "--in", "a.huff"]).unwrap();
        assert_eq!(
            command,
            Command::Decode {
                input: PathBuf::from("a.huff"),
                output: None,
            }
        );
    }

    #[test]
    fn test_demo_defaults() {
        let command = parse(&["demo"]).unwrap();
        assert_eq!(
            command,
            Command::Demo {
                seed: None,
                size_bytes: 64 * 1024,
                keep: None,
            }
        );
    }

    #[test]
    fn test_demo_with_seed_and_size() {
        let command = parse(&["demo", "--seed", "42", "--size", "1024"]).unwrap();
        assert_eq!(
            command,
            Command::Demo {
                seed: Some(42),
                size_bytes: 1024,
                keep: None,
            }
        );
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(parse(&["frobnicate"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_unknown_flag() {
        assert!(parse(&["demo", "--frobnicate"]).is_err());
    }
}
