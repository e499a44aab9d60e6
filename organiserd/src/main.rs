//! # Organiser Daemon
//!
//! Main entry point for the virtual file system organiser.

use organiserd::{logging, OrganiserConfig, OrganiserRuntime};
use std::env;
use std::fs;
use std::io;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("organiserd");

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });

    logging::init(config.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runtime =
        OrganiserRuntime::new(config, stdin.lock(), stdout.lock()).unwrap_or_else(|e| {
            eprintln!("Failed to create runtime: {}", e);
            process::exit(1);
        });

    if let Err(e) = runtime.run() {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<OrganiserConfig, String> {
    let mut config = OrganiserConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_path = &args[i];
                let script_text = fs::read_to_string(script_path)
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.script = Some(script_text);
            }
            "--max-steps" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --max-steps".to_string());
                }
                config.max_steps = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid max-steps value: {}", args[i]))?;
            }
            "--quiet" | "-q" => {
                config.quiet = true;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                print_usage(args.first().map(String::as_str).unwrap_or("organiserd"));
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --script <FILE>      Run commands from a script instead of stdin");
    eprintln!("  --max-steps <N>          Maximum commands to run (0 = unlimited)");
    eprintln!("  -q, --quiet              No banner, no prompt");
    eprintln!("  -v, --verbose            Debug logging on stderr (RUST_LOG overrides)");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script demos/organise.fscript --quiet", program);
    eprintln!("  echo 'mkdir docs' | {} -q", program);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("organiserd")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_parse_no_args() {
        let config = parse_args(&args(&[])).unwrap();
        assert!(config.script.is_none());
        assert_eq!(config.max_steps, 0);
        assert!(!config.quiet);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_flags() {
        let config = parse_args(&args(&["-q", "--verbose", "--max-steps", "5"])).unwrap();
        assert!(config.quiet);
        assert!(config.verbose);
        assert_eq!(config.max_steps, 5);
    }

    #[test]
    fn test_parse_bad_max_steps() {
        let err = parse_args(&args(&["--max-steps", "many"])).unwrap_err();
        assert_eq!(err, "Invalid max-steps value: many");
        assert!(parse_args(&args(&["--max-steps"])).is_err());
    }

    #[test]
    fn test_parse_missing_script_file() {
        let err = parse_args(&args(&["--script", "/nonexistent/organise.fscript"])).unwrap_err();
        assert!(err.starts_with("Failed to read script file"));
    }

    #[test]
    fn test_parse_unknown_option() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert_eq!(err, "Unknown option: --frobnicate");
    }
}
