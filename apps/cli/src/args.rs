// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command line arguments.

use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: surfvol <INPUT_DIR> [options]

Triangulates every point file in INPUT_DIR, writes one OBJ mesh per file and
logs the volume under each surface to a timestamped CSV file.

Options:
  --output <DIR>    Mesh output directory (env SURFVOL_OUTPUT_DIR, default ./output)
  --log-dir <DIR>   Run log directory (env SURFVOL_LOG_DIR, default ./volumes)
  --json            Print the run report as JSON on stdout
  -h, --help        Show this help";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(RunArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub input_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub json: bool,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut input_dir: Option<PathBuf> = None;
    let mut output_dir = None;
    let mut log_dir = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--output" => {
                let value = args.next().ok_or("--output needs a directory")?;
                output_dir = Some(PathBuf::from(value));
            }
            "--log-dir" => {
                let value = args.next().ok_or("--log-dir needs a directory")?;
                log_dir = Some(PathBuf::from(value));
            }
            "--json" => json = true,
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            other => {
                if input_dir.is_some() {
                    return Err(format!("Unexpected argument: {}", other));
                }
                input_dir = Some(PathBuf::from(other));
            }
        }
    }

    let input_dir = input_dir.ok_or("Missing required INPUT_DIR argument")?;

    Ok(Command::Run(RunArgs {
        input_dir,
        output_dir,
        log_dir,
        json,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_input_dir_only() {
        let cmd = parse(&["data"]).unwrap();
        assert_eq!(
            cmd,
            Command::Run(RunArgs {
                input_dir: PathBuf::from("data"),
                output_dir: None,
                log_dir: None,
                json: false,
            })
        );
    }

    #[test]
    fn test_all_options() {
        let cmd = parse(&["--output", "meshes", "data", "--log-dir", "logs", "--json"]).unwrap();
        match cmd {
            Command::Run(run) => {
                assert_eq!(run.input_dir, PathBuf::from("data"));
                assert_eq!(run.output_dir, Some(PathBuf::from("meshes")));
                assert_eq!(run.log_dir, Some(PathBuf::from("logs")));
                assert!(run.json);
            }
            Command::Help => panic!("expected run command"),
        }
    }

    #[test]
    fn test_missing_input_dir() {
        assert!(parse(&[]).unwrap_err().contains("INPUT_DIR"));
        assert!(parse(&["--json"]).is_err());
    }

    #[test]
    fn test_option_without_value() {
        assert!(parse(&["data", "--output"]).is_err());
    }

    #[test]
    fn test_unknown_option_and_extra_argument() {
        assert!(parse(&["data", "--fast"]).unwrap_err().contains("--fast"));
        assert!(parse(&["a", "b"]).unwrap_err().contains("b"));
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["data", "--help"]).unwrap(), Command::Help);
    }
}
