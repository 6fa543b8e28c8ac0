// SPDX-License-Identifier: MPL-2.0
use image_preview::app::{self, Flags};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: image_preview [OPTIONS] LOCATION...

Arguments:
  LOCATION...          Image URLs or file paths, previewed in order

Options:
  --config-dir DIR     Directory holding settings.toml
  -v, --verbose        Log debug output
  -h, --help           Print this help";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => return usage_error(&err.to_string()),
    };

    let locations = match parse_locations(args.finish()) {
        Ok(locations) => locations,
        Err(message) => return usage_error(&message),
    };

    init_tracing(verbose);

    match app::run(Flags {
        locations,
        config_dir,
    }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "image preview exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_locations(args: Vec<OsString>) -> Result<Vec<String>, String> {
    let locations = args
        .into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| format!("location is not valid UTF-8: {}", arg.to_string_lossy()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if locations.is_empty() {
        return Err("at least one image location is required".into());
    }
    Ok(locations)
}

/// `RUST_LOG` directives win over the level picked by `--verbose`.
fn log_filter(verbose: bool, directives: &str) -> EnvFilter {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives)
}

fn init_tracing(verbose: bool) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, &directives))
        .init();
}

fn usage_error(message: &str) -> ExitCode {
    eprintln!("error: {message}\n\n{USAGE}");
    ExitCode::from(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_default_level() {
        let filter = log_filter(false, "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn verbose_sets_default_level() {
        assert_eq!(log_filter(true, "").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(false, "").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn parse_locations_requires_at_least_one() {
        assert!(parse_locations(Vec::new()).is_err());
        assert_eq!(
            parse_locations(vec!["a.png".into(), "https://example.com/b.jpg".into()]),
            Ok(vec!["a.png".to_string(), "https://example.com/b.jpg".to_string()])
        );
    }

    #[cfg(unix)]
    #[test]
    fn parse_locations_rejects_non_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec!["a.png".into(), OsString::from_vec(vec![b'b', 0xff, b'.', b'p'])];
        let err = parse_locations(args).unwrap_err();
        assert!(err.contains("not valid UTF-8"));
    }
}
