//! Option resolution
//!
//! Options come from three layers, later layers winning:
//! built-in defaults, an optional JSON config file, command-line flags.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use group_maker_core::{GroupOptions, GroupingMode};
use tracing::debug;

use crate::cli::InputArgs;
use crate::error::CliError;

/// Load options from a JSON file such as
/// `{"mode": "ukuran", "groupSize": 4, "trimEmpty": true}`
pub fn load_config(path: &Path) -> Result<GroupOptions, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the effective options for `args`
pub fn resolve_options(args: &InputArgs) -> Result<GroupOptions, CliError> {
    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => GroupOptions::default(),
    };
    let options = apply_flags(base, args);
    debug!(?options, "resolved options");
    Ok(options)
}

/// Overlay command-line flags on `options`
///
/// Without `--mode`, passing only `--size` selects size mode and passing
/// `--groups` selects count mode.
pub fn apply_flags(mut options: GroupOptions, args: &InputArgs) -> GroupOptions {
    if let Some(count) = args.groups {
        options.group_count = count;
    }
    if let Some(size) = args.size {
        options.group_size = size;
    }

    options.mode = match (args.mode, args.groups, args.size) {
        (Some(mode), _, _) => mode.into(),
        (None, None, Some(_)) => GroupingMode::Size,
        (None, Some(_), _) => GroupingMode::Count,
        (None, None, None) => options.mode,
    };

    if args.remove_duplicates {
        options.remove_duplicates = true;
    } else if args.no_remove_duplicates {
        options.remove_duplicates = false;
    }
    if args.trim_empty {
        options.trim_empty = true;
    } else if args.no_trim_empty {
        options.trim_empty = false;
    }
    if let Some(seed) = &args.seed {
        options.seed = Some(seed.clone());
    }
    options
}

/// Raw names text from `--input` or stdin
///
/// The final line terminator of the file is not a blank name and is removed.
pub fn read_names(args: &InputArgs) -> Result<String, CliError> {
    let mut text = match &args.input {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        })?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    strip_final_newline(&mut text);
    Ok(text)
}

/// Remove exactly one trailing `\n` or `\r\n`
fn strip_final_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}
