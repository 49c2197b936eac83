//! Interactive session
//!
//! Reads one command per line and mirrors the web form's buttons:
//! `generate`, `reshuffle`, `undo`, `redo`, `show [text|csv|json]`,
//! `status`, `help`, `quit`.

use std::io::{BufRead, Write};

use group_maker_core::{ExportFormat, GroupMaker, GroupOptions, GroupSet, RandomSource};
use tracing::{debug, warn};

use crate::error::CliError;

const HELP: &str = "\
commands:
  generate            generate groups from the loaded names
  reshuffle           generate again with the same input
  undo                go back to the previous result
  redo                go forward to the next result
  show [text|csv|json] print the current result
  status              show history position
  help                this message
  quit                leave the session";

/// Parsed session command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionCommand {
    Generate,
    Reshuffle,
    Undo,
    Redo,
    Show(ExportFormat),
    Status,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<SessionCommand> {
    let mut words = line.split_whitespace();
    let command = match words.next()? {
        "generate" | "g" => SessionCommand::Generate,
        "reshuffle" | "r" => SessionCommand::Reshuffle,
        "undo" | "u" => SessionCommand::Undo,
        "redo" => SessionCommand::Redo,
        "show" | "s" => SessionCommand::Show(match words.next() {
            None | Some("text") => ExportFormat::Text,
            Some("csv") => ExportFormat::Csv,
            Some("json") => ExportFormat::Json,
            Some(_) => return None,
        }),
        "status" => SessionCommand::Status,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Drive `maker` from `reader` until `quit` or end of input
///
/// Grouping errors are reported to `writer` and the session continues.
pub fn run_session<S, R, W>(
    maker: &mut GroupMaker<S>,
    names: &str,
    options: &GroupOptions,
    reader: R,
    mut writer: W,
) -> Result<(), CliError>
where
    S: RandomSource,
    R: BufRead,
    W: Write,
{
    writeln!(writer, "type `help` for commands")?;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            warn!(input = %line, "unknown session command");
            writeln!(writer, "unknown command: {}", line.trim())?;
            continue;
        };
        debug!(?command, "session command");

        match command {
            SessionCommand::Generate => match maker.generate(names, options) {
                Ok(groups) => write_groups(&mut writer, groups, ExportFormat::Text)?,
                Err(e) => writeln!(writer, "error: {}", e)?,
            },
            SessionCommand::Reshuffle => match maker.reshuffle() {
                Ok(groups) => write_groups(&mut writer, groups, ExportFormat::Text)?,
                Err(e) => writeln!(writer, "error: {}", e)?,
            },
            SessionCommand::Undo => match maker.undo() {
                Some(groups) => write_groups(&mut writer, groups, ExportFormat::Text)?,
                None => writeln!(writer, "nothing to undo")?,
            },
            SessionCommand::Redo => match maker.redo() {
                Some(groups) => write_groups(&mut writer, groups, ExportFormat::Text)?,
                None => writeln!(writer, "nothing to redo")?,
            },
            SessionCommand::Show(format) => match maker.current() {
                Some(groups) => write_groups(&mut writer, groups, format)?,
                None => writeln!(writer, "no groups yet")?,
            },
            SessionCommand::Status => {
                let history = maker.history();
                let position = history.cursor().map_or(0, |cursor| cursor + 1);
                writeln!(
                    writer,
                    "result {} of {} (undo: {}, redo: {})",
                    position,
                    history.len(),
                    yes_no(maker.can_undo()),
                    yes_no(maker.can_redo())
                )?;
            }
            SessionCommand::Help => writeln!(writer, "{}", HELP)?,
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

fn write_groups<W: Write>(
    writer: &mut W,
    groups: &GroupSet,
    format: ExportFormat,
) -> Result<(), CliError> {
    let rendered = format.render(groups)?;
    write!(writer, "{}", rendered)?;
    if format == ExportFormat::Json {
        writeln!(writer)?;
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
