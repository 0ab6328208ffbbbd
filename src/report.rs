//! Report files for checker runs.
//!
//! A report is the raw checker output, optionally preceded by a header that
//! records the command line and the flags it carried.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

/// Extension of report files.
pub const REPORT_EXTENSION: &str = "len_report";

/// Flags that stand alone.
const SWITCHES: &[&str] = &[
    "--print-offenders",
    "--print-matches",
    "--line-numbers",
    "--color",
    "--truncate",
    "--line-lengths",
    "--count-newlines",
    "--invert-colors",
    "--alternate-colors",
    "-p",
    "-P",
    "-n",
    "-c",
    "-r",
    "-l",
    "-N",
    "-i",
    "-a",
];

/// Flags followed by a value.
const VALUE_FLAGS: &[&str] = &[
    "--max",
    "--min",
    "--tab-width",
    "--file-color",
    "--file-color-alt",
    "--set-bad",
    "--set-good",
    "-m",
    "-M",
    "-t",
];

/// Report file name for a set of checked files: their base names joined by
/// `-`, plus the report extension.
pub fn file_name<P: AsRef<Path>>(files: &[P]) -> String {
    let names: Vec<String> = files
        .iter()
        .map(|f| {
            f.as_ref()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();
    format!("{}.{}", names.join("-"), REPORT_EXTENSION)
}

/// Header describing the command and its recognized flags.
pub fn header(binary: &str, args: &[String]) -> String {
    let mut out = String::from("Command: \n");
    out.push_str(binary);
    out.push(' ');
    out.push_str(&args.join(" "));
    out.push_str("\n\nFlags:\n");

    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        if SWITCHES.contains(&arg.as_str()) {
            out.push_str(&format!("\t{}\n", arg));
        } else if VALUE_FLAGS.contains(&arg.as_str()) {
            match iter.next() {
                Some(value) => out.push_str(&format!("\t{} {}\n", arg, value)),
                None => out.push_str(&format!("\t{}\n", arg)),
            }
        }
    }

    out.push('\n');
    out
}

/// Write a report to `path`.
pub fn save(path: &Path, output: &str, header: Option<&str>) -> io::Result<()> {
    let mut content = String::with_capacity(output.len() + header.map_or(0, str::len));
    if let Some(header) = header {
        content.push_str(header);
    }
    content.push_str(output);
    fs::write(path, content)?;
    info!(path = %path.display(), "saved report");
    Ok(())
}

/// Path of the report for `files` inside `dir`.
pub fn path_in<P: AsRef<Path>>(dir: &Path, files: &[P]) -> PathBuf {
    dir.join(file_name(files))
}
