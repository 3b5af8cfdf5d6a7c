//! Markdown index of published versions

use std::fmt::Write;

use crate::config::LATEST_ALIAS;
use crate::version::ordering::sort_labels_most_recent_first;
use crate::version::types::Version;

const HEADER: &str = "| Version | Documents |\n|:---:|---|\n";

/// Render the versions table, most recent first
pub fn render_index(versions: &[Version], has_latest: bool) -> String {
    render_index_labels(versions.iter().map(Version::to_string), has_latest)
}

/// Render the versions table from directory labels
///
/// Labels are sorted most recent first; labels that do not parse as versions
/// are listed last.
pub fn render_index_labels<I>(labels: I, has_latest: bool) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut labels: Vec<String> = labels.into_iter().collect();
    sort_labels_most_recent_first(&mut labels);

    let mut out = String::from(HEADER);
    if has_latest {
        push_row(&mut out, LATEST_ALIAS);
    }
    for label in &labels {
        push_row(&mut out, label);
    }
    out
}

fn push_row(out: &mut String, label: &str) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "| {label} | [API documentation]({label}) |");
}
