//! Markdown report generation
//!
//! The report is Markdown with inline HTML so avatars can be laid out in a
//! grid: a header for the subject, then a followers section and a following
//! section, each with a count badge and a table of avatar cells.

use crate::model::{FollowGraph, UserRecord};

/// Number of cells per table row
pub const GRID_COLUMNS: usize = 4;

/// Formats the whole report
pub fn format_report(graph: &FollowGraph) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "## {}\n<img src='{}' width='120' />\n",
        graph.profile.login, graph.profile.avatar_url
    ));
    md.push_str(&format!(
        "## Followers <kbd>{}</kbd>\n{}\n",
        graph.followers.len(),
        format_table(&graph.followers)
    ));
    md.push_str(&format!(
        "## Following <kbd>{}</kbd>\n{}\n",
        graph.following.len(),
        format_table(&graph.following)
    ));

    md
}

/// Formats users as an HTML table of [`GRID_COLUMNS`] cells per row
///
/// The last row holds whatever is left over; it is not padded.
pub fn format_table(users: &[UserRecord]) -> String {
    let mut table = String::from("<table>\n");

    for row in users.chunks(GRID_COLUMNS) {
        table.push_str("<tr>");
        for user in row {
            table.push_str(&format!(
                "<td width='150' align='center'>\n{}\n</td>\n",
                format_user(user)
            ));
        }
        table.push_str("</tr>");
    }

    table.push_str("</table>");
    table
}

/// Formats one user as a linked avatar with the login underneath
pub fn format_user(user: &UserRecord) -> String {
    format!(
        "<a href=\"{}\">\n<img src=\"{}\" width=\"50\">\n<br />\n{}\n</a>",
        user.profile_url, user.avatar_url, user.login
    )
}
