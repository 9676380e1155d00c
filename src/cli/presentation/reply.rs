//! Reply presentation: severity-prefixed blocks and machine JSON.
//!
//! Replies render in arrival order, one block each. The severity line names
//! the target node when the controller provided one, so fanned-out replies
//! stay attributable.

use crate::error::ClientError;
use crate::reply::{Outcome, Reply};
use owo_colors::OwoColorize;

/// Render replies as text blocks.
pub fn format_replies_text(replies: &[Reply], color: bool) -> String {
    let blocks: Vec<String> = replies
        .iter()
        .map(|reply| format_reply_block(reply, color))
        .collect();
    blocks.join("\n")
}

/// Render replies verbatim as pretty JSON.
pub fn format_replies_json(replies: &[Reply]) -> Result<String, ClientError> {
    serde_json::to_string_pretty(replies)
        .map_err(|e| ClientError::Internal(format!("failed to encode replies: {}", e)))
}

fn format_reply_block(reply: &Reply, color: bool) -> String {
    let mut block = severity_line(reply, color);
    block.push('\n');
    block.push_str(&indent(&reply.message));
    let sections = [
        ("Cause:", &reply.cause),
        ("Correction:", &reply.correction),
        ("Details:", &reply.details),
    ];
    for (title, body) in sections {
        if let Some(body) = body {
            block.push('\n');
            block.push_str(title);
            block.push('\n');
            block.push_str(&indent(body));
        }
    }
    block
}

fn severity_line(reply: &Reply, color: bool) -> String {
    let word = if reply.return_code.is_info() {
        "INFO"
    } else {
        match reply.outcome() {
            Outcome::Success => "SUCCESS",
            Outcome::Warning => "WARNING",
            Outcome::Error => "ERROR",
        }
    };
    let label = match reply.target_node() {
        Some(node) => format!("{} ({})", word, node),
        None => word.to_string(),
    };
    if !color {
        return format!("{}:", label);
    }
    if reply.return_code.is_info() {
        return format!("{}:", label.blue().bold());
    }
    match reply.outcome() {
        Outcome::Success => format!("{}:", label.green().bold()),
        Outcome::Warning => format!("{}:", label.yellow().bold()),
        Outcome::Error => format!("{}:", label.red().bold()),
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
