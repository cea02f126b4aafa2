use crate::frequency::is_bug_related;

/// First line of a commit messages dump.
pub const DUMP_HEADER: &str = "==== Commit Messages ====";
const COMMIT_ID_PREFIX: &str = "Commit ID: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub id: String,
    pub message: String,
}

/// Split a commit messages dump into its `Commit ID:` blocks.
///
/// Anything before the first block (the dump header) is skipped. A message
/// runs until the next `Commit ID:` line and is trimmed, so blank lines
/// inside a message are kept.
pub fn parse_commits(text: &str) -> Vec<CommitMessage> {
    let mut commits = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if let Some(id) = line.strip_prefix(COMMIT_ID_PREFIX) {
            if let Some((id, body)) = current.take() {
                commits.push(finish(id, &body));
            }
            current = Some((id.trim().to_string(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    if let Some((id, body)) = current {
        commits.push(finish(id, &body));
    }
    commits
}

fn finish(id: String, body: &[&str]) -> CommitMessage {
    CommitMessage {
        id,
        message: body.join("\n").trim().to_string(),
    }
}

/// How many commits carry one of the bug keywords in their message.
pub fn bug_related_count(commits: &[CommitMessage]) -> usize {
    commits
        .iter()
        .filter(|c| is_bug_related(&c.message))
        .count()
}
