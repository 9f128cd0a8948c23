/// Maximum preview length in characters, ellipsis included
pub const PREVIEW_LIMIT: usize = 48;

const ELLIPSIS: &str = "...";

/// Collapse whitespace and cap the text at `PREVIEW_LIMIT` characters
pub fn format_preview(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= PREVIEW_LIMIT {
        return collapsed;
    }

    let mut preview: String = collapsed
        .chars()
        .take(PREVIEW_LIMIT - ELLIPSIS.len())
        .collect();
    preview.push_str(ELLIPSIS);
    preview
}

/// Extract the history index from a selection.
///
/// Accepts a bare index (`"3"`) or a summary label (`"3|2024-... · model6 · text"`).
pub fn parse_selection(selection: &str) -> Option<i64> {
    let head = selection.split('|').next()?.trim();
    if head.is_empty() {
        return None;
    }
    head.parse().ok()
}
