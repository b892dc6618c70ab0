//! Payload isolation — strips narrative text and fence markers around the
//! structured span.
//!
//! Completion output routinely sandwiches the actual payload between
//! conversational filler ("Sure! Here is the JSON you asked for:") and a
//! markdown code fence, sometimes with more chatter after the closing fence.
//! This pass keeps only the span a parse can use.

/// Isolate the structured payload inside possibly narrative/fenced text.
///
/// Scans lines in order: capture starts at the first line whose trimmed text
/// begins with `{`, and stops — excluding the line itself — at the first
/// subsequent line whose trimmed text begins with a code-fence marker (three
/// backticks). Captured lines are concatenated with their newlines removed.
///
/// Absent structure yields an empty string, never an error; the pipeline
/// renders that as `null`.
///
/// # Examples
///
/// ```
/// use salvage_core::extract_payload;
///
/// let raw = "Sure, here is the data:\n\n{ \"id\": 7 }";
/// assert_eq!(extract_payload(raw), "{ \"id\": 7 }");
/// ```
pub fn extract_payload(raw: &str) -> String {
    let mut payload = String::new();
    let mut capturing = false;
    for line in raw.lines() {
        let lead = line.trim_start();
        if lead.starts_with('{') {
            capturing = true;
        }
        if capturing && lead.starts_with("```") {
            break;
        }
        if capturing {
            payload.push_str(line);
        }
    }
    payload
}
