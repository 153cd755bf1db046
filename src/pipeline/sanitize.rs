//! Response sanitization - strip formatting wrappers from model output.

/// Isolate the structured payload in raw model text.
///
/// The service is prompted to return bare JSON but may wrap it in fence
/// markers or prose. Trims, strips an opening fence (with optional
/// language tag) and trailing fence, then slices from the first `{` to the
/// last `}`. Best-effort: with no braces the text comes back unchanged and
/// the downstream parse fails with a Parse classification.
pub fn sanitize_response(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // opening fence may carry a language tag ("```json")
        text = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
        text = text.trim();
        if let Some(body) = text.strip_suffix("```") {
            text = body.trim_end();
        }
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end >= start => text[start..=end].to_string(),
        _ => text.to_string(),
    }
}
