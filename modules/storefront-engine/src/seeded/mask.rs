/// Mask the last word of a display name: keep one or two leading characters
/// and star out the rest (`"Ahmet Yılmaz"` → `"Ahmet Yı****"`). At least one
/// star is always emitted, so a blank name becomes `"*"`.
pub fn mask_surname(full_name: &str) -> String {
    let mut parts: Vec<&str> = full_name.split_whitespace().collect();
    let last = parts.pop().unwrap_or_default();

    let len = last.chars().count();
    let keep = len.saturating_sub(1).clamp(1, 2);
    let stars = len.saturating_sub(keep).max(1);

    let mut masked: String = last.chars().take(keep).collect();
    masked.push_str(&"*".repeat(stars));

    let mut out = parts.join(" ");
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(&masked);
    out
}
