/// Turns a web-safe title into Title Case, `"ozone-and-rot"` becomes `"Ozone And Rot"`.
///
/// Only the first character of each hyphen-delimited word is upper-cased, the
/// rest is kept as is. Empty words from doubled, leading or trailing hyphens
/// are skipped, so an input made only of hyphens gives an empty string.
///
/// The output never contains a hyphen, which makes the function idempotent:
/// formatting an already formatted title returns it unchanged.
pub fn format_title(web_safe_title: &str) -> String {
    web_safe_title
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
