const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

// No supported unprefixed equivalent; the prefix is part of the name.
const PREFIX_REQUIRED: [&str; 14] = [
    "-webkit-font-smoothing",
    "-moz-osx-font-smoothing",
    "-webkit-tap-highlight-color",
    "-webkit-text-stroke",
    "-webkit-text-stroke-width",
    "-webkit-text-stroke-color",
    "-webkit-text-fill-color",
    "-webkit-line-clamp",
    "-webkit-box-orient",
    "-webkit-box-reflect",
    "-webkit-touch-callout",
    "-webkit-user-drag",
    "-webkit-overflow-scrolling",
    "-webkit-mask-box-image",
];

fn canonical_alias(lower: &str) -> Option<&'static str> {
    match lower {
        "tap-highlight-color" => Some("-webkit-tap-highlight-color"),
        "font-smoothing" => Some("-webkit-font-smoothing"),
        _ => None,
    }
}

pub fn unprefix_property(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let lower = name.trim().to_ascii_lowercase();
    if let Some(alias) = canonical_alias(&lower) {
        return alias.to_string();
    }
    if PREFIX_REQUIRED.contains(&lower.as_str()) {
        return lower;
    }
    for prefix in VENDOR_PREFIXES {
        if let Some(rest) = lower.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    lower
}

// `border-top-width` -> `borderTopWidth`, `-ms-grid` -> `msGrid`.
pub fn normalize_property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let lower = name.trim().to_ascii_lowercase();
    let lower = canonical_alias(&lower).map(str::to_string).unwrap_or(lower);
    match lower.as_str() {
        "-webkit-font-smoothing" => return "WebkitFontSmoothing".to_string(),
        "-moz-osx-font-smoothing" => return "MozOsxFontSmoothing".to_string(),
        "-webkit-tap-highlight-color" => return "WebkitTapHighlightColor".to_string(),
        _ => {}
    }
    if let Some(rest) = lower.strip_prefix("-ms-") {
        return format!("ms{}", capitalize_words(rest));
    }
    if let Some(rest) = lower.strip_prefix('-') {
        return capitalize_words(rest);
    }
    let mut words = lower.split('-');
    let mut out = words.next().unwrap_or_default().to_string();
    out.push_str(&capitalize_words(&words.collect::<Vec<_>>().join("-")));
    out
}

fn capitalize_words(hyphenated: &str) -> String {
    let mut out = String::with_capacity(hyphenated.len());
    for word in hyphenated.split('-').filter(|word| !word.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
