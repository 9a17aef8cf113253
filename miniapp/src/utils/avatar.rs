use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ultroid_client::UserData;

/// Up to two uppercase initials, one per space-separated word.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// Hue in `0..360` derived from the UTF-16 code units of `name`.
///
/// Follows the classic `hash * 31 + c` string hash with the shift truncated
/// to 32 bits at every step, so a name always maps to the same color.
pub fn name_hue(name: &str) -> u16 {
    let hash = name.encode_utf16().fold(0i64, |acc, unit| {
        let shifted = i64::from((acc as i32).wrapping_shl(5));
        i64::from(unit) + (shifted - acc)
    });
    (hash % 360).unsigned_abs() as u16
}

/// Generated SVG avatar with the name's initials on a deterministic color,
/// as a base64 data URL.
pub fn fallback_avatar(name: &str) -> String {
    let color = format!("hsl({}, 70%, 60%)", name_hue(name));
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100"><rect width="100" height="100" fill="{color}" /><text x="50" y="50" font-family="Arial" font-size="40" fill="white" text-anchor="middle" dominant-baseline="central">{}</text></svg>"#,
        escape_xml(&initials(name))
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

pub fn is_valid_url(url: &str) -> bool {
    reqwest::Url::parse(url).is_ok()
}

/// The profile's own avatar when it is a usable URL, else a generated one.
pub fn user_avatar(user: &UserData) -> String {
    if !user.avatar.is_empty() && is_valid_url(&user.avatar) {
        user.avatar.clone()
    } else {
        fallback_avatar(&user.name)
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
