//! `cowsay` speech-bubble rendering.

const COW: [&str; 4] = [
    r"        \   ^__^",
    r"         \  (oo)\_______",
    r"            (__)\       )\/\",
    r"                ||----w ||",
];

/// Renders `message` in a one-line bubble above the cow.
///
/// Always seven lines; both borders are two characters wider than the message.
pub fn cowsay(message: &str) -> Vec<String> {
    let width = message.chars().count() + 2;
    let mut out = Vec::with_capacity(3 + COW.len());
    out.push(format!(" {}", "_".repeat(width)));
    out.push(format!("< {message} >"));
    out.push(format!(" {}", "-".repeat(width)));
    out.extend(COW.iter().map(|line| (*line).to_string()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borders_track_message_width() {
        let out = cowsay("hi");
        assert_eq!(out.len(), 7);
        assert_eq!(out[0], " ____");
        assert_eq!(out[1], "< hi >");
        assert_eq!(out[2], " ----");
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let out = cowsay("héllo");
        assert_eq!(out[2].trim().chars().count(), 7);
    }

    #[test]
    fn empty_message_still_draws_bubble() {
        let out = cowsay("");
        assert_eq!(out.len(), 7);
        assert_eq!(out[1], "<  >");
        assert_eq!(out[2], " --");
    }
}
