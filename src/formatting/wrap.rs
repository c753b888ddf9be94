/// Re-wraps `text` so that no line is longer than `max` characters.
///
/// Lines are broken after the last space within the limit, or hard-broken at
/// the limit when there is none. Every line but the first starts with
/// `prefix`, and the prefix counts toward the limit of the line it starts.
/// `\r\n` line endings are normalized to `\n` first.
pub fn wrap(text: &str, prefix: &str, max: usize) -> String {
    let text = text.replace("\r\n", "\n");
    let continuation = max.saturating_sub(prefix.chars().count()).max(1);
    let mut out = String::with_capacity(text.len());

    for (i, line) in text.split('\n').enumerate() {
        let mut width = max.max(1);
        if i > 0 {
            out.push('\n');
            out.push_str(prefix);
            width = continuation;
        }

        let mut rest = line;
        while rest.chars().count() > width {
            let cut = break_point(rest, width);
            out.push_str(&rest[..cut]);
            out.push('\n');
            out.push_str(prefix);
            rest = &rest[cut..];
            width = continuation;
        }
        out.push_str(rest);
    }

    out
}

/// Like `wrap`, but the first line also starts with `indent`, and the
/// indent counts toward its limit too.
pub fn wrap_indented(text: &str, indent: &str, max: usize) -> String {
    wrap(&format!("{}{}", indent, text), indent, max)
}

/// Byte offset at which to break `line`, which is longer than `width` chars.
fn break_point(line: &str, width: usize) -> usize {
    let limit = line
        .char_indices()
        .nth(width)
        .map(|(i, _)| i)
        .unwrap_or(line.len());

    match line[..limit].rfind(' ') {
        Some(space) => space + 1,
        None => limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_at_last_space() {
        let wrapped = wrap("aaaa bbbb cccc", "> ", 9);
        assert_eq!(wrapped, "aaaa \n> bbbb \n> cccc");
        for line in wrapped.lines() {
            assert!(line.chars().count() <= 9, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(wrap("time must not depend on fmt.", "\t", 70), "time must not depend on fmt.");
    }

    #[test]
    fn test_hard_breaks_unsplittable_words() {
        assert_eq!(wrap("abcdefghij", "", 4), "abcd\nefgh\nij");
    }

    #[test]
    fn test_prefixes_every_source_line_after_the_first() {
        assert_eq!(wrap("one\r\ntwo\n\nthree", "\t", 70), "one\n\ttwo\n\t\n\tthree");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let wrapped = wrap("héllo wörld", "", 6);
        assert_eq!(wrapped, "héllo \nwörld");
    }

    #[test]
    fn test_indented_first_line_fits() {
        let wrapped = wrap_indented("aaaaaaaaa bbbbbbbbb", "\t", 10);
        assert!(wrapped.starts_with("\taaaaaaaaa"));
        for line in wrapped.lines() {
            assert!(line.starts_with('\t'), "missing indent: {:?}", line);
            assert!(line.chars().count() <= 10, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_indented_breaks_at_last_space() {
        assert_eq!(wrap_indented("aaaa bbbb cccc", "> ", 9), "> aaaa \n> bbbb \n> cccc");
    }

    #[test]
    fn test_prefix_wider_than_limit_still_progresses() {
        assert_eq!(wrap("abc", ">>>>", 2), "ab\n>>>>c");
    }
}
