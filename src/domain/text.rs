use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hard-wraps `s` so that no line is wider than `width` display columns.
/// Hangul and other double-width characters count as two columns.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut wrapped = String::with_capacity(s.len() + s.len() / width);
    let mut line_width = 0;

    for c in s.chars() {
        if c == '\n' {
            wrapped.push(c);
            line_width = 0;
            continue;
        }

        let char_width = c.width().unwrap_or(0);
        if line_width + char_width > width && line_width > 0 {
            wrapped.push('\n');
            line_width = 0;
        }
        line_width += char_width;
        wrapped.push(c);
    }

    wrapped
}

pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

/// Shortens a single line to at most `width` columns, ending with `…` when cut.
pub fn fit_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > width - 1 {
            break;
        }
        used += char_width;
        fitted.push(c);
    }
    fitted.push('…');
    fitted
}
