//! HTML rendering of an armed trap.

use std::fmt::Write as _;

use crate::entry::Entry;
use crate::style::{StyleHint, StylePolicy};

/// Render every entry as a text `<input>`, concatenated without separators.
///
/// `next_style` is consulted once per entry under [`StylePolicy::PerRead`]
/// and once for the whole render under [`StylePolicy::PerRender`].
pub fn render_inputs<'a, I, S>(entries: I, policy: StylePolicy, mut next_style: S) -> String
where
    I: IntoIterator<Item = &'a Entry>,
    S: FnMut() -> StyleHint,
{
    let shared = match policy {
        StylePolicy::PerRender => Some(next_style()),
        StylePolicy::PerRead => None,
    };

    let mut html = String::new();
    for entry in entries {
        let style = shared.unwrap_or_else(&mut next_style);
        render_input(&mut html, entry, style);
    }
    html
}

fn render_input(out: &mut String, entry: &Entry, style: StyleHint) {
    let _ = write!(
        out,
        r#"<input id="{}" name="{}" style="{}" type="text" value="{}">"#,
        escape_attr(&entry.id),
        escape_attr(&entry.name),
        style.css(),
        escape_attr(entry.value()),
    );
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
