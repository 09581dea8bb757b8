// src/core/html.rs
// Case-insensitive tag scanning over captured page markup.
// Naive by intent: no DOM, no nesting awareness beyond "first closing tag wins".

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// True when the byte after a matched `<tag` ends the tag name, so `<th`
/// does not match `<thead`.
fn ends_tag_name(lc: &str, at: usize) -> bool {
    match lc.as_bytes().get(at) {
        None => true,
        Some(b) => matches!(b, b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n'),
    }
}

/// Position of the next opening `open` tag (e.g. `"<td"`) at or after `from`.
fn find_open(lc: &str, open_lc: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(open_lc)? + pos;
        if ends_tag_name(lc, at + open_lc.len()) {
            return Some(at);
        }
        pos = at + open_lc.len();
    }
}

/// Inner HTML between the first `open_pat` tag and the next `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = find_open(&lc, &open, 0)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Next complete `<tag ...>...</tag>` block at or after `from`, as a byte range.
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(open);
    let cl = to_lower(close);
    let start = find_open(&lc, &ol, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + close.len();
    Some((start, end))
}

/// All blocks of one tag inside `s`, in document order.
pub fn tag_blocks<'a>(s: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b, e)) = next_tag_block_ci(s, open, close, pos) {
        out.push(&s[b..e]);
        pos = e;
    }
    out
}

/// `<td class="x">INNER</td>` -> `INNER` (nested tags kept).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// The opening tag of a block, up to and including its `>`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Value of `class=` in an opening tag, quoted or bare.
pub fn class_attr(open_tag: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let i = lc.find("class=")? + "class=".len();
    let rest = &open_tag[i..];
    let value = match rest.chars().next()? {
        q @ ('"' | '\'') => {
            let body = &rest[1..];
            &body[..body.find(q)?]
        }
        _ => {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .unwrap_or(rest.len());
            &rest[..end]
        }
    };
    Some(value.to_string())
}

/// Visible text of the first element whose class list contains `marker`.
pub fn text_of_first_with_class(s: &str, marker: &str) -> Option<String> {
    let lc = to_lower(s);
    let mut pos = 0usize;
    while let Some(rel) = lc.get(pos..)?.find('<') {
        let start = pos + rel;
        let Some(end_rel) = s[start..].find('>') else { break };
        let tag = &s[start..=start + end_rel];
        pos = start + end_rel + 1;

        if tag.starts_with("</") || tag.starts_with("<!") {
            continue;
        }
        let has_marker = class_attr(tag)
            .map(|c| c.split_whitespace().any(|w| w.eq_ignore_ascii_case(marker)))
            .unwrap_or(false);
        if !has_marker {
            continue;
        }
        let name_end = tag[1..]
            .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
            .map(|i| i + 1)
            .unwrap_or(tag.len() - 1);
        let name = &tag[1..name_end];
        let close = join!("</", name, ">");
        let close_at = lc[pos..].find(&to_lower(&close))? + pos;
        return Some(strip_tags(super::sanitize::normalize_entities(&s[pos..close_at])));
    }
    None
}

/// Drop every `<...>` and collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Visible text of a cell block: inner markup, entities decoded, tags stripped.
pub fn cell_text(block: &str) -> String {
    strip_tags(super::sanitize::normalize_entities(&inner_after_open_tag(block)))
}
