#![forbid(unsafe_code)]

//! Permissive markup scanner.
//!
//! Produces [`TagEvent`]s from a UTF-8 document. This is deliberately not
//! a spec-compliant HTML tokenizer: no DOCTYPE handling beyond skipping,
//! no encoding sniffing, and only a small entity table. Whatever the
//! input, the scanner terminates and every byte is either emitted as text
//! or consumed by a tag/comment.
//!
//! - `<name a=1 b="2" c='3'>` start tags, names and attr keys lowercased
//! - `</name>` end tags, `<name/>` self-closing syntax
//! - `<!-- -->`, `<!...>`, `<?...>` skipped
//! - `&amp; &lt; &gt; &quot; &apos; &nbsp;` and `&#N;`/`&#xN;` decoded
//! - script/style contents skipped as raw text (a stray `<` inside them
//!   never opens a tag)
//! - a `<` that does not begin a tag is emitted as literal text

use crate::event::{AttrList, TagEvent};

/// Lazy scanner over a document string. Iterate to drain the events.
#[derive(Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    /// Set after emitting a start tag whose contents are raw text; the
    /// next call skips to the matching end tag.
    raw_until: Option<&'static str>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_until: None,
        }
    }

    fn bytes(&self) -> &[u8] {
        self.input.as_bytes()
    }

    fn starts_with(&self, pattern: &str) -> bool {
        self.input[self.pos..].starts_with(pattern)
    }

    /// Skip past the raw contents of a script/style element and emit its
    /// end event. Content is dropped (non-goal: script/style rendering).
    fn finish_raw_text(&mut self, tag: &'static str) -> TagEvent {
        let bytes = self.bytes();
        let mut i = self.pos;
        while i < bytes.len() {
            if bytes[i] == b'<'
                && bytes.get(i + 1) == Some(&b'/')
                && self.input[i + 2..]
                    .get(..tag.len())
                    .is_some_and(|name| name.eq_ignore_ascii_case(tag))
            {
                let after = i + 2 + tag.len();
                let boundary = match bytes.get(after) {
                    None => true,
                    Some(b) => b.is_ascii_whitespace() || *b == b'>',
                };
                if boundary {
                    self.pos = match bytes[after..].iter().position(|b| *b == b'>') {
                        Some(gt) => after + gt + 1,
                        None => bytes.len(),
                    };
                    return TagEvent::end(tag);
                }
            }
            i += 1;
        }
        self.pos = bytes.len();
        TagEvent::end(tag)
    }

    /// Consume a text run up to the next `<`.
    fn scan_text(&mut self) -> Option<TagEvent> {
        let bytes = self.bytes();
        let start = self.pos;
        let end = bytes[start..]
            .iter()
            .position(|b| *b == b'<')
            .map_or(bytes.len(), |off| start + off);
        self.pos = end;
        let run = &self.input[start..end];
        if run.is_empty() {
            None
        } else {
            Some(TagEvent::Text(decode_entities(run)))
        }
    }

    fn skip_past(&mut self, terminator: &str) {
        self.pos = match self.input[self.pos..].find(terminator) {
            Some(off) => self.pos + off + terminator.len(),
            None => self.input.len(),
        };
    }

    /// Parse a tag at `pos` (which holds `<`). Returns `None` when the
    /// `<` does not begin a well-formed-enough tag.
    fn scan_tag(&mut self) -> Option<TagEvent> {
        let bytes = self.bytes();
        let mut i = self.pos + 1;
        let is_end = bytes.get(i) == Some(&b'/');
        if is_end {
            i += 1;
        }

        let name_start = i;
        while i < bytes.len() && is_name_byte(bytes[i]) {
            i += 1;
        }
        if i == name_start {
            return None;
        }
        let name = self.input[name_start..i].to_ascii_lowercase();

        let mut attrs: AttrList = Vec::new();
        let mut self_closing = false;
        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i) {
                None => return None,
                Some(b'>') => {
                    i += 1;
                    break;
                }
                Some(b'/') => {
                    self_closing = true;
                    i += 1;
                }
                Some(_) => {
                    let (attr, next) = scan_attr(self.input, i);
                    if next == i {
                        // Unparseable byte inside the tag; step over it.
                        i += 1;
                    } else {
                        i = next;
                        if !is_end && let Some(attr) = attr {
                            attrs.push(attr);
                        }
                    }
                }
            }
        }

        self.pos = i;
        if is_end {
            return Some(TagEvent::End { name });
        }
        if !self_closing {
            match name.as_str() {
                "script" => self.raw_until = Some("script"),
                "style" => self.raw_until = Some("style"),
                _ => {}
            }
        }
        if self_closing {
            Some(TagEvent::SelfClosing { name, attrs })
        } else {
            Some(TagEvent::Start { name, attrs })
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = TagEvent;

    fn next(&mut self) -> Option<TagEvent> {
        if let Some(tag) = self.raw_until.take() {
            return Some(self.finish_raw_text(tag));
        }

        loop {
            if self.pos >= self.input.len() {
                return None;
            }
            if !self.starts_with("<") {
                match self.scan_text() {
                    Some(event) => return Some(event),
                    None => continue,
                }
            }
            if self.starts_with("<!--") {
                self.pos += 4;
                self.skip_past("-->");
                continue;
            }
            if self.starts_with("<!") || self.starts_with("<?") {
                self.pos += 2;
                self.skip_past(">");
                continue;
            }
            let mark = self.pos;
            match self.scan_tag() {
                Some(event) => return Some(event),
                None => {
                    // Stray `<`: emit it literally and move on.
                    self.pos = mark + 1;
                    return Some(TagEvent::text("<"));
                }
            }
        }
    }
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b':')
}

/// Scan one `name` or `name=value` attribute starting at byte `i`.
fn scan_attr(input: &str, i: usize) -> (Option<(String, String)>, usize) {
    let bytes = input.as_bytes();
    let name_start = i;
    let mut i = i;
    while i < bytes.len() && is_name_byte(bytes[i]) {
        i += 1;
    }
    if i == name_start {
        return (None, i);
    }
    let name = input[name_start..i].to_ascii_lowercase();

    let mut j = i;
    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
        j += 1;
    }
    if bytes.get(j) != Some(&b'=') {
        // Bare attribute.
        return (Some((name, String::new())), i);
    }
    j += 1;
    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
        j += 1;
    }

    match bytes.get(j).copied() {
        Some(quote @ (b'"' | b'\'')) => {
            let value_start = j + 1;
            let end = bytes[value_start..]
                .iter()
                .position(|b| *b == quote)
                .map_or(bytes.len(), |off| value_start + off);
            let value = decode_entities(&input[value_start..end]);
            (Some((name, value)), (end + 1).min(bytes.len()))
        }
        Some(_) => {
            let value_start = j;
            let mut end = j;
            while end < bytes.len() && !bytes[end].is_ascii_whitespace() && bytes[end] != b'>' {
                end += 1;
            }
            let value = decode_entities(&input[value_start..end]);
            (Some((name, value)), end)
        }
        None => (Some((name, String::new())), j),
    }
}

/// Decode the supported character references; unknown ones pass through
/// literally.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match rest[1..].find(';') {
            // Entity names are short; anything longer is literal text.
            Some(semi) if semi <= 8 => {
                let body = &rest[1..=semi];
                match decode_entity(body) {
                    Some(ch) => {
                        out.push(ch);
                        rest = &rest[semi + 2..];
                    }
                    None => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(body: &str) -> Option<char> {
    match body {
        "amp" => return Some('&'),
        "lt" => return Some('<'),
        "gt" => return Some('>'),
        "quot" => return Some('"'),
        "apos" => return Some('\''),
        "nbsp" => return Some('\u{a0}'),
        _ => {}
    }
    let digits = body.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code)
}
