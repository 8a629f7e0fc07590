//! Human-readable rendering of pushed documents for debug logs

const INDENT: &str = "  ";
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Open(&'a str),
    Close(&'a str),
    Standalone(&'a str),
    Text(&'a str),
}

fn tag_name(tag: &str) -> &str {
    tag.trim_start_matches(['<', '/'])
        .split(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .next()
        .unwrap_or_default()
}

fn tokenize(markup: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = markup;
    while !rest.is_empty() {
        if rest.starts_with('<') {
            let Some(end) = rest.find('>') else {
                tokens.push(Token::Text(rest));
                break;
            };
            let tag = &rest[..=end];
            let name = tag_name(tag).to_ascii_lowercase();
            let token = if tag.starts_with("</") {
                Token::Close(tag)
            } else if tag.starts_with("<!")
                || tag.starts_with("<?")
                || tag.ends_with("/>")
                || VOID_ELEMENTS.contains(&name.as_str())
            {
                Token::Standalone(tag)
            } else {
                Token::Open(tag)
            };
            tokens.push(token);
            rest = &rest[end + 1..];
        } else {
            let end = rest.find('<').unwrap_or(rest.len());
            let text = rest[..end].trim();
            if !text.is_empty() {
                tokens.push(Token::Text(text));
            }
            rest = &rest[end..];
        }
    }
    tokens
}

/// Indent markup one element per line. Elements holding only text stay on one line.
pub fn pretty_markup(markup: &str) -> String {
    let tokens = tokenize(markup);
    let mut lines: Vec<String> = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        match (&tokens[i], tokens.get(i + 1), tokens.get(i + 2)) {
            (Token::Open(open), Some(Token::Text(text)), Some(Token::Close(close)))
                if tag_name(open) == tag_name(close) =>
            {
                lines.push(format!("{}{}{}{}", INDENT.repeat(depth), open, text, close));
                i += 3;
                continue;
            }
            (Token::Open(open), _, _) => {
                lines.push(format!("{}{}", INDENT.repeat(depth), open));
                depth += 1;
            }
            (Token::Close(close), _, _) => {
                depth = depth.saturating_sub(1);
                lines.push(format!("{}{}", INDENT.repeat(depth), close));
            }
            (Token::Standalone(tag), _, _) => {
                lines.push(format!("{}{}", INDENT.repeat(depth), tag));
            }
            (Token::Text(text), _, _) => {
                lines.push(format!("{}{}", INDENT.repeat(depth), text));
            }
        }
        i += 1;
    }

    lines.join("\n")
}
