//! Splitting long replies into transport-sized messages.

/// Default maximum message length of the chat transport, in characters.
pub const DEFAULT_MESSAGE_LIMIT: usize = 2000;

/// Packs lines into messages of at most `limit` characters.
///
/// Lines within a chunk are joined with `\n`; chunks carry no trailing
/// newline. Chunk boundaries fall between whole lines, except that a line
/// longer than `limit` is split into `limit`-sized pieces.
pub fn chunk_lines<I, S>(lines: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    let mut has_line = false;

    for line in lines {
        for piece in split_oversize(line.as_ref(), limit) {
            let piece_len = piece.chars().count();

            if has_line && current_len + 1 + piece_len > limit {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
                has_line = false;
            }

            if has_line {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(piece);
            current_len += piece_len;
            has_line = true;
        }
    }

    if has_line {
        chunks.push(current);
    }

    chunks
}

fn split_oversize(line: &str, limit: usize) -> Vec<&str> {
    if line.chars().count() <= limit {
        return vec![line];
    }

    let mut pieces = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(limit)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (piece, tail) = rest.split_at(cut);
        pieces.push(piece);
        rest = tail;
    }
    pieces
}

/// Chunks a listing that starts with a header line.
pub fn chunk_with_header<I, S>(header: &str, lines: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let body = lines.into_iter().map(|l| l.as_ref().to_string());
    chunk_lines(std::iter::once(header.to_string()).chain(body), limit)
}

/// Formats `items` as `[1] first`, `[2] second`, ...
pub fn numbered<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("[{}] {}", i + 1, item))
        .collect()
}
