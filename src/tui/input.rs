use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::store::InputBuffer;

// ── Word boundaries ───────────────────────────────────────────────────

/// Byte offset of the start of the word before `pos`.
fn word_boundary_left(s: &str, pos: usize) -> usize {
    let trimmed = s[..pos].trim_end();
    match trimmed.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((idx, ch)) => idx + ch.len_utf8(),
        None => 0,
    }
}

/// Byte offset of the start of the word after `pos`.
fn word_boundary_right(s: &str, pos: usize) -> usize {
    let after = &s[pos..];
    let Some(ws) = after.find(char::is_whitespace) else {
        return s.len();
    };
    match after[ws..].find(|c: char| !c.is_whitespace()) {
        Some(start) => pos + ws + start,
        None => s.len(),
    }
}

fn prev_char_len(buf: &str, cursor: usize) -> usize {
    buf[..cursor].chars().next_back().map_or(0, char::len_utf8)
}

fn next_char_len(buf: &str, cursor: usize) -> usize {
    buf[cursor..].chars().next().map_or(0, char::len_utf8)
}

// ── Editing ───────────────────────────────────────────────────────────

/// Apply one key press to the input buffer: insertion at the cursor,
/// deletion, cursor movement, word/line jumps, Ctrl+W / Ctrl+U.
///
/// Returns `true` if the key was consumed.
pub fn apply_text_edit(input: &mut InputBuffer, code: KeyCode, modifiers: KeyModifiers) -> bool {
    let InputBuffer { text: buf, cursor } = input;
    *cursor = (*cursor).min(buf.len());

    match code {
        KeyCode::Left if modifiers.contains(KeyModifiers::SUPER) => *cursor = 0,
        KeyCode::Left if modifiers.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_left(buf, *cursor);
        }
        KeyCode::Left => *cursor -= prev_char_len(buf, *cursor),
        KeyCode::Right if modifiers.contains(KeyModifiers::SUPER) => *cursor = buf.len(),
        KeyCode::Right if modifiers.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_right(buf, *cursor);
        }
        KeyCode::Right => *cursor += next_char_len(buf, *cursor),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = buf.len(),

        KeyCode::Backspace if modifiers.contains(KeyModifiers::ALT) => {
            let start = word_boundary_left(buf, *cursor);
            buf.drain(start..*cursor);
            *cursor = start;
        }
        KeyCode::Char('w') if modifiers.contains(KeyModifiers::CONTROL) => {
            let start = word_boundary_left(buf, *cursor);
            buf.drain(start..*cursor);
            *cursor = start;
        }
        KeyCode::Backspace if modifiers.contains(KeyModifiers::SUPER) => {
            buf.drain(..*cursor);
            *cursor = 0;
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            buf.drain(..*cursor);
            *cursor = 0;
        }
        KeyCode::Backspace => {
            let start = *cursor - prev_char_len(buf, *cursor);
            buf.drain(start..*cursor);
            *cursor = start;
        }
        KeyCode::Delete => {
            let end = *cursor + next_char_len(buf, *cursor);
            buf.drain(*cursor..end);
        }

        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            buf.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
        _ => return false,
    }
    true
}

// ── Rendering helpers ─────────────────────────────────────────────────

/// Spans for the input field: text split around a block cursor, or the
/// placeholder when the buffer is empty.
pub fn input_line<'a>(
    input: &'a InputBuffer,
    placeholder: &'a str,
    focused: bool,
    text_style: Style,
    cursor_style: Style,
    placeholder_style: Style,
) -> Line<'a> {
    let cursor = Span::styled("\u{2588}", cursor_style);
    if input.is_empty() {
        let mut spans = Vec::with_capacity(2);
        if focused {
            spans.push(cursor);
        }
        spans.push(Span::styled(placeholder, placeholder_style));
        return Line::from(spans);
    }

    if !focused {
        return Line::from(Span::styled(input.text.as_str(), text_style));
    }
    let pos = input.cursor.min(input.text.len());
    let (before, after) = input.text.split_at(pos);
    Line::from(vec![
        Span::styled(before, text_style),
        cursor,
        Span::styled(after, text_style),
    ])
}

/// Render a horizontal hint bar: alternating key/description spans.
pub fn render_hints(
    frame: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    key_style: Style,
    desc_style: Style,
) {
    let spans: Vec<Span<'_>> = hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(*key, key_style),
                Span::styled(*desc, desc_style),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str, cursor: usize) -> InputBuffer {
        InputBuffer {
            text: text.to_string(),
            cursor,
        }
    }

    fn edit(input: &mut InputBuffer, code: KeyCode, modifiers: KeyModifiers) -> bool {
        apply_text_edit(input, code, modifiers)
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn word_boundaries() {
        assert_eq!(word_boundary_left("hello world", 11), 6);
        assert_eq!(word_boundary_left("hello world  ", 13), 6);
        assert_eq!(word_boundary_left("hello", 5), 0);
        assert_eq!(word_boundary_left("   ", 3), 0);
        assert_eq!(word_boundary_right("hello world", 0), 6);
        assert_eq!(word_boundary_right("hello world", 2), 6);
        assert_eq!(word_boundary_right("hello world", 11), 11);
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = InputBuffer::default();
        for c in "Buy milk".chars() {
            assert!(edit(&mut input, KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(input.text, "Buy milk");
        assert_eq!(input.cursor, 8);
    }

    #[test]
    fn shifted_chars_are_inserted() {
        let mut input = InputBuffer::default();
        edit(&mut input, KeyCode::Char('B'), KeyModifiers::SHIFT);
        assert_eq!(input.text, "B");
    }

    #[test]
    fn insert_in_middle() {
        let mut input = buffer("hllo", 1);
        edit(&mut input, KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(input, buffer("hello", 2));
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = buffer("heello", 3);
        edit(&mut input, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input, buffer("hello", 2));
        edit(&mut input, KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input, buffer("helo", 2));
    }

    #[test]
    fn backspace_at_start_is_harmless() {
        let mut input = buffer("abc", 0);
        assert!(edit(&mut input, KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(input, buffer("abc", 0));
        let mut input = buffer("abc", 3);
        edit(&mut input, KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input, buffer("abc", 3));
    }

    #[test]
    fn multibyte_cursor_movement() {
        let mut input = buffer("añb", 4);
        edit(&mut input, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(input.cursor, 3);
        edit(&mut input, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(input.cursor, 1);
        edit(&mut input, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(input.cursor, 3);
        edit(&mut input, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input, buffer("ab", 1));
    }

    #[test]
    fn ctrl_w_and_alt_backspace_delete_word() {
        let mut input = buffer("hello world", 11);
        edit(&mut input, KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(input, buffer("hello ", 6));

        let mut input = buffer("hello world", 11);
        edit(&mut input, KeyCode::Backspace, KeyModifiers::ALT);
        assert_eq!(input, buffer("hello ", 6));
    }

    #[test]
    fn ctrl_u_clears_before_cursor() {
        let mut input = buffer("hello world", 6);
        edit(&mut input, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(input, buffer("world", 0));
    }

    #[test]
    fn home_end_and_word_jumps() {
        let mut input = buffer("hello world test", 16);
        edit(&mut input, KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(input.cursor, 12);
        edit(&mut input, KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(input.cursor, 6);
        edit(&mut input, KeyCode::Right, KeyModifiers::ALT);
        assert_eq!(input.cursor, 12);
        edit(&mut input, KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(input.cursor, 0);
        edit(&mut input, KeyCode::End, KeyModifiers::NONE);
        assert_eq!(input.cursor, 16);
    }

    #[test]
    fn unhandled_keys_not_consumed() {
        let mut input = buffer("hello", 5);
        assert!(!edit(&mut input, KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert!(!edit(&mut input, KeyCode::F(1), KeyModifiers::NONE));
        assert_eq!(input, buffer("hello", 5));
    }

    #[test]
    fn stale_cursor_is_clamped() {
        let mut input = buffer("ab", 10);
        edit(&mut input, KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(input, buffer("abc", 3));
    }

    #[test]
    fn input_line_places_cursor() {
        let input = buffer("hello", 2);
        let s = Style::default();
        let line = input_line(&input, "placeholder", true, s, s, s);
        assert_eq!(line_text(&line), "he\u{2588}llo");
        let line = input_line(&input, "placeholder", false, s, s, s);
        assert_eq!(line_text(&line), "hello");
    }

    #[test]
    fn input_line_shows_placeholder_when_empty() {
        let input = InputBuffer::default();
        let s = Style::default();
        assert_eq!(
            line_text(&input_line(&input, "What needs doing?", true, s, s, s)),
            "\u{2588}What needs doing?"
        );
        assert_eq!(
            line_text(&input_line(&input, "What needs doing?", false, s, s, s)),
            "What needs doing?"
        );
    }
}
