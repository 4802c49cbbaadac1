//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
//! Cursor arithmetic shared by the editable widgets.
//!
//! Cursors are byte offsets into UTF-8 buffers and are always kept on char boundaries. Display
//! computations (overflow windows, click placement) work in characters and convert back.

use crate::{Font, Style};

pub(crate) fn insert_text(buf: &mut String, cursor: &mut usize, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let insert_at = clamp_to_boundary(buf, *cursor);
    buf.insert_str(insert_at, text);
    *cursor = insert_at + text.len();
    true
}

pub(crate) fn delete_prev(buf: &mut String, cursor: &mut usize) -> bool {
    if buf.is_empty() || *cursor == 0 {
        return false;
    }
    let end = clamp_to_boundary(buf, *cursor);
    let start = move_left(buf, end);
    buf.replace_range(start..end, "");
    *cursor = start;
    true
}

pub(crate) fn delete_next(buf: &mut String, cursor: usize) -> bool {
    if buf.is_empty() || cursor >= buf.len() {
        return false;
    }
    let start = clamp_to_boundary(buf, cursor);
    let end = move_right(buf, start);
    buf.replace_range(start..end, "");
    true
}

pub(crate) fn move_left(buf: &str, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut new_cursor = cursor.min(buf.len()) - 1;
    while new_cursor > 0 && !buf.is_char_boundary(new_cursor) {
        new_cursor -= 1;
    }
    new_cursor
}

pub(crate) fn move_right(buf: &str, cursor: usize) -> usize {
    if cursor >= buf.len() {
        return buf.len();
    }
    let mut new_cursor = cursor + 1;
    while new_cursor < buf.len() && !buf.is_char_boundary(new_cursor) {
        new_cursor += 1;
    }
    new_cursor
}

/// Clamps `cursor` into the buffer and snaps it back onto a char boundary.
pub(crate) fn clamp_to_boundary(buf: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(buf.len());
    while cursor > 0 && !buf.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

pub(crate) fn strip_trailing_newlines(text: &str) -> &str { text.trim_end_matches(['\n', '\r']) }

/// Byte range of the line the cursor sits on.
///
/// A newline right before the cursor (typically the tail of pasted text) is skipped so the
/// previous line stays visible.
pub(crate) fn line_bounds(text: &str, cursor: usize) -> (usize, usize) {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let cursor = cursor.min(len);
    if len == 0 {
        return (0, 0);
    }

    let mut start = 0;
    if cursor > 0 {
        let last_newline_at_or_before = |pos: usize| bytes[..=pos.min(len - 1)].iter().rposition(|b| *b == b'\n');
        let mut found = last_newline_at_or_before(cursor);
        if let Some(idx) = found {
            if idx + 1 == cursor && idx > 0 {
                found = last_newline_at_or_before(idx - 1);
            }
        }
        start = found.map(|idx| idx + 1).unwrap_or(0).min(cursor);
    }

    let mut end = len;
    if cursor + 1 < len {
        if let Some(idx) = bytes[cursor..].iter().position(|b| *b == b'\n') {
            end = cursor + idx;
        }
    }
    (start, end.max(start))
}

/// Builds the string shown for one line of a text field: the caret spliced in at `cursor`,
/// optional masking, and an ellipsis window around the cursor when the line does not fit.
pub(crate) fn compose_display(line: &str, cursor: usize, caret: char, mask: Option<char>, font: &dyn Font, width: f32, style: &Style) -> String {
    let chars: Vec<char> = line.chars().collect();
    let adjusted = line[..clamp_to_boundary(line, cursor)].chars().count();

    let mut render: Vec<char> = Vec::with_capacity(chars.len() + 1);
    match mask {
        Some(m) => {
            render.extend(std::iter::repeat_n(m, adjusted));
            render.push(caret);
            render.extend(std::iter::repeat_n(m, chars.len() - adjusted));
        }
        None => {
            render.extend_from_slice(&chars[..adjusted]);
            render.push(caret);
            render.extend_from_slice(&chars[adjusted..]);
        }
    }

    let text_width = font.measure_string(line).x;
    if text_width <= width - style.overflow_margin {
        return render.into_iter().collect();
    }

    let ratio = text_width / width * style.overflow_ratio_slack;
    let keep = (render.len() as f32 / ratio) as usize;
    let start = if adjusted > keep { adjusted - keep + style.overflow_lookback } else { 0 }.min(render.len());
    let end = (start + keep).min(render.len());

    let mut out = String::from(style.ellipsis);
    out.extend(&render[start..end]);
    out
}

/// Maps a click `offset` pixels right of the text origin to a byte offset into `line`.
///
/// Starts from a proportional estimate and walks one character at a time towards the click
/// while that strictly brings the measured prefix closer, stopping within one dash width.
pub(crate) fn place_cursor(font: &dyn Font, line: &str, offset: f32) -> usize {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    if chars.is_empty() {
        return 0;
    }
    let count = chars.len();
    let byte_at = |idx: usize| if idx >= count { line.len() } else { chars[idx].0 };
    let prefix_width = |idx: usize| font.measure_string(&line[..byte_at(idx)]).x;

    let width = font.measure_string(line).x;
    let offset = offset.clamp(0.0, width);
    let ratio = if width > 0.0 { (offset / width).clamp(0.0, 1.0) } else { 0.0 };

    let mut idx = (count as f32 * ratio) as usize;
    let epsilon = font.measure_string("-").x;
    let mut diff = prefix_width(idx) - offset;
    while epsilon < diff.abs() {
        let next = if diff < 0.0 {
            if idx >= count {
                break;
            }
            idx + 1
        } else {
            if idx == 0 {
                break;
            }
            idx - 1
        };
        let next_diff = prefix_width(next) - offset;
        if next_diff.abs() >= diff.abs() {
            break;
        }
        diff = next_diff;
        idx = next;
    }
    byte_at(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonoFont;

    #[test]
    fn left_moves_over_multibyte() {
        let buf = "a\u{1F600}b";
        assert_eq!(move_left(buf, 5), 1);
        assert_eq!(move_right(buf, 1), 5);
        assert_eq!(move_left(buf, 0), 0);
        assert_eq!(move_right(buf, buf.len()), buf.len());
    }

    #[test]
    fn backspace_removes_multibyte() {
        let mut buf = String::from("a\u{1F600}b");
        let mut cursor = 5;
        assert!(delete_prev(&mut buf, &mut cursor));
        assert_eq!(buf, "ab");
        assert_eq!(cursor, 1);
        assert!(delete_next(&mut buf, cursor));
        assert_eq!(buf, "a");
        assert!(!delete_next(&mut buf, cursor));
    }

    #[test]
    fn insert_snaps_to_boundary() {
        let mut buf = String::from("\u{e9}");
        let mut cursor = 1;
        assert!(insert_text(&mut buf, &mut cursor, "x"));
        assert_eq!(buf, "x\u{e9}");
        assert_eq!(cursor, 1);
        assert!(!insert_text(&mut buf, &mut cursor, ""));
    }

    #[test]
    fn line_bounds_pick_the_cursor_line() {
        let text = "one\ntwo\nthree";
        assert_eq!(line_bounds(text, 5), (4, 7));
        assert_eq!(line_bounds(text, 0), (0, 3));
        assert_eq!(line_bounds(text, text.len()), (8, text.len()));
    }

    #[test]
    fn line_bounds_skip_newline_before_cursor() {
        let text = "one\ntwo\n";
        let (start, end) = line_bounds(text, text.len());
        assert_eq!(&text[start..end], "two\n");
    }

    #[test]
    fn compose_splices_caret_and_masks() {
        let font = MonoFont::new("mono", 8.0, 16.0);
        let style = Style::default();
        assert_eq!(compose_display("abc", 1, '|', None, &font, 200.0, &style), "a|bc");
        assert_eq!(compose_display("abc", 3, ' ', Some('*'), &font, 200.0, &style), "*** ");
    }

    #[test]
    fn compose_truncates_around_cursor() {
        let font = MonoFont::new("mono", 8.0, 16.0);
        let style = Style::default();
        let line = "abcdefghijklmnopqrstuvwxyz";
        let shown = compose_display(line, line.len(), '|', None, &font, 100.0, &style);
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with("xyz|"));
        assert!(shown.chars().count() < line.len());

        let head = compose_display(line, 0, '|', None, &font, 100.0, &style);
        assert!(head.starts_with("...|abc"));
    }

    #[test]
    fn click_lands_within_a_glyph_of_the_pointer() {
        let font = MonoFont::new("mono", 8.0, 16.0);
        assert_eq!(place_cursor(&font, "abcdef", 0.0), 0);
        assert_eq!(place_cursor(&font, "abcdef", 17.0), 2);
        assert_eq!(place_cursor(&font, "abcdef", 29.0), 3);
        assert_eq!(place_cursor(&font, "abcdef", 500.0), 6);
        assert_eq!(place_cursor(&font, "", 10.0), 0);
    }

    struct WideW;

    impl Font for WideW {
        fn name(&self) -> &str { "wide-w" }
        fn measure_string(&self, text: &str) -> crate::Vec2f {
            let width = text.chars().map(|c| if c == 'W' { 30.0 } else { 5.0 }).sum();
            crate::Vec2f::new(width, 10.0)
        }
        fn contains_character(&self, _c: char) -> bool { true }
    }

    #[test]
    fn click_refines_proportional_estimate() {
        assert_eq!(place_cursor(&WideW, "iiiWWW", 20.0), 3);
    }

    #[test]
    fn click_midway_between_wide_glyphs_settles() {
        assert_eq!(place_cursor(&WideW, "WW", 15.0), 0);
        assert_eq!(place_cursor(&WideW, "WW", 45.0), 1);
    }
}
