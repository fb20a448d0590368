// Chunk: docs/chunks/gap_buffer_core - Gap buffer text storage engine

//! Property tests checking the buffer against a plain `Vec<char>` model.

use gap_edit_buffer::{GapBuffer, LineColumn};

/// One editing step, decoded from an arbitrary `(u8, char)` pair.
fn apply(buf: &mut GapBuffer, model: &mut Vec<char>, cursor: &mut usize, op: u8, ch: char) {
    match op % 6 {
        0 | 1 => {
            let capacity_before = buf.capacity();
            let len_before = buf.len();
            buf.insert(ch);
            if buf.capacity() != capacity_before {
                assert!(buf.capacity() >= 2 * len_before.max(1));
            }
            model.insert(*cursor, ch);
            *cursor += 1;
        }
        2 => {
            let deleted = buf.delete_forward();
            if *cursor < model.len() {
                assert_eq!(deleted, Some(model.remove(*cursor)));
            } else {
                assert_eq!(deleted, None);
            }
        }
        3 => {
            let deleted = buf.delete_backward();
            if *cursor > 0 {
                *cursor -= 1;
                assert_eq!(deleted, Some(model.remove(*cursor)));
            } else {
                assert_eq!(deleted, None);
            }
        }
        4 => {
            let distance = (ch as usize) % (*cursor + 1);
            buf.move_cursor_left(distance).unwrap();
            *cursor -= distance;
        }
        _ => {
            if buf.move_cursor_right() {
                *cursor += 1;
            }
        }
    }
}

fn expected_line_column(model: &[char], cursor: usize) -> LineColumn {
    let before = &model[..cursor];
    let line = before.iter().filter(|&&ch| ch == '\n').count();
    let column = before.iter().rev().take_while(|&&ch| ch != '\n').count();
    LineColumn::new(column, line)
}

quickcheck::quickcheck! {
    fn prop_set_text_round_trips(s: String) -> bool {
        let mut buf = GapBuffer::new();
        buf.set_text(&s);
        buf.text() == s && buf.cursor_offset() == 0
    }

    fn prop_insert_then_read(s: String) -> bool {
        let mut buf = GapBuffer::new();
        for ch in s.chars() {
            buf.insert(ch);
        }
        buf.text() == s && buf.cursor_offset() == s.chars().count()
    }

    fn prop_left_then_right_restores_state(s: String, k: usize) -> bool {
        let mut buf = GapBuffer::from_str(&s);
        let len = buf.len();
        buf.move_cursor_right_by(len).unwrap();
        buf.insert('#');
        let text = buf.text();
        let offset = buf.cursor_offset();

        let k = k % (offset + 1);
        buf.move_cursor_left(k).unwrap();
        for _ in 0..k {
            buf.move_cursor_right();
        }
        buf.text() == text && buf.cursor_offset() == offset
    }

    fn prop_edits_match_model(initial: String, ops: Vec<(u8, char)>) -> bool {
        let mut buf = GapBuffer::from_str(&initial);
        let mut model: Vec<char> = initial.chars().collect();
        let mut cursor = 0;

        for (op, ch) in ops {
            apply(&mut buf, &mut model, &mut cursor, op, ch);
            assert_eq!(buf.cursor_offset(), cursor);
        }

        buf.text() == model.iter().collect::<String>()
            && buf.len() == model.len()
            && buf.cursor_line_column() == expected_line_column(&model, cursor)
    }

    fn prop_vertical_moves_keep_text(lines: Vec<String>, up: u8, down: u8) -> bool {
        let text = lines.join("\n");
        let mut buf = GapBuffer::from_str(&text);
        let len = buf.len();
        buf.move_cursor_right_by(len).unwrap();

        let last_line = buf.cursor_line_column().line;
        let moved_up = buf.move_cursor_up(up as usize);
        let after_up = buf.cursor_line_column().line;
        let moved_down = buf.move_cursor_down(down as usize);

        buf.text() == text
            && moved_up == (up as usize).min(last_line)
            && after_up == last_line - moved_up
            && buf.cursor_line_column().line == after_up + moved_down
            && buf.cursor_line_column().line <= last_line
    }

    fn prop_vertical_move_equals_single_steps(lines: Vec<String>, offset: usize, k: u8) -> bool {
        let text = lines.join("\n");
        let start = GapBuffer::from_str(&text);
        let offset = offset % (start.len() + 1);
        let k = (k % 8) as usize;

        let mut jump_up = GapBuffer::from_str(&text);
        let mut step_up = GapBuffer::from_str(&text);
        let mut jump_down = GapBuffer::from_str(&text);
        let mut step_down = GapBuffer::from_str(&text);
        for buf in [&mut jump_up, &mut step_up, &mut jump_down, &mut step_down] {
            buf.set_cursor_offset(offset).unwrap();
        }

        let moved_up = jump_up.move_cursor_up(k);
        let stepped_up: usize = (0..k).map(|_| step_up.move_cursor_up(1)).sum();
        let moved_down = jump_down.move_cursor_down(k);
        let stepped_down: usize = (0..k).map(|_| step_down.move_cursor_down(1)).sum();

        moved_up == stepped_up
            && jump_up.cursor_offset() == step_up.cursor_offset()
            && moved_down == stepped_down
            && jump_down.cursor_offset() == step_down.cursor_offset()
    }
}
