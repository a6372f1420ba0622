//! Input sanitization for single-line text fields.
//!
//! Field text ends up drawn verbatim in the terminal, so escape sequences and
//! control characters arriving through paste must never reach the buffer.

use std::borrow::Cow;

/// ASCII escape character that starts ANSI sequences.
const ESC: char = '\x1b';

/// Reduce `input` to a single printable line.
///
/// - ANSI escape sequences are dropped (ESC plus the sequence body).
/// - Newlines and tabs become a single space.
/// - Every other C0/C1 control character and DEL is dropped.
#[must_use]
pub fn sanitize_single_line(input: &str) -> Cow<'_, str> {
    if !input.chars().any(needs_rewrite) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape_sequence(&mut chars),
            '\n' | '\r' | '\t' => {
                if !result.ends_with(' ') {
                    result.push(' ');
                }
            }
            c if is_control(c) => {}
            c => result.push(c),
        }
    }

    Cow::Owned(result)
}

fn needs_rewrite(c: char) -> bool {
    c == ESC || is_control(c)
}

fn is_control(c: char) -> bool {
    c <= '\x1f' || c == '\x7f' || ('\u{0080}'..='\u{009f}').contains(&c)
}

/// Skip the body of an escape sequence (CSI, OSC or a two-byte escape).
fn skip_escape_sequence<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) {
    match chars.next() {
        Some('[') => {
            // CSI: parameters until a final byte in 0x40..=0x7e
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        }
        Some(']') => {
            // OSC: terminated by BEL or ST (ESC \)
            while let Some(c) = chars.next() {
                if c == '\x07' {
                    break;
                }
                if c == ESC {
                    if chars.peek() == Some(&'\\') {
                        chars.next();
                    }
                    break;
                }
            }
        }
        _ => {}
    }
}
