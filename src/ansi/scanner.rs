//! Escape scanner.
//!
//! Splits raw text at SGR escape sequences of the form
//! `[0x01] ESC '[' params 'm' [0x02]`, keeping the parameter string and
//! dropping the framing. The output alternates text and code pieces, always
//! starting and ending with a (possibly empty) text piece.

const ESC: u8 = 0x1b;
const CSI: u8 = b'[';
const SGR_FINAL: u8 = b'm';
/// Readline "start ignore" marker that may precede an escape.
const LEAD: u8 = 0x01;
/// Readline "end ignore" marker that may follow an escape.
const TRAIL: u8 = 0x02;

/// A classified piece of scanner output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text to append with the current style.
    Literal(&'a str),
    /// A style code such as `1;31`.
    Style(&'a str),
    /// An empty piece: between adjacent escapes, at the input edges, or `ESC[m`.
    Empty,
}

/// Location of one escape sequence within the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EscapeMatch {
    start: usize,
    params: (usize, usize),
    end: usize,
}

/// Iterator over the classified segments of a text blob.
#[derive(Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    pending_code: Option<&'a str>,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending_code: None,
            done: false,
        }
    }

    fn find_escape(&self) -> Option<EscapeMatch> {
        let bytes = self.input.as_bytes();
        let mut i = self.pos;

        while let Some(offset) = bytes[i..].iter().position(|&b| b == ESC) {
            let esc = i + offset;
            if let Some(m) = match_at(bytes, self.pos, esc) {
                return Some(m);
            }
            i = esc + 1;
        }
        None
    }
}

/// Try to match an escape whose ESC byte sits at `esc`. `floor` is the lowest
/// index the match may start at.
fn match_at(bytes: &[u8], floor: usize, esc: usize) -> Option<EscapeMatch> {
    if bytes.get(esc + 1) != Some(&CSI) {
        return None;
    }

    let params_start = esc + 2;
    let params_len = bytes[params_start..]
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b'+' || **b == b';')
        .count();
    let params_end = params_start + params_len;

    if bytes.get(params_end) != Some(&SGR_FINAL) {
        return None;
    }

    let start = if esc > floor && bytes[esc - 1] == LEAD {
        esc - 1
    } else {
        esc
    };
    let mut end = params_end + 1;
    if bytes.get(end) == Some(&TRAIL) {
        end += 1;
    }

    Some(EscapeMatch {
        start,
        params: (params_start, params_end),
        end,
    })
}

/// Whether `code` is one or more digit groups, each optionally followed by a
/// single `;`.
pub fn is_style_code(code: &str) -> bool {
    let mut prev_digit = false;
    for b in code.bytes() {
        match b {
            b'0'..=b'9' => prev_digit = true,
            b';' if prev_digit => prev_digit = false,
            _ => return false,
        }
    }
    // Non-empty, and the first byte was a digit (a leading ';' fails above).
    !code.is_empty()
}

fn classify_text(text: &str) -> Segment<'_> {
    if text.is_empty() {
        Segment::Empty
    } else {
        Segment::Literal(text)
    }
}

fn classify_code(code: &str) -> Segment<'_> {
    if code.is_empty() {
        Segment::Empty
    } else if is_style_code(code) {
        Segment::Style(code)
    } else {
        Segment::Literal(code)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(code) = self.pending_code.take() {
            return Some(classify_code(code));
        }
        if self.done {
            return None;
        }

        match self.find_escape() {
            Some(m) => {
                let text = &self.input[self.pos..m.start];
                self.pending_code = Some(&self.input[m.params.0..m.params.1]);
                self.pos = m.end;
                Some(classify_text(text))
            }
            None => {
                self.done = true;
                Some(classify_text(&self.input[self.pos..]))
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Scan `input` into classified segments.
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(input: &str) -> Vec<Segment<'_>> {
        scan(input).collect()
    }

    #[test]
    fn plain_text_is_single_literal() {
        assert_eq!(segments("hello world"), vec![Segment::Literal("hello world")]);
    }

    #[test]
    fn digits_in_plain_text_stay_literal() {
        assert_eq!(segments("42"), vec![Segment::Literal("42")]);
    }

    #[test]
    fn empty_input_is_single_empty_marker() {
        assert_eq!(segments(""), vec![Segment::Empty]);
    }

    #[test]
    fn splits_around_escape() {
        assert_eq!(
            segments("a\x1b[31mb"),
            vec![Segment::Literal("a"), Segment::Style("31"), Segment::Literal("b")]
        );
    }

    #[test]
    fn leading_escape_yields_empty_first_piece() {
        assert_eq!(
            segments("\x1b[1;31mRed"),
            vec![Segment::Empty, Segment::Style("1;31"), Segment::Literal("Red")]
        );
    }

    #[test]
    fn adjacent_escapes_yield_empty_between() {
        assert_eq!(
            segments("\x1b[1m\x1b[32mok\x1b[0m"),
            vec![
                Segment::Empty,
                Segment::Style("1"),
                Segment::Empty,
                Segment::Style("32"),
                Segment::Literal("ok"),
                Segment::Style("0"),
                Segment::Empty,
            ]
        );
    }

    #[test]
    fn bare_reset_escape_is_empty_code() {
        assert_eq!(
            segments("x\x1b[my"),
            vec![Segment::Literal("x"), Segment::Empty, Segment::Literal("y")]
        );
    }

    #[test]
    fn strips_readline_framing_bytes() {
        assert_eq!(
            segments("a\x01\x1b[33m\x02b"),
            vec![Segment::Literal("a"), Segment::Style("33"), Segment::Literal("b")]
        );
    }

    #[test]
    fn lone_framing_bytes_are_text() {
        assert_eq!(segments("a\x01b\x02"), vec![Segment::Literal("a\x01b\x02")]);
    }

    #[test]
    fn non_grammar_code_passes_through_without_framing() {
        assert_eq!(
            segments("a\x1b[3+1mb"),
            vec![Segment::Literal("a"), Segment::Literal("3+1"), Segment::Literal("b")]
        );
    }

    #[test]
    fn other_escapes_are_left_in_text() {
        assert_eq!(
            segments("a\x1b[2Jb\x1b[?25l"),
            vec![Segment::Literal("a\x1b[2Jb\x1b[?25l")]
        );
    }

    #[test]
    fn unterminated_escape_is_text() {
        assert_eq!(segments("a\x1b[31"), vec![Segment::Literal("a\x1b[31")]);
    }

    #[test]
    fn escape_after_failed_candidate_still_matches() {
        assert_eq!(
            segments("\x1b\x1b[31mx"),
            vec![Segment::Literal("\x1b"), Segment::Style("31"), Segment::Literal("x")]
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            segments("héllo \x1b[32m✓"),
            vec![Segment::Literal("héllo "), Segment::Style("32"), Segment::Literal("✓")]
        );
    }

    #[test]
    fn style_code_grammar() {
        assert!(is_style_code("0"));
        assert!(is_style_code("1;31"));
        assert!(is_style_code("40;37"));
        assert!(is_style_code("31;"));
        assert!(!is_style_code(""));
        assert!(!is_style_code(";31"));
        assert!(!is_style_code("1;;31"));
        assert!(!is_style_code("3+1"));
    }

    #[test]
    fn scanner_is_fused() {
        let mut scanner = scan("abc");
        assert_eq!(scanner.next(), Some(Segment::Literal("abc")));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }
}
