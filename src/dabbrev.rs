// src/dabbrev.rs
//! Dynamic abbreviation: complete the word left of the cursor with other
//! words already visible in the terminal.
//!
//! The expander never touches the terminal directly. It is handed a snapshot
//! of the screen and answers with an [`Edit`], i.e. how many characters to rub
//! out and what to type instead. The window feeds those bytes to the child as
//! if the user had typed them.

use unicode_width::UnicodeWidthChar;

/// Byte sent to the child to erase one character (what BackSpace sends).
pub const ERASE: u8 = 0x7f;

/// Visible terminal text and the cursor as a char offset into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub cursor: usize,
}

impl Screen {
    /// Assemble a snapshot from the text above the cursor row, the cursor
    /// row itself and the text below it.
    ///
    /// `above` must end the way the terminal reports it: with a newline when
    /// the row before the cursor row is a hard line break, without one when
    /// it soft-wraps into the cursor row. `cursor_col` is in cells. Blank
    /// cells the terminal trimmed from the cursor row are put back up to the
    /// cursor.
    pub fn from_rows(above: &str, line: &str, cursor_col: usize, below: &str) -> Self {
        let line = line.trim_end_matches('\n');
        let index = char_index_at_column(line, cursor_col);
        let len = line.chars().count();

        let mut text = String::with_capacity(above.len() + line.len() + below.len() + 1);
        text.push_str(above);
        text.push_str(line);
        text.extend(std::iter::repeat_n(' ', index.saturating_sub(len)));
        let cursor = above.chars().count() + index;
        if !below.is_empty() {
            text.push('\n');
            text.push_str(below);
        }
        Self { text, cursor }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Edit {
    pub erase: usize,
    pub insert: String,
}

impl Edit {
    pub fn is_empty(&self) -> bool {
        self.erase == 0 && self.insert.is_empty()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![ERASE; self.erase];
        bytes.extend_from_slice(self.insert.as_bytes());
        bytes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// Replace the previous completion with the next candidate.
    Insert(Edit),
    /// Candidates ran out; the edit restores the original prefix.
    Exhausted(Edit),
    /// Nothing to complete at the cursor.
    NoCandidates,
}

#[derive(Debug)]
struct Session {
    candidates: Vec<String>,
    prefix_len: usize,
    next: usize,
    inserted: usize,
}

#[derive(Debug, Default)]
pub struct Expander {
    session: Option<Session>,
}

impl Expander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Forget the current completion. Whatever was inserted stays.
    pub fn stop(&mut self) {
        if self.session.take().is_some() {
            tracing::trace!("word expansion stopped");
        }
    }

    /// Advance to the next completion. The screen is only read when a new
    /// expansion starts; later calls cycle through the candidates found then.
    pub fn expand<S, W>(&mut self, read_screen: S, is_word_char: W) -> Expansion
    where
        S: FnOnce() -> Option<Screen>,
        W: Fn(char) -> bool,
    {
        if self.session.is_none() {
            let Some(screen) = read_screen() else {
                return Expansion::NoCandidates;
            };
            let Some((prefix, candidates)) = find_candidates(&screen, &is_word_char) else {
                return Expansion::NoCandidates;
            };
            tracing::debug!(%prefix, count = candidates.len(), "word expansion started");
            self.session = Some(Session {
                candidates,
                prefix_len: prefix.chars().count(),
                next: 0,
                inserted: 0,
            });
        }

        let Some(session) = self.session.as_mut() else {
            return Expansion::NoCandidates;
        };

        match session.candidates.get(session.next) {
            Some(candidate) => {
                let suffix: String = candidate.chars().skip(session.prefix_len).collect();
                let edit = Edit { erase: session.inserted, insert: suffix };
                session.inserted = edit.insert.chars().count();
                session.next += 1;
                Expansion::Insert(edit)
            }
            None => {
                let edit = Edit { erase: session.inserted, insert: String::new() };
                self.session = None;
                Expansion::Exhausted(edit)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Word {
    start: usize,
    end: usize,
}

/// Split `chars` into maximal runs of word characters, as char offsets.
fn words(chars: &[char], is_word_char: &impl Fn(char) -> bool) -> Vec<Word> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, &c) in chars.iter().enumerate() {
        match (is_word_char(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                words.push(Word { start: s, end: i });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(Word { start: s, end: chars.len() });
    }
    words
}

/// Char index within `line` of the cell at `col`, accounting for wide
/// characters. Columns past the end of the line map past its last char.
fn char_index_at_column(line: &str, col: usize) -> usize {
    let mut cells = 0;
    for (i, c) in line.chars().enumerate() {
        if cells >= col {
            return i;
        }
        cells += c.width().unwrap_or(0);
    }
    line.chars().count() + col.saturating_sub(cells)
}

/// Prefix at the cursor and its completions, nearest first: backward from the
/// cursor, then forward.
fn find_candidates(
    screen: &Screen,
    is_word_char: &impl Fn(char) -> bool,
) -> Option<(String, Vec<String>)> {
    let chars: Vec<char> = screen.text.chars().collect();
    let cursor = screen.cursor;
    if cursor > chars.len() {
        return None;
    }

    let prefix_start = chars[..cursor]
        .iter()
        .rposition(|&c| !is_word_char(c))
        .map_or(0, |i| i + 1);
    if prefix_start == cursor {
        return None;
    }
    let prefix: String = chars[prefix_start..cursor].iter().collect();

    let words = words(&chars, is_word_char);
    let before = words.iter().rev().filter(|w| w.end <= prefix_start);
    let after = words.iter().filter(|w| w.start >= cursor);

    let mut candidates: Vec<String> = Vec::new();
    for word in before.chain(after) {
        let text: String = chars[word.start..word.end].iter().collect();
        if text.len() > prefix.len() && text.starts_with(&prefix) && !candidates.contains(&text) {
            candidates.push(text);
        }
    }

    (!candidates.is_empty()).then_some((prefix, candidates))
}
