#![forbid(unsafe_code)]

//! Character-class tokenizer.
//!
//! An explicit enum-driven state machine with a single dispatch loop.
//! Token boundaries:
//!
//! - open brackets/quotes glue to the following word;
//! - trailing punctuation and close brackets glue to the preceding word;
//! - whitespace runs form their own (blank) atoms;
//! - a wide (2-cell) character ends its word immediately after being
//!   consumed, so CJK text wraps per character;
//! - any unclassified character is its own one-character token.
//!
//! The output is lossless: concatenating every atom's text reproduces
//! the input exactly.

use crate::atom::{Atom, char_width};

/// Automaton states. `Tail` absorbs trailing close-brackets and
/// punctuation after a word ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    OpenRun,
    Blank,
    Word,
    Tail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Open,
    Close,
    Blank,
    Alnum,
    Other,
}

fn classify(ch: char) -> Class {
    if ch.is_whitespace() {
        Class::Blank
    } else if ch.is_alphanumeric() {
        Class::Alnum
    } else if "([{‘“«„「『（［｛〈《【".contains(ch) {
        Class::Open
    } else if ")]},.;:!?’”»」』）］｝〉》】、。，．！？…‥".contains(ch) {
        Class::Close
    } else {
        Class::Other
    }
}

/// Split `text` into atoms and count its alphanumeric characters.
///
/// The weight increments once per alphanumeric character regardless of
/// display width. Feeding the same string always yields the same
/// boundaries, and re-tokenizing the joined output is a fixed point.
#[must_use]
pub fn tokenize(text: &str) -> (Vec<Atom>, usize) {
    let mut atoms = Vec::new();
    let mut buf = String::new();
    let mut state = State::Start;
    let mut weight = 0usize;

    let mut emit = |buf: &mut String, atoms: &mut Vec<Atom>| {
        if !buf.is_empty() {
            atoms.push(Atom::Word(std::mem::take(buf)));
        }
    };

    for ch in text.chars() {
        let class = classify(ch);
        if class == Class::Alnum {
            weight += 1;
        }

        // Each character is dispatched until a state consumes it; every
        // consumed character lands in exactly one token (losslessness).
        loop {
            match state {
                State::Start => {
                    buf.push(ch);
                    state = match class {
                        Class::Open => State::OpenRun,
                        Class::Blank => State::Blank,
                        Class::Alnum if char_width(ch) == 2 => State::Tail,
                        Class::Alnum => State::Word,
                        _ => {
                            // Unclassified: a one-character token.
                            emit(&mut buf, &mut atoms);
                            State::Start
                        }
                    };
                }
                State::OpenRun => match class {
                    Class::Open => buf.push(ch),
                    Class::Alnum => {
                        buf.push(ch);
                        state = if char_width(ch) == 2 {
                            State::Tail
                        } else {
                            State::Word
                        };
                    }
                    _ => {
                        emit(&mut buf, &mut atoms);
                        state = State::Start;
                        continue;
                    }
                },
                State::Blank => match class {
                    Class::Blank => buf.push(ch),
                    _ => {
                        emit(&mut buf, &mut atoms);
                        state = State::Start;
                        continue;
                    }
                },
                State::Word => match class {
                    Class::Alnum => {
                        buf.push(ch);
                        if char_width(ch) == 2 {
                            state = State::Tail;
                        }
                    }
                    Class::Close => {
                        buf.push(ch);
                        state = State::Tail;
                    }
                    _ => {
                        emit(&mut buf, &mut atoms);
                        state = State::Start;
                        continue;
                    }
                },
                State::Tail => match class {
                    Class::Close => buf.push(ch),
                    _ => {
                        emit(&mut buf, &mut atoms);
                        state = State::Start;
                        continue;
                    }
                },
            }
            break;
        }
    }

    if !buf.is_empty() {
        atoms.push(Atom::Word(buf));
    }
    (atoms, weight)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rejoin_is_lossless(s in "[a-zA-Z0-9 ()\\[\\].,!?+*/-]{0,80}") {
            let (atoms, _) = tokenize(&s);
            let joined: String = atoms.iter().map(Atom::text).collect();
            prop_assert_eq!(joined, s);
        }

        #[test]
        fn tokenize_is_idempotent(s in "\\PC{0,60}") {
            let (first, _) = tokenize(&s);
            let joined: String = first.iter().map(Atom::text).collect();
            let (second, _) = tokenize(&joined);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn weight_matches_alnum_count(s in "\\PC{0,60}") {
            let (_, weight) = tokenize(&s);
            let expected = s.chars().filter(|c| c.is_alphanumeric()).count();
            prop_assert_eq!(weight, expected);
        }
    }
}
