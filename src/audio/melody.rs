//! Fixed tunes played between rounds.

use crate::audio::Note;

/// Victory jingle; `None` is a rest. Every entry lasts
/// [`MELODY_STEP_MS`](crate::config::MELODY_STEP_MS).
pub const VICTORY: [Option<Note>; 15] = [
    Some(Note::E5),
    Some(Note::G5),
    Some(Note::A5),
    None,
    Some(Note::E5),
    Some(Note::G5),
    Some(Note::B5),
    Some(Note::A5),
    None,
    Some(Note::E5),
    Some(Note::G5),
    Some(Note::A5),
    None,
    Some(Note::G5),
    Some(Note::E5),
];
