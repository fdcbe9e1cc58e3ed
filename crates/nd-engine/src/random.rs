//! Random face sources.
//!
//! The engine never reaches for a global RNG. Every rolling operation takes
//! a [`RandomSource`] so sessions can seed it, and tests can script exact
//! face sequences with [`ScriptedSource`].

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// Produces uniform, independent die faces.
pub trait RandomSource {
    /// Draw a value uniformly from `1..=max`. `max` is at least 1.
    fn next_int(&mut self, max: u32) -> u32;
}

impl RandomSource for StdRng {
    fn next_int(&mut self, max: u32) -> u32 {
        self.random_range(1..=max)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_int(&mut self, max: u32) -> u32 {
        (**self).next_int(max)
    }
}

/// A source that replays a fixed sequence of faces.
///
/// Values are handed out verbatim, without being clamped to `max`, so an
/// out-of-range script surfaces as an invalid-face error in the resolver.
/// Drawing past the end of the script panics: it means a test scripted
/// fewer faces than the code under test consumes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    faces: VecDeque<u32>,
    drawn: usize,
}

impl ScriptedSource {
    /// Create a source that will return `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            drawn: 0,
        }
    }

    /// How many values have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// How many scripted values are left.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, _max: u32) -> u32 {
        let Some(face) = self.faces.pop_front() else {
            panic!("scripted source ran out of faces after {} draws", self.drawn);
        };
        self.drawn += 1;
        face
    }
}
