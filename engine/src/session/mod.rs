//! Group Maker session
//!
//! Ties the pipeline together for a shell (CLI, Python, UI):
//!
//! 1. Parse the raw text into names
//! 2. Validate the options against the name count
//! 3. Shuffle with the seeded LCG, or the entropy source when unseeded
//! 4. Distribute round-robin
//! 5. Record the result in history
//!
//! Text that is blank after trimming is rejected before parsing, even with
//! `trim_empty` off. A failed generation leaves history and the remembered
//! input untouched.

use tracing::debug;

use crate::distribution::distribute_balanced;
use crate::history::{HistoryEntry, HistoryStore};
use crate::models::{GroupOptions, GroupSet, GroupingError};
use crate::parser::parse_names;
use crate::rng::{EntropySource, RandomSource, SeededRng};
use crate::shuffle::shuffle;

/// Input of the last successful generation, replayed by `reshuffle`
#[derive(Debug, Clone, PartialEq, Eq)]
struct GenerationInput {
    text: String,
    options: GroupOptions,
}

/// Generation pipeline plus undo/redo history
///
/// # Example
/// ```
/// use group_maker_core::{GroupMaker, GroupOptions};
///
/// let mut maker = GroupMaker::new();
/// let options = GroupOptions::by_count(2).with_seed("x");
///
/// let groups = maker.generate("Ann\nBob\nCam\nDee\nEve", &options).unwrap();
/// assert_eq!(groups.groups(), &[vec!["Eve", "Cam", "Bob"], vec!["Dee", "Ann"]]);
/// ```
#[derive(Debug)]
pub struct GroupMaker<S: RandomSource = EntropySource> {
    history: HistoryStore,
    entropy: S,
    last_input: Option<GenerationInput>,
}

impl GroupMaker<EntropySource> {
    /// Session using thread-local entropy for unseeded generations
    pub fn new() -> Self {
        Self::with_entropy(EntropySource)
    }
}

impl Default for GroupMaker<EntropySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> GroupMaker<S> {
    /// Session drawing unseeded shuffles from `entropy`
    pub fn with_entropy(entropy: S) -> Self {
        Self {
            history: HistoryStore::new(),
            entropy,
            last_input: None,
        }
    }

    /// Generate groups from raw text and push them onto history
    ///
    /// # Errors
    /// `EmptyInput` for blank text, otherwise any [`GroupingError`] from
    /// validation; nothing is recorded on error.
    pub fn generate(
        &mut self,
        text: &str,
        options: &GroupOptions,
    ) -> Result<&GroupSet, GroupingError> {
        if text.trim().is_empty() {
            return Err(GroupingError::EmptyInput);
        }

        let names = parse_names(text, options.remove_duplicates, options.trim_empty);
        options.validate(names.len())?;

        let shuffled = match options.effective_seed() {
            Some(seed) => shuffle(&names, &mut SeededRng::from_seed_str(seed)),
            None => shuffle(&names, &mut self.entropy),
        };
        let groups = distribute_balanced(&shuffled, options)?;

        self.last_input = Some(GenerationInput {
            text: text.to_string(),
            options: options.clone(),
        });

        let entry = self.history.push(groups);
        debug!(
            generation = entry.generation(),
            names = names.len(),
            groups = entry.groups().len(),
            seeded = options.effective_seed().is_some(),
            "generated groups"
        );
        Ok(entry.groups())
    }

    /// Generate again from the last successful input
    ///
    /// With a seed this reproduces the same grouping as a new entry.
    ///
    /// # Errors
    /// `NothingToReshuffle` before the first successful `generate`.
    pub fn reshuffle(&mut self) -> Result<&GroupSet, GroupingError> {
        let input = self
            .last_input
            .clone()
            .ok_or(GroupingError::NothingToReshuffle)?;
        self.generate(&input.text, &input.options)
    }

    /// Step back to the previous result, `None` if there is none
    pub fn undo(&mut self) -> Option<&GroupSet> {
        let entry = self.history.undo()?;
        debug!(generation = entry.generation(), "undo");
        Some(entry.groups())
    }

    /// Step forward to the next result, `None` if there is none
    pub fn redo(&mut self) -> Option<&GroupSet> {
        let entry = self.history.redo()?;
        debug!(generation = entry.generation(), "redo");
        Some(entry.groups())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Result currently shown
    pub fn current(&self) -> Option<&GroupSet> {
        self.history.current().map(HistoryEntry::groups)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Options of the last successful generation
    pub fn last_options(&self) -> Option<&GroupOptions> {
        self.last_input.as_ref().map(|input| &input.options)
    }
}
