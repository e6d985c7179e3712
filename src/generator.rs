// 📝 Note Generator - Synthesizes one labeled clinical note per call
//
// Template:
//   "Patient is a {demographic} diagnosed with {condition}. {Procedure}."
// optionally followed by a second " {Procedure}." sentence.

use crate::vocabulary::{Condition, Procedure, Vocabulary};
use crate::ADDITIONAL_TREATMENT_PROBABILITY;
use rand::Rng;

// ============================================================================
// GENERATED NOTE
// ============================================================================

/// Result of a single generator call.
///
/// Codes are the primary ones only. Extra codes are added later, during
/// table assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNote {
    pub note: String,
    pub icd10: &'static str,
    pub cpt: &'static str,
}

// ============================================================================
// TEXT HELPERS
// ============================================================================

/// First character upper-cased, the rest lower-cased.
///
/// "performed ECG" -> "Performed ecg"
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Fill the note template. No randomness here.
pub fn compose_note(
    demographic: &str,
    condition: &Condition,
    procedure: &Procedure,
    additional: Option<&Procedure>,
) -> String {
    let mut note = format!(
        "Patient is a {} diagnosed with {}. {}.",
        demographic,
        condition.description,
        capitalize(procedure.description)
    );

    if let Some(extra) = additional {
        note.push(' ');
        note.push_str(&capitalize(extra.description));
        note.push('.');
    }

    note
}

// ============================================================================
// NOTE GENERATOR
// ============================================================================

pub struct NoteGenerator<'a> {
    vocabulary: &'a Vocabulary,

    /// Chance of appending a second procedure sentence
    additional_probability: f64,
}

impl<'a> NoteGenerator<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        NoteGenerator {
            vocabulary,
            additional_probability: ADDITIONAL_TREATMENT_PROBABILITY,
        }
    }

    /// Override the additional-treatment chance (clamped to 0.0..=1.0)
    pub fn with_additional_probability(mut self, probability: f64) -> Self {
        self.additional_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Draw one record.
    ///
    /// Draw order is fixed (demographic, condition, procedure, coin, extra
    /// procedure) so a seeded RNG reproduces the same notes.
    pub fn generate_record<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedNote {
        let demographic = self.vocabulary.sample_demographic(rng);
        let condition = self.vocabulary.sample_condition(rng);
        let procedure = self.vocabulary.sample_procedure(rng);

        // The extra sentence does not change the returned CPT code
        let additional = if rng.gen_bool(self.additional_probability) {
            Some(self.vocabulary.sample_procedure(rng))
        } else {
            None
        };

        GeneratedNote {
            note: compose_note(demographic, condition, procedure, additional),
            icd10: condition.icd10,
            cpt: procedure.cpt,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
