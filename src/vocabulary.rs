// 📚 Vocabulary - Fixed lookup tables for note synthesis
// Demographic descriptors, diagnoses (ICD-10) and procedures (CPT)
//
// Tables are plain immutable data. The generator borrows them, it never owns
// or mutates them.

use anyhow::{ensure, Result};
use rand::Rng;

// ============================================================================
// ENTRIES
// ============================================================================

/// A diagnosis paired with its ICD-10 code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    /// Free-text diagnosis, used verbatim in the note
    pub description: &'static str,

    /// ICD-10 code (e.g. "J18.9")
    pub icd10: &'static str,
}

/// A procedure paired with its CPT code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Procedure {
    /// Free-text procedure, capitalized when placed in the note
    pub description: &'static str,

    /// CPT code. Bundles are semicolon-joined (e.g. "D0120;D1110") and are
    /// written out as-is.
    pub cpt: &'static str,
}

impl Condition {
    pub const fn new(description: &'static str, icd10: &'static str) -> Self {
        Condition { description, icd10 }
    }
}

impl Procedure {
    pub const fn new(description: &'static str, cpt: &'static str) -> Self {
        Procedure { description, cpt }
    }

    /// True when the CPT value holds more than one code
    pub fn is_bundle(&self) -> bool {
        self.cpt.contains(';')
    }
}

// ============================================================================
// STANDARD TABLES
// ============================================================================

pub static DEMOGRAPHICS: [&str; 10] = [
    "45-year-old male",
    "30-year-old female",
    "Senior patient",
    "Child",
    "50-year-old male",
    "25-year-old female",
    "60-year-old female",
    "35-year-old male",
    "40-year-old female",
    "55-year-old male",
];

pub static CONDITIONS: [Condition; 15] = [
    Condition::new("acute lower back pain", "M54.5"),
    Condition::new("hypertension", "I10"),
    Condition::new("type 2 diabetes mellitus", "E11.9"),
    Condition::new("asthma", "J45.40"),
    Condition::new("allergic rhinitis", "J30.9"),
    Condition::new("osteoarthritis of the knee", "M17.11"),
    Condition::new("chronic obstructive pulmonary disease", "J44.9"),
    Condition::new("depression", "F33.1"),
    Condition::new("otitis media", "H66.90"),
    Condition::new("recurrent tonsillitis", "J35.01"),
    Condition::new("meniscal tear", "M23.221"),
    Condition::new("type 1 diabetes mellitus", "E10.9"),
    Condition::new("allergic conjunctivitis", "J30.2"),
    Condition::new("migraine headache", "G43.909"),
    Condition::new("pneumonia", "J18.9"),
];

pub static PROCEDURES: [Procedure; 20] = [
    Procedure::new("prescribed physical therapy", "97110"),
    Procedure::new("initiated insulin therapy", "99214"),
    Procedure::new("performed ECG", "93000"),
    Procedure::new("administered antibiotics", "99213"),
    Procedure::new("prescribed inhalers", "94640"),
    Procedure::new("administered bronchodilators", "94660"),
    Procedure::new("performed laparoscopic appendectomy", "44970"),
    Procedure::new("prescribed antihistamines", "99213"),
    Procedure::new("scheduled pulmonary rehabilitation", "99195"),
    Procedure::new("administered nasal corticosteroids", "99214"),
    Procedure::new("initiated cognitive behavioral therapy", "90834"),
    Procedure::new("prescribed antidepressants", "90832"),
    Procedure::new("performed knee arthroscopy", "29881"),
    Procedure::new("administered joint injections", "20610"),
    Procedure::new("performed dental cleaning and examination", "D0120;D1110"),
    Procedure::new("performed tonsillectomy", "42820"),
    Procedure::new("administered inhaled corticosteroids", "94640"),
    Procedure::new("scheduled follow-up appointment", "99215"),
    Procedure::new("provided dietary and exercise recommendations", "99396"),
    Procedure::new("administered pain management medications", "97110"),
];

// ============================================================================
// VOCABULARY
// ============================================================================

/// The three tables the generator samples from.
///
/// Every table is non-empty (checked in `new`), so sampling never fails.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    demographics: &'static [&'static str],
    conditions: &'static [Condition],
    procedures: &'static [Procedure],
}

impl Vocabulary {
    pub fn new(
        demographics: &'static [&'static str],
        conditions: &'static [Condition],
        procedures: &'static [Procedure],
    ) -> Result<Self> {
        ensure!(!demographics.is_empty(), "Vocabulary has no demographic descriptors");
        ensure!(!conditions.is_empty(), "Vocabulary has no conditions");
        ensure!(!procedures.is_empty(), "Vocabulary has no procedures");

        Ok(Vocabulary {
            demographics,
            conditions,
            procedures,
        })
    }

    /// The built-in tables
    pub fn standard() -> Self {
        Vocabulary {
            demographics: &DEMOGRAPHICS,
            conditions: &CONDITIONS,
            procedures: &PROCEDURES,
        }
    }

    pub fn demographics(&self) -> &'static [&'static str] {
        self.demographics
    }

    pub fn conditions(&self) -> &'static [Condition] {
        self.conditions
    }

    pub fn procedures(&self) -> &'static [Procedure] {
        self.procedures
    }

    // Uniform draws, with replacement

    pub fn sample_demographic<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.demographics[rng.gen_range(0..self.demographics.len())]
    }

    pub fn sample_condition<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static Condition {
        &self.conditions[rng.gen_range(0..self.conditions.len())]
    }

    pub fn sample_procedure<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static Procedure {
        &self.procedures[rng.gen_range(0..self.procedures.len())]
    }

    /// Is `code` one of the ICD-10 codes in this vocabulary?
    pub fn has_icd10(&self, code: &str) -> bool {
        self.conditions.iter().any(|c| c.icd10 == code)
    }

    /// Is `code` one of the CPT values (bundles compared whole)?
    pub fn has_cpt(&self, code: &str) -> bool {
        self.procedures.iter().any(|p| p.cpt == code)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::make_rng;
    use std::collections::HashSet;

    static NO_DEMOGRAPHICS: [&str; 0] = [];
    static ONE_CONDITION: [Condition; 1] = [Condition::new("pneumonia", "J18.9")];
    static ONE_PROCEDURE: [Procedure; 1] = [Procedure::new("performed ECG", "93000")];

    #[test]
    fn test_standard_table_sizes() {
        let vocab = Vocabulary::standard();

        assert_eq!(vocab.demographics().len(), 10);
        assert_eq!(vocab.conditions().len(), 15);
        assert_eq!(vocab.procedures().len(), 20);
    }

    #[test]
    fn test_dental_procedure_is_the_only_bundle() {
        let bundles: Vec<&Procedure> = PROCEDURES.iter().filter(|p| p.is_bundle()).collect();

        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].cpt, "D0120;D1110");
        assert_eq!(bundles[0].description, "performed dental cleaning and examination");
    }

    #[test]
    fn test_no_commas_in_vocabulary_text() {
        assert!(DEMOGRAPHICS.iter().all(|d| !d.contains(',')));
        assert!(CONDITIONS.iter().all(|c| !c.description.contains(',')));
        assert!(PROCEDURES.iter().all(|p| !p.description.contains(',')));
    }

    #[test]
    fn test_new_rejects_empty_table() {
        let result = Vocabulary::new(&NO_DEMOGRAPHICS, &ONE_CONDITION, &ONE_PROCEDURE);

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("demographic"));
    }

    #[test]
    fn test_code_membership() {
        let vocab = Vocabulary::standard();

        assert!(vocab.has_icd10("J18.9"));
        assert!(vocab.has_icd10("G43.909"));
        assert!(!vocab.has_icd10("Z00.00"));

        assert!(vocab.has_cpt("93000"));
        assert!(vocab.has_cpt("D0120;D1110"));
        // Half of a bundle is not a vocabulary value on its own
        assert!(!vocab.has_cpt("D0120"));
    }

    #[test]
    fn test_sampling_stays_in_table_and_covers_it() {
        let vocab = Vocabulary::standard();
        let mut rng = make_rng(7, "vocabulary_test");

        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let condition = vocab.sample_condition(&mut rng);
            assert!(vocab.has_icd10(condition.icd10));
            seen.insert(condition.description);
        }

        // 2000 uniform draws over 15 entries hit every one
        assert_eq!(seen.len(), CONDITIONS.len());
    }
}
