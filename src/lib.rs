// Coding Notes - Core Library
// Synthetic clinical notes labeled with ICD-10 and CPT codes

pub mod vocabulary;
pub mod generator;
pub mod table;
pub mod rng;
pub mod logging;

// Re-export commonly used types
pub use vocabulary::{
    Condition, Procedure, Vocabulary,
    DEMOGRAPHICS, CONDITIONS, PROCEDURES,
};
pub use generator::{
    GeneratedNote, NoteGenerator,
    capitalize, compose_note,
};
pub use table::{
    CodingRecord, CodingTable,
    write_csv, load_csv,
    CODE_SEPARATOR, CSV_HEADER,
};
pub use rng::{make_rng, entropy_seed};
pub use logging::{init_logging, log_filter, DEFAULT_LOG_DIRECTIVE};

use rand::Rng;

/// Records per run
pub const NUM_SAMPLES: usize = 100;

/// Every row at an index divisible by this gets a second code in each field
pub const EXTRA_CODE_STRIDE: usize = 15;

/// Chance that a note gets a second procedure sentence
pub const ADDITIONAL_TREATMENT_PROBABILITY: f64 = 0.3;

pub const DEFAULT_OUTPUT_FILE: &str = "annotated_coding_data.csv";

/// Stream id used to derive the run's RNG from the global seed
pub const RNG_STREAM_ID: &str = "coding_notes";

/// Build the standard 100-row table from the built-in vocabulary
pub fn generate_table<R: Rng + ?Sized>(rng: &mut R) -> CodingTable {
    let vocabulary = Vocabulary::standard();
    let generator = NoteGenerator::new(&vocabulary);
    CodingTable::assemble(&generator, rng, NUM_SAMPLES, EXTRA_CODE_STRIDE)
}

/// Same as [`generate_table`], seeded
pub fn generate_seeded_table(seed: u64) -> CodingTable {
    let mut rng = make_rng(seed, RNG_STREAM_ID);
    generate_table(&mut rng)
}
