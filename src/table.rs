// 🗂️ Coding Table - Assembly + CSV output
//
// 1. Call the generator N times (generation order is row order)
// 2. Second pass: every `stride`-th row gets one extra ICD-10 and one extra CPT
// 3. Serialize to CSV (header: clinical_note,icd10_codes,cpt_codes)

use crate::generator::{GeneratedNote, NoteGenerator};
use crate::vocabulary::Vocabulary;
use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Separator between codes inside `icd10_codes` / `cpt_codes`
pub const CODE_SEPARATOR: char = ';';

/// Column names, in output order
pub const CSV_HEADER: [&str; 3] = ["clinical_note", "icd10_codes", "cpt_codes"];

// ============================================================================
// CODING RECORD
// ============================================================================

/// One output row. Field names are the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingRecord {
    pub clinical_note: String,

    /// Semicolon-joined ICD-10 codes (one or two)
    pub icd10_codes: String,

    /// Semicolon-joined CPT codes (one or two). A bundled CPT value keeps its
    /// own semicolon, so this field is not split-safe.
    pub cpt_codes: String,
}

impl From<GeneratedNote> for CodingRecord {
    fn from(generated: GeneratedNote) -> Self {
        CodingRecord {
            clinical_note: generated.note,
            icd10_codes: generated.icd10.to_string(),
            cpt_codes: generated.cpt.to_string(),
        }
    }
}

impl CodingRecord {
    pub fn append_icd10(&mut self, code: &str) {
        self.icd10_codes.push(CODE_SEPARATOR);
        self.icd10_codes.push_str(code);
    }

    pub fn append_cpt(&mut self, code: &str) {
        self.cpt_codes.push(CODE_SEPARATOR);
        self.cpt_codes.push_str(code);
    }

    /// Code before the first separator
    pub fn primary_icd10(&self) -> &str {
        first_code(&self.icd10_codes)
    }

    /// Code before the first separator. For a bundled primary this is only
    /// the first half of the bundle.
    pub fn primary_cpt(&self) -> &str {
        first_code(&self.cpt_codes)
    }
}

fn first_code(codes: &str) -> &str {
    codes.split(CODE_SEPARATOR).next().unwrap_or(codes)
}

// ============================================================================
// CODING TABLE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodingTable {
    records: Vec<CodingRecord>,
}

impl CodingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate `num_samples` records, then run the extra-code pass every
    /// `stride` rows.
    pub fn assemble<R: Rng + ?Sized>(
        generator: &NoteGenerator<'_>,
        rng: &mut R,
        num_samples: usize,
        stride: usize,
    ) -> Self {
        let mut table = CodingTable {
            records: Vec::with_capacity(num_samples),
        };

        for _ in 0..num_samples {
            table.push(generator.generate_record(rng).into());
        }

        let annotated = table.annotate_extra_codes(generator.vocabulary(), rng, stride);

        info!(records = table.len(), annotated, "Assembled coding table");

        table
    }

    /// Append one freshly drawn ICD-10 and CPT code to every row whose index
    /// is a multiple of `stride`. Draws may repeat the primary code.
    ///
    /// A stride of 0 annotates nothing. Returns the number of rows touched.
    pub fn annotate_extra_codes<R: Rng + ?Sized>(
        &mut self,
        vocabulary: &Vocabulary,
        rng: &mut R,
        stride: usize,
    ) -> usize {
        if stride == 0 {
            return 0;
        }

        let mut annotated = 0;
        for (index, record) in self.records.iter_mut().enumerate().step_by(stride) {
            let condition = vocabulary.sample_condition(rng);
            let procedure = vocabulary.sample_procedure(rng);

            record.append_icd10(condition.icd10);
            record.append_cpt(procedure.cpt);

            debug!(
                row = index,
                icd10 = %record.icd10_codes,
                cpt = %record.cpt_codes,
                "Added extra codes"
            );
            annotated += 1;
        }

        annotated
    }

    pub fn push(&mut self, record: CodingRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CodingRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodingRecord> {
        self.records.iter()
    }

    /// Write header + rows as CSV to any writer.
    ///
    /// The header is written explicitly so an empty table still gets one.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        wtr.write_record(CSV_HEADER).context("Failed to write CSV header")?;
        for record in &self.records {
            wtr.serialize(record).context("Failed to serialize coding record")?;
        }

        wtr.flush().context("Failed to flush CSV writer")?;
        Ok(())
    }
}

impl From<Vec<CodingRecord>> for CodingTable {
    fn from(records: Vec<CodingRecord>) -> Self {
        CodingTable { records }
    }
}

// ============================================================================
// FILE I/O
// ============================================================================

/// Create (or truncate) `path` and write the table to it
pub fn write_csv(table: &CodingTable, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    table
        .to_writer(file)
        .with_context(|| format!("Failed to write CSV: {}", path.display()))?;

    info!(path = %path.display(), rows = table.len(), "Wrote coding table");
    Ok(())
}

/// Read a previously generated file back into records
pub fn load_csv(path: &Path) -> Result<Vec<CodingRecord>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut records = Vec::new();
    for (line_num, result) in rdr.deserialize().enumerate() {
        let record: CodingRecord = result.with_context(|| {
            format!("Failed to parse CSV line {} in {}", line_num + 2, path.display())
        })?;
        records.push(record);
    }

    Ok(records)
}

// ============================================================================
// TESTS
// ============================================================================
