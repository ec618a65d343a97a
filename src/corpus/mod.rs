//! Corpus loading
//!
//! Reads the hand-curated character table into an ordered sequence of
//! [`PositionedCharacter`]s. The source layout is one row per line of text:
//!
//! ```text
//! chapter, char_1, pronunciation_1, char_2, pronunciation_2, ...
//! ```
//!
//! Parsing is tolerant: rows without a leading chapter number, short rows and
//! undecodable records are skipped. Only an unreadable file is fatal.
//!
//! Character columns are read in `(char, pronunciation)` pairs; a final
//! character cell without its pronunciation column is dropped. Positions
//! within a chapter count from 1 on every row.

use crate::models::PositionedCharacter;
use csv::{ErrorKind, ReaderBuilder, StringRecord};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that abort corpus loading
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Cannot open corpus file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed reading corpus: {0}")]
    Read(#[from] csv::Error),
}

/// The positioned characters of a whole text, in document order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    characters: Vec<PositionedCharacter>,
}

/// Running position state while rows are appended
#[derive(Default)]
struct Cursor {
    global: usize,
    in_row: usize,
}

impl Cursor {
    fn start_row(&mut self) {
        self.in_row = 0;
    }
}

impl Corpus {
    /// Load a corpus from a CSV file with a header row.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let file = File::open(path).map_err(|source| CorpusError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_reader(file)?;
        info!(
            "Loaded {} characters in {} chapters from {}",
            corpus.len(),
            corpus.chapter_count(),
            path.display()
        );
        Ok(corpus)
    }

    /// Parse a corpus from any CSV source. The first record is the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut corpus = Corpus::default();
        let mut cursor = Cursor::default();

        for (row_idx, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    debug!("Skipping undecodable row {}: {}", row_idx + 1, e);
                    continue;
                }
            };
            corpus.push_record(&record, row_idx + 1, &mut cursor);
        }

        Ok(corpus)
    }

    /// Build a corpus directly from chapter texts, one character per position.
    pub fn from_chapters(chapters: &[(u32, &str)]) -> Self {
        let mut corpus = Corpus::default();
        let mut cursor = Cursor::default();
        for (chapter, text) in chapters {
            cursor.start_row();
            for ch in text.chars().filter(|c| !c.is_whitespace()) {
                corpus.push_char(ch, "", *chapter, &mut cursor);
            }
        }
        corpus
    }

    fn push_record(&mut self, record: &StringRecord, row: usize, cursor: &mut Cursor) {
        if record.len() < 3 {
            debug!("Skipping short row {} ({} fields)", row, record.len());
            return;
        }
        let Ok(chapter) = record[0].trim().parse::<u32>() else {
            debug!("Skipping row {}: no chapter number in {:?}", row, &record[0]);
            return;
        };

        cursor.start_row();
        for i in (1..record.len()).step_by(2) {
            let Some(pronunciation) = record.get(i + 1).map(str::trim) else {
                debug!("Dropping unpaired trailing cell {:?} in row {}", &record[i], row);
                break;
            };
            let cell = record[i].trim();
            if cell.is_empty() {
                continue;
            }
            if cell.chars().any(char::is_whitespace) {
                debug!("Skipping spaced cell {:?} in row {}", cell, row);
                continue;
            }
            // Compound cells such as 天下 become one position per character
            for ch in cell.chars() {
                self.push_char(ch, pronunciation, chapter, cursor);
            }
        }
    }

    fn push_char(&mut self, ch: char, pronunciation: &str, chapter: u32, cursor: &mut Cursor) {
        cursor.in_row += 1;
        self.characters.push(PositionedCharacter {
            ch,
            pronunciation: pronunciation.to_string(),
            chapter,
            position_in_chapter: cursor.in_row,
            global_position: cursor.global,
        });
        cursor.global += 1;
    }

    pub fn characters(&self) -> &[PositionedCharacter] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Number of distinct chapter numbers present
    pub fn chapter_count(&self) -> usize {
        let mut chapters: Vec<u32> = self.characters.iter().map(|c| c.chapter).collect();
        chapters.sort_unstable();
        chapters.dedup();
        chapters.len()
    }

    /// Frequency of every distinct character, most frequent first.
    pub fn character_frequencies(&self) -> Vec<(char, usize)> {
        let mut freq: FxHashMap<char, usize> = FxHashMap::default();
        for c in &self.characters {
            *freq.entry(c.ch).or_insert(0) += 1;
        }
        let mut out: Vec<(char, usize)> = freq.into_iter().collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        out
    }

    /// `(chapter, position_in_chapter)` of every occurrence of `ch`
    pub fn positions_of(&self, ch: char) -> Vec<(u32, usize)> {
        self.characters
            .iter()
            .filter(|c| c.ch == ch)
            .map(|c| (c.chapter, c.position_in_chapter))
            .collect()
    }

    pub fn global_positions_of(&self, ch: char) -> Vec<usize> {
        self.characters
            .iter()
            .filter(|c| c.ch == ch)
            .map(|c| c.global_position)
            .collect()
    }

    /// Characters within `window` positions either side of `global_position`,
    /// clamped to the corpus bounds.
    pub fn context_window(&self, global_position: usize, window: usize) -> &[PositionedCharacter] {
        if self.characters.is_empty() {
            return &[];
        }
        let start = global_position.saturating_sub(window).min(self.characters.len());
        let end = global_position
            .saturating_add(window)
            .saturating_add(1)
            .min(self.characters.len());
        &self.characters[start..end.max(start)]
    }
}
