use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use flate2::read::MultiGzDecoder;
use log::debug;

use calldiff_core::reference::{ReferenceProvider, ReferenceReader, check_range};
use calldiff_core::ReferenceError;

use crate::consts::FASTA_HEADER_PREFIX;

///
/// An in-memory reference: contig name -> bases.
///
/// Small enough for fixtures; lookups never touch the disk after loading.
///
#[derive(Debug, Clone, Default)]
pub struct TestReference {
    sequences: BTreeMap<String, String>,
}

impl TestReference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a contig.
    pub fn with_sequence<N: Into<String>, S: Into<String>>(mut self, name: N, sequence: S) -> Self {
        self.sequences.insert(name.into(), sequence.into());
        self
    }

    pub fn from_sequences<I, N, S>(sequences: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        TestReference {
            sequences: sequences
                .into_iter()
                .map(|(name, sequence)| (name.into(), sequence.into()))
                .collect(),
        }
    }

    ///
    /// Load every record of a FASTA file, plain or gzipped (`.gz`).
    ///
    /// The contig name is the first word of the header line; sequence lines
    /// are concatenated.
    ///
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_gzipped = path.extension() == Some(OsStr::new("gz"));
        let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        let file: Box<dyn Read> = match is_gzipped {
            true => Box::new(MultiGzDecoder::new(file)),
            false => Box::new(file),
        };

        let mut sequences = BTreeMap::new();
        let mut current: Option<(String, String)> = None;

        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line =
                line.with_context(|| format!("Failed to read line {} of {:?}", line_num + 1, path))?;
            let line = line.trim_end();

            if let Some(header) = line.strip_prefix(FASTA_HEADER_PREFIX) {
                if let Some((name, sequence)) = current.take() {
                    insert_record(&mut sequences, name, sequence, path)?;
                }
                let name = header.split_whitespace().next().unwrap_or_default();
                if name.is_empty() {
                    bail!("Empty FASTA header at line {} of {:?}", line_num + 1, path);
                }
                current = Some((name.to_string(), String::new()));
            } else if !line.is_empty() {
                match current.as_mut() {
                    Some((_, sequence)) => sequence.push_str(line),
                    None => bail!(
                        "Sequence data before first header at line {} of {:?}",
                        line_num + 1,
                        path
                    ),
                }
            }
        }
        if let Some((name, sequence)) = current.take() {
            insert_record(&mut sequences, name, sequence, path)?;
        }

        debug!("Loaded {} contig(s) from {:?}", sequences.len(), path);
        Ok(TestReference { sequences })
    }

    pub fn contig_length(&self, contig: &str) -> Option<usize> {
        self.sequences.get(contig).map(String::len)
    }

    /// Contig names, sorted.
    pub fn contigs(&self) -> impl Iterator<Item = &str> + '_ {
        self.sequences.keys().map(String::as_str)
    }
}

fn insert_record(
    sequences: &mut BTreeMap<String, String>,
    name: String,
    sequence: String,
    path: &Path,
) -> Result<()> {
    if sequences.contains_key(&name) {
        bail!("Duplicate contig {} in {:?}", name, path);
    }
    sequences.insert(name, sequence);
    Ok(())
}

impl ReferenceReader for TestReference {
    fn get(&self, contig: &str, start: usize, end: usize) -> Result<String, ReferenceError> {
        let sequence = self
            .sequences
            .get(contig)
            .ok_or_else(|| ReferenceError::UnknownContig(contig.to_string()))?;
        check_range(contig, start, end, sequence.len())?;

        sequence
            .get(start..end)
            .map(str::to_string)
            .ok_or_else(|| ReferenceError::InvalidRange {
                contig: contig.to_string(),
                start,
                end,
                length: sequence.len(),
            })
    }
}

impl ReferenceProvider for TestReference {
    fn read<T, F>(&self, f: F) -> Result<T, ReferenceError>
    where
        F: FnOnce(&dyn ReferenceReader) -> Result<T, ReferenceError>,
    {
        f(self)
    }
}
