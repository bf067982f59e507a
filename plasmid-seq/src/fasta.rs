//! Streaming FASTA reader.
//!
//! Lines are scanned one at a time and grouped into `(header, body)` pairs.
//! Each body is handed to a caller-supplied sequence constructor, and the
//! records that build successfully are collected. The first constructor
//! failure stops the scan; the records built before it are returned
//! alongside the error in a [`PartialRead`].
//!
//! Format rules:
//!
//! - A header line starts with the configured marker (`>` by default). The
//!   header text is the trimmed remainder of the line.
//! - Body lines are trimmed and concatenated with no separator, so a body
//!   never contains a newline.
//! - Blank lines are ignored anywhere.
//! - A header followed by another header before any body line is
//!   overwritten; records with an empty body are never emitted.
//! - Body lines before the first header accumulate under an empty header.

use std::fmt;
use std::io::{BufRead, Write};
#[cfg(feature = "compress")]
use std::path::Path;

use log::{debug, warn};

use plasmid_core::{
    Annotated, ContentAddressable, PlasmidError, Result, Sequence, Summarizable,
};

use crate::alphabet::{Alphabet, AlphabetKind};
use crate::seq::Seq;
use crate::types::AnySeq;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Reader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FastaOptions {
    /// First byte of a header line.
    pub header_marker: u8,
    /// Default record limit for [`FastaReader::read_all`]; `0` is unbounded.
    pub limit: usize,
}

impl Default for FastaOptions {
    fn default() -> Self {
        Self {
            header_marker: b'>',
            limit: 0,
        }
    }
}

impl FastaOptions {
    pub fn with_header_marker(mut self, marker: u8) -> Self {
        self.header_marker = marker;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A header paired with the sequence built from its body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastaRecord<S> {
    header: String,
    sequence: S,
}

impl<S> FastaRecord<S> {
    pub fn new(header: impl Into<String>, sequence: S) -> Self {
        Self {
            header: header.into(),
            sequence,
        }
    }

    /// Full header text, without the marker.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn sequence(&self) -> &S {
        &self.sequence
    }

    pub fn into_parts(self) -> (String, S) {
        (self.header, self.sequence)
    }
}

impl<S: Sequence> FastaRecord<S> {
    /// Write the record as a header line, introduced by the configured
    /// header marker, followed by a single body line. Reading the output with
    /// the same `options` yields the record back.
    pub fn write_to<W: Write>(&self, mut writer: W, options: &FastaOptions) -> Result<()> {
        writer.write_all(&[options.header_marker])?;
        writeln!(writer, "{}", self.header)?;
        writer.write_all(self.sequence.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<S> Annotated for FastaRecord<S> {
    /// The first whitespace-delimited word of the header.
    fn name(&self) -> &str {
        self.header
            .split_once(char::is_whitespace)
            .map_or(self.header.as_str(), |(name, _)| name)
    }

    fn description(&self) -> Option<&str> {
        self.header
            .split_once(char::is_whitespace)
            .map(|(_, desc)| desc.trim())
            .filter(|desc| !desc.is_empty())
    }
}

impl<S: Sequence> Sequence for FastaRecord<S> {
    fn as_bytes(&self) -> &[u8] {
        self.sequence.as_bytes()
    }
}

impl<S: Sequence> ContentAddressable for FastaRecord<S> {
    fn content_hash(&self) -> String {
        plasmid_core::hash::sha256_parts([self.header.as_bytes(), self.sequence.as_bytes()])
    }
}

impl<S: Sequence> Summarizable for FastaRecord<S> {
    fn summary(&self) -> String {
        format!("FASTA {} ({} residues)", self.name(), self.sequence.len())
    }
}

// ---------------------------------------------------------------------------
// Partial results
// ---------------------------------------------------------------------------

/// A read that stopped at an error, with every record built before it.
#[derive(Debug)]
pub struct PartialRead<S> {
    pub records: Vec<FastaRecord<S>>,
    pub error: PlasmidError,
}

impl<S> PartialRead<S> {
    pub fn into_parts(self) -> (Vec<FastaRecord<S>>, PlasmidError) {
        (self.records, self.error)
    }
}

impl<S> fmt::Display for PartialRead<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (after {} complete records)",
            self.error,
            self.records.len()
        )
    }
}

impl<S: fmt::Debug> std::error::Error for PartialRead<S> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<S> From<PartialRead<S>> for PlasmidError {
    fn from(partial: PartialRead<S>) -> Self {
        partial.error
    }
}

/// Outcome of a multi-record read.
pub type ReadResult<S> = std::result::Result<Vec<FastaRecord<S>>, PartialRead<S>>;

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Line-at-a-time FASTA reader over any buffered input.
///
/// A header consumed while closing the previous record is kept for the next
/// call, so a reader can be drained in batches with [`FastaReader::read_many`].
pub struct FastaReader<R> {
    reader: R,
    options: FastaOptions,
    pending_header: Option<String>,
    line: Vec<u8>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, FastaOptions::default())
    }

    pub fn with_options(reader: R, options: FastaOptions) -> Self {
        Self {
            reader,
            options,
            pending_header: None,
            line: Vec::new(),
        }
    }

    pub fn options(&self) -> &FastaOptions {
        &self.options
    }

    /// Read up to `limit` records (`0` for all), building each body with
    /// `build`.
    pub fn read_records<S, F>(&mut self, limit: usize, mut build: F) -> ReadResult<S>
    where
        F: FnMut(&[u8]) -> Result<S>,
    {
        let mut records = Vec::new();
        let mut body = Vec::new();

        loop {
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(PartialRead {
                        records,
                        error: e.into(),
                    })
                }
            }

            let line = self.line.trim_ascii();
            if line.is_empty() {
                continue;
            }

            if line[0] != self.options.header_marker {
                body.extend_from_slice(line);
                continue;
            }

            let header = String::from_utf8_lossy(line[1..].trim_ascii()).into_owned();
            if body.is_empty() {
                self.pending_header = Some(header);
                continue;
            }

            let finished = self.pending_header.replace(header).unwrap_or_default();
            match build_record(&mut build, finished, &body) {
                Ok(record) => records.push(record),
                Err(error) => return Err(PartialRead { records, error }),
            }
            body.clear();

            if limit > 0 && records.len() >= limit {
                debug!("record limit {} reached", limit);
                return Ok(records);
            }
        }

        let header = self.pending_header.take().unwrap_or_default();
        if !body.is_empty() {
            match build_record(&mut build, header, &body) {
                Ok(record) => records.push(record),
                Err(error) => return Err(PartialRead { records, error }),
            }
        }
        Ok(records)
    }

    /// Read exactly one record of alphabet `A`.
    ///
    /// Fails if the input holds no further record.
    pub fn read_one<A: Alphabet>(&mut self) -> Result<FastaRecord<Seq<A>>> {
        let records = self.read_records(1, |raw| Seq::<A>::try_new(raw))?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| PlasmidError::Parse("no FASTA records found".into()))
    }

    /// Read up to `limit` records of alphabet `A`; `0` reads all.
    pub fn read_many<A: Alphabet>(&mut self, limit: usize) -> ReadResult<Seq<A>> {
        self.read_records(limit, |raw| Seq::<A>::try_new(raw))
    }

    /// Read records of alphabet `A` up to the configured limit.
    pub fn read_all<A: Alphabet>(&mut self) -> ReadResult<Seq<A>> {
        self.read_many::<A>(self.options.limit)
    }

    /// [`read_one`](Self::read_one) with the alphabet chosen at run time.
    pub fn read_one_kind(&mut self, kind: AlphabetKind) -> Result<FastaRecord<AnySeq>> {
        let records = self.read_records(1, |raw| AnySeq::try_new(kind, raw))?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| PlasmidError::Parse("no FASTA records found".into()))
    }

    /// [`read_many`](Self::read_many) with the alphabet chosen at run time.
    pub fn read_many_kind(&mut self, kind: AlphabetKind, limit: usize) -> ReadResult<AnySeq> {
        self.read_records(limit, |raw| AnySeq::try_new(kind, raw))
    }
}

fn build_record<S, F>(build: &mut F, header: String, body: &[u8]) -> Result<FastaRecord<S>>
where
    F: FnMut(&[u8]) -> Result<S>,
{
    match build(body) {
        Ok(sequence) => {
            debug!("built record \"{}\" ({} residues)", header, body.len());
            Ok(FastaRecord { header, sequence })
        }
        Err(source) => {
            warn!("record \"{}\" rejected: {}", header, source);
            Err(PlasmidError::Record {
                header,
                source: Box::new(source),
            })
        }
    }
}

/// Read every record of a FASTA file, decoding gzip or zstd transparently.
#[cfg(feature = "compress")]
pub fn read_fasta_file(path: impl AsRef<Path>, kind: AlphabetKind) -> ReadResult<AnySeq> {
    let path = path.as_ref();
    let input = plasmid_core::compress::open_path(path).map_err(|error| PartialRead {
        records: Vec::new(),
        error,
    })?;
    debug!("reading {} records from {}", kind, path.display());
    FastaReader::new(input).read_many_kind(kind, 0)
}
