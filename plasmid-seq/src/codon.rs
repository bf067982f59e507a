//! Codon tables for translation.
//!
//! [`CodonTable`] is the lookup interface translation consumes. The bundled
//! implementation, [`GeneticCode`], covers seven NCBI genetic codes. Each is
//! stored as the 64-letter amino acid string NCBI publishes, in `TCAG`
//! order, with `*` marking stop codons.

use std::collections::BTreeSet;

/// Maps 3-symbol codons to amino acids and designates stop codons.
pub trait CodonTable {
    /// Table name, used in error messages.
    fn name(&self) -> &str;

    /// Amino acid for `codon`, or `None` if the codon is a stop codon or has
    /// no entry in the table.
    fn lookup(&self, codon: &[u8]) -> Option<u8>;

    /// Whether `codon` is one of the table's stop codons.
    fn is_stop(&self, codon: &[u8]) -> bool;

    /// The set of stop codons.
    fn stop_codons(&self) -> BTreeSet<[u8; 3]>;
}

// ---------------------------------------------------------------------------
// Codon indexing, NCBI order: T=0, C=1, A=2, G=3
// ---------------------------------------------------------------------------

const BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];

fn base_index(b: u8) -> Option<usize> {
    BASES.iter().position(|&base| base == b)
}

/// Index in `[0, 64)` of an upper-case DNA codon.
fn codon_index(codon: &[u8]) -> Option<usize> {
    match codon {
        &[b1, b2, b3] => Some(base_index(b1)? * 16 + base_index(b2)? * 4 + base_index(b3)?),
        _ => None,
    }
}

fn index_to_codon(idx: usize) -> [u8; 3] {
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

// ---------------------------------------------------------------------------
// Genetic code identifiers
// ---------------------------------------------------------------------------

/// NCBI genetic code table identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneticCodeId {
    Standard = 1,
    VertebrateMitochondrial = 2,
    YeastMitochondrial = 3,
    MycoplasmaSpiroplasma = 4,
    InvertebrateMitochondrial = 5,
    CiliateNuclear = 6,
    BacterialPlastid = 11,
}

impl GeneticCodeId {
    /// Look up a table by its NCBI number.
    pub fn from_ncbi(id: u8) -> Option<Self> {
        Some(match id {
            1 => GeneticCodeId::Standard,
            2 => GeneticCodeId::VertebrateMitochondrial,
            3 => GeneticCodeId::YeastMitochondrial,
            4 => GeneticCodeId::MycoplasmaSpiroplasma,
            5 => GeneticCodeId::InvertebrateMitochondrial,
            6 => GeneticCodeId::CiliateNuclear,
            11 => GeneticCodeId::BacterialPlastid,
            _ => return None,
        })
    }

    /// The NCBI table number.
    pub fn ncbi(self) -> u8 {
        self as u8
    }

    fn layout(self) -> (&'static str, &'static [u8; 64], &'static [&'static str]) {
        match self {
            GeneticCodeId::Standard => (
                "Standard",
                b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
                &["TTG", "CTG", "ATG"],
            ),
            GeneticCodeId::VertebrateMitochondrial => (
                "Vertebrate Mitochondrial",
                b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
                &["ATT", "ATC", "ATA", "ATG", "GTG"],
            ),
            GeneticCodeId::YeastMitochondrial => (
                "Yeast Mitochondrial",
                b"FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
                &["ATA", "ATG"],
            ),
            GeneticCodeId::MycoplasmaSpiroplasma => (
                "Mycoplasma/Spiroplasma",
                b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
                &["TTG", "ATG", "GTG"],
            ),
            GeneticCodeId::InvertebrateMitochondrial => (
                "Invertebrate Mitochondrial",
                b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG",
                &["ATT", "ATG", "GTG"],
            ),
            GeneticCodeId::CiliateNuclear => (
                "Ciliate Nuclear",
                b"FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
                &["ATG"],
            ),
            GeneticCodeId::BacterialPlastid => (
                "Bacterial/Plant Plastid",
                b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
                &["TTG", "CTG", "ATT", "ATC", "ATA", "ATG", "GTG"],
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// GeneticCode
// ---------------------------------------------------------------------------

/// A genetic code translation table.
///
/// Only upper-case `A`, `C`, `G`, `T` codons resolve; anything else
/// (ambiguity codes, gaps, lower case, RNA `U`) is neither mapped nor a stop.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    id: GeneticCodeId,
    name: &'static str,
    table: &'static [u8; 64],
    starts: [bool; 64],
}

impl GeneticCode {
    /// Create a genetic code table from an NCBI table identifier.
    pub fn from_id(id: GeneticCodeId) -> Self {
        let (name, table, start_codons) = id.layout();
        let mut starts = [false; 64];
        for codon in start_codons {
            if let Some(idx) = codon_index(codon.as_bytes()) {
                starts[idx] = true;
            }
        }
        Self {
            id,
            name,
            table,
            starts,
        }
    }

    /// Create the standard genetic code (NCBI Table 1).
    pub fn standard() -> Self {
        Self::from_id(GeneticCodeId::Standard)
    }

    /// Table identifier.
    pub fn id(&self) -> GeneticCodeId {
        self.id
    }

    /// Check whether a codon is a start codon in this table.
    pub fn is_start(&self, codon: &[u8]) -> bool {
        codon_index(codon).is_some_and(|idx| self.starts[idx])
    }

    /// Return all start codons for this table.
    pub fn start_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.starts[i])
            .map(index_to_codon)
            .collect()
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

impl CodonTable for GeneticCode {
    fn name(&self) -> &str {
        self.name
    }

    fn lookup(&self, codon: &[u8]) -> Option<u8> {
        let aa = self.table[codon_index(codon)?];
        (aa != b'*').then_some(aa)
    }

    fn is_stop(&self, codon: &[u8]) -> bool {
        codon_index(codon).is_some_and(|idx| self.table[idx] == b'*')
    }

    fn stop_codons(&self) -> BTreeSet<[u8; 3]> {
        (0..64)
            .filter(|&i| self.table[i] == b'*')
            .map(index_to_codon)
            .collect()
    }
}
