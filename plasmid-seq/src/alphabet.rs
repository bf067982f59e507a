//! Alphabet definitions for biological sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the ordered set of valid bytes for a sequence type. Nucleotide
//! alphabets additionally implement [`Complementary`]. Symbols are
//! case-sensitive and no case folding is applied: every alphabet here is
//! upper-case only.
//!
//! [`AlphabetKind`] is the runtime counterpart, used where the alphabet is
//! chosen by the caller at run time (e.g. when reading a file).

use std::fmt;
use std::str::FromStr;

use plasmid_core::{PlasmidError, Result};

/// Trait for biological sequence alphabets.
pub trait Alphabet: Clone + Copy + Send + Sync + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// Runtime tag for this alphabet.
    const KIND: AlphabetKind;

    /// The ordered, deduplicated set of valid bytes.
    const SYMBOLS: &'static [u8];

    /// Check whether a byte is a member of the alphabet.
    fn contains(b: u8) -> bool {
        Self::SYMBOLS.contains(&b)
    }
}

/// Alphabets with a base-pairing complement.
///
/// `complement` is an involution on [`Alphabet::SYMBOLS`]. Bytes outside the
/// alphabet are returned unchanged.
pub trait Complementary: Alphabet {
    fn complement(b: u8) -> u8;
}

/// DNA alphabets, paired with the RNA alphabet they transcribe into.
pub trait DnaKind: Complementary {
    type Rna: Alphabet;
}

/// RNA alphabets, paired with the DNA alphabet they back-transcribe into.
pub trait RnaKind: Complementary {
    type Dna: Alphabet;
}

/// Strict DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const KIND: AlphabetKind = AlphabetKind::Dna;
    const SYMBOLS: &'static [u8] = b"ACGT";
}

impl Complementary for DnaAlphabet {
    fn complement(b: u8) -> u8 {
        strict_complement(b, b'T')
    }
}

impl DnaKind for DnaAlphabet {
    type Rna = RnaAlphabet;
}

/// IUPAC DNA alphabet: `ACGT`, ambiguity codes `RYSWKMBDHVN`, and gap `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaIupacAlphabet;

impl Alphabet for DnaIupacAlphabet {
    const NAME: &'static str = "IUPAC DNA";
    const KIND: AlphabetKind = AlphabetKind::DnaIupac;
    const SYMBOLS: &'static [u8] = b"ACGTRYSWKMBDHVN-";
}

impl Complementary for DnaIupacAlphabet {
    fn complement(b: u8) -> u8 {
        iupac_complement(b, b'T')
    }
}

impl DnaKind for DnaIupacAlphabet {
    type Rna = RnaIupacAlphabet;
}

/// Strict RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const KIND: AlphabetKind = AlphabetKind::Rna;
    const SYMBOLS: &'static [u8] = b"ACGU";
}

impl Complementary for RnaAlphabet {
    fn complement(b: u8) -> u8 {
        strict_complement(b, b'U')
    }
}

impl RnaKind for RnaAlphabet {
    type Dna = DnaAlphabet;
}

/// IUPAC RNA alphabet: `ACGU`, ambiguity codes `RYSWKMBDHVN`, and gap `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaIupacAlphabet;

impl Alphabet for RnaIupacAlphabet {
    const NAME: &'static str = "IUPAC RNA";
    const KIND: AlphabetKind = AlphabetKind::RnaIupac;
    const SYMBOLS: &'static [u8] = b"ACGURYSWKMBDHVN-";
}

impl Complementary for RnaIupacAlphabet {
    fn complement(b: u8) -> u8 {
        iupac_complement(b, b'U')
    }
}

impl RnaKind for RnaIupacAlphabet {
    type Dna = DnaIupacAlphabet;
}

/// Protein alphabet: 20 standard amino acids, ambiguity codes `BJZX`, and
/// the stop marker `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "Protein";
    const KIND: AlphabetKind = AlphabetKind::Protein;
    const SYMBOLS: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWYBJZX*";
}

/// Protein alphabet with the gap symbol `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinGappedAlphabet;

impl Alphabet for ProteinGappedAlphabet {
    const NAME: &'static str = "gapped Protein";
    const KIND: AlphabetKind = AlphabetKind::ProteinGapped;
    const SYMBOLS: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWYBJZX*-";
}

// ---------------------------------------------------------------------------
// Complement tables
// ---------------------------------------------------------------------------

/// `thymine` is `T` for DNA and `U` for RNA.
fn strict_complement(b: u8, thymine: u8) -> u8 {
    match b {
        b'A' => thymine,
        b'C' => b'G',
        b'G' => b'C',
        t if t == thymine => b'A',
        other => other,
    }
}

/// Each ambiguity code maps to the code for the complementary base subset.
fn iupac_complement(b: u8, thymine: u8) -> u8 {
    match b {
        b'R' => b'Y', // A|G -> T|C
        b'Y' => b'R',
        b'S' => b'S', // G|C
        b'W' => b'W', // A|T
        b'K' => b'M', // G|T -> C|A
        b'M' => b'K',
        b'B' => b'V', // C|G|T -> G|C|A
        b'V' => b'B',
        b'D' => b'H', // A|G|T -> T|C|A
        b'H' => b'D',
        b'N' => b'N',
        b'-' => b'-',
        other => strict_complement(other, thymine),
    }
}

// ---------------------------------------------------------------------------
// Runtime alphabet selector
// ---------------------------------------------------------------------------

/// The six alphabet kinds, selectable at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlphabetKind {
    Dna,
    DnaIupac,
    Rna,
    RnaIupac,
    Protein,
    ProteinGapped,
}

impl AlphabetKind {
    /// All kinds, in declaration order.
    pub const ALL: [AlphabetKind; 6] = [
        AlphabetKind::Dna,
        AlphabetKind::DnaIupac,
        AlphabetKind::Rna,
        AlphabetKind::RnaIupac,
        AlphabetKind::Protein,
        AlphabetKind::ProteinGapped,
    ];

    /// Human-readable name, matching [`Alphabet::NAME`].
    pub fn name(self) -> &'static str {
        match self {
            AlphabetKind::Dna => DnaAlphabet::NAME,
            AlphabetKind::DnaIupac => DnaIupacAlphabet::NAME,
            AlphabetKind::Rna => RnaAlphabet::NAME,
            AlphabetKind::RnaIupac => RnaIupacAlphabet::NAME,
            AlphabetKind::Protein => ProteinAlphabet::NAME,
            AlphabetKind::ProteinGapped => ProteinGappedAlphabet::NAME,
        }
    }

    /// The ordered symbol set.
    pub fn symbols(self) -> &'static [u8] {
        match self {
            AlphabetKind::Dna => DnaAlphabet::SYMBOLS,
            AlphabetKind::DnaIupac => DnaIupacAlphabet::SYMBOLS,
            AlphabetKind::Rna => RnaAlphabet::SYMBOLS,
            AlphabetKind::RnaIupac => RnaIupacAlphabet::SYMBOLS,
            AlphabetKind::Protein => ProteinAlphabet::SYMBOLS,
            AlphabetKind::ProteinGapped => ProteinGappedAlphabet::SYMBOLS,
        }
    }

    pub fn contains(self, b: u8) -> bool {
        self.symbols().contains(&b)
    }

    /// Whether this alphabet supports complementation.
    pub fn is_nucleotide(self) -> bool {
        !matches!(self, AlphabetKind::Protein | AlphabetKind::ProteinGapped)
    }

    /// Complement of `b`, or `None` for protein alphabets.
    pub fn complement(self, b: u8) -> Option<u8> {
        match self {
            AlphabetKind::Dna => Some(DnaAlphabet::complement(b)),
            AlphabetKind::DnaIupac => Some(DnaIupacAlphabet::complement(b)),
            AlphabetKind::Rna => Some(RnaAlphabet::complement(b)),
            AlphabetKind::RnaIupac => Some(RnaIupacAlphabet::complement(b)),
            AlphabetKind::Protein | AlphabetKind::ProteinGapped => None,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            AlphabetKind::Dna => "dna",
            AlphabetKind::DnaIupac => "dna-iupac",
            AlphabetKind::Rna => "rna",
            AlphabetKind::RnaIupac => "rna-iupac",
            AlphabetKind::Protein => "protein",
            AlphabetKind::ProteinGapped => "protein-gapped",
        }
    }
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AlphabetKind {
    type Err = PlasmidError;

    /// Accepts the kebab-case slug in any case; `_` is read as `-`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        AlphabetKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| PlasmidError::InvalidInput(format!("unknown alphabet \"{}\"", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_involution<A: Complementary>() {
        for &b in A::SYMBOLS {
            let c = A::complement(b);
            assert!(A::contains(c), "{} complement of {} escapes alphabet", A::NAME, b as char);
            assert_eq!(A::complement(c), b, "{} complement not an involution at {}", A::NAME, b as char);
        }
    }

    #[test]
    fn symbol_sets_are_deduplicated() {
        for kind in AlphabetKind::ALL {
            let mut seen = std::collections::HashSet::new();
            for &b in kind.symbols() {
                assert!(seen.insert(b), "{} repeats {}", kind, b as char);
            }
        }
    }

    #[test]
    fn complement_is_involution() {
        assert_involution::<DnaAlphabet>();
        assert_involution::<DnaIupacAlphabet>();
        assert_involution::<RnaAlphabet>();
        assert_involution::<RnaIupacAlphabet>();
    }

    #[test]
    fn iupac_codes_complement_to_complementary_subsets() {
        assert_eq!(DnaIupacAlphabet::complement(b'R'), b'Y');
        assert_eq!(DnaIupacAlphabet::complement(b'B'), b'V');
        assert_eq!(DnaIupacAlphabet::complement(b'D'), b'H');
        assert_eq!(DnaIupacAlphabet::complement(b'K'), b'M');
        assert_eq!(DnaIupacAlphabet::complement(b'-'), b'-');
        assert_eq!(RnaIupacAlphabet::complement(b'A'), b'U');
    }

    #[test]
    fn case_sensitive() {
        assert!(DnaAlphabet::contains(b'A'));
        assert!(!DnaAlphabet::contains(b'a'));
        assert!(!ProteinAlphabet::contains(b'm'));
    }

    #[test]
    fn strict_rejects_ambiguity_and_gap() {
        assert!(!DnaAlphabet::contains(b'N'));
        assert!(!DnaAlphabet::contains(b'-'));
        assert!(!DnaAlphabet::contains(b'U'));
        assert!(!RnaAlphabet::contains(b'T'));
        assert!(DnaIupacAlphabet::contains(b'-'));
    }

    #[test]
    fn protein_gap_only_when_gapped() {
        assert!(ProteinAlphabet::contains(b'*'));
        assert!(!ProteinAlphabet::contains(b'-'));
        assert!(ProteinGappedAlphabet::contains(b'-'));
    }

    #[test]
    fn kind_matches_marker_types() {
        assert_eq!(DnaAlphabet::KIND.symbols(), DnaAlphabet::SYMBOLS);
        assert_eq!(ProteinGappedAlphabet::KIND.name(), "gapped Protein");
        assert_eq!(AlphabetKind::Protein.complement(b'A'), None);
        assert_eq!(AlphabetKind::Rna.complement(b'U'), Some(b'A'));
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("dna".parse::<AlphabetKind>().unwrap(), AlphabetKind::Dna);
        assert_eq!("DNA_IUPAC".parse::<AlphabetKind>().unwrap(), AlphabetKind::DnaIupac);
        assert_eq!("protein-gapped".parse::<AlphabetKind>().unwrap(), AlphabetKind::ProteinGapped);
        assert!("peptide".parse::<AlphabetKind>().is_err());
        for kind in AlphabetKind::ALL {
            assert_eq!(kind.to_string().parse::<AlphabetKind>().unwrap(), kind);
        }
    }
}
