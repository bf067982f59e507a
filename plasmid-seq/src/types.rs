//! Concrete sequence type aliases and the runtime-tagged [`AnySeq`].
//!
//! - [`DnaSequence`], [`DnaIupacSequence`]: complement, transcription, translation
//! - [`RnaSequence`], [`RnaIupacSequence`]: complement, back-transcription
//! - [`ProteinSequence`], [`ProteinGappedSequence`]: reverse and letter counts only

use std::collections::BTreeMap;
use std::fmt;

use plasmid_core::{PlasmidError, Result, Sequence, Summarizable};

use crate::alphabet::{
    AlphabetKind, Complementary, DnaAlphabet, DnaIupacAlphabet, ProteinAlphabet,
    ProteinGappedAlphabet, RnaAlphabet, RnaIupacAlphabet,
};
use crate::codon::CodonTable;
use crate::seq::Seq;
use crate::transform::{
    count_letters, translate_bytes, BackTranscribe, Complement, LetterCount, Reverse,
    ReverseComplement, Transcribe,
};

/// A DNA sequence over `ACGT`.
pub type DnaSequence = Seq<DnaAlphabet>;

/// A DNA sequence over the IUPAC alphabet, gaps included.
pub type DnaIupacSequence = Seq<DnaIupacAlphabet>;

/// An RNA sequence over `ACGU`.
pub type RnaSequence = Seq<RnaAlphabet>;

/// An RNA sequence over the IUPAC alphabet, gaps included.
pub type RnaIupacSequence = Seq<RnaIupacAlphabet>;

/// A protein sequence.
pub type ProteinSequence = Seq<ProteinAlphabet>;

/// A protein sequence that may contain gaps.
pub type ProteinGappedSequence = Seq<ProteinGappedAlphabet>;

impl<A: Complementary> Seq<A> {
    /// GC content as a fraction in [0.0, 1.0].
    ///
    /// Counts `G`, `C`, and the strong code `S` (G or C). Returns 0.0 for
    /// empty sequences.
    pub fn gc_content(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let gc = self
            .as_bytes()
            .iter()
            .filter(|&&b| matches!(b, b'G' | b'C' | b'S'))
            .count();
        gc as f64 / self.len() as f64
    }
}

// ---------------------------------------------------------------------------
// AnySeq
// ---------------------------------------------------------------------------

/// A sequence of any alphabet kind, tagged with that kind.
///
/// Used where the alphabet is chosen at run time; match on the variant to
/// recover the statically typed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "alphabet", content = "sequence", rename_all = "kebab-case"))]
pub enum AnySeq {
    Dna(DnaSequence),
    DnaIupac(DnaIupacSequence),
    Rna(RnaSequence),
    RnaIupac(RnaIupacSequence),
    Protein(ProteinSequence),
    ProteinGapped(ProteinGappedSequence),
}

macro_rules! each_kind {
    ($value:expr, $seq:ident => $body:expr) => {
        match $value {
            AnySeq::Dna($seq) => $body,
            AnySeq::DnaIupac($seq) => $body,
            AnySeq::Rna($seq) => $body,
            AnySeq::RnaIupac($seq) => $body,
            AnySeq::Protein($seq) => $body,
            AnySeq::ProteinGapped($seq) => $body,
        }
    };
}

impl AnySeq {
    /// Build a sequence of `kind`, paired with its validation result.
    pub fn new(kind: AlphabetKind, raw: impl Into<Vec<u8>>) -> (Self, Result<()>) {
        let raw = raw.into();
        let seq = match kind {
            AlphabetKind::Dna => AnySeq::Dna(Seq::from_raw(raw)),
            AlphabetKind::DnaIupac => AnySeq::DnaIupac(Seq::from_raw(raw)),
            AlphabetKind::Rna => AnySeq::Rna(Seq::from_raw(raw)),
            AlphabetKind::RnaIupac => AnySeq::RnaIupac(Seq::from_raw(raw)),
            AlphabetKind::Protein => AnySeq::Protein(Seq::from_raw(raw)),
            AlphabetKind::ProteinGapped => AnySeq::ProteinGapped(Seq::from_raw(raw)),
        };
        let status = seq.validate();
        (seq, status)
    }

    /// Build a sequence of `kind`, discarding it if validation fails.
    pub fn try_new(kind: AlphabetKind, raw: impl Into<Vec<u8>>) -> Result<Self> {
        let (seq, status) = Self::new(kind, raw);
        status.map(|()| seq)
    }

    /// The alphabet this sequence is bound to.
    pub fn kind(&self) -> AlphabetKind {
        each_kind!(self, s => s.alphabet())
    }

    pub fn validate(&self) -> Result<()> {
        each_kind!(self, s => s.validate())
    }

    pub fn is_valid(&self) -> bool {
        each_kind!(self, s => s.is_valid())
    }

    /// Symbol at 0-based index `i`; see [`Seq::position`].
    pub fn position(&self, i: usize) -> Result<u8> {
        each_kind!(self, s => s.position(i))
    }

    /// Half-open subsequence; see [`Seq::range`].
    pub fn range(&self, start: usize, stop: usize) -> Result<Self> {
        Ok(match self {
            AnySeq::Dna(s) => AnySeq::Dna(s.range(start, stop)?),
            AnySeq::DnaIupac(s) => AnySeq::DnaIupac(s.range(start, stop)?),
            AnySeq::Rna(s) => AnySeq::Rna(s.range(start, stop)?),
            AnySeq::RnaIupac(s) => AnySeq::RnaIupac(s.range(start, stop)?),
            AnySeq::Protein(s) => AnySeq::Protein(s.range(start, stop)?),
            AnySeq::ProteinGapped(s) => AnySeq::ProteinGapped(s.range(start, stop)?),
        })
    }

    /// Complement, for nucleotide kinds.
    pub fn complement(&self) -> Result<Self> {
        Ok(match self {
            AnySeq::Dna(s) => AnySeq::Dna(s.complement()),
            AnySeq::DnaIupac(s) => AnySeq::DnaIupac(s.complement()),
            AnySeq::Rna(s) => AnySeq::Rna(s.complement()),
            AnySeq::RnaIupac(s) => AnySeq::RnaIupac(s.complement()),
            _ => return Err(self.unsupported("complement")),
        })
    }

    /// Reverse complement, for nucleotide kinds.
    pub fn reverse_complement(&self) -> Result<Self> {
        Ok(match self {
            AnySeq::Dna(s) => AnySeq::Dna(s.reverse_complement()),
            AnySeq::DnaIupac(s) => AnySeq::DnaIupac(s.reverse_complement()),
            AnySeq::Rna(s) => AnySeq::Rna(s.reverse_complement()),
            AnySeq::RnaIupac(s) => AnySeq::RnaIupac(s.reverse_complement()),
            _ => return Err(self.unsupported("reverse-complement")),
        })
    }

    /// DNA to RNA, for DNA kinds.
    pub fn transcribe(&self) -> Result<Self> {
        Ok(match self {
            AnySeq::Dna(s) => AnySeq::Rna(s.transcribe()),
            AnySeq::DnaIupac(s) => AnySeq::RnaIupac(s.transcribe()),
            _ => return Err(self.unsupported("transcribe")),
        })
    }

    /// RNA to DNA, for RNA kinds.
    pub fn back_transcribe(&self) -> Result<Self> {
        Ok(match self {
            AnySeq::Rna(s) => AnySeq::Dna(s.back_transcribe()),
            AnySeq::RnaIupac(s) => AnySeq::DnaIupac(s.back_transcribe()),
            _ => return Err(self.unsupported("back-transcribe")),
        })
    }

    /// DNA to protein, for DNA kinds; see [`crate::Translate`].
    pub fn translate<T: CodonTable + ?Sized>(&self, table: &T, stop: u8) -> Result<ProteinSequence> {
        match self {
            AnySeq::Dna(s) => translate_bytes(s.as_bytes(), table, stop),
            AnySeq::DnaIupac(s) => translate_bytes(s.as_bytes(), table, stop),
            _ => Err(self.unsupported("translate")),
        }
    }

    fn unsupported(&self, operation: &str) -> PlasmidError {
        PlasmidError::InvalidInput(format!(
            "cannot {} a {} sequence",
            operation,
            self.kind().name()
        ))
    }
}

impl Sequence for AnySeq {
    fn as_bytes(&self) -> &[u8] {
        each_kind!(self, s => s.as_bytes())
    }
}

impl Reverse for AnySeq {
    fn reverse(&self) -> Self {
        match self {
            AnySeq::Dna(s) => AnySeq::Dna(s.reverse()),
            AnySeq::DnaIupac(s) => AnySeq::DnaIupac(s.reverse()),
            AnySeq::Rna(s) => AnySeq::Rna(s.reverse()),
            AnySeq::RnaIupac(s) => AnySeq::RnaIupac(s.reverse()),
            AnySeq::Protein(s) => AnySeq::Protein(s.reverse()),
            AnySeq::ProteinGapped(s) => AnySeq::ProteinGapped(s.reverse()),
        }
    }
}

impl LetterCount for AnySeq {
    fn letter_count(&self) -> BTreeMap<u8, usize> {
        count_letters(self.as_bytes())
    }
}

impl Summarizable for AnySeq {
    fn summary(&self) -> String {
        each_kind!(self, s => s.summary())
    }
}

impl fmt::Display for AnySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_kind!(self, s => fmt::Display::fmt(s, f))
    }
}

macro_rules! impl_from_seq {
    ($($variant:ident => $alias:ty),* $(,)?) => {
        $(
            impl From<$alias> for AnySeq {
                fn from(seq: $alias) -> Self {
                    AnySeq::$variant(seq)
                }
            }
        )*
    };
}

impl_from_seq! {
    Dna => DnaSequence,
    DnaIupac => DnaIupacSequence,
    Rna => RnaSequence,
    RnaIupac => RnaIupacSequence,
    Protein => ProteinSequence,
    ProteinGapped => ProteinGappedSequence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::GeneticCode;

    #[test]
    fn gc_content_basic() {
        let seq = DnaSequence::try_new("ATGC").unwrap();
        assert!((seq.gc_content() - 0.5).abs() < 1e-10);
        let seq = DnaIupacSequence::try_new("SSAA").unwrap();
        assert!((seq.gc_content() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn gc_content_empty() {
        assert_eq!(DnaSequence::try_new("").unwrap().gc_content(), 0.0);
    }

    #[test]
    fn any_seq_tags_kind() {
        for kind in AlphabetKind::ALL {
            let (seq, status) = AnySeq::new(kind, "A");
            assert!(status.is_ok());
            assert_eq!(seq.kind(), kind);
        }
    }

    #[test]
    fn any_seq_first_error_only() {
        let (seq, status) = AnySeq::new(AlphabetKind::Rna, "AUTGT");
        assert_eq!(seq.as_bytes(), b"AUTGT");
        assert!(matches!(
            status,
            Err(PlasmidError::AlphabetViolation { ref symbol, alphabet: "RNA" }) if symbol == "T"
        ));
        assert!(!seq.is_valid());
    }

    #[test]
    fn any_seq_dispatches_transforms() {
        let seq = AnySeq::try_new(AlphabetKind::Dna, "ATGC").unwrap();
        assert_eq!(seq.reverse().as_bytes(), b"CGTA");
        assert_eq!(seq.complement().unwrap().as_bytes(), b"TACG");
        assert_eq!(seq.reverse_complement().unwrap().as_bytes(), b"GCAT");

        let rna = seq.transcribe().unwrap();
        assert_eq!(rna.kind(), AlphabetKind::Rna);
        assert_eq!(rna.as_bytes(), b"AUGC");
        assert_eq!(rna.back_transcribe().unwrap(), seq);

        let protein = seq.translate(&GeneticCode::standard(), b'*').unwrap();
        assert_eq!(protein.as_bytes(), b"M");
        assert_eq!(seq.range(1, 3).unwrap().as_bytes(), b"TG");
        assert_eq!(seq.position(2).unwrap(), b'G');
    }

    #[test]
    fn any_seq_rejects_unsupported() {
        let protein = AnySeq::try_new(AlphabetKind::Protein, "MKV").unwrap();
        let err = protein.complement().unwrap_err();
        assert!(err.to_string().contains("cannot complement a Protein sequence"));
        assert!(protein.transcribe().is_err());
        assert!(protein.translate(&GeneticCode::standard(), b'*').is_err());

        let rna = AnySeq::try_new(AlphabetKind::Rna, "AUG").unwrap();
        assert!(rna.transcribe().is_err());
        assert!(rna.translate(&GeneticCode::standard(), b'*').is_err());
    }

    #[test]
    fn any_seq_from_typed() {
        let seq: AnySeq = RnaSequence::try_new("ACGU").unwrap().into();
        assert_eq!(seq.kind(), AlphabetKind::Rna);
        assert_eq!(seq.to_string(), "ACGU");
        assert_eq!(seq.letter_count()[&b'U'], 1);
    }
}
