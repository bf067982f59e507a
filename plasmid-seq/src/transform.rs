//! Sequence transformations as capability traits.
//!
//! Every sequence kind implements only the capabilities that make sense for
//! its alphabet:
//!
//! | capability             | DNA | IUPAC DNA | RNA | IUPAC RNA | protein |
//! |------------------------|-----|-----------|-----|-----------|---------|
//! | [`Reverse`]            | yes | yes       | yes | yes       | yes     |
//! | [`LetterCount`]        | yes | yes       | yes | yes       | yes     |
//! | [`Complement`]         | yes | yes       | yes | yes       |         |
//! | [`ReverseComplement`]  | yes | yes       | yes | yes       |         |
//! | [`Transcribe`]         | yes | yes       |     |           |         |
//! | [`BackTranscribe`]     |     |           | yes | yes       |         |
//! | [`Translate`]          | yes | yes       |     |           |         |
//!
//! All operations are pure. The output is a new sequence, re-validated
//! against its alphabet, so an invalid input yields an output that reports
//! its own first invalid symbol.

use std::collections::BTreeMap;

use plasmid_core::{PlasmidError, Result, Sequence};

use crate::alphabet::{Alphabet, Complementary, DnaKind, RnaKind};
use crate::codon::CodonTable;
use crate::seq::Seq;
use crate::types::ProteinSequence;

/// Reverse symbol order.
pub trait Reverse {
    fn reverse(&self) -> Self;
}

/// Map each symbol to its base-pairing partner, preserving order.
pub trait Complement {
    fn complement(&self) -> Self;
}

/// The opposite strand: complement applied after order reversal.
pub trait ReverseComplement {
    fn reverse_complement(&self) -> Self;
}

/// DNA to RNA (`T` to `U`).
pub trait Transcribe {
    type Output;

    fn transcribe(&self) -> Self::Output;
}

/// RNA to DNA (`U` to `T`).
pub trait BackTranscribe {
    type Output;

    fn back_transcribe(&self) -> Self::Output;
}

/// DNA to protein through a [`CodonTable`].
pub trait Translate {
    /// Translate consecutive non-overlapping codons.
    ///
    /// A trailing partial codon is dropped, so the output has
    /// `len / 3` residues. Stop codons become `stop`. The first codon that is
    /// neither mapped nor a stop codon aborts translation with
    /// [`PlasmidError::Translation`]. The result must validate against the
    /// protein alphabet, so a `stop` symbol outside it fails with
    /// [`PlasmidError::AlphabetViolation`] naming that symbol.
    fn translate<T: CodonTable + ?Sized>(&self, table: &T, stop: u8) -> Result<ProteinSequence>;
}

/// Per-symbol occurrence counts.
pub trait LetterCount {
    /// Count each symbol present, in a single pass. Absent symbols have no
    /// entry.
    fn letter_count(&self) -> BTreeMap<u8, usize>;
}

pub(crate) fn count_letters(bytes: &[u8]) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for &b in bytes {
        *counts.entry(b).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn translate_bytes<T: CodonTable + ?Sized>(
    bytes: &[u8],
    table: &T,
    stop: u8,
) -> Result<ProteinSequence> {
    let mut protein = Vec::with_capacity(bytes.len() / 3);
    for codon in bytes.chunks_exact(3) {
        if table.is_stop(codon) {
            protein.push(stop);
            continue;
        }
        match table.lookup(codon) {
            Some(aa) => protein.push(aa),
            None => {
                return Err(PlasmidError::Translation {
                    codon: String::from_utf8_lossy(codon).into_owned(),
                    table: table.name().to_string(),
                })
            }
        }
    }
    ProteinSequence::try_new(protein)
}

fn substitute(bytes: &[u8], from: [u8; 2], to: [u8; 2]) -> Vec<u8> {
    bytes
        .iter()
        .map(|&b| match b {
            b if b == from[0] => to[0],
            b if b == from[1] => to[1],
            other => other,
        })
        .collect()
}

impl<A: Alphabet> Reverse for Seq<A> {
    fn reverse(&self) -> Self {
        Seq::from_raw(self.as_bytes().iter().rev().copied().collect())
    }
}

impl<A: Alphabet> LetterCount for Seq<A> {
    fn letter_count(&self) -> BTreeMap<u8, usize> {
        count_letters(self.as_bytes())
    }
}

impl<A: Complementary> Complement for Seq<A> {
    fn complement(&self) -> Self {
        Seq::from_raw(self.as_bytes().iter().map(|&b| A::complement(b)).collect())
    }
}

impl<A: Complementary> ReverseComplement for Seq<A> {
    fn reverse_complement(&self) -> Self {
        Seq::from_raw(
            self.as_bytes()
                .iter()
                .rev()
                .map(|&b| A::complement(b))
                .collect(),
        )
    }
}

impl<A: DnaKind> Transcribe for Seq<A> {
    type Output = Seq<A::Rna>;

    fn transcribe(&self) -> Seq<A::Rna> {
        Seq::from_raw(substitute(self.as_bytes(), *b"Tt", *b"Uu"))
    }
}

impl<A: RnaKind> BackTranscribe for Seq<A> {
    type Output = Seq<A::Dna>;

    fn back_transcribe(&self) -> Seq<A::Dna> {
        Seq::from_raw(substitute(self.as_bytes(), *b"Uu", *b"Tt"))
    }
}

impl<A: DnaKind> Translate for Seq<A> {
    fn translate<T: CodonTable + ?Sized>(&self, table: &T, stop: u8) -> Result<ProteinSequence> {
        translate_bytes(self.as_bytes(), table, stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::{GeneticCode, GeneticCodeId};
    use crate::types::{DnaIupacSequence, DnaSequence, ProteinGappedSequence, RnaSequence};

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::try_new(s).unwrap()
    }

    #[test]
    fn reverse_complement_basics() {
        let seq = dna("ATGC");
        assert_eq!(seq.reverse().as_bytes(), b"CGTA");
        assert_eq!(seq.complement().as_bytes(), b"TACG");
        assert_eq!(seq.reverse_complement().as_bytes(), b"GCAT");
        assert_eq!(seq.as_bytes(), b"ATGC");
    }

    #[test]
    fn revcomp_iupac_ambiguity() {
        let seq = DnaIupacSequence::try_new("RYSWKMBDHVN-").unwrap();
        let rc = seq.reverse_complement();
        assert_eq!(rc.as_bytes(), b"-NBDHVKMWSRY");
        assert!(rc.is_valid());
    }

    #[test]
    fn reverse_carries_invalidity() {
        let (seq, _) = DnaSequence::new("%ATGC&");
        let rev = seq.reverse();
        assert_eq!(rev.as_bytes(), b"&CGTA%");
        assert!(matches!(
            rev.validate(),
            Err(PlasmidError::AlphabetViolation { ref symbol, .. }) if symbol == "&"
        ));
    }

    #[test]
    fn complement_leaves_foreign_bytes() {
        let (seq, _) = DnaSequence::new("AXC");
        let comp = seq.complement();
        assert_eq!(comp.as_bytes(), b"TXG");
        assert!(!comp.is_valid());
    }

    #[test]
    fn protein_reverse() {
        let seq = ProteinGappedSequence::try_new("MK-V").unwrap();
        assert_eq!(seq.reverse().as_bytes(), b"V-KM");
    }

    #[test]
    fn transcription_roundtrip() {
        let seq = dna("ATCGATCG");
        let rna = seq.transcribe();
        assert_eq!(rna.as_bytes(), b"AUCGAUCG");
        assert!(rna.is_valid());
        assert_eq!(rna.back_transcribe(), seq);
    }

    #[test]
    fn transcribe_lowercase_t_but_rna_rejects_case() {
        let (seq, _) = DnaSequence::new("Att");
        let rna = seq.transcribe();
        assert_eq!(rna.as_bytes(), b"Auu");
        assert!(matches!(
            rna.validate(),
            Err(PlasmidError::AlphabetViolation { ref symbol, .. }) if symbol == "u"
        ));
    }

    #[test]
    fn transcribe_iupac_keeps_ambiguity() {
        let seq = DnaIupacSequence::try_new("TNRT-").unwrap();
        let rna = seq.transcribe();
        assert_eq!(rna.as_bytes(), b"UNRU-");
        assert!(rna.is_valid());
    }

    #[test]
    fn back_transcribe_rna() {
        let rna = RnaSequence::try_new("AUGU").unwrap();
        assert_eq!(rna.back_transcribe().as_bytes(), b"ATGT");
        assert_eq!(rna.reverse_complement().as_bytes(), b"ACAU");
    }

    #[test]
    fn translate_drops_trailing_bases() {
        let code = GeneticCode::standard();
        let protein = dna("ATGC").translate(&code, b'*').unwrap();
        assert_eq!(protein.as_bytes(), b"M");
        let protein = dna("ATGAAAGC").translate(&code, b'*').unwrap();
        assert_eq!(protein.as_bytes(), b"MK");
        assert!(dna("AT").translate(&code, b'*').unwrap().is_empty());
    }

    #[test]
    fn translate_marks_stops_and_continues() {
        let code = GeneticCode::standard();
        let protein = dna("ATGTAAGCGTGA").translate(&code, b'*').unwrap();
        assert_eq!(protein.as_bytes(), b"M*A*");
    }

    #[test]
    fn translate_stop_outside_protein_alphabet() {
        let code = GeneticCode::standard();
        let err = dna("ATGTAA").translate(&code, b'-').unwrap_err();
        assert!(matches!(
            err,
            PlasmidError::AlphabetViolation { ref symbol, .. } if symbol == "-"
        ));
        // no stop codon, so the marker never appears
        assert!(dna("ATGGCG").translate(&code, b'-').is_ok());
    }

    #[test]
    fn translate_unmapped_codon_names_codon_and_table() {
        let code = GeneticCode::from_id(GeneticCodeId::YeastMitochondrial);
        let seq = DnaIupacSequence::try_new("ATGNNNTTT").unwrap();
        let err = seq.translate(&code, b'*').unwrap_err();
        match &err {
            PlasmidError::Translation { codon, table } => {
                assert_eq!(codon, "NNN");
                assert_eq!(table, "Yeast Mitochondrial");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn translate_uses_table() {
        let mito = GeneticCode::from_id(GeneticCodeId::VertebrateMitochondrial);
        let protein = dna("TGAAGA").translate(&mito, b'*').unwrap();
        assert_eq!(protein.as_bytes(), b"W*");
    }

    #[test]
    fn letter_count_only_present_symbols() {
        let counts = dna("ATGCAAAA").letter_count();
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&b'A'], 5);
        assert_eq!(counts[&b'T'], 1);
        assert_eq!(counts[&b'G'], 1);
        assert_eq!(counts[&b'C'], 1);
        assert!(dna("").letter_count().is_empty());
    }

    #[test]
    fn concurrent_transforms_agree() {
        let seq = dna("ATGCGTACCGTTAGC");
        let expected = seq.reverse_complement();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| seq.reverse_complement())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::codon::GeneticCode;
    use crate::types::{DnaIupacSequence, DnaSequence, ProteinSequence, RnaIupacSequence};
    use proptest::prelude::*;

    fn over(symbols: &'static [u8], max: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(proptest::sample::select(symbols), 0..max)
    }

    proptest! {
        #[test]
        fn reverse_is_involution(raw in over(b"ACDEFGHIKLMNPQRSTVWY*", 200)) {
            let seq = ProteinSequence::try_new(raw).unwrap();
            prop_assert_eq!(seq.reverse().reverse(), seq);
        }

        #[test]
        fn complement_is_involution(raw in over(b"ACGTRYSWKMBDHVN-", 200)) {
            let seq = DnaIupacSequence::try_new(raw).unwrap();
            prop_assert_eq!(seq.complement().complement(), seq.clone());
            prop_assert_eq!(seq.reverse_complement().reverse_complement(), seq);
        }

        #[test]
        fn rna_revcomp_is_involution(raw in over(b"ACGURYSWKMBDHVN-", 200)) {
            let seq = RnaIupacSequence::try_new(raw).unwrap();
            prop_assert_eq!(seq.reverse_complement().reverse_complement(), seq);
        }

        #[test]
        fn revcomp_matches_composition(raw in over(b"ACGT", 200)) {
            let seq = DnaSequence::try_new(raw).unwrap();
            prop_assert_eq!(seq.reverse_complement(), seq.reverse().complement());
        }

        #[test]
        fn transcribe_preserves_length(raw in over(b"ACGT", 200)) {
            let seq = DnaSequence::try_new(raw).unwrap();
            let rna = seq.transcribe();
            prop_assert_eq!(rna.len(), seq.len());
            prop_assert!(rna.is_valid());
        }

        #[test]
        fn translate_length_is_codon_count(raw in over(b"ACGT", 200)) {
            prop_assume!(raw.len() >= 3);
            let seq = DnaSequence::try_new(raw).unwrap();
            let protein = seq.translate(&GeneticCode::standard(), b'*').unwrap();
            prop_assert_eq!(protein.len(), seq.len() / 3);
        }
    }
}
