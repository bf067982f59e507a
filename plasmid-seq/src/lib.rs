//! Alphabet-validated biological sequences and a streaming FASTA reader.
//!
//! - **Alphabets**: [`DnaAlphabet`], [`DnaIupacAlphabet`], [`RnaAlphabet`],
//!   [`RnaIupacAlphabet`], [`ProteinAlphabet`], [`ProteinGappedAlphabet`],
//!   and the runtime selector [`AlphabetKind`]
//! - **Sequences**: the generic [`Seq`] with aliases such as [`DnaSequence`],
//!   plus the tagged [`AnySeq`]
//! - **Transformations**: [`Reverse`], [`Complement`], [`ReverseComplement`],
//!   [`Transcribe`], [`BackTranscribe`], [`Translate`], [`LetterCount`]
//! - **Codon tables**: [`CodonTable`] and seven NCBI [`GeneticCode`]s
//! - **FASTA**: [`FastaReader`] yielding [`FastaRecord`]s, with partial
//!   results on failure via [`PartialRead`]
//!
//! # Example
//!
//! ```
//! use plasmid_seq::{DnaAlphabet, DnaSequence, FastaReader, GeneticCode};
//! use plasmid_seq::{ReverseComplement, Transcribe, Translate};
//! use plasmid_core::Sequence;
//!
//! let (dna, status) = DnaSequence::new("ATGAAAGCTTAA");
//! assert!(status.is_ok());
//! assert_eq!(dna.reverse_complement().as_bytes(), b"TTAAGCTTTCAT");
//! assert_eq!(dna.transcribe().as_bytes(), b"AUGAAAGCUUAA");
//!
//! let protein = dna.translate(&GeneticCode::standard(), b'*').unwrap();
//! assert_eq!(protein.as_bytes(), b"MKA*");
//!
//! let records = FastaReader::new(&b">h1\nATGC\n>h2\nGGCC\n"[..])
//!     .read_many::<DnaAlphabet>(0)
//!     .unwrap();
//! assert_eq!(records.len(), 2);
//! ```

pub mod alphabet;
pub mod codon;
pub mod fasta;
pub mod seq;
pub mod transform;
pub mod types;

pub use alphabet::{
    Alphabet, AlphabetKind, Complementary, DnaAlphabet, DnaIupacAlphabet, DnaKind,
    ProteinAlphabet, ProteinGappedAlphabet, RnaAlphabet, RnaIupacAlphabet, RnaKind,
};

pub use seq::Seq;

pub use types::{
    AnySeq, DnaIupacSequence, DnaSequence, ProteinGappedSequence, ProteinSequence,
    RnaIupacSequence, RnaSequence,
};

pub use transform::{
    BackTranscribe, Complement, LetterCount, Reverse, ReverseComplement, Transcribe, Translate,
};

pub use codon::{CodonTable, GeneticCode, GeneticCodeId};

pub use fasta::{FastaOptions, FastaReader, FastaRecord, PartialRead, ReadResult};

#[cfg(feature = "compress")]
pub use fasta::read_fasta_file;
