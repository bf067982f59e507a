//! Generic validated sequence type.
//!
//! [`Seq<A>`] holds raw bytes parameterized by an [`Alphabet`] marker type.
//! Construction never refuses input: the bytes are stored verbatim and the
//! first symbol outside the alphabet, if any, is recorded alongside them.
//! This keeps whatever was supplied inspectable while still reporting the
//! violation. Values are immutable; every transformation allocates a new
//! sequence.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use plasmid_core::{ContentAddressable, PlasmidError, Result, Sequence, Summarizable};

use crate::alphabet::{Alphabet, AlphabetKind};

/// A biological sequence bound to the alphabet `A`.
///
/// `Seq<DnaAlphabet>` is a DNA sequence, `Seq<ProteinAlphabet>` is a
/// protein, etc. Use [`Seq::validate`] or [`Seq::is_valid`] to learn
/// whether every symbol belongs to `A`.
#[derive(Clone)]
pub struct Seq<A: Alphabet> {
    data: Vec<u8>,
    invalid: Option<usize>,
    _alphabet: PhantomData<A>,
}

/// Byte offset of the first symbol of `data` outside `A`.
fn first_violation<A: Alphabet>(data: &[u8]) -> Option<usize> {
    data.iter().position(|&b| !A::contains(b))
}

/// The character starting at byte `at`, as the caller wrote it, or `\xNN`
/// when no valid UTF-8 sequence starts there.
fn symbol_at(data: &[u8], at: usize) -> String {
    let end = data.len().min(at + 4);
    (at + 1..=end)
        .find_map(|stop| std::str::from_utf8(&data[at..stop]).ok())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("\\x{:02X}", data[at]))
}

fn violation<A: Alphabet>(data: &[u8], at: usize) -> PlasmidError {
    PlasmidError::AlphabetViolation {
        symbol: symbol_at(data, at),
        alphabet: A::NAME,
    }
}

impl<A: Alphabet> Seq<A> {
    /// Create a sequence from raw bytes, paired with its validation result.
    ///
    /// The sequence always wraps `raw` unchanged. Validation scans left to
    /// right and stops at the first symbol not in `A`; only that symbol is
    /// reported.
    pub fn new(raw: impl Into<Vec<u8>>) -> (Self, Result<()>) {
        let seq = Self::from_raw(raw.into());
        let status = seq.validate();
        (seq, status)
    }

    /// Create a sequence, discarding it if validation fails.
    pub fn try_new(raw: impl Into<Vec<u8>>) -> Result<Self> {
        let (seq, status) = Self::new(raw);
        status.map(|()| seq)
    }

    pub(crate) fn from_raw(data: Vec<u8>) -> Self {
        Self {
            invalid: first_violation::<A>(&data),
            data,
            _alphabet: PhantomData,
        }
    }

    /// Re-report the validation outcome recorded at construction.
    pub fn validate(&self) -> Result<()> {
        match self.invalid {
            Some(at) => Err(violation::<A>(&self.data, at)),
            None => Ok(()),
        }
    }

    /// Whether every symbol belongs to the alphabet.
    pub fn is_valid(&self) -> bool {
        self.invalid.is_none()
    }

    /// The bound alphabet.
    pub fn alphabet(&self) -> AlphabetKind {
        A::KIND
    }

    /// Symbol at 0-based index `i`.
    ///
    /// Fails with [`PlasmidError::Index`] past the end and with
    /// [`PlasmidError::AlphabetViolation`] if the stored symbol is not in the
    /// alphabet.
    pub fn position(&self, i: usize) -> Result<u8> {
        let b = *self.data.get(i).ok_or(PlasmidError::Index {
            index: i,
            len: self.data.len(),
        })?;
        if A::contains(b) {
            Ok(b)
        } else {
            Err(violation::<A>(&self.data, i))
        }
    }

    /// Half-open subsequence `[start, stop)`.
    ///
    /// `start > stop` is an impossible range. Otherwise both bounds are
    /// clamped to the sequence length, so `start == stop` and ranges past the
    /// end yield shorter (possibly empty) sequences. The result is
    /// re-validated against `A`.
    pub fn range(&self, start: usize, stop: usize) -> Result<Self> {
        if start > stop {
            return Err(PlasmidError::Range { start, stop });
        }
        let len = self.data.len();
        let (start, stop) = (start.min(len), stop.min(len));
        Ok(Self::from_raw(self.data[start..stop].to_vec()))
    }

    /// The raw text as a string slice, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for Seq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for Seq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> ContentAddressable for Seq<A> {
    fn content_hash(&self) -> String {
        plasmid_core::hash::sha256(&self.data)
    }
}

impl<A: Alphabet> Summarizable for Seq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = String::from_utf8_lossy(&self.data[..preview_len]);
        let flag = if self.is_valid() { "" } else { " [invalid]" };
        if self.data.len() > 20 {
            format!("{} sequence ({} bp){}: {}...", A::NAME, self.data.len(), flag, preview)
        } else {
            format!("{} sequence ({} bp){}: {}", A::NAME, self.data.len(), flag, preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for Seq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, String::from_utf8_lossy(&self.data))
    }
}

impl<A: Alphabet> fmt::Display for Seq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl<A: Alphabet> PartialEq for Seq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for Seq<A> {}

impl<A: Alphabet> Hash for Seq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for Seq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for Seq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::try_new(s).map_err(serde::de::Error::custom)
    }
}
