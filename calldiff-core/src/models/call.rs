use std::fmt::{self, Display};

use crate::errors::CallError;

///
/// Identifier grouping calls whose genotypes are phased together.
///
/// `Default` is the implicit phase set of a phased call that carries no
/// explicit `PS` value; `Id` is an explicit one.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub enum Phaseset {
    Default,
    Id(u32),
}

impl From<u32> for Phaseset {
    fn from(id: u32) -> Self {
        Phaseset::Id(id)
    }
}

impl Display for Phaseset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phaseset::Default => write!(f, "*"),
            Phaseset::Id(id) => write!(f, "{}", id),
        }
    }
}

///
/// A variant call: the alleles observed for one sample at one position of a
/// contig.
///
/// Any type exposing these six accessors can be diffed. Implementations are
/// expected to uphold `position >= 1`, a non-empty `reference`, and genotype
/// entries that index into `[reference, alternates..]`.
///
pub trait Call {
    fn contig(&self) -> &str;

    /// 1-based start coordinate on [`Call::contig`].
    fn position(&self) -> u32;

    fn reference(&self) -> &str;

    fn alternates(&self) -> &[String];

    /// Allele indices: 0 is the reference, `k` is `alternates()[k - 1]`.
    fn genotype(&self) -> &[u32];

    /// `None` when unphased or when the phase is unknown.
    fn phaseset(&self) -> Option<Phaseset>;

    ///
    /// Resolve a genotype index to its allele sequence
    ///
    fn allele(&self, index: u32) -> Option<&str> {
        match index {
            0 => Some(self.reference()),
            k => self
                .alternates()
                .get(k as usize - 1)
                .map(String::as_str),
        }
    }

    /// Homozygous reference: a non-empty genotype made only of zeros.
    fn is_hom_ref(&self) -> bool {
        !self.genotype().is_empty() && self.genotype().iter().all(|&allele| allele == 0)
    }
}

///
/// Check the value invariants every [`Call`] must uphold.
///
pub fn check_call_fields(
    position: u32,
    reference: &str,
    alternates: &[String],
    genotype: &[u32],
) -> Result<(), CallError> {
    if position < 1 {
        return Err(CallError::InvalidPosition(position));
    }
    if reference.is_empty() {
        return Err(CallError::EmptyReference);
    }
    if let Some(&index) = genotype
        .iter()
        .find(|&&index| index as usize > alternates.len())
    {
        return Err(CallError::InvalidGenotype {
            index,
            alleles: alternates.len() + 1,
        });
    }
    Ok(())
}

///
/// Render a call as `Name{contig=.., position=.., ...}`, for debugging and
/// test failure messages.
///
pub fn fmt_call<C: Call + ?Sized>(
    type_name: &str,
    call: &C,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(
        f,
        "{}{{contig={}, position={}, reference={}, alternates={:?}, genotype={:?}, phaseset={}}}",
        type_name,
        call.contig(),
        call.position(),
        call.reference(),
        call.alternates(),
        call.genotype(),
        call.phaseset()
            .map_or(String::from("None"), |phaseset| phaseset.to_string()),
    )
}
