//! Random, internally consistent calls for diff tests.
//!
//! Every generated call is homozygous reference, with its reference allele
//! read straight from the reference, so fixtures stay consistent with the
//! sequence they are diffed against.
use std::cmp::max;

use fxhash::FxHashSet;
use log::{debug, trace, warn};
use rand::Rng;

use calldiff_core::models::{Call, Phaseset};
use calldiff_core::reference::ReferenceProvider;

use crate::consts::{DEFAULT_ATTEMPTS_PER_CALL, DEFAULT_GENOTYPE, MIN_ATTEMPTS};
use crate::errors::{FixtureError, Result};
use crate::test_call::TestCall;

///
/// Generator of distinct random calls on one contig.
///
/// Draws calls until `number_of_calls` distinct ones are collected, or fails
/// with [`FixtureError::Exhausted`] once `max_attempts` draws are spent.
///
#[derive(Debug, Clone)]
pub struct RandomCalls {
    contig: String,
    contig_length: u32,
    max_call_length: u32,
    number_of_calls: usize,
    max_attempts: usize,
}

impl RandomCalls {
    ///
    /// # Arguments
    ///
    /// * `contig` - contig to draw calls on
    /// * `contig_length` - length of `contig` in the reference
    /// * `max_call_length` - bound on reference allele length; lengths are
    ///   drawn from `1..max_call_length` (always 1 when this is 1)
    /// * `number_of_calls` - how many distinct calls to produce
    ///
    pub fn new<C: Into<String>>(
        contig: C,
        contig_length: u32,
        max_call_length: u32,
        number_of_calls: usize,
    ) -> Self {
        RandomCalls {
            contig: contig.into(),
            contig_length,
            max_call_length,
            number_of_calls,
            max_attempts: max(
                number_of_calls.saturating_mul(DEFAULT_ATTEMPTS_PER_CALL),
                MIN_ATTEMPTS,
            ),
        }
    }

    /// Override the number of draws allowed before giving up.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn generate<R: Rng, P: ReferenceProvider>(
        &self,
        rng: &mut R,
        reference: &P,
    ) -> Result<Vec<TestCall>> {
        self.generate_with_phaseset(rng, reference, || None)
    }

    ///
    /// Generate the calls, asking `phaseset` for the phase set of each call
    /// as it is built.
    ///
    /// # Returns
    ///
    /// Exactly `number_of_calls` pairwise distinct calls, ascending by
    /// position (ties by reference allele, then phase set). Any reference
    /// read error aborts the whole generation.
    ///
    pub fn generate_with_phaseset<R, P, S>(
        &self,
        rng: &mut R,
        reference: &P,
        mut phaseset: S,
    ) -> Result<Vec<TestCall>>
    where
        R: Rng,
        P: ReferenceProvider,
        S: FnMut() -> Option<Phaseset>,
    {
        if self.number_of_calls == 0 {
            return Ok(Vec::new());
        }
        self.validate()?;

        let mut calls: FxHashSet<TestCall> = FxHashSet::default();
        let mut attempts = 0;

        while calls.len() < self.number_of_calls {
            if attempts == self.max_attempts {
                warn!(
                    "Gave up on {} after {} attempts with {} of {} distinct calls",
                    self.contig,
                    attempts,
                    calls.len(),
                    self.number_of_calls
                );
                return Err(FixtureError::Exhausted {
                    requested: self.number_of_calls,
                    distinct: calls.len(),
                    attempts,
                });
            }
            attempts += 1;

            let (start, length) = self.draw(rng);
            // positions are 1-based, a zero start has no call
            if start == 0 {
                trace!("Discarding draw at start 0 (length {})", length);
                continue;
            }

            let begin = (start - 1) as usize;
            let end = begin + length as usize;
            let reference_allele =
                reference.read(|reader| reader.get(&self.contig, begin, end))?;

            calls.insert(TestCall::create_phased(
                self.contig.as_str(),
                start,
                reference_allele,
                Vec::new(),
                DEFAULT_GENOTYPE.to_vec(),
                phaseset(),
            )?);
        }

        let mut calls: Vec<TestCall> = calls.into_iter().collect();
        calls.sort_by(|a, b| {
            a.position()
                .cmp(&b.position())
                .then_with(|| a.reference().cmp(b.reference()))
                .then_with(|| a.phaseset().cmp(&b.phaseset()))
        });

        debug!(
            "Generated {} calls on {} in {} attempts",
            calls.len(),
            self.contig,
            attempts
        );
        Ok(calls)
    }

    ///
    /// Draw `(start, length)`. A start of 1 is forced when the call spans
    /// the whole contig; otherwise it is drawn from `0..contig_length - length`.
    ///
    fn draw<R: Rng>(&self, rng: &mut R) -> (u32, u32) {
        let length = if self.max_call_length == 1 {
            1
        } else {
            rng.random_range(1..self.max_call_length)
        };
        let max_start = self.contig_length - length;
        let start = if max_start == 0 {
            1
        } else {
            rng.random_range(0..max_start)
        };
        (start, length)
    }

    fn validate(&self) -> Result<()> {
        if self.contig_length == 0 {
            return Err(FixtureError::InvalidArguments(format!(
                "contig length of {} must be positive",
                self.contig
            )));
        }
        if self.max_call_length == 0 {
            return Err(FixtureError::InvalidArguments(String::from(
                "max call length must be positive",
            )));
        }
        // the longest drawable call must fit on the contig
        if self.max_call_length > 1 && self.max_call_length - 1 > self.contig_length {
            return Err(FixtureError::InvalidArguments(format!(
                "max call length {} does not fit on {} (length {})",
                self.max_call_length, self.contig, self.contig_length
            )));
        }
        Ok(())
    }
}

///
/// Generate `number_of_calls` distinct, unphased, homozygous-reference calls
/// on `contig`, sorted by position.
///
pub fn random_calls<R: Rng, P: ReferenceProvider>(
    rng: &mut R,
    reference: &P,
    contig: &str,
    contig_length: u32,
    max_call_length: u32,
    number_of_calls: usize,
) -> Result<Vec<TestCall>> {
    RandomCalls::new(contig, contig_length, max_call_length, number_of_calls)
        .generate(rng, reference)
}

/// Like [`random_calls`], with `phaseset` invoked once per built call.
pub fn random_calls_with_phaseset<R, P, S>(
    rng: &mut R,
    reference: &P,
    contig: &str,
    contig_length: u32,
    max_call_length: u32,
    number_of_calls: usize,
    phaseset: S,
) -> Result<Vec<TestCall>>
where
    R: Rng,
    P: ReferenceProvider,
    S: FnMut() -> Option<Phaseset>,
{
    RandomCalls::new(contig, contig_length, max_call_length, number_of_calls)
        .generate_with_phaseset(rng, reference, phaseset)
}
