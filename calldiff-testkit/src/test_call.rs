use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use calldiff_core::hash_eq::{Field, HashCodeAndEquals};
use calldiff_core::models::{Call, Phaseset, check_call_fields, fmt_call};
use calldiff_core::CallError;

static TEST_CALL_FIELDS: HashCodeAndEquals<TestCall> = HashCodeAndEquals::new(&[
    Field::<TestCall>::new("contig", |call| &call.contig),
    Field::<TestCall>::new("position", |call| &call.position),
    Field::<TestCall>::new("reference", |call| &call.reference),
    Field::<TestCall>::new("alternates", |call| &call.alternates),
    Field::<TestCall>::new("genotype", |call| &call.genotype),
    Field::<TestCall>::new("phaseset", |call| &call.phaseset),
]);

///
/// A [`Call`] built from explicit field values, for tests.
///
/// Immutable once created. Equality and hashing cover all six fields.
///
#[derive(Debug, Clone)]
pub struct TestCall {
    contig: String,
    position: u32,
    reference: String,
    alternates: Vec<String>,
    genotype: Vec<u32>,
    phaseset: Option<Phaseset>,
}

impl TestCall {
    ///
    /// Create an unphased call.
    ///
    pub fn create<C: Into<String>, R: Into<String>>(
        contig: C,
        position: u32,
        reference: R,
        alternates: Vec<String>,
        genotype: Vec<u32>,
    ) -> Result<Self, CallError> {
        Self::create_phased(contig, position, reference, alternates, genotype, None)
    }

    ///
    /// Create a call with a phase set. Takes either a bare [`Phaseset`] or an
    /// `Option<Phaseset>`.
    ///
    /// # Arguments
    ///
    /// * `position` - 1-based start of the call
    /// * `reference` - reference allele, must not be empty
    /// * `genotype` - allele indices, each at most `alternates.len()`
    ///
    pub fn create_phased<C: Into<String>, R: Into<String>, P: Into<Option<Phaseset>>>(
        contig: C,
        position: u32,
        reference: R,
        alternates: Vec<String>,
        genotype: Vec<u32>,
        phaseset: P,
    ) -> Result<Self, CallError> {
        let reference = reference.into();
        check_call_fields(position, &reference, &alternates, &genotype)?;

        Ok(TestCall {
            contig: contig.into(),
            position,
            reference,
            alternates,
            genotype,
            phaseset: phaseset.into(),
        })
    }

    /// Stable structural hash, see [`HashCodeAndEquals::hash_code`].
    pub fn hash_code(&self) -> u64 {
        TEST_CALL_FIELDS.hash_code(self)
    }

    /// The fields that take part in equality, rendered for diagnostics.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        TEST_CALL_FIELDS.debug_fields(self)
    }
}

impl Call for TestCall {
    fn contig(&self) -> &str {
        &self.contig
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn reference(&self) -> &str {
        &self.reference
    }

    fn alternates(&self) -> &[String] {
        &self.alternates
    }

    fn genotype(&self) -> &[u32] {
        &self.genotype
    }

    fn phaseset(&self) -> Option<Phaseset> {
        self.phaseset
    }
}

impl PartialEq for TestCall {
    fn eq(&self, other: &Self) -> bool {
        TEST_CALL_FIELDS.equals(self, other)
    }
}

impl Eq for TestCall {}

impl Hash for TestCall {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TEST_CALL_FIELDS.hash(self, state)
    }
}

impl Display for TestCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_call("TestCall", self, f)
    }
}
