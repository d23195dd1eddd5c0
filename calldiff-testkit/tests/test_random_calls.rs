//! Integration tests for random call generation against a FASTA-backed
//! reference.

use std::collections::HashSet;
use std::path::PathBuf;

use calldiff_core::{Call, Phaseset};
use calldiff_testkit::{
    FixtureError, RandomCalls, TestCall, TestReference, random_calls, random_calls_with_phaseset,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::*;

#[fixture]
fn reference() -> TestReference {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/ref.fa");
    TestReference::from_fasta(path).expect("Failed to load test reference")
}

fn contig_length(reference: &TestReference, contig: &str) -> u32 {
    reference.contig_length(contig).unwrap() as u32
}

/// Every call agrees with the reference it was read from.
fn assert_consistent(reference: &TestReference, calls: &[TestCall]) {
    use calldiff_core::ReferenceReader;

    for call in calls {
        let begin = call.position() as usize - 1;
        let end = begin + call.reference().len();
        assert_eq!(
            reference.get(call.contig(), begin, end).unwrap(),
            call.reference(),
            "{}",
            call
        );
        assert!(call.alternates().is_empty());
        assert_eq!(call.genotype(), &[0, 0]);
        assert!(call.is_hom_ref());
    }
}

#[rstest]
fn test_small_contig_scenario() {
    let reference = TestReference::new().with_sequence("chr1", "ACGTTGCAAC");
    let mut rng = StdRng::seed_from_u64(42);

    let calls = random_calls(&mut rng, &reference, "chr1", 10, 3, 2).unwrap();

    assert_eq!(calls.len(), 2);
    assert_ne!(calls[0], calls[1]);
    assert!(calls[0].position() <= calls[1].position());
    for call in &calls {
        assert_eq!(call.contig(), "chr1");
        assert!([1, 2].contains(&call.reference().len()));
        assert_eq!(call.phaseset(), None);
    }
    assert_consistent(&reference, &calls);
}

#[rstest]
#[case("chr1", 40)]
#[case("chr1", 5)]
#[case("chr2", 12)]
fn test_sorted_and_distinct(reference: TestReference, #[case] contig: &str, #[case] n: usize) {
    let mut rng = StdRng::seed_from_u64(2024);
    let length = contig_length(&reference, contig);

    let calls = random_calls(&mut rng, &reference, contig, length, 6, n).unwrap();

    assert_eq!(calls.len(), n);
    assert!(calls.windows(2).all(|w| w[0].position() <= w[1].position()));
    let distinct: HashSet<&TestCall> = calls.iter().collect();
    assert_eq!(distinct.len(), calls.len());
    assert!(calls.iter().all(|call| call.reference().len() < 6));
    assert_consistent(&reference, &calls);
}

#[rstest]
fn test_single_base_calls_strictly_ascending(reference: TestReference) {
    let mut rng = StdRng::seed_from_u64(7);
    let length = contig_length(&reference, "chr1");

    let calls = random_calls(&mut rng, &reference, "chr1", length, 1, 25).unwrap();

    assert_eq!(calls.len(), 25);
    assert!(calls.iter().all(|call| call.reference().len() == 1));
    // with one base per call, a shared position means a duplicate
    assert!(calls.windows(2).all(|w| w[0].position() < w[1].position()));
    assert_consistent(&reference, &calls);
}

#[rstest]
fn test_same_seed_same_calls(reference: TestReference) {
    let length = contig_length(&reference, "chr1");
    let generator = RandomCalls::new("chr1", length, 8, 30);

    let first = generator
        .generate(&mut StdRng::seed_from_u64(99), &reference)
        .unwrap();
    let second = generator
        .generate(&mut StdRng::seed_from_u64(99), &reference)
        .unwrap();

    assert_eq!(first, second);
}

#[rstest]
fn test_whole_contig_call_starts_at_one(reference: TestReference) {
    // a single-base contig only admits a call spanning all of it
    let mut rng = StdRng::seed_from_u64(0);
    let calls = random_calls(&mut rng, &reference, "chrM", 1, 1, 1).unwrap();

    assert_eq!(
        calls,
        vec![TestCall::create("chrM", 1, "A", vec![], vec![0, 0]).unwrap()]
    );
}

#[rstest]
fn test_every_reachable_call() {
    let reference = TestReference::new().with_sequence("chr1", "ACGT");
    let mut rng = StdRng::seed_from_u64(17);

    // lengths 1..=4 on a 4 base contig: the length 4 call spans the contig
    // and is forced to start at 1, length 3 only ever draws start 0
    let calls = random_calls(&mut rng, &reference, "chr1", 4, 5, 4).unwrap();

    let found: Vec<(u32, &str)> = calls
        .iter()
        .map(|call| (call.position(), call.reference()))
        .collect();
    assert_eq!(found, vec![(1, "A"), (1, "AC"), (1, "ACGT"), (2, "C")]);
}

#[rstest]
fn test_exhausted_when_too_few_distinct_calls(reference: TestReference) {
    let mut rng = StdRng::seed_from_u64(3);

    let result = RandomCalls::new("chrM", 1, 1, 2)
        .with_max_attempts(50)
        .generate(&mut rng, &reference);

    match result {
        Err(FixtureError::Exhausted {
            requested,
            distinct,
            attempts,
        }) => {
            assert_eq!(requested, 2);
            assert_eq!(distinct, 1);
            assert_eq!(attempts, 50);
        }
        other => panic!("expected exhaustion, got {:?}", other),
    }
}

#[rstest]
fn test_exhausted_when_every_start_is_zero() {
    let reference = TestReference::new().with_sequence("chr1", "AC");
    let mut rng = StdRng::seed_from_u64(3);

    let result = random_calls(&mut rng, &reference, "chr1", 2, 2, 1);
    assert!(matches!(
        result,
        Err(FixtureError::Exhausted { distinct: 0, .. })
    ));
}

#[rstest]
fn test_phased_calls(reference: TestReference) {
    let mut rng = StdRng::seed_from_u64(8);
    let length = contig_length(&reference, "chr2");

    let calls = random_calls_with_phaseset(&mut rng, &reference, "chr2", length, 3, 5, || {
        Some(Phaseset::Default)
    })
    .unwrap();

    assert_eq!(calls.len(), 5);
    assert!(
        calls
            .iter()
            .all(|call| call.phaseset() == Some(Phaseset::Default))
    );
    assert_consistent(&reference, &calls);
}
