/// Attempts budgeted per requested call before the generator gives up.
pub const DEFAULT_ATTEMPTS_PER_CALL: usize = 100;

/// Lower bound on the attempt budget, so tiny requests still get room to
/// dodge duplicates.
pub const MIN_ATTEMPTS: usize = 1_000;

/// Genotype of every generated call: homozygous reference, diploid.
pub const DEFAULT_GENOTYPE: [u32; 2] = [0, 0];

pub const FASTA_HEADER_PREFIX: char = '>';
