use thiserror::Error;

use crate::r1cs::SolverError;

#[derive(Error, Debug)]
pub enum ProverError {
    #[error("invalid witness size, got {got}, expected {expected} = (public - 1) + secret")]
    InvalidWitnessLength { got: usize, expected: usize },
    #[error("witness solving failed: {0}")]
    Solver(#[from] SolverError),
    #[error("msm input length mismatch: {bases} bases, {scalars} scalars")]
    MsmLengthMismatch { bases: usize, scalars: usize },
    #[error("randomness sampling failed after {0} attempts")]
    Sampling(usize),
    #[error("no radix-2 evaluation domain of size {0} in this field")]
    UnsupportedDomain(usize),
    #[error("constraint evaluation vectors have mismatched lengths: {0}, {1}, {2}")]
    EvaluationLengthMismatch(usize, usize, usize),
    #[error("constraint count {0} exceeds the domain size {1}")]
    DomainTooSmall(usize, usize),
    #[error("proving key is inconsistent: {0}")]
    MalformedKey(String),
    #[error("public input length mismatch: got {got}, expected {expected}")]
    InvalidPublicInputLength { got: usize, expected: usize },
    #[error("proof element is outside the prime-order subgroup")]
    SubgroupCheck,
    #[error("pairing check failed, the proof is invalid")]
    PairingCheckFailed,
    #[error("a worker task exited without posting its result")]
    LostTask,
}
