//! Groth16 proof generation.
//!
//! The heart of the crate is [`prover::prove`]: given a proving key produced
//! by a trusted setup and a satisfied constraint system, it computes the
//! quotient polynomial H over a coset-shifted FFT domain, folds the wire
//! values into curve points with four multi-scalar multiplications, and
//! combines the partial results with fresh blinding factors into the three
//! proof elements (Ar, Bs, Krs). The FFT stage and the MSMs are independent
//! CPU-bound tasks and are scheduled concurrently; the final combination is
//! pure group addition, so any completion order yields the same proof.
//!
//! Everything is generic over [`ark_ec::pairing::Pairing`]; tests and
//! benches instantiate BN254.

#![allow(clippy::needless_range_loop)]
#![allow(clippy::too_long_first_doc_paragraph)]

pub mod blinding;
pub mod domain;
pub mod key;
pub mod msm;
pub mod proof;
pub mod prover;
pub mod quotient;
pub mod r1cs;
pub mod setup;
pub mod utils;
pub mod verify;

pub use key::{ProvingKey, VerifyingKey};
pub use proof::Proof;
pub use prover::{prove, prove_with_config, ProverConfig};
pub use r1cs::{ConstraintSystem, LinearCombination, R1cs};
pub use setup::generate_keys;
pub use utils::errors::ProverError;
pub use verify::verify;
