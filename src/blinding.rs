//! Blinding factor sampling.
//!
//! Every proof consumes two fresh uniform field elements r and s; reusing
//! them across proofs breaks zero-knowledge, so they are drawn from the
//! injected RNG on every call and never cached.

use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;
use ark_std::rand::RngCore;

use crate::msm::batch_scalar_mul;
use crate::utils::errors::ProverError;

const MAX_SAMPLING_ATTEMPTS: usize = 8;

/// The two blinding scalars, the derived exponent kr = -(r*s), and the three
/// multiples of the setup's G1 delta point the assembler folds in.
pub struct BlindingFactors<E: Pairing> {
    pub r: E::ScalarField,
    pub s: E::ScalarField,
    pub kr: E::ScalarField,
    pub r_delta: E::G1Affine,
    pub s_delta: E::G1Affine,
    pub kr_delta: E::G1Affine,
}

impl<E: Pairing> BlindingFactors<E> {
    /// Draws r and s, derives kr, and computes the three delta multiples in
    /// one batched fixed-base multiplication.
    pub fn sample<R: RngCore>(
        delta_g1: &E::G1Affine,
        rng: &mut R,
    ) -> Result<Self, ProverError> {
        let r = sample_field::<E::ScalarField, _>(rng)?;
        let s = sample_field::<E::ScalarField, _>(rng)?;
        let kr = -(r * s);
        let deltas = batch_scalar_mul::<E::G1>(delta_g1, &[r, s, kr]);
        Ok(Self {
            r,
            s,
            kr,
            r_delta: deltas[0],
            s_delta: deltas[1],
            kr_delta: deltas[2],
        })
    }
}

/// Uniform field element from 64 RNG bytes reduced mod the field order.
/// RNG faults are retried a bounded number of times before surfacing.
pub fn sample_field<F: PrimeField, R: RngCore>(rng: &mut R) -> Result<F, ProverError> {
    let mut buf = [0u8; 64];
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        if rng.try_fill_bytes(&mut buf).is_ok() {
            return Ok(F::from_le_bytes_mod_order(&buf));
        }
    }
    Err(ProverError::Sampling(MAX_SAMPLING_ATTEMPTS))
}
