//! Multi-scalar multiplication wrapper.
//!
//! The arkworks kernels already parallelize internally; the extra `num_tasks`
//! knob here splits the input into independent chunks first, mirroring the
//! task-count configuration of the surrounding scheduler. The split is a
//! tuning parameter only: partial sums are combined with group addition, so
//! the result is identical for every task count.

use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::PrimeField;
use rayon::prelude::*;

use crate::utils::errors::ProverError;

/// Computes `sum_i scalars[i] * bases[i]` over `num_tasks` parallel chunks.
///
/// Scalars are taken in canonical big-integer form; converting out of
/// Montgomery form once up front is cheaper than letting every window pass
/// of the kernel redo it.
pub fn msm<V: VariableBaseMSM>(
    bases: &[V::MulBase],
    scalars: &[<V::ScalarField as PrimeField>::BigInt],
    num_tasks: usize,
) -> Result<V, ProverError> {
    if bases.len() != scalars.len() {
        return Err(ProverError::MsmLengthMismatch {
            bases: bases.len(),
            scalars: scalars.len(),
        });
    }
    if bases.is_empty() {
        return Ok(V::zero());
    }
    let chunk_size = bases.len().div_ceil(num_tasks.max(1));
    Ok(bases
        .par_chunks(chunk_size)
        .zip(scalars.par_chunks(chunk_size))
        .map(|(bases, scalars)| V::msm_bigint(bases, scalars))
        .reduce(V::zero, |acc, partial| acc + partial))
}

/// Multiplies one fixed base by a small batch of scalars, normalizing the
/// results back to affine in one inversion pass.
pub fn batch_scalar_mul<G: CurveGroup>(
    base: &G::Affine,
    scalars: &[G::ScalarField],
) -> Vec<G::Affine> {
    let projective: Vec<G> = scalars
        .iter()
        .map(|scalar| base.mul_bigint(scalar.into_bigint()))
        .collect();
    G::normalize_batch(&projective)
}
