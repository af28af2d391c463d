//! Quotient polynomial computation.
//!
//! Given the per-constraint evaluation vectors a, b, c this produces the
//! coefficients of H = (A·B - C) / Z, the polynomial certifying that the
//! constraint identity holds over the whole domain. The division happens in
//! the coset evaluation basis, where Z is the constant -2 (see
//! [`crate::domain::CosetDomain`]), so it degenerates to one scalar
//! multiplication per point.

use ark_ff::PrimeField;
use rayon::prelude::*;

use crate::domain::CosetDomain;
use crate::utils::errors::ProverError;

/// Computes the N quotient coefficients from the constraint evaluation
/// vectors, returned in canonical big-integer form ready for the Z-basis
/// multi-scalar multiplication.
///
/// The three vectors must have equal length, at most the domain size; they
/// are zero-padded up to it. This stage dominates CPU time for large
/// circuits and is scheduled concurrently with the wire-vector compaction.
#[tracing::instrument(skip_all, fields(size = domain.size()))]
pub fn compute_h<F: PrimeField>(
    mut a: Vec<F>,
    mut b: Vec<F>,
    mut c: Vec<F>,
    domain: &CosetDomain<F>,
) -> Result<Vec<F::BigInt>, ProverError> {
    let n = domain.size();
    if a.len() != b.len() || a.len() != c.len() {
        return Err(ProverError::EvaluationLengthMismatch(
            a.len(),
            b.len(),
            c.len(),
        ));
    }
    if a.len() > n {
        return Err(ProverError::DomainTooSmall(a.len(), n));
    }
    a.resize(n, F::zero());
    b.resize(n, F::zero());
    c.resize(n, F::zero());

    // evaluation form -> coefficients -> coset evaluation form
    domain.ifft_in_place(&mut a);
    domain.ifft_in_place(&mut b);
    domain.ifft_in_place(&mut c);
    domain.coset_fft_in_place(&mut a);
    domain.coset_fft_in_place(&mut b);
    domain.coset_fft_in_place(&mut c);

    // h = (a o b - c) / Z, with Z == -2 everywhere on the coset
    let minus_two_inv = domain.minus_two_inv();
    a.par_iter_mut()
        .zip(b.par_iter())
        .zip(c.par_iter())
        .for_each(|((a_i, b_i), c_i)| {
            *a_i = (*a_i * b_i - c_i) * minus_two_inv;
        });

    domain.coset_ifft_in_place(&mut a);

    Ok(a.par_iter().map(|coeff| coeff.into_bigint()).collect())
}
