//! Radix-2 evaluation domain paired with the coset the quotient computation
//! runs on.
//!
//! The coset offset is a primitive 2N-th root of unity, so every coset point
//! x satisfies x^N = -1 and the vanishing polynomial Z(x) = x^N - 1 is
//! identically -2 there. Dividing by Z on the coset therefore reduces to a
//! single multiplication by the precomputed constant (-2)^-1.

use ark_ff::FftField;
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::utils::errors::ProverError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct CosetDomain<F: FftField> {
    domain: Radix2EvaluationDomain<F>,
    coset: Radix2EvaluationDomain<F>,
    minus_two_inv: F,
}

impl<F: FftField> CosetDomain<F> {
    /// Builds the smallest power-of-two domain holding `min_size` points,
    /// together with its 2N-th-root-of-unity coset. Fails if the field's
    /// two-adicity cannot accommodate the (doubled) domain.
    pub fn new(min_size: usize) -> Result<Self, ProverError> {
        let domain = Radix2EvaluationDomain::new(min_size.max(1))
            .ok_or(ProverError::UnsupportedDomain(min_size))?;
        let n = domain.size();
        let offset = F::get_root_of_unity(2 * n as u64)
            .ok_or(ProverError::UnsupportedDomain(2 * n))?;
        let coset = domain
            .get_coset(offset)
            .ok_or(ProverError::UnsupportedDomain(n))?;
        let minus_two_inv = (-F::from(2u64))
            .inverse()
            .ok_or(ProverError::UnsupportedDomain(n))?;
        Ok(Self {
            domain,
            coset,
            minus_two_inv,
        })
    }

    pub fn size(&self) -> usize {
        self.domain.size()
    }

    /// (-2)^-1, the inverse of the vanishing polynomial on the coset.
    pub fn minus_two_inv(&self) -> F {
        self.minus_two_inv
    }

    /// Evaluation form on the domain -> coefficient form.
    pub fn ifft_in_place(&self, evals: &mut Vec<F>) {
        self.domain.ifft_in_place(evals);
    }

    /// Coefficient form -> evaluation form on the coset.
    pub fn coset_fft_in_place(&self, coeffs: &mut Vec<F>) {
        self.coset.fft_in_place(coeffs);
    }

    /// Evaluation form on the coset -> coefficient form.
    pub fn coset_ifft_in_place(&self, evals: &mut Vec<F>) {
        self.coset.ifft_in_place(evals);
    }

    /// All N Lagrange basis polynomials of the domain evaluated at `tau`.
    pub fn lagrange_coefficients_at(&self, tau: F) -> Vec<F> {
        self.domain.evaluate_all_lagrange_coefficients(tau)
    }

    /// Z(tau) = tau^N - 1.
    pub fn evaluate_vanishing_polynomial(&self, tau: F) -> F {
        self.domain.evaluate_vanishing_polynomial(tau)
    }

    /// The i-th domain element, omega^i.
    pub fn element(&self, i: usize) -> F {
        self.domain.element(i)
    }

    /// Iterates the coset points offset * omega^i.
    pub fn coset_elements(&self) -> impl Iterator<Item = F> + '_ {
        self.coset.elements()
    }
}
