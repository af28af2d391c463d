//! The proof object: two G1 points and one G2 point.

use ark_ec::{pairing::Pairing, AffineRepr};
use ark_ff::{PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// A Groth16 proof. Notation follows the paper: `ar` and `krs` live in G1,
/// `bs` in G2. Points are stored affine for serialization; computation
/// happens in projective coordinates inside the prover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<E: Pairing> {
    pub ar: E::G1Affine,
    pub bs: E::G2Affine,
    pub krs: E::G1Affine,
}

impl<E: Pairing> Proof<E> {
    /// Checks that all three points lie in the correct prime-order subgroup.
    /// The prover asserts this before returning; verifiers must check it
    /// again on deserialized proofs.
    pub fn is_valid(&self) -> bool {
        in_prime_order_subgroup(&self.ar)
            && in_prime_order_subgroup(&self.bs)
            && in_prime_order_subgroup(&self.krs)
    }
}

/// Curve-generic subgroup membership: a point is in the prime-order subgroup
/// exactly when the scalar-field order multiple of it is the identity.
pub(crate) fn in_prime_order_subgroup<A: AffineRepr>(point: &A) -> bool {
    point
        .mul_bigint(<A::ScalarField as PrimeField>::MODULUS)
        .is_zero()
}
