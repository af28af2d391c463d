//! Pairing-check verification.
//!
//! The companion to [`crate::prover`]: checks
//! e(Ar, Bs) = e(alpha, beta) * e(sum x_i K_i, gamma) * e(Krs, delta)
//! after re-validating subgroup membership of the proof points.

use ark_ec::{pairing::Pairing, AffineRepr};
use ark_ff::PrimeField;

use crate::key::VerifyingKey;
use crate::proof::Proof;
use crate::utils::errors::ProverError;

#[tracing::instrument(skip_all, fields(public_inputs = public_inputs.len()))]
pub fn verify<E: Pairing>(
    vk: &VerifyingKey<E>,
    proof: &Proof<E>,
    public_inputs: &[E::ScalarField],
) -> Result<(), ProverError> {
    if public_inputs.len() != vk.num_public_inputs() {
        return Err(ProverError::InvalidPublicInputLength {
            got: public_inputs.len(),
            expected: vk.num_public_inputs(),
        });
    }
    // Proofs typically arrive deserialized from untrusted bytes; never skip
    // the subgroup check here.
    if !proof.is_valid() {
        return Err(ProverError::SubgroupCheck);
    }

    // Constant-one wire first, then the caller's inputs.
    let mut acc: E::G1 = vk.k[0].into_group();
    for (input, base) in public_inputs.iter().zip(&vk.k[1..]) {
        acc += base.mul_bigint(input.into_bigint());
    }

    let lhs = E::pairing(proof.ar, proof.bs);
    let rhs = E::pairing(vk.alpha_g1, vk.beta_g2)
        + E::pairing(acc, vk.gamma_g2)
        + E::pairing(proof.krs, vk.delta_g2);
    if lhs != rhs {
        return Err(ProverError::PairingCheckFailed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Bn254, Fr};
    use ark_std::test_rng;

    use crate::prover::prove;
    use crate::r1cs::{LinearCombination, R1cs};
    use crate::setup::generate_keys;

    fn product_instance() -> (R1cs<Fr>, Vec<Fr>) {
        let mut cs = R1cs::new(1, 2);
        let z = cs.public_wire(0);
        let x = cs.secret_wire(0);
        let y = cs.secret_wire(1);
        cs.enforce(
            LinearCombination::wire(x),
            LinearCombination::wire(y),
            LinearCombination::wire(z),
        );
        let witness = vec![Fr::from(21u64), Fr::from(3u64), Fr::from(7u64)];
        (cs, witness)
    }

    #[test]
    fn accepts_an_honest_proof() {
        let mut rng = test_rng();
        let (cs, witness) = product_instance();
        let (pk, vk) = generate_keys::<Bn254, _>(&cs, &mut rng).unwrap();
        let proof = prove(&cs, &pk, &witness, &[], &mut rng).unwrap();
        verify(&vk, &proof, &[Fr::from(21u64)]).unwrap();
    }

    #[test]
    fn rejects_a_wrong_public_input() {
        let mut rng = test_rng();
        let (cs, witness) = product_instance();
        let (pk, vk) = generate_keys::<Bn254, _>(&cs, &mut rng).unwrap();
        let proof = prove(&cs, &pk, &witness, &[], &mut rng).unwrap();
        assert!(matches!(
            verify(&vk, &proof, &[Fr::from(22u64)]),
            Err(ProverError::PairingCheckFailed)
        ));
    }

    #[test]
    fn rejects_a_mismatched_input_length() {
        let mut rng = test_rng();
        let (cs, witness) = product_instance();
        let (pk, vk) = generate_keys::<Bn254, _>(&cs, &mut rng).unwrap();
        let proof = prove(&cs, &pk, &witness, &[], &mut rng).unwrap();
        assert!(matches!(
            verify(&vk, &proof, &[]),
            Err(ProverError::InvalidPublicInputLength {
                got: 0,
                expected: 1
            })
        ));
    }
}
