//! End-to-end proving over a small hand-built circuit:
//!
//!   x1^3 + 5*x2 + (x3 - x4)/(x5 + x6) = result
//!
//! with `result` public and x1..x6 secret. The division forces the solver
//! to determine an internal wire from a constraint where it appears on the
//! left, and the cubing exercises internal-wire propagation chains.

use ark_bn254::{Bn254, Fr};
use ark_std::rand::SeedableRng;
use ark_std::test_rng;
use rand_chacha::ChaCha20Rng;

use groth16_core::r1cs::{SolverError, ONE_WIRE};
use groth16_core::{
    generate_keys, prove, prove_with_config, verify, LinearCombination, Proof, ProverConfig,
    ProverError, ProvingKey, R1cs, VerifyingKey,
};

fn toy_circuit() -> R1cs<Fr> {
    let mut cs = R1cs::new(1, 6);
    let result = cs.public_wire(0);
    let x1 = cs.secret_wire(0);
    let x2 = cs.secret_wire(1);
    let x3 = cs.secret_wire(2);
    let x4 = cs.secret_wire(3);
    let x5 = cs.secret_wire(4);
    let x6 = cs.secret_wire(5);
    let t1 = cs.new_wire();
    let t2 = cs.new_wire();
    let q = cs.new_wire();

    // x1 * x1 = t1, t1 * x1 = t2
    cs.enforce(
        LinearCombination::wire(x1),
        LinearCombination::wire(x1),
        LinearCombination::wire(t1),
    );
    cs.enforce(
        LinearCombination::wire(t1),
        LinearCombination::wire(x1),
        LinearCombination::wire(t2),
    );
    // q * (x5 + x6) = x3 - x4
    cs.enforce(
        LinearCombination::wire(q),
        LinearCombination::wire(x5).term(x6, Fr::from(1u64)),
        LinearCombination::wire(x3).term(x4, -Fr::from(1u64)),
    );
    // (t2 + 5*x2 + q) * 1 = result
    cs.enforce(
        LinearCombination::wire(t2)
            .term(x2, Fr::from(5u64))
            .term(q, Fr::from(1u64)),
        LinearCombination::wire(ONE_WIRE),
        LinearCombination::wire(result),
    );
    cs
}

/// x1=3, x2=4, x3=10, x4=2, x5=3, x6=1: 27 + 20 + 8/4 = 49.
fn satisfying_witness() -> Vec<Fr> {
    [49u64, 3, 4, 10, 2, 3, 1].map(Fr::from).to_vec()
}

fn keys() -> (R1cs<Fr>, ProvingKey<Bn254>, VerifyingKey<Bn254>) {
    let mut rng = test_rng();
    let cs = toy_circuit();
    let (pk, vk) = generate_keys::<Bn254, _>(&cs, &mut rng).unwrap();
    (cs, pk, vk)
}

#[test]
fn prove_and_verify_roundtrip() {
    let (cs, pk, vk) = keys();
    let mut rng = test_rng();
    let proof = prove(&cs, &pk, &satisfying_witness(), &[], &mut rng).unwrap();
    verify(&vk, &proof, &[Fr::from(49u64)]).unwrap();
}

#[test]
fn proofs_are_rerandomized_between_calls() {
    let (cs, pk, vk) = keys();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let witness = satisfying_witness();
    let first = prove(&cs, &pk, &witness, &[], &mut rng).unwrap();
    let second = prove(&cs, &pk, &witness, &[], &mut rng).unwrap();
    assert_ne!(first, second);
    verify(&vk, &first, &[Fr::from(49u64)]).unwrap();
    verify(&vk, &second, &[Fr::from(49u64)]).unwrap();
}

#[test]
fn identical_seeds_give_identical_proofs() {
    let (cs, pk, _) = keys();
    let witness = satisfying_witness();
    let prove_seeded = |seed: u64| -> Proof<Bn254> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        prove(&cs, &pk, &witness, &[], &mut rng).unwrap()
    };
    assert_eq!(prove_seeded(7), prove_seeded(7));
    assert_ne!(prove_seeded(7), prove_seeded(8));
}

#[test]
fn proof_is_independent_of_task_count() {
    let (cs, pk, _) = keys();
    let witness = satisfying_witness();
    let prove_with_tasks = |num_tasks: usize| -> Proof<Bn254> {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let config = ProverConfig {
            num_tasks: Some(num_tasks),
            ..Default::default()
        };
        prove_with_config(&cs, &pk, &witness, &[], config, &mut rng).unwrap()
    };
    let reference = prove_with_tasks(1);
    for num_tasks in [2, 5, 32] {
        assert_eq!(prove_with_tasks(num_tasks), reference);
    }
}

#[test]
fn unsatisfying_witness_is_rejected() {
    let (cs, pk, _) = keys();
    let mut rng = test_rng();
    let mut witness = satisfying_witness();
    witness[0] += Fr::from(1u64);
    let result = prove(&cs, &pk, &witness, &[], &mut rng);
    assert!(matches!(
        result,
        Err(ProverError::Solver(SolverError::Unsatisfied(3)))
    ));
}

#[test]
fn invalid_witness_mode_yields_a_nonverifying_proof() {
    let (cs, pk, vk) = keys();
    let mut rng = test_rng();
    let mut witness = satisfying_witness();
    witness[0] += Fr::from(1u64);
    let config = ProverConfig {
        allow_invalid_witness: true,
        ..Default::default()
    };
    let proof = prove_with_config(&cs, &pk, &witness, &[], config, &mut rng).unwrap();
    assert!(proof.is_valid());
    assert!(matches!(
        verify(&vk, &proof, &[Fr::from(50u64)]),
        Err(ProverError::PairingCheckFailed)
    ));
}

#[test]
fn short_witness_is_rejected_up_front() {
    let (cs, pk, _) = keys();
    let mut rng = test_rng();
    let witness = satisfying_witness();
    let result = prove(&cs, &pk, &witness[..5], &[], &mut rng);
    assert!(matches!(
        result,
        Err(ProverError::InvalidWitnessLength {
            got: 5,
            expected: 7
        })
    ));
}

#[test]
fn truncated_key_is_rejected() {
    let (cs, mut pk, _) = keys();
    let mut rng = test_rng();
    pk.g1.k.pop();
    let result = prove(&cs, &pk, &satisfying_witness(), &[], &mut rng);
    assert!(matches!(result, Err(ProverError::MalformedKey(_))));
}
