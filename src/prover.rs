//! Proof assembly.
//!
//! One `prove` call runs the full pipeline: solve the constraint system,
//! convert the wire vector to canonical form, then fan out over scoped
//! worker threads. The quotient computation, the two wire-vector
//! compactions, and the five multi-scalar multiplications run concurrently;
//! one-shot channels carry each intermediate to exactly one consumer. Krs
//! sums three contributions that arrive in nondeterministic order, which is
//! safe because group addition commutes.

use std::sync::{mpsc, Arc};
use std::thread;

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::{PrimeField, Zero};
use ark_std::rand::RngCore;
use rayon::prelude::*;

use crate::blinding::{sample_field, BlindingFactors};
use crate::key::ProvingKey;
use crate::msm::msm;
use crate::proof::Proof;
use crate::quotient::compute_h;
use crate::r1cs::{ConstraintSystem, HintFunction, SolverOutput};
use crate::utils::errors::ProverError;

/// Knobs for a single proof call.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProverConfig {
    /// Produce a (useless) proof even when the witness does not satisfy the
    /// constraints, instead of failing. Filler wire values keep the group
    /// operations well defined; the resulting proof will not verify.
    pub allow_invalid_witness: bool,
    /// Target number of worker tasks for the MSM kernels. Defaults to the
    /// rayon pool width.
    pub num_tasks: Option<usize>,
}

/// Contributions folded into Krs, tagged so the assembler can also recover
/// Ar from the same channel. Arrival order varies run to run.
enum KrsPartial<E: Pairing> {
    Quotient(E::G1),
    ArSide(E::G1),
    BsSide(E::G1),
}

/// Proves knowledge of a satisfying witness with default configuration.
pub fn prove<E, CS, R>(
    cs: &CS,
    pk: &ProvingKey<E>,
    witness: &[E::ScalarField],
    hints: &[HintFunction<E::ScalarField>],
    rng: &mut R,
) -> Result<Proof<E>, ProverError>
where
    E: Pairing,
    CS: ConstraintSystem<E::ScalarField>,
    R: RngCore,
{
    prove_with_config(cs, pk, witness, hints, ProverConfig::default(), rng)
}

#[tracing::instrument(skip_all, fields(constraints = cs.num_constraints()))]
pub fn prove_with_config<E, CS, R>(
    cs: &CS,
    pk: &ProvingKey<E>,
    witness: &[E::ScalarField],
    hints: &[HintFunction<E::ScalarField>],
    config: ProverConfig,
    rng: &mut R,
) -> Result<Proof<E>, ProverError>
where
    E: Pairing,
    CS: ConstraintSystem<E::ScalarField>,
    R: RngCore,
{
    let num_public = cs.num_public();
    let expected = num_public - 1 + cs.num_secret();
    if witness.len() != expected {
        return Err(ProverError::InvalidWitnessLength {
            got: witness.len(),
            expected,
        });
    }
    pk.validate(cs.num_wires(), num_public)?;
    if cs.num_constraints() > pk.domain.size() {
        return Err(ProverError::DomainTooSmall(
            cs.num_constraints(),
            pk.domain.size(),
        ));
    }

    let solved = match cs.solve(witness, hints) {
        Ok(out) => out,
        Err(err) if config.allow_invalid_witness => {
            tracing::warn!(%err, "witness does not satisfy the constraints, proving anyway");
            degraded_solver_output(cs, witness, rng)?
        }
        Err(err) => return Err(err.into()),
    };
    let SolverOutput {
        a,
        b,
        c,
        wire_values,
    } = solved;

    let blind = BlindingFactors::<E>::sample(&pk.g1.delta, rng)?;
    let s_repr = blind.s.into_bigint();

    // One canonical-form conversion up front; every MSM reads this vector.
    let wire_repr: Vec<<E::ScalarField as PrimeField>::BigInt> = wire_values
        .par_iter()
        .map(|value| value.into_bigint())
        .collect();

    let num_tasks = config
        .num_tasks
        .unwrap_or_else(rayon::current_num_threads)
        .max(1);
    let g1_tasks = (num_tasks / 2).max(1);
    // The G2 MSM is the single most expensive kernel; give it extra splits
    // when the pool is small.
    let g2_tasks = if num_tasks <= 16 {
        num_tasks * 2
    } else {
        num_tasks
    };

    let domain = pk.domain;
    let alpha = pk.g1.alpha;
    let beta_g1 = pk.g1.beta;
    let r_delta = blind.r_delta;
    let s_delta = blind.s_delta;

    thread::scope(|scope| -> Result<Proof<E>, ProverError> {
        let wire_repr = &wire_repr;

        let (h_tx, h_rx) = mpsc::channel();
        let (wa_tx, wa_rx) = mpsc::channel();
        let (wb1_tx, wb1_rx) = mpsc::channel();
        let (wb2_tx, wb2_rx) = mpsc::channel();
        let (partial_tx, partial_rx) = mpsc::channel();

        scope.spawn(move || {
            let _ = h_tx.send(compute_h(a, b, c, &domain));
        });
        scope.spawn(move || {
            let _ = wa_tx.send(filter_infinity(wire_repr, &pk.infinity_a));
        });
        scope.spawn(move || {
            let compacted = Arc::new(filter_infinity(wire_repr, &pk.infinity_b));
            let _ = wb1_tx.send(Arc::clone(&compacted));
            let _ = wb2_tx.send(compacted);
        });

        let tx = partial_tx.clone();
        scope.spawn(move || {
            let result = wa_rx
                .recv()
                .map_err(|_| ProverError::LostTask)
                .and_then(|wa| msm::<E::G1>(&pk.g1.a, &wa, g1_tasks))
                .map(|acc| acc + alpha.into_group() + r_delta.into_group());
            let _ = tx.send(result.map(KrsPartial::<E>::ArSide));
        });
        let tx = partial_tx.clone();
        scope.spawn(move || {
            let result = wb1_rx
                .recv()
                .map_err(|_| ProverError::LostTask)
                .and_then(|wb| msm::<E::G1>(&pk.g1.b, &wb, g1_tasks))
                .map(|acc| acc + beta_g1.into_group() + s_delta.into_group());
            let _ = tx.send(result.map(KrsPartial::<E>::BsSide));
        });
        let tx = partial_tx.clone();
        scope.spawn(move || {
            let result = h_rx
                .recv()
                .map_err(|_| ProverError::LostTask)
                .and_then(|h| h)
                .and_then(|h| msm::<E::G1>(&pk.g1.z, &h, g1_tasks));
            let _ = tx.send(result.map(KrsPartial::<E>::Quotient));
        });
        drop(partial_tx);

        // The private-wire MSM and the G2 side run on this thread while the
        // workers fill the channel.
        let krs1: E::G1 = msm(&pk.g1.k, &wire_repr[num_public..], g1_tasks)?;
        let mut krs = krs1 + blind.kr_delta.into_group();

        let wb = wb2_rx.recv().map_err(|_| ProverError::LostTask)?;
        let bs2: E::G2 = msm(&pk.g2.b, &wb, g2_tasks)?;
        let bs = bs2 + pk.g2.beta.into_group() + pk.g2.delta.mul_bigint(s_repr);

        let mut ar = E::G1::zero();
        for _ in 0..3 {
            match partial_rx.recv().map_err(|_| ProverError::LostTask)?? {
                KrsPartial::Quotient(point) => krs += point,
                KrsPartial::ArSide(point) => {
                    krs += point * blind.s;
                    ar = point;
                }
                KrsPartial::BsSide(point) => krs += point * blind.r,
            }
        }

        let proof = Proof {
            ar: ar.into_affine(),
            bs: bs.into_affine(),
            krs: krs.into_affine(),
        };
        if !proof.is_valid() {
            return Err(ProverError::SubgroupCheck);
        }
        Ok(proof)
    })
}

/// Stand-in solver output for the invalid-witness mode: known wires keep
/// their values, undetermined wires get a doubling sequence of one random
/// filler, and the evaluation vectors are zero so the quotient stage stays
/// trivial.
fn degraded_solver_output<F, CS, R>(
    cs: &CS,
    witness: &[F],
    rng: &mut R,
) -> Result<SolverOutput<F>, ProverError>
where
    F: PrimeField,
    CS: ConstraintSystem<F>,
    R: RngCore,
{
    let mut wire_values = vec![F::zero(); cs.num_wires()];
    wire_values[0] = F::one();
    wire_values[1..=witness.len()].copy_from_slice(witness);
    let mut filler: F = sample_field(rng)?;
    for value in wire_values.iter_mut().skip(1 + witness.len()) {
        *value = filler;
        filler = filler + filler;
    }
    let zeros = vec![F::zero(); cs.num_constraints()];
    Ok(SolverOutput {
        a: zeros.clone(),
        b: zeros.clone(),
        c: zeros,
        wire_values,
    })
}

/// Drops the wire positions flagged in `mask`, aligning the scalar vector
/// with a compacted base vector.
pub(crate) fn filter_infinity<T: Copy>(values: &[T], mask: &[bool]) -> Vec<T> {
    values
        .iter()
        .zip(mask)
        .filter(|(_, &at_infinity)| !at_infinity)
        .map(|(value, _)| *value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Fr, G1Projective};
    use ark_ff::UniformRand;
    use ark_std::test_rng;
    use itertools::Itertools;

    #[test]
    fn filter_infinity_drops_masked_positions() {
        let values = [10u64, 20, 30, 40, 50];
        let mask = [false, true, false, true, false];
        assert_eq!(filter_infinity(&values, &mask), vec![10, 30, 50]);
    }

    #[test]
    fn filter_infinity_with_clear_mask_is_identity() {
        let values = [1u64, 2, 3];
        assert_eq!(filter_infinity(&values, &[false; 3]), vec![1, 2, 3]);
    }

    #[test]
    fn krs_accumulation_is_order_insensitive() {
        // The assembler adds the five Krs contributions in channel arrival
        // order; every permutation must produce the same point.
        let mut rng = test_rng();
        let terms: Vec<G1Projective> =
            (0..5).map(|_| G1Projective::rand(&mut rng)).collect();
        let scalars: Vec<Fr> = (0..5).map(|_| Fr::rand(&mut rng)).collect();
        let contributions: Vec<G1Projective> = terms
            .iter()
            .zip(&scalars)
            .map(|(term, scalar)| *term * scalar)
            .collect();

        let reference = contributions
            .iter()
            .fold(G1Projective::zero(), |acc, p| acc + p)
            .into_affine();
        for order in (0..contributions.len()).permutations(contributions.len()) {
            let sum = order
                .iter()
                .fold(G1Projective::zero(), |acc, &i| acc + contributions[i])
                .into_affine();
            assert_eq!(sum, reference);
        }
    }
}
