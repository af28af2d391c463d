//! Trusted setup.
//!
//! Produces the proving/verifying key pair for one concrete [`R1cs`]. The
//! toxic scalars are sampled from the injected RNG and dropped on return;
//! anyone who learns them can forge proofs, so production deployments
//! replace this single-party routine with a multi-party ceremony. It is
//! kept simple here: tests and benches need real keys, not ceremony
//! transcripts.

use ark_ec::{pairing::Pairing, AffineRepr};
use ark_ff::{Field, One, PrimeField, Zero};
use ark_std::rand::RngCore;

use crate::blinding::sample_field;
use crate::domain::CosetDomain;
use crate::key::{G1ProverKey, G2ProverKey, ProvingKey, VerifyingKey};
use crate::msm::batch_scalar_mul;
use crate::prover::filter_infinity;
use crate::r1cs::{ConstraintSystem, R1cs};
use crate::utils::errors::ProverError;

/// Runs the setup for `cs`, returning the proving and verifying keys.
#[tracing::instrument(skip_all, fields(constraints = cs.num_constraints()))]
pub fn generate_keys<E: Pairing, R: RngCore>(
    cs: &R1cs<E::ScalarField>,
    rng: &mut R,
) -> Result<(ProvingKey<E>, VerifyingKey<E>), ProverError> {
    let num_wires = cs.num_wires();
    let num_public = cs.num_public();
    let domain = CosetDomain::<E::ScalarField>::new(cs.num_constraints().max(1))?;
    let n = domain.size();

    let alpha = sample_nonzero::<E::ScalarField, _>(rng)?;
    let beta = sample_nonzero::<E::ScalarField, _>(rng)?;
    let gamma = sample_nonzero::<E::ScalarField, _>(rng)?;
    let delta = sample_nonzero::<E::ScalarField, _>(rng)?;
    // tau must avoid the domain, otherwise Z(tau) = 0 and the K bases
    // degenerate.
    let tau = loop {
        let candidate = sample_field::<E::ScalarField, _>(rng)?;
        if !domain.evaluate_vanishing_polynomial(candidate).is_zero() {
            break candidate;
        }
    };
    let gamma_inv = gamma
        .inverse()
        .ok_or_else(|| ProverError::MalformedKey("gamma is not invertible".into()))?;
    let delta_inv = delta
        .inverse()
        .ok_or_else(|| ProverError::MalformedKey("delta is not invertible".into()))?;

    // u_i(tau), v_i(tau), w_i(tau) by accumulating each constraint's
    // coefficients against the Lagrange basis evaluated at tau.
    let lagrange = domain.lagrange_coefficients_at(tau);
    let mut u = vec![E::ScalarField::zero(); num_wires];
    let mut v = vec![E::ScalarField::zero(); num_wires];
    let mut w = vec![E::ScalarField::zero(); num_wires];
    for (constraint, basis) in cs.constraints().iter().zip(&lagrange) {
        for &(wire, coeff) in &constraint.a.terms {
            u[wire] += coeff * basis;
        }
        for &(wire, coeff) in &constraint.b.terms {
            v[wire] += coeff * basis;
        }
        for &(wire, coeff) in &constraint.c.terms {
            w[wire] += coeff * basis;
        }
    }

    let infinity_a: Vec<bool> = u.iter().map(Zero::is_zero).collect();
    let infinity_b: Vec<bool> = v.iter().map(Zero::is_zero).collect();
    let nb_infinity_a = infinity_a.iter().filter(|&&inf| inf).count();
    let nb_infinity_b = infinity_b.iter().filter(|&&inf| inf).count();
    let u_compact = filter_infinity(&u, &infinity_a);
    let v_compact = filter_infinity(&v, &infinity_b);

    // K_i = (beta*u_i + alpha*v_i + w_i) / gamma for public wires (to the
    // verifying key) and / delta for the rest (to the proving key).
    let k = |wire: usize, divisor_inv: E::ScalarField| {
        (beta * u[wire] + alpha * v[wire] + w[wire]) * divisor_inv
    };
    let k_public: Vec<E::ScalarField> = (0..num_public).map(|i| k(i, gamma_inv)).collect();
    let k_private: Vec<E::ScalarField> =
        (num_public..num_wires).map(|i| k(i, delta_inv)).collect();

    // Z_i = tau^i * Z(tau) / delta for the quotient MSM.
    let zt_over_delta = domain.evaluate_vanishing_polynomial(tau) * delta_inv;
    let mut z = Vec::with_capacity(n);
    let mut tau_power = E::ScalarField::one();
    for _ in 0..n {
        z.push(tau_power * zt_over_delta);
        tau_power *= tau;
    }

    let g1 = E::G1Affine::generator();
    let g2 = E::G2Affine::generator();
    let head_g1 = batch_scalar_mul::<E::G1>(&g1, &[alpha, beta, delta]);
    let a_bases = batch_scalar_mul::<E::G1>(&g1, &u_compact);
    let b_g1_bases = batch_scalar_mul::<E::G1>(&g1, &v_compact);
    let b_g2_bases = batch_scalar_mul::<E::G2>(&g2, &v_compact);
    let k_bases = batch_scalar_mul::<E::G1>(&g1, &k_private);
    let z_bases = batch_scalar_mul::<E::G1>(&g1, &z);
    let vk_k = batch_scalar_mul::<E::G1>(&g1, &k_public);
    let head_g2 = batch_scalar_mul::<E::G2>(&g2, &[beta, gamma, delta]);

    let pk = ProvingKey {
        domain,
        g1: G1ProverKey {
            alpha: head_g1[0],
            beta: head_g1[1],
            delta: head_g1[2],
            a: a_bases,
            b: b_g1_bases,
            k: k_bases,
            z: z_bases,
        },
        g2: G2ProverKey {
            beta: head_g2[0],
            delta: head_g2[2],
            b: b_g2_bases,
        },
        infinity_a,
        infinity_b,
        nb_infinity_a,
        nb_infinity_b,
    };
    let vk = VerifyingKey {
        alpha_g1: head_g1[0],
        beta_g2: head_g2[0],
        gamma_g2: head_g2[1],
        delta_g2: head_g2[2],
        k: vk_k,
    };
    pk.validate(num_wires, num_public)?;
    Ok((pk, vk))
}

fn sample_nonzero<F: PrimeField, R: RngCore>(rng: &mut R) -> Result<F, ProverError> {
    loop {
        let value = sample_field::<F, _>(rng)?;
        if !value.is_zero() {
            return Ok(value);
        }
    }
}
