//! Proving and verifying key structures.
//!
//! A `ProvingKey` is produced once by the trusted setup and then shared
//! read-only across any number of concurrent proof calls. The A and B base
//! vectors are stored compacted: wires whose QAP polynomial evaluates to
//! zero at the setup point would map to the group identity, so the setup
//! drops those rows and records their positions in the infinity masks. The
//! prover filters the wire vector through the same masks before each MSM.

use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::domain::CosetDomain;
use crate::utils::errors::ProverError;

/// G1 half of the proving key.
#[derive(Clone, Debug)]
pub struct G1ProverKey<E: Pairing> {
    pub alpha: E::G1Affine,
    pub beta: E::G1Affine,
    pub delta: E::G1Affine,
    /// u_i(tau) bases, identity rows removed.
    pub a: Vec<E::G1Affine>,
    /// v_i(tau) bases, identity rows removed.
    pub b: Vec<E::G1Affine>,
    /// (beta*u_i + alpha*v_i + w_i)/delta bases for the non-public wires.
    pub k: Vec<E::G1Affine>,
    /// tau^i * Z(tau)/delta bases, one per domain position.
    pub z: Vec<E::G1Affine>,
}

/// G2 half of the proving key.
#[derive(Clone, Debug)]
pub struct G2ProverKey<E: Pairing> {
    pub beta: E::G2Affine,
    pub delta: E::G2Affine,
    /// v_i(tau) bases, same identity rows removed as the G1 `b` vector.
    pub b: Vec<E::G2Affine>,
}

#[derive(Clone, Debug)]
pub struct ProvingKey<E: Pairing> {
    pub domain: CosetDomain<E::ScalarField>,
    pub g1: G1ProverKey<E>,
    pub g2: G2ProverKey<E>,
    /// Wire positions whose A base is the group identity; indexed by wire.
    pub infinity_a: Vec<bool>,
    /// Wire positions whose B base is the group identity; indexed by wire.
    pub infinity_b: Vec<bool>,
    pub nb_infinity_a: usize,
    pub nb_infinity_b: usize,
}

impl<E: Pairing> ProvingKey<E> {
    /// Checks the mask/base-vector invariants against the constraint
    /// system's wire layout: masks cover every wire, the recorded infinity
    /// counts equal the mask popcounts, and every base vector has the
    /// compacted length the prover's MSMs expect.
    pub fn validate(&self, num_wires: usize, num_public: usize) -> Result<(), ProverError> {
        if self.infinity_a.len() != num_wires || self.infinity_b.len() != num_wires {
            return Err(ProverError::MalformedKey(format!(
                "infinity masks cover {}/{} wires, expected {}",
                self.infinity_a.len(),
                self.infinity_b.len(),
                num_wires
            )));
        }
        let popcount_a = self.infinity_a.iter().filter(|&&inf| inf).count();
        let popcount_b = self.infinity_b.iter().filter(|&&inf| inf).count();
        if popcount_a != self.nb_infinity_a || popcount_b != self.nb_infinity_b {
            return Err(ProverError::MalformedKey(format!(
                "infinity counts ({}, {}) do not match mask popcounts ({popcount_a}, {popcount_b})",
                self.nb_infinity_a, self.nb_infinity_b
            )));
        }
        if self.g1.a.len() != num_wires - self.nb_infinity_a {
            return Err(ProverError::MalformedKey(format!(
                "{} A bases for {} non-infinity wires",
                self.g1.a.len(),
                num_wires - self.nb_infinity_a
            )));
        }
        if self.g1.b.len() != num_wires - self.nb_infinity_b
            || self.g2.b.len() != self.g1.b.len()
        {
            return Err(ProverError::MalformedKey(format!(
                "{} G1 / {} G2 B bases for {} non-infinity wires",
                self.g1.b.len(),
                self.g2.b.len(),
                num_wires - self.nb_infinity_b
            )));
        }
        if self.g1.k.len() != num_wires - num_public {
            return Err(ProverError::MalformedKey(format!(
                "{} K bases for {} private wires",
                self.g1.k.len(),
                num_wires - num_public
            )));
        }
        if self.g1.z.len() != self.domain.size() {
            return Err(ProverError::MalformedKey(format!(
                "{} Z bases for a domain of size {}",
                self.g1.z.len(),
                self.domain.size()
            )));
        }
        Ok(())
    }
}

/// Verifying key, the setup's public counterpart to the proving key. Only
/// consumed by the pairing-check verifier; the prover never reads it.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifyingKey<E: Pairing> {
    pub alpha_g1: E::G1Affine,
    pub beta_g2: E::G2Affine,
    pub gamma_g2: E::G2Affine,
    pub delta_g2: E::G2Affine,
    /// (beta*u_i + alpha*v_i + w_i)/gamma bases for the public wires,
    /// constant-one wire first.
    pub k: Vec<E::G1Affine>,
}

impl<E: Pairing> VerifyingKey<E> {
    /// Number of public inputs the verifier expects (the constant-one wire
    /// is not part of the caller-supplied inputs).
    pub fn num_public_inputs(&self) -> usize {
        self.k.len().saturating_sub(1)
    }
}
