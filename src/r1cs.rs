//! Rank-1 constraint systems and the witness solver.
//!
//! The prover only depends on the [`ConstraintSystem`] trait: variable
//! counts plus a `solve` operation returning the per-constraint evaluation
//! vectors and the full wire vector. [`R1cs`] is a concrete implementation
//! sized for tests and benches: constraints are solved by single-unknown
//! propagation, and wires that no constraint determines arithmetically can
//! be assigned through registered hint functions.
//!
//! Wire layout: index 0 is the constant one, then the public wires, the
//! secret wires, and finally internal wires in allocation order. The stored
//! witness covers public (minus the one wire) and secret wires only.

use ark_ff::PrimeField;
use rayon::prelude::*;
use thiserror::Error;

pub type Wire = usize;

/// The constant-one wire present in every constraint system.
pub const ONE_WIRE: Wire = 0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("constraint {0} is not satisfied")]
    Unsatisfied(usize),
    #[error("no value could be determined for wire {0}")]
    UnsolvedWire(Wire),
    #[error("hint function {0} is not registered")]
    MissingHint(usize),
    #[error("hint function failed: {0}")]
    Hint(String),
}

/// Non-arithmetic computation the solver may invoke to assign a wire.
pub type HintFunction<F> = fn(&[F]) -> Result<F, SolverError>;

#[derive(Clone, Debug, Default)]
pub struct LinearCombination<F: PrimeField> {
    pub terms: Vec<(Wire, F)>,
}

impl<F: PrimeField> LinearCombination<F> {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn term(mut self, wire: Wire, coeff: F) -> Self {
        self.terms.push((wire, coeff));
        self
    }

    pub fn wire(wire: Wire) -> Self {
        Self::new().term(wire, F::one())
    }

    pub fn constant(value: F) -> Self {
        Self::new().term(ONE_WIRE, value)
    }

    fn evaluate(&self, wire_values: &[F]) -> F {
        self.terms
            .iter()
            .map(|(wire, coeff)| *coeff * wire_values[*wire])
            .sum()
    }
}

/// One (LC)*(LC) = (LC) constraint.
#[derive(Clone, Debug)]
pub struct Constraint<F: PrimeField> {
    pub a: LinearCombination<F>,
    pub b: LinearCombination<F>,
    pub c: LinearCombination<F>,
}

/// Assigns `output = hints[hint](inputs)` once all input wires are known.
#[derive(Clone, Debug)]
pub struct HintInstruction {
    pub hint: usize,
    pub output: Wire,
    pub inputs: Vec<Wire>,
}

/// Everything the solver hands back to the prover: the three per-constraint
/// dot-product vectors and the full wire-value vector.
#[derive(Clone, Debug)]
pub struct SolverOutput<F: PrimeField> {
    pub a: Vec<F>,
    pub b: Vec<F>,
    pub c: Vec<F>,
    pub wire_values: Vec<F>,
}

/// The prover's view of a constraint system.
pub trait ConstraintSystem<F: PrimeField>: Sync {
    /// Number of public wires, including the constant-one wire.
    fn num_public(&self) -> usize;
    fn num_secret(&self) -> usize;
    fn num_wires(&self) -> usize;
    fn num_constraints(&self) -> usize;
    fn solve(
        &self,
        witness: &[F],
        hints: &[HintFunction<F>],
    ) -> Result<SolverOutput<F>, SolverError>;
}

#[derive(Clone, Debug)]
pub struct R1cs<F: PrimeField> {
    num_public: usize,
    num_secret: usize,
    num_wires: usize,
    constraints: Vec<Constraint<F>>,
    hint_instructions: Vec<HintInstruction>,
}

impl<F: PrimeField> R1cs<F> {
    pub fn new(num_public_inputs: usize, num_secret_inputs: usize) -> Self {
        let num_public = num_public_inputs + 1;
        Self {
            num_public,
            num_secret: num_secret_inputs,
            num_wires: num_public + num_secret_inputs,
            constraints: Vec::new(),
            hint_instructions: Vec::new(),
        }
    }

    pub fn public_wire(&self, index: usize) -> Wire {
        1 + index
    }

    pub fn secret_wire(&self, index: usize) -> Wire {
        self.num_public + index
    }

    /// Allocates a fresh internal wire.
    pub fn new_wire(&mut self) -> Wire {
        let wire = self.num_wires;
        self.num_wires += 1;
        wire
    }

    pub fn enforce(
        &mut self,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) {
        self.constraints.push(Constraint { a, b, c });
    }

    pub fn add_hint(&mut self, hint: usize, output: Wire, inputs: Vec<Wire>) {
        self.hint_instructions.push(HintInstruction {
            hint,
            output,
            inputs,
        });
    }

    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// One pass over the hint instructions; returns whether any wire was
    /// assigned.
    fn run_hints(
        &self,
        values: &mut [Option<F>],
        hints: &[HintFunction<F>],
    ) -> Result<bool, SolverError> {
        let mut progress = false;
        for instruction in &self.hint_instructions {
            if values[instruction.output].is_some() {
                continue;
            }
            let hint = hints
                .get(instruction.hint)
                .ok_or(SolverError::MissingHint(instruction.hint))?;
            let inputs: Option<Vec<F>> = instruction
                .inputs
                .iter()
                .map(|&wire| values[wire])
                .collect();
            if let Some(inputs) = inputs {
                values[instruction.output] = Some(hint(&inputs)?);
                progress = true;
            }
        }
        Ok(progress)
    }

    /// Tries to determine one wire from a constraint with a single unknown,
    /// or checks the constraint when everything is known. Constraints that
    /// cannot make progress yet are skipped; a later pass may revisit them.
    fn propagate(
        index: usize,
        constraint: &Constraint<F>,
        values: &mut [Option<F>],
    ) -> Result<bool, SolverError> {
        let a = PartialEval::of(&constraint.a, values);
        let b = PartialEval::of(&constraint.b, values);
        let c = PartialEval::of(&constraint.c, values);
        if a.saturated || b.saturated || c.saturated {
            return Ok(false);
        }
        match (a.unknown, b.unknown, c.unknown) {
            (None, None, None) => {
                if a.known * b.known != c.known {
                    return Err(SolverError::Unsatisfied(index));
                }
                Ok(false)
            }
            // a*b = c_known + q*x  =>  x = (a*b - c_known)/q
            (None, None, Some((wire, coeff))) => match coeff.inverse() {
                Some(coeff_inv) => {
                    values[wire] = Some((a.known * b.known - c.known) * coeff_inv);
                    Ok(true)
                }
                None => Ok(false),
            },
            // (a_known + q*x)*b = c  =>  x = (c - a_known*b)/(q*b)
            (Some((wire, coeff)), None, None) => match (coeff * b.known).inverse() {
                Some(divisor_inv) => {
                    values[wire] = Some((c.known - a.known * b.known) * divisor_inv);
                    Ok(true)
                }
                None => Ok(false),
            },
            // a*(b_known + q*x) = c  =>  x = (c - a*b_known)/(q*a)
            (None, Some((wire, coeff)), None) => match (coeff * a.known).inverse() {
                Some(divisor_inv) => {
                    values[wire] = Some((c.known - a.known * b.known) * divisor_inv);
                    Ok(true)
                }
                None => Ok(false),
            },
            _ => Ok(false),
        }
    }
}

/// A linear combination split into its known part and at most one unknown
/// term; `saturated` flags two or more unknowns.
struct PartialEval<F: PrimeField> {
    known: F,
    unknown: Option<(Wire, F)>,
    saturated: bool,
}

impl<F: PrimeField> PartialEval<F> {
    fn of(lc: &LinearCombination<F>, values: &[Option<F>]) -> Self {
        let mut eval = Self {
            known: F::zero(),
            unknown: None,
            saturated: false,
        };
        for &(wire, coeff) in &lc.terms {
            match values[wire] {
                Some(value) => eval.known += coeff * value,
                None if eval.unknown.is_none() => eval.unknown = Some((wire, coeff)),
                None => eval.saturated = true,
            }
        }
        eval
    }
}

impl<F: PrimeField> ConstraintSystem<F> for R1cs<F> {
    fn num_public(&self) -> usize {
        self.num_public
    }

    fn num_secret(&self) -> usize {
        self.num_secret
    }

    fn num_wires(&self) -> usize {
        self.num_wires
    }

    fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    fn solve(
        &self,
        witness: &[F],
        hints: &[HintFunction<F>],
    ) -> Result<SolverOutput<F>, SolverError> {
        let mut values: Vec<Option<F>> = vec![None; self.num_wires];
        values[ONE_WIRE] = Some(F::one());
        for (offset, value) in witness.iter().enumerate() {
            values[1 + offset] = Some(*value);
        }

        loop {
            let mut progress = self.run_hints(&mut values, hints)?;
            for (index, constraint) in self.constraints.iter().enumerate() {
                progress |= Self::propagate(index, constraint, &mut values)?;
            }
            if !progress {
                break;
            }
        }

        let wire_values: Vec<F> = values
            .iter()
            .enumerate()
            .map(|(wire, value)| value.ok_or(SolverError::UnsolvedWire(wire)))
            .collect::<Result<_, _>>()?;

        let evaluations: Vec<(F, F, F)> = self
            .constraints
            .par_iter()
            .map(|constraint| {
                (
                    constraint.a.evaluate(&wire_values),
                    constraint.b.evaluate(&wire_values),
                    constraint.c.evaluate(&wire_values),
                )
            })
            .collect();
        for (index, (a, b, c)) in evaluations.iter().enumerate() {
            if *a * b != *c {
                return Err(SolverError::Unsatisfied(index));
            }
        }

        Ok(SolverOutput {
            a: evaluations.iter().map(|(a, _, _)| *a).collect(),
            b: evaluations.iter().map(|(_, b, _)| *b).collect(),
            c: evaluations.iter().map(|(_, _, c)| *c).collect(),
            wire_values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::One;

    /// x * y = z with z public, x and y secret.
    fn product_circuit() -> R1cs<Fr> {
        let mut cs = R1cs::new(1, 2);
        let z = cs.public_wire(0);
        let x = cs.secret_wire(0);
        let y = cs.secret_wire(1);
        cs.enforce(
            LinearCombination::wire(x),
            LinearCombination::wire(y),
            LinearCombination::wire(z),
        );
        cs
    }

    #[test]
    fn solves_a_satisfied_system() {
        let cs = product_circuit();
        let witness = [Fr::from(12u64), Fr::from(3u64), Fr::from(4u64)];
        let out = cs.solve(&witness, &[]).unwrap();
        assert_eq!(out.a, vec![Fr::from(3u64)]);
        assert_eq!(out.b, vec![Fr::from(4u64)]);
        assert_eq!(out.c, vec![Fr::from(12u64)]);
        assert_eq!(out.wire_values.len(), 4);
        assert_eq!(out.wire_values[0], Fr::one());
    }

    #[test]
    fn reports_the_violated_constraint() {
        let cs = product_circuit();
        let witness = [Fr::from(13u64), Fr::from(3u64), Fr::from(4u64)];
        assert_eq!(
            cs.solve(&witness, &[]).unwrap_err(),
            SolverError::Unsatisfied(0)
        );
    }

    #[test]
    fn propagates_internal_wires_through_products_and_divisions() {
        // q * y = x, i.e. q = x/y, then q * 1 = z checks the public output.
        let mut cs = R1cs::<Fr>::new(1, 2);
        let z = cs.public_wire(0);
        let x = cs.secret_wire(0);
        let y = cs.secret_wire(1);
        let q = cs.new_wire();
        cs.enforce(
            LinearCombination::wire(q),
            LinearCombination::wire(y),
            LinearCombination::wire(x),
        );
        cs.enforce(
            LinearCombination::wire(q),
            LinearCombination::wire(ONE_WIRE),
            LinearCombination::wire(z),
        );
        let witness = [Fr::from(5u64), Fr::from(20u64), Fr::from(4u64)];
        let out = cs.solve(&witness, &[]).unwrap();
        assert_eq!(out.wire_values[q], Fr::from(5u64));
    }

    #[test]
    fn hint_assigned_wires_participate_in_constraints() {
        // The hint computes y = x^2; the constraint then checks it.
        let mut cs = R1cs::<Fr>::new(0, 1);
        let x = cs.secret_wire(0);
        let y = cs.new_wire();
        cs.add_hint(0, y, vec![x]);
        cs.enforce(
            LinearCombination::wire(x),
            LinearCombination::wire(x),
            LinearCombination::wire(y),
        );
        let square: HintFunction<Fr> = |inputs| Ok(inputs[0] * inputs[0]);
        let out = cs.solve(&[Fr::from(9u64)], &[square]).unwrap();
        assert_eq!(out.wire_values[y], Fr::from(81u64));
    }

    #[test]
    fn missing_hint_function_is_an_error() {
        let mut cs = R1cs::<Fr>::new(0, 1);
        let x = cs.secret_wire(0);
        let y = cs.new_wire();
        cs.add_hint(3, y, vec![x]);
        assert_eq!(
            cs.solve(&[Fr::one()], &[]).unwrap_err(),
            SolverError::MissingHint(3)
        );
    }

    #[test]
    fn undeterminable_wire_is_reported() {
        let mut cs = R1cs::<Fr>::new(0, 1);
        let _x = cs.secret_wire(0);
        let orphan = cs.new_wire();
        assert_eq!(
            cs.solve(&[Fr::one()], &[]).unwrap_err(),
            SolverError::UnsolvedWire(orphan)
        );
    }
}
