//! Backends that execute a [`Model`].

use tracing::{debug, trace};

use crate::error::SolverError;
use crate::model::{Assignment, Direction, Model, Outcome, Sense, VarKind};

/// A synchronous optimization backend.
///
/// Implementations block until the backend returns. Infeasibility is
/// reported through [`Outcome::Infeasible`]; only genuine backend failures
/// become errors.
pub trait Solve {
    /// Solve `model` to optimality (or mere feasibility for zero
    /// objectives).
    fn solve(&self, model: &Model) -> Result<Outcome, SolverError>;
}

/// The default backend, over the pure-Rust `microlp` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct MicrolpSolver;

impl Solve for MicrolpSolver {
    fn solve(&self, model: &Model) -> Result<Outcome, SolverError> {
        if model.var_count() == 0 {
            // An empty system is vacuously satisfied; microlp never sees it.
            return Ok(Outcome::Feasible(Assignment::new(Vec::new())));
        }

        let direction = match model.direction() {
            Direction::Minimize => microlp::OptimizationDirection::Minimize,
            Direction::Maximize => microlp::OptimizationDirection::Maximize,
        };
        let mut problem = microlp::Problem::new(direction);

        let vars: Vec<microlp::Variable> = model
            .vars()
            .iter()
            .map(|&(kind, obj)| match kind {
                VarKind::Binary => problem.add_integer_var(obj, (0, 1)),
                VarKind::Integer { lo, hi } => problem.add_integer_var(obj, (lo, hi)),
                VarKind::Continuous { lo, hi } => problem.add_var(obj, (lo, hi)),
            })
            .collect();

        for constraint in model.constraints() {
            let terms: Vec<(microlp::Variable, f64)> = constraint
                .expr
                .terms()
                .iter()
                .map(|&(var, coeff)| (vars[var.index()], coeff))
                .collect();
            let op = match constraint.sense {
                Sense::Eq => microlp::ComparisonOp::Eq,
                Sense::Le => microlp::ComparisonOp::Le,
                Sense::Ge => microlp::ComparisonOp::Ge,
            };
            problem.add_constraint(terms.as_slice(), op, constraint.rhs);
        }

        debug!(
            vars = model.var_count(),
            constraints = model.constraints().len(),
            "submitting model to microlp"
        );

        match problem.solve() {
            Ok(solution) => {
                let values: Vec<f64> = vars.iter().map(|&v| solution[v]).collect();
                trace!(objective = solution.objective(), "microlp solved");
                Ok(Outcome::Feasible(Assignment::new(values)))
            }
            Err(microlp::Error::Infeasible) => {
                debug!("microlp reports infeasible");
                Ok(Outcome::Infeasible)
            }
            Err(microlp::Error::Unbounded) => Err(SolverError::Unbounded),
            Err(other) => Err(SolverError::backend(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::model::LinExpr;

    #[rstest]
    #[case::le_binds_above(Sense::Le, 4.0, 4.0)]
    #[case::ge_leaves_headroom(Sense::Ge, 4.0, 10.0)]
    #[case::eq_pins(Sense::Eq, 4.0, 4.0)]
    fn honors_each_constraint_sense(
        #[case] sense: Sense,
        #[case] rhs: f64,
        #[case] expected: f64,
    ) {
        let mut model = Model::new(Direction::Maximize);
        let x = model.continuous(0.0, 10.0, 1.0);
        model.constrain(LinExpr::new().with(x, 1.0), sense, rhs);

        let assignment = MicrolpSolver
            .solve(&model)
            .unwrap()
            .into_feasible()
            .expect("bounded single-variable LP");
        assert!((assignment.value(x) - expected).abs() < 1e-6);
    }

    #[test]
    fn maximizes_a_small_lp() {
        let mut model = Model::new(Direction::Maximize);
        let x = model.continuous(0.0, 10.0, 1.0);
        let y = model.continuous(0.0, 10.0, 1.0);
        model.constrain(LinExpr::new().with(x, 1.0), Sense::Le, 2.0);
        model.constrain(LinExpr::new().with(y, 1.0), Sense::Le, 3.0);

        let outcome = MicrolpSolver.solve(&model).unwrap();
        let assignment = outcome.into_feasible().expect("feasible LP");
        assert!((assignment.value(x) - 2.0).abs() < 1e-6);
        assert!((assignment.value(y) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn respects_integrality() {
        let mut model = Model::new(Direction::Maximize);
        let x = model.add_var(VarKind::Integer { lo: 0, hi: 10 }, 1.0);
        model.constrain(LinExpr::new().with(x, 1.0), Sense::Le, 1.5);

        let outcome = MicrolpSolver.solve(&model).unwrap();
        let assignment = outcome.into_feasible().expect("feasible ILP");
        assert!((assignment.value(x) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reports_infeasibility_as_outcome() {
        let mut model = Model::feasibility();
        let x = model.binary();
        model.constrain(LinExpr::new().with(x, 1.0), Sense::Ge, 2.0);

        let outcome = MicrolpSolver.solve(&model).unwrap();
        assert!(matches!(outcome, Outcome::Infeasible));
    }

    #[test]
    fn solves_a_tiny_assignment_system() {
        // 2x2 permutation matrix: row and column sums of one
        let mut model = Model::feasibility();
        let p: Vec<_> = (0..4).map(|_| model.binary()).collect();
        model.constrain(LinExpr::sum([p[0], p[1]]), Sense::Eq, 1.0);
        model.constrain(LinExpr::sum([p[2], p[3]]), Sense::Eq, 1.0);
        model.constrain(LinExpr::sum([p[0], p[2]]), Sense::Eq, 1.0);
        model.constrain(LinExpr::sum([p[1], p[3]]), Sense::Eq, 1.0);

        let assignment = MicrolpSolver
            .solve(&model)
            .unwrap()
            .into_feasible()
            .expect("permutation exists");
        let ones = p.iter().filter(|&&v| assignment.is_one(v)).count();
        assert_eq!(ones, 2);
        assert_eq!(assignment.is_one(p[0]), assignment.is_one(p[3]));
    }

    #[test]
    fn empty_model_is_vacuously_feasible() {
        let outcome = MicrolpSolver.solve(&Model::feasibility()).unwrap();
        let assignment = outcome.into_feasible().expect("no constraints to violate");
        assert!(assignment.is_empty());
    }
}
