//! Typed model building for integer/linear programs.

/// Handle to a decision variable inside one [`Model`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VarId(usize);

impl VarId {
    /// Position of the variable in its model.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The domain of a decision variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VarKind {
    /// 0/1 integer.
    Binary,
    /// Integer within inclusive bounds.
    Integer {
        /// Lower bound.
        lo: i32,
        /// Upper bound.
        hi: i32,
    },
    /// Continuous within inclusive bounds.
    Continuous {
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },
}

/// Comparison sense of a linear constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    /// `expr = rhs`
    Eq,
    /// `expr <= rhs`
    Le,
    /// `expr >= rhs`
    Ge,
}

/// Objective direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Minimize the objective.
    Minimize,
    /// Maximize the objective.
    Maximize,
}

/// A linear combination of model variables.
#[derive(Clone, Debug, Default)]
pub struct LinExpr {
    terms: Vec<(VarId, f64)>,
}

impl LinExpr {
    /// The empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `coeff * var`.
    pub fn push(&mut self, var: VarId, coeff: f64) {
        self.terms.push((var, coeff));
    }

    /// Builder-style [`LinExpr::push`].
    pub fn with(mut self, var: VarId, coeff: f64) -> Self {
        self.push(var, coeff);
        self
    }

    /// Sum of the given variables with unit coefficients.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> Self {
        LinExpr {
            terms: vars.into_iter().map(|v| (v, 1.0)).collect(),
        }
    }

    /// The accumulated `(variable, coefficient)` terms.
    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    /// Whether no terms have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// One linear (in)equality constraint.
#[derive(Clone, Debug)]
pub struct Constraint {
    /// Left-hand side.
    pub expr: LinExpr,
    /// Comparison sense.
    pub sense: Sense,
    /// Right-hand side constant.
    pub rhs: f64,
}

/// An integer/linear program: variables with objective coefficients, linear
/// constraints, and a direction.
#[derive(Clone, Debug)]
pub struct Model {
    direction: Direction,
    vars: Vec<(VarKind, f64)>,
    constraints: Vec<Constraint>,
}

impl Model {
    /// An empty model optimizing in `direction`.
    pub fn new(direction: Direction) -> Self {
        Model {
            direction,
            vars: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// An empty pure-feasibility model (constant zero objective).
    pub fn feasibility() -> Self {
        Model::new(Direction::Minimize)
    }

    /// Add a variable of the given kind with objective coefficient `obj`.
    pub fn add_var(&mut self, kind: VarKind, obj: f64) -> VarId {
        self.vars.push((kind, obj));
        VarId(self.vars.len() - 1)
    }

    /// Add a binary variable with no objective weight.
    pub fn binary(&mut self) -> VarId {
        self.add_var(VarKind::Binary, 0.0)
    }

    /// Add a binary variable with objective coefficient `obj`.
    pub fn binary_with_obj(&mut self, obj: f64) -> VarId {
        self.add_var(VarKind::Binary, obj)
    }

    /// Add a continuous variable in `[lo, hi]` with objective coefficient
    /// `obj`.
    pub fn continuous(&mut self, lo: f64, hi: f64, obj: f64) -> VarId {
        self.add_var(VarKind::Continuous { lo, hi }, obj)
    }

    /// Record the constraint `expr <sense> rhs`.
    #[contracts::debug_requires(!expr.is_empty(), "constraints need at least one term")]
    pub fn constrain(&mut self, expr: LinExpr, sense: Sense, rhs: f64) {
        self.constraints.push(Constraint { expr, sense, rhs });
    }

    /// Objective direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Variable kinds and objective coefficients, in [`VarId`] order.
    pub fn vars(&self) -> &[(VarKind, f64)] {
        &self.vars
    }

    /// Recorded constraints.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of variables.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }
}

/// Values for every variable of a solved model.
#[derive(Clone, Debug)]
pub struct Assignment {
    values: Vec<f64>,
}

impl Assignment {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Assignment { values }
    }

    /// Value assigned to `var`.
    pub fn value(&self, var: VarId) -> f64 {
        self.values[var.index()]
    }

    /// Integral reading of a binary variable.
    pub fn is_one(&self, var: VarId) -> bool {
        self.value(var) > 0.5
    }

    /// Number of variables covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the model had no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of submitting a model: a witness, or proof there is none.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// An optimal (for feasibility models: any) assignment.
    Feasible(Assignment),
    /// The constraint system admits no assignment.
    Infeasible,
}

impl Outcome {
    /// The assignment, if one exists.
    pub fn into_feasible(self) -> Option<Assignment> {
        match self {
            Outcome::Feasible(a) => Some(a),
            Outcome::Infeasible => None,
        }
    }
}
