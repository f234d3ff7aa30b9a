/// Outcome of a scalar root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootOutcome {
    /// A root was found within tolerance.
    Converged(f64),
    /// The iteration budget ran out without convergence.
    NotFound,
    /// The interval does not bracket a sign change around the target.
    InvalidBracket,
}

impl RootOutcome {
    /// The converged value, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            RootOutcome::Converged(x) => Some(x),
            _ => None,
        }
    }
}

/// Iteration budget for the secant search.
const SECANT_MAX_ITERATIONS: usize = 100;

/// Secant search for a root of `f` starting from `a` and `b`.
///
/// Converges fast on smooth monotone functions but is NOT bracketed: the
/// iterates are free to leave `[a, b]`, and the returned root may lie outside
/// the starting interval. Callers that need a guaranteed interval should use
/// [`bisect`] instead (or as a fallback, see [`secant_then_bisect`]).
///
/// Either endpoint is returned immediately if it already satisfies
/// `|f(x)| <= eps`. A degenerate secant slope produces non-finite iterates,
/// which simply run the loop to its budget and report `NotFound`.
pub fn secant<F>(a: f64, b: f64, f: F, eps: f64) -> RootOutcome
where
    F: Fn(f64) -> f64,
{
    let mut f1 = f(a);
    if f1.abs() <= eps {
        return RootOutcome::Converged(a);
    }
    let mut f2 = f(b);
    if f2.abs() <= eps {
        return RootOutcome::Converged(b);
    }

    let mut a = a;
    let mut b = b;
    for _ in 0..SECANT_MAX_ITERATIONS {
        let slope = (f2 - f1) / (b - a);
        let c = b - f2 / slope;
        let f3 = f(c);
        if f3.abs() < eps {
            return RootOutcome::Converged(c);
        }
        a = b;
        b = c;
        f1 = f2;
        f2 = f3;
    }
    RootOutcome::NotFound
}

/// Bisection search for `f(x) == target` on the interval `[a, b]`.
///
/// The interval is halved until it is no wider than `2 * eps`; the midpoint
/// of the final interval is returned. If neither half of the interval shows
/// a sign change of `f - target` the search reports `InvalidBracket`.
///
/// An interval that is already within tolerance returns its midpoint
/// directly.
pub fn bisect<F>(a: f64, b: f64, f: F, eps: f64, target: f64) -> RootOutcome
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut midpoint = (b + a) / 2.0;
    while (b - a).abs() > 2.0 * eps {
        midpoint = (b + a) / 2.0;
        let f_a = f(a);
        let f_b = f(b);
        let f_mid = f(midpoint);
        if (f_a - target) * (f_mid - target) < 0.0 {
            b = midpoint;
        } else if (f_b - target) * (f_mid - target) < 0.0 {
            a = midpoint;
        } else {
            return RootOutcome::InvalidBracket;
        }
    }
    RootOutcome::Converged(midpoint)
}

/// Secant search with bisection fallback, used by all model inversions.
///
/// The fallback targets `f(x) == 0` on the original interval.
pub fn secant_then_bisect<F>(a: f64, b: f64, f: F, eps: f64) -> RootOutcome
where
    F: Fn(f64) -> f64,
{
    match secant(a, b, &f, eps) {
        RootOutcome::NotFound => bisect(a, b, &f, eps, 0.0),
        outcome => outcome,
    }
}
