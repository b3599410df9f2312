//! Derivative-free minimization used for parameter estimation
//!
//! Bounded Nelder-Mead simplex search. Objectives that are undefined at a
//! point should return `f64::INFINITY` rather than NaN so the simplex can
//! move away from them.

/// Settings for [`nelder_mead`]
#[derive(Debug, Clone)]
pub struct NelderMeadConfig {
    /// Maximum number of simplex iterations
    pub max_iter: usize,
    /// Stop once the spread of objective values falls below this
    pub tolerance: f64,
    /// Step used to build the initial simplex around the starting point
    pub initial_step: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-10,
            initial_step: 0.1,
        }
    }
}

/// Outcome of a [`nelder_mead`] run
#[derive(Debug, Clone)]
pub struct Minimum {
    /// Best point found
    pub point: Vec<f64>,
    /// Objective value at `point`
    pub value: f64,
    /// Iterations performed
    pub iterations: usize,
    /// Whether the tolerance was reached before `max_iter`
    pub converged: bool,
}

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Minimize `objective` starting from `initial`
///
/// # Arguments
///
/// * `objective` - Function to minimize
/// * `initial` - Starting point
/// * `bounds` - Per-dimension `(min, max)` box; every trial point is clamped into it
/// * `config` - Iteration and tolerance settings
pub fn nelder_mead<F>(
    objective: F,
    initial: &[f64],
    bounds: &[(f64, f64)],
    config: &NelderMeadConfig,
) -> Minimum
where
    F: Fn(&[f64]) -> f64,
{
    let n = initial.len();
    let start = clamp(initial, bounds);

    if n == 0 {
        let value = objective(&start);
        return Minimum {
            point: start,
            value,
            iterations: 0,
            converged: true,
        };
    }

    let mut simplex = Vec::with_capacity(n + 1);
    simplex.push(start.clone());
    for i in 0..n {
        let mut vertex = start.clone();
        let step = if vertex[i].abs() > 1e-8 {
            config.initial_step * vertex[i].abs()
        } else {
            config.initial_step
        };
        vertex[i] += step;
        let vertex = clamp(&vertex, bounds);
        // Clamping can collapse the step onto the start point; go the other way
        if vertex[i] == start[i] {
            let mut flipped = start.clone();
            flipped[i] -= step;
            simplex.push(clamp(&flipped, bounds));
        } else {
            simplex.push(vertex);
        }
    }
    let mut values: Vec<f64> = simplex.iter().map(|v| sanitize(objective(v))).collect();

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        iterations += 1;
        order_by_value(&mut simplex, &mut values);

        let best = values[0];
        let worst = values[n];
        if (worst - best).abs() <= config.tolerance * (1.0 + best.abs()) {
            converged = true;
            break;
        }

        let centroid = centroid(&simplex[..n]);

        let reflected = clamp(&towards(&centroid, &simplex[n], -REFLECTION), bounds);
        let reflected_value = sanitize(objective(&reflected));

        if reflected_value < best {
            let expanded = clamp(&towards(&centroid, &reflected, EXPANSION), bounds);
            let expanded_value = sanitize(objective(&expanded));
            if expanded_value < reflected_value {
                simplex[n] = expanded;
                values[n] = expanded_value;
            } else {
                simplex[n] = reflected;
                values[n] = reflected_value;
            }
            continue;
        }

        if reflected_value < values[n - 1] {
            simplex[n] = reflected;
            values[n] = reflected_value;
            continue;
        }

        let (contracted, contracted_value) = if reflected_value < worst {
            let outside = clamp(&towards(&centroid, &reflected, CONTRACTION), bounds);
            let value = sanitize(objective(&outside));
            (outside, value)
        } else {
            let inside = clamp(&towards(&centroid, &simplex[n], CONTRACTION), bounds);
            let value = sanitize(objective(&inside));
            (inside, value)
        };

        if contracted_value < reflected_value.min(worst) {
            simplex[n] = contracted;
            values[n] = contracted_value;
            continue;
        }

        let anchor = simplex[0].clone();
        for i in 1..=n {
            simplex[i] = clamp(&towards(&anchor, &simplex[i], SHRINK), bounds);
            values[i] = sanitize(objective(&simplex[i]));
        }
    }

    order_by_value(&mut simplex, &mut values);
    Minimum {
        point: simplex.swap_remove(0),
        value: values[0],
        iterations,
        converged,
    }
}

/// NaN compares false against everything and would freeze the ordering
fn sanitize(value: f64) -> f64 {
    if value.is_nan() {
        f64::INFINITY
    } else {
        value
    }
}

fn order_by_value(simplex: &mut Vec<Vec<f64>>, values: &mut Vec<f64>) {
    let mut paired: Vec<(f64, Vec<f64>)> = values
        .drain(..)
        .zip(simplex.drain(..))
        .collect();
    paired.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (value, vertex) in paired {
        values.push(value);
        simplex.push(vertex);
    }
}

fn centroid(vertices: &[Vec<f64>]) -> Vec<f64> {
    let dim = vertices[0].len();
    let count = vertices.len() as f64;
    (0..dim)
        .map(|j| vertices.iter().map(|v| v[j]).sum::<f64>() / count)
        .collect()
}

/// `origin + factor * (target - origin)`
fn towards(origin: &[f64], target: &[f64], factor: f64) -> Vec<f64> {
    origin
        .iter()
        .zip(target)
        .map(|(o, t)| o + factor * (t - o))
        .collect()
}

fn clamp(point: &[f64], bounds: &[(f64, f64)]) -> Vec<f64> {
    point
        .iter()
        .enumerate()
        .map(|(i, &x)| match bounds.get(i) {
            Some(&(lo, hi)) => x.clamp(lo, hi),
            None => x,
        })
        .collect()
}
