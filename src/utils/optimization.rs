//! Nelder-Mead simplex minimization for model parameter estimation.

/// Configuration for the simplex search.
#[derive(Debug, Clone)]
pub struct SimplexConfig {
    pub max_iter: usize,
    pub tolerance: f64,
    /// Reflection coefficient.
    pub reflection: f64,
    /// Expansion coefficient.
    pub expansion: f64,
    /// Contraction coefficient.
    pub contraction: f64,
    /// Shrink coefficient.
    pub shrink: f64,
    /// Relative step used to seed the initial simplex.
    pub initial_step: f64,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-8,
            reflection: 1.0,
            expansion: 2.0,
            contraction: 0.5,
            shrink: 0.5,
            initial_step: 0.05,
        }
    }
}

/// Outcome of a simplex search.
#[derive(Debug, Clone)]
pub struct SimplexOutcome {
    pub point: Vec<f64>,
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Minimize `objective` starting from `initial`, optionally clamping every
/// candidate point to per-dimension `bounds`.
pub fn simplex_minimize<F>(
    objective: F,
    initial: &[f64],
    bounds: Option<&[(f64, f64)]>,
    config: SimplexConfig,
) -> SimplexOutcome
where
    F: Fn(&[f64]) -> f64,
{
    let n = initial.len();
    if n == 0 {
        return SimplexOutcome {
            point: vec![],
            value: f64::NAN,
            iterations: 0,
            converged: false,
        };
    }

    let clamp = |mut point: Vec<f64>| -> Vec<f64> {
        if let Some(bounds) = bounds {
            for (x, &(lo, hi)) in point.iter_mut().zip(bounds) {
                *x = x.clamp(lo, hi);
            }
        }
        point
    };

    // Seed the simplex: the initial point plus one perturbed vertex per
    // dimension.
    let mut vertices: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    vertices.push(clamp(initial.to_vec()));
    for i in 0..n {
        let mut vertex = initial.to_vec();
        vertex[i] += if vertex[i].abs() > 1e-10 {
            config.initial_step * vertex[i].abs()
        } else {
            config.initial_step
        };
        vertices.push(clamp(vertex));
    }
    let mut values: Vec<f64> = vertices.iter().map(|v| objective(v)).collect();

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        iterations += 1;

        // Order vertices best-first.
        let mut order: Vec<usize> = (0..=n).collect();
        order.sort_by(|&a, &b| {
            values[a]
                .partial_cmp(&values[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        vertices = order.iter().map(|&i| vertices[i].clone()).collect();
        values = order.iter().map(|&i| values[i]).collect();

        if (values[n] - values[0]).abs() < config.tolerance {
            converged = true;
            break;
        }

        // Centroid of all but the worst vertex.
        let mut centroid = vec![0.0; n];
        for vertex in &vertices[..n] {
            for (c, x) in centroid.iter_mut().zip(vertex) {
                *c += x;
            }
        }
        for c in &mut centroid {
            *c /= n as f64;
        }

        let reflected = clamp(
            centroid
                .iter()
                .zip(&vertices[n])
                .map(|(c, w)| c + config.reflection * (c - w))
                .collect(),
        );
        let reflected_value = objective(&reflected);

        if reflected_value < values[0] {
            let expanded = clamp(
                centroid
                    .iter()
                    .zip(&reflected)
                    .map(|(c, r)| c + config.expansion * (r - c))
                    .collect(),
            );
            let expanded_value = objective(&expanded);
            if expanded_value < reflected_value {
                vertices[n] = expanded;
                values[n] = expanded_value;
            } else {
                vertices[n] = reflected;
                values[n] = reflected_value;
            }
            continue;
        }

        if reflected_value < values[n - 1] {
            vertices[n] = reflected;
            values[n] = reflected_value;
            continue;
        }

        // Contract toward the better of the reflection and the worst vertex.
        let (base, base_value) = if reflected_value < values[n] {
            (&reflected, reflected_value)
        } else {
            (&vertices[n], values[n])
        };
        let contracted = clamp(
            centroid
                .iter()
                .zip(base.iter())
                .map(|(c, b)| c + config.contraction * (b - c))
                .collect(),
        );
        let contracted_value = objective(&contracted);
        if contracted_value < base_value {
            vertices[n] = contracted;
            values[n] = contracted_value;
            continue;
        }

        // Shrink everything toward the best vertex.
        let best = vertices[0].clone();
        for i in 1..=n {
            let shrunk = clamp(
                best.iter()
                    .zip(&vertices[i])
                    .map(|(b, v)| b + config.shrink * (v - b))
                    .collect(),
            );
            values[i] = objective(&shrunk);
            vertices[i] = shrunk;
        }
    }

    let best_idx = values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);

    SimplexOutcome {
        point: vertices[best_idx].clone(),
        value: values[best_idx],
        iterations,
        converged,
    }
}
