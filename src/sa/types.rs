//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a penalty-minimisation problem for the annealing driver.
///
/// The user supplies initial solutions, a non-negative integer penalty and
/// a neighbour move. The driver handles temperature, acceptance and cooling,
/// and stops as soon as a zero-penalty solution is reached.
///
/// # Examples
///
/// ```ignore
/// struct OnesProblem { n: usize }
///
/// impl SaProblem for OnesProblem {
///     type Solution = Vec<bool>;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
///         (0..self.n).map(|_| rng.random()).collect()
///     }
///
///     fn cost(&self, bits: &Vec<bool>) -> usize {
///         bits.iter().filter(|&&b| b).count()
///     }
///
///     fn neighbor<R: Rng>(&self, bits: &Vec<bool>, rng: &mut R) -> Vec<bool> {
///         let mut next = bits.clone();
///         let i = rng.random_range(0..next.len());
///         next[i] = !next[i];
///         next
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send + Sync;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Penalty of a solution. Zero means solved.
    fn cost(&self, solution: &Self::Solution) -> usize;

    /// Generates a neighbour of `solution` without modifying it.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
