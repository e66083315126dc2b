//! Derived distributions on top of the core generator
//!
//! Every method here pulls zero or more uniform draws from the generator
//! and is otherwise stateless (except the Gaussian spare, which lives on
//! the generator and is scoped to the current seed). The number and order
//! of draws each method consumes is part of the reproducibility contract:
//! changing either changes every downstream artwork.

use std::f64::consts::PI;

use super::TokenRng;

impl TokenRng {
    /// Random boolean with 50% uniform chance.
    pub fn boolean(&mut self) -> bool {
        self.next_f64() > 0.5
    }

    /// Random chance: true with probability `probability`.
    ///
    /// Call with `0.5` for an even coin (but note [`TokenRng::boolean`]
    /// consumes a draw with the opposite comparison, so the two are not
    /// interchangeable mid-stream).
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Random value between `min` (inclusive) and `max` (exclusive).
    ///
    /// # Example
    /// ```
    /// use token_random_core_rs::TokenRng;
    ///
    /// let mut rng = TokenRng::from_hash("0x00").unwrap();
    /// let value = rng.range(10.0, 20.0);
    /// assert!(value >= 10.0 && value < 20.0);
    /// ```
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Random value between 0 (inclusive) and `max` (exclusive).
    pub fn range_to(&mut self, max: f64) -> f64 {
        self.range(0.0, max)
    }

    /// Random value between `min` and `max`, floored to an integer.
    pub fn range_floor(&mut self, min: f64, max: f64) -> i64 {
        self.range(min, max).floor() as i64
    }

    /// Random value between 0 and `max`, floored to an integer.
    pub fn range_floor_to(&mut self, max: f64) -> i64 {
        self.range_floor(0.0, max)
    }

    /// Pick a random element of `items`.
    ///
    /// Returns `None` on an empty slice; never indexes out of bounds.
    ///
    /// # Example
    /// ```
    /// use token_random_core_rs::TokenRng;
    ///
    /// let mut rng = TokenRng::from_hash("0x00").unwrap();
    /// assert!(rng.pick::<u32>(&[]).is_none());
    /// assert!(rng.pick(&[25, 10]).is_some());
    /// ```
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.range_floor_to(items.len() as f64) as usize;
        Some(&items[index])
    }

    /// Return a shuffled copy of `items`; the input is untouched.
    ///
    /// Fisher-Yates from the end: for `len` from N down to 1, the element
    /// at `len - 1` is swapped with the element at `floor(next_f64() * len)`.
    /// Consumes exactly `items.len()` draws.
    ///
    /// # Example
    /// ```
    /// use token_random_core_rs::TokenRng;
    ///
    /// let mut rng = TokenRng::from_hash("0x00").unwrap();
    /// let shuffled = rng.shuffle(&[1, 2, 3, 4, 5]);
    /// assert_eq!(shuffled.len(), 5);
    /// ```
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for len in (1..=shuffled.len()).rev() {
            let target = (self.next_f64() * len as f64) as usize;
            shuffled.swap(len - 1, target);
        }
        shuffled
    }

    /// Random point in a uniform 2D disc with the given radius.
    ///
    /// The radius is square-rooted so points are uniform over the disc
    /// area, not clustered at the center or pushed to the boundary.
    /// Consumes exactly two draws: angle first, then radius.
    pub fn inside_circle(&mut self, radius: f64) -> (f64, f64) {
        let theta = self.next_f64() * 2.0 * PI;
        let r = radius * self.next_f64().sqrt();
        (r * theta.cos(), r * theta.sin())
    }

    /// Weighted index selection: the return value indexes into `weights`.
    ///
    /// Draws once, scales by the total weight, and scans cumulatively.
    /// If no index matches (all-zero weights, an empty slice, or a rounding
    /// edge at the top of the scan) the result is index 0 - documented
    /// fallback policy, not an error.
    ///
    /// # Example
    /// ```
    /// use token_random_core_rs::TokenRng;
    ///
    /// let mut rng = TokenRng::from_hash("0x00").unwrap();
    /// // Only index 0 carries weight, so it wins on every draw
    /// assert_eq!(rng.weighted(&[1.0, 0.0, 0.0]), 0);
    /// ```
    pub fn weighted(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut remaining = self.next_f64() * total;

        for (index, &weight) in weights.iter().enumerate() {
            if remaining < weight {
                return index;
            }
            remaining -= weight;
        }
        0
    }

    /// Random Gaussian (normal) value with the given mean and standard
    /// deviation.
    ///
    /// Marsaglia polar method: each accepted pair of uniform draws yields
    /// two normals - one is returned, the other is cached on the generator
    /// and consumed by the next call. Re-seeding discards the cached spare,
    /// so a fresh seed always starts a fresh polar iteration.
    ///
    /// # Arguments
    /// * `mean` - Center of the distribution (0 for standard normal)
    /// * `std_dev` - Standard deviation (1 for standard normal)
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        if let Some(spare) = self.gaussian_spare.take() {
            return mean + std_dev * spare;
        }

        loop {
            let v1 = self.next_f64() * 2.0 - 1.0;
            let v2 = self.next_f64() * 2.0 - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s > 0.0 && s < 1.0 {
                let multiplier = (-2.0 * s.ln() / s).sqrt();
                self.gaussian_spare = Some(v2 * multiplier);
                return mean + std_dev * (v1 * multiplier);
            }
        }
    }
}
