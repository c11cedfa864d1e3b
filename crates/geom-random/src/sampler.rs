//! Explicit sampler over a caller-chosen generator.
//!
//! [`Sampler`] holds the pseudo-random source and implements every
//! distribution in this crate. The free functions draw from
//! [`Sampler::thread_local`]; construct a sampler directly when you need a
//! reproducible stream ([`Sampler::seeded`]) or a specific generator.
//!
//! ```rust
//! use geom_random::Sampler;
//!
//! let mut a = Sampler::seeded(7);
//! let mut b = Sampler::seeded(7);
//! assert_eq!(a.uniform(-1.0, 1.0), b.uniform(-1.0, 1.0));
//! ```

use std::f64::consts::PI;

use geom_math::{Vec2, Vec3};
use rand::distributions::Standard;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Random sampler for scalars and vectors.
///
/// Generic over any [`rand::Rng`]; defaults to the per-thread generator.
#[derive(Debug, Clone)]
pub struct Sampler<R = ThreadRng> {
    rng: R,
}

impl Sampler<ThreadRng> {
    /// Sampler backed by the calling thread's generator.
    #[inline]
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for Sampler<ThreadRng> {
    fn default() -> Self {
        Self::thread_local()
    }
}

impl Sampler<StdRng> {
    /// Reproducible sampler: equal seeds give equal streams.
    ///
    /// Streams are only stable within one build; the underlying algorithm
    /// may change between `rand` releases.
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "seeded sampler");
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler<R> {
    /// Wraps an existing generator.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Raw draw in `[0, 1)`.
    #[inline]
    fn unit(&mut self) -> f64 {
        self.rng.sample(Standard)
    }

    /// Raw draw in `(0, 1)`; zero is redrawn.
    #[inline]
    fn unit_nonzero(&mut self) -> f64 {
        loop {
            let u = self.unit();
            if u != 0.0 {
                return u;
            }
        }
    }

    /// Uniform number in `[min, max)`: `min + (max - min) * u`.
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.unit()
    }

    /// Uniform number in `[0, 1)`.
    #[inline]
    pub fn standard(&mut self) -> f64 {
        self.uniform(0.0, 1.0)
    }

    /// Uniform integer in `[min, max)`, computed as `floor(uniform(min, max))`.
    ///
    /// `int(0, 1)` is always `0`.
    #[inline]
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        self.uniform(min as f64, max as f64).floor() as i64
    }

    /// Normally distributed number (Box-Muller, cosine branch).
    ///
    /// Every call consumes two fresh uniform draws; the paired sine sample
    /// is discarded rather than cached.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u = self.unit_nonzero();
        let v = self.unit_nonzero();
        let r = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
        mean + std_dev * r
    }

    /// Standard normal number (mean 0, standard deviation 1).
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        self.normal(0.0, 1.0)
    }

    /// 2D vector with each component uniform in `[min, max)`.
    #[inline]
    pub fn vec2_uniform(&mut self, min: f64, max: f64) -> Vec2 {
        let x = self.uniform(min, max);
        let y = self.uniform(min, max);
        Vec2::new(x, y)
    }

    /// Point strictly inside the unit disk, by rejection from `[-1, 1)^2`.
    pub fn in_unit_disk(&mut self) -> Vec2 {
        let mut rejected = 0u32;
        loop {
            let p = self.vec2_uniform(-1.0, 1.0);
            if p.length_squared() < 1.0 {
                if rejected > 0 {
                    trace!(rejected, "in_unit_disk");
                }
                return p;
            }
            rejected += 1;
        }
    }

    /// Unit-disk sample flipped onto the side of `normal`.
    ///
    /// Kept when `dot(sample, normal) > 0`, negated otherwise.
    #[inline]
    pub fn in_hemicircle(&mut self, normal: Vec2) -> Vec2 {
        let p = self.in_unit_disk();
        if p.dot(normal) > 0.0 { p } else { -p }
    }

    /// 3D vector with each component uniform in `[min, max)`.
    #[inline]
    pub fn vec3_uniform(&mut self, min: f64, max: f64) -> Vec3 {
        let x = self.uniform(min, max);
        let y = self.uniform(min, max);
        let z = self.uniform(min, max);
        Vec3::new(x, y, z)
    }

    /// Point strictly inside the unit sphere, by rejection from `[-1, 1)^3`.
    pub fn in_unit_sphere(&mut self) -> Vec3 {
        let mut rejected = 0u32;
        loop {
            let p = self.vec3_uniform(-1.0, 1.0);
            if p.length_squared() < 1.0 {
                if rejected > 0 {
                    trace!(rejected, "in_unit_sphere");
                }
                return p;
            }
            rejected += 1;
        }
    }

    /// Unit-sphere sample flipped into the hemisphere around `normal`.
    ///
    /// Kept when `dot(sample, normal) > 0`, negated otherwise.
    #[inline]
    pub fn in_hemisphere(&mut self, normal: Vec3) -> Vec3 {
        let p = self.in_unit_sphere();
        if p.dot(normal) > 0.0 { p } else { -p }
    }
}
