use ndarray::{Array1, ArrayView1};
use tsynth_core::{Generator, NoiseGenerator, UnsupportedOperation};

/// Sum of several noise generators.
///
/// Each component sees the same timestamps and history. The mixture is
/// vectorizable only when every component is; otherwise it must be sampled
/// pointwise so stateful components advance in step.
#[derive(Default)]
pub struct MixedNoise {
    components: Vec<Box<dyn NoiseGenerator>>,
}

impl MixedNoise {
    /// Creates a mixture from the given components.
    #[must_use]
    pub fn new(components: Vec<Box<dyn NoiseGenerator>>) -> Self {
        Self { components }
    }

    /// Adds a component.
    #[must_use]
    pub fn with<N: NoiseGenerator + 'static>(mut self, component: N) -> Self {
        self.components.push(Box::new(component));
        self
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the mixture has no components and is always zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Debug for MixedNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.components.iter().map(|c| c.kind()))
            .finish()
    }
}

impl Generator for MixedNoise {
    fn kind(&self) -> &'static str {
        "mixed noise"
    }

    fn is_vectorizable(&self) -> bool {
        self.components.iter().all(|c| c.is_vectorizable())
    }

    fn sample_next(&mut self, time: f64, samples: &[f64], errors: &[f64]) -> f64 {
        self.components
            .iter_mut()
            .map(|c| c.sample_next(time, samples, errors))
            .sum()
    }

    fn sample_vectorized(
        &mut self,
        times: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, UnsupportedOperation> {
        if !self.is_vectorizable() {
            return Err(UnsupportedOperation::new(self.kind()));
        }

        let mut total = Array1::zeros(times.len());
        for component in &mut self.components {
            let part = component.sample_vectorized(times)?;
            if part.len() != total.len() {
                // A short or long batch is reported by the driver's length check.
                return Ok(part);
            }
            total += &part;
        }
        Ok(total)
    }
}

impl NoiseGenerator for MixedNoise {}
