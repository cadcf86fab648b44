use ndarray::Array1;
use rand::Rng;
use rand_distr::StandardNormal;

/// One draw from `N(mean, std²)`.
///
/// Scaling a standard normal keeps `std == 0` exact: the draw is `mean`.
pub(crate) fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std * z
}

/// `n` independent draws from `N(mean, std²)`.
pub(crate) fn normal_batch<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std: f64,
) -> Array1<f64> {
    Array1::from_shape_simple_fn(n, || normal(&mut *rng, mean, std))
}
