use crate::utils::common_keys_iter;
use num_traits::float::Float;
use std::{
    collections::BTreeMap,
    ops::{AddAssign, Mul},
};

/// Euclidean norm of a sparse vector, absent entries count as zero.
pub fn norm<K, V>(a: &BTreeMap<K, V>) -> V
where
    V: Float + AddAssign,
{
    let mut sum = V::zero();
    for x in a.values() {
        sum += x.powi(2);
    }

    sum.sqrt()
}

/// Dot product of two sparse vectors, only keys present in both contribute.
pub fn dot_product<K, V>(a: &BTreeMap<K, V>, b: &BTreeMap<K, V>) -> V
where
    K: Ord,
    V: Float + AddAssign + Mul,
{
    let mut dot_prod = V::zero();
    for (_, (x, y)) in common_keys_iter(a, b) {
        dot_prod += (*x) * (*y);
    }

    dot_prod
}

/// Cosine of the angle between `a` and `b` given their precomputed norms.
///
/// Unlike a distance restricted to co-rated keys, the norms here cover the
/// whole vectors. A zero vector is orthogonal to everything, so it yields zero
/// instead of an indeterminate form. The result never goes above one.
pub fn cosine_with_norms<K, V>(a: &BTreeMap<K, V>, b: &BTreeMap<K, V>, norm_a: V, norm_b: V) -> V
where
    K: Ord,
    V: Float + AddAssign + Mul,
{
    if norm_a == V::zero() || norm_b == V::zero() {
        return V::zero();
    }

    let cos_sim = dot_product(a, b) / (norm_a * norm_b);
    if cos_sim.is_nan() || cos_sim.is_infinite() {
        V::zero()
    } else {
        cos_sim.min(V::one())
    }
}

pub fn cosine_similarity<K, V>(a: &BTreeMap<K, V>, b: &BTreeMap<K, V>) -> V
where
    K: Ord,
    V: Float + AddAssign + Mul,
{
    cosine_with_norms(a, b, norm(a), norm(b))
}
