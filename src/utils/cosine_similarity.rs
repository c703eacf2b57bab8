/// Calculate cosine similarity between two term-frequency vectors.
///
/// Returns `0.0` when either vector has zero magnitude, or when the vectors are not the same
/// length (they were not built against the same vocabulary).
pub fn cosine_similarity(v1: &[f32], v2: &[f32]) -> f64 {
    if v1.len() != v2.len() {
        return 0.0;
    }

    // Single pass for dot product and both squared magnitudes
    let (dot_product, magnitude_v1_sq, magnitude_v2_sq) =
        v1.iter()
            .zip(v2)
            .fold((0f64, 0f64, 0f64), |(dot, mag1, mag2), (&a, &b)| {
                let (a, b) = (a as f64, b as f64);
                (dot + a * b, mag1 + a * a, mag2 + b * b)
            });

    let magnitude_v1 = magnitude_v1_sq.sqrt();
    let magnitude_v2 = magnitude_v2_sq.sqrt();

    if magnitude_v1 == 0.0 || magnitude_v2 == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_v1 * magnitude_v2)
}
