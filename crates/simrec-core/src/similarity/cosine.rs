/// Euclidean norm of a sparse count row
pub(super) fn norm(row: &[(usize, u32)]) -> f64 {
    row.iter()
        .map(|&(_, count)| {
            let c = count as f64;
            c * c
        })
        .sum::<f64>()
        .sqrt()
}

/// Dot product of two sparse rows sorted by column
pub(super) fn dot(a: &[(usize, u32)], b: &[(usize, u32)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 as f64 * b[j].1 as f64;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Combine a dot product and two norms into a score clamped to `[0, 1]`
pub(super) fn from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0) as f32
}

/// Cosine similarity of two dense count vectors; 0 when either is all zeros
pub fn cosine_similarity(vec_a: &[u32], vec_b: &[u32]) -> f32 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (&a, &b) in vec_a.iter().zip(vec_b) {
        let (a, b) = (a as f64, b as f64);
        dot_product += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }

    from_parts(dot_product, norm_a.sqrt(), norm_b.sqrt())
}
