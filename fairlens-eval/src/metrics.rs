//! Per-query retrieval metrics.

/// 1.0 when any expected id was retrieved, else 0.0.
pub fn hit_rate(expected_ids: &[String], retrieved_ids: &[String]) -> f64 {
    if retrieved_ids.iter().any(|id| expected_ids.contains(id)) {
        1.0
    } else {
        0.0
    }
}

/// Reciprocal of the 1-based rank of the first relevant result; 0.0 if none.
pub fn reciprocal_rank(expected_ids: &[String], retrieved_ids: &[String]) -> f64 {
    retrieved_ids
        .iter()
        .position(|id| expected_ids.contains(id))
        .map(|idx| 1.0 / (idx + 1) as f64)
        .unwrap_or(0.0)
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_hit_rate() {
        assert_eq!(hit_rate(&ids(&["a"]), &ids(&["x", "a"])), 1.0);
        assert_eq!(hit_rate(&ids(&["a"]), &ids(&["x", "y"])), 0.0);
        assert_eq!(hit_rate(&ids(&["a"]), &[]), 0.0);
    }

    #[test]
    fn test_reciprocal_rank() {
        assert_eq!(reciprocal_rank(&ids(&["a"]), &ids(&["a", "b"])), 1.0);
        assert_eq!(reciprocal_rank(&ids(&["b", "c"]), &ids(&["a", "c", "b"])), 0.5);
        assert_eq!(reciprocal_rank(&ids(&["z"]), &ids(&["a", "b"])), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 0.5]), 0.75);
    }
}
