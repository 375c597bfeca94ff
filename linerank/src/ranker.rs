//! Rank ordering of scored lines

/// Indices of the best lines, highest score first.
///
/// Equal scores keep their original order. At most `limit` indices are
/// returned, and the walk stops at the first score of exactly zero: scores
/// are never negative, so nothing after it is relevant either.
pub fn rank(scores: &[f64], limit: usize) -> Vec<usize> {
    if limit == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranked = Vec::with_capacity(limit.min(order.len()));
    for index in order.into_iter().take(limit) {
        if scores[index] == 0.0 {
            break;
        }
        ranked.push(index);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_descending() {
        assert_eq!(rank(&[0.1, 0.5, 0.3], 3), vec![1, 2, 0]);
    }

    #[test]
    fn test_rank_ties_keep_document_order() {
        assert_eq!(rank(&[0.2, 0.7, 0.2, 0.7, 0.2], 5), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_rank_limit() {
        assert_eq!(rank(&[0.1, 0.5, 0.3], 2), vec![1, 2]);
        assert_eq!(rank(&[0.1, 0.5, 0.3], 10), vec![1, 2, 0]);
    }

    #[test]
    fn test_rank_zero_limit() {
        assert!(rank(&[0.1, 0.5], 0).is_empty());
    }

    #[test]
    fn test_rank_stops_at_zero() {
        assert_eq!(rank(&[0.0, 0.4, 0.0, 0.2], 4), vec![1, 3]);
    }

    #[test]
    fn test_rank_all_zero() {
        assert!(rank(&[0.0, 0.0, 0.0], 2).is_empty());
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[], 5).is_empty());
    }
}
