use rand::Rng;

use crate::error::{AppError, AppResult};

/// Picks one element uniformly at random. The original design left
/// empty input undefined; here it is an explicit error.
pub fn choice<T>(items: &[T]) -> AppResult<&T> {
    if items.is_empty() {
        return Err(AppError::EmptyInput);
    }
    let index = rand::rng().random_range(0..items.len());
    Ok(&items[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_returns_member_of_input() {
        let items = ["a", "b", "c", "d"];
        for _ in 0..100 {
            let picked = choice(&items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_choice_single_element() {
        let items = [42];
        assert_eq!(*choice(&items).unwrap(), 42);
    }

    #[test]
    fn test_choice_empty_input_is_an_error() {
        let items: [u32; 0] = [];
        assert!(matches!(choice(&items), Err(AppError::EmptyInput)));
    }

    #[test]
    fn test_choice_eventually_covers_all_indices() {
        let items = [0usize, 1, 2];
        let mut seen = [false; 3];
        for _ in 0..1000 {
            seen[*choice(&items).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform pick should hit every index");
    }
}
