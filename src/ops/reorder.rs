use indexmap::IndexMap;

use super::outcome::{Ignored, Outcome};

/// Classic array move: remove at `from`, insert at `to`, shifting the
/// elements in between by one.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Outcome {
    if let Some(reason) = check_move(items.len(), from, to) {
        return Outcome::Ignored(reason);
    }
    let item = items.remove(from);
    items.insert(to, item);
    Outcome::Applied
}

/// Same move semantics over an ordered map.
pub fn move_entry<K, V>(map: &mut IndexMap<K, V>, from: usize, to: usize) -> Outcome {
    if let Some(reason) = check_move(map.len(), from, to) {
        return Outcome::Ignored(reason);
    }
    map.move_index(from, to);
    Outcome::Applied
}

fn check_move(len: usize, from: usize, to: usize) -> Option<Ignored> {
    if from >= len || to >= len {
        return Some(Ignored::IndexOutOfRange { from, to, len });
    }
    if from == to {
        return Some(Ignored::NoMove(from));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward_shifts_between() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, 0, 2).is_applied());
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_move_backward_shifts_between() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(move_item(&mut v, 3, 1).is_applied());
        assert_eq!(v, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut v = vec!['a', 'b'];
        assert_eq!(
            move_item(&mut v, 0, 2),
            Outcome::Ignored(Ignored::IndexOutOfRange { from: 0, to: 2, len: 2 })
        );
        assert_eq!(v, vec!['a', 'b']);
    }

    #[test]
    fn test_same_index_is_ignored() {
        let mut v = vec!['a', 'b'];
        assert_eq!(move_item(&mut v, 1, 1), Outcome::Ignored(Ignored::NoMove(1)));
    }

    #[test]
    fn test_move_entry_matches_vec_semantics() {
        let mut map: IndexMap<&str, u8> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert!(move_entry(&mut map, 2, 0).is_applied());
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }
}
