#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// First non-gap index strictly past `from` in `direction`.
///
/// `from = None` stands for "before the first entry", so scanning forward
/// from it finds the first selectable entry of the list. When the scan hits
/// the end of the list without a match, `from` is returned unchanged: there
/// is no wraparound.
pub fn next_selectable<T>(items: &[Option<T>], from: Option<usize>, direction: Direction) -> Option<usize> {
    let found = match (direction, from) {
        (Direction::Forward, None) => (0..items.len()).find(|&i| items[i].is_some()),
        (Direction::Forward, Some(from)) => (from + 1..items.len()).find(|&i| items[i].is_some()),
        (Direction::Backward, None) => None,
        (Direction::Backward, Some(from)) => (0..from.min(items.len())).rev().find(|&i| items[i].is_some()),
    };
    found.or(from)
}

/// Where the cursor lands when a page is first shown.
pub fn first_selectable<T>(items: &[Option<T>]) -> Option<usize> {
    next_selectable(items, None, Direction::Forward)
}

#[cfg(test)]
mod tests {
    use super::*;

    // [A, gap, B, C]
    const PAGE: [Option<char>; 4] = [Some('A'), None, Some('B'), Some('C')];

    #[test]
    fn first_entry_on_page_open() {
        assert_eq!(first_selectable(&PAGE), Some(0));
        assert_eq!(first_selectable(&[None, None, Some('x')]), Some(2));
    }

    #[test]
    fn skips_gaps_both_ways() {
        assert_eq!(next_selectable(&PAGE, Some(0), Direction::Forward), Some(2));
        assert_eq!(next_selectable(&PAGE, Some(2), Direction::Backward), Some(0));
    }

    #[test]
    fn clamps_at_the_ends() {
        assert_eq!(next_selectable(&PAGE, Some(3), Direction::Forward), Some(3));
        assert_eq!(next_selectable(&PAGE, Some(0), Direction::Backward), Some(0));
        assert_eq!(next_selectable(&[Some(1), None, None], Some(0), Direction::Forward), Some(0));
    }

    #[test]
    fn all_gaps_has_no_selection() {
        let gaps: [Option<u8>; 3] = [None, None, None];
        assert_eq!(first_selectable(&gaps), None);
        assert_eq!(next_selectable(&gaps, None, Direction::Backward), None);
    }

    #[test]
    fn forward_then_backward_round_trips_on_interior_indices() {
        let items = [Some(0), None, Some(2), Some(3), None, None, Some(6), Some(7), None, Some(9)];
        let selectable: Vec<usize> = (0..items.len()).filter(|&i| items[i].is_some()).collect();

        for (pos, &start) in selectable.iter().enumerate() {
            for steps in 1..selectable.len() {
                if pos + steps >= selectable.len() {
                    break;
                }
                let mut index = Some(start);
                for _ in 0..steps {
                    index = next_selectable(&items, index, Direction::Forward);
                }
                for _ in 0..steps {
                    index = next_selectable(&items, index, Direction::Backward);
                }
                assert_eq!(index, Some(start));
            }
        }
    }
}
