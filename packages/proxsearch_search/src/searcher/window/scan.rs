use crate::cursor::PositionCursor;

/// Whether a window spanning `min..=max` falls within `distance`.
///
/// The distance is an exclusive bound, so a distance of 0 or less never matches.
#[inline]
pub fn span_qualifies(min: u32, max: u32, distance: i32) -> bool {
    debug_assert!(min <= max);
    i64::from(max - min) < i64::from(distance)
}

/// Enumerates the non-overlapping windows of the document all children currently sit on,
/// returning the rightmost position of each qualifying window.
///
/// Each step takes one position from every child:
/// - if the span qualifies, the window is recorded
///   and every child moves past its own position, so no position is used twice
/// - otherwise only the children sitting at the smallest position move forward
///
/// Scanning ends once any child runs out of positions in this document.
/// `pointers` is scratch space, to minimize allocations across documents.
pub fn scan_windows<C: PositionCursor>(children: &mut [C], distance: i32, pointers: &mut Vec<u32>) -> Vec<u32> {
    let mut representatives = Vec::new();
    if children.is_empty() {
        return representatives;
    }

    loop {
        pointers.clear();
        for child in children.iter() {
            match child.position() {
                Some(pos) => pointers.push(pos),
                None => return representatives,
            }
        }

        let (min, max) = pointers
            .iter()
            .fold((std::u32::MAX, 0), |(min, max), &pos| (min.min(pos), max.max(pos)));

        if span_qualifies(min, max, distance) {
            debug_assert!(representatives.last().map_or(true, |&last| last < max));
            representatives.push(max);

            for (child, &pos) in children.iter_mut().zip(pointers.iter()) {
                child.advance_position_past(pos);
            }
        } else {
            for child in children.iter_mut() {
                child.advance_position_past(min);
            }
        }
    }
}


#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{scan_windows, span_qualifies};
    use crate::postings_list::test::to_pl_rc;
    use crate::postings_list::PlIterator;

    fn scan(positions: &[&str], distance: i32) -> Vec<u32> {
        let mut children: Vec<PlIterator> = positions.iter()
            .map(|text| PlIterator::new(to_pl_rc(text)))
            .collect();
        scan_windows(&mut children, distance, &mut Vec::new())
    }

    #[test]
    fn test_span_qualifies() {
        assert!(span_qualifies(3, 3, 1));
        assert!(span_qualifies(3, 5, 3));
        assert!(!span_qualifies(3, 6, 3));
        assert!(!span_qualifies(3, 3, 0));
        assert!(!span_qualifies(3, 3, -2));
        assert!(!span_qualifies(0, std::u32::MAX, std::i32::MAX));
    }

    #[test]
    fn test_coincident_window_then_next() {
        assert_eq!(scan(&["[1,2,5]", "[2,6,9]"], 3), vec![2, 6]);
    }

    #[test]
    fn test_every_window_qualifies() {
        assert_eq!(scan(&["[1,10]", "[2,11]"], 2), vec![2, 11]);
    }

    #[test]
    fn test_zero_and_negative_distance() {
        assert!(scan(&["[1,2,3]", "[1,2,3]"], 0).is_empty());
        assert!(scan(&["[1,2,3]", "[1,2,3]"], -1).is_empty());
    }

    #[test]
    fn test_no_children() {
        assert!(scan(&[], 5).is_empty());
    }

    #[test]
    fn test_single_child() {
        // Every position is a window of span 0
        assert_eq!(scan(&["[4,8,15]"], 1), vec![4, 8, 15]);
    }

    #[test]
    fn test_windows_do_not_overlap() {
        // a: 1 2 3, b: 2 3 4 -> {1,2}, {2,3}, {3,4}; each position is used once
        assert_eq!(scan(&["[1,2,3]", "[2,3,4]"], 2), vec![2, 3, 4]);

        // b's 2 is consumed by the first window, so a's 3 can only pair with b's 10
        assert_eq!(scan(&["[1,3]", "[2,10]"], 3), vec![2]);
    }

    #[test]
    fn test_only_minimum_advances_on_miss() {
        // 1 vs 20: a moves, 7 vs 20: a moves, 18 vs 20: match
        assert_eq!(scan(&["[1,7,18]", "[20]"], 5), vec![20]);

        // The child at the minimum moves even when it is the one further along in the query
        assert_eq!(scan(&["[20]", "[1,7,18]"], 5), vec![20]);
    }

    #[test]
    fn test_three_children() {
        // windows: {3,4,5} -> 5, then 10 vs 11 vs 30 misses until 30 is the max of {28,29,30}
        assert_eq!(scan(&["[3,10,28]", "[4,11,29]", "[5,30]"], 3), vec![5, 30]);
    }

    #[test]
    fn test_stops_when_any_child_exhausted() {
        assert_eq!(scan(&["[1]", "[1,2,3,4]"], 10), vec![1]);
        assert!(scan(&["[100]", "[1,2,3]"], 10).is_empty());
    }

    #[test]
    fn test_same_positions_in_every_child() {
        // The same term given twice: every position forms its own window
        assert_eq!(scan(&["[1,3,5]", "[1,3,5]"], 1), vec![1, 3, 5]);
        assert_eq!(scan(&["[1,3,5]", "[1,3,5]", "[1,3,5]"], 4), vec![1, 3, 5]);
    }

    #[test]
    fn test_large_positions() {
        assert_eq!(scan(&["[0]", "[4294967295]"], std::i32::MAX), Vec::<u32>::new());
        assert_eq!(scan(&["[4294967290]", "[4294967295]"], 6), vec![4294967295]);
    }
}
