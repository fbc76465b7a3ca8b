//! Slice membership and multiset difference.
//!
//! Every operation works on borrowed input and returns freshly allocated
//! output; caller-owned slices are never mutated.

/// Check whether `key` occurs anywhere in `slice`.
pub fn contains<T: PartialEq>(slice: &[T], key: &T) -> bool {
    slice.iter().any(|item| item == key)
}

/// Remove the first element equal to `needle` from a copy of `haystack`.
///
/// Returns the remaining elements and whether a match was removed. When
/// nothing matches, the returned vector is an equal copy of `haystack`.
pub fn remove_first<T: PartialEq + Clone>(needle: &T, haystack: &[T]) -> (Vec<T>, bool) {
    match haystack.iter().position(|item| item == needle) {
        Some(index) => {
            let mut remaining = Vec::with_capacity(haystack.len() - 1);
            remaining.extend_from_slice(&haystack[..index]);
            remaining.extend_from_slice(&haystack[index + 1..]);
            (remaining, true)
        }
        None => (haystack.to_vec(), false),
    }
}

/// Elements present in exactly one of `a` and `b`, counted as multisets.
///
/// The shorter slice is matched element by element against the longer one,
/// removing at most one equal element per probe. The result holds the
/// unmatched elements of the shorter slice followed by the leftovers of the
/// longer slice, both in their original order. When the lengths are equal,
/// `a` is treated as the shorter side.
///
/// ```
/// use com::array::diff;
///
/// assert_eq!(diff(&["d"], &["a", "b", "c"]), vec!["d", "a", "b", "c"]);
/// assert_eq!(diff(&["a", "c"], &["a", "b", "c"]), vec!["b"]);
/// ```
pub fn diff<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() {
        return b.to_vec();
    }
    if b.is_empty() {
        return a.to_vec();
    }

    let (probe, pool) = if b.len() < a.len() { (b, a) } else { (a, b) };

    let mut unmatched = Vec::new();
    let mut remaining = pool.to_vec();
    for item in probe {
        let (rest, found) = remove_first(item, &remaining);
        if found {
            remaining = rest;
        } else {
            unmatched.push(item.clone());
        }
    }

    unmatched.extend(remaining);
    unmatched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn contains_finds_present_key() {
        assert!(contains(&["a", "b", "c"], &"b"));
        assert!(!contains(&["a", "b", "c"], &"d"));
        assert!(!contains::<&str>(&[], &"a"));
    }

    #[test]
    fn contains_works_for_numbers() {
        assert!(contains(&[1, 2, 3], &3));
        assert!(!contains(&[1.5, 2.5], &3.0));
    }

    #[test]
    fn remove_first_drops_match() {
        let (rest, found) = remove_first(&"a", &["a", "b", "c"]);
        assert!(found);
        assert_eq!(rest, vec!["b", "c"]);
    }

    #[test]
    fn remove_first_only_drops_one_occurrence() {
        let (rest, found) = remove_first(&"a", &["b", "a", "c", "a"]);
        assert!(found);
        assert_eq!(rest, vec!["b", "c", "a"]);
    }

    #[test]
    fn remove_first_without_match_copies() {
        let (rest, found) = remove_first(&"d", &["a", "b", "c"]);
        assert!(!found);
        assert_eq!(rest, vec!["a", "b", "c"]);

        let (rest, found) = remove_first(&"d", &[]);
        assert!(!found);
        assert!(rest.is_empty());
    }

    #[test]
    fn remove_first_leaves_input_untouched() {
        let haystack = strings(&["59bf2170ceadf87a1e7e1ab4", "59bf2170ceadf87a1e7e1ab5"]);
        let (rest, found) = remove_first(&haystack[0].clone(), &haystack);
        assert!(found);
        assert_eq!(rest, strings(&["59bf2170ceadf87a1e7e1ab5"]));
        assert_eq!(haystack.len(), 2);
    }

    #[test]
    fn diff_not_in_array() {
        assert_eq!(diff(&["d"], &["a", "b", "c"]), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn diff_partial_match() {
        assert_eq!(diff(&["a", "c"], &["a", "b", "c"]), vec!["b"]);
    }

    #[test]
    fn diff_all_match() {
        assert!(diff(&["a", "c", "b"], &["a", "b", "c"]).is_empty());
    }

    #[test]
    fn diff_empty_sides() {
        assert_eq!(diff(&[], &["a", "b"]), vec!["a", "b"]);
        assert_eq!(diff(&["a", "b"], &[]), vec!["a", "b"]);
        assert!(diff::<&str>(&[], &[]).is_empty());
    }

    #[test]
    fn diff_longer_first_argument() {
        assert_eq!(
            diff(&["a", "b", "c", "d", "e"], &["a", "c"]),
            vec!["b", "d", "e"]
        );
    }

    #[test]
    fn diff_counts_duplicates() {
        assert_eq!(diff(&["a", "a"], &["a", "b", "c"]), vec!["a", "b", "c"]);
        assert_eq!(diff(&["x", "x", "y"], &["x", "y", "z"]), vec!["x", "z"]);
    }

    #[test]
    fn diff_equal_length_keeps_argument_order() {
        assert_eq!(diff(&["a", "b"], &["c", "d"]), vec!["a", "b", "c", "d"]);
        assert_eq!(diff(&["c", "d"], &["a", "b"]), vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn diff_does_not_mutate_inputs() {
        let s = strings(&[
            "59bf2170ceadf87a1e7e1ab4",
            "59bf2170ceadf87a1e7e1ab5",
            "5a2899f460faae1623882b5b",
        ]);
        let t = strings(&[
            "59bf2170ceadf87a1e7e1ab4",
            "5a2899f460faae1623882b5b",
            "59bf2170ceadf87a1e7e1ab5",
        ]);
        let s_before = s.clone();
        let t_before = t.clone();

        assert!(diff(&s, &t).is_empty());
        assert_eq!(s, s_before);
        assert_eq!(t, t_before);
    }
}
