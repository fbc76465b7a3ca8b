//! Identifier case conversion over ASCII letters.

/// Convert a name into snake case.
///
/// Every ASCII capital is lowercased and, unless it opens the string,
/// preceded by `_`. Runs of capitals are split letter by letter
/// (`"HTTP"` becomes `"h_t_t_p"`); other characters pass through.
///
/// ```
/// assert_eq!(com::convert::snake_cased_name("FooBar"), "foo_bar");
/// ```
pub fn snake_cased_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    for (i, ch) in name.char_indices() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a snake case name into title case.
///
/// The whole name is lowercased, then the first character and each
/// character after an `_` are capitalized and that `_` is dropped. An `_`
/// directly after another `_` is kept (`"foo__bar"` becomes `"Foo_bar"`).
///
/// ```
/// assert_eq!(com::convert::title_cased_name("foo_bar"), "FooBar");
/// ```
pub fn title_cased_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut up_next = true;

    for ch in lowered.chars() {
        if up_next {
            up_next = false;
            out.push(ch.to_ascii_uppercase());
            continue;
        }
        if ch == '_' {
            up_next = true;
            continue;
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_basic() {
        assert_eq!(snake_cased_name("FooBar"), "foo_bar");
        assert_eq!(snake_cased_name("fooBar"), "foo_bar");
        assert_eq!(snake_cased_name("foo"), "foo");
        assert_eq!(snake_cased_name(""), "");
    }

    #[test]
    fn snake_splits_every_capital() {
        assert_eq!(snake_cased_name("HTTPServer"), "h_t_t_p_server");
        assert_eq!(snake_cased_name("ID"), "i_d");
    }

    #[test]
    fn snake_passes_non_ascii_through() {
        assert_eq!(snake_cased_name("ÉtéBon"), "Été_bon");
        assert_eq!(snake_cased_name("user_Id2"), "user__id2");
    }

    #[test]
    fn title_basic() {
        assert_eq!(title_cased_name("foo_bar"), "FooBar");
        assert_eq!(title_cased_name("FOO_BAR"), "FooBar");
        assert_eq!(title_cased_name("id"), "Id");
        assert_eq!(title_cased_name(""), "");
    }

    #[test]
    fn title_keeps_doubled_underscore() {
        assert_eq!(title_cased_name("foo__bar"), "Foo_bar");
        assert_eq!(title_cased_name("_foo"), "_foo");
        assert_eq!(title_cased_name("foo_"), "Foo");
    }

    #[test]
    fn title_leaves_digits_alone() {
        assert_eq!(title_cased_name("v2_api"), "V2Api");
        assert_eq!(title_cased_name("a_1b"), "A1b");
    }
}
