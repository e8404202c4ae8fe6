use std::borrow::Cow;

/// Normalizes an author-facing identifier into the field-style form used
/// for schema member names.
///
/// Snake-case identifiers are camel-cased (`simple_directive` becomes
/// `simpleDirective`), type-style identifiers have their first character
/// lowered (`SimpleDirective` becomes `simpleDirective`), and identifiers
/// already in field style pass through unchanged (and unallocated).
pub fn to_field_name(s: &str) -> Cow<'_, str> {
    let s = if s.contains('_') {
        to_camel_case(s)
    } else {
        Cow::Borrowed(s)
    };
    let first = s.chars().next();
    match first {
        Some(c) if c.is_ascii_uppercase() => {
            let mut dest = String::with_capacity(s.len());
            dest.push(c.to_ascii_lowercase());
            dest.push_str(&s[1..]);
            dest.into()
        }
        _ => s,
    }
}

/// Converts the given `snake_case` `input` into a `camelCase` one.
fn to_camel_case(input: &str) -> Cow<'_, str> {
    if !input.contains('_') {
        return input.into();
    }

    let mut dest = String::with_capacity(input.len());
    // Handles `_` and `__` to be more graceful with the kind of identifiers
    // reflection hands us.
    let input = input.strip_prefix('_').unwrap_or(input);
    for (i, part) in input.split('_').enumerate() {
        if i == 0 {
            dest.push_str(part);
        } else if let Some(first) = part.chars().next() {
            dest.extend(first.to_uppercase());
            dest.push_str(&part[first.len_utf8()..]);
        }
    }
    dest.into()
}
