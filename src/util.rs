use std::fmt::Display;

/// Returns the English ordinal suffix for the given number, so `1` yields `"st"`, `12` yields
/// `"th"` and `23` yields `"rd"`. Numbers whose last two digits are 11 through 13 always take
/// `"th"`.
pub fn ordinal_suffix(value: usize) -> &'static str {
    let hundreds_rem = value % 100;
    let tens_rem = value % 10;
    if hundreds_rem - tens_rem == 10 {
        return "th";
    }

    match tens_rem {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Returns the number followed by its ordinal suffix, e.g. `"21st"`.
pub fn ordinal(value: usize) -> String {
    format!("{}{}", value, ordinal_suffix(value))
}

/// Joins the given items into an English list: `"a"`, `"a and b"`, `"a, b, and c"`.
pub fn sentence_of<T: Display>(items: &[T]) -> String {
    let size = items.len();
    let mut sentence = String::new();
    for (index, item) in items.iter().enumerate() {
        sentence.push_str(&item.to_string());
        if size >= 2 && index == size - 2 {
            sentence.push_str(if size > 2 { ", and " } else { " and " });
        } else if index + 1 != size {
            sentence.push_str(", ");
        }
    }
    sentence
}
