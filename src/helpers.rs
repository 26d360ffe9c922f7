//! Helper functions for digit grouping and truncation

/// Groups a plain digit string the Indian way: the last three digits form
/// one group, every group to the left of it holds two digits.
/// Example: "12345678" -> "1,23,45,678"
pub fn group_indian(digits: &str, separator: char) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let chars: Vec<char> = head.chars().collect();
    let mut result = String::with_capacity(digits.len() + digits.len() / 2);

    for (i, &ch) in chars.iter().enumerate() {
        // Add a separator every 2 digits from the right of the head
        if i > 0 && (chars.len() - i) % 2 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }

    result.push(separator);
    result.push_str(tail);
    result
}

/// Truncates toward negative infinity at two decimal places.
pub fn truncate_hundredths(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
