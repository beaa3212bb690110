/// Short order number: last 6 characters of the id, upper-cased.
pub fn order_number(id: &str) -> String {
    let start = id
        .char_indices()
        .rev()
        .nth(5)
        .map(|(i, _)| i)
        .unwrap_or(0);
    id[start..].to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number() {
        assert_eq!(order_number("65f1c2a9e4b0a1b2c3d4e5f6"), "D4E5F6");
        assert_eq!(order_number("abc"), "ABC");
    }
}
