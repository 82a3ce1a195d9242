/// Derive the in-document link target for a heading.
///
/// Lowercases the text, turns spaces, `/` and `_` into `-`, and drops every
/// character that is not `a-z`, `0-9` or `-`. Colliding names produce
/// colliding anchors.
///
/// - `Get User` → `get-user`
/// - `List_Items` → `list-items`
pub fn anchor(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '_' => '-',
            other => other,
        })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names() {
        assert_eq!(anchor("Get User"), "get-user");
        assert_eq!(anchor("List_Items"), "list-items");
        assert_eq!(anchor("General"), "general");
    }

    #[test]
    fn test_separators_are_not_collapsed() {
        assert_eq!(anchor("Get User / Profile"), "get-user---profile");
    }

    #[test]
    fn test_strips_punctuation_and_non_ascii() {
        assert_eq!(anchor("Users (v2)!"), "users-v2");
        assert_eq!(anchor("Café Menu"), "caf-menu");
        assert_eq!(anchor("Orders.Create"), "orderscreate");
    }

    #[test]
    fn test_same_name_same_anchor() {
        assert_eq!(anchor("Delete Item"), anchor("Delete Item"));
        assert_eq!(anchor(""), "");
    }
}
