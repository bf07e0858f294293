/// Class name merging

/// Join utility class lists, dropping empty pieces and normalizing whitespace.
/// Later pieces come last so their rules win on equal specificity.
pub fn cn(classes: &[&str]) -> String {
    classes
        .iter()
        .flat_map(|class| class.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_joins_in_order() {
        assert_eq!(cn(&["block cursor-pointer", "my-card"]), "block cursor-pointer my-card");
    }

    #[test]
    fn test_cn_drops_empty_and_normalizes() {
        assert_eq!(cn(&["  flex   flex-col ", "", "   "]), "flex flex-col");
        assert_eq!(cn(&[]), "");
    }
}
