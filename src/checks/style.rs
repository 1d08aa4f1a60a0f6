/// One `property: value` pair from an inline style attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Lowercased property name
    pub property: String,
    pub value: &'a str,
}

/// Split inline style text into declarations, in source order.
///
/// Entries without a colon or with an empty value are skipped.
pub fn declarations(style: &str) -> impl Iterator<Item = Declaration<'_>> {
    style.split(';').filter_map(|entry| {
        let (property, value) = entry.split_once(':')?;
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            return None;
        }
        Some(Declaration {
            property: property.to_ascii_lowercase(),
            value,
        })
    })
}

/// Value of the first declaration of `property` (matched case-insensitively).
pub fn declaration_value<'a>(style: &'a str, property: &str) -> Option<&'a str> {
    declarations(style)
        .find(|d| d.property.eq_ignore_ascii_case(property))
        .map(|d| d.value)
}
