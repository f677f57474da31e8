//! Canonical forms for names typed by hand or read from spreadsheets.

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim, collapse inner whitespace, uppercase. Blank input yields `None`.
pub fn normalize_product_name(raw: &str) -> Option<String> {
    let collapsed = collapse_whitespace(raw);
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_uppercase())
    }
}

pub fn normalize_supplier_name(raw: &str) -> Option<String> {
    normalize_product_name(raw)
}

/// Uppercase, quotes removed, other punctuation turned into spaces.
pub fn normalize_design_type(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '\'' && *c != '"')
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let collapsed = collapse_whitespace(&cleaned);
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_uppercase())
    }
}

/// "Bahan Baku. Kimia" -> "BAHAN_BAKU_KIMIA"
pub fn normalize_account_name(raw: &str) -> Option<String> {
    let collapsed = collapse_whitespace(&raw.replace('.', " "));
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.replace(' ', "_").to_uppercase())
    }
}

/// Supplier and design codes are compared uppercase without surrounding spaces
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name() {
        assert_eq!(
            normalize_product_name("  reactive   red  3bs ").as_deref(),
            Some("REACTIVE RED 3BS")
        );
        assert_eq!(normalize_product_name("   "), None);
    }

    #[test]
    fn test_design_type() {
        assert_eq!(
            normalize_design_type("dk pe' 40").as_deref(),
            Some("DK PE 40")
        );
        assert_eq!(
            normalize_design_type("\"bb-tr\"").as_deref(),
            Some("BB TR")
        );
        assert_eq!(normalize_design_type("''"), None);
    }

    #[test]
    fn test_account_name() {
        assert_eq!(
            normalize_account_name("Bahan Baku. Kimia").as_deref(),
            Some("BAHAN_BAKU_KIMIA")
        );
        assert_eq!(normalize_account_name(" . "), None);
    }
}
