/// Format a ledger amount with an explicit sign for display,
/// e.g. `+12.50` / `-3.00`
pub fn format_amount(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+{:.2}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Mask the middle of a phone number for display: `138****5678`.
/// Numbers that don't look like an 11-digit mobile are returned as-is.
pub fn mask_phone(phone: &str) -> String {
    if phone.len() == 11 && phone.chars().all(|c| c.is_ascii_digit()) {
        format!("{}****{}", &phone[..3], &phone[7..])
    } else {
        phone.to_string()
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_signs() {
        assert_eq!(format_amount(12.5), "+12.50");
        assert_eq!(format_amount(0.0), "+0.00");
        assert_eq!(format_amount(-3.0), "-3.00");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("13812345678"), "138****5678");
        assert_eq!(mask_phone("not-a-phone"), "not-a-phone");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer description", 10), "a longe...");
        assert_eq!(truncate_string("abcdef", 2), "ab");
    }
}
