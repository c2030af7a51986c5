use serde::Serialize;

use super::catalog::CatalogEntry;
use crate::purchases::dto::Purchase;

/// User as served by `GET /api/user`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub purchase_list: Vec<Purchase>,
}

impl From<&CatalogEntry> for User {
    fn from(e: &CatalogEntry) -> Self {
        Self {
            id: e.id,
            name: e.name.to_string(),
            purchase_list: Vec::new(),
        }
    }
}

impl User {
    pub fn set_purchase_list(&mut self, purchases: Vec<Purchase>) {
        self.purchase_list = purchases;
    }
}

/// Lenient integer parse of the `id` query value: leading whitespace, an
/// optional sign, then as many digits as follow. A `0x`/`0X` prefix switches
/// to hex. `"12abc"` is 12, `"0x1f"` is 31, `"abc"` and `"0x"` are nothing.
pub fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_digit(radix)).len();
    if digits == 0 {
        return None;
    }
    let value = i64::from_str_radix(&rest[..digits], radix).ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_id_cases() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("  42"), Some(42));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("+7"), Some(7));
        assert_eq!(parse_id("2.9"), Some(2));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id("99999999999999999999999"), None);
    }

    #[test]
    fn parse_id_reads_hex_prefix() {
        assert_eq!(parse_id("0x2"), Some(2));
        assert_eq!(parse_id("0X1f"), Some(31));
        assert_eq!(parse_id("-0x1"), Some(-1));
        assert_eq!(parse_id(" 0x3zz"), Some(3));
        assert_eq!(parse_id("0x"), None);
        assert_eq!(parse_id("0xg"), None);
        assert_eq!(parse_id("007"), Some(7));
    }

    #[test]
    fn serializes_with_camel_case_purchase_list() {
        let mut user = User::from(&CatalogEntry { id: 1, name: "Adam" });
        user.set_purchase_list(vec![Purchase(json!({"item": "book"}))]);

        let v = serde_json::to_value(&user).unwrap();
        assert_eq!(
            v,
            json!({"id": 1, "name": "Adam", "purchaseList": [{"item": "book"}]})
        );
    }
}
