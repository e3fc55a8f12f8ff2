//! URL rewrite names for display strings.
//!
//! `slugify("Giày Thể Thao!")` gives `"giay-the-thao"`: lowercase, diacritics
//! folded to ASCII, punctuation and whitespace turned into single dashes.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that separate words in a rewrite name
    static ref SEPARATOR_REGEX: Regex =
        Regex::new(r#"[\s!@%^*()+=<>?/,.:;'"&#\[\]~$_\\|{}`-]+"#).unwrap();

    /// Whatever is left that is not a plain ASCII letter, digit or dash
    static ref DISALLOWED_REGEX: Regex = Regex::new(r"[^a-z0-9-]+").unwrap();

    static ref DASH_RUN_REGEX: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Fold a lowercase accented letter to its ASCII base letter.
fn fold_char(c: char) -> Option<char> {
    let folded = match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ'
        | 'ặ' | 'ẳ' | 'ẵ' | 'ä' | 'å' | 'ā' | 'ą' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' | 'ë' | 'ē' | 'ę'
        | 'ě' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' | 'î' | 'ï' | 'ī' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ'
        | 'ợ' | 'ở' | 'ỡ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' | 'û' | 'ü' | 'ū'
        | 'ů' | 'ű' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' | 'ÿ' => 'y',
        'đ' | 'ď' => 'd',
        'ç' | 'ć' | 'č' => 'c',
        'ñ' | 'ń' | 'ň' => 'n',
        'ś' | 'š' | 'ş' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        'ł' => 'l',
        'ř' => 'r',
        'ť' => 't',
        'ß' => return None,
        _ => c,
    };
    Some(folded)
}

/// Derive the URL rewrite name of `input`.
///
/// Pure and deterministic; applying it to its own output returns the same
/// string.
pub fn slugify(input: &str) -> String {
    let mut folded = String::with_capacity(input.len());
    for c in input.chars().flat_map(char::to_lowercase) {
        match fold_char(c) {
            Some(f) => folded.push(f),
            None => folded.push_str("ss"),
        }
    }

    let dashed = SEPARATOR_REGEX.replace_all(&folded, "-");
    let ascii = DISALLOWED_REGEX.replace_all(&dashed, "");
    let collapsed = DASH_RUN_REGEX.replace_all(&ascii, "-");

    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Shoes!"), "shoes");
        assert_eq!(slugify("Men's Shoes & Boots"), "men-s-shoes-boots");
    }

    #[test]
    fn test_slugify_folds_vietnamese_diacritics() {
        assert_eq!(slugify("Giày Thể Thao"), "giay-the-thao");
        assert_eq!(slugify("Đồ Điện Tử"), "do-dien-tu");
        assert_eq!(slugify("Phụ kiện thời trang"), "phu-kien-thoi-trang");
    }

    #[test]
    fn test_slugify_folds_latin_diacritics() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("Straße"), "strasse");
    }

    #[test]
    fn test_slugify_collapses_and_trims_dashes() {
        assert_eq!(slugify("  --Summer   Sale--  "), "summer-sale");
        assert_eq!(slugify("a_b.c/d"), "a-b-c-d");
    }

    #[test]
    fn test_slugify_drops_other_unicode() {
        assert_eq!(slugify("Tea 茶 Cups"), "tea-cups");
        assert_eq!(slugify("★★★★★"), "");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let inputs = [
            "Shoes!",
            "Giày Thể Thao",
            "kids-toys",
            "Home & Garden",
            "already-a-slug-123",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "slug of {:?} changed on reapply", input);
        }
    }

    #[test]
    fn test_slugify_keeps_plain_ascii_slug_unchanged() {
        assert_eq!(slugify("womens-watches"), "womens-watches");
    }
}
