use crate::types::CatalogItem;

/// URL-safe product slug: slugified title followed by the slugified id.
/// The id suffix keeps slugs distinct when two products share a title.
pub fn build_slug(item: &CatalogItem) -> String {
    let title = slugify(&item.title);
    let id = slugify(&item.id);
    match (title.is_empty(), id.is_empty()) {
        (true, _) => id,
        (false, true) => title,
        (false, false) => format!("{title}-{id}"),
    }
}

/// Lowercase, fold Turkish and German letters to ASCII, collapse everything
/// else into single dashes.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        let folded: Option<&str> = match ch {
            'ç' | 'Ç' => Some("c"),
            'ğ' | 'Ğ' => Some("g"),
            'ı' | 'I' | 'İ' => Some("i"),
            'ö' | 'Ö' => Some("o"),
            'ş' | 'Ş' => Some("s"),
            'ü' | 'Ü' => Some("u"),
            'ä' | 'Ä' => Some("a"),
            'ß' => Some("ss"),
            _ => None,
        };

        match folded {
            Some(ascii) => push_word(&mut out, ascii, &mut pending_dash),
            None => {
                for lower in ch.to_lowercase() {
                    if lower.is_ascii_alphanumeric() {
                        let mut buf = [0u8; 4];
                        push_word(&mut out, lower.encode_utf8(&mut buf), &mut pending_dash);
                    } else {
                        pending_dash = true;
                    }
                }
            }
        }
    }

    out
}

fn push_word(out: &mut String, part: &str, pending_dash: &mut bool) {
    if *pending_dash && !out.is_empty() {
        out.push('-');
    }
    *pending_dash = false;
    out.push_str(part);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_combines_title_and_id() {
        let item = CatalogItem::new("ip13-bat", "iPhone 13 Batarya");
        assert_eq!(build_slug(&item), "iphone-13-batarya-ip13-bat");
    }

    #[test]
    fn slug_folds_turkish_letters() {
        assert_eq!(slugify("Şarj Kablosu Çift Uçlu"), "sarj-kablosu-cift-uclu");
        assert_eq!(slugify("İç Ekran Değişimi"), "ic-ekran-degisimi");
        assert_eq!(slugify("Kılıf"), "kilif");
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slugify("  USB-C -- 20W!!  "), "usb-c-20w");
    }

    #[test]
    fn empty_title_falls_back_to_id() {
        let item = CatalogItem::new("SKU 42", "");
        assert_eq!(build_slug(&item), "sku-42");
    }
}
