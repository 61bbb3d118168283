//! Fixed-seed regression fixtures.
//!
//! Rows are pinned per seed. A change to the hash, the PRNG, the pools or the
//! draw order shows up here.

use chrono::{DateTime, Duration, Utc};
use storefront_engine::seeded::{generate, Profile};

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-01T09:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

type Row = (String, String, u8, Option<i64>);

fn rows(profile: Profile, seed: &str, hint: usize) -> Vec<Row> {
    let now = fixed_now();
    generate(profile, seed, hint, now)
        .into_iter()
        .map(|r| {
            let days = r.created_at.map(|ts| (now - ts).num_days());
            (r.author, r.content, r.rating, days)
        })
        .collect()
}

fn row(author: &str, content: &str, rating: u8, days: Option<i64>) -> Row {
    (author.to_string(), content.to_string(), rating, days)
}

#[test]
fn admin_demo_fixture() {
    let expected = vec![
        row("Can Kaya", "Fiyat/performans başarılı.", 4, Some(36)),
        row("Ahmet Çelik", "Ürün beklediğim gibi.", 5, Some(71)),
        row("Ahmet Yıldız", "Sorunsuz kullanıyorum.", 5, Some(109)),
        row("Can Yılmaz", "Ürün beklediğim gibi.", 4, Some(105)),
        row("Ece Çelik", "Hızlı kargo, öneririm.", 4, Some(93)),
        row("Mehmet Demir", "Sorunsuz kullanıyorum.", 4, Some(104)),
    ];
    assert_eq!(rows(Profile::AdminDemo, "admin-demo", 6), expected);
}

#[test]
fn review_fixture_for_product_seed() {
    let expected = vec![
        row("Gökhan Koç", "Uyumluluk konusunda tereddüt etmiştim, tam oldu.", 5, Some(11)),
        row("Onur Bulut", "Kargoda ufak gecikme oldu ama ürün sorunsuz.", 4, Some(36)),
        row("Tuğçe Aydın", "Orijinal ürün, gönül rahatlığıyla alın.", 4, Some(42)),
    ];
    assert_eq!(rows(Profile::Review, "iphone-13", 0), expected);
}

#[test]
fn review_fixture_for_empty_seed_is_sorted_newest_first() {
    // Generation order was 99, 45, 119, 44 days back.
    let expected = vec![
        row("Sinem Kurt", "Fiyat/performans ürünü, tavsiye ederim.", 4, Some(44)),
        row("Onur Kurt", "Bir süredir kullanıyorum, herhangi bir problem yok.", 4, Some(45)),
        row("Ahmet Çelik", "Kurulumu kolay, açıklamalar yeterliydi.", 5, Some(99)),
        row("Ayşe Özdemir", "Beklentimi karşıladı, malzeme kalitesi iyi.", 4, Some(119)),
    ];
    assert_eq!(rows(Profile::Review, "", 0), expected);

    let ids: Vec<String> = generate(Profile::Review, "", 0, fixed_now())
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, ["-demo-3", "-demo-1", "-demo-0", "-demo-2"]);
}

#[test]
fn testimonial_fixture_prefix() {
    let records = generate(Profile::Testimonial, "global", 12, fixed_now());
    assert_eq!(records.len(), 12);

    let head: Vec<(&str, &str, &str, u8)> = records
        .iter()
        .take(4)
        .map(|r| {
            (
                r.author.as_str(),
                r.city.as_deref().unwrap_or_default(),
                r.content.as_str(),
                r.rating,
            )
        })
        .collect();
    assert_eq!(
        head,
        vec![
            ("Mehmet Özdemir", "Ankara", "Uyumluluk sorunsuz oldu, açıklamalar yeterliydi.", 5),
            (
                "Ece Öztürk",
                "İstanbul",
                "Fiyat/performans olarak gayet başarılı buldum, tavsiye ederim.",
                5,
            ),
            ("Nil Demir", "Ankara", "Orijinal ürün, güvenle alışveriş yapılır.", 5),
            (
                "Ayşe Yıldız",
                "Adana",
                "Beklediğimden daha iyi çıktı. Bir süredir kullanıyorum, sıkıntı yok.",
                4,
            ),
        ]
    );
}

#[test]
fn same_seed_same_now_is_identical() {
    let now = fixed_now();
    for profile in [Profile::Review, Profile::Testimonial, Profile::AdminDemo] {
        assert_eq!(
            generate(profile, "ekran-koruyucu", 6, now),
            generate(profile, "ekran-koruyucu", 6, now)
        );
    }
}

#[test]
fn only_timestamps_follow_now() {
    let a = generate(Profile::Review, "powerbank-20k", 0, fixed_now());
    let b = generate(Profile::Review, "powerbank-20k", 0, fixed_now() + Duration::hours(5));
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(
            (&x.id, &x.author, &x.content, x.rating),
            (&y.id, &y.author, &y.content, y.rating)
        );
        assert_eq!(y.created_at.unwrap() - x.created_at.unwrap(), Duration::hours(5));
    }
}

#[test]
fn different_seeds_pick_different_content() {
    let a = rows(Profile::Review, "iphone-13", 0);
    let b = rows(Profile::Review, "", 0);
    assert_ne!(a, b);
}

#[test]
fn wire_shape_per_profile() {
    let testimonials = generate(Profile::Testimonial, "global", 12, fixed_now());
    let testimonial = serde_json::to_value(&testimonials[0]).unwrap();
    assert_eq!(testimonial["city"], "Ankara");
    assert!(testimonial.get("createdAt").is_none());

    let reviews = generate(Profile::Review, "iphone-13", 0, fixed_now());
    let review = serde_json::to_value(&reviews[0]).unwrap();
    assert!(review.get("city").is_none());
    assert!(review["createdAt"].is_string());
}
