//! Fixed word tables for synthetic content. Order matters: the generator
//! indexes into these slices, so reordering changes every seeded output.

// --- Product page reviews ---

pub static REVIEW_FIRST_NAMES: &[&str] = &[
    "Ahmet", "Mehmet", "Ayşe", "Fatma", "Emre", "Can", "Zeynep", "Elif", "Burak", "Ece",
    "Mert", "Deniz", "Cem", "Berk", "Gizem", "Nil", "Selin", "Kerem", "Onur", "Seda",
    "Yasin", "Hakan", "Melis", "Tuğçe", "Sinem", "Umut", "Gökhan", "Aslı", "Okan", "Pelin",
];

pub static REVIEW_SURNAMES: &[&str] = &[
    "Yılmaz", "Demir", "Kaya", "Şahin", "Çelik", "Yıldız", "Aydın", "Polat", "Keskin", "Arslan",
    "Koç", "Öztürk", "Kurt", "Doğan", "Bulut", "Bozkurt", "Aksoy", "Korkmaz", "Özdemir", "Erdoğan",
];

pub static REVIEW_PHRASES: &[&str] = &[
    "Beklediğimden daha iyi çıktı, paketleme özenliydi.",
    "Fiyat/performans ürünü, tavsiye ederim.",
    "Kargoda ufak gecikme oldu ama ürün sorunsuz.",
    "Orijinal ürün, gönül rahatlığıyla alın.",
    "Kurulumu kolay, açıklamalar yeterliydi.",
    "Bir süredir kullanıyorum, herhangi bir problem yok.",
    "Hızlı kargo ve ilgili satıcı, teşekkürler.",
    "Beklentimi karşıladı, malzeme kalitesi iyi.",
    "Uyumluluk konusunda tereddüt etmiştim, tam oldu.",
    "Fiyatına göre gayet başarılı, memnun kaldım.",
];

// --- Homepage testimonials ---

pub static TESTIMONIAL_FIRST_NAMES: &[&str] = &[
    "Ahmet", "Mehmet", "Ayşe", "Fatma", "Emre", "Can", "Zeynep", "Elif", "Burak", "Ece",
    "Mert", "Deniz", "Cem", "Berk", "Gizem", "Nil", "Selin", "Kerem", "Onur", "Seda",
];

pub static TESTIMONIAL_SURNAMES: &[&str] = &[
    "Yılmaz", "Demir", "Kaya", "Şahin", "Çelik", "Yıldız", "Aydın", "Polat", "Keskin", "Arslan",
    "Koç", "Öztürk", "Kurt", "Doğan", "Bulut", "Bozkurt", "Aksoy", "Korkmaz", "Özdemir", "Erdoğan",
];

pub static TESTIMONIAL_CITIES: &[&str] = &[
    "İstanbul", "Ankara", "İzmir", "Bursa", "Antalya", "Adana", "Konya", "Kocaeli", "Gaziantep",
    "Mersin", "Eskişehir", "Samsun", "Trabzon", "Kayseri",
];

pub static TESTIMONIAL_PHRASES: &[&str] = &[
    "Ürün kalitesi çok iyi, paketleme özenliydi. Hızlı kargo için teşekkürler.",
    "Fiyat/performans olarak gayet başarılı buldum, tavsiye ederim.",
    "Uyumluluk sorunsuz oldu, açıklamalar yeterliydi.",
    "Satıcı ilgili, sorularıma hızlı dönüş aldım. Memnun kaldım.",
    "Beklediğimden daha iyi çıktı. Bir süredir kullanıyorum, sıkıntı yok.",
    "Orijinal ürün, güvenle alışveriş yapılır.",
    "Kargoda küçük gecikme oldu ama ürün sorunsuz geldi.",
    "Malzeme kalitesi ve işçilik gayet iyi, fiyatını hak ediyor.",
];

// --- Admin moderation demo ---

pub static ADMIN_FIRST_NAMES: &[&str] = &[
    "Ahmet", "Ayşe", "Mehmet", "Elif", "Can", "Zeynep", "Kerem", "Ece", "Deniz", "Seda",
];

pub static ADMIN_SURNAMES: &[&str] = &["Yılmaz", "Demir", "Kaya", "Şahin", "Çelik", "Yıldız"];

pub static ADMIN_PHRASES: &[&str] = &[
    "Ürün beklediğim gibi.",
    "Hızlı kargo, öneririm.",
    "Fiyat/performans başarılı.",
    "Sorunsuz kullanıyorum.",
];
