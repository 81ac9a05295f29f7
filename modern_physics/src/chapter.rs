//! Chapter catalog and display locales

/// Display language for lesson text, titles, and status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Persian,
}

/// The sidebar chapters, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chapter {
    Introduction,
    SpecialRelativity,
    Photoelectric,
    DoubleSlit,
    BohrModel,
    ParticleInBox,
    KeyEquations,
}

impl Chapter {
    pub const ALL: [Chapter; 7] = [
        Chapter::Introduction,
        Chapter::SpecialRelativity,
        Chapter::Photoelectric,
        Chapter::DoubleSlit,
        Chapter::BohrModel,
        Chapter::ParticleInBox,
        Chapter::KeyEquations,
    ];

    pub fn title(&self, locale: Locale) -> &'static str {
        use Chapter::*;
        use Locale::*;
        match (self, locale) {
            (Introduction, English) => "Introduction",
            (SpecialRelativity, English) => "Chapter 1 — Special Relativity",
            (Photoelectric, English) => "Chapter 2 — Photoelectric Effect",
            (DoubleSlit, English) => "Chapter 3 — Double-Slit Interference",
            (BohrModel, English) => "Chapter 4 — Bohr Model",
            (ParticleInBox, English) => "Chapter 5 — Particle in Infinite Well",
            (KeyEquations, English) => "Key Equations — Krane",
            (Introduction, Persian) => "مقدمه",
            (SpecialRelativity, Persian) => "فصل ۱ — نسبیت خاص",
            (Photoelectric, Persian) => "فصل ۲ — اثر فوتوالکتریک",
            (DoubleSlit, Persian) => "فصل ۳ — تداخل دو شکاف",
            (BohrModel, Persian) => "فصل ۴ — مدل بور",
            (ParticleInBox, Persian) => "فصل ۵ — ذره در جعبه بی‌نهایت",
            (KeyEquations, Persian) => "معادلات کلیدی",
        }
    }
}
