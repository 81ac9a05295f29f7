//! Lesson text, keyed by chapter and locale
//!
//! One lookup table serves both display languages; the rendering pipeline is
//! identical either way and only the strings differ. Text follows the course
//! notes (after Krane, *Modern Physics*, 2nd ed.).

use crate::chapter::{Chapter, Locale};

/// A chapter's prose: heading plus body paragraphs
pub struct Lesson {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub fn lesson(chapter: Chapter, locale: Locale) -> Lesson {
    Lesson {
        heading: chapter.title(locale),
        paragraphs: paragraphs(chapter, locale),
    }
}

fn paragraphs(chapter: Chapter, locale: Locale) -> &'static [&'static str] {
    use Chapter::*;
    use Locale::*;
    match (chapter, locale) {
        (Introduction, English) => &[
            "This interactive application simulates key concepts from Modern Physics \
             by Kenneth S. Krane (2nd Edition). Each chapter includes a lesson, \
             interactive controls with real-time readouts, and a visualization of \
             the governing equations.",
        ],
        (SpecialRelativity, English) => &[
            "Einstein's special relativity shows that space and time are not \
             absolute. At speeds near light, length contracts, time dilates, and \
             mass increases. These effects become significant only when v > 0.1c.",
            "Two postulates: 1) Laws of physics are the same in all inertial \
             frames. 2) Speed of light in vacuum is constant for all observers \
             (c = 3×10⁸ m/s).",
        ],
        (Photoelectric, English) => &[
            "Einstein showed light behaves as photons with energy E = h·f. If \
             photon energy exceeds the work function φ, electrons are ejected. \
             Maximum kinetic energy: K_max = h·f − φ.",
            "Key insight: light intensity affects the number of photons \
             (current), not their energy. K_max depends only on frequency.",
        ],
        (DoubleSlit, English) => &[
            "Young's experiment proved light is a wave. Two slits act as coherent \
             sources. Path difference Δ = d·sinθ determines constructive or \
             destructive interference: bright fringes at Δ = mλ, dark at (m+½)λ.",
            "Fringe spacing Δx ≈ λL/d. Increasing d or decreasing λ reduces the \
             spacing.",
        ],
        (BohrModel, English) => &[
            "Bohr proposed electrons orbit in quantized states with radius \
             r_n = n²·a₀ and energy E_n = −13.6/n² eV. Transitions emit or absorb \
             photons with hν = |E_i − E_f|.",
            "This explains the hydrogen spectrum and resolves the classical \
             collapse paradox.",
        ],
        (ParticleInBox, English) => &[
            "A particle in an infinite well can only have wavelengths that fit: \
             λ_n = 2L/n. This leads to quantized energy E_n ∝ n². A superposition \
             of two states with different n has a time-dependent probability \
             density.",
            "This demonstrates the wave nature of particles.",
        ],
        (KeyEquations, English) => &[
            "The closed forms behind every chapter, collected in one place.",
        ],
        (Introduction, Persian) => &[
            "این برنامه تعاملی، مفاهیم کلیدی کتاب فیزیک جدید نوشته کنت اس. کرین \
             (ویرایش دوم) را شبیه‌سازی می‌کند. هر فصل شامل درسنامه، کنترل‌های \
             تعاملی با توضیحات لحظه‌ای و نمودار معادلات حاکم است.",
        ],
        (SpecialRelativity, Persian) => &[
            "نسبیت خاص اینشتین نشان می‌دهد که فضا و زمان مطلق نیستند. در \
             سرعت‌های نزدیک به سرعت نور، طول در جهت حرکت کوتاه می‌شود، زمان کندتر \
             می‌گذرد و جرم افزایش می‌یابد.",
            "دو اصل اساسی: ۱) قوانین فیزیک در تمام چارچوب‌های اینرسی یکسان است. \
             ۲) سرعت نور در خلأ برای همه ناظران ثابت است.",
        ],
        (Photoelectric, Persian) => &[
            "اینشتین نشان داد نور به صورت فوتون با انرژی E = h·f است. اگر انرژی \
             فوتون از کارکرد φ بیشتر باشد، الکترون‌ها خارج می‌شوند. حداکثر انرژی \
             جنبشی: K_max = h·f − φ.",
            "نکته کلیدی: شدت نور تعداد فوتون‌ها (جریان) را تغییر می‌دهد، نه \
             انرژی آن‌ها. K_max تنها به بسامد بستگی دارد.",
        ],
        (DoubleSlit, Persian) => &[
            "آزمایش یانگ ثابت کرد نور موج است. دو شکاف به عنوان منابع همدوس عمل \
             می‌کنند و اختلاف مسیر، تداخل سازنده یا مخرب را تعیین می‌کند.",
            "فاصله نوارها تقریباً برابر است با λL/d؛ افزایش فاصله شکاف‌ها یا \
             کاهش طول موج، فاصله نوارها را کم می‌کند.",
        ],
        (BohrModel, Persian) => &[
            "بور پیشنهاد کرد الکترون‌ها در مدارهای کوانتیده با شعاع r_n = n²·a₀ \
             حرکت می‌کنند و سطوح انرژی E_n = −13.6/n² الکترون‌ولت است. گذارها \
             فوتون منتشر یا جذب می‌کنند.",
            "این مدل طیف هیدروژن را توضیح می‌دهد و پارادوکس فروپاشی کلاسیک را حل \
             می‌کند.",
        ],
        (ParticleInBox, Persian) => &[
            "ذره در جعبه بی‌نهایت تنها می‌تواند طول موج‌هایی داشته باشد که در \
             جعبه جا شوند: λ_n = 2L/n. این منجر به انرژی کوانتیده E_n ∝ n² می‌شود \
             و سوپرپوزیشن دو حالت، چگالی احتمال وابسته به زمان ایجاد می‌کند.",
            "این پدیده ماهیت موجی ذرات را نشان می‌دهد.",
        ],
        (KeyEquations, Persian) => &[
            "معادلات بسته پشت همه فصل‌ها، یک‌جا گردآوری شده‌اند.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chapter_has_prose_in_both_locales() {
        for ch in Chapter::ALL {
            for locale in [Locale::English, Locale::Persian] {
                let l = lesson(ch, locale);
                assert!(!l.heading.is_empty());
                assert!(!l.paragraphs.is_empty());
            }
        }
    }
}
