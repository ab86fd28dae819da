//! Static geography and classification tables.
//!
//! Region names are the English keys the upstream model was trained on;
//! city names are the Arabic strings it expects. The tables are fixed at
//! compile time and the cascade is a pure lookup; nothing is cached.

/// The 13 administrative regions offered by the region select.
pub const REGIONS: [&str; 13] = [
    "Riyadh",
    "Makkah",
    "Madinah",
    "Eastern Province",
    "Asir",
    "Tabuk",
    "Hail",
    "Northern Borders",
    "Jazan",
    "Najran",
    "Al Baha",
    "Al Jawf",
    "Al Qassim",
];

/// Asset classification options for the type select.
pub const ASSET_TYPES: [&str; 4] = [
    "Housing Land",
    "Commercial Land",
    "Raw Land",
    "Farming Land",
];

/// Asset level options for the level select.
pub const ASSET_LEVELS: [&str; 4] = ["A", "B", "C", "D"];

/// Ordered city list for a region.
///
/// Every entry of [`REGIONS`] maps to a non-empty list; anything else,
/// including the empty "no region selected" state, yields the empty slice,
/// which the form renders as a disabled city select.
pub fn cities(region: &str) -> &'static [&'static str] {
    match region {
        "Asir" => &[
            "بيشه",
            "خميس مشيط",
            "ابها",
            "احد رفيده",
            "محايل",
            "ظهران الجنوب",
            "بلقرن",
            "تثليث",
            "طريب",
            "المضه",
            "العرين",
            "النماص",
            "سراة عبيده",
            "المجارده",
            "رجال المع",
            "الحرجة",
            "الربوعه",
            "الشعف",
            "الواديين",
            "بارق",
            "البرك",
            "الحريضة",
            "تنومة",
            "خيبر الجنوب",
            "يعرى",
            "الصبيخه",
            "القحمه",
            "بني عمرو",
            "تهامة باللسمر وبللحمر",
        ],
        "Al Baha" => &[
            "الباحة",
            "بلجرشي",
            "الحجرة",
            "العقيق",
            "المخواة",
            "قلوة",
            "القرى",
            "المندق",
        ],
        "Eastern Province" => &[
            "الاحساء",
            "الدمام",
            "حفر الباطن",
            "الخبر",
            "القطيف",
            "الخفجي",
            "الجبيل",
            "ابقيق",
            "النعيرية",
            "العيون",
            "رأس تنوره",
            "السعيره",
        ],
        "Hail" => &[
            "حائل",
            "بقعاء",
            "الشنان",
            "الروضة",
            "الاجفر",
            "الشملي",
            "الغزاله",
            "سميراء",
        ],
        "Al Jawf" => &["سكاكا", "القريات", "دومة الجندل", "طبرجل"],
        "Jazan" => &[
            "جيزان",
            "صبياء",
            "صامطة",
            "أبو عريش",
            "بيش",
            "ضمد",
            "أحد المسارحة",
            "فاراسان",
            "الشقيق",
            "الطوال",
            "العيدابي",
            "الموسم",
        ],
        "Madinah" => &[
            "المدينة المنورة",
            "الحناكية",
            "المهد",
            "وادي الفرع",
            "السويرقيه",
            "الصويدره",
        ],
        "Makkah" => &[
            "جده",
            "مكة المكرمة",
            "الطائف",
            "تربه",
            "القنفذه",
            "الليث",
            "رابغ",
            "رنيه",
            "الخرمة",
            "الجموم",
            "خليص",
            "أضم",
            "المويه",
            "القوز",
            "العرضيات",
            "المضيلف",
            "ثقيف",
            "حلى",
            "ميسان",
        ],
        "Najran" => &["نجران", "شرورة", "يدمة", "بدر الجنوب"],
        "Northern Borders" => &["عرعر", "رفحاء", "طريف", "العويقيلة"],
        "Al Qassim" => &[
            "بريده",
            "رياض الخبراء",
            "عنيزه",
            "البكيريه",
            "الرس",
            "البدائع",
            "المذنب",
            "عيون الجواء",
            "القواره",
            "النبهانيه",
            "قصيباء",
            "الشماسيه",
            "عقلة الصقور",
            "الاسياح",
            "الدليميه",
            "قبه",
            "ضريه",
        ],
        "Riyadh" => &[
            "الرياض",
            "حريملاء",
            "الخرج",
            "المزاحميه",
            "القويعيه",
            "ضرماء",
            "الدوادمي",
            "الافلاج",
            "المجمعه",
            "الدرعيه",
            "الزلفي",
            "الدلم",
            "ريمة",
            "حوطة بني تميم",
            "ثادق",
            "شقراء",
            "عفيف",
            "وادي الدواسر",
            "الرين",
            "ساجر",
            "السليل",
            "مرات",
            "الغاط",
            "حوطة سدير",
            "الارطاويه",
            "الجمش",
            "الحريق",
            "تمير",
            "نفي",
            "البجاديه",
            "العيينة",
            "جلاجل",
            "عرجاء",
        ],
        "Tabuk" => &["تبوك", "تيماء", "بئر بن هرماس", "ضباء"],
        _ => &[],
    }
}
