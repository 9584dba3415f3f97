//! Copy and data for every section of the page.

pub struct FirmContact {
    pub name: &'static str,
    pub tagline: &'static str,
    pub monogram: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub street: &'static str,
    pub postal: &'static str,
}

pub const FIRM: FirmContact = FirmContact {
    name: "משרד עורכי דין דלתא",
    tagline: "ייעוץ משפטי לתעשיית המזון",
    monogram: "ד",
    phone_display: "03-1234567",
    phone_href: "tel:+97231234567",
    email: "info@delta-law.co.il",
    street: "רחוב רוטשילד 123, תל אביב",
    postal: "מיקוד 6380101",
};

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "דף הבית", href: "#top" },
    NavItem { label: "אודות", href: "#about" },
    NavItem { label: "תחומי התמחות", href: "#expertise" },
    NavItem { label: "שירותים משפטיים", href: "#services" },
    NavItem { label: "צוות המשרד", href: "#team" },
    NavItem { label: "צור קשר", href: "#contact" },
];

pub const LEGAL_LINKS: &[NavItem] = &[
    NavItem { label: "מדיניות פרטיות", href: "/privacy" },
    NavItem { label: "תנאי שימוש", href: "/terms" },
    NavItem { label: "נגישות", href: "/accessibility" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "פייסבוק", glyph: "f", href: "https://facebook.com" },
    SocialLink { label: "טוויטר", glyph: "𝕏", href: "https://twitter.com" },
    SocialLink { label: "לינקדאין", glyph: "in", href: "https://linkedin.com" },
    SocialLink { label: "אינסטגרם", glyph: "◎", href: "https://instagram.com" },
];

pub struct BusinessHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const BUSINESS_HOURS: &[BusinessHours] = &[
    BusinessHours { days: "ראשון - חמישי", hours: "09:00 - 18:00" },
    BusinessHours { days: "שישי", hours: "09:00 - 13:00" },
    BusinessHours { days: "שבת", hours: "סגור" },
];

/// Icon plus copy, shared by the about, services and expertise grids.
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_FEATURES: &[Card] = &[
    Card {
        icon: "⚖️",
        title: "מומחיות משפטית",
        description: "ידע מעמיק בדיני מזון ורגולציה, עם התמחות ספציפית בתעשיית המזון הישראלית.",
    },
    Card {
        icon: "🤝",
        title: "שירות אישי",
        description: "ליווי צמוד ואישי לכל לקוח, עם זמינות גבוהה ומענה מהיר לכל שאלה או בעיה.",
    },
    Card {
        icon: "📋",
        title: "פתרונות מעשיים",
        description: "אנו מספקים פתרונות משפטיים מעשיים שמתאימים לצרכים העסקיים של הלקוח.",
    },
    Card {
        icon: "🏅",
        title: "ניסיון מוכח",
        description: "למעלה מ-15 שנות ניסיון בליווי חברות מובילות בתעשיית המזון בישראל.",
    },
];

pub const SERVICES: &[Card] = &[
    Card {
        icon: "⚖️",
        title: "ייעוץ משפטי לתעשיית המזון",
        description: "ליווי משפטי מקיף לחברות בתעשיית המזון בנושאי רגולציה, בטיחות מזון ותקינה.",
    },
    Card {
        icon: "📄",
        title: "חוזים והסכמים",
        description: "ניסוח, בדיקה וייעוץ בהסכמי אספקה, הפצה ושיתופי פעולה בתחום המזון.",
    },
    Card {
        icon: "🔨",
        title: "ליטיגציה מסחרית",
        description: "ייצוג בהליכים משפטיים, סכסוכים מסחריים וייצוג מול רשויות רגולטוריות.",
    },
    Card {
        icon: "🤝",
        title: "מיזוגים ורכישות",
        description: "ליווי בעסקאות מיזוג ורכישה בתעשיית המזון, בדיקות נאותות וייעוץ אסטרטגי.",
    },
    Card {
        icon: "🛡️",
        title: "הגנה על קניין רוחני",
        description: "רישום וניהול פטנטים, סימני מסחר וסודות מסחריים בתחום המזון והמשקאות.",
    },
    Card {
        icon: "🌐",
        title: "ייעוץ בינלאומי",
        description: "ליווי בהתרחבות גלובלית, ייבוא וייצוא מזון, ועמידה בתקינה בינלאומית.",
    },
];

pub const EXPERTISE: &[Card] = &[
    Card {
        icon: "⚖️",
        title: "חוקים ותקנות מזון",
        description: "ייעוץ מקיף בנושא חוקי המזון הישראליים והבינלאומיים, כולל עמידה בדרישות רגולטוריות ותקני בטיחות מזון.",
    },
    Card {
        icon: "✅",
        title: "תאימות ואישורים",
        description: "ליווי בתהליכי קבלת אישורים ורישיונות, וידוא עמידה בתקנות משרד הבריאות ורשויות פיקוח מזון.",
    },
    Card {
        icon: "🏷️",
        title: "סימון ותיוג מוצרים",
        description: "ייעוץ בנושא דרישות סימון מזון, הצהרות תזונתיות, וטענות בריאותיות בהתאם לחוקי הצרכנות והמזון.",
    },
    Card {
        icon: "™️",
        title: "קניין רוחני במזון",
        description: "הגנה על מתכונים, תהליכי ייצור, מותגים וסימנים מסחריים בתעשיית המזון והמשקאות.",
    },
    Card {
        icon: "🛡️",
        title: "אחריות מוצר",
        description: "טיפול בסוגיות אחריות מוצר, ניהול סיכונים, והתמודדות עם תביעות בטיחות מזון ונזקי צרכנים.",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub position: &'static str,
    pub specializations: &'static [&'static str],
    pub bio: &'static str,
    pub image: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "עו״ד שרה כהן",
        position: "שותפה מייסדת",
        specializations: &["רגולציה בתעשיית המזון", "משפט מסחרי"],
        bio: "בעלת ניסיון של מעל 15 שנה בליווי חברות מזון מובילות בישראל. מתמחה בייעוץ משפטי בנושאי רגולציה, תקינה וסימון מוצרי מזון.",
        image: "/images/team/sarah-cohen.jpg",
    },
    TeamMember {
        name: "עו״ד דוד לוי",
        position: "שותף בכיר",
        specializations: &["ליטיגציה מסחרית", "דיני צרכנות"],
        bio: "מומחה בייצוג חברות מזון בהליכים משפטיים מורכבים. בעל ניסיון עשיר בטיפול בתביעות ייצוגיות ובסכסוכים מסחריים בתעשיית המזון.",
        image: "/images/team/david-levi.jpg",
    },
    TeamMember {
        name: "עו״ד מיכל אברהם",
        position: "ראש מחלקת קניין רוחני",
        specializations: &["פטנטים", "סימני מסחר", "זכויות יוצרים"],
        bio: "מתמחה בהגנה על קניין רוחני בתעשיית המזון, כולל פטנטים על תהליכי ייצור, סימני מסחר ומותגים, וסודות מסחריים.",
        image: "/images/team/michal-abraham.jpg",
    },
    TeamMember {
        name: "עו״ד יוסף נחום",
        position: "ראש מחלקת חוזים",
        specializations: &["חוזים מסחריים", "הסכמי הפצה", "שותפויות"],
        bio: "מתמחה בניסוח וניהול חוזים מסחריים מורכבים בתעשיית המזון, הסכמי הפצה, שיתופי פעולה אסטרטגיים והסכמי רישוי.",
        image: "/images/team/yosef-nachum.jpg",
    },
];

#[derive(PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub company: Option<&'static str>,
    pub avatar: Option<&'static str>,
}

impl Testimonial {
    /// Shown in place of a missing avatar.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn byline(&self) -> String {
        match self.company {
            Some(company) => format!("{}, {}", self.position, company),
            None => self.position.to_string(),
        }
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "משרד עורכי דין דלתא סייע לנו לנווט את הרגולציה המורכבת בתעשיית המזון. הם היו מקצועיים, זמינים וידעו בדיוק כיצד לטפל בסוגיות המשפטיות שלנו.",
        name: "דניאל כהן",
        position: "מנכ\"ל",
        company: Some("טעמים בע\"מ"),
        avatar: Some("/avatars/daniel.jpg"),
    },
    Testimonial {
        quote: "הצוות המשפטי של דלתא עזר לנו להתמודד עם אתגרים רגולטוריים מורכבים. הם הפגינו מקצועיות יוצאת דופן והבנה עמוקה של תעשיית המזון.",
        name: "מיכל לוי",
        position: "סמנכ\"לית תפעול",
        company: Some("מאפיות השף"),
        avatar: Some("/avatars/michal.jpg"),
    },
    Testimonial {
        quote: "אני ממליץ בחום על משרד עורכי דין דלתא לכל עסק בתחום המזון. הליווי המשפטי שלהם היה מדויק, מקיף ותרם רבות להצלחת העסק שלנו.",
        name: "יוסי אברהמי",
        position: "בעלים",
        company: Some("מסעדות הגליל"),
        avatar: None,
    },
    Testimonial {
        quote: "הידע והניסיון של צוות דלתא בתחום המזון הוא ללא תחרות. הם סייעו לנו לפתור בעיות משפטיות מורכבות בצורה יעילה ומהירה.",
        name: "רונית שמעוני",
        position: "יועצת משפטית",
        company: Some("טעם הטבע"),
        avatar: Some("/avatars/ronit.jpg"),
    },
    Testimonial {
        quote: "שירות מקצועי, אדיב ויעיל. משרד עורכי דין דלתא הוכיח את עצמו כשותף אסטרטגי אמיתי לעסק שלנו בתחום המזון.",
        name: "אבי מזרחי",
        position: "מנהל פיתוח עסקי",
        company: None,
        avatar: Some("/avatars/avi.jpg"),
    },
];

pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "faq-1",
        question: "אילו שירותים משפטיים אתם מציעים לתעשיית המזון?",
        answer: "משרדנו מתמחה במגוון שירותים משפטיים לתעשיית המזון, כולל ייעוץ בנושאי רגולציה, תקנות בטיחות מזון, רישוי עסקים, הגנה על קניין רוחני, טיפול בתביעות צרכניות, ייצוג מול רשויות פיקוח, וליווי בהליכי יבוא ויצוא מזון. אנו מלווים חברות בכל שלבי הפעילות העסקית, החל מהקמה ועד לפיתוח והתרחבות.",
    },
    FaqEntry {
        id: "faq-2",
        question: "כיצד אתם עוזרים לעסקים להתמודד עם דרישות רגולטוריות?",
        answer: "אנו מסייעים לעסקים בתעשיית המזון להבין ולעמוד בדרישות הרגולטוריות המורכבות באמצעות ניתוח מקיף של החקיקה הרלוונטית, פיתוח תכניות ציות, ליווי בביקורות רגולטוריות, והתאמת תהליכי העבודה לדרישות החוק. צוות המומחים שלנו עוקב באופן שוטף אחר שינויים בחקיקה ומעדכן את לקוחותינו בהתאם.",
    },
    FaqEntry {
        id: "faq-3",
        question: "מהם שלבי הטיפול בתיק משפטי בתחום המזון?",
        answer: "הטיפול בתיק משפטי בתחום המזון כולל מספר שלבים: 1) פגישת ייעוץ ראשונית להבנת הסוגיה, 2) איסוף וניתוח מסמכים ומידע רלוונטי, 3) גיבוש אסטרטגיה משפטית מותאמת, 4) ייצוג בהליכים משפטיים או במשא ומתן, 5) ליווי ביישום ההסכמות או פסקי הדין. לאורך כל התהליך, אנו שומרים על תקשורת רציפה עם הלקוח ומעדכנים באופן שוטף.",
    },
    FaqEntry {
        id: "faq-4",
        question: "כיצד נקבעים שכר הטרחה והעלויות המשפטיות?",
        answer: "שכר הטרחה נקבע בהתאם לאופי השירות המשפטי, מורכבות התיק, היקף העבודה הנדרשת, ודחיפות הטיפול. אנו מציעים מספר מודלים תשלום, כולל שכר טרחה קבוע, שעתי, או שילוב ביניהם. בפגישת הייעוץ הראשונית נציג הצעת מחיר מפורטת ושקופה, ונסביר את כל העלויות הצפויות כדי למנוע הפתעות בהמשך.",
    },
    FaqEntry {
        id: "faq-5",
        question: "האם אתם מטפלים גם בעסקים קטנים או רק בחברות גדולות?",
        answer: "משרדנו מעניק שירותים משפטיים לעסקים בכל גודל בתעשיית המזון - מיזמים קטנים ומסעדות משפחתיות ועד לרשתות מזון גדולות ויצרנים בינלאומיים. אנו מתאימים את השירות והליווי המשפטי לצרכים הספציפיים ולתקציב של כל לקוח, ומאמינים שכל עסק זכאי לייעוץ משפטי מקצועי ואיכותי.",
    },
    FaqEntry {
        id: "faq-6",
        question: "מה משך הזמן הממוצע לטיפול בתביעה משפטית בתחום המזון?",
        answer: "משך הזמן לטיפול בתביעה משפטית בתחום המזון משתנה בהתאם למורכבות התיק, סוג ההליך, והעומס במערכת המשפט. תביעות פשוטות יחסית עשויות להסתיים תוך מספר חודשים, בעוד שתיקים מורכבים עלולים להימשך שנה או יותר. אנו שואפים לייעל את התהליך ככל האפשר, ובמקרים רבים פועלים להשגת פשרה מחוץ לכותלי בית המשפט כדי לחסוך זמן ועלויות.",
    },
];

pub fn faq_entry(id: &str) -> Option<&'static FaqEntry> {
    FAQ.iter().find(|entry| entry.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn faq_ids_are_unique() {
        let ids: HashSet<_> = FAQ.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), FAQ.len());
        assert!(faq_entry("faq-4").is_some());
        assert!(faq_entry("faq-9").is_none());
    }

    #[test]
    fn testimonial_fallbacks() {
        let no_avatar = TESTIMONIALS.iter().find(|t| t.avatar.is_none()).unwrap();
        assert_eq!(no_avatar.initial(), "י");

        let no_company = TESTIMONIALS.iter().find(|t| t.company.is_none()).unwrap();
        assert_eq!(no_company.byline(), "מנהל פיתוח עסקי");
        assert_eq!(TESTIMONIALS[0].byline(), "מנכ\"ל, טעמים בע\"מ");
    }

    #[test]
    fn deck_is_not_empty() {
        assert_eq!(TESTIMONIALS.len(), 5);
    }
}
