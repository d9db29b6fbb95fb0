//! The public-page status strings and weekday names per language

use hours_core::Language;

pub struct Labels {
    pub open: &'static str,
    pub closed: &'static str,
    pub closes_at: &'static str,
    pub opens_at: &'static str,
    pub no_schedule: &'static str,
    pub days: [&'static str; 7],
}

static EN: Labels = Labels {
    open: "Open now",
    closed: "Closed",
    closes_at: "closes at",
    opens_at: "opens at",
    no_schedule: "No opening hours available",
    days: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
};

static DE: Labels = Labels {
    open: "Jetzt geöffnet",
    closed: "Geschlossen",
    closes_at: "schließt um",
    opens_at: "öffnet um",
    no_schedule: "Keine Öffnungszeiten hinterlegt",
    days: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
};

static AR: Labels = Labels {
    open: "مفتوح الآن",
    closed: "مغلق",
    closes_at: "يغلق عند",
    opens_at: "يفتح عند",
    no_schedule: "لا تتوفر ساعات عمل",
    days: [
        "الاثنين",
        "الثلاثاء",
        "الأربعاء",
        "الخميس",
        "الجمعة",
        "السبت",
        "الأحد",
    ],
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::De => &DE,
        Language::Ar => &AR,
    }
}
