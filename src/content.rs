//! Static copy for the school pages.

pub const SCHOOL_NAME: &str = "Pacifico Internacional";
pub const TAGLINE: &str = "Educación Inspirada en Waldorf";

pub const HERO_TITLE: &str = "Discover Waldorf in Costa Rica";
pub const HERO_TEXT: &str = "At our Waldorf inspired school in Costa Rica, we cultivate imagination, creativity, and love for learning in a natural and nurturing environment.";
pub const VISIT_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSc97z31yGk5b_BHceqy3OiJAPUxX0h1ty9e8k8BhtYjG5Vy0Q/viewform?usp=sharing&ouid=101911403675610930325";

pub const ABOUT_TEXT: &str = "We are a Waldorf inspired school, located in the village of Cañafistula outside of Tamarindo in Guanacaste, Costa Rica. With roots in Rudolf Steiner's Waldorf Pedagogy, we provide children in preschool, primary and middle school a bilingual education that builds purpose, confidence and connection while fostering a love for learning.";

pub struct Pillar {
    pub title: &'static str,
    pub text: &'static str,
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Head",
        text: "Developing cognitive abilities through age-appropriate academics, critical thinking, and intellectual curiosity. Our curriculum honors natural learning rhythms and developmental stages.",
    },
    Pillar {
        title: "Heart",
        text: "Nurturing emotional intelligence, artistic expression, and social connection. We cultivate empathy, creativity, and a deep appreciation for beauty and human relationships.",
    },
    Pillar {
        title: "Hands",
        text: "Engaging in practical life skills, crafts, and hands-on learning experiences. Students develop dexterity, confidence, and connection to the physical world through meaningful work.",
    },
];

pub const VISIT_EXPECTATIONS: [Pillar; 3] = [
    Pillar {
        title: "Meet Our Teachers",
        text: "Connect with our experienced Waldorf-trained faculty.",
    },
    Pillar {
        title: "Explore Our Campus",
        text: "Tour our natural outdoor classrooms and learning spaces",
    },
    Pillar {
        title: "Learn Our Philosophy",
        text: "Understand our approach to nurturing head, heart, and hands",
    },
];

pub const APPLICATION_STEPS: [&str; 4] = [
    "Submit application form",
    "Schedule a tour of our campus or schedule a call if you are not currently in Costa Rica",
    "Family interview",
    "Enrollment confirmation and payment of fees",
];

pub const TUITION_YEAR: u16 = 2025;
/// Tuition is split into this many monthly payments.
pub const MONTHLY_INSTALLMENTS: u32 = 10;

pub struct TuitionRow {
    pub program: &'static str,
    pub schedule: &'static str,
    pub annual_usd: u32,
}

impl TuitionRow {
    pub fn monthly_usd(&self) -> u32 {
        self.annual_usd / MONTHLY_INSTALLMENTS
    }
}

pub struct TuitionGroup {
    pub heading: &'static str,
    pub rows: &'static [TuitionRow],
}

pub const TUITION: [TuitionGroup; 2] = [
    TuitionGroup {
        heading: "Full Day (8:00 AM - 2:15 PM)",
        rows: &[
            TuitionRow {
                program: "Kindergarten (3 days/week)",
                schedule: "Any 3 of 5",
                annual_usd: 5_200,
            },
            TuitionRow {
                program: "Kindergarten (5 days/week)",
                schedule: "Monday - Friday",
                annual_usd: 6_950,
            },
            TuitionRow {
                program: "Grades 1-8",
                schedule: "Monday - Friday",
                annual_usd: 6_950,
            },
        ],
    },
    TuitionGroup {
        heading: "Half Day (8:00 AM - 1:00 PM)",
        rows: &[
            TuitionRow {
                program: "Kindergarten (3 days/week)",
                schedule: "Any 3 of 5",
                annual_usd: 4_050,
            },
            TuitionRow {
                program: "Kindergarten (5 days/week)",
                schedule: "Monday - Friday",
                annual_usd: 5_800,
            },
        ],
    },
];

pub const FEES: [(&str, u32); 5] = [
    ("New Student Registration (one-time)", 500),
    ("Enrollment Fee (annual)", 550),
    ("Materials Fee - Kindergarten (annual)", 300),
    ("Materials Fee - Grades (annual)", 350),
    ("Insurance (annual)", 20),
];

pub const PAYMENT_OPTIONS: [Pillar; 3] = [
    Pillar {
        title: "100% Tuition by August 1st (5% Discount)",
        text: "Pay full tuition by August 1st and save 5%",
    },
    Pillar {
        title: "10 Monthly Payments",
        text: "Due 1st of each month, first payment August 1st",
    },
    Pillar {
        title: "Financial Aid Available",
        text: "Contact us for need-based assistance",
    },
];

pub const ADDRESS_LINES: [&str; 3] = [
    "300m oeste y 50 m norte Eco lodge El Sabanero",
    "Canafistula, Villareal",
    "Santa Cruz, Guanacaste",
];
pub const PHONE_DISPLAY: &str = "+506 8762 6927";
pub const PHONE_LINK: &str = "https://wa.me/50687626927";
pub const EMAIL: &str = "info@waldorf.cr";

pub const SCHOOL_HOURS: [(&str, &str); 4] = [
    ("Grades (Monday - Friday)", "8:00 AM - 2:15 PM"),
    ("Kindergarten (Monday - Friday)", "8:00 AM - 1:00 PM"),
    ("Extended Care (Kindergarten)", "Until 2:15 PM"),
    ("Office (Monday - Friday)", "7:30 AM - 2:30 PM"),
];

pub const FOOTER_TEXT: &str = "Nurturing young minds through nature-based, holistic education that honors each child's unique journey.";

pub const PRINTABLE_CALENDAR_PATH: &str =
    "/documents/pacifico-internacional-2025-2026-calendar.pdf";
pub const PRINTABLE_CALENDAR_NAME: &str = "Pacifico_Internacional_2025-2026_School_Calendar.pdf";

/// Whole dollars with thousands separators, e.g. `$6,950`.
pub fn usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
