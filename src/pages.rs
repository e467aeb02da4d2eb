use maud::{DOCTYPE, Markup, html};

use crate::content::{
    ABOUT_TEXT, ADDRESS_LINES, APPLICATION_STEPS, EMAIL, FEES, FOOTER_TEXT, HERO_TEXT, HERO_TITLE,
    PAYMENT_OPTIONS, PHONE_DISPLAY, PHONE_LINK, PILLARS, PRINTABLE_CALENDAR_NAME,
    PRINTABLE_CALENDAR_PATH, SCHOOL_HOURS, SCHOOL_NAME, TAGLINE, TUITION, TUITION_YEAR,
    VISIT_EXPECTATIONS, VISIT_FORM_URL, usd,
};
use crate::events::BoardSnapshot;
use crate::format::{badge, event_color, event_time_phrase};
use crate::models::CalendarEvent;
use crate::view_state::{PageState, Section, SubmitStatus};

pub const LOADING_TEXT: &str = "Loading upcoming events...";

fn layout(title: &str, nav: Markup, main: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                (nav)
                (main)
                (footer())
            }
        }
    }
}

/// `prefix` is "" on the home page and "/" elsewhere so anchors resolve home.
fn navigation(prefix: &str, menu_open: bool) -> Markup {
    let links = html! {
        @if !prefix.is_empty() {
            a href="/" { "Home" }
        }
        @for section in Section::ALL {
            a href=(format!("{prefix}#{}", section.anchor())) { (section.label()) }
        }
    };
    html! {
        nav.site-nav {
            a.brand href="/" {
                img src="/images/pacifico-logo.png" alt=(format!("{SCHOOL_NAME} - {TAGLINE}")) width="100" height="100";
            }
            div.nav-links { (links) }
            details.mobile-menu open[menu_open] {
                summary { "Menu" }
                p { strong { (SCHOOL_NAME) } br; (TAGLINE) }
                div.menu-links {
                    @for section in Section::ALL {
                        a href=(format!("{prefix}?section={0}#{0}", section.anchor())) { (section.label()) }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer.site-footer {
            h3 { (SCHOOL_NAME) }
            p { (TAGLINE) }
            p { (FOOTER_TEXT) }
            h4 { "Quick Links" }
            ul {
                @for section in Section::ALL {
                    li { a href=(format!("/#{}", section.anchor())) { (section.label()) } }
                }
            }
        }
    }
}

fn event_card(index: usize, event: &CalendarEvent) -> Markup {
    html! {
        article class=(format!("event-card accent-{}", event_color(index))) id=(format!("event-{}", event.id)) {
            div.date-badge {
                @if let Some(badge) = badge(&event.start_date) {
                    span.day { (badge.day) }
                    span.month { (badge.month) }
                } @else {
                    span.day { (event.start_date) }
                }
            }
            h3 { (event.title) }
            p.when { (event_time_phrase(event)) }
            @if let Some(category) = &event.category {
                p.category { (category) }
            }
            @if let Some(location) = &event.location {
                p.location { (location) }
            }
            @if let Some(description) = &event.description {
                p.description { (description) }
            }
        }
    }
}

fn calendar_section(board: &BoardSnapshot) -> Markup {
    html! {
        section #calendar {
            h2 { "School Calendar" }
            div.calendar-actions {
                a href="/calendar" { "View Full Calendar" }
                a href=(PRINTABLE_CALENDAR_PATH) download=(PRINTABLE_CALENDAR_NAME) target="_blank" rel="noopener noreferrer" {
                    "Download Printable Calendar"
                }
            }
            @if board.loading {
                p.loading role="status" { (LOADING_TEXT) }
            } @else {
                div.event-list {
                    @for (index, event) in board.events.iter().enumerate() {
                        (event_card(index, event))
                    }
                }
            }
        }
    }
}

fn tuition_table(open: bool) -> Markup {
    html! {
        details #tuition open[open] {
            summary { (TUITION_YEAR) " Tuition & Fees" }
            p { "Complete pricing information for the " (TUITION_YEAR) " academic year" }
            table {
                thead {
                    tr { th { "Program" } th { "Schedule" } th { "Annual Tuition" } th { "Monthly" } }
                }
                tbody {
                    @for group in &TUITION {
                        tr.group { td colspan="4" { (group.heading) } }
                        @for row in group.rows {
                            tr {
                                td { (row.program) }
                                td { (row.schedule) }
                                td.amount { (usd(row.annual_usd)) }
                                td.amount { (usd(row.monthly_usd())) }
                            }
                        }
                    }
                }
            }
            h4 { "One-time and Annual Fees" }
            dl.fees {
                @for (label, amount) in &FEES {
                    dt { (label) }
                    dd { (usd(*amount)) }
                }
            }
            h4 { "Payment Options" }
            ul.payment-options {
                @for option in &PAYMENT_OPTIONS {
                    li { strong { (option.title) } " " (option.text) }
                }
            }
            p {
                "Questions about tuition and fees? "
                a href=(PHONE_LINK) target="_blank" rel="noopener noreferrer" { "Call " (PHONE_DISPLAY) }
                " or "
                a href=(format!("mailto:{EMAIL}")) { "Email " (EMAIL) }
            }
        }
    }
}

fn contact_form(state: &PageState) -> Markup {
    let contact = &state.contact;
    let pending = state.submission == SubmitStatus::Pending;
    html! {
        form.contact-form method="post" action="/contact#contact" {
            label { "First Name"
                input type="text" name="firstName" placeholder="Your first name" value=(contact.first_name) required;
            }
            label { "Last Name"
                input type="text" name="lastName" placeholder="Your last name" value=(contact.last_name) required;
            }
            label { "Email"
                input type="email" name="email" placeholder="your.email@example.com" value=(contact.email) required;
            }
            label { "Child's Age"
                input type="text" name="childAge" placeholder="Age of your child" value=(contact.child_age);
            }
            label { "Message"
                textarea name="message" placeholder="Tell us about your interest in our school..." required { (contact.message) }
            }
            @if let Some(message) = state.submission.message() {
                p class=(format!("submit-status {}", if state.submission == SubmitStatus::Succeeded { "success" } else { "error" })) role="status" {
                    (message)
                }
            }
            button type="submit" disabled[pending] {
                @if pending { "Sending..." } @else { "Send Message" }
            }
        }
    }
}

pub fn home_page(state: &PageState, board: &BoardSnapshot) -> Markup {
    let main = html! {
        main {
            section #hero {
                h1 { (HERO_TITLE) }
                p { (HERO_TEXT) }
                a.button href=(VISIT_FORM_URL) target="_blank" { "Schedule a Visit or Call" }
            }
            section #about {
                h2 { "About Our School" }
                p { (ABOUT_TEXT) }
                div.pillars {
                    @for pillar in &PILLARS {
                        article { h3 { (pillar.title) } p { (pillar.text) } }
                    }
                }
            }
            section #admissions {
                h2 { "Admissions" }
                h3 { "Visit Our School" }
                p { "Experience our Waldorf-inspired learning environment" }
                p {
                    "Come see our beautiful campus nestled in the Costa Rican jungle and meet our dedicated teachers. "
                    "We offer personalized tours for prospective families."
                }
                a.button href=(PHONE_LINK) target="_blank" rel="noopener noreferrer" { "Call " (PHONE_DISPLAY) }
                h4 { "What to Expect During Your Visit:" }
                ul {
                    @for item in &VISIT_EXPECTATIONS {
                        li { strong { (item.title) } " " (item.text) }
                    }
                }
                h4 { "Application Process" }
                ol {
                    @for step in &APPLICATION_STEPS {
                        li { (step) }
                    }
                }
                (tuition_table(state.tuition_open))
            }
            (calendar_section(board))
            section #contact {
                h2 { "Get in Touch" }
                p { "We'd love to welcome your family to our learning community" }
                div.visit {
                    h3 { "Visit Our Campus" }
                    address {
                        @for line in &ADDRESS_LINES {
                            (line) br;
                        }
                    }
                    p { "Phone: " a href=(PHONE_LINK) target="_blank" rel="noopener noreferrer" { (PHONE_DISPLAY) } }
                    p { "Email: " a href=(format!("mailto:{EMAIL}")) { (EMAIL) } }
                }
                div.hours {
                    h3 { "School Hours" }
                    @for (label, hours) in &SCHOOL_HOURS {
                        p { strong { (label) ":" } " " (hours) }
                    }
                }
                div.message {
                    h3 { "Send Us a Message" }
                    p { "We'll get back to you within 24 hours" }
                    (contact_form(state))
                }
            }
        }
    };
    layout(
        &format!("{SCHOOL_NAME} - {TAGLINE}"),
        navigation("", state.mobile_menu_open),
        main,
    )
}

pub fn calendar_page(embed_url: &str, ics_url: &str) -> Markup {
    let main = html! {
        main {
            section.calendar-hero {
                h1 { "School Calendar" }
                p { "Stay up to date with our events, holidays, and important school dates." }
            }
            iframe src=(embed_url) title=(format!("{SCHOOL_NAME} School Calendar")) width="100%" height="700" style="border:0" scrolling="no" {}
            div.calendar-actions {
                a href=(ics_url) download { "Download Calendar" }
                a href="/" { "Return to Homepage" }
            }
        }
    };
    layout(
        &format!("School Calendar - {SCHOOL_NAME}"),
        navigation("/", false),
        main,
    )
}
