//! The "Skyline" resume template: dark sidebar with photo, contact and skills;
//! main column with a header and two timelines (work experience, education).

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::{Skill, TimelineEntry, UserData};
use crate::render::styles::skyline_css;

/// Grey silhouette used when the user has no picture.
pub const PLACEHOLDER_AVATAR: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 128 128'%3E%3Ccircle cx='64' cy='64' r='64' fill='%23cccccc'/%3E%3Cpath d='M64 72c13.3 0 24-10.7 24-24S77.3 24 64 24 40 34.7 40 48s10.7 24 24 24zm0 8c-16 0-48 8-48 24v8h96v-8c0-16-32-24-48-24z' fill='%23ffffff'/%3E%3C/svg%3E";

/// The sidebar only has room for this many skills; the rest are dropped.
pub const MAX_SKILLS: usize = 5;

const SMALL_STYLE: &str = "font-size: 13px; font-weight: normal; color: #ccc;";

pub fn render_skyline(user: &UserData) -> String {
    let picture = non_empty(user.picture.as_deref()).unwrap_or(PLACEHOLDER_AVATAR);
    let skills = user.skills.as_deref().unwrap_or_default();

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (user.full_name()) " - Resume" }
                style { (PreEscaped(skyline_css(&user.theme_color))) }
            }
            body {
                div class="resume" {
                    div class="sidebar" {
                        img src=(picture) alt="Profile";
                        h2 {
                            (user.first_name) " " (user.last_name)
                            br;
                            small style=(SMALL_STYLE) { (user.current_position) }
                        }
                        div class="section" {
                            h3 { "CONTACT" }
                            ul {
                                li { strong { "Phone:" } " " (user.phone_number) }
                                li { strong { "Email:" } " " (user.email) }
                                li { strong { "Location:" } " " (user.location) }
                            }
                        }
                        @if !skills.is_empty() {
                            (skills_section(skills))
                        }
                    }
                    div class="main" {
                        div class="main-header" {
                            h1 { (user.first_name) " " span { (user.last_name) } }
                            p { (user.about_me.as_deref().unwrap_or_default()) }
                        }
                        div class="main-body" {
                            div class="main-section" {
                                h3 { "WORK EXPERIENCE" }
                                div class="timeline" { (timeline(&user.experiences)) }
                            }
                            div class="main-section" {
                                h3 { "EDUCATION" }
                                div class="timeline" { (timeline(&user.educations)) }
                            }
                        }
                    }
                }
            }
        }
    };

    page.into_string()
}

fn skills_section(skills: &[Skill]) -> Markup {
    html! {
        div class="section" {
            h3 { "SKILLS" }
            ul {
                @for skill in skills.iter().take(MAX_SKILLS) {
                    li { (skill.name) }
                }
            }
        }
    }
}

fn timeline(entries: &[TimelineEntry]) -> Markup {
    html! {
        @for entry in entries {
            div class="timeline-entry" {
                h4 { (entry.title) }
                span { (entry_meta(entry)) }
                @if let Some(description) = non_empty(entry.description.as_deref()) {
                    p { (description) }
                }
            }
        }
    }
}

/// `"{organisation} | {location} | {start} – {end}"`, skipping empty parts of the
/// organisation/location segment. `subtitle` wins over `company`.
fn entry_meta(entry: &TimelineEntry) -> String {
    let organisation =
        non_empty(entry.subtitle.as_deref()).or_else(|| non_empty(entry.company.as_deref()));
    let place = [organisation, non_empty(entry.location.as_deref())]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" | ");

    let start = entry.start_date.as_deref().unwrap_or_default();
    let end = if entry.is_present {
        "Present"
    } else {
        entry.end_date.as_deref().unwrap_or_default()
    };
    let dates = format!("{start} – {end}");

    if place.is_empty() {
        dates
    } else {
        format!("{place} | {dates}")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
