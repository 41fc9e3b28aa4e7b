//! Plain-text renderer
//!
//! Renders catalog views and session state to readable markdown.

use crate::app::{ExperienceCard, ExperienceDetail, Listing, SessionView, VendorProfile};
use crate::domain::entities::{Receipt, Relaxation, SubmissionStatus, WizardState};

/// Render the filtered listing
pub fn render_listing(listing: &Listing) -> String {
    let mut buf = String::new();

    buf.push_str("# Experiences in Guwahati\n\n");

    let filter = &listing.filter;
    if !filter.is_unfiltered() {
        buf.push_str(&format!(
            "Filter: search \"{}\" | category {} | duration {}\n\n",
            filter.search,
            filter.category.as_str(),
            filter.duration.as_str()
        ));
    }

    if listing.experiences.is_empty() {
        buf.push_str("_No experiences match these filters._\n\n");
        match &listing.relaxation {
            Some(Relaxation::TryDuration { duration, matches }) => {
                buf.push_str(&format!(
                    "Try {} ({}) instead: {} experience{} available.\n",
                    duration.description(),
                    duration.code(),
                    matches,
                    plural(*matches)
                ));
            }
            Some(Relaxation::ClearFilters { matches }) => {
                buf.push_str(&format!(
                    "Clear all filters to see {} experience{}.\n",
                    matches,
                    plural(*matches)
                ));
            }
            None => {}
        }
        return buf;
    }

    buf.push_str(&format!(
        "{} experience{} found.\n\n",
        listing.count,
        plural(listing.count)
    ));
    for card in &listing.experiences {
        buf.push_str(&render_card(card));
        buf.push('\n');
    }

    buf
}

fn render_card(card: &ExperienceCard) -> String {
    let verified = if card.vendor.verified { " [verified]" } else { "" };
    format!(
        "**{}** ({}) {} | {} | {}\n  {}\n  Hosted by {}{} ({:.1}, {} reviews)\n",
        card.title,
        card.id,
        card.price_label,
        card.category_label,
        card.duration_label,
        truncate(&card.description, 100),
        card.vendor.name,
        verified,
        card.vendor.rating,
        card.vendor.reviews
    )
}

/// Render the detail page of one experience
pub fn render_experience(detail: &ExperienceDetail) -> String {
    let experience = &detail.experience;
    let vendor = &detail.vendor;
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n\n", experience.title));
    buf.push_str(&format!(
        "{} | {} | {}\n\n",
        detail.price_label,
        experience.category.label(),
        experience.duration.description()
    ));
    buf.push_str(&format!("{}\n\n", experience.description));

    if !experience.highlights.is_empty() {
        buf.push_str("## Highlights\n\n");
        for highlight in &experience.highlights {
            buf.push_str(&format!("- {}\n", highlight));
        }
        buf.push('\n');
    }

    buf.push_str("## Your Host\n\n");
    buf.push_str(&format!(
        "**{}**, {} in {}\n{}\n\n",
        vendor.name, vendor.role, vendor.location, vendor.bio
    ));

    if !experience.languages.is_empty() {
        buf.push_str(&format!("Languages: {}\n\n", experience.languages.join(", ")));
    }

    if !experience.phrases.is_empty() {
        buf.push_str("## Useful Phrases\n\n");
        for phrase in &experience.phrases {
            buf.push_str(&format!(
                "- {} = {} ({})\n",
                phrase.original, phrase.translated, phrase.pronunciation
            ));
        }
        buf.push('\n');
    }

    buf.push_str("## Time Slots\n\n");
    buf.push_str(&detail.slots.join(" | "));
    buf.push_str("\n\n---\n\n");
    buf.push_str(&format!(
        "Book with `POST /checkout/{}` and a `slot`.\n",
        experience.id
    ));

    buf
}

/// Render a vendor profile
pub fn render_vendor(profile: &VendorProfile) -> String {
    let vendor = &profile.vendor;
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n\n", vendor.name));
    buf.push_str(&format!(
        "{} | {} | {:.1} ({} reviews){}\n\n",
        vendor.role,
        vendor.location,
        vendor.display_rating(),
        vendor.reviews,
        if vendor.verified { " | verified" } else { "" }
    ));
    buf.push_str(&format!("{}\n\n", vendor.bio));

    buf.push_str("## Experiences\n\n");
    if profile.experiences.is_empty() {
        buf.push_str("_No experiences listed yet._\n");
    } else {
        for card in &profile.experiences {
            buf.push_str(&format!(
                "- **{}** ({}) {} | {}\n",
                card.title, card.id, card.price_label, card.duration_label
            ));
        }
    }

    buf
}

/// Render where a wizard session stands
pub fn render_session(view: &SessionView) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# {} ({})\n\n", view.kind, view.id));

    match view.state {
        WizardState::Active { step } => {
            buf.push_str(&format!(
                "Step {} of {}: {} [{}%]\n\n",
                step,
                view.total_steps,
                view.title.unwrap_or(""),
                view.progress
            ));
            for field in &view.fields {
                let marker = if field.required { " *" } else { "" };
                buf.push_str(&format!("- {} ({}){}\n", field.label, field.name, marker));
            }
            if !view.fields.is_empty() {
                buf.push('\n');
            }
        }
        WizardState::Submitted => buf.push_str("Submitted.\n\n"),
        WizardState::Cancelled => buf.push_str("Cancelled.\n\n"),
    }

    if !view.values.is_empty() {
        buf.push_str("## Values\n\n");
        for (name, value) in view.values.iter() {
            buf.push_str(&format!("- {}: {}\n", name, value));
        }
        buf.push('\n');
    }

    match &view.submission {
        SubmissionStatus::NotSubmitted => {}
        SubmissionStatus::Pending => buf.push_str("Submission pending...\n"),
        SubmissionStatus::Completed { receipt, next_route } => {
            buf.push_str(&format!("{}\nNext: {}\n", render_receipt(receipt), next_route));
        }
        SubmissionStatus::Failed { reason } => {
            buf.push_str(&format!("Submission failed: {}\n", reason));
        }
    }

    buf
}

fn render_receipt(receipt: &Receipt) -> String {
    match receipt {
        Receipt::Booking(confirmation) => format!(
            "[CONFIRMED] {} on {} at {} for {} ({})",
            confirmation.token,
            confirmation.date,
            confirmation.slot,
            confirmation.guest_name,
            confirmation.amount
        ),
        Receipt::Account(identity) => format!(
            "[SIGNED IN] {} <{}> as {}",
            identity.display_name, identity.email, identity.user_type
        ),
        Receipt::Application(application) => format!(
            "[RECEIVED] Application {} for {}",
            application.application_id, application.business_name
        ),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Truncate to at most `max_chars` characters, marking the cut with "..."
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
