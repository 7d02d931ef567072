use colored::Colorize;
use jobsearch_core::{AppViewModel, JobCardView, Location, ResultsView, Role};

use super::constants::*;

/// Renders the whole page as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "Role: {} | Location: {} | Saved: {}",
            view.role.label().bold(),
            view.location.label().bold(),
            view.saved_count
        ),
    ];

    match &view.results {
        ResultsView::Loading => lines.push(LOADING_TEXT.to_string()),
        ResultsView::Error(message) => {
            lines.push(format!("Error: {message}").red().to_string());
        }
        ResultsView::Loaded { available, saved } => {
            lines.push(HEADING_AVAILABLE.bold().underline().to_string());
            if available.is_empty() {
                lines.push(EMPTY_RESULTS_TEXT.to_string());
            }
            for card in available {
                lines.extend(render_card(card));
            }
            if let Some(saved) = saved {
                lines.push(HEADING_SAVED.bold().underline().to_string());
                for card in saved {
                    lines.extend(render_card(card));
                }
            }
        }
    }

    lines
}

fn render_card(card: &JobCardView) -> Vec<String> {
    let marker = if card.saved {
        "[saved]".red().to_string()
    } else {
        "[ ]".dimmed().to_string()
    };

    let tags: Vec<&str> = [
        card.salary.as_str(),
        card.location.as_str(),
        card.job_type.as_str(),
    ]
    .into_iter()
    .filter(|tag| !tag.is_empty())
    .collect();

    let mut lines = vec![
        format!(
            "{:>3}. {} {} at {}",
            card.number,
            marker,
            card.title.bold(),
            card.company
        ),
        format!("     Logo: {}", card.logo),
    ];
    if !tags.is_empty() {
        lines.push(format!("     {}", tags.join(" | ")));
    }
    if !card.posted.is_empty() {
        lines.push(format!("     Posted {}", card.posted));
    }
    lines
}

pub fn role_options(current: Role) -> Vec<String> {
    option_lines(Role::ALL.iter().map(|role| (role.label(), *role == current)))
}

pub fn location_options(current: Location) -> Vec<String> {
    option_lines(
        Location::ALL
            .iter()
            .map(|location| (location.label(), *location == current)),
    )
}

fn option_lines<'a>(options: impl Iterator<Item = (&'a str, bool)>) -> Vec<String> {
    options
        .enumerate()
        .map(|(index, (label, current))| {
            let marker = if current { "*" } else { " " };
            format!("{marker} {:>2}. {label}", index + 1)
        })
        .collect()
}

pub fn help() -> Vec<String> {
    HELP_LINES.iter().map(|line| line.to_string()).collect()
}
