pub const PROMPT: &str = "jobs> ";
pub const HEADING_AVAILABLE: &str = "Available Jobs";
pub const HEADING_SAVED: &str = "Saved Opportunities";
pub const LOADING_TEXT: &str = "Loading jobs...";
pub const EMPTY_RESULTS_TEXT: &str = "No jobs found.";

pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  role <number|name>       pick a role (see `roles`)",
    "  location <number|name>   pick a location (see `locations`)",
    "  save <number>            save or unsave a job from Available Jobs",
    "  retry                    search again after an error",
    "  show                     print the page again",
    "  roles | locations        list the options",
    "  help                     this text",
    "  quit                     leave",
];
