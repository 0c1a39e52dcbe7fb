//! Site footer component
//!
//! The footer is fixed content shared by every page: calls-to-action,
//! mission statement, core team, get-involved prose, navigation links,
//! and the site tagline.

use maud::{Markup, html};

use super::team::core_team;

/// Docs landing page path.
pub const DOCS_PATH: &str = "/docs";

/// "How it works" docs page path.
pub const HOW_IT_WORKS_PATH: &str = "/docs/learn/how-it-works";

/// Project repository URL.
pub const REPO_URL: &str = "https://github.com/replicate/replicate";

/// Team contact address.
pub const CONTACT_EMAIL: &str = "team@replicate.ai";

/// Renders the site footer
///
/// Emits the full fixed footer: call-to-action links, mission statement,
/// core team block, get-involved block, navigation row, and tagline. The
/// output is identical across renders; nothing here varies by page.
///
/// # Returns
///
/// Footer markup shared by all pages
pub fn footer() -> Markup {
    html! {
        footer {
            (call_to_action())
            div id="replicate" {
                (mission())
                (core_team())
                (get_involved())
            }
            (site_nav())
            p class="tagline" {
                strong { "Replicate" }
                " Version control for machine\u{a0}learning"
            }
        }
    }
}

/// Renders the primary and secondary call-to-action links.
fn call_to_action() -> Markup {
    html! {
        h2 {
            div {
                a class="button" href=(DOCS_PATH) { "Get started" }
            }
            div { " or, " }
            div {
                a href=(HOW_IT_WORKS_PATH) { "learn more about how Replicate works" }
            }
        }
    }
}

/// Renders the mission statement block.
///
/// Heading, intro paragraph, the four claims as an ordered list, and the
/// closing paragraph. All literal.
fn mission() -> Markup {
    html! {
        h2 {
            span {
                "Everyone uses version control for software, but it's much\u{a0}less \
                 common in\u{a0}machine learning."
            }
            " Why\u{a0}is\u{a0}this?"
        }
        div id="mission" {
            p { "We think it’s because:" }
            ol {
                li {
                    strong { "There need to be better tools." }
                    " ML researchers feel guilty that they aren’t doing things \
                     “properly”. But it’s not their fault\u{a0}—\u{a0}the tools aren’t \
                     good enough yet."
                }
                li {
                    strong { "Git (or a band-aid on top of Git) is not the right solution." }
                    " Git doesn’t handle large files or structured metadata, and it \
                     doesn’t commit automatically."
                }
                li {
                    strong { "It needs to be open source and a community effort." }
                    " Such a core piece of infrastructure needs to be open and \
                     collaborative."
                }
                li {
                    strong { "It needs to be small, easy to use, and extensible." }
                    " We don’t use big “software platforms” any longer, so why do we \
                     use “AI Platforms”? We want to make a tool that does one thing \
                     well and can be combined with other tools to produce the system \
                     you need."
                }
            }
            p {
                "We want this to be Git for machine learning. But, version control \
                 systems are complex, and to make this a reality we need your help."
            }
        }
    }
}

/// Renders the get-involved block.
fn get_involved() -> Markup {
    html! {
        div id="get-involved" {
            h3 { "Get involved with Replicate" }
            p {
                "Have you strung together some shell scripts to build this for \
                 yourself? Are you interested in the problem of making machine \
                 learning reproducible?"
            }
            p { "Join us, and let’s build a better system for everyone." }
        }
    }
}

/// Renders the footer navigation row.
fn site_nav() -> Markup {
    html! {
        nav {
            a href=(DOCS_PATH) { "Docs" }
            a href=(REPO_URL) { "GitHub" }
            a href=(format!("mailto:{}", CONTACT_EMAIL)) { (CONTACT_EMAIL) }
        }
    }
}
