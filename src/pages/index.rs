//! Landing page generation

use maud::{Markup, html};

use crate::components::layout::page_shell;

/// Generates the landing page
///
/// Static hero content wrapped in the page shell. The page supplies no
/// title, so the document title falls back to the site default.
///
/// # Returns
///
/// Complete HTML markup for the landing page
pub fn generate() -> Markup {
    page_shell(
        None,
        html! {
            section class="hero" {
                h1 { "Replicate" }
                p class="lead" { "Version control for machine learning" }
                p {
                    "Automatically track code, hyperparameters, training data, \
                     weights, metrics, and dependencies, with two lines of code."
                }
            }
        },
    )
}
