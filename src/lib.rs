//! Static page generator for the Replicate project website.

mod assets;
pub mod components;
mod config;
mod markdown;
pub mod pages;
mod site;

pub use assets::write_css_assets;
pub use components::footer::{CONTACT_EMAIL, DOCS_PATH, HOW_IT_WORKS_PATH, REPO_URL, footer};
pub use components::icons::SocialPlatform;
pub use components::layout::{DEFAULT_TITLE, page_shell, page_title};
pub use components::team::{CORE_TEAM, Profile};
pub use config::Config;
pub use markdown::MarkdownRenderer;
pub use site::build;
