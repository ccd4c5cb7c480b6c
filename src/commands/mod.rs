use indicatif::{ProgressBar, ProgressStyle};

pub mod extract;
pub mod merge;
pub mod reduce;

/// Progress bar shared by the page scan and the merge loop.
fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("#>-"),
    );
    bar.set_message(message);
    bar
}
