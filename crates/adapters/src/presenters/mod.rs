use showcase_application::IntroRotation;
use showcase_domain::{ArtistSection, NavigationState};

pub fn present_intro_images(rotation: &IntroRotation) -> Vec<String> {
    let Some(images) = rotation.images() else {
        return vec!["intro images: not discovered".to_string()];
    };

    let mut lines = vec![format!(
        "intro images: {} (rotating={})",
        images.len(),
        rotation.is_rotating()
    )];
    for (index, path) in images.images().iter().enumerate() {
        let marker = if index == images.current_index() { "*" } else { " " };
        lines.push(format!("{marker} {}", path.display()));
    }
    lines
}

pub fn present_artist_row(section: &ArtistSection) -> String {
    let background = section
        .background
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}\t{}\t{}\t{}",
        section.slot(),
        section.artist(),
        section.title(),
        background
    )
}

pub fn present_navigation(state: &NavigationState, section_count: usize) -> String {
    let position = if section_count == 0 {
        "artist 0/0".to_string()
    } else {
        format!("artist {}/{}", state.horizontal() + 1, section_count)
    };
    format!(
        "{} | {}{}",
        state.vertical().label(),
        position,
        if state.is_input_locked() { " | locked" } else { "" }
    )
}
