use std::path::PathBuf;

use showcase_domain::{ArtistProfile, Gallery};

use crate::{ApplicationError, ArtistDirectory};

#[derive(Debug, Clone)]
pub struct ResolveRosterCommand {
    pub asset_root: PathBuf,
    pub declared: Vec<ArtistProfile>,
}

pub fn resolve_roster(
    command: ResolveRosterCommand,
    directory: &dyn ArtistDirectory,
) -> Result<Gallery, ApplicationError> {
    if !command.declared.is_empty() {
        return Ok(Gallery::from_profiles(command.declared));
    }

    let discovered = directory.discover_artists(&command.asset_root)?;
    tracing::info!(
        count = discovered.len(),
        root = %command.asset_root.display(),
        "no artists declared, using artist directories"
    );
    Ok(Gallery::from_profiles(
        discovered.into_iter().map(ArtistProfile::bare).collect(),
    ))
}
