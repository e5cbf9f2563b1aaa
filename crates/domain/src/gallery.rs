use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use crate::section::carousel_offset;
use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtistId(String);

impl ArtistId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed.contains(|ch: char| ch == '/' || ch == '\\')
        {
            return Err(DomainError::InvalidArtistId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ArtistId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistProfile {
    pub id: ArtistId,
    pub display_name: Option<String>,
    pub link: Option<String>,
}

impl ArtistProfile {
    pub fn bare(id: ArtistId) -> Self {
        Self {
            id,
            display_name: None,
            link: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSection {
    pub profile: ArtistProfile,
    pub background: Option<PathBuf>,
    slot: usize,
}

impl ArtistSection {
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn artist(&self) -> &ArtistId {
        &self.profile.id
    }

    pub fn title(&self) -> &str {
        self.profile
            .display_name
            .as_deref()
            .unwrap_or_else(|| self.profile.id.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    sections: Vec<ArtistSection>,
}

impl Gallery {
    pub fn from_profiles(profiles: Vec<ArtistProfile>) -> Self {
        let sections = profiles
            .into_iter()
            .enumerate()
            .map(|(slot, profile)| ArtistSection {
                profile,
                background: None,
                slot,
            })
            .collect();
        Self { sections }
    }

    pub fn sections(&self) -> &[ArtistSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn artist_ids(&self) -> Vec<ArtistId> {
        self.sections
            .iter()
            .map(|section| section.profile.id.clone())
            .collect()
    }

    pub fn set_background(&mut self, slot: usize, path: &Path) -> Result<(), DomainError> {
        let count = self.sections.len();
        let section = self
            .sections
            .get_mut(slot)
            .ok_or(DomainError::SlotOutOfRange { slot, count })?;
        section.background = Some(path.to_path_buf());
        Ok(())
    }

    pub fn offsets(&self, target: usize) -> Vec<i64> {
        let count = self.sections.len();
        (0..count)
            .map(|slot| carousel_offset(slot, target, count))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotIndicators {
    active: Vec<bool>,
}

impl DotIndicators {
    pub fn new(count: usize) -> Self {
        let mut active = vec![false; count];
        if let Some(first) = active.first_mut() {
            *first = true;
        }
        Self { active }
    }

    pub fn sync(&mut self, index: usize) {
        for flag in self.active.iter_mut() {
            *flag = false;
        }
        if let Some(flag) = self.active.get_mut(index) {
            *flag = true;
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|flag| *flag)
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|flag| **flag).count()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
