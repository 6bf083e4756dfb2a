// ABOUTME: Container directory built from a listing and the interactive selection prompt.
// ABOUTME: Maps display names to IDs and turns the user's choice into target containers.

use crate::error::{Error, Result};
use crate::runtime::ContainerSummary;
use crate::types::ContainerId;

/// Choice that targets every listed container.
pub const ALL_CHOICE: &str = "All";

const PROMPT: &str = "Select a container:";

/// A listed container: its engine ID and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub id: ContainerId,
    pub name: String,
}

impl From<ContainerSummary> for ContainerRef {
    fn from(summary: ContainerSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name.trim_start_matches('/').to_string(),
        }
    }
}

/// What the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    One(ContainerRef),
}

/// Point-in-time listing with a name→ID mapping.
///
/// When two containers share a display name the later one wins the mapping,
/// while the name keeps the position where it was first seen.
#[derive(Debug, Clone, Default)]
pub struct ContainerDirectory {
    containers: Vec<ContainerRef>,
    by_name: Vec<(String, ContainerId)>,
}

impl ContainerDirectory {
    pub fn new(containers: Vec<ContainerRef>) -> Self {
        let mut by_name: Vec<(String, ContainerId)> = Vec::with_capacity(containers.len());
        for container in &containers {
            match by_name.iter_mut().find(|(name, _)| *name == container.name) {
                Some(entry) => {
                    tracing::debug!(
                        name = %container.name,
                        shadowed = %entry.1.short(),
                        "duplicate container name"
                    );
                    entry.1 = container.id.clone();
                }
                None => by_name.push((container.name.clone(), container.id.clone())),
            }
        }
        Self {
            containers,
            by_name,
        }
    }

    pub fn from_summaries(summaries: Vec<ContainerSummary>) -> Self {
        Self::new(summaries.into_iter().map(ContainerRef::from).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Every listed container, in listing order.
    pub fn containers(&self) -> &[ContainerRef] {
        &self.containers
    }

    pub fn lookup(&self, name: &str) -> Option<&ContainerId> {
        self.by_name
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, id)| id)
    }

    /// Prompt options: "All" followed by each distinct name.
    pub fn choices(&self) -> Vec<String> {
        std::iter::once(ALL_CHOICE.to_string())
            .chain(self.by_name.iter().map(|(name, _)| name.clone()))
            .collect()
    }

    /// Interpret a prompt answer.
    pub fn resolve_choice(&self, choice: &str) -> Result<Selection> {
        if choice == ALL_CHOICE {
            return Ok(Selection::All);
        }
        self.lookup(choice)
            .map(|id| {
                Selection::One(ContainerRef {
                    id: id.clone(),
                    name: choice.to_string(),
                })
            })
            .ok_or_else(|| Error::InvalidArgument(format!("unknown container: {choice}")))
    }

    /// Containers a selection covers, in listing order.
    pub fn targets(&self, selection: Selection) -> Vec<ContainerRef> {
        match selection {
            Selection::All => self.containers.clone(),
            Selection::One(container) => vec![container],
        }
    }
}

/// Ask the user for "All" or one container.
///
/// Fails when stdin is not a terminal or the prompt is cancelled.
pub fn prompt_selection(directory: &ContainerDirectory) -> Result<Selection> {
    let choice = inquire::Select::new(PROMPT, directory.choices()).prompt()?;
    directory.resolve_choice(&choice)
}
