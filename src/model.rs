//! Core data models for Story Realms.
//! Wire types mirror the backend JSON; `Catalog` is the reducer behind the
//! path list shared by the map and list views.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::Reducible;

pub type NodeId = String;

/// A single lesson stop on a path, as served by `GET /paths`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LessonNode {
    pub id: NodeId,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    /// Sequence position within the path; array order is irrelevant.
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeCategory {
    Video,
    Quiz,
    Lesson,
}

impl LessonNode {
    pub fn category(&self) -> NodeCategory {
        match self.kind.as_deref() {
            Some("video") => NodeCategory::Video,
            Some("quiz") => NodeCategory::Quiz,
            _ => NodeCategory::Lesson,
        }
    }

    /// Long-form body, falling back to the summary when no content was authored.
    pub fn body(&self) -> &str {
        if self.content.is_empty() {
            &self.summary
        } else {
            &self.content
        }
    }

    pub fn difficulty_label(&self) -> &str {
        self.difficulty.as_deref().unwrap_or("—")
    }
}

/// A themed learning journey. `title` doubles as the unique key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<LessonNode>,
}

/// Node ids the backend reports as complete for one user and path.
///
/// Only ever replaced as a whole with what the server returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionSet(BTreeSet<NodeId>);

impl CompletionSet {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.0.iter()
    }
}

impl<S: Into<NodeId>> FromIterator<S> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Body of both `GET /progress/{user}/{path}` and `POST /progress/toggle`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressResponse {
    #[serde(default)]
    pub completed_node_ids: Vec<NodeId>,
}

impl From<ProgressResponse> for CompletionSet {
    fn from(resp: ProgressResponse) -> Self {
        resp.completed_node_ids.into_iter().collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub user_id: String,
    pub path_title: String,
    pub node_id: NodeId,
}

pub const LOAD_FAILED_MESSAGE: &str =
    "Could not load learning paths. Try bootstrapping the content.";
pub const NO_PATHS_MESSAGE: &str = "No paths yet. Bootstrap sample content to get started.";

/// Load state of the path catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Catalog {
    #[default]
    Loading,
    Loaded(Rc<Vec<LearningPath>>),
    Failed(String),
}

impl Catalog {
    /// Paths that get their own per-path components (and progress fetches).
    pub fn loaded(&self) -> Option<&Rc<Vec<LearningPath>>> {
        match self {
            Catalog::Loaded(paths) => Some(paths),
            Catalog::Loading | Catalog::Failed(_) => None,
        }
    }

    /// Message shown next to the bootstrap link, in place of any path view.
    pub fn notice(&self) -> Option<&str> {
        match self {
            Catalog::Failed(msg) => Some(msg),
            Catalog::Loaded(paths) if paths.is_empty() => Some(NO_PATHS_MESSAGE),
            Catalog::Loaded(_) | Catalog::Loading => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogAction {
    Loaded(Vec<LearningPath>),
    Failed(String),
}

impl Reducible for Catalog {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CatalogAction::Loaded(paths) => Rc::new(Catalog::Loaded(Rc::new(paths))),
            CatalogAction::Failed(msg) => Rc::new(Catalog::Failed(msg)),
        }
    }
}
