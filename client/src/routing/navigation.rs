//! Router state machine.
//!
//! DESIGN
//! ======
//! `Navigator` owns the route table, the current state and the scroll
//! memory. Offsets are keyed by history entry id, not URL, so repeated
//! visits to one URL keep separate offsets. Each navigation produces a
//! `Transition` describing what the outlet must do (render, correct history,
//! record the entry id, scroll) without doing any of it, so the whole machine
//! runs in plain unit tests.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::scroll::{EntryId, ScrollMemory, ScrollOffset, ScrollTarget, scroll_policy};
use super::table::{Resolution, RouteName, RouteTable};

/// What triggered the navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationKind {
    /// Link activation or programmatic navigation adding an entry.
    #[default]
    Push,
    /// Navigation rewriting the current entry.
    Replace,
    /// Browser back/forward.
    Traverse,
}

/// A navigation target split into its parts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetLocation {
    pub path: String,
    /// Query string without the leading `?`.
    pub query: String,
    /// Fragment without the leading `#`.
    pub fragment: Option<String>,
}

impl TargetLocation {
    /// Split an href such as `/showcase?tab=1#sizes`.
    pub fn parse(href: &str) -> Self {
        let (rest, fragment) = match href.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (href, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        Self::from_parts(path, query, fragment.unwrap_or(""))
    }

    /// Build from router location parts; leading `?`/`#` are tolerated.
    pub fn from_parts(path: &str, search: &str, hash: &str) -> Self {
        let path = if path.is_empty() { "/" } else { path };
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        Self {
            path: path.to_owned(),
            query: search.strip_prefix('?').unwrap_or(search).to_owned(),
            fragment: (!hash.is_empty()).then(|| hash.to_owned()),
        }
    }

    /// The location as an href.
    pub fn key(&self) -> String {
        let mut key = self.path.clone();
        if !self.query.is_empty() {
            key.push('?');
            key.push_str(&self.query);
        }
        if let Some(fragment) = &self.fragment {
            key.push('#');
            key.push_str(fragment);
        }
        key
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RouterState {
    #[default]
    Unresolved,
    Resolved {
        route: RouteName,
        location: TargetLocation,
        entry: EntryId,
    },
}

/// Everything the outlet needs to commit one navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub from: Option<RouteName>,
    pub resolution: Resolution,
    /// Final location, after any correction.
    pub location: TargetLocation,
    pub kind: NavigationKind,
    pub scroll: ScrollTarget,
    /// History entry the navigation landed on.
    pub entry: EntryId,
    /// `entry` was just allocated and must be written to `history.state`.
    pub new_entry: bool,
}

impl Transition {
    pub fn route(&self) -> RouteName {
        self.resolution.name
    }
}

/// A `popstate` seen but not yet observed. `entry` is `None` when the
/// target entry carries no id (it predates the app, or its state was
/// overwritten).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Traversal {
    entry: Option<EntryId>,
}

#[derive(Debug)]
pub struct Navigator {
    table: RouteTable,
    state: RouterState,
    memory: ScrollMemory,
    pending_traversal: Option<Traversal>,
    next_entry: u64,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        Self::starting_at(table, 0)
    }

    /// Navigator whose entry ids count up from `first_entry`. Seeding per page
    /// load keeps ids distinct from those a previous load left in history.
    pub fn starting_at(table: RouteTable, first_entry: u64) -> Self {
        Self {
            table,
            state: RouterState::Unresolved,
            memory: ScrollMemory::default(),
            pending_traversal: None,
            next_entry: first_entry,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn current_route(&self) -> Option<RouteName> {
        match &self.state {
            RouterState::Unresolved => None,
            RouterState::Resolved { route, .. } => Some(*route),
        }
    }

    pub fn current_entry(&self) -> Option<EntryId> {
        match &self.state {
            RouterState::Unresolved => None,
            RouterState::Resolved { entry, .. } => Some(*entry),
        }
    }

    /// Resolve `target`, move to the resolved state and describe the result.
    ///
    /// A push (or a traversal with no known entry) lands on a fresh entry; a
    /// replace keeps the current one.
    pub fn navigate(&mut self, target: TargetLocation, kind: NavigationKind) -> Transition {
        match (kind, self.current_entry()) {
            (NavigationKind::Replace, Some(entry)) => self.commit(target, kind, entry, false),
            _ => {
                let entry = self.allocate_entry();
                self.commit(target, kind, entry, true)
            }
        }
    }

    /// Flag the next observed location change as a history traversal to
    /// `entry` (the id read from `history.state`, if any).
    pub fn mark_traversal(&mut self, entry: Option<EntryId>) {
        self.pending_traversal = Some(Traversal { entry });
    }

    /// Navigate to a location reported by the browser: a traversal if one was
    /// marked since the last navigation, otherwise a push. Reporting the
    /// current location again yields `None`; several outlets may observe the
    /// same change.
    pub fn observe(&mut self, target: TargetLocation) -> Option<Transition> {
        match self.pending_traversal.take() {
            Some(Traversal { entry: Some(entry) }) => {
                Some(self.commit(target, NavigationKind::Traverse, entry, false))
            }
            Some(Traversal { entry: None }) => Some(self.navigate(target, NavigationKind::Traverse)),
            None if self.is_current(&target) => None,
            None => Some(self.navigate(target, NavigationKind::Push)),
        }
    }

    fn is_current(&self, target: &TargetLocation) -> bool {
        matches!(&self.state, RouterState::Resolved { location, .. } if location == target)
    }

    fn allocate_entry(&mut self) -> EntryId {
        let entry = EntryId(self.next_entry);
        self.next_entry += 1;
        entry
    }

    fn commit(&mut self, target: TargetLocation, kind: NavigationKind, entry: EntryId, new_entry: bool) -> Transition {
        let resolution = self.table.resolve(&target.path);
        let remembered = self.memory.recall(entry);
        let location = match &resolution.correction {
            Some(correction) => TargetLocation {
                path: correction.path.clone(),
                ..target
            },
            None => target,
        };
        let scroll = scroll_policy(kind, remembered, location.fragment.as_deref());
        let from = self.current_route();
        self.state = RouterState::Resolved {
            route: resolution.name,
            location: location.clone(),
            entry,
        };
        Transition {
            from,
            resolution,
            location,
            kind,
            scroll,
            entry,
            new_entry,
        }
    }

    /// Record the scroll offset of the current entry.
    pub fn remember_scroll(&mut self, offset: ScrollOffset) {
        if let Some(entry) = self.current_entry() {
            self.memory.remember(entry, offset);
        }
    }

    pub fn remembered_scroll(&self, entry: EntryId) -> Option<ScrollOffset> {
        self.memory.recall(entry)
    }
}
