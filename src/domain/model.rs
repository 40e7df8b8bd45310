use serde::Serialize;

/// Maximum number of members a group may hold.
pub const GROUP_CAPACITY: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    pub name: String,
    pub score: f64,
}

impl Participant {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Default identifier for the participant at a 1-based position.
    pub fn default_name(position: usize) -> String {
        format!("Person {}", position)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    members: Vec<Participant>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= GROUP_CAPACITY
    }

    pub fn total_score(&self) -> f64 {
        self.members.iter().map(|p| p.score).sum()
    }

    /// Mean member score; an empty group averages 0.
    pub fn average(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        self.total_score() / self.members.len() as f64
    }

    pub(crate) fn push(&mut self, participant: Participant) {
        self.members.push(participant);
    }
}

/// Groups in index order, as produced by one balancing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupingResult {
    groups: Vec<Group>,
}

impl GroupingResult {
    pub(crate) fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn participant_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn averages(&self) -> Vec<f64> {
        self.groups.iter().map(Group::average).collect()
    }

    /// `(label, average rounded to 2 decimals)` per group.
    pub fn rounded_averages(&self) -> Vec<(String, f64)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, g)| (group_label(i), round2(g.average())))
            .collect()
    }
}

/// 1-based display label for the group at `index`.
pub fn group_label(index: usize) -> String {
    format!("Group {}", index + 1)
}

/// Rounds to 2 decimal places on the exact binary value, so `0.125` becomes
/// `0.12` and `1.115` (stored as 1.11499...) becomes `1.11`.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Why the resolver moved the requested group count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupAdjustment {
    Increased { requested: usize, minimum: usize },
    Decreased { requested: usize, maximum: usize },
}

impl std::fmt::Display for GroupAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupAdjustment::Increased { requested, minimum } => write!(
                f,
                "Minimum number of groups required is {} (to allow max {} per group); adjusted from {}",
                minimum, GROUP_CAPACITY, requested
            ),
            GroupAdjustment::Decreased { requested, maximum } => write!(
                f,
                "Requested {} groups but there are only {} participants; adjusted to {}",
                requested, maximum, maximum
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub requested: usize,
    pub groups: usize,
    pub adjustment: Option<GroupAdjustment>,
}

impl Resolution {
    pub fn was_adjusted(&self) -> bool {
        self.adjustment.is_some()
    }
}
