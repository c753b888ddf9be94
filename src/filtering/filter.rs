use std::fmt;

/// Milestone selector of a structured listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MilestoneFilter {
    /// A milestone by number.
    Number(u64),
    /// Issues without a milestone (`no:milestone`).
    Unassigned,
}

impl fmt::Display for MilestoneFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilestoneFilter::Number(n) => write!(f, "{}", n),
            MilestoneFilter::Unassigned => write!(f, "none"),
        }
    }
}

/// A query expressed directly in the listing endpoint's parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredFilter {
    pub milestone: Option<MilestoneFilter>,
    pub state: Option<String>,
    pub assignee: Option<String>,
    pub creator: Option<String>,
    pub mentioned: Option<String>,
    pub labels: Option<Vec<String>>,
    pub sort: Option<String>,
}

impl StructuredFilter {
    /// Query parameters for the listing endpoint, paging excluded.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(milestone) = &self.milestone {
            params.push(("milestone", milestone.to_string()));
        }
        if let Some(state) = &self.state {
            params.push(("state", state.clone()));
        }
        if let Some(assignee) = &self.assignee {
            params.push(("assignee", assignee.clone()));
        }
        if let Some(creator) = &self.creator {
            params.push(("creator", creator.clone()));
        }
        if let Some(mentioned) = &self.mentioned {
            params.push(("mentioned", mentioned.clone()));
        }
        if let Some(labels) = &self.labels {
            params.push(("labels", labels.join(",")));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }

        params
    }
}
