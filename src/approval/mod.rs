//! Priority-threshold approval policy.
//!
//! An ordered sequence of (priority set, approver) rules evaluated
//! first-match-wins over a task's priority. Purely a function of the
//! task; no link state, no side effects.

use crate::task::domain::{Task, TaskPriority};
use std::fmt;


/// Role empowered to approve a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approver {
    /// Approves routine (low and medium priority) work.
    TeamLead,
    /// Approves high priority work.
    ProjectManager,
    /// Approves critical work.
    Director,
}

impl Approver {
    /// Returns the role title used in decision messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TeamLead => "Team Lead",
            Self::ProjectManager => "Project Manager",
            Self::Director => "Department Director",
        }
    }
}

impl fmt::Display for Approver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One link of the policy: an approver and the priorities they cover.
#[derive(Debug, Clone)]
pub struct ApprovalRule {
    approver: Approver,
    priorities: Vec<TaskPriority>,
}

impl ApprovalRule {
    /// Creates a rule approving the given priorities.
    #[must_use]
    pub fn new(approver: Approver, priorities: impl IntoIterator<Item = TaskPriority>) -> Self {
        Self {
            approver,
            priorities: priorities.into_iter().collect(),
        }
    }

    fn covers(&self, priority: TaskPriority) -> bool {
        self.priorities.contains(&priority)
    }
}

/// Outcome of an approval request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The first matching rule's approver signed off.
    Approved(Approver),
    /// No rule covered the task's priority.
    Rejected,
}

impl Decision {
    /// Renders the user-facing decision message for a task.
    #[must_use]
    pub fn describe(&self, task: &Task) -> String {
        match self {
            Self::Approved(approver) => {
                format!("Task '{}' has been approved by {approver}", task.title())
            }
            Self::Rejected => format!(
                "Task '{}' cannot be approved. Required approval level not available.",
                task.title()
            ),
        }
    }
}

/// Ordered approval rules, evaluated first-match-wins.
#[derive(Debug, Clone, Default)]
pub struct ApprovalPolicy {
    rules: Vec<ApprovalRule>,
}

impl ApprovalPolicy {
    /// Creates a policy from an ordered rule sequence.
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = ApprovalRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The built-in escalation ladder: Team Lead for low and medium,
    /// Project Manager for high, Director for critical.
    #[must_use]
    pub fn standard() -> Self {
        Self::new([
            ApprovalRule::new(
                Approver::TeamLead,
                [TaskPriority::Low, TaskPriority::Medium],
            ),
            ApprovalRule::new(Approver::ProjectManager, [TaskPriority::High]),
            ApprovalRule::new(Approver::Director, [TaskPriority::Critical]),
        ])
    }

    /// Decides the task's approval by the first rule covering its
    /// priority.
    #[must_use]
    pub fn decide(&self, task: &Task) -> Decision {
        self.rules
            .iter()
            .find(|rule| rule.covers(task.priority()))
            .map_or(Decision::Rejected, |rule| Decision::Approved(rule.approver))
    }
}
