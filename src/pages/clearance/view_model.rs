use crate::pages::clearance::roster::{self, ClearanceRequest};
use crate::state::notifications::{notify, use_notifications, NotificationState};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearanceDecision {
    Approved,
    Rejected,
}

/// Title and description of the acknowledgment a decision produces.
pub fn acknowledgment(decision: ClearanceDecision, id: u32) -> (String, String) {
    match decision {
        ClearanceDecision::Approved => (
            "Clearance approved".into(),
            format!("DOITP clearance for student {id} was approved."),
        ),
        ClearanceDecision::Rejected => (
            "Clearance rejected".into(),
            format!("DOITP clearance for student {id} was rejected."),
        ),
    }
}

#[derive(Clone, Copy)]
pub struct ClearanceViewModel {
    pub requests: RwSignal<Vec<ClearanceRequest>>,
    notifications: WriteSignal<NotificationState>,
}

impl ClearanceViewModel {
    pub fn new() -> Self {
        let (_, notifications) = use_notifications();
        Self {
            requests: create_rw_signal(roster::seed()),
            notifications,
        }
    }

    // Decisions acknowledge without touching the roster: the processing
    // pipeline behind these requests is not wired up yet.
    pub fn decide(&self, decision: ClearanceDecision, id: u32) {
        let (title, description) = acknowledgment(decision, id);
        notify(self.notifications, title, description);
    }
}

impl Default for ClearanceViewModel {
    fn default() -> Self {
        Self::new()
    }
}
