use crate::pages::ceremony::roster::{self, Student};
use crate::state::notifications::{notify, use_notifications, NotificationState};
use leptos::*;

/// Confirmation prompt state machine. Two states, three transitions:
/// `Closed -> Open` on request, `Open -> Closed` on cancel or confirm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmPrompt {
    #[default]
    Closed,
    Open,
}

impl ConfirmPrompt {
    pub fn request(self) -> Self {
        ConfirmPrompt::Open
    }

    pub fn close(self) -> Self {
        ConfirmPrompt::Closed
    }

    pub fn is_open(self) -> bool {
        self == ConfirmPrompt::Open
    }
}

/// Marks every eligible student as invited and leaves the rest untouched.
/// Ineligible rows never gain the flag through this path.
pub fn send_invitations(roster: &[Student]) -> Vec<Student> {
    roster
        .iter()
        .cloned()
        .map(|mut student| {
            if student.is_eligible {
                student.invitation_sent = true;
            }
            student
        })
        .collect()
}

#[derive(Clone, Copy)]
pub struct CeremonyViewModel {
    pub students: RwSignal<Vec<Student>>,
    pub prompt: RwSignal<ConfirmPrompt>,
    notifications: WriteSignal<NotificationState>,
}

impl CeremonyViewModel {
    pub fn new() -> Self {
        let (_, notifications) = use_notifications();
        Self {
            students: create_rw_signal(roster::seed()),
            prompt: create_rw_signal(ConfirmPrompt::default()),
            notifications,
        }
    }

    /// Requesting the bulk send only opens the prompt; nothing is mutated
    /// until the user confirms.
    pub fn request_send(&self) {
        self.prompt.update(|prompt| *prompt = prompt.request());
    }

    pub fn cancel_send(&self) {
        self.prompt.update(|prompt| *prompt = prompt.close());
    }

    pub fn confirm_send(&self) {
        self.students
            .update(|students| *students = send_invitations(students));
        self.prompt.update(|prompt| *prompt = prompt.close());
        notify(
            self.notifications,
            "Invitations sent",
            "Invitations were sent to all eligible students.",
        );
    }
}

impl Default for CeremonyViewModel {
    fn default() -> Self {
        Self::new()
    }
}
