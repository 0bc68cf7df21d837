use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub gpa: f64,
    pub is_eligible: bool,
    pub invitation_sent: bool,
}

/// Fixed ceremony roster. Eligibility is precomputed upstream; the page
/// never derives it from the GPA.
pub fn seed() -> Vec<Student> {
    vec![
        Student {
            id: 1,
            name: "Ayşe Yıldız".into(),
            gpa: 3.75,
            is_eligible: true,
            invitation_sent: false,
        },
        Student {
            id: 2,
            name: "Mehmet Acar".into(),
            gpa: 2.98,
            is_eligible: true,
            invitation_sent: false,
        },
        Student {
            id: 3,
            name: "Ali Ural".into(),
            gpa: 2.95,
            is_eligible: false,
            invitation_sent: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::seed;
    use std::collections::HashSet;

    #[test]
    fn roster_ids_are_unique() {
        let ids: HashSet<u32> = seed().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), seed().len());
    }

    #[test]
    fn roster_starts_with_no_invitations_sent() {
        assert!(seed().iter().all(|s| !s.invitation_sent));
    }

    #[test]
    fn roster_contains_an_ineligible_student() {
        assert!(seed().iter().any(|s| !s.is_eligible));
    }
}
