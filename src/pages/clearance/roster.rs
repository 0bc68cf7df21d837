use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearanceRequest {
    pub id: u32,
    pub name: String,
    pub department: String,
}

/// Fixed clearance-request roster for the DOITP desk.
pub fn seed() -> Vec<ClearanceRequest> {
    vec![
        ClearanceRequest {
            id: 101,
            name: "Ahmet Yılmaz".into(),
            department: "Computer Engineering".into(),
        },
        ClearanceRequest {
            id: 102,
            name: "Ayşe Demir".into(),
            department: "Mechanical Engineering".into(),
        },
        ClearanceRequest {
            id: 103,
            name: "Mehmet Kaya".into(),
            department: "Electrical Engineering".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::seed;
    use std::collections::HashSet;

    #[test]
    fn roster_ids_are_unique() {
        let ids: HashSet<u32> = seed().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), seed().len());
    }
}
