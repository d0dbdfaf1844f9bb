//! Id-based merges for the views' local copies of server lists.
//!
//! Identity is always the server-assigned id, never list position. The views
//! call these in the success arm of a mutation and nowhere else, so a failed
//! request leaves the local list exactly as it was.

use crate::models::{Clinic, ClinicDoctor, Doctor};

/// Records addressed by a server-assigned id.
pub trait HasId {
    fn id(&self) -> i64;
}

impl HasId for Clinic {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for Doctor {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for ClinicDoctor {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Replace the entry whose id matches `updated`, returning whether a match
/// was found. No match leaves the list untouched.
pub fn replace_by_id<T: HasId>(list: &mut Vec<T>, updated: T) -> bool {
    match list.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the entry with the given id, returning whether anything was removed.
pub fn remove_by_id<T: HasId>(list: &mut Vec<T>, id: i64) -> bool {
    let before = list.len();
    list.retain(|item| item.id() != id);
    list.len() != before
}

/// Doctors not yet assigned to a clinic: (all doctors) minus (doctors already
/// working there), compared by id. Recomputed on every render from the two
/// independently fetched lists; never persisted.
pub fn available_doctors(all: &[Doctor], assigned: &[ClinicDoctor]) -> Vec<Doctor> {
    all.iter()
        .filter(|doctor| !assigned.iter().any(|a| a.id == doctor.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: i64, name: &str) -> Doctor {
        Doctor {
            id,
            name: name.to_string(),
            specialization: "General".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    fn clinic_doctor(id: i64) -> ClinicDoctor {
        ClinicDoctor {
            id,
            name: format!("Doctor {id}"),
            specialization: "General".to_string(),
            phone: "555-0100".to_string(),
            start_date: "2026-01-01".to_string(),
        }
    }

    #[test]
    fn replace_matches_by_id_not_position() {
        let mut list = vec![doctor(3, "Ada"), doctor(1, "Grace"), doctor(2, "Edsger")];
        assert!(replace_by_id(&mut list, doctor(1, "Grace H.")));
        assert_eq!(list[1].name, "Grace H.");
        assert_eq!(list.len(), 3);
        // Positions of the other entries are untouched.
        assert_eq!(list[0].id, 3);
        assert_eq!(list[2].id, 2);
    }

    #[test]
    fn replace_with_unknown_id_is_a_no_op() {
        let mut list = vec![doctor(1, "Ada")];
        let snapshot = list.clone();
        assert!(!replace_by_id(&mut list, doctor(9, "Nobody")));
        assert_eq!(list, snapshot);
    }

    #[test]
    fn remove_takes_exactly_the_matching_entry() {
        let mut list = vec![clinic_doctor(5), clinic_doctor(7), clinic_doctor(9)];
        assert!(remove_by_id(&mut list, 7));
        assert_eq!(list.iter().map(|d| d.id).collect::<Vec<_>>(), vec![5, 9]);
    }

    #[test]
    fn remove_with_unknown_id_is_a_no_op() {
        let mut list = vec![clinic_doctor(5)];
        assert!(!remove_by_id(&mut list, 7));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn available_doctors_is_the_set_difference_by_id() {
        let all = vec![doctor(1, "Ada"), doctor(2, "Grace"), doctor(3, "Edsger")];
        let assigned = vec![clinic_doctor(2)];

        let available = available_doctors(&all, &assigned);
        assert_eq!(available.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn available_doctors_empty_when_everyone_is_assigned() {
        let all = vec![doctor(1, "Ada"), doctor(2, "Grace")];
        let assigned = vec![clinic_doctor(1), clinic_doctor(2)];
        assert!(available_doctors(&all, &assigned).is_empty());
    }

    #[test]
    fn available_doctors_with_no_assignments_is_everyone() {
        let all = vec![doctor(1, "Ada"), doctor(2, "Grace")];
        let available = available_doctors(&all, &[]);
        assert_eq!(available, all);
    }
}
