use serde::Serialize;

// One extracurricular offering. The activity name is the registry key, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for p in participants {
            let p = p.into();
            if !self.is_registered(&p) {
                self.participants.push(p);
            }
        }
        self
    }

    pub fn is_registered(&self, participant_id: &str) -> bool {
        self.participants.iter().any(|p| p == participant_id)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_participants_skips_duplicates() {
        let a = Activity::new("d", "s", 3).with_participants(["a@x.edu", "b@x.edu", "a@x.edu"]);
        assert_eq!(a.participants, vec!["a@x.edu", "b@x.edu"]);
        assert!(!a.is_full());
    }

    #[test]
    fn serializes_with_flat_field_names() {
        let a = Activity::new("Chess", "Fridays", 2).with_participants(["a@x.edu"]);
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["description"], "Chess");
        assert_eq!(v["schedule"], "Fridays");
        assert_eq!(v["max_participants"], 2);
        assert_eq!(v["participants"][0], "a@x.edu");
    }
}
