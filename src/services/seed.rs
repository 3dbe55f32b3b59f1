use std::collections::BTreeMap;

use crate::models::Activity;

// Fixed startup roster. Chess Club and Tennis Club are relied on by the API tests.
pub fn seed_activities() -> BTreeMap<String, Activity> {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Practice tennis skills and play friendly matches",
                "Tuesdays and Saturdays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Train and compete in inter-school basketball games",
                "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["james@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing, and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and stage school theater productions",
                "Wednesdays, 3:30 PM - 5:30 PM",
                20,
            )
            .with_participants(["mia@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Science Club",
            Activity::new(
                "Run experiments and take part in science fairs",
                "Fridays, 2:00 PM - 3:30 PM",
                14,
            )
            .with_participants(["isabella@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
