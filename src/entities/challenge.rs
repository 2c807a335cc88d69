// 🏁 Savings Challenges - shared goals with participants
//
// Two lists: "my" challenges (created by the user) and "all" (the catalog).
// New challenges always land in "my".

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeTab {
    #[default]
    My,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeMember {
    pub name: String,
    pub surname: String,
}

impl ChallengeMember {
    /// Both name and surname are required
    pub fn new(name: &str, surname: &str) -> Result<Self> {
        if name.trim().is_empty() || surname.trim().is_empty() {
            bail!("Participant needs a name and surname");
        }
        Ok(ChallengeMember {
            name: name.trim().to_string(),
            surname: surname.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub goal: String,
    /// Free text, e.g. "30 days"
    pub duration: String,
    #[serde(default)]
    pub participants: Vec<ChallengeMember>,
}

impl Challenge {
    fn seeded(id: &str, title: &str, description: &str, goal: &str, duration: &str) -> Self {
        Challenge {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            goal: goal.to_string(),
            duration: duration.to_string(),
            participants: Vec::new(),
        }
    }
}

// ============================================================================
// CHALLENGE BOOK
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChallengeBook {
    my: Vec<Challenge>,
    all: Vec<Challenge>,
}

impl ChallengeBook {
    /// Empty "my" list, catalog seeded with the starter challenges
    pub fn new() -> Self {
        ChallengeBook {
            my: Vec::new(),
            all: vec![
                Challenge::seeded(
                    "1",
                    "Run 50 miles in a month",
                    "Jog or run daily to achieve the goal",
                    "Complete 50 miles of running",
                    "30 days",
                ),
                Challenge::seeded(
                    "2",
                    "Save $500 by the end of the quarter",
                    "Budget your expenses and save consistently",
                    "Accumulate $500 in savings",
                    "3 months",
                ),
                Challenge::seeded(
                    "3",
                    "Cook a healthy meal every day for a month",
                    "Explore new recipes and focus on nutritious ingredients",
                    "Prepare a healthy meal daily for 30 days",
                    "30 days",
                ),
            ],
        }
    }

    /// Create a challenge in "my"; title, goal and duration are required
    pub fn create(
        &mut self,
        title: &str,
        description: &str,
        goal: &str,
        duration: &str,
        participants: Vec<ChallengeMember>,
    ) -> Result<String> {
        if title.trim().is_empty() || goal.trim().is_empty() || duration.trim().is_empty() {
            bail!("Challenge needs a title, goal and duration");
        }

        let challenge = Challenge {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            goal: goal.to_string(),
            duration: duration.to_string(),
            participants,
        };
        let id = challenge.id.clone();

        log::debug!("🏁 Created challenge {} ({})", id, challenge.title);
        self.my.push(challenge);
        Ok(id)
    }

    pub fn list(&self, tab: ChallengeTab) -> &[Challenge] {
        match tab {
            ChallengeTab::My => &self.my,
            ChallengeTab::All => &self.all,
        }
    }

    /// Delete from the given tab only
    pub fn delete(&mut self, tab: ChallengeTab, id: &str) -> bool {
        let list = match tab {
            ChallengeTab::My => &mut self.my,
            ChallengeTab::All => &mut self.all,
        };
        let before = list.len();
        list.retain(|c| c.id != id);
        list.len() != before
    }

    /// Add a participant to a challenge in either tab
    pub fn add_participant(&mut self, id: &str, member: ChallengeMember) -> Result<()> {
        let Some(challenge) = self.my.iter_mut().chain(self.all.iter_mut()).find(|c| c.id == id) else {
            bail!("Unknown challenge '{}'", id);
        };
        challenge.participants.push(member);
        Ok(())
    }
}
