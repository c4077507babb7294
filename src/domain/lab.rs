use crate::domain::model::ObjectGroup;
use crate::utils::error::LabError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 專案狀態，以整數代碼儲存
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub enum ProjectStatus {
    #[default]
    ToSchedule = 1,
    Scheduled = 11,
    Ongoing = 21,
    Finished = 31,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::ToSchedule,
        ProjectStatus::Scheduled,
        ProjectStatus::Ongoing,
        ProjectStatus::Finished,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::ToSchedule => "To schedule",
            ProjectStatus::Scheduled => "Scheduled",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Finished => "Finished",
        }
    }

    pub fn choices() -> Vec<(i32, &'static str)> {
        Self::ALL.iter().map(|s| (s.code(), s.label())).collect()
    }
}

impl TryFrom<i32> for ProjectStatus {
    type Error = LabError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| LabError::ProcessingError {
                message: format!("Unknown project status code: {}", code),
            })
    }
}

impl From<ProjectStatus> for i32 {
    fn from(status: ProjectStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_staff: bool,
    pub is_lab_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    pub user: StaffUser,
    pub is_leader: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub status: ProjectStatus,
    pub participations: Vec<Participation>,
    pub created: DateTime<Utc>,
}

impl Project {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: ProjectStatus::default(),
            participations: Vec::new(),
            created: Utc::now(),
        }
    }

    pub fn leader(&self) -> Option<&Participation> {
        self.participations.iter().find(|p| p.is_leader)
    }

    /// 每個專案最多一位負責人
    pub fn add_participation(&mut self, participation: Participation) -> Result<(), LabError> {
        if participation.is_leader && self.leader().is_some() {
            return Err(LabError::ProcessingError {
                message: format!("Project '{}' already has a leader", self.name),
            });
        }
        self.participations.push(participation);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleType {
    Proton,
    Alpha,
    Deuton,
}

impl ParticleType {
    pub const ALL: [ParticleType; 3] = [
        ParticleType::Proton,
        ParticleType::Alpha,
        ParticleType::Deuton,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParticleType::Proton => "Proton",
            ParticleType::Alpha => "Alpha particle",
            ParticleType::Deuton => "Deuton",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub label: String,
    pub project_id: u64,
    pub energy_in_kev: Option<u32>,
    pub particle_type: Option<ParticleType>,
    pub object_groups: Vec<ObjectGroup>,
}

impl Run {
    pub fn new(label: impl Into<String>, project: &Project) -> Self {
        Self {
            label: label.into(),
            project_id: project.id,
            energy_in_kev: None,
            particle_type: None,
            object_groups: Vec::new(),
        }
    }

    pub fn add_object_group(&mut self, object_group: ObjectGroup) {
        tracing::debug!(
            "Adding object group '{}' to run '{}'",
            object_group.label,
            self.label
        );
        self.object_groups.push(object_group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first_name: &str) -> StaffUser {
        StaffUser {
            first_name: first_name.to_string(),
            last_name: "Curie".to_string(),
            email: format!("{}.curie@example.com", first_name.to_lowercase()),
            password: "password".to_string(),
            is_staff: true,
            is_lab_admin: false,
        }
    }

    #[test]
    fn test_project_status_choices() {
        assert_eq!(
            ProjectStatus::choices(),
            vec![
                (1, "To schedule"),
                (11, "Scheduled"),
                (21, "Ongoing"),
                (31, "Finished"),
            ]
        );
        assert_eq!(ProjectStatus::default(), ProjectStatus::ToSchedule);
    }

    #[test]
    fn test_project_status_codes() {
        assert_eq!(ProjectStatus::try_from(21).unwrap(), ProjectStatus::Ongoing);
        assert!(ProjectStatus::try_from(2).is_err());

        assert_eq!(serde_json::to_string(&ProjectStatus::Finished).unwrap(), "31");
        let status: ProjectStatus = serde_json::from_str("11").unwrap();
        assert_eq!(status, ProjectStatus::Scheduled);
        assert!(serde_json::from_str::<ProjectStatus>("4").is_err());
    }

    #[test]
    fn test_project_single_leader() {
        let mut project = Project::new(1, "Lyre d'Ur");
        assert!(project.leader().is_none());

        project
            .add_participation(Participation {
                user: user("Marie"),
                is_leader: true,
            })
            .unwrap();
        project
            .add_participation(Participation {
                user: user("Pierre"),
                is_leader: false,
            })
            .unwrap();
        assert_eq!(project.leader().unwrap().user.first_name, "Marie");

        let second_leader = Participation {
            user: user("Irene"),
            is_leader: true,
        };
        assert!(project.add_participation(second_leader).is_err());
        assert_eq!(project.participations.len(), 2);
    }

    #[test]
    fn test_run_object_groups() {
        let project = Project::new(7, "Statuette");
        let mut run = Run::new("Run 1", &project);
        assert_eq!(run.project_id, 7);

        run.add_object_group(ObjectGroup::new("Statuette", 1).unwrap());
        assert_eq!(run.object_groups.len(), 1);
        assert_eq!(ParticleType::Alpha.label(), "Alpha particle");
    }
}
