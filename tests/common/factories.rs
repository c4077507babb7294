//! Builders for lab model instances with randomized, plausible values.

use euphrosyne::domain::lab::{ParticleType, Participation, Project, Run, StaffUser};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

const FIRST_NAMES: &[&str] = &[
    "Marie", "Pierre", "Irène", "Frédéric", "Lise", "Ada", "Niels", "Rosalind",
];
const LAST_NAMES: &[&str] = &[
    "Curie", "Joliot", "Meitner", "Lovelace", "Bohr", "Franklin", "Perrin",
];
const PROJECT_NAMES: &[&str] = &[
    "Trésor de Tôd",
    "Lyre d'Ur",
    "Statuette d'Isis",
    "Fibules mérovingiennes",
    "Vitraux de Chartres",
];

static NEXT_PROJECT_ID: AtomicU64 = AtomicU64::new(1);

fn pick(choices: &[&str]) -> String {
    choices
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or_default()
        .to_string()
}

fn password() -> String {
    let mut rng = rand::rng();
    (0..16)
        .map(|_| rng.sample(rand::distr::Alphanumeric) as char)
        .collect()
}

pub struct StaffUserFactory;

impl StaffUserFactory {
    pub fn build() -> StaffUser {
        let first_name = pick(FIRST_NAMES);
        let last_name = pick(LAST_NAMES);
        let email = format!("{}.{}@example.com", first_name, last_name).to_lowercase();
        StaffUser {
            first_name,
            last_name,
            email,
            password: password(),
            is_staff: true,
            is_lab_admin: false,
        }
    }
}

pub struct LabAdminUserFactory;

impl LabAdminUserFactory {
    pub fn build() -> StaffUser {
        StaffUser {
            is_lab_admin: true,
            ..StaffUserFactory::build()
        }
    }
}

pub struct ParticipationFactory;

impl ParticipationFactory {
    pub fn build() -> Participation {
        Participation {
            user: StaffUserFactory::build(),
            is_leader: false,
        }
    }

    pub fn build_leader() -> Participation {
        Participation {
            is_leader: true,
            ..Self::build()
        }
    }
}

pub struct ProjectFactory;

impl ProjectFactory {
    pub fn build() -> Project {
        let id = NEXT_PROJECT_ID.fetch_add(1, Ordering::Relaxed);
        Project::new(id, pick(PROJECT_NAMES))
    }

    pub fn build_with_leader() -> Project {
        let mut project = Self::build();
        project
            .add_participation(ParticipationFactory::build_leader())
            .expect("a fresh project has no leader");
        project
    }
}

pub struct RunFactory;

impl RunFactory {
    /// Energy is drawn from 0..=10000 keV in 500 keV steps.
    pub fn build() -> Run {
        Self::build_for(&ProjectFactory::build())
    }

    pub fn build_for(project: &Project) -> Run {
        let mut rng = rand::rng();
        let mut run = Run::new(format!("Run {}", pick(PROJECT_NAMES)), project);
        run.energy_in_kev = Some(rng.random_range(0..=20) * 500);
        run.particle_type = ParticleType::ALL.choose(&mut rng).copied();
        run
    }
}
