use serde::{Deserialize, Serialize};

/// A schedule defined by a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Schedule name, unique within its repository
    pub name: String,

    /// Cron expression driving the schedule
    pub cron_schedule: String,

    /// Optional execution timezone
    #[serde(default)]
    pub execution_timezone: Option<String>,
}

/// A sensor defined by a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    /// Sensor name, unique within its repository
    pub name: String,

    /// Optional human-readable description
    #[serde(default)]
    pub description: Option<String>,
}

/// A repository definition nested inside a code location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name, unique within its location
    pub name: String,

    /// Schedules owned by this repository
    #[serde(default)]
    pub schedules: Vec<Schedule>,

    /// Sensors owned by this repository
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

/// Derived, ephemeral addressable unit: one (location, repository) pair
///
/// Never persisted; recomputed from the entry store on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOption {
    /// Name of the code location the repository lives in
    pub location_name: String,

    /// Repository name
    pub repository_name: String,

    /// Schedules owned by the repository
    pub schedules: Vec<Schedule>,

    /// Sensors owned by the repository
    pub sensors: Vec<Sensor>,
}

impl RepositoryOption {
    /// Composite sort key: `location_name:repository_name`
    pub fn sort_key(&self) -> String {
        format!("{}:{}", self.location_name, self.repository_name)
    }
}
