use std::fmt;
use std::str::FromStr;

/// Role options offered by the role picker, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    SoftwareEngineer,
    EngineeringManager,
    ArtificialIntelligenceEngineer,
    MachineLearningEngineer,
    BackendEngineer,
    MobileEngineer,
    ProductDesigner,
    FrontendEngineer,
    DataScientist,
    FullStackEngineer,
    ProductManager,
    Designer,
    SoftwareArchitect,
    DevOpsEngineer,
}

impl Role {
    pub const ALL: [Role; 14] = [
        Role::SoftwareEngineer,
        Role::EngineeringManager,
        Role::ArtificialIntelligenceEngineer,
        Role::MachineLearningEngineer,
        Role::BackendEngineer,
        Role::MobileEngineer,
        Role::ProductDesigner,
        Role::FrontendEngineer,
        Role::DataScientist,
        Role::FullStackEngineer,
        Role::ProductManager,
        Role::Designer,
        Role::SoftwareArchitect,
        Role::DevOpsEngineer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::SoftwareEngineer => "Software Engineer",
            Role::EngineeringManager => "Engineering Manager",
            Role::ArtificialIntelligenceEngineer => "Artificial Intelligence Engineer",
            Role::MachineLearningEngineer => "Machine Learning Engineer",
            Role::BackendEngineer => "Backend Engineer",
            Role::MobileEngineer => "Mobile Engineer",
            Role::ProductDesigner => "Product Designer",
            Role::FrontendEngineer => "Frontend Engineer",
            Role::DataScientist => "Data Scientist",
            Role::FullStackEngineer => "Full Stack Engineer",
            Role::ProductManager => "Product Manager",
            Role::Designer => "Designer",
            Role::SoftwareArchitect => "Software Architect",
            Role::DevOpsEngineer => "DevOps Engineer",
        }
    }
}

/// Location options offered by the location picker, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    #[default]
    Seattle,
    UnitedStates,
    Remote,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Seattle, Location::UnitedStates, Location::Remote];

    pub fn label(self) -> &'static str {
        match self {
            Location::Seattle => "Seattle",
            Location::UnitedStates => "United States",
            Location::Remote => "Remote",
        }
    }
}

/// Returned when a label does not name any of the preset options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option '{}'", self.0)
    }
}

impl std::error::Error for UnknownOption {}

impl FromStr for Role {
    type Err = UnknownOption;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOption(wanted.to_string()))
    }
}

impl FromStr for Location {
    type Err = UnknownOption;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Location::ALL
            .into_iter()
            .find(|location| location.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOption(wanted.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The (role, location) pair currently driving the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub role: Role,
    pub location: Location,
}

impl Selection {
    pub fn new(role: Role, location: Location) -> Self {
        Self { role, location }
    }

    pub fn key(&self) -> SearchKey {
        SearchKey::new(self.role.label(), self.location.label())
    }
}

/// Cache and request key for one search: the role and location texts.
///
/// The search component does not validate these; the pickers only ever
/// produce preset labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub role: String,
    pub location: String,
}

impl SearchKey {
    pub fn new(role: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.role, self.location)
    }
}
