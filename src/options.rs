use serde::{Deserialize, Serialize};

// Field names and declaration order are the create-course wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOptions {
    pub prompt: String,
    pub completion_time_days: CompletionTime,
    pub course_weight: CourseWeight,
    pub user_experience: ExperienceLevel,
    pub user_why: String,
    pub user_prerequisites: String,
    pub learner_type: LearnerType,
}

impl Default for CourseOptions {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            completion_time_days: CompletionTime::Days(15),
            course_weight: CourseWeight::Light,
            user_experience: ExperienceLevel::Beginner,
            user_why: String::new(),
            user_prerequisites: String::new(),
            learner_type: LearnerType::Normal,
        }
    }
}

impl CourseOptions {
    pub fn set_field(&mut self, field: Field, raw: &str) -> anyhow::Result<()> {
        match field {
            Field::Prompt => self.prompt = raw.to_owned(),
            Field::CompletionTimeDays => {
                self.completion_time_days = CompletionTime::Raw(raw.to_owned());
            }
            Field::CourseWeight => self.course_weight = CourseWeight::parse(raw)?,
            Field::UserExperience => self.user_experience = ExperienceLevel::parse(raw)?,
            Field::UserWhy => self.user_why = raw.to_owned(),
            Field::UserPrerequisites => self.user_prerequisites = raw.to_owned(),
            Field::LearnerType => self.learner_type = LearnerType::parse(raw)?,
        }
        Ok(())
    }

    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Prompt => self.prompt.clone(),
            Field::CompletionTimeDays => self.completion_time_days.to_string(),
            Field::CourseWeight => self.course_weight.wire_name().to_owned(),
            Field::UserExperience => self.user_experience.wire_name().to_owned(),
            Field::UserWhy => self.user_why.clone(),
            Field::UserPrerequisites => self.user_prerequisites.clone(),
            Field::LearnerType => self.learner_type.wire_name().to_owned(),
        }
    }
}

// Presentation order; the wire order is the struct declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Prompt,
    CompletionTimeDays,
    CourseWeight,
    UserExperience,
    LearnerType,
    UserWhy,
    UserPrerequisites,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Prompt,
        Field::CompletionTimeDays,
        Field::CourseWeight,
        Field::UserExperience,
        Field::LearnerType,
        Field::UserWhy,
        Field::UserPrerequisites,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Prompt => "prompt",
            Field::CompletionTimeDays => "completion_time_days",
            Field::CourseWeight => "course_weight",
            Field::UserExperience => "user_experience",
            Field::LearnerType => "learner_type",
            Field::UserWhy => "user_why",
            Field::UserPrerequisites => "user_prerequisites",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Prompt => "What Do You Want To Learn?",
            Field::CompletionTimeDays => "Completion Time (Days):",
            Field::CourseWeight => "Course Weight:",
            Field::UserExperience => "Experience Level:",
            Field::LearnerType => "Learner Type:",
            Field::UserWhy => "Why are you learning?",
            Field::UserPrerequisites => "Prerequisites you have:",
        }
    }
}

/// Value of the day-count control: the numeric default until first edited,
/// then whatever text the control last reported, verbatim. Untagged, so the
/// untouched default serializes as a bare number and any edit as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletionTime {
    Days(i64),
    Raw(String),
}

impl std::fmt::Display for CompletionTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionTime::Days(days) => write!(f, "{days}"),
            CompletionTime::Raw(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CourseWeight {
    Light,
    Heavy,
}

impl CourseWeight {
    pub const OPTIONS: [CourseWeight; 2] = [CourseWeight::Light, CourseWeight::Heavy];

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw {
            "light" => Ok(CourseWeight::Light),
            "heavy" => Ok(CourseWeight::Heavy),
            other => anyhow::bail!("unsupported course weight: {other:?}"),
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            CourseWeight::Light => "light",
            CourseWeight::Heavy => "heavy",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            CourseWeight::Light => "Light",
            CourseWeight::Heavy => "Heavy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub const OPTIONS: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ];

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "expert" => Ok(ExperienceLevel::Expert),
            other => anyhow::bail!("unsupported experience level: {other:?}"),
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Expert => "expert",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LearnerType {
    Normal,
    Fast,
}

impl LearnerType {
    pub const OPTIONS: [LearnerType; 2] = [LearnerType::Normal, LearnerType::Fast];

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw {
            "normal" => Ok(LearnerType::Normal),
            "fast" => Ok(LearnerType::Fast),
            other => anyhow::bail!("unsupported learner type: {other:?}"),
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            LearnerType::Normal => "normal",
            LearnerType::Fast => "fast",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            LearnerType::Normal => "Normal",
            LearnerType::Fast => "Fast",
        }
    }
}
