use clap::{Args, Parser, Subcommand};

use crate::options::{CourseWeight, ExperienceLevel, LearnerType};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Form(FormArgs),
    Submit(SubmitArgs),
}

#[derive(Debug, Args)]
pub struct FormArgs {
    /// Base URL of the course service (must be http/https).
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Base URL of the course service (must be http/https).
    #[arg(long)]
    pub endpoint: Option<String>,

    /// What do you want to learn?
    #[arg(long)]
    pub prompt: Option<String>,

    /// Target completion time in days.
    #[arg(long)]
    pub completion_time_days: Option<String>,

    /// How dense the course should be.
    #[arg(long, value_enum)]
    pub course_weight: Option<CourseWeight>,

    /// Prior experience with the subject.
    #[arg(long, value_enum)]
    pub user_experience: Option<ExperienceLevel>,

    /// Why are you learning?
    #[arg(long)]
    pub user_why: Option<String>,

    /// Prerequisites you already have.
    #[arg(long)]
    pub user_prerequisites: Option<String>,

    /// Pace the course should assume.
    #[arg(long, value_enum)]
    pub learner_type: Option<LearnerType>,
}
