use crate::cli::SubmitArgs;
use crate::client::{CourseService as _, HttpCourseService, resolve_base_url};
use crate::options::{CourseOptions, Field};

pub async fn run(args: SubmitArgs) -> anyhow::Result<()> {
    let base_url = resolve_base_url(args.endpoint.as_deref());
    let service = HttpCourseService::new(&base_url)?;

    let options = build_options(&args)?;
    tracing::debug!(?options, "submitting course options");

    // The outcome is diagnostic only. The command succeeds either way.
    match service.create_course(&options).await {
        Ok(body) => tracing::info!(%body, "course created"),
        Err(err) => tracing::error!(?err, "create course failed"),
    }

    Ok(())
}

fn build_options(args: &SubmitArgs) -> anyhow::Result<CourseOptions> {
    let mut options = CourseOptions::default();

    if let Some(prompt) = &args.prompt {
        options.set_field(Field::Prompt, prompt)?;
    }
    if let Some(days) = &args.completion_time_days {
        options.set_field(Field::CompletionTimeDays, days)?;
    }
    if let Some(weight) = args.course_weight {
        options.set_field(Field::CourseWeight, weight.wire_name())?;
    }
    if let Some(level) = args.user_experience {
        options.set_field(Field::UserExperience, level.wire_name())?;
    }
    if let Some(why) = &args.user_why {
        options.set_field(Field::UserWhy, why)?;
    }
    if let Some(prerequisites) = &args.user_prerequisites {
        options.set_field(Field::UserPrerequisites, prerequisites)?;
    }
    if let Some(learner) = args.learner_type {
        options.set_field(Field::LearnerType, learner.wire_name())?;
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CourseWeight, ExperienceLevel};

    fn args() -> SubmitArgs {
        SubmitArgs {
            endpoint: None,
            prompt: None,
            completion_time_days: None,
            course_weight: None,
            user_experience: None,
            user_why: None,
            user_prerequisites: None,
            learner_type: None,
        }
    }

    #[test]
    fn no_flags_build_the_default_record() {
        assert_eq!(build_options(&args()).unwrap(), CourseOptions::default());
    }

    #[test]
    fn each_flag_overrides_its_own_field() {
        let mut args = args();
        args.prompt = Some("Learn Rust".to_owned());
        args.course_weight = Some(CourseWeight::Heavy);
        args.completion_time_days = Some("7".to_owned());

        let options = build_options(&args).unwrap();
        assert_eq!(options.prompt, "Learn Rust");
        assert_eq!(options.course_weight, CourseWeight::Heavy);
        assert_eq!(options.field_text(Field::CompletionTimeDays), "7");
        assert_eq!(options.user_experience, ExperienceLevel::Beginner);
        assert_eq!(options.user_why, "");
    }
}
