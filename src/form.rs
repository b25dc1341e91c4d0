use std::sync::Arc;

use anyhow::Context as _;
use console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::cli::FormArgs;
use crate::client::{CourseService, HttpCourseService, resolve_base_url};
use crate::options::{CourseOptions, CourseWeight, ExperienceLevel, Field, LearnerType};

const SUBMIT_LABEL: &str = "Submit Options";
const QUIT_LABEL: &str = "Quit";

pub async fn run(args: FormArgs) -> anyhow::Result<()> {
    let base_url = resolve_base_url(args.endpoint.as_deref());
    let service: Arc<dyn CourseService> = Arc::new(HttpCourseService::new(&base_url)?);
    tracing::info!(%base_url, "starting course options form");

    let session = FormSession::new(service, tokio::runtime::Handle::current());
    tokio::task::block_in_place(|| run_session(session))
}

// The session owns the record; controls read their current value out of it
// and write back through `edit`, one field per event.
pub struct FormSession {
    options: CourseOptions,
    service: Arc<dyn CourseService>,
    handle: tokio::runtime::Handle,
}

impl FormSession {
    pub fn new(service: Arc<dyn CourseService>, handle: tokio::runtime::Handle) -> Self {
        Self {
            options: CourseOptions::default(),
            service,
            handle,
        }
    }

    pub fn options(&self) -> &CourseOptions {
        &self.options
    }

    pub fn edit(&mut self, field: Field, raw: &str) -> anyhow::Result<()> {
        self.options.set_field(field, raw)
    }

    // Fire and forget: the outcome goes to the log stream only, and edits
    // made after this point do not touch a request already on the wire.
    pub fn submit(&self) -> tokio::task::JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let options = self.options.clone();
        tracing::debug!(?options, "submitting course options");
        self.handle.spawn(async move {
            match service.create_course(&options).await {
                Ok(body) => tracing::info!(%body, "course created"),
                Err(err) => tracing::error!(?err, "create course failed"),
            }
        })
    }
}

fn run_session(mut session: FormSession) -> anyhow::Result<()> {
    let term = Term::stderr();
    let theme = ColorfulTheme::default();

    loop {
        print_summary(&term, session.options())?;
        match prompt_action(&theme)? {
            FormAction::Edit(field) => {
                let raw = prompt_field(&theme, session.options(), field)?;
                session.edit(field, &raw)?;
            }
            FormAction::Submit => {
                session.submit();
            }
            FormAction::Quit => break,
        }
    }

    Ok(())
}

enum FormAction {
    Edit(Field),
    Submit,
    Quit,
}

fn prompt_action(theme: &ColorfulTheme) -> anyhow::Result<FormAction> {
    let mut items: Vec<&str> = Field::ALL.iter().map(|field| field.label()).collect();
    items.push(SUBMIT_LABEL);
    items.push(QUIT_LABEL);

    let choice = Select::with_theme(theme)
        .with_prompt("Course Options")
        .items(&items)
        .default(0)
        .interact()
        .context("read form action")?;

    Ok(match choice {
        idx if idx < Field::ALL.len() => FormAction::Edit(Field::ALL[idx]),
        idx if idx == Field::ALL.len() => FormAction::Submit,
        _ => FormAction::Quit,
    })
}

fn prompt_field(
    theme: &ColorfulTheme,
    options: &CourseOptions,
    field: Field,
) -> anyhow::Result<String> {
    match field {
        Field::Prompt | Field::CompletionTimeDays | Field::UserWhy | Field::UserPrerequisites => {
            Input::<String>::with_theme(theme)
                .with_prompt(field.label())
                .with_initial_text(options.field_text(field))
                .allow_empty(true)
                .interact_text()
                .with_context(|| format!("read {}", field.name()))
        }
        Field::CourseWeight => select_wire_string(
            theme,
            field,
            &CourseWeight::OPTIONS.map(|option| (option.display_label(), option.wire_name())),
            options.course_weight.wire_name(),
        ),
        Field::UserExperience => select_wire_string(
            theme,
            field,
            &ExperienceLevel::OPTIONS.map(|option| (option.display_label(), option.wire_name())),
            options.user_experience.wire_name(),
        ),
        Field::LearnerType => select_wire_string(
            theme,
            field,
            &LearnerType::OPTIONS.map(|option| (option.display_label(), option.wire_name())),
            options.learner_type.wire_name(),
        ),
    }
}

fn select_wire_string(
    theme: &ColorfulTheme,
    field: Field,
    items: &[(&str, &str)],
    current: &str,
) -> anyhow::Result<String> {
    let labels: Vec<&str> = items.iter().map(|(label, _)| *label).collect();
    let default = items
        .iter()
        .position(|(_, wire)| *wire == current)
        .unwrap_or(0);

    let choice = Select::with_theme(theme)
        .with_prompt(field.label())
        .items(&labels)
        .default(default)
        .interact()
        .with_context(|| format!("read {}", field.name()))?;

    Ok(items[choice].1.to_owned())
}

fn print_summary(term: &Term, options: &CourseOptions) -> anyhow::Result<()> {
    term.write_line("")?;
    term.write_line(&style("Course Options").bold().to_string())?;
    for field in Field::ALL {
        term.write_line(&format!(
            "  {:<26} {}",
            field.label(),
            options.field_text(field)
        ))?;
    }
    Ok(())
}
