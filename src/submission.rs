//! Sample Submission
//!
//! The submission form, its validation rules, and the simulated send. There is no
//! backend: a worker thread waits a fixed delay and then resolves success or failure
//! at random, reporting back over a channel that the UI loop polls.

use crate::config::SubmissionConfig;
use flume::{Receiver, Sender};
use rand::Rng;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use validator::{Validate, ValidateUrl, ValidationError};

pub const SUCCESS_MESSAGE: &str =
    "Your sample has been submitted successfully! It will be reviewed shortly.";
pub const FAILURE_MESSAGE: &str = "There was an error submitting your sample. Please try again.";

const MAX_TAG_LENGTH: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SampleForm {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[validate(custom(function = "validate_description"))]
    pub description: String,

    #[validate(length(min = 20, message = "Code snippet must be at least 20 characters long."))]
    pub code: String,

    #[validate(custom(function = "validate_tags"))]
    pub tags: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub repository_url: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub demo_url: String,
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    match title.chars().count() {
        n if n < 10 => Err(validation_error(
            "length",
            "Title must be at least 10 characters long.",
        )),
        n if n > 150 => Err(validation_error("length", "Title cannot exceed 150 characters.")),
        _ => Ok(()),
    }
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    match description.chars().count() {
        n if n < 50 => Err(validation_error(
            "length",
            "Description must be at least 50 characters long.",
        )),
        n if n > 2000 => Err(validation_error(
            "length",
            "Description cannot exceed 2000 characters.",
        )),
        _ => Ok(()),
    }
}

/// Empty, or comma-separated tags of 1 to 20 characters each
fn validate_tags(tags: &str) -> Result<(), ValidationError> {
    if tags.trim().is_empty() {
        return Ok(());
    }
    let valid = tags.split(',').all(|tag| {
        let len = tag.trim().chars().count();
        len > 0 && len <= MAX_TAG_LENGTH
    });
    if valid {
        Ok(())
    } else {
        Err(validation_error(
            "tags",
            "Tags must be comma-separated, each tag 1-20 characters.",
        ))
    }
}

fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() || url.trim().validate_url() {
        Ok(())
    } else {
        Err(validation_error("url", "Must be a valid URL."))
    }
}

impl SampleForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Code => &self.code,
            FormField::Tags => &self.tags,
            FormField::RepositoryUrl => &self.repository_url,
            FormField::DemoUrl => &self.demo_url,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Code => &mut self.code,
            FormField::Tags => &mut self.tags,
            FormField::RepositoryUrl => &mut self.repository_url,
            FormField::DemoUrl => &mut self.demo_url,
        }
    }

    /// Trimmed, non-empty tags
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Runs every rule and returns the first message per failing field
    pub fn field_errors(&self) -> BTreeMap<FormField, String> {
        let mut errors = BTreeMap::new();
        if let Err(validation) = self.validate() {
            for (name, field_errors) in validation.field_errors() {
                let Some(field) = FormField::from_name(name.as_ref()) else {
                    continue;
                };
                let message = field_errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid.", field.label()));
                errors.insert(field, message);
            }
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Code,
    Tags,
    RepositoryUrl,
    DemoUrl,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Description,
        FormField::Code,
        FormField::Tags,
        FormField::RepositoryUrl,
        FormField::DemoUrl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Code => "code",
            FormField::Tags => "tags",
            FormField::RepositoryUrl => "repository_url",
            FormField::DemoUrl => "demo_url",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Sample Title",
            FormField::Description => "Detailed Description",
            FormField::Code => "Code Snippet",
            FormField::Tags => "Tags",
            FormField::RepositoryUrl => "Repository URL (Optional)",
            FormField::DemoUrl => "Live Demo URL (Optional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Title => "e.g., Custom Hook for Theme Toggling",
            FormField::Description => "Explain what your code does, how to use it, and any notable features.",
            FormField::Code => "// Paste your React code here (JSX, TSX, JS)",
            FormField::Tags => "e.g., hooks, ui, animation, typescript",
            FormField::RepositoryUrl => "https://github.com/your-repo",
            FormField::DemoUrl => "https://your-live-demo.com",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            FormField::Title => "A clear and concise title for your sample.",
            FormField::Description => "Provide a thorough explanation.",
            FormField::Code => "The actual code for your sample. Ensure it's well-formatted.",
            FormField::Tags => "Comma-separated list of relevant tags (e.g., React, Hooks, UI, API).",
            FormField::RepositoryUrl => "Link to a GitHub repo if applicable.",
            FormField::DemoUrl => "Link to a live demo if available.",
        }
    }

    /// Multi-line fields accept Enter as a newline
    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Description | FormField::Code)
    }

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted { id: u64 },
    Rejected { id: u64 },
    WorkerFailed { id: u64, error: String },
}

impl SubmissionOutcome {
    pub fn id(&self) -> u64 {
        match self {
            SubmissionOutcome::Accepted { id }
            | SubmissionOutcome::Rejected { id }
            | SubmissionOutcome::WorkerFailed { id, .. } => *id,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(BTreeMap<FormField, String>),

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

/// Sends forms to the simulated backend and collects the outcomes
#[derive(Debug)]
pub struct Submitter {
    delay: Duration,
    success_rate: f64,
    sender: Sender<SubmissionOutcome>,
    receiver: Receiver<SubmissionOutcome>,
    pending: Option<u64>,
    next_id: u64,
}

impl Submitter {
    pub fn new(config: &SubmissionConfig) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            delay: config.delay(),
            success_rate: config.success_rate.clamp(0.0, 1.0),
            sender,
            receiver,
            pending: None,
            next_id: 1,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates `form` and, if valid, starts a simulated send in the background
    pub fn submit(&mut self, form: &SampleForm) -> Result<u64, SubmissionError> {
        if self.is_pending() {
            return Err(SubmissionError::AlreadySubmitting);
        }

        let errors = form.field_errors();
        if !errors.is_empty() {
            debug!(fields = errors.len(), "submission rejected by validation");
            return Err(SubmissionError::Invalid(errors));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(id);

        info!(id, title = %form.title, tags = ?form.tag_list(), "submitting sample");

        let sender = self.sender.clone();
        let delay = self.delay;
        let success_rate = self.success_rate;

        thread::spawn(move || {
            let outcome = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(rt) => {
                    rt.block_on(async { tokio::time::sleep(delay).await });
                    if rand::rng().random::<f64>() < success_rate {
                        SubmissionOutcome::Accepted { id }
                    } else {
                        SubmissionOutcome::Rejected { id }
                    }
                }
                Err(e) => SubmissionOutcome::WorkerFailed {
                    id,
                    error: format!("Runtime error: {}", e),
                },
            };
            let _ = sender.send(outcome);
        });

        Ok(id)
    }

    /// Non-blocking check for the outcome of the pending submission
    pub fn poll(&mut self) -> Option<SubmissionOutcome> {
        while let Ok(outcome) = self.receiver.try_recv() {
            if let Some(outcome) = self.accept(outcome) {
                return Some(outcome);
            }
        }
        None
    }

    /// Ignores outcomes of requests that are no longer pending
    fn accept(&mut self, outcome: SubmissionOutcome) -> Option<SubmissionOutcome> {
        if self.pending == Some(outcome.id()) {
            self.pending = None;
            Some(outcome)
        } else {
            warn!(id = outcome.id(), "discarding stale submission outcome");
            None
        }
    }
}

/// Everything the submit screen needs: field values, focus, errors and status
#[derive(Debug)]
pub struct SubmitFormState {
    pub form: SampleForm,
    pub focused: FormField,
    pub errors: BTreeMap<FormField, String>,
    pub status: SubmissionStatus,
    submitter: Submitter,
}

impl SubmitFormState {
    pub fn new(config: &SubmissionConfig) -> Self {
        Self {
            form: SampleForm::default(),
            focused: FormField::Title,
            errors: BTreeMap::new(),
            status: SubmissionStatus::Idle,
            submitter: Submitter::new(config),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        self.form.value_mut(self.focused).push(c);
        self.errors.remove(&self.focused);
    }

    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.form.value_mut(self.focused).pop();
    }

    /// Validates and starts the send. Returns false when nothing was sent.
    pub fn submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = SubmissionStatus::Idle;

        match self.submitter.submit(&self.form) {
            Ok(_) => {
                self.errors.clear();
                self.status = SubmissionStatus::Submitting;
                true
            }
            Err(SubmissionError::Invalid(errors)) => {
                if let Some(first) = errors.keys().next() {
                    self.focused = *first;
                }
                self.errors = errors;
                false
            }
            Err(SubmissionError::AlreadySubmitting) => false,
        }
    }

    /// Applies a finished outcome, if any. Returns true when the status changed.
    pub fn poll(&mut self) -> bool {
        match self.submitter.poll() {
            Some(outcome) => {
                self.resolve(outcome);
                true
            }
            None => false,
        }
    }

    fn resolve(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Accepted { id } => {
                info!(id, "sample submission accepted");
                self.status = SubmissionStatus::Success(SUCCESS_MESSAGE.to_string());
                self.form = SampleForm::default();
                self.focused = FormField::Title;
            }
            SubmissionOutcome::Rejected { id } => {
                warn!(id, "sample submission failed");
                self.status = SubmissionStatus::Error(FAILURE_MESSAGE.to_string());
            }
            SubmissionOutcome::WorkerFailed { id, error } => {
                warn!(id, %error, "submission worker failed");
                self.status = SubmissionStatus::Error(FAILURE_MESSAGE.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SampleForm {
        SampleForm {
            title: "Theme toggle hook".to_string(),
            description: "A custom hook that toggles between light and dark themes and remembers the choice."
                .to_string(),
            code: "export const useTheme = () => useState('light');".to_string(),
            tags: "hooks, theme".to_string(),
            repository_url: String::new(),
            demo_url: "https://example.com/demo".to_string(),
        }
    }

    /// Polls like the UI loop does until the outcome lands or five seconds pass
    fn poll_until_resolved(state: &mut SubmitFormState) -> bool {
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while std::time::Instant::now() < deadline {
            if state.poll() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    fn config(success_rate: f64) -> SubmissionConfig {
        SubmissionConfig {
            delay_ms: 0,
            success_rate,
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(valid_form().field_errors().is_empty());
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let errors = SampleForm::default().field_errors();
        assert!(errors.contains_key(&FormField::Title));
        assert!(errors.contains_key(&FormField::Description));
        assert!(errors.contains_key(&FormField::Code));
        assert!(!errors.contains_key(&FormField::Tags));
        assert!(!errors.contains_key(&FormField::RepositoryUrl));
        assert!(!errors.contains_key(&FormField::DemoUrl));
    }

    #[test]
    fn title_length_bounds() {
        let mut form = valid_form();
        form.title = "Too short".to_string();
        assert_eq!(
            form.field_errors().get(&FormField::Title).map(String::as_str),
            Some("Title must be at least 10 characters long.")
        );
        form.title = "x".repeat(151);
        assert_eq!(
            form.field_errors().get(&FormField::Title).map(String::as_str),
            Some("Title cannot exceed 150 characters.")
        );
        form.title = "x".repeat(150);
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn description_length_messages() {
        let mut form = valid_form();
        form.description = "Too short to explain anything.".to_string();
        assert_eq!(
            form.field_errors().get(&FormField::Description).map(String::as_str),
            Some("Description must be at least 50 characters long.")
        );
        form.description = "x".repeat(2001);
        assert_eq!(
            form.field_errors().get(&FormField::Description).map(String::as_str),
            Some("Description cannot exceed 2000 characters.")
        );
    }

    #[test]
    fn tag_rules() {
        assert!(validate_tags("").is_ok());
        assert!(validate_tags("react, hooks").is_ok());
        assert!(validate_tags("react,,hooks").is_err());
        assert!(validate_tags(&"x".repeat(21)).is_err());

        let mut form = valid_form();
        form.tags = "react, ".to_string();
        let errors = form.field_errors();
        assert_eq!(
            errors.get(&FormField::Tags).map(String::as_str),
            Some("Tags must be comma-separated, each tag 1-20 characters.")
        );
    }

    #[test]
    fn url_rules() {
        assert!(validate_optional_url("").is_ok());
        assert!(validate_optional_url("https://github.com/your-repo").is_ok());
        assert!(validate_optional_url("not a url").is_err());

        let mut form = valid_form();
        form.repository_url = "github dot com".to_string();
        assert_eq!(
            form.field_errors().get(&FormField::RepositoryUrl).map(String::as_str),
            Some("Must be a valid URL.")
        );
    }

    #[test]
    fn tag_list_trims_entries() {
        assert_eq!(valid_form().tag_list(), vec!["hooks", "theme"]);
    }

    #[test]
    fn invalid_form_is_not_sent() {
        let mut state = SubmitFormState::new(&config(1.0));
        state.focused = FormField::DemoUrl;
        assert!(!state.submit());
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(state.focused, FormField::Title);
        assert!(state.errors.contains_key(&FormField::Code));
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut state = SubmitFormState::new(&config(1.0));
        state.form = valid_form();
        assert!(state.submit());
        assert!(state.is_submitting());
        assert!(!state.submit(), "second submit while pending is ignored");

        assert!(poll_until_resolved(&mut state));
        assert_eq!(state.status, SubmissionStatus::Success(SUCCESS_MESSAGE.to_string()));
        assert_eq!(state.form, SampleForm::default());
    }

    #[test]
    fn failed_submission_keeps_the_values() {
        let mut state = SubmitFormState::new(&config(0.0));
        state.form = valid_form();
        assert!(state.submit());
        assert!(poll_until_resolved(&mut state));
        assert_eq!(state.status, SubmissionStatus::Error(FAILURE_MESSAGE.to_string()));
        assert_eq!(state.form, valid_form());
    }

    #[test]
    fn delayed_outcome_arrives_through_poll() {
        let mut state = SubmitFormState::new(&SubmissionConfig {
            delay_ms: 10,
            success_rate: 1.0,
        });
        state.form = valid_form();
        assert!(state.submit());
        thread::sleep(Duration::from_millis(500));

        assert!(state.poll());
        assert_eq!(state.status, SubmissionStatus::Success(SUCCESS_MESSAGE.to_string()));
        state.insert_char('!');
        assert_eq!(state.form.title, "!");
    }

    #[test]
    fn typing_is_ignored_while_submitting() {
        let mut state = SubmitFormState::new(&SubmissionConfig {
            delay_ms: 60_000,
            success_rate: 1.0,
        });
        state.form = valid_form();
        assert!(state.submit());
        state.insert_char('!');
        assert_eq!(state.form.title, valid_form().title);
        assert!(!state.poll());
    }

    #[test]
    fn field_focus_wraps() {
        assert_eq!(FormField::DemoUrl.next(), FormField::Title);
        assert_eq!(FormField::Title.previous(), FormField::DemoUrl);
        assert_eq!(FormField::from_name("repository_url"), Some(FormField::RepositoryUrl));
    }
}
