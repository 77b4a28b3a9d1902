use inquire::error::CustomUserError;
use inquire::validator::Validation;
use inquire::{Select, Text};

use crate::args::Options;
use crate::template::Template;
use crate::{warn, Result};

pub const NAME_PROMPT: &str = "Please specify a name for your project";
pub const TEMPLATE_PROMPT: &str = "Please choose a correct template value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidName {
    #[error("The project name must be provided")]
    Empty,
    #[error("Your project's name cannot have spaces or special chars")]
    NotAlphanumeric,
}

/// Accepts names matching `^[0-9a-zA-Z]+$`.
///
/// # Errors
///
/// Returns the reason the name was rejected.
pub fn validate_project_name(name: &str) -> Result<(), InvalidName> {
    if name.is_empty() {
        Err(InvalidName::Empty)
    } else if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        Err(InvalidName::NotAlphanumeric)
    } else {
        Ok(())
    }
}

/// Options after every field has been filled in and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub project_name: String,
    pub template: Template,
}

/// Source of answers for missing or invalid options.
pub trait Prompter {
    /// Asks for a line of text, repeating until `validate` accepts it.
    fn text(
        &mut self,
        message: &str,
        validate: fn(&str) -> Result<(), InvalidName>,
    ) -> Result<String>;

    /// Asks the user to pick one of `choices`, with the cursor starting at
    /// `default`.
    fn select(&mut self, message: &str, choices: Vec<Template>, default: usize)
        -> Result<Template>;
}

/// Terminal prompts.
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(
        &mut self,
        message: &str,
        validate: fn(&str) -> Result<(), InvalidName>,
    ) -> Result<String> {
        let answer = Text::new(message)
            .with_validator(move |input: &str| -> Result<Validation, CustomUserError> {
                Ok(match validate(input) {
                    Ok(()) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.into()),
                })
            })
            .prompt()?;

        Ok(answer)
    }

    fn select(
        &mut self,
        message: &str,
        choices: Vec<Template>,
        default: usize,
    ) -> Result<Template> {
        Ok(Select::new(message, choices)
            .with_starting_cursor(default)
            .prompt()?)
    }
}

/// Fills in whatever the command line left out.
///
/// # Errors
///
/// Returns [`crate::Error::Prompt`] if a prompt could not be answered.
pub fn complete_options(options: Options, prompter: &mut impl Prompter) -> Result<ProjectOptions> {
    let project_name = match options.project_name {
        Some(name) if validate_project_name(&name).is_ok() => name,
        supplied => {
            if let Some(name) = supplied {
                if let Err(e) = validate_project_name(&name) {
                    warn!("Invalid project name \"{name}\": {e}");
                }
            }
            prompter.text(NAME_PROMPT, validate_project_name)?
        }
    };

    let template = match options.template {
        None => Template::first(),
        Some(name) => match name.parse::<Template>() {
            Ok(t) => t,
            Err(_) => prompter.select(TEMPLATE_PROMPT, Template::all(), 0)?,
        },
    };

    Ok(ProjectOptions {
        project_name,
        template,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Answers prompts from a script and remembers what was asked.
    #[derive(Default)]
    struct ScriptedPrompter {
        answers: VecDeque<String>,
        pick: Option<usize>,
        asked: Vec<String>,
        rejected: Vec<(String, InvalidName)>,
        offered: Option<(Vec<Template>, usize)>,
    }

    impl ScriptedPrompter {
        fn answering(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn text(
            &mut self,
            message: &str,
            validate: fn(&str) -> Result<(), InvalidName>,
        ) -> Result<String> {
            self.asked.push(message.to_string());
            loop {
                let answer = self
                    .answers
                    .pop_front()
                    .ok_or(inquire::InquireError::OperationInterrupted)?;
                match validate(&answer) {
                    Ok(()) => return Ok(answer),
                    Err(e) => self.rejected.push((answer, e)),
                }
            }
        }

        fn select(
            &mut self,
            message: &str,
            choices: Vec<Template>,
            default: usize,
        ) -> Result<Template> {
            self.asked.push(message.to_string());
            let picked = choices[self.pick.unwrap_or(default)];
            self.offered = Some((choices, default));
            Ok(picked)
        }
    }

    fn options(name: Option<&str>, template: Option<&str>) -> Options {
        Options {
            project_name: name.map(String::from),
            template: template.map(String::from),
        }
    }

    #[test]
    fn alphanumeric_names_are_accepted() {
        for name in ["app", "MyApp", "app2", "42", "A1b2C3"] {
            assert_eq!(validate_project_name(name), Ok(()), "{name}");
        }
    }

    #[test]
    fn other_names_are_rejected() {
        assert_eq!(validate_project_name(""), Err(InvalidName::Empty));
        for name in ["my app", " app", "my-app", "my_app", "app.js", "café", "app\t"] {
            assert_eq!(
                validate_project_name(name),
                Err(InvalidName::NotAlphanumeric),
                "{name}"
            );
        }
    }

    proptest! {
        #[test]
        fn any_alphanumeric_name_is_accepted(name in "[0-9a-zA-Z]{1,64}") {
            prop_assert_eq!(validate_project_name(&name), Ok(()));
        }

        #[test]
        fn any_name_with_another_char_is_rejected(
            head in "[0-9a-zA-Z]{0,16}",
            bad in any::<char>().prop_filter("outside [0-9a-zA-Z]", |c| !c.is_ascii_alphanumeric()),
            tail in "[0-9a-zA-Z]{0,16}",
        ) {
            let name = format!("{head}{bad}{tail}");
            prop_assert_eq!(validate_project_name(&name), Err(InvalidName::NotAlphanumeric));
        }
    }

    #[test]
    fn complete_options_are_not_prompted() {
        let mut prompter = ScriptedPrompter::default();
        let done = complete_options(options(Some("api"), Some("graphQL")), &mut prompter).unwrap();

        assert_eq!(
            done,
            ProjectOptions {
                project_name: "api".into(),
                template: Template::GraphQl
            }
        );
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn missing_template_defaults_without_prompting() {
        let mut prompter = ScriptedPrompter::default();
        let done = complete_options(options(Some("api"), None), &mut prompter).unwrap();

        assert_eq!(done.template, Template::RestApi);
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn missing_name_is_prompted_until_valid() {
        let mut prompter = ScriptedPrompter::answering(&["", "my app", "my-app", "myapp"]);
        let done = complete_options(options(None, None), &mut prompter).unwrap();

        assert_eq!(done.project_name, "myapp");
        assert_eq!(prompter.asked, vec![NAME_PROMPT.to_string()]);
        assert_eq!(
            prompter.rejected,
            vec![
                (String::new(), InvalidName::Empty),
                ("my app".into(), InvalidName::NotAlphanumeric),
                ("my-app".into(), InvalidName::NotAlphanumeric),
            ]
        );
    }

    #[test]
    fn invalid_supplied_name_is_prompted() {
        let mut prompter = ScriptedPrompter::answering(&["fixed"]);
        let done = complete_options(options(Some("bad name!"), None), &mut prompter).unwrap();

        assert_eq!(done.project_name, "fixed");
        assert_eq!(prompter.asked, vec![NAME_PROMPT.to_string()]);
    }

    #[test]
    fn unknown_template_offers_a_choice_defaulting_to_first() {
        let mut prompter = ScriptedPrompter::default();
        let done = complete_options(options(Some("api"), Some("angular")), &mut prompter).unwrap();

        assert_eq!(done.template, Template::RestApi);
        assert_eq!(prompter.asked, vec![TEMPLATE_PROMPT.to_string()]);
        assert_eq!(prompter.offered, Some((Template::all(), 0)));
    }

    #[test]
    fn picked_template_is_used() {
        let mut prompter = ScriptedPrompter {
            pick: Some(1),
            ..Default::default()
        };
        let done = complete_options(options(Some("api"), Some("rest")), &mut prompter).unwrap();

        assert_eq!(done.template, Template::GraphQl);
    }

    #[test]
    fn unanswered_prompt_is_a_validation_error() {
        let mut prompter = ScriptedPrompter::default();
        let err = complete_options(options(None, None), &mut prompter).unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::Validation);
    }
}
