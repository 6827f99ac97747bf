use serde::Serialize;
use thiserror::Error;

use crate::analytics;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),
    #[error("could not serialize form: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A form that is only checked for presence of its required fields.
pub trait FormModel: Serialize {
    /// Analytics name of the form.
    const NAME: &'static str;

    fn missing_fields(&self) -> Vec<&'static str>;

    fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require(missing: &mut Vec<&'static str>, field: &'static str, value: &str) {
    if blank(value) {
        missing.push(field);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct JobApplication {
    pub vacancy: String,
    pub name: String,
    pub phone: String,
    pub experience: String,
    pub about: String,
}

impl FormModel for JobApplication {
    const NAME: &'static str = "job_application";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "vacancy", &self.vacancy);
        require(&mut missing, "name", &self.name);
        require(&mut missing, "phone", &self.phone);
        require(&mut missing, "experience", &self.experience);
        missing
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReviewForm {
    pub name: String,
    /// 0 until a star is picked.
    pub rating: u8,
    pub text: String,
}

impl FormModel for ReviewForm {
    const NAME: &'static str = "review";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "name", &self.name);
        if !(1..=5).contains(&self.rating) {
            missing.push("rating");
        }
        require(&mut missing, "text", &self.text);
        missing
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub name: String,
    pub phone: String,
    pub event_type: String,
    pub guests: String,
    pub date: String,
    pub comment: String,
}

impl FormModel for QuoteRequest {
    const NAME: &'static str = "quote_request";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "name", &self.name);
        require(&mut missing, "phone", &self.phone);
        require(&mut missing, "event_type", &self.event_type);
        require(&mut missing, "guests", &self.guests);
        missing
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CallbackRequest {
    pub name: String,
    pub phone: String,
}

impl FormModel for CallbackRequest {
    const NAME: &'static str = "callback";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        require(&mut missing, "name", &self.name);
        require(&mut missing, "phone", &self.phone);
        missing
    }
}

/// Pretty JSON of a complete form, ready for the console.
pub fn prepare_submission<F: FormModel>(form: &F) -> Result<String, FormError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(FormError::Incomplete(missing));
    }
    Ok(serde_json::to_string_pretty(form)?)
}

/// Nothing is sent anywhere: the payload goes to the browser console and
/// an analytics event records that the form was used.
pub fn submit<F: FormModel>(form: &F) -> Result<(), FormError> {
    let json = prepare_submission(form)?;
    gloo_console::log!(format!("{} submitted:", F::NAME), json);
    analytics::form_submit(F::NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let form = CallbackRequest { name: "  ".into(), phone: "+7 900".into() };
        assert_eq!(form.missing_fields(), vec!["name"]);
        assert!(!form.is_complete());
    }

    #[test]
    fn review_needs_a_star() {
        let mut review = ReviewForm { name: "Оля".into(), rating: 0, text: "Отлично".into() };
        assert_eq!(review.missing_fields(), vec!["rating"]);
        review.rating = 6;
        assert!(!review.is_complete());
        review.rating = 5;
        assert!(review.is_complete());
    }

    #[test]
    fn optional_fields_are_optional() {
        let quote = QuoteRequest {
            name: "Дмитрий".into(),
            phone: "89001234567".into(),
            event_type: "Корпоратив".into(),
            guests: "12".into(),
            ..Default::default()
        };
        assert!(quote.is_complete());

        let job = JobApplication {
            vacancy: "istopnik".into(),
            name: "Пётр".into(),
            phone: "89001234567".into(),
            experience: "3 года".into(),
            about: String::new(),
        };
        assert!(job.is_complete());
    }

    #[test]
    fn incomplete_form_lists_every_missing_field() {
        let err = prepare_submission(&JobApplication::default()).unwrap_err();
        match err {
            FormError::Incomplete(fields) => {
                assert_eq!(fields, vec!["vacancy", "name", "phone", "experience"])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn complete_form_serializes_its_fields() {
        let json = prepare_submission(&CallbackRequest { name: "Анна".into(), phone: "+7 921".into() }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Анна");
        assert_eq!(value["phone"], "+7 921");
    }
}
