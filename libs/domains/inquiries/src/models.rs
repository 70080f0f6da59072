use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Collection every inquiry is written to
pub const INQUIRY_COLLECTION: &str = "inquiry";

/// Contact-form submission as it arrives on the wire.
///
/// Every field is optional at the type level so that a missing required field is
/// reported alongside length and format violations instead of aborting
/// deserialization on the first one.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct InquiryPayload {
    /// Contact name, 2-120 characters
    #[validate(required, length(min = 2, max = 120))]
    #[schema(required = true, example = "Jo Smith")]
    pub name: Option<String>,
    /// Reply address
    #[validate(required, email)]
    #[schema(required = true, example = "jo@example.com")]
    pub email: Option<String>,
    /// Company, up to 150 characters
    #[validate(length(max = 150))]
    pub company: Option<String>,
    /// Requested service category (e.g. a catalog id)
    #[schema(example = "web-dev")]
    pub service: Option<String>,
    /// Inquiry body, 10-2000 characters
    #[validate(required, length(min = 10, max = 2000))]
    #[schema(required = true, example = "Interested in a new website redesign.")]
    pub message: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

impl InquiryPayload {
    /// Field rules plus a reply address whose domain has at least one dot.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        let email_ok = errors.field_errors().contains_key("email")
            || self.email.as_deref().is_none_or(has_dotted_domain);
        if !email_ok {
            errors.add("email", ValidationError::new("email"));
        }

        into_result(errors)
    }
}

fn has_dotted_domain(email: &str) -> bool {
    email.rsplit_once('@').is_some_and(|(_, domain)| {
        domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    })
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Request body of `POST /inquiries`.
///
/// Reads [`InquiryPayload`] leniently: a text field holding another JSON type
/// is treated as absent and reported as a `type` error next to every other
/// failing field, instead of rejecting the whole body.
#[derive(Debug, Clone, Default)]
pub struct InquiryForm {
    pub payload: InquiryPayload,
    mistyped: Vec<&'static str>,
}

impl InquiryForm {
    pub fn into_payload(self) -> InquiryPayload {
        self.payload
    }
}

#[derive(Deserialize)]
struct RawInquiry {
    name: Option<Value>,
    email: Option<Value>,
    company: Option<Value>,
    service: Option<Value>,
    message: Option<Value>,
    budget: Option<Value>,
    timeline: Option<Value>,
}

impl<'de> Deserialize<'de> for InquiryForm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawInquiry::deserialize(deserializer)?;

        let mut mistyped = Vec::new();
        let mut text = |field: &'static str, value: Option<Value>| match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => {
                mistyped.push(field);
                None
            }
        };

        let payload = InquiryPayload {
            name: text("name", raw.name),
            email: text("email", raw.email),
            company: text("company", raw.company),
            service: text("service", raw.service),
            message: text("message", raw.message),
            budget: text("budget", raw.budget),
            timeline: text("timeline", raw.timeline),
        };

        Ok(Self { payload, mistyped })
    }
}

impl Validate for InquiryForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.payload.check().err().unwrap_or_else(ValidationErrors::new);

        for &field in &self.mistyped {
            // The value was present, so `required` and friends do not apply
            errors.errors_mut().remove(field);

            let mut error = ValidationError::new("type");
            error.message = Some("expected a string".into());
            errors.add(field, error);
        }

        into_result(errors)
    }
}

/// A validated inquiry, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

impl TryFrom<InquiryPayload> for Inquiry {
    type Error = ValidationErrors;

    fn try_from(payload: InquiryPayload) -> Result<Self, Self::Error> {
        payload.check()?;

        // `required` rules above guarantee these are present
        Ok(Self {
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            company: payload.company,
            service: payload.service,
            message: payload.message.unwrap_or_default(),
            budget: payload.budget,
            timeline: payload.timeline,
        })
    }
}

/// Response body for a stored inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InquirySubmitted {
    #[schema(example = "success")]
    pub status: String,
    /// Identifier assigned by the document store
    #[schema(example = "6650c2f1e4b0a1b2c3d4e5f6")]
    pub id: String,
}

impl InquirySubmitted {
    pub fn success(id: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            id: id.into(),
        }
    }
}
