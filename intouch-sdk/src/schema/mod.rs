//! Declarative payload schemas.
//!
//! Each gateway payload has a [`Schema`]: a static list of [`Field`]s, each
//! with a presence requirement and a [`Rule`]. [`Schema::validate`] checks a
//! JSON value against it and returns a copy with unknown keys stripped, or a
//! [`ValidationError`] listing every violation with its field path.
//!
//! `null` on an optional field is treated as absent.

mod cashin;
mod cashout;
mod response;

use std::fmt;

use serde_json::{Map, Value};

pub use cashin::{CASHIN_MOOV_CI, CASHIN_MTN_CI, CASHIN_OM_CI, CASHIN_WAVE_CI, cashin_request};
pub use cashout::{
    CASHOUT_INFOS, CASHOUT_MOOV_CI, CASHOUT_MTN_CI, CASHOUT_OM_CI, CASHOUT_OM_INFOS,
    CASHOUT_WAVE_CI, CASHOUT_WAVE_INFOS, cashout_request,
};
pub use response::{BALANCE_REQUEST, BALANCE_RESPONSE, CASHIN_RESPONSE, CASHOUT_RESPONSE};

/// A JSON object shape.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub required: bool,
    pub rule: Rule,
}

impl Field {
    pub const fn required(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            required: true,
            rule,
        }
    }

    pub const fn optional(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            required: false,
            rule,
        }
    }
}

#[derive(Debug)]
pub enum Rule {
    String,
    Number,
    /// A number strictly greater than zero.
    PositiveNumber,
    /// A string parseable as an absolute URL.
    Url,
    Email,
    /// Exactly this string.
    Literal(&'static str),
    /// One of these strings.
    OneOf(&'static [&'static str]),
    Object(&'static Schema),
}

/// A single constraint a field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Required,
    ExpectedString,
    ExpectedNumber,
    ExpectedObject,
    NotPositive,
    InvalidUrl,
    InvalidEmail,
    Literal(&'static str),
    OneOf(&'static [&'static str]),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => f.write_str("is required"),
            Constraint::ExpectedString => f.write_str("must be a string"),
            Constraint::ExpectedNumber => f.write_str("must be a number"),
            Constraint::ExpectedObject => f.write_str("must be an object"),
            Constraint::NotPositive => f.write_str("must be greater than 0"),
            Constraint::InvalidUrl => f.write_str("must be a valid url"),
            Constraint::InvalidEmail => f.write_str("must be a valid email"),
            Constraint::Literal(expected) => write!(f, "must be `{expected}`"),
            Constraint::OneOf(allowed) => write!(f, "must be one of {}", allowed.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted path to the offending field; empty for the root.
    pub path: String,
    pub constraint: Constraint,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "payload {}", self.constraint)
        } else {
            write!(f, "`{}` {}", self.path, self.constraint)
        }
    }
}

/// A payload did not match its schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{schema} is invalid: {}", join_issues(.issues))]
pub struct ValidationError {
    pub schema: &'static str,
    pub issues: Vec<Issue>,
}

impl ValidationError {
    /// The first violation, in schema field order.
    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }

    /// Whether `path` failed with `constraint`.
    pub fn has(&self, path: &str, constraint: &Constraint) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.path == path && &issue.constraint == constraint)
    }
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Schema {
    /// Validate `value`, returning it with keys outside the schema removed.
    pub fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        let mut issues = Vec::new();
        let stripped = self.check(value, "", &mut issues);
        match stripped {
            Some(object) if issues.is_empty() => Ok(Value::Object(object)),
            _ => Err(ValidationError {
                schema: self.name,
                issues,
            }),
        }
    }

    fn check(&self, value: &Value, prefix: &str, issues: &mut Vec<Issue>) -> Option<Map<String, Value>> {
        let Some(object) = value.as_object() else {
            issues.push(Issue {
                path: prefix.to_owned(),
                constraint: Constraint::ExpectedObject,
            });
            return None;
        };

        let mut out = Map::new();
        for field in self.fields {
            let path = if prefix.is_empty() {
                field.name.to_owned()
            } else {
                format!("{prefix}.{}", field.name)
            };
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        issues.push(Issue {
                            path,
                            constraint: Constraint::Required,
                        });
                    }
                }
                Some(value) => {
                    if let Some(checked) = field.rule.check(value, &path, issues) {
                        out.insert(field.name.to_owned(), checked);
                    }
                }
            }
        }
        Some(out)
    }
}

impl Rule {
    fn check(&self, value: &Value, path: &str, issues: &mut Vec<Issue>) -> Option<Value> {
        let violation = match self {
            Rule::Object(schema) => {
                return schema.check(value, path, issues).map(Value::Object);
            }
            Rule::String => expect_str(value).err(),
            Rule::Number => (!value.is_number()).then_some(Constraint::ExpectedNumber),
            Rule::PositiveNumber => match value.as_f64() {
                None => Some(Constraint::ExpectedNumber),
                Some(n) if n > 0.0 => None,
                Some(_) => Some(Constraint::NotPositive),
            },
            Rule::Url => match expect_str(value) {
                Ok(s) if url::Url::parse(s).is_ok() => None,
                Ok(_) => Some(Constraint::InvalidUrl),
                Err(e) => Some(e),
            },
            Rule::Email => match expect_str(value) {
                Ok(s) if is_email(s) => None,
                Ok(_) => Some(Constraint::InvalidEmail),
                Err(e) => Some(e),
            },
            Rule::Literal(expected) => match expect_str(value) {
                Ok(s) if s == *expected => None,
                _ => Some(Constraint::Literal(*expected)),
            },
            Rule::OneOf(allowed) => match expect_str(value) {
                Ok(s) if allowed.iter().any(|a| *a == s) => None,
                _ => Some(Constraint::OneOf(*allowed)),
            },
        };

        match violation {
            None => Some(value.clone()),
            Some(constraint) => {
                issues.push(Issue {
                    path: path.to_owned(),
                    constraint,
                });
                None
            }
        }
    }
}

fn expect_str(value: &Value) -> Result<&str, Constraint> {
    value.as_str().ok_or(Constraint::ExpectedString)
}

/// Pragmatic address check: a dot-atom local part, `@`, and a dotted domain
/// whose last label is at least two letters.
fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.rsplit_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._'+-".contains(c));

    let labels: Vec<&str> = domain.split('.').collect();
    let domain_ok = labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
        && labels
            .last()
            .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    local_ok && domain_ok
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    static INNER: Schema = Schema {
        name: "inner",
        fields: &[Field::required("email", Rule::Email)],
    };

    static OUTER: Schema = Schema {
        name: "outer",
        fields: &[
            Field::required("amount", Rule::PositiveNumber),
            Field::optional("note", Rule::String),
            Field::required("kind", Rule::Literal("A")),
            Field::required("inner", Rule::Object(&INNER)),
        ],
    };

    #[test]
    fn strips_unknown_keys() {
        let value = json!({
            "amount": 10,
            "kind": "A",
            "inner": { "email": "a@b.co", "junk": 1 },
            "extra": true,
        });
        let out = OUTER.validate(&value).unwrap();
        assert_eq!(out, json!({ "amount": 10, "kind": "A", "inner": { "email": "a@b.co" } }));
    }

    #[test]
    fn collects_every_issue_with_paths() {
        let value = json!({ "amount": 0, "kind": "B", "inner": { "email": "nope" } });
        let err = OUTER.validate(&value).unwrap_err();
        assert_eq!(err.schema, "outer");
        assert_eq!(err.issues.len(), 3);
        assert!(err.has("amount", &Constraint::NotPositive));
        assert!(err.has("kind", &Constraint::Literal("A")));
        assert!(err.has("inner.email", &Constraint::InvalidEmail));
    }

    #[test]
    fn missing_and_null_required_fields() {
        let err = OUTER.validate(&json!({ "amount": null, "kind": "A" })).unwrap_err();
        assert!(err.has("amount", &Constraint::Required));
        assert!(err.has("inner", &Constraint::Required));
    }

    #[test]
    fn null_optional_field_is_absent() {
        let value = json!({ "amount": 1.5, "kind": "A", "note": null, "inner": { "email": "x@y.ci" } });
        let out = OUTER.validate(&value).unwrap();
        assert!(out.get("note").is_none());
    }

    #[test]
    fn wrong_types_are_reported() {
        let value = json!({ "amount": "10", "kind": "A", "note": 3, "inner": [] });
        let err = OUTER.validate(&value).unwrap_err();
        assert!(err.has("amount", &Constraint::ExpectedNumber));
        assert!(err.has("note", &Constraint::ExpectedString));
        assert!(err.has("inner", &Constraint::ExpectedObject));
    }

    #[test]
    fn root_must_be_an_object() {
        let err = OUTER.validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.first().unwrap().path, "");
        assert_eq!(err.first().unwrap().constraint, Constraint::ExpectedObject);
    }

    #[test]
    fn error_message_lists_paths() {
        let err = OUTER.validate(&json!({ "amount": -1, "kind": "A", "inner": {} })).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("outer is invalid"), "{message}");
        assert!(message.contains("`amount` must be greater than 0"), "{message}");
        assert!(message.contains("`inner.email` is required"), "{message}");
    }

    #[test]
    fn email_check() {
        assert!(is_email("tapha.seck@hubsocial.org"));
        assert!(is_email("first+tag@sub.example.ci"));
        assert!(!is_email("no-at-sign"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("a@localhost"));
        assert!(!is_email("a..b@example.com"));
        assert!(!is_email("a b@example.com"));
        assert!(!is_email("a@example.c0m"));
    }
}
