//! Roster Service
//!
//! Loads and parses the roster document for a session. The document is
//! XML in one of two shapes: repeated `Student` elements with ID and
//! name fields, or repeated `name` elements holding bare display names.
//! The parser probes for `Student` entries first and falls back to the
//! `name` shape, so consumers tolerate either document.
//!
//! Load failures never propagate: the service substitutes the fallback
//! roster and reports the failure as an advisory for user messaging.

use crate::models::roster::{Roster, RosterError};
use crate::models::student::Student;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

/// Where the roster document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// Remote document fetched over HTTP(S)
    Url(Url),

    /// Local document read from disk
    File(PathBuf),
}

impl RosterSource {
    /// Classify a raw source string as URL or file path
    ///
    /// Only http/https URLs count as remote; anything else (including
    /// strings that happen to parse as exotic URL schemes, like Windows
    /// drive paths) is treated as a file path.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => RosterSource::Url(url),
            _ => RosterSource::File(PathBuf::from(raw)),
        }
    }
}

impl std::fmt::Display for RosterSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterSource::Url(url) => write!(f, "{}", url),
            RosterSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Result of a roster load: always a usable roster, plus the error that
/// forced the fallback when the document could not be used
#[derive(Debug)]
pub struct RosterLoadOutcome {
    pub roster: Roster,
    pub error: Option<RosterLoadError>,
}

/// Roster loading errors
///
/// All variants render with the user-facing "Error loading roster"
/// prefix; the detail is for logs and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterLoadError {
    #[error("Error loading roster: request failed: {0}")]
    Fetch(String),

    #[error("Error loading roster: unreadable file {path}: {detail}")]
    Read { path: String, detail: String },

    #[error("Error loading roster: malformed document: {0}")]
    Parse(String),

    #[error("Error loading roster: document contains no students")]
    EmptyDocument,
}

/// Service responsible for loading the roster document
///
/// The document acts as a temporary data source until a relational
/// store is implemented.
#[derive(Debug, Clone, Default)]
pub struct RosterService {
    http: reqwest::Client,
}

impl RosterService {
    /// Create a new roster service
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the roster, substituting the fallback list on any failure
    pub async fn load(&self, source: &RosterSource) -> RosterLoadOutcome {
        match self.try_load(source).await {
            Ok(roster) => {
                info!(source = %source, students = roster.len(), "Roster loaded");
                RosterLoadOutcome {
                    roster,
                    error: None,
                }
            }
            Err(error) => {
                warn!(source = %source, %error, "Roster load failed, using fallback roster");
                RosterLoadOutcome {
                    roster: Roster::fallback(),
                    error: Some(error),
                }
            }
        }
    }

    async fn try_load(&self, source: &RosterSource) -> Result<Roster, RosterLoadError> {
        let document = self.fetch_document(source).await?;
        parse_roster(&document)
    }

    async fn fetch_document(&self, source: &RosterSource) -> Result<String, RosterLoadError> {
        match source {
            RosterSource::Url(url) => {
                let response = self
                    .http
                    .get(url.clone())
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(|e| RosterLoadError::Fetch(e.to_string()))?;
                response
                    .text()
                    .await
                    .map_err(|e| RosterLoadError::Fetch(e.to_string()))
            }
            RosterSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                RosterLoadError::Read {
                    path: path.display().to_string(),
                    detail: e.to_string(),
                }
            }),
        }
    }
}

/// Parse a roster document, probing for either supported shape
pub fn parse_roster(xml: &str) -> Result<Roster, RosterLoadError> {
    let students = parse_student_elements(xml)?;
    if !students.is_empty() {
        return Roster::new(students).map_err(|e: RosterError| RosterLoadError::Parse(e.to_string()));
    }

    let names = parse_name_elements(xml)?;
    if names.is_empty() {
        return Err(RosterLoadError::EmptyDocument);
    }
    Ok(Roster::from_display_names(names))
}

/// Fields of a `Student` element in the structured roster shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StudentField {
    Id,
    FirstName,
    LastName,
    ClassId,
    ClassName,
}

impl StudentField {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"ID" => Some(StudentField::Id),
            b"FirstName" => Some(StudentField::FirstName),
            b"LastName" => Some(StudentField::LastName),
            b"ClassID" => Some(StudentField::ClassId),
            b"ClassName" => Some(StudentField::ClassName),
            _ => None,
        }
    }
}

fn parse_int(field: &str, value: &str) -> Result<i32, RosterLoadError> {
    value
        .trim()
        .parse()
        .map_err(|_| RosterLoadError::Parse(format!("invalid integer in {}: {:?}", field, value)))
}

/// Extract repeated `Student` elements (structured shape)
fn parse_student_elements(xml: &str) -> Result<Vec<Student>, RosterLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut students = Vec::new();
    let mut current: Option<Student> = None;
    let mut field: Option<StudentField> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => match start.name().as_ref() {
                b"Student" => {
                    current = Some(Student {
                        id: None,
                        first_name: String::new(),
                        last_name: String::new(),
                        class_id: None,
                        class_name: None,
                    });
                    field = None;
                }
                tag => field = StudentField::from_tag(tag),
            },
            Ok(Event::Text(text)) => {
                if let (Some(student), Some(field)) = (current.as_mut(), field) {
                    let value = text
                        .unescape()
                        .map_err(|e| RosterLoadError::Parse(e.to_string()))?
                        .into_owned();
                    match field {
                        StudentField::Id => student.id = Some(parse_int("ID", &value)?),
                        StudentField::FirstName => student.first_name = value,
                        StudentField::LastName => student.last_name = value,
                        StudentField::ClassId => {
                            student.class_id = Some(parse_int("ClassID", &value)?)
                        }
                        StudentField::ClassName => student.class_name = Some(value),
                    }
                }
            }
            Ok(Event::End(end)) => {
                if end.name().as_ref() == b"Student" {
                    if let Some(student) = current.take() {
                        students.push(student);
                    }
                }
                field = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(RosterLoadError::Parse(e.to_string())),
            _ => {}
        }
    }

    Ok(students)
}

/// Extract repeated `name` elements (flat display-name shape)
fn parse_name_elements(xml: &str) -> Result<Vec<String>, RosterLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut names = Vec::new();
    let mut in_name = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                in_name = start.name().as_ref() == b"name";
            }
            Ok(Event::Text(text)) => {
                if in_name {
                    let value = text
                        .unescape()
                        .map_err(|e| RosterLoadError::Parse(e.to_string()))?
                        .into_owned();
                    if !value.trim().is_empty() {
                        names.push(value.trim().to_string());
                    }
                }
            }
            Ok(Event::End(_)) => in_name = false,
            Ok(Event::Eof) => break,
            Err(e) => return Err(RosterLoadError::Parse(e.to_string())),
            _ => {}
        }
    }

    Ok(names)
}
