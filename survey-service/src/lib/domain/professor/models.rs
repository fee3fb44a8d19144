use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::professor::errors::ProfessorError;
use crate::domain::professor::errors::ProfessorIdError;
use crate::domain::professor::errors::ProfessorNameError;
use crate::domain::professor::errors::RatingError;

/// Professor aggregate entity.
///
/// Owns an ordered list of ratings. New ratings go to the end; removal is
/// either the most recent entry or a single position.
#[derive(Debug, Clone, PartialEq)]
pub struct Professor {
    pub id: ProfessorId,
    pub name: ProfessorName,
    pub ratings: Vec<Rating>,
    pub created_at: DateTime<Utc>,
}

impl Professor {
    /// Build a professor with no ratings yet.
    pub fn new(name: ProfessorName) -> Self {
        Self {
            id: ProfessorId::new(),
            name,
            ratings: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a rating after all existing ones.
    pub fn add_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    /// Remove a rating according to `removal`.
    ///
    /// # Returns
    /// The removed rating, or `None` when popping an empty list
    ///
    /// # Errors
    /// * `InvalidRatingIndex` - Index is negative or past the end of the list
    pub fn remove_rating(
        &mut self,
        removal: RatingRemoval,
    ) -> Result<Option<Rating>, ProfessorError> {
        match removal {
            RatingRemoval::Last => Ok(self.ratings.pop()),
            RatingRemoval::At(index) => {
                let len = self.ratings.len();
                let position = usize::try_from(index)
                    .ok()
                    .filter(|position| *position < len)
                    .ok_or(ProfessorError::InvalidRatingIndex { index, len })?;
                Ok(Some(self.ratings.remove(position)))
            }
        }
    }
}

/// Professor unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfessorId(pub Uuid);

impl ProfessorId {
    /// Generate a new random professor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a professor ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ProfessorIdError> {
        Uuid::parse_str(s)
            .map(ProfessorId)
            .map_err(|e| ProfessorIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ProfessorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfessorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Professor name value type
///
/// Any non-blank string. Compared by exact match, so no trimming or case folding
/// is applied to the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessorName(String);

impl ProfessorName {
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    pub fn new(name: String) -> Result<Self, ProfessorNameError> {
        if name.trim().is_empty() {
            return Err(ProfessorNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfessorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single student verdict on a professor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Recommended,
    NotRecommended,
}

impl Rating {
    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Recommended => "recommended",
            Rating::NotRecommended => "not recommended",
        }
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(Rating::Recommended),
            "not recommended" => Ok(Rating::NotRecommended),
            other => Err(RatingError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rating to drop from a professor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingRemoval {
    /// The most recently added rating.
    Last,
    /// The rating at a zero-based position, as sent by the client.
    At(i64),
}

/// Command to create a new professor
#[derive(Debug)]
pub struct CreateProfessorCommand {
    pub name: ProfessorName,
}

impl CreateProfessorCommand {
    pub fn new(name: ProfessorName) -> Self {
        Self { name }
    }
}

/// Command to replace a professor's name and ratings wholesale.
#[derive(Debug)]
pub struct UpdateProfessorCommand {
    pub name: ProfessorName,
    pub ratings: Vec<Rating>,
}
