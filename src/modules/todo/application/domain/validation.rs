use chrono::NaiveDate;

pub const TITLE_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_valid_title(title: Option<&str>) -> bool {
    match title.map(str::trim) {
        Some(t) => !t.is_empty() && t.chars().count() <= TITLE_MAX_LEN,
        None => false,
    }
}

/// Absent, or not before `today`.
pub fn is_valid_due_date(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.map_or(true, |d| d >= today)
}

/// Form fields a validation failure can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoField {
    Title,
    Description,
    DueDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be at most {0} characters")]
    TitleTooLong(usize),

    #[error("Description must be at most {0} characters")]
    DescriptionTooLong(usize),

    #[error("Due date is not a valid date")]
    UnparseableDueDate,

    #[error("Due date must be today or later")]
    DueDateInPast,
}

impl TodoValidationError {
    pub fn field(&self) -> TodoField {
        match self {
            Self::TitleRequired | Self::TitleTooLong(_) => TodoField::Title,
            Self::DescriptionTooLong(_) => TodoField::Description,
            Self::UnparseableDueDate | Self::DueDateInPast => TodoField::DueDate,
        }
    }
}

/// Every failing field of one submission, at most one error per field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct TodoValidationErrors(pub Vec<TodoValidationError>);

impl TodoValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &TodoValidationError> {
        self.0.iter()
    }

    pub fn for_field(&self, field: TodoField) -> Option<&TodoValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }
}

/// Raw create/edit form values, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoInput {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

/// A validated submission, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl TodoDraft {
    pub fn parse(input: &TodoInput, today: NaiveDate) -> Result<Self, TodoValidationErrors> {
        let mut errors = Vec::new();

        let title = input.title.trim();
        if title.is_empty() {
            errors.push(TodoValidationError::TitleRequired);
        } else if !is_valid_title(Some(title)) {
            errors.push(TodoValidationError::TitleTooLong(TITLE_MAX_LEN));
        }

        let description = Some(input.description.trim()).filter(|d| !d.is_empty());
        if description.is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_LEN) {
            errors.push(TodoValidationError::DescriptionTooLong(DESCRIPTION_MAX_LEN));
        }

        let due_date = match input.due_date.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(TodoValidationError::UnparseableDueDate);
                    None
                }
            },
        };
        if !is_valid_due_date(due_date, today) {
            errors.push(TodoValidationError::DueDateInPast);
        }

        if !errors.is_empty() {
            return Err(TodoValidationErrors(errors));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.map(str::to_string),
            due_date,
        })
    }
}
