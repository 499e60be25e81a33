use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Largest row offset the database accepts (a signed 64-bit integer).
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Which todos a listing includes. A title search wins over a completion filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Completed(bool),
    TitleContains(String),
}

impl TodoFilter {
    pub fn from_params(completed: Option<bool>, search: Option<&str>) -> Self {
        match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => TodoFilter::TitleContains(term.to_string()),
            None => completed.map_or(TodoFilter::All, TodoFilter::Completed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    DueDate,
    Title,
    Completed,
}

impl TodoSortField {
    /// Unknown names fall back to `createdAt`.
    pub fn parse(value: &str) -> Self {
        match value {
            "updatedAt" => Self::UpdatedAt,
            "dueDate" => Self::DueDate,
            "title" => Self::Title,
            "completed" => Self::Completed,
            _ => Self::CreatedAt,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::DueDate => "dueDate",
            Self::Title => "title",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoSort {
    pub field: TodoSortField,
    pub direction: SortDirection,
}

impl TodoSort {
    pub fn from_params(field: Option<&str>, direction: Option<&str>) -> Self {
        Self {
            field: field.map(TodoSortField::parse).unwrap_or_default(),
            direction: direction.map(SortDirection::parse).unwrap_or_default(),
        }
    }
}

/// Zero-based page index plus a page size clamped to `1..=MAX_PAGE_SIZE`.
/// The index is capped so that `offset()` never exceeds `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, size: Option<u64>) -> Self {
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        Self {
            page: page.unwrap_or(0).min(MAX_OFFSET / size),
            size,
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages: total_items.div_ceil(request.size),
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
